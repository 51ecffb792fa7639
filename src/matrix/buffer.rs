//! Owned square matrix buffer.

use std::ops::{Index, IndexMut};

use crate::error::{Error, Result};

/// A dense `n × n` matrix of `f64` stored as one contiguous row-major
/// allocation of exactly `n * n` elements.
///
/// Allocation is fallible: asking for a matrix the system cannot hold
/// returns [`Error::Allocation`] instead of aborting the process.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    n: usize,
    data: Box<[f64]>,
}

impl Matrix {
    /// Allocate an `n × n` matrix filled with zeros.
    ///
    /// # Example
    ///
    /// ```
    /// use matmul_tiling::Matrix;
    ///
    /// let m = Matrix::zeros(3).unwrap();
    /// assert_eq!(m.n(), 3);
    /// assert_eq!(m.as_slice(), &[0.0; 9]);
    /// ```
    pub fn zeros(n: usize) -> Result<Self> {
        let len = checked_len(n)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|source| Error::Allocation { n, source })?;
        data.resize(len, 0.0);
        Ok(Self {
            n,
            data: data.into_boxed_slice(),
        })
    }

    /// Wrap an existing row-major buffer. `data.len()` must be `n * n`.
    pub fn from_vec(n: usize, data: Vec<f64>) -> Result<Self> {
        let expected = checked_len(n)?;
        if data.len() != expected {
            return Err(Error::LengthMismatch {
                n,
                expected,
                len: data.len(),
            });
        }
        Ok(Self {
            n,
            data: data.into_boxed_slice(),
        })
    }

    /// The `n × n` identity matrix.
    pub fn identity(n: usize) -> Result<Self> {
        let mut m = Self::zeros(n)?;
        for i in 0..n {
            m[(i, i)] = 1.0;
        }
        Ok(m)
    }

    /// Dimension of the matrix.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of stored elements (`n * n`).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false: a matrix has at least one element.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Bytes held by the element buffer.
    pub fn size_bytes(&self) -> usize {
        self.data.len() * size_of::<f64>()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Reset every element to zero without reallocating.
    pub fn clear(&mut self) {
        self.data.fill(0.0);
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.data.into_vec()
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(
            row < self.n && col < self.n,
            "index ({row}, {col}) out of bounds for {0}x{0}",
            self.n
        );
        &self.data[row * self.n + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        assert!(
            row < self.n && col < self.n,
            "index ({row}, {col}) out of bounds for {0}x{0}",
            self.n
        );
        &mut self.data[row * self.n + col]
    }
}

/// `n * n`, rejecting zero and sizes whose byte count overflows.
fn checked_len(n: usize) -> Result<usize> {
    if n == 0 {
        return Err(Error::InvalidDimension);
    }
    n.checked_mul(n)
        .filter(|len| len.checked_mul(size_of::<f64>()).is_some())
        .ok_or(Error::SizeOverflow { n })
}
