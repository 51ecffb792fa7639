//! Random input generation.
//!
//! The random source is always passed in explicitly; nothing here keeps
//! process-wide generator state.

use rand::distributions::{Distribution, Uniform};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::Matrix;

/// Lower bound (inclusive) of generated element values.
pub const INIT_LOW: f64 = 0.0;
/// Upper bound (exclusive) of generated element values.
pub const INIT_HIGH: f64 = 10.0;

/// Fill an `n × n` row-major buffer with independent values drawn uniformly
/// from `[INIT_LOW, INIT_HIGH)`.
///
/// # Panics
///
/// Panics if `data.len() != n * n`.
pub fn initialize_matrix<R: Rng + ?Sized>(data: &mut [f64], n: usize, rng: &mut R) {
    assert_eq!(data.len(), n * n, "expected {}x{}={} elements", n, n, n * n);
    let dist = Uniform::new(INIT_LOW, INIT_HIGH);
    for x in data.iter_mut() {
        *x = dist.sample(rng);
    }
}

/// Owns the generator used to fill benchmark inputs.
///
/// Seeded initializers produce the same matrices on every run, which the
/// tests rely on. Unseeded ones draw fresh values each run; timings don't
/// depend on the values, only on their range.
pub struct Initializer {
    rng: ChaCha8Rng,
    dist: Uniform<f64>,
}

impl Initializer {
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::with_rng(ChaCha8Rng::from_entropy())
    }

    /// Seeded if `seed` is given, otherwise from entropy.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }

    fn with_rng(rng: ChaCha8Rng) -> Self {
        Self {
            rng,
            dist: Uniform::new(INIT_LOW, INIT_HIGH),
        }
    }

    /// Overwrite every element of `matrix` with a fresh random value.
    pub fn fill(&mut self, matrix: &mut Matrix) {
        for x in matrix.as_mut_slice() {
            *x = self.dist.sample(&mut self.rng);
        }
    }

    /// Allocate and fill a new `n × n` matrix.
    pub fn random_matrix(&mut self, n: usize) -> crate::Result<Matrix> {
        let mut m = Matrix::zeros(n)?;
        self.fill(&mut m);
        Ok(m)
    }
}
