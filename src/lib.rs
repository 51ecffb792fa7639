//! Loop order vs. cache tiling for square matrix multiplication.
//!
//! Four scalar kernels compute the same product `C += A * B` on flat
//! row-major `n × n` buffers of `f64`, and differ only in how they walk
//! memory:
//!
//! | Variant | Kernel | Inner access to B |
//! |---------|--------|-------------------|
//! | naive | [`matmul_naive_ijk`] | column, stride `n` |
//! | naive-interchanged | [`matmul_naive_ikj`] | row, stride 1 |
//! | tiled | [`matmul_tiled_ijk`] | column, within a tile |
//! | tiled-interchanged | [`matmul_tiled_ikj`] | row, within a tile |
//!
//! No intrinsics and no threads: the stride-1 loops are left to the
//! compiler's auto-vectorizer.
//!
//! ## Usage
//!
//! ```
//! use matmul_tiling::{Matrix, Variant, multiply};
//!
//! let a = Matrix::from_vec(2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
//! let b = Matrix::from_vec(2, vec![5.0, 6.0, 7.0, 8.0]).unwrap();
//! let mut c = Matrix::zeros(2).unwrap();
//!
//! multiply(Variant::TiledInterchanged, &a, &b, &mut c, 64).unwrap();
//! assert_eq!(c.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
//! ```
//!
//! The benchmark side lives in [`driver`]: it allocates the three
//! matrices, fills A and B from an [`Initializer`], times repeated calls and
//! reports `2n³` operations per call and `3n²·8` bytes of working memory.

pub mod blocked;
pub mod driver;
pub mod error;
pub mod matrix;
pub mod report;
pub mod variant;

pub use blocked::DEFAULT_TILE_SIZE;
pub use blocked::tiled_ijk::matmul_tiled_ijk;
pub use blocked::tiled_ikj::matmul_tiled_ikj;
pub use driver::{BenchConfig, CANONICAL_SIZES, Measurement, Outcome};
pub use error::{Error, Result};
pub use matrix::naive_ijk::matmul_naive_ijk;
pub use matrix::naive_ikj::matmul_naive_ikj;
pub use matrix::{Initializer, Matrix, initialize_matrix};
pub use variant::Variant;

/// Matrix multiply: C += A * B using the chosen variant.
///
/// Unlike the slice kernels this checks its inputs and reports mismatches
/// as errors. C is accumulated into; call [`Matrix::clear`] first for a
/// plain product. `tile_size` only matters for the tiled variants.
pub fn multiply(
    variant: Variant,
    a: &Matrix,
    b: &Matrix,
    c: &mut Matrix,
    tile_size: usize,
) -> Result<()> {
    let n = a.n();
    if b.n() != n {
        return Err(Error::DimensionMismatch {
            name: "B",
            expected: n,
            actual: b.n(),
        });
    }
    if c.n() != n {
        return Err(Error::DimensionMismatch {
            name: "C",
            expected: n,
            actual: c.n(),
        });
    }
    if variant.is_tiled() && tile_size == 0 {
        return Err(Error::InvalidTileSize);
    }

    variant.run(a.as_slice(), b.as_slice(), c.as_mut_slice(), n, tile_size);
    Ok(())
}
