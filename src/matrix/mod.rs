//! Matrix storage, random initialization and the unblocked kernels.
//!
//! Everything here works on flat row-major `n × n` buffers of `f64`:
//! element `(row, col)` lives at `row * n + col`.

pub mod buffer;
pub mod init;
pub mod naive_ijk;
pub mod naive_ikj;

pub use buffer::Matrix;
pub use init::{INIT_HIGH, INIT_LOW, Initializer, initialize_matrix};

/// Precondition check shared by every kernel.
///
/// Kernels are called in tight benchmark loops with inputs the driver has
/// already validated, so a violation here is a programming error.
#[inline]
pub(crate) fn check_square(a: &[f64], b: &[f64], c: &[f64], n: usize) {
    assert!(n > 0, "matrix dimension must be positive");
    let len = n
        .checked_mul(n)
        .unwrap_or_else(|| panic!("matrix size {n}x{n} overflows usize"));
    assert_eq!(a.len(), len, "A: expected {}x{}={} elements", n, n, len);
    assert_eq!(b.len(), len, "B: expected {}x{}={} elements", n, n, len);
    assert_eq!(c.len(), len, "C: expected {}x{}={} elements", n, n, len);
}
