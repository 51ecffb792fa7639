//! Error types shared by the matrix buffer, the kernels' checked entry point
//! and the benchmark driver.

use std::collections::TryReserveError;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The allocator could not provide `n * n` doubles.
    #[error("failed to allocate {n}x{n} matrix: {source}")]
    Allocation {
        n: usize,
        #[source]
        source: TryReserveError,
    },

    /// `n * n * size_of::<f64>()` does not fit in `usize`.
    #[error("matrix size {n}x{n} overflows the address space")]
    SizeOverflow { n: usize },

    #[error("matrix dimension must be positive")]
    InvalidDimension,

    #[error("tile size must be positive")]
    InvalidTileSize,

    #[error("expected {expected} elements for a {n}x{n} matrix, got {len}")]
    LengthMismatch {
        n: usize,
        expected: usize,
        len: usize,
    },

    #[error("{name}: expected {expected}x{expected}, got {actual}x{actual}")]
    DimensionMismatch {
        name: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("unknown variant '{0}' (expected naive, naive-interchanged, tiled or tiled-interchanged)")]
    UnknownVariant(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("result mismatch for n={n} at index {index}: expected {expected}, got {actual}")]
    Verification {
        n: usize,
        index: usize,
        expected: f64,
        actual: f64,
    },
}
