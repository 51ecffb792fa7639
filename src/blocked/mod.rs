//! Cache-blocked (tiled) matrix multiplication.
//!
//! Both kernels cut the `n × n × n` iteration space into cubes of edge
//! `tile_size` and finish one cube before moving to the next, so the three
//! operand tiles can stay resident in a fast cache level. Tiles at the far
//! edge are clipped against `n`; there is no padding.
//!
//! Available implementations:
//! - `tiled_ijk`: block order (ii, jj, kk), inner order i-j-k
//! - `tiled_ikj`: block order (ii, kk, jj), inner order i-k-j

pub mod tiled_ijk;
pub mod tiled_ikj;

/// Default tile edge. Three 64×64 tiles of `f64` are 96 KiB.
pub const DEFAULT_TILE_SIZE: usize = 64;
