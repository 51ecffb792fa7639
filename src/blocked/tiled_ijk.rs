use crate::matrix::check_square;

/// Tiled matrix multiplication, block order ii-jj-kk with i-j-k inside.
///
/// Inside a block the access pattern is the same as
/// [`matmul_naive_ijk`](crate::matrix::naive_ijk::matmul_naive_ijk): B is
/// still read down a column. Blocking only bounds how much of B that column
/// walk covers before it is reused.
///
/// `c` is accumulated into (C += A * B).
///
/// # Panics
///
/// Panics if `n == 0`, `tile_size == 0`, or any slice is not `n * n` long.
pub fn matmul_tiled_ijk(a: &[f64], b: &[f64], c: &mut [f64], n: usize, tile_size: usize) {
    check_square(a, b, c, n);
    assert!(tile_size > 0, "tile size must be positive");

    for ii in (0..n).step_by(tile_size) {
        let i_end = (ii + tile_size).min(n);
        for jj in (0..n).step_by(tile_size) {
            let j_end = (jj + tile_size).min(n);
            for kk in (0..n).step_by(tile_size) {
                let k_end = (kk + tile_size).min(n);

                for i in ii..i_end {
                    for j in jj..j_end {
                        for k in kk..k_end {
                            c[i * n + j] += a[i * n + k] * b[k * n + j];
                        }
                    }
                }
            }
        }
    }
}
