use crate::matrix::check_square;

/// Tiled matrix multiplication, block order ii-kk-jj with i-k-j inside.
///
/// Combines the stride-1 inner loop of
/// [`matmul_naive_ikj`](crate::matrix::naive_ikj::matmul_naive_ikj) with
/// blocking: the tile of A, the tile of B and the tile of C touched by one
/// block triple fit in cache together, and the inner loop over `j` runs
/// contiguously over a row segment of B and C.
///
/// `c` is accumulated into (C += A * B).
///
/// # Panics
///
/// Panics if `n == 0`, `tile_size == 0`, or any slice is not `n * n` long.
pub fn matmul_tiled_ikj(a: &[f64], b: &[f64], c: &mut [f64], n: usize, tile_size: usize) {
    check_square(a, b, c, n);
    assert!(tile_size > 0, "tile size must be positive");

    for ii in (0..n).step_by(tile_size) {
        let i_end = (ii + tile_size).min(n);
        for kk in (0..n).step_by(tile_size) {
            let k_end = (kk + tile_size).min(n);
            for jj in (0..n).step_by(tile_size) {
                let j_end = (jj + tile_size).min(n);

                for i in ii..i_end {
                    let c_row = &mut c[i * n + jj..i * n + j_end];
                    for k in kk..k_end {
                        let a_ik = a[i * n + k];
                        let b_row = &b[k * n + jj..k * n + j_end];
                        for (c_ij, &b_kj) in c_row.iter_mut().zip(b_row) {
                            *c_ij += a_ik * b_kj;
                        }
                    }
                }
            }
        }
    }
}
