use super::check_square;

/// Cache-friendly square matrix multiplication using i-k-j loop order.
///
/// Swapping the j and k loops makes the innermost loop walk B and C along
/// a row (stride 1), which the compiler can vectorize. There is no blocking,
/// so for large `n` a single row of B no longer stays in cache between
/// uses.
///
/// `c` is accumulated into (C += A * B). This is also the reference the
/// benchmark driver verifies the other variants against.
///
/// # Panics
///
/// Panics if `n == 0` or any slice is not `n * n` long.
pub fn matmul_naive_ikj(a: &[f64], b: &[f64], c: &mut [f64], n: usize) {
    check_square(a, b, c, n);

    for i in 0..n {
        let c_row = &mut c[i * n..(i + 1) * n];
        for k in 0..n {
            let a_ik = a[i * n + k];
            let b_row = &b[k * n..(k + 1) * n];
            for j in 0..n {
                c_row[j] += a_ik * b_row[j];
            }
        }
    }
}
