use super::check_square;

/// Naive square matrix multiplication using i-j-k loop order.
///
/// This is the textbook triple loop. The innermost loop walks B down a
/// column (stride `n`), so every step touches a new cache line once `n`
/// gets large.
///
/// `c` is accumulated into (C += A * B); zero it first for a plain product.
///
/// # Arguments
///
/// * `a` - Matrix A (n × n), row-major
/// * `b` - Matrix B (n × n), row-major
/// * `c` - Matrix C (n × n), row-major, accumulated into
/// * `n` - Dimension of all three matrices
///
/// # Panics
///
/// Panics if `n == 0` or any slice is not `n * n` long.
pub fn matmul_naive_ijk(a: &[f64], b: &[f64], c: &mut [f64], n: usize) {
    check_square(a, b, c, n);

    for i in 0..n {
        for j in 0..n {
            for k in 0..n {
                c[i * n + j] += a[i * n + k] * b[k * n + j];
            }
        }
    }
}
