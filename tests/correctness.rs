use matmul_tiling::{
    Error, Initializer, Matrix, Variant, matmul_naive_ijk, matmul_naive_ikj, matmul_tiled_ijk,
    matmul_tiled_ikj, multiply,
};

fn assert_matrices_equal(expected: &[f64], actual: &[f64], name: &str) {
    assert_eq!(expected.len(), actual.len(), "{}: length mismatch", name);
    for i in 0..expected.len() {
        let tol = 1e-9 * expected[i].abs().max(1.0);
        assert!(
            (expected[i] - actual[i]).abs() <= tol,
            "{}: mismatch at index {}: expected {}, got {}",
            name,
            i,
            expected[i],
            actual[i]
        );
    }
}

/// Run `variant` into a freshly zeroed C.
fn product(variant: Variant, a: &[f64], b: &[f64], n: usize, tile: usize) -> Vec<f64> {
    let mut c = vec![0.0; n * n];
    variant.run(a, b, &mut c, n, tile);
    c
}

fn patterned(n: usize, modulus: usize) -> Vec<f64> {
    (0..n * n).map(|i| (i % modulus) as f64).collect()
}

// ============================================================
// Known small cases
// ============================================================

#[test]
fn test_2x2_known_product() {
    let a = vec![1.0, 2.0, 3.0, 4.0];
    let b = vec![5.0, 6.0, 7.0, 8.0];

    for variant in Variant::ALL {
        let c = product(variant, &a, &b, 2, 64);
        assert_eq!(c, vec![19.0, 22.0, 43.0, 50.0], "{}", variant);
    }
}

#[test]
fn test_1x1() {
    for variant in Variant::ALL {
        let c = product(variant, &[3.0], &[4.0], 1, 64);
        assert_eq!(c, vec![12.0], "{}", variant);
    }
}

#[test]
fn test_3x3_known_product() {
    let a = patterned(3, 10); // 0..9
    let b = vec![1.0, 0.0, 2.0, 0.0, 1.0, 0.0, 3.0, 0.0, 1.0];

    let mut c = vec![0.0; 9];
    matmul_naive_ijk(&a, &b, &mut c, 3);
    assert_eq!(c, vec![6.0, 1.0, 2.0, 18.0, 4.0, 11.0, 30.0, 7.0, 20.0]);
}

// ============================================================
// Equivalence across variants
// ============================================================

#[test]
fn test_all_variants_agree_on_random_inputs() {
    let mut init = Initializer::from_seed(2024);
    for n in [2, 5, 16, 31, 64, 65, 100] {
        let a = init.random_matrix(n).unwrap();
        let b = init.random_matrix(n).unwrap();
        let reference = product(Variant::Naive, a.as_slice(), b.as_slice(), n, 64);

        for variant in Variant::ALL {
            let c = product(variant, a.as_slice(), b.as_slice(), n, 16);
            assert_matrices_equal(&reference, &c, &format!("{}_n{}", variant, n));
        }
    }
}

// ============================================================
// Tile boundary tests
// ============================================================

#[test]
fn test_tile_boundary_n10_tile4() {
    let a = patterned(10, 7);
    let b = patterned(10, 11);
    let reference = product(Variant::Naive, &a, &b, 10, 4);

    let mut c_tiled = vec![0.0; 100];
    let mut c_tiled_ikj = vec![0.0; 100];
    matmul_tiled_ijk(&a, &b, &mut c_tiled, 10, 4);
    matmul_tiled_ikj(&a, &b, &mut c_tiled_ikj, 10, 4);

    assert_matrices_equal(&reference, &c_tiled, "tiled_n10_t4");
    assert_matrices_equal(&reference, &c_tiled_ikj, "tiled_ikj_n10_t4");
}

#[test]
fn test_tile_sizes_around_n() {
    let n = 24;
    let a = patterned(n, 10);
    let b = patterned(n, 9);
    let reference = product(Variant::NaiveInterchanged, &a, &b, n, 1);

    for tile in [1, 2, 3, 5, 7, 8, 23, 24, 25, 64, 1000] {
        for variant in [Variant::Tiled, Variant::TiledInterchanged] {
            let c = product(variant, &a, &b, n, tile);
            assert_matrices_equal(&reference, &c, &format!("{}_tile{}", variant, tile));
        }
    }
}

#[test]
fn test_tile_boundary_default_tile() {
    for n in [63, 64, 65, 127, 129] {
        let a = patterned(n, 13);
        let b = patterned(n, 17);
        let reference = product(Variant::NaiveInterchanged, &a, &b, n, 64);

        for variant in [Variant::Tiled, Variant::TiledInterchanged] {
            let c = product(variant, &a, &b, n, 64);
            assert_matrices_equal(&reference, &c, &format!("{}_n{}", variant, n));
        }
    }
}

// ============================================================
// Identity and zero
// ============================================================

#[test]
fn test_identity_leaves_matrix_unchanged() {
    let n = 37;
    let a = Initializer::from_seed(1).random_matrix(n).unwrap();
    let id = Matrix::identity(n).unwrap();

    for variant in Variant::ALL {
        let left = product(variant, id.as_slice(), a.as_slice(), n, 8);
        let right = product(variant, a.as_slice(), id.as_slice(), n, 8);
        assert_matrices_equal(a.as_slice(), &left, &format!("{}_I*A", variant));
        assert_matrices_equal(a.as_slice(), &right, &format!("{}_A*I", variant));
    }
}

#[test]
fn test_zero_matrix_gives_zero() {
    let n = 20;
    let a = Initializer::from_seed(2).random_matrix(n).unwrap();
    let zero = Matrix::zeros(n).unwrap();

    for variant in Variant::ALL {
        let c = product(variant, a.as_slice(), zero.as_slice(), n, 6);
        assert!(c.iter().all(|&x| x == 0.0), "{}: A*0 not zero", variant);
        let c = product(variant, zero.as_slice(), a.as_slice(), n, 6);
        assert!(c.iter().all(|&x| x == 0.0), "{}: 0*A not zero", variant);
    }
}

// ============================================================
// Input/output contract
// ============================================================

#[test]
fn test_inputs_not_mutated() {
    let n = 33;
    let mut init = Initializer::from_seed(3);
    let a = init.random_matrix(n).unwrap();
    let b = init.random_matrix(n).unwrap();
    let (a_before, b_before) = (a.clone(), b.clone());

    for variant in Variant::ALL {
        let mut c = Matrix::zeros(n).unwrap();
        multiply(variant, &a, &b, &mut c, 8).unwrap();
        assert_eq!(a, a_before, "{}: A changed", variant);
        assert_eq!(b, b_before, "{}: B changed", variant);
    }
}

#[test]
fn test_rezeroed_runs_are_identical() {
    let n = 45;
    let mut init = Initializer::from_seed(4);
    let a = init.random_matrix(n).unwrap();
    let b = init.random_matrix(n).unwrap();

    for variant in Variant::ALL {
        let mut c = Matrix::zeros(n).unwrap();
        multiply(variant, &a, &b, &mut c, 16).unwrap();
        let first = c.clone();

        c.clear();
        multiply(variant, &a, &b, &mut c, 16).unwrap();
        assert_matrices_equal(first.as_slice(), c.as_slice(), variant.name());
    }
}

#[test]
fn test_accumulation() {
    let n = 16;
    let a = patterned(n, 10);
    let b = patterned(n, 10);

    let mut expected = vec![0.0; n * n];
    matmul_naive_ikj(&a, &b, &mut expected, n);
    for x in expected.iter_mut() {
        *x += 5.0;
    }

    for variant in Variant::ALL {
        // Start with non-zero C
        let mut c = vec![5.0; n * n];
        variant.run(&a, &b, &mut c, n, 4);
        assert_matrices_equal(&expected, &c, &format!("accumulate_{}", variant));
    }
}

// ============================================================
// Checked entry point and preconditions
// ============================================================

#[test]
fn test_multiply_rejects_mismatched_dimensions() {
    let a = Matrix::zeros(3).unwrap();
    let b = Matrix::zeros(4).unwrap();
    let mut c = Matrix::zeros(3).unwrap();

    let err = multiply(Variant::Naive, &a, &b, &mut c, 64).unwrap_err();
    assert!(matches!(
        err,
        Error::DimensionMismatch {
            name: "B",
            expected: 3,
            actual: 4
        }
    ));
}

#[test]
fn test_multiply_rejects_zero_tile() {
    let a = Matrix::identity(2).unwrap();
    let mut c = Matrix::zeros(2).unwrap();

    assert!(matches!(
        multiply(Variant::Tiled, &a, &a, &mut c, 0),
        Err(Error::InvalidTileSize)
    ));
    // Unblocked variants ignore the tile size.
    assert!(multiply(Variant::NaiveInterchanged, &a, &a, &mut c, 0).is_ok());
}

#[test]
#[should_panic(expected = "tile size must be positive")]
fn test_tiled_kernel_panics_on_zero_tile() {
    let a = vec![1.0; 4];
    let mut c = vec![0.0; 4];
    matmul_tiled_ikj(&a, &a, &mut c, 2, 0);
}

#[test]
#[should_panic(expected = "matrix dimension must be positive")]
fn test_kernel_panics_on_zero_dimension() {
    matmul_naive_ijk(&[], &[], &mut [], 0);
}

#[test]
#[should_panic(expected = "B: expected")]
fn test_kernel_panics_on_short_slice() {
    let a = vec![1.0; 9];
    let b = vec![1.0; 8];
    let mut c = vec![0.0; 9];
    matmul_naive_ikj(&a, &b, &mut c, 3);
}

#[test]
#[should_panic(expected = "overflows usize")]
fn test_kernel_panics_when_size_overflows() {
    let n = 1usize << 33;
    matmul_tiled_ijk(&[], &[], &mut [], n, 64);
}
