use approx::assert_relative_eq;
use nalgebra::{dvector, DMatrix, DVector};

use crate::*;

mod concurrent;

/// Row-major data of a well conditioned `n`×`n` matrix that needs row swaps during elimination.
fn swapping_matrix(n: usize) -> Vec<f64> {
    let mut a = Vec::with_capacity(n * n);
    for row in 0..n {
        for col in 0..n {
            let v = if col == n - 1 - row {
                n as f64 + 2.0
            } else {
                1.0 / (1.0 + row as f64 + col as f64)
            };
            a.push(v);
        }
    }
    a
}

/// b = A x for a row-major `a`.
fn rhs(n: usize, a: &[f64], x: &[f64]) -> Vec<f64> {
    let a = DMatrix::from_row_slice(n, n, a);
    (a * DVector::from_column_slice(x)).as_slice().to_vec()
}

#[test_log::test]
fn test_concrete_2x2() {
    let x = solve(2, &[2.0, 1.0, 1.0, 3.0], &[3.0, 5.0]).unwrap();
    assert_relative_eq!(x, dvector![0.8, 1.4], epsilon = 1e-12);
}

#[test]
fn test_dense_4x4() {
    let a = [
        5.0, 0.0, 0.0, 1.0, //
        2.0, 2.0, 2.0, 1.0, //
        4.0, 5.0, 5.0, 5.0, //
        1.0, 6.0, 4.0, 5.0,
    ];
    let b = [9.0, 16.0, 49.0, 45.0];
    let x = solve(4, &a, &b).unwrap();
    assert_relative_eq!(x, dvector![1.0, 2.0, 3.0, 4.0], epsilon = 1e-12);
}

#[test]
fn test_identity_returns_constants() {
    for n in 1..=8 {
        let eye = DMatrix::<f64>::identity(n, n);
        let a = eye.transpose().as_slice().to_vec();
        let b: Vec<f64> = (0..n).map(|i| 0.5 * i as f64 - 1.25).collect();
        let x = solve(n, &a, &b).unwrap();
        assert_relative_eq!(x, DVector::from_vec(b), epsilon = 1e-12);
    }
}

#[test]
fn test_recovers_known_solution() {
    let n = 6;
    let a = swapping_matrix(n);
    let expect: Vec<f64> = (0..n).map(|i| i as f64 - 2.5).collect();
    let b = rhs(n, &a, &expect);
    let x = solve(n, &a, &b).unwrap();
    assert_relative_eq!(x, DVector::from_vec(expect), epsilon = 1e-10);
}

#[test]
fn test_row_permutation_invariance() {
    let n = 4;
    let a = swapping_matrix(n);
    let expect = [1.5, -2.0, 0.25, 4.0];
    let b = rhs(n, &a, &expect);
    let reference = solve(n, &a, &b).unwrap();

    for perm in [[1, 0, 2, 3], [3, 2, 1, 0], [2, 3, 0, 1], [1, 3, 0, 2]] {
        let mut pa = Vec::with_capacity(n * n);
        let mut pb = Vec::with_capacity(n);
        for &row in &perm {
            pa.extend_from_slice(&a[row * n..(row + 1) * n]);
            pb.push(b[row]);
        }
        let x = solve(n, &pa, &pb).unwrap();
        assert_relative_eq!(x, reference, epsilon = 1e-12);
    }
}

#[test]
fn test_rounding_to_twelve_digits() {
    // x = [1/3, 2/3]
    let a = [2.0, 1.0, 1.0, 2.0];
    let b = [4.0 / 3.0, 5.0 / 3.0];

    let first = solve(2, &a, &b).unwrap();
    assert_eq!(first, dvector![0.333333333333, 0.666666666667]);
    for _ in 0..10 {
        assert_eq!(solve(2, &a, &b).unwrap(), first);
    }
}

#[test]
fn test_exact_rounding_keeps_noise() {
    let gauss = Gauss::new(SolverConfig::default().with_rounding(Rounding::Exact));
    let x = gauss.solve(1, &[3.0], &[1.0]).unwrap();
    assert_eq!(x[0], 1.0 / 3.0);
}

#[test]
fn test_inputs_untouched() {
    let a = vec![0.0, 1.0, 2.0, 3.0];
    let b = vec![1.0, 2.0];
    let (a0, b0) = (a.clone(), b.clone());
    solve(2, &a, &b).unwrap();
    assert_eq!(a, a0);
    assert_eq!(b, b0);
}

#[test]
fn test_dimension_mismatch() {
    let err = solve(2, &[1.0, 2.0, 3.0], &[1.0, 2.0]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DimensionMismatch);
    assert_eq!(
        err.to_string(),
        "invalid input dimensions: size 2, matrix length 3, constants length 2"
    );
}

#[test]
fn test_single_precision() {
    let gauss = Gauss::<f32>::new(SolverConfig::default().with_rounding(Rounding::Decimals(4)));
    let x = gauss.solve(2, &[2.0, 1.0, 1.0, 3.0], &[3.0, 5.0]).unwrap();
    assert_relative_eq!(x, dvector![0.8f32, 1.4], epsilon = 1e-4);
}

#[test]
fn test_huge_solution_is_not_overflowed_by_rounding() {
    let x = solve(1, &[1.0], &[1e300]).unwrap();
    assert_eq!(x, dvector![1e300]);

    let x = solve(2, &[1.0, 0.0, 0.0, 2.0], &[-1e300, 1.0]).unwrap();
    assert_eq!(x, dvector![-1e300, 0.5]);
}
