//! Tests for evaluation, multiplication, trace and the wrap-around
//! diagonal determinant.

use approx::assert_abs_diff_eq;
use geomat::core::traits::{MatShape, MatVec};
use geomat::error::MatrixError;
use geomat::matrix::Matrix;
use rand::Rng;

#[test]
fn eval_applies_the_linear_map() {
    let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    assert_eq!(m.eval(&[5.0, 6.0]).unwrap(), vec![17.0, 39.0]);
}

#[test]
fn eval_on_identity_is_the_input() {
    let x = vec![1.0, 1.0, 1.0, 1.0];
    assert_eq!(Matrix::identity(4).eval(&x).unwrap(), x);
}

#[test]
fn eval_checks_operand_length() {
    let m = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0]]);
    let err = m.eval(&[1.0, 2.0]).unwrap_err();
    assert!(matches!(err, MatrixError::DimensionMismatch(_)));
}

/// Matrix-vector product for a small random dense matrix, checked
/// against a manual computation.
#[test]
fn matvec_random_small() {
    let n = 5;
    let mut rng = rand::thread_rng();
    let vals: Vec<f64> = (0..n * n).map(|_| rng.r#gen()).collect();
    let a = Matrix::from_fn(n, n, |i, j| vals[i * n + j]);
    let x: Vec<f64> = (0..n).map(|_| rng.r#gen()).collect();
    let mut y = vec![0.0; n];
    a.matvec(&x, &mut y);

    // check y[i] == sum_j A[i,j]*x[j]
    for i in 0..n {
        let expected = (0..n).map(|j| vals[i * n + j] * x[j]).sum::<f64>();
        assert_abs_diff_eq!(y[i], expected, epsilon = 1e-12);
    }
    assert_eq!(a.eval(&x).unwrap(), y);
}

#[test]
fn mat_shape_reports_dimensions() {
    fn shape<M: MatShape>(m: &M) -> (usize, usize) {
        (m.nrows(), m.ncols())
    }
    let m = Matrix::<f64>::from_shape(2, 5);
    assert_eq!(shape(&m), (2, 5));
}

#[test]
fn mul_by_identity_is_a_noop() {
    let a = Matrix::from_rows(vec![vec![4.0, 3.0], vec![2.0, 1.0]]);
    assert_eq!(Matrix::identity(2).mul(&a).unwrap(), a);
    assert_eq!(a.mul(&Matrix::identity(2)).unwrap(), a);
}

#[test]
fn mul_produces_the_product_shape() {
    let a = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
    let b = Matrix::from_rows(vec![vec![7.0, 8.0], vec![9.0, 10.0], vec![11.0, 12.0]]);
    let c = a.mul(&b).unwrap();
    assert_eq!(
        c,
        Matrix::from_rows(vec![vec![58.0, 64.0], vec![139.0, 154.0]])
    );
}

#[test]
fn mul_checks_inner_dimensions() {
    let a = Matrix::<f64>::from_shape(2, 3);
    let err = a.mul(&a).unwrap_err();
    assert!(matches!(err, MatrixError::DimensionMismatch(_)));
}

#[test]
fn mul_is_associative_up_to_tolerance() {
    let mut rng = rand::thread_rng();
    let a = Matrix::from_fn(3, 3, |_, _| rng.r#gen::<f64>());
    let b = Matrix::from_fn(3, 3, |_, _| rng.r#gen::<f64>());
    let c = Matrix::from_fn(3, 3, |_, _| rng.r#gen::<f64>());

    let left = a.mul(&b).unwrap().mul(&c).unwrap();
    let right = a.mul(&b.mul(&c).unwrap()).unwrap();
    for i in 0..3 {
        for j in 0..3 {
            assert_abs_diff_eq!(left[(i, j)], right[(i, j)], epsilon = 1e-12);
        }
    }
}

#[test]
fn trace_sums_the_main_diagonal() {
    for n in 1..=5 {
        assert_eq!(Matrix::<f64>::identity(n).trace(), n as f64);
    }
    let m = Matrix::from_rows(vec![
        vec![4.0, 3.0, 2.0],
        vec![3.0, 2.0, 1.0],
        vec![2.0, 1.0, 0.0],
    ]);
    assert_eq!(m.trace(), 6.0);
    // non-square: diagonal stops at min(rows, cols)
    let wide = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
    assert_eq!(wide.trace(), 6.0);
}

#[test]
fn diagonal_products_wrap_around() {
    let m = Matrix::from_rows(vec![
        vec![4.0, 3.0, 2.0],
        vec![3.0, 2.0, 1.0],
        vec![2.0, 1.0, 0.0],
    ]);
    assert_eq!(m.diagonal_product(0, false), 0.0);
    assert_eq!(m.diagonal_product(1, false), 6.0);
    assert_eq!(m.diagonal_product(2, false), 6.0);
    assert_eq!(m.diagonal_product(0, true), 8.0);
    assert_eq!(m.diagonal_product(1, true), 4.0);
    assert_eq!(m.diagonal_product(2, true), 0.0);
}

#[test]
fn det_of_the_arithmetic_progression_matrix() {
    // Every wrap-around diagonal contributes: +(0 + 6 + 6) - (8 + 4 + 0).
    let m = Matrix::from_rows(vec![
        vec![4.0, 3.0, 2.0],
        vec![3.0, 2.0, 1.0],
        vec![2.0, 1.0, 0.0],
    ]);
    assert_eq!(m.det(), 0.0);
}

#[test]
fn det_matches_sarrus_for_3x3() {
    let m = Matrix::from_rows(vec![
        vec![2.0, 1.0, 3.0],
        vec![0.0, 4.0, 1.0],
        vec![5.0, 2.0, 2.0],
    ]);
    assert_eq!(m.det(), -43.0);
}

#[test]
fn det_of_identity() {
    // The cyclic diagonal formula reproduces the determinant of the
    // identity for sizes where no upward diagonal closes on itself.
    for n in 3..=6 {
        assert_eq!(Matrix::<f64>::identity(n).det(), 1.0);
    }
}

#[test]
fn det_of_a_diagonal_matrix() {
    let m = Matrix::from_rows(vec![
        vec![2.0, 0.0, 0.0],
        vec![0.0, 3.0, 0.0],
        vec![0.0, 0.0, 4.0],
    ]);
    assert_eq!(m.det(), 24.0);
}

#[test]
fn det_of_empty_matrix_is_zero() {
    assert_eq!(Matrix::<f64>::from_rows(Vec::new()).det(), 0.0);
    assert_eq!(Matrix::from_flat(Vec::<f64>::new(), 0).unwrap().det(), 0.0);
}
