#![allow(clippy::float_cmp)]

use std::f64::consts::FRAC_PI_2;

use super::*;

const EPSILON: f64 = 1e-12;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn m(rows: &[&[f64]]) -> Matrix {
    Matrix { rows: rows.iter().map(|r| r.to_vec()).collect() }
}

fn at(matrix: &Matrix, row: usize, col: usize) -> f64 {
    matrix.rows[row][col]
}

// =============================================================
// Construction
// =============================================================

#[test]
fn shape_counts_rows_and_columns() {
    let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
    assert_eq!(a.row_count(), 2);
    assert_eq!(a.col_count(), 3);
    assert_eq!(m(&[]).col_count(), 0);
}

#[test]
fn column_is_n_by_one() {
    let v = Matrix::column(&[1.0, 2.0, 3.0]);
    assert_eq!(v.row_count(), 3);
    assert_eq!(v.col_count(), 1);
    assert_eq!(at(&v, 2, 0), 3.0);
}

// =============================================================
// matmul
// =============================================================

#[test]
fn matmul_square_product() {
    let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
    let b = m(&[&[5.0, 6.0], &[7.0, 8.0]]);
    let c = matmul(&a, &b).expect("compatible shapes");
    assert_eq!(c, m(&[&[19.0, 22.0], &[43.0, 50.0]]));
}

#[test]
fn matmul_rectangular_shapes() {
    let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
    let v = Matrix::column(&[1.0, 0.0, -1.0]);
    let c = matmul(&a, &v).expect("compatible shapes");
    assert_eq!(c, Matrix::column(&[-2.0, -2.0]));
}

#[test]
fn matmul_rejects_mismatched_dimensions() {
    let a = m(&[&[1.0, 2.0]]);
    let b = Matrix::column(&[1.0, 2.0, 3.0]);
    let err = matmul(&a, &b).expect_err("mismatch");
    assert_eq!(err, MatrixError::DimensionMismatch { left_cols: 2, right_rows: 3 });
}

#[test]
fn dimension_mismatch_message_names_both_sides() {
    let err = MatrixError::DimensionMismatch { left_cols: 2, right_rows: 3 };
    assert_eq!(err.to_string(), "dimension mismatch: 2 columns times 3 rows");
}

// =============================================================
// Rotations
// =============================================================

#[test]
fn rotation_z_quarter_turn_moves_x_to_minus_y() {
    let r = Matrix::rotation_z(FRAC_PI_2);
    let out = matmul(&r, &Matrix::column(&[1.0, 0.0, 0.0])).expect("3x3 by 3x1");
    assert!(approx_eq(at(&out, 0, 0), 0.0));
    assert!(approx_eq(at(&out, 1, 0), -1.0));
    assert!(approx_eq(at(&out, 2, 0), 0.0));
}

#[test]
fn rotation_x_quarter_turn_moves_z_to_y() {
    let r = Matrix::rotation_x(FRAC_PI_2);
    let out = matmul(&r, &Matrix::column(&[0.0, 0.0, 1.0])).expect("3x3 by 3x1");
    assert!(approx_eq(at(&out, 1, 0), 1.0));
    assert!(approx_eq(at(&out, 2, 0), 0.0));
}

#[test]
fn rotation_times_inverse_is_identity() {
    let r = matmul(&Matrix::rotation_z(0.7), &Matrix::rotation_z(-0.7)).expect("3x3");
    for i in 0..3 {
        for j in 0..3 {
            let expected = if i == j { 1.0 } else { 0.0 };
            assert!(approx_eq(at(&r, i, j), expected));
        }
    }
}

#[test]
fn as_vec3_reads_three_by_one_column() {
    assert_eq!(Matrix::column(&[1.0, 2.0, 3.0]).as_vec3(), Some([1.0, 2.0, 3.0]));
}

#[test]
fn as_vec3_rejects_other_shapes() {
    assert_eq!(Matrix::column(&[1.0, 2.0]).as_vec3(), None);
    assert_eq!(Matrix::rotation_z(0.0).as_vec3(), None);
}
