//! Minimal row-major matrix used to compose and apply camera rotations.

#[cfg(test)]
#[path = "matrix_test.rs"]
mod matrix_test;

/// Error returned by [`matmul`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    /// The left operand's column count differs from the right operand's row count.
    #[error("dimension mismatch: {left_cols} columns times {right_rows} rows")]
    DimensionMismatch { left_cols: usize, right_rows: usize },
}

/// A dense matrix stored as a sequence of rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: Vec<Vec<f64>>,
}

impl Matrix {
    /// A single-column matrix holding `values`.
    #[must_use]
    pub fn column(values: &[f64]) -> Self {
        Self { rows: values.iter().map(|v| vec![*v]).collect() }
    }

    /// Rotation by `angle` about the z (polar) axis.
    #[must_use]
    pub fn rotation_z(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self { rows: vec![vec![c, s, 0.0], vec![-s, c, 0.0], vec![0.0, 0.0, 1.0]] }
    }

    /// Rotation by `angle` about the x (east) axis.
    #[must_use]
    pub fn rotation_x(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self { rows: vec![vec![1.0, 0.0, 0.0], vec![0.0, c, s], vec![0.0, -s, c]] }
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn col_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// The entries of a 3×1 column, or `None` for any other shape.
    #[must_use]
    pub fn as_vec3(&self) -> Option<[f64; 3]> {
        match self.rows.as_slice() {
            [x, y, z] if self.col_count() == 1 => Some([x[0], y[0], z[0]]),
            _ => None,
        }
    }
}

/// Standard matrix product `a × b`.
///
/// # Errors
///
/// Returns [`MatrixError::DimensionMismatch`] when `a`'s column count differs
/// from `b`'s row count.
pub fn matmul(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    let inner = a.col_count();
    if inner != b.row_count() {
        return Err(MatrixError::DimensionMismatch { left_cols: inner, right_rows: b.row_count() });
    }
    let cols = b.col_count();
    let rows = a
        .rows
        .iter()
        .map(|a_row| {
            (0..cols)
                .map(|j| a_row.iter().zip(&b.rows).map(|(x, b_row)| x * b_row[j]).sum())
                .collect()
        })
        .collect();
    Ok(Matrix { rows })
}
