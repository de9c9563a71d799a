use thiserror::Error;

/// Failures reported by the matrix operations.
///
/// Every fallible operation returns one of these instead of panicking, the
/// caller decides how to recover.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// Elementwise operation on matrices of different shapes.
    #[error("Shape mismatch: {left_rows}x{left_cols} and {right_rows}x{right_cols}")]
    ShapeMismatch {
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },

    /// Product where the left columns differ from the right rows.
    #[error("Dimensions not compatible: left has {left_cols} columns, right has {right_rows} rows")]
    DimensionMismatch { left_cols: usize, right_rows: usize },

    #[error("Matrix is not square: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("Empty matrix")]
    EmptyMatrix,

    /// The determinant is exactly zero, there is no inverse.
    #[error("Determinant is zero, matrix cannot be inverted")]
    SingularMatrix,

    /// 1-based position outside of the matrix (or a zero index).
    #[error("Position ({row}, {col}) out of range for a {rows}x{cols} matrix")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
