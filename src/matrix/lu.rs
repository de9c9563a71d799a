use crate::error::MatrixError;
use crate::matrix::matrix_real::MatrixReal;
use log::debug;
use num_traits::{One, Zero};

/// Doolittle LU decomposition without row interchanges.
///
/// Returns `(L, U)` with `L` unit lower-triangular and `U` upper-triangular.
/// When a pivot `U[i][i]` comes out as zero, column `i` of `L` below the
/// diagonal is filled with zeros instead of dividing; the result is then not
/// a true factorisation, only matrices with non-zero leading principal minors
/// are decomposed exactly.
pub(crate) fn doolittle(m: &MatrixReal) -> Result<(MatrixReal, MatrixReal), MatrixError> {
    if !m.is_square() {
        return Err(MatrixError::NotSquare {
            rows: m.rows,
            cols: m.cols,
        });
    }

    let n = m.rows;
    let mut lower = vec![f64::zero(); n * n];
    let mut upper = vec![f64::zero(); n * n];

    for i in 0..n {
        // row i of U
        for k in i..n {
            let acc: f64 = (0..i).map(|j| lower[i * n + j] * upper[j * n + k]).sum();
            upper[i * n + k] = m.cell(i, k) - acc;
        }

        // column i of L
        lower[i * n + i] = f64::one();
        let pivot = upper[i * n + i];
        if pivot.is_zero() && i + 1 < n {
            debug!("zero pivot at row {}, lower column left as zeros", i);
        }

        for k in i + 1..n {
            let value = if pivot.is_zero() {
                f64::zero()
            } else {
                let acc: f64 = (0..i).map(|j| lower[k * n + j] * upper[j * n + i]).sum();
                (m.cell(k, i) - acc) / pivot
            };
            lower[k * n + i] = value;
        }
    }

    Ok((
        MatrixReal {
            rows: n,
            cols: n,
            cells: lower,
        },
        MatrixReal {
            rows: n,
            cols: n,
            cells: upper,
        },
    ))
}

/// Orders 1 and 2 are computed directly, larger ones as the product of the
/// diagonal of `U`.
pub(crate) fn determinant(m: &MatrixReal) -> Result<f64, MatrixError> {
    if m.rows == 0 || m.cols == 0 {
        return Err(MatrixError::EmptyMatrix);
    }

    if !m.is_square() {
        return Err(MatrixError::NotSquare {
            rows: m.rows,
            cols: m.cols,
        });
    }

    match m.rows {
        1 => Ok(m.cell(0, 0)),
        2 => Ok(m.cell(0, 0) * m.cell(1, 1) - m.cell(0, 1) * m.cell(1, 0)),
        n => {
            let (_, upper) = doolittle(m)?;
            Ok((0..n).map(|i| upper.cell(i, i)).product())
        }
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
