use crate::error::MatrixError;
use crate::matrix::lu::determinant;
use crate::matrix::matrix_real::MatrixReal;
use log::{debug, trace};
use num_traits::{One, Zero};

/// Gauss-Jordan inversion over the augmented matrix `[A | I]`.
///
/// Before eliminating, rows are bubbled once from the bottom up on their
/// first column only. This is not partial pivoting: a zero pivot outside
/// column 0 is not avoided and produces non-finite entries.
pub(crate) fn gauss_jordan(m: &MatrixReal) -> Result<MatrixReal, MatrixError> {
    if !m.is_square() {
        return Err(MatrixError::NotSquare {
            rows: m.rows,
            cols: m.cols,
        });
    }

    let det = determinant(m)?;
    if det.is_zero() {
        debug!("refusing to invert a {}x{} singular matrix", m.rows, m.cols);
        return Err(MatrixError::SingularMatrix);
    }

    let order = m.rows;
    let width = order * 2;

    let mut aug = vec![f64::zero(); order * width];
    for i in 0..order {
        aug[i * width..i * width + order].copy_from_slice(&m.cells[i * order..(i + 1) * order]);
        aug[i * width + order + i] = f64::one();
    }

    for i in (1..order).rev() {
        if aug[(i - 1) * width] < aug[i * width] {
            trace!("interchanging rows {} and {}", i - 1, i);
            for k in 0..width {
                aug.swap((i - 1) * width + k, i * width + k);
            }
        }
    }

    for i in 0..order {
        let pivot = aug[i * width + i];
        for j in (0..order).filter(|&j| j != i) {
            let factor = aug[j * width + i] / pivot;
            for k in 0..width {
                let delta = aug[i * width + k] * factor;
                aug[j * width + k] -= delta;
            }
        }
    }

    for (i, row) in aug.chunks_mut(width).enumerate() {
        let pivot = row[i];
        row.iter_mut().for_each(|x| *x /= pivot);
    }

    Ok(MatrixReal {
        rows: order,
        cols: order,
        cells: aug
            .chunks(width)
            .flat_map(|row| row[order..].iter().copied())
            .collect(),
    })
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
