use crate::error::MatrixError;
use crate::matrix::inverse::gauss_jordan;
use crate::matrix::lu::{determinant, doolittle};
use crate::matrix::matrix::Matrix;
use itertools::{iproduct, Itertools};
use num_traits::{One, Zero};
use std::fmt;
use std::ops;

/// Dense real matrix stored row-major in a single buffer.
///
/// Values are never mutated once built: every operation allocates its result.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "python", pyo3::pyclass(frozen, name = "Matrix"))]
pub struct MatrixReal {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) cells: Vec<f64>,
}

impl Matrix<f64> for MatrixReal {
    fn from_list(lines: Vec<Vec<f64>>) -> Self {
        let cols = match lines.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => return MatrixReal::EMPTY,
        };
        let rows = lines.len();

        // rows after the first are fitted to its length
        MatrixReal {
            rows,
            cols,
            cells: lines
                .into_iter()
                .flat_map(|l| l.into_iter().chain(std::iter::repeat(f64::zero())).take(cols))
                .collect(),
        }
    }

    fn to_list(&self) -> Vec<Vec<f64>> {
        self.cells
            .chunks(self.cols.max(1))
            .map(|line| line.into())
            .collect()
    }

    fn zeros(n: usize) -> MatrixReal {
        MatrixReal {
            rows: n,
            cols: n,
            cells: vec![f64::zero(); n * n],
        }
    }

    fn identity(n: usize) -> MatrixReal {
        MatrixReal {
            rows: n,
            cols: n,
            cells: iproduct!(0..n, 0..n)
                .map(|(i, j)| if i == j { f64::one() } else { f64::zero() })
                .collect(),
        }
    }

    fn transpose(&self) -> MatrixReal {
        MatrixReal {
            rows: self.cols,
            cols: self.rows,
            cells: iproduct!(0..self.cols, 0..self.rows)
                .map(|(c, r)| self.cell(r, c))
                .collect(),
        }
    }

    fn lu(&self) -> Result<(MatrixReal, MatrixReal), MatrixError> {
        doolittle(self)
    }

    fn determinant(&self) -> Result<f64, MatrixError> {
        determinant(self)
    }

    fn inverse(&self) -> Result<MatrixReal, MatrixError> {
        gauss_jordan(self)
    }

    fn at(&self, row: usize, col: usize) -> Result<f64, MatrixError> {
        if row == 0 || col == 0 || row > self.rows || col > self.cols {
            return Err(MatrixError::IndexOutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.cell(row - 1, col - 1))
    }
}

impl MatrixReal {
    /// The 0x0 matrix, returned for any grid without rows or columns.
    pub const EMPTY: MatrixReal = MatrixReal {
        rows: 0,
        cols: 0,
        cells: Vec::new(),
    };

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// 0-based access, callers must stay in bounds.
    #[inline(always)]
    pub(crate) fn cell(&self, row: usize, col: usize) -> f64 {
        self.cells[row * self.cols + col]
    }

    pub fn sum(&self, rhs: &MatrixReal) -> Result<MatrixReal, MatrixError> {
        self.zip_with(rhs, |a, b| a + b)
    }

    pub fn difference(&self, rhs: &MatrixReal) -> Result<MatrixReal, MatrixError> {
        self.zip_with(rhs, |a, b| a - b)
    }

    pub fn scale(&self, k: f64) -> MatrixReal {
        MatrixReal {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.iter().map(|a| a * k).collect(),
        }
    }

    /// Standard inner-product definition, `self.cols` must equal `rhs.rows`.
    pub fn product(&self, rhs: &MatrixReal) -> Result<MatrixReal, MatrixError> {
        if self.cols != rhs.rows {
            return Err(MatrixError::DimensionMismatch {
                left_cols: self.cols,
                right_rows: rhs.rows,
            });
        }

        Ok(MatrixReal {
            rows: self.rows,
            cols: rhs.cols,
            cells: iproduct!(0..self.rows, 0..rhs.cols)
                .map(|(i, j)| (0..self.cols).map(|k| self.cell(i, k) * rhs.cell(k, j)).sum())
                .collect(),
        })
    }

    /// Same shape and exactly equal entries, no tolerance.
    pub fn equals(&self, rhs: &MatrixReal) -> bool {
        self == rhs
    }

    fn zip_with(
        &self,
        rhs: &MatrixReal,
        op: impl Fn(f64, f64) -> f64,
    ) -> Result<MatrixReal, MatrixError> {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            return Err(MatrixError::ShapeMismatch {
                left_rows: self.rows,
                left_cols: self.cols,
                right_rows: rhs.rows,
                right_cols: rhs.cols,
            });
        }

        Ok(MatrixReal {
            rows: self.rows,
            cols: self.cols,
            cells: self
                .cells
                .iter()
                .zip(rhs.cells.iter())
                .map(|(a, b)| op(*a, *b))
                .collect(),
        })
    }
}

impl ops::Add<&MatrixReal> for &MatrixReal {
    type Output = Result<MatrixReal, MatrixError>;

    fn add(self, rhs: &MatrixReal) -> Result<MatrixReal, MatrixError> {
        self.sum(rhs)
    }
}

impl ops::Sub<&MatrixReal> for &MatrixReal {
    type Output = Result<MatrixReal, MatrixError>;

    fn sub(self, rhs: &MatrixReal) -> Result<MatrixReal, MatrixError> {
        self.difference(rhs)
    }
}

impl ops::Mul<&MatrixReal> for &MatrixReal {
    type Output = Result<MatrixReal, MatrixError>;

    fn mul(self, rhs: &MatrixReal) -> Result<MatrixReal, MatrixError> {
        self.product(rhs)
    }
}

impl ops::Mul<f64> for &MatrixReal {
    type Output = MatrixReal;

    fn mul(self, k: f64) -> MatrixReal {
        self.scale(k)
    }
}

impl fmt::Display for MatrixReal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.cells.chunks(self.cols.max(1)) {
            writeln!(f, "[{}]", line.iter().join(" "))?;
        }
        Ok(())
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_matrix(rng: &mut StdRng, rows: usize, cols: usize) -> MatrixReal {
        MatrixReal::from_list(
            (0..rows)
                .map(|_| (0..cols).map(|_| rng.gen_range(-20i32..=20) as f64).collect())
                .collect(),
        )
    }

    #[test]
    fn test_from_list() {
        let m = MatrixReal::from_list(vec![vec![1., 2., 3., 4.], vec![4., 3., 2., 1.]]);
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 4);

        let m = MatrixReal::from_list(vec![vec![1., 2., 3., 4.]]);
        assert_eq!(m.shape(), (1, 4));

        let m = MatrixReal::from_list(vec![vec![]]);
        assert_eq!(m.shape(), (0, 0));
        assert_eq!(m, MatrixReal::EMPTY);

        let m = MatrixReal::from_list(vec![]);
        assert_eq!(m.shape(), (0, 0));
        assert!(m.is_empty());
        assert!(m.to_list().is_empty());
    }

    #[test]
    fn test_from_list_ragged() {
        let m = MatrixReal::from_list(vec![vec![1., 2., 3.], vec![4.], vec![5., 6., 7., 8.]]);
        assert_eq!(m.shape(), (3, 3));
        assert_eq!(
            m.to_list(),
            vec![vec![1., 2., 3.], vec![4., 0., 0.], vec![5., 6., 7.]]
        );
    }

    #[test]
    fn test_zeros_and_identity() {
        let null = MatrixReal::zeros(5);
        assert_eq!(null.shape(), (5, 5));
        assert_eq!(null.at(3, 3), Ok(0.));

        let id = MatrixReal::identity(5);
        assert_eq!(id.shape(), (5, 5));
        for i in 1..=5 {
            for j in 1..=5 {
                assert_eq!(id.at(i, j).unwrap(), if i == j { 1. } else { 0. });
            }
        }

        assert_eq!(MatrixReal::zeros(0), MatrixReal::EMPTY);
        assert_eq!(MatrixReal::identity(0), MatrixReal::EMPTY);
    }

    #[test]
    fn test_at() {
        let null = MatrixReal::zeros(2);
        assert!(matches!(
            null.at(3, 1),
            Err(MatrixError::IndexOutOfRange { row: 3, col: 1, .. })
        ));
        assert!(null.at(1, 3).is_err());

        let m = MatrixReal::from_list(vec![vec![1., 2., 3., 4.], vec![4., 3., 2., 1.]]);
        assert_eq!(m.at(1, 3), Ok(3.));
        assert_eq!(m.at(2, 4), Ok(1.));
        assert!(matches!(
            m.at(0, 3),
            Err(MatrixError::IndexOutOfRange { .. })
        ));
        assert!(matches!(
            m.at(2, 0),
            Err(MatrixError::IndexOutOfRange { .. })
        ));
        assert!(MatrixReal::EMPTY.at(1, 1).is_err());
    }

    #[test]
    fn test_sum_and_difference() {
        let a = MatrixReal::from_list(vec![vec![1., 2.], vec![3., 4.]]);
        let b = MatrixReal::from_list(vec![vec![10., 20.], vec![30., 40.]]);

        assert_eq!(
            a.sum(&b).unwrap().to_list(),
            vec![vec![11., 22.], vec![33., 44.]]
        );
        assert_eq!(
            (&b - &a).unwrap().to_list(),
            vec![vec![9., 18.], vec![27., 36.]]
        );

        let c = MatrixReal::from_list(vec![vec![1., 2., 3.]]);
        assert_eq!(
            a.sum(&c),
            Err(MatrixError::ShapeMismatch {
                left_rows: 2,
                left_cols: 2,
                right_rows: 1,
                right_cols: 3,
            })
        );
        assert!(matches!(
            &a - &c,
            Err(MatrixError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_scale() {
        let a = MatrixReal::from_list(vec![vec![1., -2.], vec![0.5, 4.]]);
        assert_eq!(
            a.scale(2.).to_list(),
            vec![vec![2., -4.], vec![1., 8.]]
        );
        assert_eq!(&a * 0.5, a.scale(0.5));
        assert_eq!(MatrixReal::EMPTY.scale(3.), MatrixReal::EMPTY);
    }

    #[test]
    fn test_transpose() {
        let m = MatrixReal::from_list(vec![
            vec![1., 2., 5., 77.],
            vec![3., 4., 7., 11.],
            vec![4., 8., 9., 1.],
        ]);

        assert_eq!(
            m.transpose().to_list(),
            vec![
                vec![1., 3., 4.],
                vec![2., 4., 8.],
                vec![5., 7., 9.],
                vec![77., 11., 1.]
            ]
        );
        assert_eq!(MatrixReal::EMPTY.transpose(), MatrixReal::EMPTY);
    }

    #[test]
    fn test_product() {
        let a = MatrixReal::from_list(vec![vec![1., 2., 3.], vec![4., 5., 6.]]);
        let b = MatrixReal::from_list(vec![vec![7., 8.], vec![9., 10.], vec![11., 12.]]);

        let c = (&a * &b).unwrap();
        assert_eq!(c.to_list(), vec![vec![58., 64.], vec![139., 154.]]);

        let c = b.product(&a).unwrap();
        assert_eq!(c.shape(), (3, 3));
        assert_eq!(c.at(1, 1), Ok(39.));

        assert_eq!(
            a.product(&a),
            Err(MatrixError::DimensionMismatch {
                left_cols: 3,
                right_rows: 2,
            })
        );
    }

    #[test]
    fn test_equals() {
        let a = MatrixReal::from_list(vec![vec![1., 2.], vec![3., 4.]]);
        let b = MatrixReal::from_list(vec![vec![1., 2.], vec![3., 4.]]);
        let c = MatrixReal::from_list(vec![vec![1., 2.], vec![3., 4.0000001]]);

        assert!(a.equals(&a));
        assert!(a.equals(&b));
        assert!(b.equals(&a));
        assert!(!a.equals(&c));
        assert!(!a.equals(&a.transpose().scale(2.)));
        assert!(!a.equals(&MatrixReal::from_list(vec![vec![1., 2.]])));
    }

    #[test]
    fn test_display() {
        let m = MatrixReal::from_list(vec![vec![1., 2., 3.], vec![4.5, -5., 6.]]);
        assert_eq!(m.to_string(), "[1 2 3]\n[4.5 -5 6]\n");
        assert_eq!(MatrixReal::EMPTY.to_string(), "");
    }

    #[test]
    fn test_algebraic_properties() {
        let mut rng = StdRng::seed_from_u64(42);

        for n in 1..6 {
            let a = random_matrix(&mut rng, n, n + 1);
            let b = random_matrix(&mut rng, n, n + 1);

            let back = (&(&a + &b).unwrap() - &b).unwrap();
            assert!(back.equals(&a));
            assert!(a.transpose().transpose().equals(&a));

            let square = random_matrix(&mut rng, n, n);
            let id = MatrixReal::identity(n);
            assert!((&id * &square).unwrap().equals(&square));
            assert!((&square * &id).unwrap().equals(&square));
        }
    }
}
