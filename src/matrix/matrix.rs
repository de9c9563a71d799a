use crate::error::MatrixError;

pub trait Matrix<T>
where
    Self: Sized,
{
    fn from_list(lines: Vec<Vec<T>>) -> Self;
    fn to_list(&self) -> Vec<Vec<T>>;

    fn zeros(n: usize) -> Self;
    fn identity(n: usize) -> Self;
    fn transpose(&self) -> Self;
    fn lu(&self) -> Result<(Self, Self), MatrixError>;
    fn determinant(&self) -> Result<T, MatrixError>;
    fn inverse(&self) -> Result<Self, MatrixError>;

    /// Value at a 1-based (row, col) position.
    fn at(&self, row: usize, col: usize) -> Result<T, MatrixError>;
}
