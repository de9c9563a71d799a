use crate::error::MatrixError;
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_real::MatrixReal;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyType;

impl From<MatrixError> for PyErr {
    fn from(error: MatrixError) -> PyErr {
        PyValueError::new_err(error.to_string())
    }
}

#[pymethods]
impl MatrixReal {
    #[classmethod]
    #[pyo3(name = "from_list")]
    pub fn py_from_list(_cls: &Bound<PyType>, lines: Vec<Vec<f64>>) -> Self {
        Matrix::from_list(lines)
    }

    #[classmethod]
    #[pyo3(name = "null")]
    pub fn py_null(_cls: &Bound<PyType>, size: usize) -> Self {
        Matrix::zeros(size)
    }

    #[classmethod]
    #[pyo3(name = "identity")]
    pub fn py_identity(_cls: &Bound<PyType>, size: usize) -> Self {
        Matrix::identity(size)
    }

    #[pyo3(name = "to_list")]
    pub fn py_to_list(&self) -> Vec<Vec<f64>> {
        Matrix::to_list(self)
    }

    #[getter(rows)]
    pub fn py_rows(&self) -> usize {
        self.rows
    }

    #[getter(cols)]
    pub fn py_cols(&self) -> usize {
        self.cols
    }

    #[getter(T)]
    pub fn py_transpose(&self) -> MatrixReal {
        Matrix::transpose(self)
    }

    #[pyo3(name = "at")]
    pub fn py_at(&self, row: usize, col: usize) -> PyResult<f64> {
        Ok(Matrix::at(self, row, col)?)
    }

    #[pyo3(name = "scale")]
    pub fn py_scale(&self, k: f64) -> MatrixReal {
        self.scale(k)
    }

    #[pyo3(name = "lu")]
    pub fn py_lu(&self) -> PyResult<(MatrixReal, MatrixReal)> {
        Ok(Matrix::lu(self)?)
    }

    #[pyo3(name = "determinant")]
    pub fn py_determinant(&self) -> PyResult<f64> {
        Ok(Matrix::determinant(self)?)
    }

    #[pyo3(name = "inverse")]
    pub fn py_inverse(&self) -> PyResult<MatrixReal> {
        Ok(Matrix::inverse(self)?)
    }

    pub fn __add__(&self, rhs: &MatrixReal) -> PyResult<MatrixReal> {
        Ok(self.sum(rhs)?)
    }

    pub fn __sub__(&self, rhs: &MatrixReal) -> PyResult<MatrixReal> {
        Ok(self.difference(rhs)?)
    }

    pub fn __mul__(&self, rhs: &MatrixReal) -> PyResult<MatrixReal> {
        Ok(self.product(rhs)?)
    }

    pub fn __eq__(&self, rhs: &MatrixReal) -> bool {
        self.equals(rhs)
    }

    pub fn __str__(&self) -> String {
        self.to_string()
    }

    pub fn __repr__(&self) -> String {
        format!("Matrix({:?})", Matrix::to_list(self))
    }
}
