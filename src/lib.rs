pub mod error;

pub mod matrix {
    mod inverse;
    mod lu;
    pub mod matrix;
    pub mod matrix_real;

    #[cfg(feature = "python")]
    pub mod matrix_py;
}

pub use error::MatrixError;
pub use matrix::matrix::Matrix;
pub use matrix::matrix_real::MatrixReal;

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// A Python module implemented in Rust.
#[cfg(feature = "python")]
#[pymodule]
fn rust_linalg(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<matrix::matrix_real::MatrixReal>()?;
    Ok(())
}
