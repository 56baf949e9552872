use thiserror::Error;

// Unified error type for geomat

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatrixError {
    #[error("cannot create a matrix with negative width ({0})")]
    InvalidDimension(isize),
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),
    #[error("column index {index} out of bounds (cols = {cols})")]
    IndexOutOfBounds { index: usize, cols: usize },
}
