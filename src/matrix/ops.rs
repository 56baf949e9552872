//! Derived matrix quantities: evaluation, multiplication, trace and the
//! wrap-around diagonal determinant.
//!
//! The determinant here is the cyclic generalization of the Sarrus rule:
//! for each starting column the downward wrap-around diagonal product is
//! added and the upward one subtracted. It agrees with the true
//! determinant for 3x3 input and is kept as the defined behavior for
//! every other shape.

use crate::core::traits::{MatShape, MatVec};
use crate::error::MatrixError;
use crate::matrix::Matrix;
use num_traits::Float;

impl<T: Float> Matrix<T> {
    /// Evaluate the matrix as a linear map: `result[y] = Σ_x data[y][x] · vec[x]`.
    ///
    /// The operand length must equal `cols`.
    pub fn eval(&self, vec: &[T]) -> Result<Vec<T>, MatrixError> {
        if self.cols != vec.len() {
            return Err(MatrixError::DimensionMismatch(format!(
                "cannot evaluate a {}x{} matrix with a vector of {} elements",
                self.rows,
                self.cols,
                vec.len()
            )));
        }
        Ok(self
            .data
            .iter()
            .map(|row| {
                row.iter()
                    .zip(vec)
                    .fold(T::zero(), |acc, (&a, &x)| acc + a * x)
            })
            .collect())
    }

    /// Multiply this `m × n` matrix with an `n × k` one, producing a new
    /// `m × k` matrix.
    pub fn mul(&self, other: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        if self.cols != other.rows {
            return Err(MatrixError::DimensionMismatch(format!(
                "cannot multiply a {}x{} matrix with a {}x{} one",
                self.rows, self.cols, other.rows, other.cols
            )));
        }
        Ok(Matrix::from_fn(self.rows, other.cols, |y, x| {
            (0..self.cols).fold(T::zero(), |acc, i| acc + self.data[y][i] * other.data[i][x])
        }))
    }

    /// Sum of the main-diagonal entries, up to `min(rows, cols)`.
    pub fn trace(&self) -> T {
        let n = self.rows.min(self.cols);
        (0..n).fold(T::zero(), |acc, i| acc + self.data[i][i])
    }

    /// Product of the wrap-around diagonal starting in column `col`.
    ///
    /// Downward diagonals start at row 0, upward (`bottom_up`) ones at the
    /// last row; the column index wraps modulo `cols`. Returns 0 for an
    /// empty matrix.
    pub fn diagonal_product(&self, col: usize, bottom_up: bool) -> T {
        if self.is_empty() {
            return T::zero();
        }
        let mut prod = T::one();
        for i in 0..self.rows {
            let y = if bottom_up { self.rows - 1 - i } else { i };
            prod = prod * self.data[y][(col + i) % self.cols];
        }
        prod
    }

    /// Signed sum of all wrap-around diagonal products.
    pub fn det(&self) -> T {
        let mut det = T::zero();
        for x in 0..self.cols {
            det = det + self.diagonal_product(x, false);
            det = det - self.diagonal_product(x, true);
        }
        det
    }
}

/// Shape-asserting matrix-vector product, `y = A · x`.
impl<T: Float> MatVec<Vec<T>> for Matrix<T> {
    fn matvec(&self, x: &Vec<T>, y: &mut Vec<T>) {
        assert_eq!(self.nrows(), y.len(), "Output vector y has incorrect length");
        assert_eq!(self.ncols(), x.len(), "Input vector x has incorrect length");
        for i in 0..self.rows {
            y[i] = T::zero();
            for j in 0..self.cols {
                y[i] = y[i] + self.data[i][j] * x[j];
            }
        }
    }
}
