//! Dense row-major matrix type.
//!
//! `Matrix<T>` stores its entries as one `Vec` per row and keeps the backing
//! storage rectangular at all times: every constructor zero-pads short rows,
//! and every structural mutation (`add_row`, `add_column`, `concat`) checks
//! the operand shape before touching the receiver.
//!
//! The overloaded constructor of the ancestor API is split into named
//! factories (`from_rows`, `from_flat`, `from_shape`, `from_fn`, `scalar`)
//! so each construction mode is statically distinguishable.

use crate::core::traits::MatShape;
use crate::error::MatrixError;
use num_traits::Float;
use std::ops::Index;

/// Dense `rows × cols` matrix over a floating-point scalar.
///
/// A matrix with `rows == 0` or `cols == 0` is *empty*; elimination and
/// determinant computations short-circuit on empty matrices.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T> {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) data: Vec<Vec<T>>,
}

impl<T: Float> Matrix<T> {
    /// Build a matrix from explicit row data.
    ///
    /// The column count is the widest row; shorter rows are padded with
    /// zeros so the storage stays rectangular.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Self {
        let cols = rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut data = rows;
        for row in &mut data {
            row.resize(cols, T::zero());
        }
        Matrix {
            rows: data.len(),
            cols,
            data,
        }
    }

    /// Reshape a flat buffer into rows of `width` entries.
    ///
    /// A trailing short row is padded with zeros. Width `0` yields the
    /// empty matrix; a negative width is rejected with
    /// [`MatrixError::InvalidDimension`].
    pub fn from_flat(data: Vec<T>, width: isize) -> Result<Self, MatrixError> {
        if width < 0 {
            return Err(MatrixError::InvalidDimension(width));
        }
        let width = width as usize;
        if width == 0 {
            return Ok(Matrix {
                rows: 0,
                cols: 0,
                data: Vec::new(),
            });
        }
        let mut out = Vec::with_capacity(data.len().div_ceil(width));
        for chunk in data.chunks(width) {
            let mut row = chunk.to_vec();
            row.resize(width, T::zero());
            out.push(row);
        }
        Ok(Matrix {
            rows: out.len(),
            cols: width,
            data: out,
        })
    }

    /// Build a `rows × cols` matrix seeded with the identity pattern
    /// (`1` on the main diagonal, `0` elsewhere).
    pub fn from_shape(rows: usize, cols: usize) -> Self {
        Self::from_fn(rows, cols, |i, j| if i == j { T::one() } else { T::zero() })
    }

    /// Build a `rows × cols` matrix with `seed(i, j)` at row `i`, column `j`.
    pub fn from_fn(rows: usize, cols: usize, mut seed: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(rows);
        for i in 0..rows {
            let mut row = Vec::with_capacity(cols);
            for j in 0..cols {
                row.push(seed(i, j));
            }
            data.push(row);
        }
        Matrix { rows, cols, data }
    }

    /// Promote a scalar to a `1 × 1` matrix.
    pub fn scalar(value: T) -> Self {
        Matrix {
            rows: 1,
            cols: 1,
            data: vec![vec![value]],
        }
    }

    /// The `n × n` identity matrix.
    pub fn identity(n: usize) -> Self {
        Self::from_shape(n, n)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// True when the matrix has no rows or no columns.
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Row `y` as a slice.
    pub fn row(&self, y: usize) -> &[T] {
        &self.data[y]
    }

    /// Column `index` as a freshly allocated vector.
    pub fn get_column(&self, index: usize) -> Result<Vec<T>, MatrixError> {
        if index >= self.cols {
            return Err(MatrixError::IndexOutOfBounds {
                index,
                cols: self.cols,
            });
        }
        Ok(self.data.iter().map(|row| row[index]).collect())
    }

    /// The columns `start..end` as a new matrix.
    pub fn get_columns(&self, start: usize, end: usize) -> Result<Matrix<T>, MatrixError> {
        let mut out = Matrix::from_rows(Vec::new());
        for x in start..end {
            out.add_column(&self.get_column(x)?)?;
        }
        Ok(out)
    }

    /// Append `vec` as the rightmost column, in place.
    ///
    /// On a matrix with no columns the vector seeds the row count;
    /// otherwise its length must equal `rows`.
    pub fn add_column(&mut self, vec: &[T]) -> Result<&mut Self, MatrixError> {
        if self.cols > 0 && self.rows != vec.len() {
            return Err(MatrixError::DimensionMismatch(format!(
                "cannot add a column vector with {} elements to a {}x{} matrix",
                vec.len(),
                self.rows,
                self.cols
            )));
        }
        if self.cols == 0 {
            self.data = vec.iter().map(|&v| vec![v]).collect();
            self.rows = vec.len();
        } else {
            for (row, &v) in self.data.iter_mut().zip(vec) {
                row.push(v);
            }
        }
        self.cols += 1;
        Ok(self)
    }

    /// Append `vec` as the bottom row, in place. Its length must equal `cols`.
    pub fn add_row(&mut self, vec: &[T]) -> Result<&mut Self, MatrixError> {
        if self.cols != vec.len() {
            return Err(MatrixError::DimensionMismatch(format!(
                "cannot add a row vector with {} elements to a {}x{} matrix",
                vec.len(),
                self.rows,
                self.cols
            )));
        }
        self.data.push(vec.to_vec());
        self.rows += 1;
        Ok(self)
    }

    /// Append all columns of `other` to the right of this matrix, in place.
    ///
    /// The row counts must agree unless this matrix has no rows yet.
    pub fn concat(&mut self, other: &Matrix<T>) -> Result<&mut Self, MatrixError> {
        if self.rows > 0 && self.rows != other.rows {
            return Err(MatrixError::DimensionMismatch(format!(
                "cannot concat a {}x{} matrix to a {}x{} matrix",
                other.rows, other.cols, self.rows, self.cols
            )));
        }
        for x in 0..other.cols {
            self.add_column(&other.get_column(x)?)?;
        }
        Ok(self)
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        &self.data[i][j]
    }
}

impl<T> MatShape for Matrix<T> {
    fn nrows(&self) -> usize {
        self.rows
    }
    fn ncols(&self) -> usize {
        self.cols
    }
}
