//! In-place Gaussian elimination with partial pivoting, and the rank
//! derived from it.
//!
//! The elimination is deliberately naive: the pivot is the entry of
//! largest absolute value in the remaining column, and a zero pivot is
//! not an error. Degenerate input propagates `NaN`/`±∞` through the
//! affected rows instead of aborting.
//!
//! # References
//! - Golub & Van Loan, Matrix Computations, §3.4

use crate::matrix::Matrix;
use num_traits::Float;

impl<T: Float> Matrix<T> {
    /// Reduce this matrix to row-echelon form, in place.
    ///
    /// For each pass `i`, the row with the largest absolute value in
    /// column `i` (at or below row `i`) is swapped up, then every row
    /// below is reduced by `c = -data[k][i] / data[i][i]`. The entry in
    /// the pivot column is written as an exact zero rather than computed.
    ///
    /// Passes stop at `min(rows, cols)`; past that point there is no
    /// pivot column left to eliminate. A zero pivot divides through and
    /// leaves `NaN`/`±∞` in the affected rows.
    ///
    /// Returns `&mut Self` for chaining.
    pub fn gaussian_elimination(&mut self) -> &mut Self {
        let passes = self.rows.min(self.cols);
        for i in 0..passes {
            // Largest |entry| in column i, at or below the diagonal.
            let mut max_el = self.data[i][i].abs();
            let mut max_row = i;
            for k in i + 1..self.rows {
                if self.data[k][i].abs() > max_el {
                    max_el = self.data[k][i].abs();
                    max_row = k;
                }
            }
            // Swap the pivot row up. Columns left of i are already zero
            // below the diagonal, so the swap starts at i.
            if max_row != i {
                for k in i..self.cols {
                    let tmp = self.data[max_row][k];
                    self.data[max_row][k] = self.data[i][k];
                    self.data[i][k] = tmp;
                }
            }
            // Zero out column i below the pivot.
            for k in i + 1..self.rows {
                let c = -self.data[k][i] / self.data[i][i];
                for j in i..self.cols {
                    if j == i {
                        self.data[k][j] = T::zero();
                    } else {
                        self.data[k][j] = self.data[k][j] + c * self.data[i][j];
                    }
                }
            }
        }
        self
    }

    /// Rank of the matrix: the number of non-zero rows after eliminating
    /// a clone, so the receiver is left untouched.
    ///
    /// A row holding `NaN` counts as non-zero, consistent with the
    /// zero-pivot policy of [`gaussian_elimination`](Self::gaussian_elimination).
    pub fn rank(&self) -> usize {
        let mut triangle = self.clone();
        triangle.gaussian_elimination();
        triangle
            .data
            .iter()
            .filter(|row| row.iter().any(|&v| v != T::zero()))
            .count()
    }
}
