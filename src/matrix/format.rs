//! Human-readable matrix rendering.
//!
//! `Display` prints one bracketed row per line. The alternate form
//! (`{:#}`) right-aligns every column to the widest rendered entry of
//! that column.

use crate::matrix::Matrix;
use num_traits::Float;
use std::fmt;

fn column_display_widths<T: Float + fmt::Display>(m: &Matrix<T>) -> Vec<usize> {
    let mut widths = vec![0; m.cols];
    for row in &m.data {
        for (x, v) in row.iter().enumerate() {
            widths[x] = widths[x].max(v.to_string().len());
        }
    }
    widths
}

impl<T: Float + fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = if f.alternate() {
            column_display_widths(self)
        } else {
            vec![0; self.cols]
        };
        writeln!(f, "[")?;
        for y in 0..self.rows {
            write!(f, " [")?;
            for x in 0..self.cols {
                write!(f, "{:>width$}", self.data[y][x], width = widths[x])?;
                if x + 1 < self.cols {
                    write!(f, ",")?;
                }
            }
            write!(f, "]")?;
            if y + 1 < self.rows {
                write!(f, ",")?;
            }
            writeln!(f)?;
        }
        write!(f, "]")
    }
}
