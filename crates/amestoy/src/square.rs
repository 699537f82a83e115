//! Odd-order magic squares by the Siamese (De la Loubère) method.
//!
//! # Placement Rule
//!
//! ```text
//! start at (0, n/2)
//! for each value v in start, start + 1, …, start + n² − 1:
//!     place v
//!     candidate = (row − 1, col + 1) mod n
//!     if candidate is filled: move to (row + 1, col) mod n
//!     else:                   move to candidate
//! ```
//!
//! Occupancy is kept in a boolean grid alongside the values, so any start
//! value (including zero) is placed correctly.

use std::fmt;

use crate::error::SquareError;
use crate::tolerance::approx_eq;

/// An `n × n` grid holding `start, start + 1, …, start + n² − 1`, every row,
/// column and main diagonal of which sums to [`MagicSquare::magic_constant`].
#[derive(Debug, Clone, PartialEq)]
pub struct MagicSquare {
    order: usize,
    start: f64,
    /// Row-major, `order * order` entries.
    cells: Vec<f64>,
}

impl MagicSquare {
    /// Builds the Siamese-method square of `order` starting at `start`.
    ///
    /// # Errors
    ///
    /// Returns [`SquareError::UnsupportedOrder`] if `order` is even
    /// (including zero), and [`SquareError::TooLarge`] if `order²` cells
    /// cannot be addressed.
    pub fn siamese(order: usize, start: f64) -> Result<Self, SquareError> {
        if order % 2 == 0 {
            return Err(SquareError::UnsupportedOrder { order });
        }

        let n = order;
        let len = n
            .checked_mul(n)
            .filter(|len| {
                len.checked_mul(std::mem::size_of::<f64>())
                    .is_some_and(|bytes| bytes <= isize::MAX as usize)
            })
            .ok_or(SquareError::TooLarge { order })?;
        let mut cells = vec![0.0; len];
        let mut filled = vec![false; len];
        let (mut row, mut col) = (0, n / 2);

        for k in 0..len {
            let idx = row * n + col;
            cells[idx] = start + k as f64;
            filled[idx] = true;

            let up = (row + n - 1) % n;
            let right = (col + 1) % n;
            if filled[up * n + right] {
                row = (row + 1) % n;
            } else {
                row = up;
                col = right;
            }
        }

        Ok(Self {
            order,
            start,
            cells,
        })
    }

    /// Side length.
    #[must_use]
    pub const fn order(&self) -> usize {
        self.order
    }

    /// Smallest entry.
    #[must_use]
    pub const fn start(&self) -> f64 {
        self.start
    }

    /// Entry at (`row`, `col`), or `None` outside the grid.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.order || col >= self.order {
            return None;
        }
        Some(self.cells[row * self.order + col])
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.cells.chunks(self.order)
    }

    /// Grid as nested rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows().map(<[f64]>::to_vec).collect()
    }

    /// Realized magic constant: the sum of the first row.
    #[must_use]
    pub fn magic_constant(&self) -> f64 {
        self.cells[..self.order].iter().sum()
    }

    /// Sums of every row, every column and both main diagonals.
    #[must_use]
    pub fn line_sums(&self) -> LineSums {
        let n = self.order;
        let rows = self.rows().map(|r| r.iter().sum()).collect();
        let columns = (0..n)
            .map(|c| (0..n).map(|r| self.cells[r * n + c]).sum())
            .collect();
        let diagonal = (0..n).map(|i| self.cells[i * n + i]).sum();
        let anti_diagonal = (0..n).map(|i| self.cells[i * n + (n - 1 - i)]).sum();
        LineSums {
            rows,
            columns,
            diagonal,
            anti_diagonal,
        }
    }

    /// Returns true if every line sums to the realized magic constant.
    #[must_use]
    pub fn is_magic(&self, tolerance: f64) -> bool {
        self.line_sums()
            .off_by(self.magic_constant(), tolerance)
            .is_empty()
    }
}

impl fmt::Display for MagicSquare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .cells
            .iter()
            .map(|v| v.to_string().len())
            .max()
            .unwrap_or(0);
        for row in self.rows() {
            for (i, v) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{:>width$}", v.to_string())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Every line sum of a square, grouped by direction.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSums {
    /// Row sums, top to bottom.
    pub rows: Vec<f64>,
    /// Column sums, left to right.
    pub columns: Vec<f64>,
    /// Top-left to bottom-right.
    pub diagonal: f64,
    /// Top-right to bottom-left.
    pub anti_diagonal: f64,
}

impl LineSums {
    /// Labelled sums in row, column, diagonal order.
    pub fn labelled(&self) -> impl Iterator<Item = (String, f64)> + '_ {
        let rows = self
            .rows
            .iter()
            .enumerate()
            .map(|(i, s)| (format!("row {i}"), *s));
        let columns = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, s)| (format!("column {i}"), *s));
        rows.chain(columns).chain([
            ("diagonal".to_owned(), self.diagonal),
            ("anti-diagonal".to_owned(), self.anti_diagonal),
        ])
    }

    /// Lines whose sum differs from `target` beyond `tolerance`.
    #[must_use]
    pub fn off_by(&self, target: f64, tolerance: f64) -> Vec<(String, f64)> {
        self.labelled()
            .filter(|(_, s)| !approx_eq(*s, target, tolerance))
            .collect()
    }
}
