//! Board state and incremental win detection.

use crate::types::{Cell, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of a standard board.
pub const DEFAULT_SIZE: usize = 3;

/// An N x N grid with running line sums for O(N) win checks.
///
/// Each counter holds (X cells) minus (O cells) along its line, updated on
/// every placement. A counter reaching +N means the line belongs entirely
/// to X, -N entirely to O, so a win check scans 2N + 2 counters instead of
/// the whole grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    /// Cells in row-major order.
    cells: Vec<Cell>,
    row_sums: Vec<i32>,
    col_sums: Vec<i32>,
    diag_sum: i32,
    anti_diag_sum: i32,
}

impl Board {
    /// Creates an empty 3x3 board.
    pub fn new() -> Self {
        Self::with_size(DEFAULT_SIZE)
    }

    /// Creates an empty board of the given side length.
    pub fn with_size(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
            row_sums: vec![0; size],
            col_sums: vec![0; size],
            diag_sum: 0,
            anti_diag_sum: 0,
        }
    }

    /// Board side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the cell at the given coordinates, or `None` out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(self.cells[row * self.size + col])
    }

    /// True when both coordinates lie on the board and the cell is empty.
    ///
    /// Out-of-range coordinates report `false` rather than panicking.
    pub fn is_valid_move(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Cell::Empty))
    }

    /// Places `mark` at the given coordinates.
    ///
    /// A rejected move (occupied cell or out-of-range coordinates) returns
    /// `false` and leaves the grid and every counter untouched.
    #[instrument(skip(self))]
    pub fn make_move(&mut self, row: usize, col: usize, mark: Mark) -> bool {
        if !self.is_valid_move(row, col) {
            return false;
        }

        self.cells[row * self.size + col] = Cell::Occupied(mark);

        let unit = mark.signed_unit();
        self.row_sums[row] += unit;
        self.col_sums[col] += unit;
        if row == col {
            self.diag_sum += unit;
        }
        if row + col == self.size - 1 {
            self.anti_diag_sum += unit;
        }

        true
    }

    /// Scans the line counters for a completed line.
    ///
    /// Rows are checked first, then columns, then the main diagonal, then
    /// the anti-diagonal. Runs in O(N) thanks to the incremental counters.
    pub fn check_winner(&self) -> Option<Mark> {
        let target = self.size as i32;

        for &sum in self.row_sums.iter().chain(self.col_sums.iter()) {
            if sum == target {
                return Some(Mark::X);
            }
            if sum == -target {
                return Some(Mark::O);
            }
        }

        if self.diag_sum == target {
            return Some(Mark::X);
        }
        if self.diag_sum == -target {
            return Some(Mark::O);
        }

        if self.anti_diag_sum == target {
            return Some(Mark::X);
        }
        if self.anti_diag_sum == -target {
            return Some(Mark::O);
        }

        None
    }

    /// True when no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Returns an independent row-major copy of the grid.
    pub fn snapshot(&self) -> Vec<Vec<Cell>> {
        (0..self.size)
            .map(|row| self.cells[row * self.size..(row + 1) * self.size].to_vec())
            .collect()
    }

    /// Clears the grid and every line counter.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
        self.row_sums.fill(0);
        self.col_sums.fill(0);
        self.diag_sum = 0;
        self.anti_diag_sum = 0;
    }

    /// Formats the board as a human-readable string.
    pub fn render(&self) -> String {
        let mut result = String::new();
        for row in 0..self.size {
            for col in 0..self.size {
                let symbol = match self.cells[row * self.size + col] {
                    Cell::Empty => ".".to_string(),
                    Cell::Occupied(mark) => mark.to_string(),
                };
                result.push_str(&symbol);
                if col + 1 < self.size {
                    result.push('|');
                }
            }
            if row + 1 < self.size {
                result.push('\n');
                result.push_str(&vec!["-"; self.size].join("+"));
                result.push('\n');
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
