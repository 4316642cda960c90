//! Board/grid model shared by both game controllers.

use crate::error::{GameError, Result};
use serde::{Deserialize, Serialize};

/// A position on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub row: i16,
    pub col: i16,
}

impl Pos {
    pub fn new(row: i16, col: i16) -> Self {
        Self { row, col }
    }

    /// Returns the position shifted by the given (row, col) delta.
    pub fn offset(self, d_row: i16, d_col: i16) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }
}

/// A player mark in the turn-based game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A single cell: empty or holding a mark.
pub type Cell = Option<Mark>;

/// Fixed-size rectangular board. Dimensions are set at construction and never
/// change for the board's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: i16,
    cols: i16,
    cells: Vec<Cell>,
}

/// Orthogonal neighbor deltas, in scan order.
const ORTHOGONAL: [(i16, i16); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

impl Board {
    /// Create a board with all cells empty.
    ///
    /// Panics if either dimension is not positive; board dimensions come from
    /// host configuration, not player input.
    pub fn new(rows: i16, cols: i16) -> Self {
        assert!(rows > 0 && cols > 0, "board dimensions must be positive");
        Self {
            rows,
            cols,
            cells: vec![None; rows as usize * cols as usize],
        }
    }

    pub fn rows(&self) -> i16 {
        self.rows
    }

    pub fn cols(&self) -> i16 {
        self.cols
    }

    /// True if the position lies within the grid.
    pub fn contains(&self, pos: Pos) -> bool {
        pos.row >= 0 && pos.row < self.rows && pos.col >= 0 && pos.col < self.cols
    }

    fn index(&self, pos: Pos) -> Result<usize> {
        if !self.contains(pos) {
            return Err(GameError::OutOfBounds {
                row: pos.row,
                col: pos.col,
            });
        }
        Ok(pos.row as usize * self.cols as usize + pos.col as usize)
    }

    /// Read the cell at `pos`.
    pub fn get(&self, pos: Pos) -> Result<Cell> {
        Ok(self.cells[self.index(pos)?])
    }

    /// Write the cell at `pos`. Overwrites unconditionally; occupancy rules
    /// belong to the controllers.
    pub fn set(&mut self, pos: Pos, cell: Cell) -> Result<()> {
        let idx = self.index(pos)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// True when no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// All empty positions in row-major order.
    pub fn empty_positions(&self) -> Vec<Pos> {
        let mut out = Vec::new();
        for row in 0..self.rows {
            for col in 0..self.cols {
                let pos = Pos::new(row, col);
                if self.cells[pos.row as usize * self.cols as usize + pos.col as usize].is_none() {
                    out.push(pos);
                }
            }
        }
        out
    }

    /// The orthogonal in-bounds neighbors of `pos`.
    pub fn neighbors(&self, pos: Pos) -> Vec<Pos> {
        ORTHOGONAL
            .iter()
            .map(|&(dr, dc)| pos.offset(dr, dc))
            .filter(|&p| self.contains(p))
            .collect()
    }
}
