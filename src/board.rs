//! Opponent grid: cell storage, bounds queries, manual ship placement.

use core::fmt;

use crate::cell::Cell;
use crate::common::{BoardError, Orientation};
use crate::config::GRID_SIZE;

/// Square grid of cell states. Mutated only through fleet placement at
/// creation and attack resolution during play.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; GRID_SIZE]; GRID_SIZE],
}

impl Board {
    /// Create an all-empty board.
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Cell at (`row`, `col`), or `OutOfBounds`.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return Err(BoardError::OutOfBounds);
        }
        Ok(self.cells[row][col])
    }

    /// Raw grid, row major. Unhit ships are visible here; observers go
    /// through the masked snapshot instead.
    pub fn cells(&self) -> &[[Cell; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    /// Cell at a signed coordinate, `None` off the board.
    pub(crate) fn at(&self, row: isize, col: isize) -> Option<Cell> {
        if Self::over_board(row, col) {
            None
        } else {
            Some(self.cells[row as usize][col as usize])
        }
    }

    /// Write a cell. Engine internal; callers hold in-bounds coordinates.
    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        debug_assert!(row < GRID_SIZE && col < GRID_SIZE);
        self.cells[row][col] = cell;
    }

    /// Write a cell at a signed coordinate, ignoring off-board writes.
    pub(crate) fn mark(&mut self, row: isize, col: isize, cell: Cell) {
        if !Self::over_board(row, col) {
            self.cells[row as usize][col as usize] = cell;
        }
    }

    /// Treats the border uniformly with empty interior cells, so placement
    /// and blast marking need no edge special-casing.
    pub fn is_empty_or_off_board(&self, row: isize, col: isize) -> bool {
        match self.at(row, col) {
            None => true,
            Some(cell) => cell == Cell::Empty,
        }
    }

    /// Count of cells still exactly `Ship`. Zero means every ship is sunk;
    /// `Injured` cells never outlive the attack that sinks their ship, so
    /// they do not need to be counted here.
    pub fn alive_ship_cells(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Cell::Ship)
            .count()
    }

    /// Place one ship, validating the one-cell buffer rule: every occupied
    /// cell must be in-bounds and its whole 8-neighborhood empty (off-board
    /// counts as empty). On failure nothing is written.
    pub fn place_ship(
        &mut self,
        length: usize,
        orientation: Orientation,
        row: usize,
        col: usize,
    ) -> Result<(), BoardError> {
        for (r, c) in ship_cells(length, orientation, row, col) {
            if r >= GRID_SIZE || c >= GRID_SIZE {
                return Err(BoardError::OutOfBounds);
            }
            for dr in -1..=1 {
                for dc in -1..=1 {
                    if !self.is_empty_or_off_board(r as isize + dr, c as isize + dc) {
                        return Err(BoardError::PlacementBlocked);
                    }
                }
            }
        }
        for (r, c) in ship_cells(length, orientation, row, col) {
            self.set(r, c, Cell::Ship);
        }
        Ok(())
    }

    fn over_board(row: isize, col: isize) -> bool {
        row < 0 || row >= GRID_SIZE as isize || col < 0 || col >= GRID_SIZE as isize
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        for row in &self.cells {
            write!(f, "  |")?;
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
            writeln!(f, "|")?;
        }
        write!(f, "}}")
    }
}

/// Cells a ship of `length` would occupy from its anchor. May run past the
/// grid; the caller bounds-checks.
pub(crate) fn ship_cells(
    length: usize,
    orientation: Orientation,
    row: usize,
    col: usize,
) -> impl Iterator<Item = (usize, usize)> {
    (0..length).map(move |i| match orientation {
        Orientation::Horizontal => (row, col + i),
        Orientation::Vertical => (row + i, col),
    })
}
