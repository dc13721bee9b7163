//! Cell states of the opponent grid.

use core::fmt;

/// State of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Water, never attacked.
    Empty,
    /// Attacked, nothing there.
    Missed,
    /// Ship segment hit, ship not yet sunk.
    Injured,
    /// Ship segment of a sunk ship.
    Killed,
    /// Hidden, unhit ship segment.
    Ship,
}

impl Cell {
    /// True once the cell has been resolved by an attack.
    pub fn is_opened(self) -> bool {
        matches!(self, Cell::Missed | Cell::Injured | Cell::Killed)
    }

    /// True for segments of a ship that is still afloat.
    pub fn is_alive(self) -> bool {
        matches!(self, Cell::Ship | Cell::Injured)
    }

    /// Observer view of the cell: unhit ships stay hidden.
    pub fn masked(self) -> Cell {
        match self {
            Cell::Ship => Cell::Empty,
            other => other,
        }
    }

    /// Single-character code used by the external grid representation.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Missed => '.',
            Cell::Injured => 'i',
            Cell::Killed => 'x',
            Cell::Ship => 'o',
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
