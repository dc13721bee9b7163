//! Common types: attack outcomes, game status, board errors.

/// Result of resolving an attack against the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum AttackOutcome {
    /// Out of bounds, already resolved, or the game is over. No mutation.
    Invalid,
    /// Attack hit open water.
    Missed,
    /// Attack hit a ship that still has unhit segments.
    Injured,
    /// Attack sank a whole ship.
    Killed,
}

/// Lifecycle of a game session. `Finished` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum GameStatus {
    InProgress,
    Finished,
}

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Errors returned by board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate outside the grid.
    OutOfBounds,
    /// Ship placement overlaps or touches another ship.
    PlacementBlocked,
    /// No open slot left for a ship of the requested length.
    PlacementFailed,
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::OutOfBounds => write!(f, "Coordinate is outside the grid"),
            BoardError::PlacementBlocked => {
                write!(f, "Ship placement overlaps or touches another ship")
            }
            BoardError::PlacementFailed => write!(f, "No open slot left for the ship"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
