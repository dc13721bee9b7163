//! External JSON contract: session snapshots and attack request/response
//! shapes, with the field names the API collaborator serves.

use serde::{Deserialize, Serialize};

use crate::common::{AttackOutcome, BoardError, GameStatus};
use crate::config::GRID_SIZE;
use crate::game::Game;

/// Observer view of a session. Cells still hiding a ship render as the
/// empty marker; the raw ship marker never leaves the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub id: u64,
    #[serde(rename = "opponentGrid")]
    pub opponent_grid: [[char; GRID_SIZE]; GRID_SIZE],
    pub status: GameStatus,
}

impl From<&Game> for GameSnapshot {
    fn from(game: &Game) -> Self {
        let cells = game.board().cells();
        let mut grid = [[' '; GRID_SIZE]; GRID_SIZE];
        for (r, row) in cells.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                grid[r][c] = cell.masked().symbol();
            }
        }
        GameSnapshot {
            id: game.id(),
            opponent_grid: grid,
            status: game.status(),
        }
    }
}

/// Attack coordinates as received from a client, before range validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttackRequest {
    pub row: i64,
    pub column: i64,
}

impl AttackRequest {
    /// Validate both coordinates into the grid range. The engine tolerates
    /// out-of-range attacks on its own, but the API contract rejects them
    /// before they reach a session.
    pub fn coords(&self) -> Result<(usize, usize), BoardError> {
        let range = 0..GRID_SIZE as i64;
        if !range.contains(&self.row) || !range.contains(&self.column) {
            return Err(BoardError::OutOfBounds);
        }
        Ok((self.row as usize, self.column as usize))
    }
}

/// Outcome of an attack paired with the updated session view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackResponse {
    #[serde(rename = "attackStatus")]
    pub attack_status: AttackOutcome,
    pub game: GameSnapshot,
}
