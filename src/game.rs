//! Game session: one board, one status flag, `attack` as the sole mutator.

use rand::Rng;

use crate::board::Board;
use crate::common::{AttackOutcome, BoardError, GameStatus};
use crate::placement::place_fleet;
use crate::resolver;

/// A playable session. Owned and persisted by an external storage
/// collaborator, keyed by `id`; the engine never looks ids up itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    id: u64,
    board: Board,
    status: GameStatus,
}

impl Game {
    /// New session with a randomly placed fleet.
    pub fn new<R: Rng>(id: u64, rng: &mut R) -> Result<Self, BoardError> {
        let mut board = Board::new();
        place_fleet(&mut board, rng)?;
        Ok(Game {
            id,
            board,
            status: GameStatus::InProgress,
        })
    }

    /// Session over a prepared board, for manual setups.
    pub fn from_board(id: u64, board: Board) -> Self {
        Game {
            id,
            board,
            status: GameStatus::InProgress,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Attack a cell. Returns `Invalid` without touching the board once the
    /// game is finished or when the cell cannot be attacked; otherwise
    /// delegates to the resolver and applies the completion transition when
    /// the last ship goes down.
    pub fn attack(&mut self, row: usize, col: usize) -> AttackOutcome {
        if self.status == GameStatus::Finished {
            return AttackOutcome::Invalid;
        }
        let outcome = resolver::resolve(&mut self.board, row, col);
        if outcome == AttackOutcome::Killed && self.board.alive_ship_cells() == 0 {
            self.status = GameStatus::Finished;
        }
        outcome
    }
}
