//! Random fleet placement.

use rand::Rng;

use crate::board::Board;
use crate::common::{BoardError, Orientation};
use crate::config::{FLEET, GRID_SIZE, MAX_PLACEMENT_ATTEMPTS};

/// Scatter the fixed fleet onto `board`, biggest ship first.
///
/// Each ship gets `MAX_PLACEMENT_ATTEMPTS` random tries; if none fits, a
/// deterministic row-major scan takes the first open slot. `PlacementFailed`
/// means the board genuinely has no room left, which a caller should treat
/// as fatal to session creation and retry with a fresh board.
pub fn place_fleet<R: Rng>(board: &mut Board, rng: &mut R) -> Result<(), BoardError> {
    for &length in FLEET.iter() {
        place_ship_randomly(board, length, rng)?;
    }
    Ok(())
}

fn place_ship_randomly<R: Rng>(
    board: &mut Board,
    length: usize,
    rng: &mut R,
) -> Result<(), BoardError> {
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let row = rng.random_range(0..GRID_SIZE);
        let col = rng.random_range(0..GRID_SIZE);
        if board.place_ship(length, orientation, row, col).is_ok() {
            return Ok(());
        }
    }
    log::debug!(
        "random placement exhausted for length-{} ship, scanning for first open slot",
        length
    );
    first_open_slot(board, length)
}

fn first_open_slot(board: &mut Board, length: usize) -> Result<(), BoardError> {
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            for orientation in [Orientation::Horizontal, Orientation::Vertical] {
                if board.place_ship(length, orientation, row, col).is_ok() {
                    return Ok(());
                }
            }
        }
    }
    Err(BoardError::PlacementFailed)
}
