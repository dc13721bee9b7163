//! Attack resolution: hit classification, sinking detection, blast marking.
//!
//! Ships are straight lines with a guaranteed one-cell buffer around them,
//! which the algorithms here lean on: the rest of an attacked ship can only
//! lie on the four orthogonal rays from the attacked cell, and a ship cell's
//! diagonal neighbors can never hold another ship, so marking them `Missed`
//! is always safe.

use crate::board::Board;
use crate::cell::Cell;
use crate::common::AttackOutcome;

const ORTHOGONAL: [(isize, isize); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
const DIAGONAL: [(isize, isize); 4] = [(1, 1), (-1, -1), (1, -1), (-1, 1)];

/// Resolve an attack at (`row`, `col`), mutating `board`. Out-of-bounds and
/// already-opened cells report `Invalid` without mutation; a call either
/// fully applies its cell updates or applies none.
pub(crate) fn resolve(board: &mut Board, row: usize, col: usize) -> AttackOutcome {
    let cell = match board.get(row, col) {
        Ok(cell) => cell,
        Err(_) => return AttackOutcome::Invalid,
    };
    match cell {
        Cell::Missed | Cell::Injured | Cell::Killed => AttackOutcome::Invalid,
        Cell::Empty => {
            board.set(row, col, Cell::Missed);
            AttackOutcome::Missed
        }
        Cell::Ship => {
            if is_last_ship_cell(board, row, col) {
                kill_ship(board, row, col);
                AttackOutcome::Killed
            } else {
                board.set(row, col, Cell::Injured);
                mark_corners_missed(board, row as isize, col as isize);
                AttackOutcome::Injured
            }
        }
    }
}

/// Walk the four orthogonal rays from the origin; any `Ship` cell reached
/// through a run of alive cells means the ship still has unhit segments.
fn is_last_ship_cell(board: &Board, origin_row: usize, origin_col: usize) -> bool {
    for (dr, dc) in ORTHOGONAL {
        let mut row = origin_row as isize;
        let mut col = origin_col as isize;
        loop {
            row += dr;
            col += dc;
            match board.at(row, col) {
                Some(cell) if cell.is_alive() => {
                    if cell == Cell::Ship {
                        return false;
                    }
                }
                _ => break,
            }
        }
    }
    true
}

/// Sink propagation from the ship's final unhit cell: along each ray, alive
/// cells become `Killed` (with their diagonals swept), empty cells become
/// `Missed`, and the walk stops at the first already-marked cell or the edge.
fn kill_ship(board: &mut Board, origin_row: usize, origin_col: usize) {
    for (dr, dc) in ORTHOGONAL {
        let mut row = origin_row as isize;
        let mut col = origin_col as isize;
        loop {
            row += dr;
            col += dc;
            match board.at(row, col) {
                Some(cell) if cell.is_alive() => {
                    board.mark(row, col, Cell::Killed);
                    mark_corners_missed(board, row, col);
                }
                Some(Cell::Empty) => board.mark(row, col, Cell::Missed),
                _ => break,
            }
        }
    }
    board.set(origin_row, origin_col, Cell::Killed);
    mark_corners_missed(board, origin_row as isize, origin_col as isize);
}

fn mark_corners_missed(board: &mut Board, row: isize, col: isize) {
    for (dr, dc) in DIAGONAL {
        board.mark(row + dr, col + dc, Cell::Missed);
    }
}
