/// Side length of the square board.
pub const GRID_SIZE: usize = 10;

/// Ship lengths placed on every new board, biggest first. Placing the large
/// ships while the board is still mostly empty keeps placement retries low.
pub const FLEET: [usize; 10] = [4, 3, 3, 2, 2, 2, 1, 1, 1, 1];

pub const NUM_SHIPS: usize = FLEET.len();

/// Total number of ship cells on a freshly placed board.
pub const TOTAL_SHIP_CELLS: usize = 20;

/// Random placement attempts per ship before falling back to a scan.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1000;
