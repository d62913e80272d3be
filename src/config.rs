/// Width and height of every board.
pub const BOARD_SIZE: usize = 10;

/// Number of ships in the canonical fleet.
pub const NUM_SHIPS: usize = 5;

/// Ship lengths placed by `Board::place_all_ships`, in placement order.
pub const FLEET: [usize; NUM_SHIPS] = [5, 4, 3, 3, 2];

/// Total number of ship segments in the canonical fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Random draws tried before placement falls back to enumerating every
/// valid position. With the canonical fleet on a 10×10 board the random
/// phase almost always succeeds within a handful of draws.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;

/// Random draws tried by `Player::make_random_attack` before it picks from
/// the remaining unattacked cells directly.
pub const MAX_TARGET_ATTEMPTS: usize = 100;

/// Message carried by a rejected duplicate attack.
pub const DUPLICATE_ATTACK_MESSAGE: &str = "Already attacked this position";

/// Display name for a ship of the given length in the canonical fleet.
pub fn ship_name(length: usize) -> &'static str {
    match length {
        5 => "Carrier",
        4 => "Battleship",
        3 => "Cruiser",
        2 => "Destroyer",
        1 => "Patrol boat",
        _ => "Ship",
    }
}
