//! Common types for the rules engine: coordinates, attack results and errors.

use crate::config::{BOARD_SIZE, DUPLICATE_ATTACK_MESSAGE};

/// A cell on the board. `x` selects the row, `y` the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub x: usize,
    pub y: usize,
}

impl Coordinate {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Returns `true` if the coordinate lies inside a `BOARD_SIZE` grid.
    pub fn in_bounds(&self) -> bool {
        self.x < BOARD_SIZE && self.y < BOARD_SIZE
    }

    /// Checked constructor rejecting cells outside the board.
    pub fn checked(x: usize, y: usize) -> Result<Self, GameError> {
        let coord = Self::new(x, y);
        if coord.in_bounds() {
            Ok(coord)
        } else {
            Err(GameError::OutOfBounds { x, y })
        }
    }
}

impl core::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Outcome of a player's attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum AttackResult {
    /// The attack was recorded and delivered to the opponent board.
    Accepted { coord: Coordinate, is_hit: bool },
    /// The position had already been attacked; nothing changed.
    Rejected {
        coord: Coordinate,
        message: &'static str,
    },
}

impl AttackResult {
    pub(crate) fn duplicate(coord: Coordinate) -> Self {
        AttackResult::Rejected {
            coord,
            message: DUPLICATE_ATTACK_MESSAGE,
        }
    }

    /// `true` for an accepted attack.
    pub fn is_valid(&self) -> bool {
        matches!(self, AttackResult::Accepted { .. })
    }

    /// `true` only for an accepted attack that struck a ship.
    pub fn is_hit(&self) -> bool {
        matches!(self, AttackResult::Accepted { is_hit: true, .. })
    }

    /// Rejection message, if any.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            AttackResult::Accepted { .. } => None,
            AttackResult::Rejected { message, .. } => Some(message),
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        match self {
            AttackResult::Accepted { coord, .. } | AttackResult::Rejected { coord, .. } => *coord,
        }
    }
}

/// Errors returned by board, player and game operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Coordinate lies outside the board.
    OutOfBounds { x: usize, y: usize },
    /// Ships must have a length of at least one.
    InvalidShipLength(usize),
    /// Ship footprint leaves the board.
    ShipOutOfBounds,
    /// Ship footprint overlaps another ship.
    ShipOverlaps,
    /// No valid position exists for a ship of this length.
    UnableToPlaceShip { length: usize },
    /// Operation not permitted for this player or state.
    InvalidOperation(&'static str),
    /// Every cell of the opponent board has already been attacked.
    BoardExhausted,
    /// The game already has a winner.
    GameOver,
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::OutOfBounds { x, y } => {
                write!(f, "Coordinate ({}, {}) is outside the board", x, y)
            }
            GameError::InvalidShipLength(len) => write!(f, "Invalid ship length {}", len),
            GameError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            GameError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            GameError::UnableToPlaceShip { length } => {
                write!(f, "Unable to place ship of length {}", length)
            }
            GameError::InvalidOperation(msg) => write!(f, "Invalid operation: {}", msg),
            GameError::BoardExhausted => write!(f, "Every position has already been attacked"),
            GameError::GameOver => write!(f, "The game is already over"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
