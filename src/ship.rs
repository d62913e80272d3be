//! Ship definitions: a fixed-length segment that accumulates hits.

use crate::common::{Coordinate, GameError};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Extends along the row, increasing `y`.
    Horizontal,
    /// Extends down the column, increasing `x`.
    Vertical,
}

impl Orientation {
    pub const ALL: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];
}

/// Cells covered by a ship of `length` anchored at (`x`, `y`).
///
/// Cells past the edge of the board are still yielded; callers decide
/// whether that is an error.
pub fn footprint(
    length: usize,
    x: usize,
    y: usize,
    orientation: Orientation,
) -> impl Iterator<Item = Coordinate> {
    (0..length).map(move |i| match orientation {
        Orientation::Horizontal => Coordinate::new(x, y.saturating_add(i)),
        Orientation::Vertical => Coordinate::new(x.saturating_add(i), y),
    })
}

/// A ship with a fixed length and a hit counter capped at that length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Ship {
    length: usize,
    hits: usize,
}

impl Ship {
    /// Create an undamaged ship. Zero-length ships are rejected.
    pub fn new(length: usize) -> Result<Self, GameError> {
        if length == 0 {
            return Err(GameError::InvalidShipLength(length));
        }
        Ok(Ship { length, hits: 0 })
    }

    /// Register one hit. Hits past `length` are ignored.
    pub fn hit(&mut self) {
        if self.hits < self.length {
            self.hits += 1;
        }
    }

    /// Check if the ship is sunk (every segment hit).
    pub fn is_sunk(&self) -> bool {
        self.hits >= self.length
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn hits(&self) -> usize {
        self.hits
    }
}
