//! Game board state: ship occupancy and attack history for one player.

use alloc::vec::Vec;
use core::fmt;

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::common::{Coordinate, GameError};
use crate::config::{BOARD_SIZE, FLEET, MAX_PLACEMENT_ATTEMPTS};
use crate::ship::{footprint, Orientation, Ship};

/// Occupancy grid. Each cell holds the index of the ship covering it.
pub type Grid = [[Option<usize>; BOARD_SIZE]; BOARD_SIZE];

/// A candidate ship position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub x: usize,
    pub y: usize,
    pub orientation: Orientation,
}

/// One player's `BOARD_SIZE`×`BOARD_SIZE` board.
///
/// The board never deduplicates attacks: attacking the same occupied cell
/// twice hits its ship twice (up to the ship's cap) and records two entries
/// in `hit_attacks`. Suppressing repeats is the attacking `Player`'s job.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    ships: Vec<Ship>,
    missed_attacks: Vec<Coordinate>,
    hit_attacks: Vec<Coordinate>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board: no ships, no attacks.
    pub fn new() -> Self {
        Board {
            grid: [[None; BOARD_SIZE]; BOARD_SIZE],
            ships: Vec::new(),
            missed_attacks: Vec::new(),
            hit_attacks: Vec::new(),
        }
    }

    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Read-only occupancy grid for rendering.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Ships placed on this board, in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn missed_attacks(&self) -> &[Coordinate] {
        &self.missed_attacks
    }

    pub fn hit_attacks(&self) -> &[Coordinate] {
        &self.hit_attacks
    }

    /// Index of the ship occupying (`x`, `y`), if any.
    pub fn cell(&self, x: usize, y: usize) -> Result<Option<usize>, GameError> {
        let coord = Coordinate::checked(x, y)?;
        Ok(self.grid[coord.x][coord.y])
    }

    pub fn is_occupied(&self, x: usize, y: usize) -> Result<bool, GameError> {
        Ok(self.cell(x, y)?.is_some())
    }

    /// Ship occupying (`x`, `y`), if any.
    pub fn ship_at(&self, x: usize, y: usize) -> Result<Option<&Ship>, GameError> {
        Ok(self.cell(x, y)?.and_then(|idx| self.ships.get(idx)))
    }

    /// Returns `true` if a ship of `ship_length` fits at (`x`, `y`) without
    /// leaving the board or touching an occupied cell.
    pub fn is_valid_placement(
        &self,
        ship_length: usize,
        x: usize,
        y: usize,
        orientation: Orientation,
    ) -> bool {
        ship_length > 0
            && footprint(ship_length, x, y, orientation)
                .all(|c| c.in_bounds() && self.grid[c.x][c.y].is_none())
    }

    /// Every valid position for a ship of `ship_length` on the current board.
    pub fn valid_placements(&self, ship_length: usize) -> Vec<Placement> {
        let mut out = Vec::new();
        for orientation in Orientation::ALL {
            for x in 0..BOARD_SIZE {
                for y in 0..BOARD_SIZE {
                    if self.is_valid_placement(ship_length, x, y, orientation) {
                        out.push(Placement { x, y, orientation });
                    }
                }
            }
        }
        out
    }

    /// Commit `ship` at (`x`, `y`) and return its index.
    ///
    /// No validation is done here so callers can preview with
    /// [`Board::is_valid_placement`] before committing. Footprint cells
    /// outside the board are skipped; overlapping cells are reassigned to
    /// the new ship.
    pub fn add_ship_to_board(
        &mut self,
        ship: Ship,
        x: usize,
        y: usize,
        orientation: Orientation,
    ) -> usize {
        let index = self.ships.len();
        for c in footprint(ship.length(), x, y, orientation) {
            if let Some(cell) = self.grid.get_mut(c.x).and_then(|row| row.get_mut(c.y)) {
                *cell = Some(index);
            }
        }
        self.ships.push(ship);
        log::debug!(
            "placed ship #{} (length {}) at ({}, {}) {:?}",
            index,
            ship.length(),
            x,
            y,
            orientation
        );
        index
    }

    /// Validated manual placement.
    pub fn place_ship_at(
        &mut self,
        ship: Ship,
        x: usize,
        y: usize,
        orientation: Orientation,
    ) -> Result<usize, GameError> {
        if !footprint(ship.length(), x, y, orientation).all(|c| c.in_bounds()) {
            return Err(GameError::ShipOutOfBounds);
        }
        if !self.is_valid_placement(ship.length(), x, y, orientation) {
            return Err(GameError::ShipOverlaps);
        }
        Ok(self.add_ship_to_board(ship, x, y, orientation))
    }

    /// Returns a random valid placement for a ship of `ship_length`.
    ///
    /// Draws up to `MAX_PLACEMENT_ATTEMPTS` random positions, then falls back
    /// to picking uniformly among all valid placements, so it only fails when
    /// no placement exists at all.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        ship_length: usize,
    ) -> Result<Placement, GameError> {
        if ship_length == 0 || ship_length > BOARD_SIZE {
            return Err(GameError::UnableToPlaceShip {
                length: ship_length,
            });
        }
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let max_x = if orientation == Orientation::Vertical {
                BOARD_SIZE - ship_length
            } else {
                BOARD_SIZE - 1
            };
            let max_y = if orientation == Orientation::Horizontal {
                BOARD_SIZE - ship_length
            } else {
                BOARD_SIZE - 1
            };
            let x = rng.random_range(0..=max_x);
            let y = rng.random_range(0..=max_y);
            if self.is_valid_placement(ship_length, x, y, orientation) {
                return Ok(Placement { x, y, orientation });
            }
        }
        log::warn!(
            "random placement for length {} gave up after {} attempts, enumerating",
            ship_length,
            MAX_PLACEMENT_ATTEMPTS
        );
        self.valid_placements(ship_length)
            .choose(rng)
            .copied()
            .ok_or(GameError::UnableToPlaceShip {
                length: ship_length,
            })
    }

    /// Place `ship` at a random valid position and return its index.
    pub fn place_ship<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        ship: Ship,
    ) -> Result<usize, GameError> {
        let p = self.random_placement(rng, ship.length())?;
        Ok(self.add_ship_to_board(ship, p.x, p.y, p.orientation))
    }

    /// Replace the board contents with a freshly placed canonical fleet.
    ///
    /// Ships, occupancy and attack history are all cleared first, so calling
    /// this twice leaves exactly one fleet on the board.
    pub fn place_all_ships<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        *self = Board::new();
        for length in FLEET {
            self.place_ship(rng, Ship::new(length)?)?;
        }
        Ok(())
    }

    /// Resolve an incoming attack at (`x`, `y`).
    ///
    /// A miss is appended to `missed_attacks`; a hit damages the occupying
    /// ship and is appended to `hit_attacks`. Exactly one list grows per
    /// call, including for cells that were already attacked.
    pub fn receive_attack(&mut self, x: usize, y: usize) -> Result<(), GameError> {
        let coord = Coordinate::checked(x, y)?;
        match self.grid[coord.x][coord.y] {
            Some(idx) => {
                if let Some(ship) = self.ships.get_mut(idx) {
                    ship.hit();
                }
                self.hit_attacks.push(coord);
            }
            None => self.missed_attacks.push(coord),
        }
        Ok(())
    }

    /// Returns `true` when every ship is sunk. Vacuously true with no ships.
    pub fn all_ships_sunk(&self) -> bool {
        self.ships.iter().all(|s| s.is_sunk())
    }

    /// Returns `true` if (`x`, `y`) appears in either attack list.
    pub fn was_attacked(&self, x: usize, y: usize) -> bool {
        let coord = Coordinate::new(x, y);
        self.hit_attacks.contains(&coord) || self.missed_attacks.contains(&coord)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        for row in self.grid.iter() {
            write!(f, "  ")?;
            for cell in row.iter() {
                match cell {
                    Some(idx) => write!(f, "{}", idx)?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        writeln!(
            f,
            "  ships: {:?},\n  hits: {:?},\n  misses: {:?}\n}}",
            self.ships, self.hit_attacks, self.missed_attacks
        )
    }
}
