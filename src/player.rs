//! Players: a role, an owned board and the set of positions already attacked.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::board::Board;
use crate::common::{AttackResult, Coordinate, GameError};
use crate::config::{BOARD_SIZE, MAX_TARGET_ATTEMPTS};

/// Who drives a player. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerRole {
    Human,
    Computer,
}

/// A participant owning one board and tracking its attacks on an opponent.
#[derive(Debug, Clone)]
pub struct Player {
    role: PlayerRole,
    board: Board,
    attacked_positions: BTreeSet<Coordinate>,
}

impl Player {
    /// Create a player with an empty board and no attacks recorded.
    pub fn new(role: PlayerRole) -> Self {
        Self {
            role,
            board: Board::new(),
            attacked_positions: BTreeSet::new(),
        }
    }

    pub fn role(&self) -> PlayerRole {
        self.role
    }

    /// The player's own board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable reference to the player's board for ship placement.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Positions this player has attacked.
    pub fn attacked_positions(&self) -> &BTreeSet<Coordinate> {
        &self.attacked_positions
    }

    pub fn has_attacked(&self, x: usize, y: usize) -> bool {
        self.attacked_positions.contains(&Coordinate::new(x, y))
    }

    /// Number of opponent cells not yet attacked.
    pub fn remaining_targets(&self) -> usize {
        BOARD_SIZE * BOARD_SIZE - self.attacked_positions.len()
    }

    /// Attack (`x`, `y`) on `opponent`.
    ///
    /// Repeating a position returns [`AttackResult::Rejected`] and leaves both
    /// the opponent board and the attack set untouched.
    pub fn attack(
        &mut self,
        opponent: &mut Board,
        x: usize,
        y: usize,
    ) -> Result<AttackResult, GameError> {
        let coord = Coordinate::checked(x, y)?;
        if self.attacked_positions.contains(&coord) {
            log::debug!("{:?} repeated attack at {}", self.role, coord);
            return Ok(AttackResult::duplicate(coord));
        }

        // occupancy must be read before the ship takes damage
        let is_hit = opponent.is_occupied(coord.x, coord.y)?;
        self.attacked_positions.insert(coord);
        opponent.receive_attack(coord.x, coord.y)?;

        log::debug!(
            "{:?} attacked {}: {}",
            self.role,
            coord,
            if is_hit { "hit" } else { "miss" }
        );
        Ok(AttackResult::Accepted { coord, is_hit })
    }

    /// Attack a uniformly random, not yet attacked position on `opponent`.
    ///
    /// Only computer players may call this. Fails with
    /// [`GameError::BoardExhausted`] once every cell has been attacked.
    pub fn make_random_attack<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        opponent: &mut Board,
    ) -> Result<AttackResult, GameError> {
        if self.role != PlayerRole::Computer {
            return Err(GameError::InvalidOperation(
                "only computer players can make random attacks",
            ));
        }
        if self.remaining_targets() == 0 {
            return Err(GameError::BoardExhausted);
        }

        for _ in 0..MAX_TARGET_ATTEMPTS {
            let x = rng.random_range(0..BOARD_SIZE);
            let y = rng.random_range(0..BOARD_SIZE);
            if !self.has_attacked(x, y) {
                return self.attack(opponent, x, y);
            }
        }

        // late game: draw from what is left instead of retrying
        let open: Vec<Coordinate> = (0..BOARD_SIZE)
            .flat_map(|x| (0..BOARD_SIZE).map(move |y| Coordinate::new(x, y)))
            .filter(|c| !self.attacked_positions.contains(c))
            .collect();
        let target = *open.choose(rng).ok_or(GameError::BoardExhausted)?;
        self.attack(opponent, target.x, target.y)
    }

    /// Returns `true` once every ship on the player's own board is sunk.
    pub fn has_lost(&self) -> bool {
        self.board.all_ships_sunk()
    }

    /// Start over with an empty board and no recorded attacks.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.attacked_positions.clear();
    }
}
