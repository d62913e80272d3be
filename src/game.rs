use rand::Rng;

use crate::{
    board::Board,
    common::{AttackResult, GameError},
    player::{Player, PlayerRole},
};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum GameStatus {
    InProgress,
    /// Index of the player whose opponent lost every ship.
    Finished { winner: usize },
}

/// A two-player session: both players, whose turn it is, and the outcome.
///
/// A rejected attack keeps the turn with the attacker; an accepted one
/// passes it to the opponent unless that attack ended the game.
#[derive(Debug, Clone)]
pub struct Game {
    players: [Player; 2],
    current: usize,
    status: GameStatus,
}

impl Game {
    /// Create a session with empty boards. Player 0 moves first.
    ///
    /// An empty board has already lost, so place fleets (usually with
    /// [`Game::setup`]) before the first attack.
    pub fn new(first: PlayerRole, second: PlayerRole) -> Self {
        Self {
            players: [Player::new(first), Player::new(second)],
            current: 0,
            status: GameStatus::InProgress,
        }
    }

    /// Reset both players and place a random canonical fleet for each.
    pub fn setup<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        for player in self.players.iter_mut() {
            player.reset();
            player.board_mut().place_all_ships(rng)?;
        }
        self.current = 0;
        self.status = GameStatus::InProgress;
        Ok(())
    }

    /// Index of the player to move.
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn opponent_of(index: usize) -> usize {
        1 - index
    }

    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    pub fn player_mut(&mut self, index: usize) -> Option<&mut Player> {
        self.players.get_mut(index)
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    fn attacker_and_defender(&mut self) -> (&mut Player, &mut Board) {
        let [first, second] = &mut self.players;
        if self.current == 0 {
            (first, second.board_mut())
        } else {
            (second, first.board_mut())
        }
    }

    /// The current player attacks (`x`, `y`) on the opponent's board.
    pub fn attack(&mut self, x: usize, y: usize) -> Result<AttackResult, GameError> {
        if self.status != GameStatus::InProgress {
            return Err(GameError::GameOver);
        }
        let (attacker, defender) = self.attacker_and_defender();
        let result = attacker.attack(defender, x, y)?;
        self.finish_turn(result);
        Ok(result)
    }

    /// The current player, which must be a computer, attacks at random.
    pub fn random_attack<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<AttackResult, GameError> {
        if self.status != GameStatus::InProgress {
            return Err(GameError::GameOver);
        }
        let (attacker, defender) = self.attacker_and_defender();
        let result = attacker.make_random_attack(rng, defender)?;
        self.finish_turn(result);
        Ok(result)
    }

    fn finish_turn(&mut self, result: AttackResult) {
        if !result.is_valid() {
            return;
        }
        let defender = Self::opponent_of(self.current);
        if self.players[defender].has_lost() {
            log::info!("player {} sank the last ship", self.current);
            self.status = GameStatus::Finished {
                winner: self.current,
            };
        } else {
            self.current = defender;
        }
    }
}
