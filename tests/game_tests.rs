use battleship_rules::{Game, GameError, GameStatus, Orientation, PlayerRole, Ship, BOARD_SIZE};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_computer_vs_computer_game() {
    let mut rng = SmallRng::seed_from_u64(123);
    let mut game = Game::new(PlayerRole::Computer, PlayerRole::Computer);
    game.setup(&mut rng).unwrap();

    let mut turns = 0;
    while game.status() == GameStatus::InProgress {
        turns += 1;
        game.random_attack(&mut rng).unwrap();
        if turns > 2 * BOARD_SIZE * BOARD_SIZE {
            panic!("game took too many turns");
        }
    }

    let GameStatus::Finished { winner } = game.status() else {
        panic!("game should be finished");
    };
    let loser = Game::opponent_of(winner);
    assert!(game.player(loser).unwrap().has_lost());
    assert!(!game.player(winner).unwrap().has_lost());
    assert_eq!(game.random_attack(&mut rng), Err(GameError::GameOver));
}

#[test]
fn test_turns_alternate_on_accepted_attacks() {
    let mut rng = SmallRng::seed_from_u64(9);
    let mut game = Game::new(PlayerRole::Human, PlayerRole::Computer);
    game.setup(&mut rng).unwrap();
    assert_eq!(game.current(), 0);

    assert!(game.attack(0, 0).unwrap().is_valid());
    assert_eq!(game.current(), 1);

    // the computer's random attack passes the turn back
    game.random_attack(&mut rng).unwrap();
    assert_eq!(game.current(), 0);

    // duplicate keeps the turn
    let res = game.attack(0, 0).unwrap();
    assert!(!res.is_valid());
    assert_eq!(game.current(), 0);
}

#[test]
fn test_human_cannot_random_attack() {
    let mut rng = SmallRng::seed_from_u64(10);
    let mut game = Game::new(PlayerRole::Human, PlayerRole::Computer);
    game.setup(&mut rng).unwrap();
    assert!(matches!(
        game.random_attack(&mut rng),
        Err(GameError::InvalidOperation(_))
    ));
    assert_eq!(game.current(), 0);
}

#[test]
fn test_sinking_last_ship_finishes_game() {
    let mut game = Game::new(PlayerRole::Human, PlayerRole::Human);
    for i in 0..2 {
        game.player_mut(i)
            .unwrap()
            .board_mut()
            .place_ship_at(Ship::new(2).unwrap(), 0, 0, Orientation::Horizontal)
            .unwrap();
    }

    game.attack(0, 0).unwrap();
    game.attack(9, 9).unwrap();
    assert_eq!(game.status(), GameStatus::InProgress);
    game.attack(0, 1).unwrap();
    assert_eq!(game.status(), GameStatus::Finished { winner: 0 });
    assert_eq!(game.attack(5, 5), Err(GameError::GameOver));
}
