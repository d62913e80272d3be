use std::collections::HashSet;

use battleship_rules::{footprint, Board, Coordinate, Orientation, Ship, BOARD_SIZE, FLEET};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn random_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new();
    board.place_all_ships(&mut rng).unwrap();
    let attacks = rng.random_range(0..BOARD_SIZE * BOARD_SIZE);
    for _ in 0..attacks {
        let x = rng.random_range(0..BOARD_SIZE);
        let y = rng.random_range(0..BOARD_SIZE);
        board.receive_attack(x, y).unwrap();
    }
    board
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn fleet_is_complete_and_disjoint(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new();
        board.place_all_ships(&mut rng).unwrap();

        let mut lengths: Vec<_> = board.ships().iter().map(|s| s.length()).collect();
        lengths.sort_by(|a, b| b.cmp(a));
        prop_assert_eq!(lengths, FLEET.to_vec());

        // each ship index covers exactly its length, so no overlaps
        for (idx, ship) in board.ships().iter().enumerate() {
            let covered = board
                .grid()
                .iter()
                .flat_map(|row| row.iter())
                .filter(|c| **c == Some(idx))
                .count();
            prop_assert_eq!(covered, ship.length());
        }
    }

    #[test]
    fn receive_attack_grows_one_list(seed in any::<u64>(), x in 0..BOARD_SIZE, y in 0..BOARD_SIZE) {
        let mut board = random_board(seed);
        let misses = board.missed_attacks().len();
        let hits = board.hit_attacks().len();
        let target = board.cell(x, y).unwrap();
        let ship_hits = target.map(|i| board.ships()[i].hits());

        board.receive_attack(x, y).unwrap();

        match target {
            Some(i) => {
                prop_assert_eq!(board.hit_attacks().len(), hits + 1);
                prop_assert_eq!(board.missed_attacks().len(), misses);
                let ship = board.ships()[i];
                let before = ship_hits.unwrap();
                prop_assert_eq!(ship.hits(), (before + 1).min(ship.length()));
            }
            None => {
                prop_assert_eq!(board.missed_attacks().len(), misses + 1);
                prop_assert_eq!(board.hit_attacks().len(), hits);
            }
        }
        prop_assert_eq!(board.ships().len(), FLEET.len());
    }

    #[test]
    fn all_sunk_matches_ships(seed in any::<u64>()) {
        let board = random_board(seed);
        let expected = board.ships().iter().all(|s| s.is_sunk());
        prop_assert_eq!(board.all_ships_sunk(), expected);
        for ship in board.ships() {
            prop_assert!(ship.hits() <= ship.length());
        }
    }

    #[test]
    fn valid_placement_matches_footprint(
        len in 1usize..=5,
        x in 0..BOARD_SIZE + 2,
        y in 0..BOARD_SIZE + 2,
        vertical in any::<bool>(),
    ) {
        let orientation = if vertical { Orientation::Vertical } else { Orientation::Horizontal };
        let board = Board::new();
        let cells: HashSet<Coordinate> = footprint(len, x, y, orientation).collect();
        let in_bounds = cells.iter().all(|c| c.in_bounds());
        prop_assert_eq!(board.is_valid_placement(len, x, y, orientation), in_bounds);
    }

    #[test]
    fn ship_hits_never_exceed_length(len in 1usize..=10, hits in 0usize..20) {
        let mut ship = Ship::new(len).unwrap();
        let mut last = 0;
        for _ in 0..hits {
            ship.hit();
            prop_assert!(ship.hits() >= last);
            last = ship.hits();
        }
        prop_assert_eq!(ship.hits(), hits.min(len));
        prop_assert_eq!(ship.is_sunk(), hits >= len);
    }
}
