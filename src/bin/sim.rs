use battleship_rules::{Game, GameStatus, PlayerRole};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let mut rngs = [SmallRng::seed_from_u64(seed1), SmallRng::seed_from_u64(seed2)];
    let mut game = Game::new(PlayerRole::Computer, PlayerRole::Computer);
    for (i, rng) in rngs.iter_mut().enumerate() {
        game.player_mut(i)
            .ok_or_else(|| anyhow::anyhow!("missing player {}", i))?
            .board_mut()
            .place_all_ships(rng)
            .map_err(|e| anyhow::anyhow!(e))?;
    }

    while game.status() == GameStatus::InProgress {
        let rng = &mut rngs[game.current()];
        game.random_attack(rng).map_err(|e| anyhow::anyhow!(e))?;
    }

    let winner = match game.status() {
        GameStatus::Finished { winner: 0 } => Some("player1"),
        GameStatus::Finished { winner: 1 } => Some("player2"),
        _ => None,
    };

    let mut report = serde_json::Map::new();
    for i in 0..2 {
        let player = game
            .player(i)
            .ok_or_else(|| anyhow::anyhow!("missing player {}", i))?;
        report.insert(
            format!("player{}", i + 1),
            json!({
                "shots": player.attacked_positions().len(),
                "ships_sunk_by_opponent": player.board().ships().iter().filter(|s| s.is_sunk()).count(),
                "lost": player.has_lost(),
            }),
        );
    }
    report.insert("winner".to_string(), json!(winner));
    report.insert("status".to_string(), serde_json::to_value(game.status())?);

    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
