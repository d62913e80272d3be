#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleship_rules::{
    cli::{coord_to_string, describe_attack, parse_coord, parse_placement, print_player_view},
    init_logging, ship_name, Board, Game, GameStatus, PlayerRole, Ship, FLEET,
};
#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::{rngs::SmallRng, SeedableRng};
#[cfg(feature = "std")]
use std::io::{self, Write};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Log level (error, warn, info, debug, trace). Overrides BATTLESHIP_LOG.
    #[arg(long, global = true)]
    log_level: Option<log::LevelFilter>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer in this terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Place your own ships instead of a random fleet")]
        manual: bool,
    },
    /// Watch two computer players fight it out.
    Auto {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn read_line(prompt: &str) -> anyhow::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        anyhow::bail!("input closed");
    }
    Ok(line.trim().to_string())
}

#[cfg(feature = "std")]
fn place_manually(rng: &mut SmallRng, board: &mut Board) -> anyhow::Result<()> {
    *board = Board::new();
    println!("Enter placements like 'A5 H' or 'B3 V'. Press ENTER for a random spot.");
    for length in FLEET {
        loop {
            print_player_view(board, &Board::new());
            let prompt = format!("{} (length {}): ", ship_name(length), length);
            let line = read_line(&prompt)?;
            let ship = Ship::new(length).map_err(|e| anyhow::anyhow!(e))?;
            if line.is_empty() {
                board
                    .place_ship(rng, ship)
                    .map_err(|e| anyhow::anyhow!(e))?;
                break;
            }
            match parse_placement(&line) {
                Ok((coord, orientation)) => {
                    match board.place_ship_at(ship, coord.x, coord.y, orientation) {
                        Ok(_) => break,
                        Err(e) => println!("✗ {}", e),
                    }
                }
                Err(e) => println!("✗ {}", e),
            }
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn play(seed: Option<u64>, manual: bool) -> anyhow::Result<()> {
    let mut rng = make_rng(seed);
    let mut game = Game::new(PlayerRole::Human, PlayerRole::Computer);
    game.setup(&mut rng).map_err(|e| anyhow::anyhow!(e))?;
    if manual {
        let human = game
            .player_mut(0)
            .ok_or_else(|| anyhow::anyhow!("missing human player"))?;
        place_manually(&mut rng, human.board_mut())?;
    }

    loop {
        if let GameStatus::Finished { winner } = game.status() {
            if winner == 0 {
                println!("\n🎉 You sank the whole enemy fleet!");
            } else {
                println!("\n💀 The computer sank your fleet.");
            }
            return Ok(());
        }

        if game.current() == 0 {
            let (own, opponent) = match (game.player(0), game.player(1)) {
                (Some(h), Some(c)) => (h.board(), c.board()),
                _ => anyhow::bail!("game has fewer than two players"),
            };
            print_player_view(own, opponent);
            let line = read_line("\nEnter target (e.g. A5): ")?;
            let coord = match parse_coord(&line) {
                Ok(c) => c,
                Err(e) => {
                    println!("✗ Invalid coordinate: {}", e);
                    continue;
                }
            };
            let result = game
                .attack(coord.x, coord.y)
                .map_err(|e| anyhow::anyhow!(e))?;
            println!("{}", describe_attack("You", &result));
        } else {
            let result = game
                .random_attack(&mut rng)
                .map_err(|e| anyhow::anyhow!(e))?;
            println!("{}", describe_attack("Computer", &result));
            log::debug!("computer targeted {}", coord_to_string(result.coordinate()));
        }
    }
}

#[cfg(feature = "std")]
fn auto(seed: Option<u64>) -> anyhow::Result<()> {
    let mut rng = make_rng(seed);
    let mut game = Game::new(PlayerRole::Computer, PlayerRole::Computer);
    game.setup(&mut rng).map_err(|e| anyhow::anyhow!(e))?;

    let mut turns = 0;
    while game.status() == GameStatus::InProgress {
        let who = format!("Player {}", game.current() + 1);
        let result = game
            .random_attack(&mut rng)
            .map_err(|e| anyhow::anyhow!(e))?;
        turns += 1;
        println!("{}", describe_attack(&who, &result));
    }
    if let GameStatus::Finished { winner } = game.status() {
        println!("Player {} wins after {} shots.", winner + 1, turns);
    }
    Ok(())
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    match cli.command {
        Commands::Play { seed, manual } => play(seed, manual),
        Commands::Auto { seed } => auto(seed),
    }
}
