use clap::Parser;
use rand::{rngs::SmallRng, SeedableRng};
use seabattle::prelude::*;
use serde_json::json;

/// Generate random fleets and let the targeting engine sink them.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible runs (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = 1)]
    games: usize,
    #[arg(long, default_value_t = seabattle::BOARD_WIDTH)]
    width: usize,
    #[arg(long, default_value_t = seabattle::BOARD_HEIGHT)]
    height: usize,
    /// Print every finished board to stderr.
    #[arg(long)]
    show: bool,
    /// Log level; overrides SEABATTLE_LOG.
    #[arg(long)]
    log_level: Option<log::LevelFilter>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.log_level {
        Some(level) => init_logging_with(level),
        None => init_logging(),
    }

    let mut rng = match cli.seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };

    let config = BoardConfig::new(cli.width, cli.height);
    let mut shots_per_game = Vec::with_capacity(cli.games);
    for game in 0..cli.games {
        let mut board = Board::with_config(config);
        reset_and_fill(&mut board, &mut rng)?;
        let board = board.into_shared();

        let mut engine = TargetingEngine::attach(board.clone(), &mut rng)?;
        let mut shots = 0usize;
        while engine.shoot_opponent(&mut rng)?.is_some() {
            shots += 1;
        }
        drop(engine);

        let board = board.borrow();
        if !board.all_ships_destroyed() {
            anyhow::bail!("game {} ended with ships still afloat", game + 1);
        }
        if cli.show {
            eprintln!("game {} ({} shots):\n{}\n", game + 1, shots, board);
        }
        log::info!("game {} finished in {} shots", game + 1, shots);
        shots_per_game.push(shots);
    }

    let total: usize = shots_per_game.iter().sum();
    let mean = if shots_per_game.is_empty() {
        0.0
    } else {
        total as f64 / shots_per_game.len() as f64
    };
    let result = json!({
        "games": shots_per_game.len(),
        "board": { "width": config.width, "height": config.height },
        "shots": {
            "min": shots_per_game.iter().min(),
            "max": shots_per_game.iter().max(),
            "mean": mean,
        },
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
