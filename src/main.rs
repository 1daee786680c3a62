mod args;
mod error;
mod io;
mod model;
mod simulation;

use crate::io::{menu, reporting};
use crate::simulation::engine::Session;
use anyhow::Context;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    let config = args::load().into_config();

    println!("=== Piece Preview Simulator ({} tier) ===", config.tier);
    let rng = match config.seed {
        Some(seed) => {
            println!("Session seeded with {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    // The queue starts full; the reserve starts empty.
    let mut session = Session::new(config.tier, rng);
    println!("Queue filled; next piece id is {}", session.next_id());

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    menu::run(&mut session, stdin.lock(), stdout.lock()).context("terminal I/O failed")?;

    if let Some(path) = &config.history_path {
        reporting::export_history(path, &session.history)?;
    }
    Ok(())
}
