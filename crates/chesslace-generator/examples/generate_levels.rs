//! Example assembling a full level set.
//!
//! Runs the five-phase level-set generator under a wall-clock budget and
//! prints the resulting levels with their scores and bands.
//!
//! # Usage
//!
//! ```sh
//! cargo run --release --example generate_levels
//! ```
//!
//! Reproducible run from a seed phrase, with a shorter budget:
//!
//! ```sh
//! cargo run --release --example generate_levels -- --seed "pack 1" --budget-secs 60
//! ```
//!
//! Set `RUST_LOG=debug` to watch per-level progress.

use std::time::Duration;

use chesslace_generator::{Deadline, Difficulty, LevelSetOptions, PuzzleSeed, generate_level_set};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Seed phrase for a reproducible run; omit for OS entropy.
    #[arg(long, value_name = "PHRASE")]
    seed: Option<String>,

    /// Levels to generate per phase.
    #[arg(long, value_name = "COUNT", default_value_t = 20)]
    levels_per_phase: usize,

    /// Base budget per phase, in seconds.
    #[arg(long, value_name = "SECS", default_value_t = 50)]
    phase_budget_secs: u64,

    /// Budget for the whole run, in seconds.
    #[arg(long, value_name = "SECS", default_value_t = 300)]
    budget_secs: u64,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let seed = args
        .seed
        .as_deref()
        .map_or_else(PuzzleSeed::from_entropy, PuzzleSeed::from_phrase);
    let mut rng = seed.rng();

    let options = LevelSetOptions {
        levels_per_phase: args.levels_per_phase,
        phase_budget: Duration::from_secs(args.phase_budget_secs),
        deadline: Deadline::within(Duration::from_secs(args.budget_secs)),
    };

    println!("Seed:");
    println!("  {seed}");
    println!();

    let levels = generate_level_set(&mut rng, &options);

    println!("Levels:");
    for level in &levels {
        println!(
            "  {:3}  {:<12} score {:3}  {} pieces  {}",
            level.level, level.difficulty, level.score, level.piece_count, level.fen
        );
    }
    println!();

    println!("Distribution:");
    for band in Difficulty::ALL {
        let count = levels.iter().filter(|level| level.difficulty == band).count();
        println!("  {band}: {count}");
    }
    if let (Some(first), Some(last)) = (levels.first(), levels.last()) {
        println!();
        println!("Score range: {} - {}", first.score, last.score);
    }
}
