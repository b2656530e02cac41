//! Example searching many independent workers for the hardest board.
//!
//! Candidate generation is embarrassingly parallel: each worker derives its
//! own seed from the base phrase, samples and scores boards on its own, and
//! only the results are compared. No search is parallelized internally.
//!
//! # Usage
//!
//! ```sh
//! cargo run --release --example find_hardest -- --samples 2000
//! ```
//!
//! Reproducible sweep:
//!
//! ```sh
//! cargo run --release --example find_hardest -- --seed "sweep 1" --samples 2000
//! ```

use chesslace_generator::{PuzzleSeed, evaluate, random_board};
use clap::Parser;
use rand::RngExt as _;
use rayon::prelude::*;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Base seed phrase; omit for a random sweep.
    #[arg(long, value_name = "PHRASE")]
    seed: Option<String>,

    /// Candidate boards to sample across all workers.
    #[arg(long, value_name = "COUNT", default_value_t = 2000)]
    samples: usize,

    /// Fewest pieces per candidate.
    #[arg(long, value_name = "COUNT", default_value_t = 5)]
    min_pieces: usize,

    /// Most pieces per candidate.
    #[arg(long, value_name = "COUNT", default_value_t = 8)]
    max_pieces: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let base = args
        .seed
        .clone()
        .unwrap_or_else(|| PuzzleSeed::from_entropy().to_string());

    let best = (0..args.samples)
        .into_par_iter()
        .filter_map(|index| {
            let mut rng = PuzzleSeed::from_phrase(&format!("{base}-{index}")).rng();
            let piece_count = rng.random_range(args.min_pieces..=args.max_pieces);
            let board = random_board(&mut rng, piece_count);
            evaluate(&board)
        })
        .max_by_key(|puzzle| puzzle.score);

    match best {
        Some(puzzle) => {
            println!("Base seed phrase:");
            println!("  {base}");
            println!();
            println!("Hardest of {} samples:", args.samples);
            println!(
                "  {} (score {}, {})",
                puzzle.fen, puzzle.score, puzzle.difficulty
            );
            println!(
                "  {} solutions, {} dead ends, trap ratio {:.2}",
                puzzle.metrics.solution_count, puzzle.metrics.dead_ends, puzzle.metrics.trap_ratio
            );
        }
        None => println!("No solvable board in {} samples.", args.samples),
    }
}
