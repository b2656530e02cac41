//! Puzzle generation for Chesslace.
//!
//! Boards are manufactured, never designed: the generator samples
//! weighted-random boards, uses the solver crate purely as an evaluator
//! (solvable or not, and how hard), and keeps what matches. Three search
//! strategies build on each other:
//!
//! - [`PuzzleGenerator`] — random sampling toward a difficulty band.
//! - [`hill_climb`] — greedy local search over board mutations, for the
//!   hard scores random sampling rarely reaches.
//! - [`generate_level_set`] — a five-phase sweep assembling an ordered,
//!   deduplicated level set under a wall-clock budget.
//!
//! All randomness flows through an explicitly passed stream (see
//! [`PuzzleSeed`]); all budgets are [`Deadline`]s polled at iteration
//! boundaries. Running out of attempts or time is a normal `None`/short
//! result — callers fall back to the [curated presets](STARTER_PUZZLES).
//! Independent runs are embarrassingly parallel: give each worker its own
//! seed and collect the results (see `examples/find_hardest.rs`).
//!
//! # Examples
//!
//! ```
//! use chesslace_generator::{Difficulty, GenerateOptions, PuzzleGenerator, starter_puzzle};
//!
//! let generator = PuzzleGenerator::with_options(GenerateOptions {
//!     min_pieces: 3,
//!     max_pieces: 6,
//!     difficulty: Some(Difficulty::Easy),
//!     max_attempts: 50,
//!     ..GenerateOptions::default()
//! });
//!
//! let seed = chesslace_generator::PuzzleSeed::from_phrase("daily");
//! match generator.generate_with_seed(seed) {
//!     Some(puzzle) => println!("generated {} (score {})", puzzle.fen, puzzle.score),
//!     None => {
//!         let fallback = starter_puzzle(&mut seed.rng(), Some(Difficulty::Easy));
//!         println!("fell back to {}", fallback.fen);
//!     }
//! }
//! ```

pub use self::{
    band::*, deadline::*, hill_climb::*, levels::*, presets::*, sampling::*, seed::*,
};

mod band;
mod deadline;
mod hill_climb;
mod levels;
mod mutate;
mod presets;
mod sampling;
mod seed;
