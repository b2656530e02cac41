//! Exhaustive solving and difficulty scoring for Chesslace puzzles.
//!
//! The solver is a depth-first backtracking search over the capture-move
//! tree. Because every capture removes exactly one piece, recursion depth is
//! bounded by `piece_count - 1` and termination is structural — there is no
//! need for cycle detection or memoization. The search deliberately visits
//! paths, not distinct states: the difficulty metric in [`difficulty`]
//! weights *every* path through the tree, so two paths reaching the same
//! board must both be counted.
//!
//! An unsolvable board is a first-class outcome, not an error; nothing in
//! this crate returns `Result`.
//!
//! # Examples
//!
//! ```
//! use chesslace_core::Board;
//! use chesslace_solver::Solver;
//!
//! let board: Board = "KQ2/4/4/4".parse()?;
//! let solver = Solver::new();
//!
//! let report = solver.solve(&board);
//! assert!(report.is_solvable());
//! assert_eq!(report.min_moves(), 1);
//! # Ok::<(), chesslace_core::FenError>(())
//! ```

pub use self::{difficulty::*, metrics::*, search::*};

mod difficulty;
mod metrics;
mod search;
