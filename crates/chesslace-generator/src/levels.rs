use std::{collections::HashSet, time::Duration};

use chesslace_solver::Solver;
use rand::{Rng, RngExt};

use crate::{
    Deadline, Difficulty, HillClimbOptions, Puzzle, evaluate, hill_climb,
    sampling::random_board,
};

/// Hill climbing only pays off for targets at or above this score.
const HILL_CLIMB_THRESHOLD: f64 = 70.0;

/// Most of a target budget may go to hill climbing, but never more than this.
const HILL_CLIMB_CAP: Duration = Duration::from_secs(20);

/// Candidates must reach this fraction of the target score to be kept.
const ACCEPTANCE_FRACTION: f64 = 0.8;

/// A best-so-far within this many points of the target stops the search.
const CLOSE_ENOUGH: f64 = 2.0;

/// Parameters for [`generate_toward`].
#[derive(Debug, Clone)]
pub struct TargetOptions {
    /// Fewest pieces a candidate may have.
    pub min_pieces: usize,
    /// Most pieces a candidate may have.
    pub max_pieces: usize,
    /// Score to aim at; `None` accepts the first solvable candidate.
    pub target_score: Option<f64>,
    /// Wall-clock budget for this search.
    pub deadline: Deadline,
    /// Whether to spend part of the budget hill climbing first (only done
    /// for targets at or above 70).
    pub use_hill_climbing: bool,
}

/// Searches for a puzzle scoring close to a target.
///
/// For hard targets an optional hill-climbing phase runs first on up to 70%
/// of the budget (capped at 20 s); random sampling fills the remainder. A
/// candidate is kept once it reaches 80% of the target, the closest one
/// wins, and a result within 2 points ends the search early.
///
/// Returns `None` when the budget expires without an acceptable candidate.
#[must_use]
pub fn generate_toward<R: Rng + ?Sized>(rng: &mut R, options: &TargetOptions) -> Option<Puzzle> {
    let mut best: Option<Puzzle> = None;
    let mut best_gap = f64::INFINITY;

    if options.use_hill_climbing
        && let Some(target) = options.target_score
        && target >= HILL_CLIMB_THRESHOLD
    {
        let budget = options
            .deadline
            .remaining()
            .map_or(HILL_CLIMB_CAP, |remaining| {
                remaining.mul_f64(0.7).min(HILL_CLIMB_CAP)
            });
        let climb_options = HillClimbOptions {
            min_pieces: options.min_pieces,
            max_pieces: options.max_pieces,
            ..HillClimbOptions::new(Deadline::within(budget).earliest(options.deadline))
        };
        if let Some(puzzle) = hill_climb(rng, &climb_options)
            && f64::from(puzzle.score) >= target * ACCEPTANCE_FRACTION
        {
            best_gap = (f64::from(puzzle.score) - target).abs();
            best = Some(puzzle);
        }
    }

    let solver = Solver::new();
    while !options.deadline.expired() {
        let piece_count = rng.random_range(options.min_pieces..=options.max_pieces);
        let board = random_board(rng, piece_count);
        if !solver.is_solvable(&board) {
            continue;
        }
        let Some(puzzle) = evaluate(&board) else {
            continue;
        };

        let Some(target) = options.target_score else {
            return Some(puzzle);
        };
        let score = f64::from(puzzle.score);
        let gap = (score - target).abs();
        if score >= target * ACCEPTANCE_FRACTION && gap < best_gap {
            best_gap = gap;
            best = Some(puzzle);
        }
        if best_gap <= CLOSE_ENOUGH {
            break;
        }
    }

    best
}

/// One entry of an assembled level set.
#[derive(Debug, Clone)]
pub struct Level {
    /// 1-based position in the set, ascending difficulty.
    pub level: usize,
    /// Canonical textual form of the starting board.
    pub fen: String,
    /// Difficulty band of the score.
    pub difficulty: Difficulty,
    /// Weighted difficulty score.
    pub score: u8,
    /// Pieces on the starting board.
    pub piece_count: usize,
}

/// Parameters for [`generate_level_set`].
#[derive(Debug, Clone)]
pub struct LevelSetOptions {
    /// Levels to generate per phase. Default 20.
    pub levels_per_phase: usize,
    /// Base budget per phase; the hard phases scale it up. Default 50 s.
    pub phase_budget: Duration,
    /// Budget for the whole set. Default 5 minutes from construction.
    pub deadline: Deadline,
}

impl Default for LevelSetOptions {
    fn default() -> Self {
        Self {
            levels_per_phase: 20,
            phase_budget: Duration::from_secs(50),
            deadline: Deadline::within(Duration::from_secs(300)),
        }
    }
}

struct Phase {
    name: &'static str,
    score_min: f64,
    score_max: f64,
    min_pieces: usize,
    max_pieces: usize,
    hill_climbing: bool,
    budget_scale: f64,
}

/// Five ascending phases; the hard ones get hill climbing and extra budget.
const PHASES: [Phase; 5] = [
    Phase {
        name: "very-easy",
        score_min: 0.0,
        score_max: 25.0,
        min_pieces: 2,
        max_pieces: 4,
        hill_climbing: false,
        budget_scale: 1.0,
    },
    Phase {
        name: "easy",
        score_min: 20.0,
        score_max: 45.0,
        min_pieces: 3,
        max_pieces: 5,
        hill_climbing: false,
        budget_scale: 1.0,
    },
    Phase {
        name: "medium",
        score_min: 40.0,
        score_max: 65.0,
        min_pieces: 4,
        max_pieces: 6,
        hill_climbing: false,
        budget_scale: 1.0,
    },
    Phase {
        name: "hard",
        score_min: 60.0,
        score_max: 85.0,
        min_pieces: 5,
        max_pieces: 7,
        hill_climbing: true,
        budget_scale: 1.2,
    },
    Phase {
        name: "very-hard",
        score_min: 80.0,
        score_max: 100.0,
        min_pieces: 6,
        max_pieces: 8,
        hill_climbing: true,
        budget_scale: 1.5,
    },
];

/// Assembles an ordered level set across five ascending difficulty phases.
///
/// Each phase sweeps its target score linearly across its band, carving a
/// per-level slot out of the phase budget. Serialized forms are unique
/// across the whole set; a level whose search comes up empty is simply
/// skipped. The accepted puzzles are sorted by ascending score and numbered
/// from 1 — so a starved run yields a shorter, still well-ordered set rather
/// than an error.
#[must_use]
pub fn generate_level_set<R: Rng + ?Sized>(rng: &mut R, options: &LevelSetOptions) -> Vec<Level> {
    let mut puzzles: Vec<Puzzle> = Vec::new();
    let mut used_fens: HashSet<String> = HashSet::new();

    for phase in &PHASES {
        if options.deadline.expired() {
            log::warn!("level set: total budget exhausted before phase {}", phase.name);
            break;
        }
        log::info!(
            "level set: phase {} targets scores {:.0}-{:.0} with {}-{} pieces",
            phase.name,
            phase.score_min,
            phase.score_max,
            phase.min_pieces,
            phase.max_pieces
        );

        let phase_deadline = Deadline::within(options.phase_budget.mul_f64(phase.budget_scale))
            .earliest(options.deadline);
        collect_phase(rng, phase, phase_deadline, options.levels_per_phase, &mut used_fens, &mut puzzles);
    }

    puzzles.sort_by_key(|puzzle| puzzle.score);
    puzzles
        .into_iter()
        .enumerate()
        .map(|(index, puzzle)| Level {
            level: index + 1,
            fen: puzzle.fen,
            difficulty: puzzle.difficulty,
            score: puzzle.score,
            piece_count: puzzle.metrics.piece_count,
        })
        .collect()
}

#[expect(clippy::cast_precision_loss)]
fn collect_phase<R: Rng + ?Sized>(
    rng: &mut R,
    phase: &Phase,
    deadline: Deadline,
    count: usize,
    used_fens: &mut HashSet<String>,
    out: &mut Vec<Puzzle>,
) {
    if count == 0 {
        return;
    }
    let per_level = deadline
        .remaining()
        .unwrap_or_default()
        .div_f64(count as f64);
    let mut accepted_count = 0usize;

    for index in 0..count {
        if deadline.expired() {
            log::warn!(
                "phase {}: budget exhausted after {accepted_count} of {count} levels",
                phase.name
            );
            break;
        }

        let target =
            phase.score_min + (phase.score_max - phase.score_min) * index as f64 / count as f64;
        let slot = deadline
            .remaining()
            .unwrap_or_default()
            .div_f64((count - index) as f64)
            .min(per_level.mul_f64(2.0));
        let target_options = TargetOptions {
            min_pieces: phase.min_pieces,
            max_pieces: phase.max_pieces,
            target_score: Some(target),
            deadline: Deadline::within(slot).earliest(deadline),
            use_hill_climbing: phase.hill_climbing,
        };

        let mut accepted = None;
        for _ in 0..5 {
            if deadline.expired() {
                break;
            }
            match generate_toward(rng, &target_options) {
                Some(puzzle) if !used_fens.contains(&puzzle.fen) => {
                    accepted = Some(puzzle);
                    break;
                }
                _ => {}
            }
        }

        if let Some(puzzle) = accepted {
            log::debug!(
                "phase {}: accepted {} scoring {} (target {target:.0})",
                phase.name,
                puzzle.fen,
                puzzle.score
            );
            used_fens.insert(puzzle.fen.clone());
            out.push(puzzle);
            accepted_count += 1;
        }
    }
}
