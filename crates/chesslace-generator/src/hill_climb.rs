use std::time::Duration;

use rand::Rng;

use crate::{
    Deadline, Puzzle, evaluate,
    mutate::mutate,
    sampling::random_solvable_board,
};

/// Parameters of one hill-climbing run.
#[derive(Debug, Clone)]
pub struct HillClimbOptions {
    /// Fewest pieces a candidate may have. Default 6.
    pub min_pieces: usize,
    /// Most pieces a candidate may have. Default 8.
    pub max_pieces: usize,
    /// Wall-clock budget, polled at every restart and local step. With
    /// [`Deadline::NONE`] the climb only stops once
    /// [`early_exit_score`](Self::early_exit_score) is reached.
    pub deadline: Deadline,
    /// Mutations tried per restart before giving up on the local optimum.
    /// Default 50.
    pub local_steps: usize,
    /// Samples allowed when looking for a solvable restart board. Default 50.
    pub restart_attempts: usize,
    /// Score at which the search stops early. Default 95.
    pub early_exit_score: u8,
}

impl HillClimbOptions {
    /// Default options under the given budget.
    #[must_use]
    pub fn new(deadline: Deadline) -> Self {
        Self {
            min_pieces: 6,
            max_pieces: 8,
            deadline,
            local_steps: 50,
            restart_attempts: 50,
            early_exit_score: 95,
        }
    }
}

impl Default for HillClimbOptions {
    fn default() -> Self {
        Self::new(Deadline::within(Duration::from_secs(20)))
    }
}

/// Greedy local search for hard puzzles.
///
/// Starts from a random solvable board and repeatedly mutates it, accepting
/// a neighbour only when it is solvable *and* scores strictly higher — worse
/// or equal candidates are never accepted, so each restart climbs straight
/// to a local optimum. Restarts continue until the budget runs out, tracking
/// the best puzzle seen overall.
///
/// Random sampling plateaus well below the very-hard band; climbing from a
/// solvable start is what reaches scores in the 80s and 90s.
///
/// Returns `None` when no solvable start was found within the budget — a
/// normal outcome for the caller to absorb.
#[must_use]
pub fn hill_climb<R: Rng + ?Sized>(rng: &mut R, options: &HillClimbOptions) -> Option<Puzzle> {
    let mut best: Option<Puzzle> = None;
    let mut restarts = 0usize;

    while !options.deadline.expired() {
        restarts += 1;
        let Some(start) = random_solvable_board(
            rng,
            options.min_pieces,
            options.max_pieces,
            options.restart_attempts,
            options.deadline,
        ) else {
            continue;
        };
        let Some(mut current) = evaluate(&start) else {
            continue;
        };

        for _ in 0..options.local_steps {
            if options.deadline.expired() {
                break;
            }
            let neighbour = mutate(rng, current.board, options.max_pieces);
            if let Some(candidate) = evaluate(&neighbour)
                && candidate.score > current.score
            {
                current = candidate;
            }
        }

        if best.as_ref().is_none_or(|b| current.score > b.score) {
            log::debug!(
                "hill climb: best now {} (score {}) after {restarts} restarts",
                current.fen,
                current.score
            );
            let reached_target = current.score >= options.early_exit_score;
            best = Some(current);
            if reached_target {
                break;
            }
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PuzzleSeed;

    #[test]
    fn test_expired_budget_yields_none() {
        let mut rng = PuzzleSeed::from_phrase("expired climb").rng();
        let options = HillClimbOptions::new(Deadline::within(Duration::ZERO));
        assert!(hill_climb(&mut rng, &options).is_none());
    }

    #[test]
    fn test_result_is_solvable_and_in_piece_bounds() {
        let mut rng = PuzzleSeed::from_phrase("short climb").rng();
        let options = HillClimbOptions {
            min_pieces: 3,
            max_pieces: 5,
            local_steps: 5,
            early_exit_score: 30,
            ..HillClimbOptions::new(Deadline::within(Duration::from_secs(2)))
        };

        if let Some(puzzle) = hill_climb(&mut rng, &options) {
            assert!(puzzle.metrics.solvable);
            // Mutations may remove below the sampling minimum, never below 2.
            assert!((2..=5).contains(&puzzle.metrics.piece_count));
        }
    }

    #[test]
    fn test_respects_early_exit_threshold() {
        let mut rng = PuzzleSeed::from_phrase("early exit").rng();
        let options = HillClimbOptions {
            min_pieces: 2,
            max_pieces: 4,
            local_steps: 2,
            early_exit_score: 0,
            ..HillClimbOptions::new(Deadline::within(Duration::from_secs(10)))
        };

        // Any solvable board scores >= 0, so the very first restart wins.
        let puzzle = hill_climb(&mut rng, &options);
        assert!(puzzle.is_some());
    }
}
