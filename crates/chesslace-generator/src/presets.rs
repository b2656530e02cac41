use rand::{Rng, RngExt};

use crate::Difficulty;

/// A curated, known-good puzzle used when generation comes up empty.
#[derive(Debug, Clone, Copy)]
pub struct StarterPuzzle {
    /// Canonical textual form of the board.
    pub fen: &'static str,
    /// Curated difficulty band.
    pub difficulty: Difficulty,
}

/// Hand-checked starter puzzles across the easy/medium/hard bands.
///
/// These are the fallback when a generation run returns nothing within its
/// budget — search exhaustion is a normal outcome, and callers always have
/// somewhere to land.
pub const STARTER_PUZZLES: [StarterPuzzle; 12] = [
    StarterPuzzle {
        fen: "K3/4/4/3Q",
        difficulty: Difficulty::Easy,
    },
    StarterPuzzle {
        fen: "R3/4/4/R3",
        difficulty: Difficulty::Easy,
    },
    StarterPuzzle {
        fen: "N3/4/1N2/4",
        difficulty: Difficulty::Easy,
    },
    StarterPuzzle {
        fen: "Q3/4/4/3P",
        difficulty: Difficulty::Easy,
    },
    StarterPuzzle {
        fen: "RB2/4/4/2QK",
        difficulty: Difficulty::Medium,
    },
    StarterPuzzle {
        fen: "N2B/4/K3/3R",
        difficulty: Difficulty::Medium,
    },
    StarterPuzzle {
        fen: "Q3/2N1/4/B2K",
        difficulty: Difficulty::Medium,
    },
    StarterPuzzle {
        fen: "K2R/4/2B1/N3",
        difficulty: Difficulty::Medium,
    },
    StarterPuzzle {
        fen: "QRNB/4/4/PPKP",
        difficulty: Difficulty::Hard,
    },
    StarterPuzzle {
        fen: "K2Q/NB2/2R1/P2P",
        difficulty: Difficulty::Hard,
    },
    StarterPuzzle {
        fen: "RNB1/P3/2Q1/K2P",
        difficulty: Difficulty::Hard,
    },
    StarterPuzzle {
        fen: "QKRB/P3/2N1/3P",
        difficulty: Difficulty::Hard,
    },
];

/// Picks a random starter puzzle, preferring the requested band.
///
/// Falls back to the whole list when no curated puzzle carries the requested
/// band (there are no curated very-easy or very-hard entries).
#[must_use]
pub fn starter_puzzle<R: Rng + ?Sized>(
    rng: &mut R,
    difficulty: Option<Difficulty>,
) -> &'static StarterPuzzle {
    let matching: Vec<&'static StarterPuzzle> = STARTER_PUZZLES
        .iter()
        .filter(|puzzle| difficulty.is_none_or(|band| puzzle.difficulty == band))
        .collect();
    if matching.is_empty() {
        &STARTER_PUZZLES[rng.random_range(0..STARTER_PUZZLES.len())]
    } else {
        matching[rng.random_range(0..matching.len())]
    }
}

#[cfg(test)]
mod tests {
    use chesslace_core::Board;
    use chesslace_solver::Solver;

    use super::*;
    use crate::PuzzleSeed;

    #[test]
    fn test_every_starter_is_valid_and_solvable() {
        let solver = Solver::new();
        for puzzle in STARTER_PUZZLES {
            let board: Board = puzzle.fen.parse().expect("curated fen should parse");
            assert!(solver.is_solvable(&board), "unsolvable starter {}", puzzle.fen);
        }
    }

    #[test]
    fn test_starter_puzzle_honours_requested_band() {
        let mut rng = PuzzleSeed::from_phrase("starter band").rng();
        for _ in 0..20 {
            let puzzle = starter_puzzle(&mut rng, Some(Difficulty::Hard));
            assert_eq!(puzzle.difficulty, Difficulty::Hard);
        }
    }

    #[test]
    fn test_starter_puzzle_falls_back_when_band_is_uncurated() {
        let mut rng = PuzzleSeed::from_phrase("starter fallback").rng();
        // No curated very-hard entries: any starter will do.
        let puzzle = starter_puzzle(&mut rng, Some(Difficulty::VeryHard));
        assert!(STARTER_PUZZLES.iter().any(|p| p.fen == puzzle.fen));
    }

    #[test]
    fn test_each_band_represented() {
        for band in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert!(STARTER_PUZZLES.iter().any(|p| p.difficulty == band));
        }
    }
}
