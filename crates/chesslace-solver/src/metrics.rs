use chesslace_core::{Board, all_moves};

use crate::{DifficultyReport, Solver, analyze_difficulty};

/// Cap on recorded solutions while gathering metrics.
///
/// Counting stays exact below the cap; above it only the recorded-solution
/// list is truncated, which is plenty for scoring 4×4 boards.
const METRICS_SOLUTION_CAP: usize = 1000;

/// Everything the generator needs to judge one board.
///
/// Combines the solver's all-solutions statistics, a first-move trap
/// analysis, and the weighted [`DifficultyReport`] into a single record.
#[derive(Debug, Clone)]
pub struct PuzzleMetrics {
    /// Pieces on the starting board.
    pub piece_count: usize,
    /// Whether any solving path exists.
    pub solvable: bool,
    /// Number of recorded solutions (capped).
    pub solution_count: usize,
    /// Length of the shortest recorded solution, 0 when unsolvable.
    pub min_moves: usize,
    /// Length of the longest recorded solution, 0 when unsolvable.
    pub max_moves: usize,
    /// Dead-end terminals encountered by the solver.
    pub dead_ends: usize,
    /// Total branch expansions explored by the solver.
    pub total_branches: usize,
    /// Number of legal first moves.
    pub initial_move_count: usize,
    /// First moves after which the board stays solvable.
    pub good_first_moves: usize,
    /// First moves after which no solution remains.
    pub bad_first_moves: usize,
    /// `bad_first_moves / initial_move_count`, 0 when there are no moves.
    pub trap_ratio: f64,
    /// The weighted difficulty analysis.
    pub difficulty: DifficultyReport,
}

/// Gathers [`PuzzleMetrics`] for a board.
///
/// # Examples
///
/// ```
/// use chesslace_core::Board;
/// use chesslace_solver::puzzle_metrics;
///
/// let board: Board = "B3/1P2/4/3P".parse()?;
/// let metrics = puzzle_metrics(&board);
///
/// assert!(metrics.solvable);
/// assert_eq!(metrics.good_first_moves + metrics.bad_first_moves, metrics.initial_move_count);
/// assert!((metrics.trap_ratio - 0.5).abs() < 1e-9);
/// # Ok::<(), chesslace_core::FenError>(())
/// ```
#[must_use]
pub fn puzzle_metrics(board: &Board) -> PuzzleMetrics {
    let solver = Solver::with_max_solutions(METRICS_SOLUTION_CAP);
    let report = solver.solve_all(board);

    let initial_moves = all_moves(board);
    let good_first_moves = initial_moves
        .iter()
        .filter(|&&mv| solver.move_keeps_solvable(board, mv))
        .count();
    let bad_first_moves = initial_moves.len() - good_first_moves;
    #[expect(clippy::cast_precision_loss)]
    let trap_ratio = if initial_moves.is_empty() {
        0.0
    } else {
        bad_first_moves as f64 / initial_moves.len() as f64
    };

    PuzzleMetrics {
        piece_count: board.piece_count(),
        solvable: report.is_solvable(),
        solution_count: report.solution_count(),
        min_moves: report.min_moves(),
        max_moves: report.max_moves(),
        dead_ends: report.dead_ends(),
        total_branches: report.total_branches(),
        initial_move_count: initial_moves.len(),
        good_first_moves,
        bad_first_moves,
        trap_ratio,
        difficulty: analyze_difficulty(board),
    }
}
