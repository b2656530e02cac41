//! Game session layer for Chesslace.
//!
//! [`Game`] wraps a starting board with everything an interactive session
//! needs: move validation, capture history with undo, terminal detection,
//! and solver passthroughs for hints and full solutions. Presentation
//! concerns (rendering, input, persistence) live outside this crate; the
//! session only speaks boards, moves, and statuses.
//!
//! # Examples
//!
//! ```
//! use chesslace_core::Square;
//! use chesslace_game::{Game, GameStatus};
//!
//! let mut game = Game::from_fen("KQ2/4/4/4")?;
//! assert!(game.status().is_playing());
//!
//! game.play(Square::new(0, 0), Square::new(0, 1))?;
//! assert_eq!(game.status(), GameStatus::Solved);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use chesslace_core::{
    Board, FenError, Move, PieceKind, Square, all_moves, fen, is_capture_legal, is_stuck,
};
use chesslace_generator::Puzzle;
use chesslace_solver::Solver;

/// Where a session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum GameStatus {
    /// Captures are still available and a solution may remain.
    #[display("playing")]
    Playing,
    /// Exactly one piece remains.
    #[display("solved")]
    Solved,
    /// No capture is possible but more than one piece remains.
    #[display("stuck")]
    Stuck,
    /// The starting board has no solution at all. Distinct from
    /// [`Stuck`](Self::Stuck): the player never had a chance.
    #[display("impossible")]
    Impossible,
}

/// Why a move was rejected.
///
/// A rejected move never mutates the board; rejection is an ordinary
/// outcome of interactive play, not an exceptional condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// The source square holds no piece.
    #[display("no piece on {square}")]
    EmptySource {
        /// The empty source square.
        square: Square,
    },
    /// The piece on the source square cannot capture on the destination.
    #[display("no legal capture from {from} to {to}")]
    IllegalCapture {
        /// Source square.
        from: Square,
        /// Destination square.
        to: Square,
    },
    /// The session is already solved, stuck, or impossible.
    #[display("the puzzle is already finished")]
    NotPlaying,
}

/// One executed capture, with enough information to undo it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayedMove {
    /// The capture that was played.
    pub mv: Move,
    /// The piece that was removed from the destination square.
    pub captured: PieceKind,
}

/// An interactive Chesslace session.
///
/// Holds the starting board, the current board, and the capture history.
/// Boards are `Copy` snapshots, so undo restores the exact prior position
/// from the recorded capture rather than replaying from the start.
#[derive(Debug, Clone)]
pub struct Game {
    initial: Board,
    board: Board,
    history: Vec<PlayedMove>,
    status: GameStatus,
}

impl Game {
    /// Starts a session on `board`.
    ///
    /// A one-piece board starts [`Solved`](GameStatus::Solved); an
    /// unsolvable board starts [`Impossible`](GameStatus::Impossible).
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self {
            initial: board,
            board,
            history: Vec::new(),
            status: initial_status(&board),
        }
    }

    /// Starts a session from board text.
    ///
    /// # Errors
    ///
    /// Returns the [`FenError`] when the text is malformed.
    pub fn from_fen(text: &str) -> Result<Self, FenError> {
        Ok(Self::new(fen::decode(text)?))
    }

    /// Starts a session on a generated puzzle.
    #[must_use]
    pub fn with_puzzle(puzzle: &Puzzle) -> Self {
        Self::new(puzzle.board)
    }

    /// The current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The starting board.
    #[must_use]
    pub fn initial_board(&self) -> &Board {
        &self.initial
    }

    /// Where the session stands.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Captures played so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &[PlayedMove] {
        &self.history
    }

    /// The most recent capture, if any.
    #[must_use]
    pub fn last_move(&self) -> Option<&PlayedMove> {
        self.history.last()
    }

    /// Pieces left on the current board.
    #[must_use]
    pub fn pieces_remaining(&self) -> usize {
        self.board.piece_count()
    }

    /// Legal captures available on the current board.
    #[must_use]
    pub fn legal_move_count(&self) -> usize {
        all_moves(&self.board).len()
    }

    /// Canonical textual form of the current board.
    #[must_use]
    pub fn current_fen(&self) -> String {
        fen::encode(&self.board)
    }

    /// Plays a capture from `from` to `to`.
    ///
    /// On success the board advances and the status is re-derived. On
    /// failure nothing changes.
    ///
    /// # Errors
    ///
    /// [`GameError::NotPlaying`] when the session is finished,
    /// [`GameError::EmptySource`] when `from` is empty, and
    /// [`GameError::IllegalCapture`] when the piece cannot capture on `to`.
    pub fn play(&mut self, from: Square, to: Square) -> Result<(), GameError> {
        if !self.status.is_playing() {
            return Err(GameError::NotPlaying);
        }
        let Some(piece) = self.board.piece_at(from) else {
            return Err(GameError::EmptySource { square: from });
        };
        let Some(captured) = self.board.piece_at(to) else {
            return Err(GameError::IllegalCapture { from, to });
        };
        if !is_capture_legal(&self.board, from, to) {
            return Err(GameError::IllegalCapture { from, to });
        }

        let mv = Move { from, to, piece };
        self.board = self.board.apply(mv);
        self.history.push(PlayedMove { mv, captured });
        self.status = if self.board.is_solved() {
            GameStatus::Solved
        } else if is_stuck(&self.board) {
            GameStatus::Stuck
        } else {
            GameStatus::Playing
        };
        Ok(())
    }

    /// Takes back the most recent capture.
    ///
    /// Returns `false` when there is nothing to undo. After an undo the
    /// session is playing again: the restored position had at least the
    /// undone capture available.
    pub fn undo(&mut self) -> bool {
        let Some(PlayedMove { mv, captured }) = self.history.pop() else {
            return false;
        };
        self.board.clear(mv.to);
        self.board.place(mv.from, mv.piece);
        self.board.place(mv.to, captured);
        self.status = GameStatus::Playing;
        true
    }

    /// Restores the starting position and clears the history.
    pub fn reset(&mut self) {
        self.board = self.initial;
        self.history.clear();
        self.status = initial_status(&self.initial);
    }

    /// First move of a solution from the current board.
    ///
    /// `None` when the session is not playing or no solution remains.
    #[must_use]
    pub fn hint(&self) -> Option<Move> {
        if !self.status.is_playing() {
            return None;
        }
        Solver::new().hint(&self.board)
    }

    /// A complete solution from the starting board, if one exists.
    #[must_use]
    pub fn solution(&self) -> Option<Vec<Move>> {
        let report = Solver::new().solve(&self.initial);
        report.solutions().first().cloned()
    }
}

fn initial_status(board: &Board) -> GameStatus {
    if board.is_solved() {
        GameStatus::Solved
    } else if Solver::new().is_solvable(board) {
        GameStatus::Playing
    } else {
        GameStatus::Impossible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game_from(fen: &str) -> Game {
        Game::from_fen(fen).expect("test board should parse")
    }

    #[test]
    fn test_plays_to_a_win() {
        let mut game = game_from("KQ2/4/4/4");
        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(game.pieces_remaining(), 2);

        game.play(Square::new(0, 0), Square::new(0, 1)).unwrap();
        assert_eq!(game.status(), GameStatus::Solved);
        assert_eq!(game.pieces_remaining(), 1);
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.last_move().unwrap().captured, PieceKind::Queen);
    }

    #[test]
    fn test_playing_into_a_dead_end_gets_stuck() {
        let mut game = game_from("B3/1P2/4/3P");
        game.play(Square::new(1, 1), Square::new(0, 0)).unwrap();
        assert_eq!(game.status(), GameStatus::Stuck);
        assert!(game.hint().is_none());
    }

    #[test]
    fn test_unsolvable_board_is_impossible_from_the_start() {
        let mut game = game_from("P3/4/4/3P");
        assert_eq!(game.status(), GameStatus::Impossible);
        assert_eq!(
            game.play(Square::new(0, 0), Square::new(3, 3)),
            Err(GameError::NotPlaying)
        );
        assert!(game.hint().is_none());
        assert!(game.solution().is_none());
    }

    #[test]
    fn test_rejected_moves_do_not_mutate() {
        let mut game = game_from("KQ2/4/4/4");
        let before = *game.board();

        assert_eq!(
            game.play(Square::new(2, 2), Square::new(0, 0)),
            Err(GameError::EmptySource {
                square: Square::new(2, 2)
            })
        );
        assert_eq!(
            game.play(Square::new(0, 0), Square::new(1, 1)),
            Err(GameError::IllegalCapture {
                from: Square::new(0, 0),
                to: Square::new(1, 1)
            })
        );
        assert_eq!(*game.board(), before);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_undo_restores_the_exact_position() {
        let mut game = game_from("QKP1/4/4/4");
        let before = *game.board();

        game.play(Square::new(0, 1), Square::new(0, 2)).unwrap();
        assert_ne!(*game.board(), before);

        assert!(game.undo());
        assert_eq!(*game.board(), before);
        assert_eq!(game.status(), GameStatus::Playing);
        assert!(game.history().is_empty());
        assert!(!game.undo());
    }

    #[test]
    fn test_undo_after_winning_reopens_the_game() {
        let mut game = game_from("KQ2/4/4/4");
        game.play(Square::new(0, 0), Square::new(0, 1)).unwrap();
        assert_eq!(game.status(), GameStatus::Solved);

        assert!(game.undo());
        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(game.pieces_remaining(), 2);
    }

    #[test]
    fn test_reset_clears_history_and_status() {
        let mut game = game_from("QKP1/4/4/4");
        game.play(Square::new(0, 0), Square::new(0, 1)).unwrap();
        game.reset();

        assert_eq!(*game.board(), *game.initial_board());
        assert!(game.history().is_empty());
        assert_eq!(game.status(), GameStatus::Playing);
    }

    #[test]
    fn test_one_piece_board_starts_solved() {
        let game = game_from("4/2K1/4/4");
        assert_eq!(game.status(), GameStatus::Solved);
        assert!(game.hint().is_none());
    }

    #[test]
    fn test_hint_is_playable_and_winning() {
        let mut game = game_from("QKP1/4/4/4");
        while game.status().is_playing() {
            let hint = game.hint().expect("a winning move exists while playing");
            game.play(hint.from, hint.to).unwrap();
        }
        assert_eq!(game.status(), GameStatus::Solved);
    }

    #[test]
    fn test_solution_solves_the_initial_board() {
        let game = game_from("QKP1/4/4/4");
        let solution = game.solution().expect("board is solvable");
        assert_eq!(solution.len(), game.initial_board().piece_count() - 1);

        let mut replay = Game::new(*game.initial_board());
        for mv in solution {
            replay.play(mv.from, mv.to).unwrap();
        }
        assert_eq!(replay.status(), GameStatus::Solved);
    }

    #[test]
    fn test_with_puzzle_uses_the_puzzle_board() {
        let board: Board = "KQ2/4/4/4".parse().unwrap();
        let puzzle = chesslace_generator::evaluate(&board).expect("board is solvable");
        let game = Game::with_puzzle(&puzzle);
        assert_eq!(*game.board(), board);
        assert!(game.status().is_playing());
    }

    #[test]
    fn test_legal_move_count_tracks_the_board() {
        let game = game_from("KQ2/4/4/4");
        assert_eq!(game.legal_move_count(), 2);
        assert_eq!(game.current_fen(), "KQ2/4/4/4");
    }
}
