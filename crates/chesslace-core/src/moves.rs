use tinyvec::ArrayVec;

use crate::{Board, PieceKind, Square};

/// A capture move: `piece` travels from `from` to `to`, removing the piece
/// that occupied `to`.
///
/// A move is only legal when the destination is occupied before the move;
/// there is no non-capturing movement in Chesslace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    /// Source square.
    pub from: Square,
    /// Destination square (occupied before the move).
    pub to: Square,
    /// The kind of the moving piece.
    pub piece: PieceKind,
}

/// Capture destinations for one piece.
///
/// No piece can capture on more than eight squares (eight neighbours, eight
/// rays, or eight knight offsets), so the list lives on the stack.
pub type CaptureList = ArrayVec<[Square; 8]>;

const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

// Pawns capture toward row 0 only.
const PAWN_OFFSETS: [(i8, i8); 2] = [(-1, -1), (-1, 1)];

const ORTHOGONAL_RAYS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const DIAGONAL_RAYS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Computes every square the piece on `from` may capture on.
///
/// Returns an empty list when `from` is empty. Sliding pieces (queen, rook,
/// bishop) stop at the first occupied square of each ray — that square is
/// the only capture in that direction. Knights jump; pawns see only the two
/// forward diagonals.
///
/// # Examples
///
/// ```
/// use chesslace_core::{Board, Square, captures_from};
///
/// // The rook slides past empty squares but not past the pawn.
/// let board: Board = "R1PQ/4/4/R3".parse()?;
/// let captures = captures_from(&board, Square::new(0, 0));
///
/// assert!(captures.contains(&Square::new(0, 2)));
/// assert!(!captures.contains(&Square::new(0, 3))); // blocked by the pawn
/// assert!(captures.contains(&Square::new(3, 0)));
/// # Ok::<(), chesslace_core::FenError>(())
/// ```
#[must_use]
pub fn captures_from(board: &Board, from: Square) -> CaptureList {
    let mut captures = CaptureList::new();
    let Some(piece) = board.piece_at(from) else {
        return captures;
    };
    match piece {
        PieceKind::King => step_captures(board, from, &KING_OFFSETS, &mut captures),
        PieceKind::Queen => {
            ray_captures(board, from, &ORTHOGONAL_RAYS, &mut captures);
            ray_captures(board, from, &DIAGONAL_RAYS, &mut captures);
        }
        PieceKind::Rook => ray_captures(board, from, &ORTHOGONAL_RAYS, &mut captures),
        PieceKind::Bishop => ray_captures(board, from, &DIAGONAL_RAYS, &mut captures),
        PieceKind::Knight => step_captures(board, from, &KNIGHT_OFFSETS, &mut captures),
        PieceKind::Pawn => step_captures(board, from, &PAWN_OFFSETS, &mut captures),
    }
    captures
}

fn step_captures(board: &Board, from: Square, offsets: &[(i8, i8)], out: &mut CaptureList) {
    for &(d_row, d_col) in offsets {
        if let Some(to) = from.offset(d_row, d_col)
            && board.piece_at(to).is_some()
        {
            out.push(to);
        }
    }
}

fn ray_captures(board: &Board, from: Square, directions: &[(i8, i8)], out: &mut CaptureList) {
    for &(d_row, d_col) in directions {
        let mut cursor = from;
        while let Some(next) = cursor.offset(d_row, d_col) {
            if board.piece_at(next).is_some() {
                out.push(next);
                break;
            }
            cursor = next;
        }
    }
}

/// Returns `true` when the piece on `from` may capture on `to`.
///
/// `false` when `from` is empty, `to` is empty, or the piece's rule does not
/// reach `to`.
#[must_use]
pub fn is_capture_legal(board: &Board, from: Square, to: Square) -> bool {
    captures_from(board, from).contains(&to)
}

/// Every legal capture on the board, in row-major source order.
///
/// The order is deterministic, which makes solver exploration (and thus the
/// first solution found) reproducible for a given board.
#[must_use]
pub fn all_moves(board: &Board) -> Vec<Move> {
    let mut moves = Vec::new();
    for (from, piece) in board.occupied() {
        for to in captures_from(board, from) {
            moves.push(Move { from, to, piece });
        }
    }
    moves
}

/// Returns `true` when no capture is possible but more than one piece
/// remains — the dead-end terminal of a puzzle.
#[must_use]
pub fn is_stuck(board: &Board) -> bool {
    board.piece_count() > 1 && all_moves(board).is_empty()
}
