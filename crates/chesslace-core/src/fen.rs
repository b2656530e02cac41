//! Compact textual board form.
//!
//! A board is written as four row strings separated by `/`, top row first.
//! Within a row, occupied squares use the canonical piece letter and runs of
//! consecutive empty squares collapse to a single digit `1`–`4`; an
//! all-empty row is written `4`. `"KQR1/2B1/N3/PP2"` therefore puts king,
//! queen, and rook on the top row and two pawns bottom-left.
//!
//! A URL-safe variant substitutes `-` for the row separator with no other
//! change; [`decode`] accepts both forms.
//!
//! Encoding and decoding are exact inverses for every valid board, and
//! malformed text is rejected with a descriptive [`FenError`] rather than
//! silently corrected.

use crate::{BOARD_SIZE, Board, PieceKind, Square};

/// Row separator of the canonical form.
pub const ROW_SEPARATOR: char = '/';

/// Row separator of the URL-safe form.
pub const URL_ROW_SEPARATOR: char = '-';

/// Reason a piece of board text was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum FenError {
    /// The text does not split into exactly four rows.
    #[display("expected {BOARD_SIZE} rows, found {found}")]
    RowCount {
        /// Number of rows found.
        found: usize,
    },
    /// A character is neither a piece letter nor a digit `1`–`4`.
    #[display("unrecognized character {ch:?}")]
    UnrecognizedChar {
        /// The offending character.
        ch: char,
    },
    /// A row does not decode to exactly four squares.
    #[display("row {row} decodes to {found} squares, expected {BOARD_SIZE}")]
    RowWidth {
        /// Zero-based row index.
        row: usize,
        /// Number of squares the row decodes to.
        found: usize,
    },
}

/// Encodes a board into its canonical textual form.
///
/// # Examples
///
/// ```
/// use chesslace_core::{Board, PieceKind, Square, fen};
///
/// let mut board = Board::empty();
/// board.place(Square::new(0, 0), PieceKind::King);
/// board.place(Square::new(3, 1), PieceKind::Pawn);
///
/// assert_eq!(fen::encode(&board), "K3/4/4/1P2");
/// ```
#[must_use]
pub fn encode(board: &Board) -> String {
    let mut rows = Vec::with_capacity(BOARD_SIZE);
    for row_squares in Square::ALL.chunks(BOARD_SIZE) {
        let mut encoded = String::new();
        let mut empty_run = 0u8;
        for &square in row_squares {
            match board.piece_at(square) {
                Some(piece) => {
                    if empty_run > 0 {
                        encoded.push(char::from(b'0' + empty_run));
                        empty_run = 0;
                    }
                    encoded.push(piece.letter());
                }
                None => empty_run += 1,
            }
        }
        if empty_run > 0 {
            encoded.push(char::from(b'0' + empty_run));
        }
        rows.push(encoded);
    }
    rows.join(&ROW_SEPARATOR.to_string())
}

/// Decodes board text in canonical or URL-safe form.
///
/// # Errors
///
/// Returns [`FenError::RowCount`] when the text does not have four rows,
/// [`FenError::UnrecognizedChar`] for any character that is neither a piece
/// letter nor a digit `1`–`4`, and [`FenError::RowWidth`] when a row does
/// not decode to exactly four squares.
///
/// # Examples
///
/// ```
/// use chesslace_core::{PieceKind, Square, fen};
///
/// let board = fen::decode("KQR1/2B1/N3/PP2")?;
/// assert_eq!(board.piece_at(Square::new(1, 2)), Some(PieceKind::Bishop));
/// assert_eq!(fen::encode(&board), "KQR1/2B1/N3/PP2");
///
/// // The URL-safe delimiter is accepted as-is.
/// assert_eq!(fen::decode("K3-4-4-3Q")?, fen::decode("K3/4/4/3Q")?);
/// # Ok::<(), chesslace_core::FenError>(())
/// ```
pub fn decode(text: &str) -> Result<Board, FenError> {
    let normalized = text.replace(URL_ROW_SEPARATOR, "/");
    let rows: Vec<&str> = normalized.split(ROW_SEPARATOR).collect();
    if rows.len() != BOARD_SIZE {
        return Err(FenError::RowCount { found: rows.len() });
    }

    let mut board = Board::empty();
    for (row, row_text) in rows.iter().enumerate() {
        let mut cells: Vec<Option<PieceKind>> = Vec::with_capacity(BOARD_SIZE);
        for ch in row_text.chars() {
            if let Some(piece) = PieceKind::from_letter(ch) {
                cells.push(Some(piece));
            } else if let Some(run) = ch.to_digit(10).filter(|run| (1..=4).contains(run)) {
                for _ in 0..run {
                    cells.push(None);
                }
            } else {
                return Err(FenError::UnrecognizedChar { ch });
            }
        }
        if cells.len() != BOARD_SIZE {
            return Err(FenError::RowWidth {
                row,
                found: cells.len(),
            });
        }
        for (col, cell) in cells.into_iter().enumerate() {
            if let Some(piece) = cell {
                board.place(Square::from_index(row * BOARD_SIZE + col), piece);
            }
        }
    }
    Ok(board)
}

/// Replaces the canonical row separator with the URL-safe one.
#[must_use]
pub fn to_url_safe(fen: &str) -> String {
    fen.replace(ROW_SEPARATOR, &URL_ROW_SEPARATOR.to_string())
}

/// Replaces the URL-safe row separator with the canonical one.
#[must_use]
pub fn from_url_safe(text: &str) -> String {
    text.replace(URL_ROW_SEPARATOR, &ROW_SEPARATOR.to_string())
}
