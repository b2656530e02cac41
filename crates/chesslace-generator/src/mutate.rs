use chesslace_core::{Board, Square};
use rand::{Rng, RngExt};

use crate::sampling::weighted_piece_kind;

/// Mutations never shrink a board below this many pieces.
pub(crate) const MIN_MUTATION_PIECES: usize = 2;

/// Applies one random local mutation to `board`.
///
/// Mutations are the neighbourhood of the hill climb: swap two occupied
/// squares, relocate a piece to an empty square, re-draw a piece's kind from
/// the weighted distribution, add a piece (below `max_pieces`), or remove
/// one (above [`MIN_MUTATION_PIECES`]). A mutation whose precondition fails
/// returns the board unchanged.
pub(crate) fn mutate<R: Rng + ?Sized>(rng: &mut R, board: Board, max_pieces: usize) -> Board {
    match rng.random_range(0..5) {
        0 => swap_two_pieces(rng, board),
        1 => relocate_piece(rng, board),
        2 => change_piece_kind(rng, board),
        3 => add_piece(rng, board, max_pieces),
        _ => remove_piece(rng, board),
    }
}

fn occupied_squares(board: &Board) -> Vec<Square> {
    board.occupied().map(|(square, _)| square).collect()
}

fn empty_squares(board: &Board) -> Vec<Square> {
    Square::ALL
        .into_iter()
        .filter(|&square| board.piece_at(square).is_none())
        .collect()
}

fn swap_two_pieces<R: Rng + ?Sized>(rng: &mut R, mut board: Board) -> Board {
    let occupied = occupied_squares(&board);
    if occupied.len() < 2 {
        return board;
    }
    let first = occupied[rng.random_range(0..occupied.len())];
    let mut second = occupied[rng.random_range(0..occupied.len())];
    while second == first {
        second = occupied[rng.random_range(0..occupied.len())];
    }
    if let (Some(a), Some(b)) = (board.piece_at(first), board.piece_at(second)) {
        board.place(first, b);
        board.place(second, a);
    }
    board
}

fn relocate_piece<R: Rng + ?Sized>(rng: &mut R, mut board: Board) -> Board {
    let occupied = occupied_squares(&board);
    let empty = empty_squares(&board);
    if occupied.is_empty() || empty.is_empty() {
        return board;
    }
    let from = occupied[rng.random_range(0..occupied.len())];
    let to = empty[rng.random_range(0..empty.len())];
    if let Some(piece) = board.piece_at(from) {
        board.clear(from);
        board.place(to, piece);
    }
    board
}

fn change_piece_kind<R: Rng + ?Sized>(rng: &mut R, mut board: Board) -> Board {
    let occupied = occupied_squares(&board);
    if occupied.is_empty() {
        return board;
    }
    let square = occupied[rng.random_range(0..occupied.len())];
    board.place(square, weighted_piece_kind(rng));
    board
}

fn add_piece<R: Rng + ?Sized>(rng: &mut R, mut board: Board, max_pieces: usize) -> Board {
    let empty = empty_squares(&board);
    if empty.is_empty() || board.piece_count() >= max_pieces {
        return board;
    }
    let square = empty[rng.random_range(0..empty.len())];
    board.place(square, weighted_piece_kind(rng));
    board
}

fn remove_piece<R: Rng + ?Sized>(rng: &mut R, mut board: Board) -> Board {
    let occupied = occupied_squares(&board);
    if occupied.len() <= MIN_MUTATION_PIECES {
        return board;
    }
    board.clear(occupied[rng.random_range(0..occupied.len())]);
    board
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::PuzzleSeed;

    fn seeded_board(rng: &mut impl rand::Rng, piece_count: usize) -> Board {
        crate::sampling::random_board(rng, piece_count)
    }

    #[test]
    fn test_swap_preserves_piece_count() {
        let mut rng = PuzzleSeed::from_phrase("swap").rng();
        let board = seeded_board(&mut rng, 5);
        let mutated = swap_two_pieces(&mut rng, board);
        assert_eq!(mutated.piece_count(), 5);
    }

    #[test]
    fn test_relocate_preserves_piece_count() {
        let mut rng = PuzzleSeed::from_phrase("relocate").rng();
        let board = seeded_board(&mut rng, 5);
        let mutated = relocate_piece(&mut rng, board);
        assert_eq!(mutated.piece_count(), 5);
    }

    #[test]
    fn test_add_respects_maximum() {
        let mut rng = PuzzleSeed::from_phrase("add").rng();
        let board = seeded_board(&mut rng, 8);
        let mutated = add_piece(&mut rng, board, 8);
        assert_eq!(mutated.piece_count(), 8);

        let grown = add_piece(&mut rng, board, 9);
        assert_eq!(grown.piece_count(), 9);
    }

    #[test]
    fn test_remove_respects_minimum() {
        let mut rng = PuzzleSeed::from_phrase("remove").rng();
        let board = seeded_board(&mut rng, 2);
        let mutated = remove_piece(&mut rng, board);
        assert_eq!(mutated.piece_count(), 2);

        let base = seeded_board(&mut rng, 3);
        let shrunk = remove_piece(&mut rng, base);
        assert_eq!(shrunk.piece_count(), 2);
    }

    proptest! {
        #[test]
        fn prop_mutation_keeps_count_in_bounds(phrase in "[a-z]{8}", pieces in 2usize..=8) {
            let mut rng = PuzzleSeed::from_phrase(&phrase).rng();
            let board = seeded_board(&mut rng, pieces);
            let mutated = mutate(&mut rng, board, 8);

            prop_assert!(mutated.piece_count() >= MIN_MUTATION_PIECES);
            prop_assert!(mutated.piece_count() <= 8.max(pieces));
        }
    }
}
