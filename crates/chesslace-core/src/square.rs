use crate::BOARD_SIZE;

/// A square on the 4×4 board, identified by `(row, col)`.
///
/// Row 0 is the top of the board; pawns capture toward it. Squares order
/// row-major, which fixes the deterministic move-generation order used by
/// the solver.
///
/// # Examples
///
/// ```
/// use chesslace_core::Square;
///
/// let sq = Square::new(2, 3);
/// assert_eq!(sq.index(), 11);
/// assert_eq!(Square::from_index(11), sq);
/// assert_eq!(sq.offset(-1, 0), Some(Square::new(1, 3)));
/// assert_eq!(sq.offset(0, 1), None); // off the right edge
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, derive_more::Display)]
#[display("({row}, {col})")]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Number of squares on the board.
    pub const COUNT: usize = BOARD_SIZE * BOARD_SIZE;

    /// All squares in row-major order.
    pub const ALL: [Self; Self::COUNT] = {
        let mut all = [Self { row: 0, col: 0 }; Self::COUNT];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < Self::COUNT {
            all[i] = Self {
                row: (i / BOARD_SIZE) as u8,
                col: (i % BOARD_SIZE) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a square from row and column coordinates.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is outside `0..4`.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!((row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE);
        Self { row, col }
    }

    /// Row coordinate (0 = top).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Column coordinate (0 = left).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Row-major index into 16-element containers.
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// Inverse of [`index`](Self::index).
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in `0..16`.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        assert!(index < Self::COUNT);
        Self::ALL[index]
    }

    /// Returns the square displaced by `(d_row, d_col)`, or `None` when the
    /// displacement leaves the board.
    #[must_use]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = u8::try_from(i16::from(self.row) + i16::from(d_row)).ok()?;
        let col = u8::try_from(i16::from(self.col) + i16::from(d_col)).ok()?;
        (usize::from(row) < BOARD_SIZE && usize::from(col) < BOARD_SIZE)
            .then_some(Self { row, col })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_row_major() {
        assert_eq!(Square::ALL[0], Square::new(0, 0));
        assert_eq!(Square::ALL[3], Square::new(0, 3));
        assert_eq!(Square::ALL[4], Square::new(1, 0));
        assert_eq!(Square::ALL[15], Square::new(3, 3));
        for (i, sq) in Square::ALL.into_iter().enumerate() {
            assert_eq!(sq.index(), i);
            assert_eq!(Square::from_index(i), sq);
        }
    }

    #[test]
    fn test_offset_stays_in_bounds() {
        let corner = Square::new(0, 0);
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(0, -1), None);
        assert_eq!(corner.offset(1, 1), Some(Square::new(1, 1)));

        let far = Square::new(3, 3);
        assert_eq!(far.offset(1, 0), None);
        assert_eq!(far.offset(0, 1), None);
        assert_eq!(far.offset(-2, -1), Some(Square::new(1, 2)));
    }

    #[test]
    #[should_panic(expected = "assertion failed")]
    fn test_new_rejects_out_of_range() {
        let _ = Square::new(4, 0);
    }
}
