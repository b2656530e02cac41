/// A chess piece kind.
///
/// Chesslace keeps the six orthodox kinds but no colours: every piece may
/// capture every other piece. Kinds differ only in how they reach a
/// destination (see [`captures_from`](crate::captures_from)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PieceKind {
    /// Captures on the eight adjacent squares.
    #[display("king")]
    King,
    /// Captures along orthogonal and diagonal rays, stopping at the first
    /// occupied square.
    #[display("queen")]
    Queen,
    /// Captures along orthogonal rays.
    #[display("rook")]
    Rook,
    /// Captures along diagonal rays.
    #[display("bishop")]
    Bishop,
    /// Captures on the eight L-shaped offsets, jumping over anything between.
    #[display("knight")]
    Knight,
    /// Captures only on the two diagonals one row toward row 0.
    #[display("pawn")]
    Pawn,
}

impl PieceKind {
    /// All piece kinds, in canonical `K Q R B N P` order.
    pub const ALL: [Self; 6] = [
        Self::King,
        Self::Queen,
        Self::Rook,
        Self::Bishop,
        Self::Knight,
        Self::Pawn,
    ];

    /// Returns the canonical upper-case letter used by the textual board
    /// form (`K`, `Q`, `R`, `B`, `N`, `P`).
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::King => 'K',
            Self::Queen => 'Q',
            Self::Rook => 'R',
            Self::Bishop => 'B',
            Self::Knight => 'N',
            Self::Pawn => 'P',
        }
    }

    /// Parses a canonical piece letter. Case-sensitive; anything but the six
    /// upper-case letters yields `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chesslace_core::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_letter('N'), Some(PieceKind::Knight));
    /// assert_eq!(PieceKind::from_letter('n'), None);
    /// ```
    #[must_use]
    pub const fn from_letter(ch: char) -> Option<Self> {
        match ch {
            'K' => Some(Self::King),
            'Q' => Some(Self::Queen),
            'R' => Some(Self::Rook),
            'B' => Some(Self::Bishop),
            'N' => Some(Self::Knight),
            'P' => Some(Self::Pawn),
            _ => None,
        }
    }
}
