use std::ops::RangeInclusive;

/// Difficulty band of a puzzle, derived from its 0–100 score.
///
/// Bands split the score scale at 20/35/50/70. Each band also carries a
/// target score — the point generation aims at when asked for that band.
///
/// # Examples
///
/// ```
/// use chesslace_generator::Difficulty;
///
/// assert_eq!(Difficulty::from_score(12), Difficulty::VeryEasy);
/// assert_eq!(Difficulty::from_score(70), Difficulty::VeryHard);
/// assert!(Difficulty::Hard.score_range().contains(&55));
/// assert_eq!(Difficulty::Hard.to_string(), "hard");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    derive_more::Display,
    derive_more::IsVariant,
)]
pub enum Difficulty {
    /// Scores below 20.
    #[display("very-easy")]
    VeryEasy,
    /// Scores 20–34.
    #[display("easy")]
    Easy,
    /// Scores 35–49.
    #[display("medium")]
    Medium,
    /// Scores 50–69.
    #[display("hard")]
    Hard,
    /// Scores 70 and above.
    #[display("very-hard")]
    VeryHard,
}

impl Difficulty {
    /// All bands, easiest first.
    pub const ALL: [Self; 5] = [
        Self::VeryEasy,
        Self::Easy,
        Self::Medium,
        Self::Hard,
        Self::VeryHard,
    ];

    /// Classifies a difficulty score.
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            0..=19 => Self::VeryEasy,
            20..=34 => Self::Easy,
            35..=49 => Self::Medium,
            50..=69 => Self::Hard,
            _ => Self::VeryHard,
        }
    }

    /// The scores belonging to this band.
    #[must_use]
    pub const fn score_range(self) -> RangeInclusive<u8> {
        match self {
            Self::VeryEasy => 0..=19,
            Self::Easy => 20..=34,
            Self::Medium => 35..=49,
            Self::Hard => 50..=69,
            Self::VeryHard => 70..=100,
        }
    }

    /// The score generation aims at when targeting this band.
    #[must_use]
    pub const fn target_score(self) -> u8 {
        match self {
            Self::VeryEasy => 10,
            Self::Easy => 27,
            Self::Medium => 42,
            Self::Hard => 60,
            Self::VeryHard => 85,
        }
    }
}
