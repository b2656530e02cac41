use std::{fmt, str::FromStr};

use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// The 32-byte seed of one generation run.
///
/// Every run owns an independent [`Pcg64`] stream derived from its seed, so
/// a run is reproducible bit-for-bit: same seed, same options, same puzzle.
/// Seeds display as 64 lower-case hex characters and parse back via
/// [`FromStr`].
///
/// # Examples
///
/// ```
/// use chesslace_generator::PuzzleSeed;
///
/// let seed = PuzzleSeed::from_phrase("weekly challenge 7");
/// let restored: PuzzleSeed = seed.to_string().parse()?;
/// assert_eq!(seed, restored);
/// # Ok::<(), chesslace_generator::SeedParseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; Self::LEN]);

impl PuzzleSeed {
    /// Seed length in bytes.
    pub const LEN: usize = 32;

    /// Wraps raw seed bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; Self::LEN]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        let mut bytes = [0u8; Self::LEN];
        rand::rng().fill(bytes.as_mut_slice());
        Self(bytes)
    }

    /// Derives a seed from an arbitrary phrase via SHA-256.
    ///
    /// Handy for human-memorable reproducible runs and for splitting one
    /// seed into per-worker streams (`"{seed}-{worker}"`).
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    /// The random stream owned by this seed.
    #[must_use]
    pub fn rng(&self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }

    /// Raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; Self::LEN] {
        &self.0
    }
}

impl fmt::Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Reason seed text was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SeedParseError {
    /// The text is not exactly 64 characters long.
    #[display("expected 64 hex characters, found {found}")]
    Length {
        /// Number of characters found.
        found: usize,
    },
    /// A character is not a hex digit.
    #[display("invalid hex character {ch:?}")]
    InvalidHex {
        /// The offending character.
        ch: char,
    },
}

impl FromStr for PuzzleSeed {
    type Err = SeedParseError;

    #[expect(clippy::cast_possible_truncation)]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let count = s.chars().count();
        if count != Self::LEN * 2 {
            return Err(SeedParseError::Length { found: count });
        }
        let mut bytes = [0u8; Self::LEN];
        for (i, ch) in s.chars().enumerate() {
            let nibble = ch
                .to_digit(16)
                .ok_or(SeedParseError::InvalidHex { ch })?;
            bytes[i / 2] = (bytes[i / 2] << 4) | nibble as u8;
        }
        Ok(Self(bytes))
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng as _;

    use super::*;

    #[test]
    fn test_display_parse_round_trip() {
        let seed = PuzzleSeed::from_bytes([0xAB; 32]);
        let text = seed.to_string();
        assert_eq!(text.len(), 64);
        assert_eq!(text.parse::<PuzzleSeed>(), Ok(seed));
    }

    #[test]
    fn test_phrase_seeds_are_deterministic() {
        let a = PuzzleSeed::from_phrase("level pack 3");
        let b = PuzzleSeed::from_phrase("level pack 3");
        let c = PuzzleSeed::from_phrase("level pack 4");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_same_seed_same_stream() {
        let seed = PuzzleSeed::from_phrase("stream check");
        let mut rng_a = seed.rng();
        let mut rng_b = seed.rng();
        for _ in 0..16 {
            assert_eq!(rng_a.random::<u64>(), rng_b.random::<u64>());
        }
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert_eq!(
            "abcd".parse::<PuzzleSeed>(),
            Err(SeedParseError::Length { found: 4 })
        );
    }

    #[test]
    fn test_rejects_non_hex() {
        let text = "g".repeat(64);
        assert_eq!(
            text.parse::<PuzzleSeed>(),
            Err(SeedParseError::InvalidHex { ch: 'g' })
        );
    }

    #[test]
    fn test_parses_known_hex() {
        let text = "00000000000000000000000000000000000000000000000000000000000000ff";
        let seed: PuzzleSeed = text.parse().unwrap();
        assert_eq!(seed.as_bytes()[31], 0xFF);
        assert_eq!(seed.to_string(), text);
    }
}
