//! Shuffle seeds and their hex representation.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;
use sha2::{Digest as _, Sha256};

/// A 32-byte shuffle seed.
///
/// Seeds are displayed and parsed as 64 hex digits, which makes a shuffle
/// reproducible from its printed form: the same seed, dimensions, and
/// strategy always yield the same board.
///
/// # Examples
///
/// ```
/// use pictile_shuffler::ShuffleSeed;
///
/// let text = "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef";
/// let seed: ShuffleSeed = text.parse().unwrap();
/// assert_eq!(seed.to_string(), text);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShuffleSeed([u8; 32]);

impl ShuffleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Draws a fresh seed from the thread RNG.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0u8; 32];
        rand::rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Builds the deterministic RNG stream for this seed.
    ///
    /// The seed bytes are stretched through SHA-256 so that visually
    /// similar seeds still start the generator in unrelated states.
    pub(crate) fn rng(&self) -> Pcg64Mcg {
        let digest = Sha256::digest(self.0);
        let mut state = [0u8; 16];
        state.copy_from_slice(&digest[..16]);
        Pcg64Mcg::from_seed(state)
    }
}

impl Display for ShuffleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for ShuffleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.as_bytes();
        if raw.len() != 64 {
            return Err(ParseSeedError::InvalidLength { len: raw.len() });
        }
        let mut bytes = [0u8; 32];
        for (i, byte) in bytes.iter_mut().enumerate() {
            let hi = hex_value(raw[i * 2]).ok_or(ParseSeedError::InvalidDigit { offset: i * 2 })?;
            let lo = hex_value(raw[i * 2 + 1])
                .ok_or(ParseSeedError::InvalidDigit { offset: i * 2 + 1 })?;
            *byte = (hi << 4) | lo;
        }
        Ok(Self(bytes))
    }
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// Errors from parsing a hex shuffle seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The string must be exactly 64 hex digits.
    #[display("seed must be 64 hex digits, got {len}")]
    InvalidLength {
        /// Length of the rejected string in bytes.
        len: usize,
    },
    /// A character was not a hex digit.
    #[display("invalid hex digit at offset {offset}")]
    InvalidDigit {
        /// Byte offset of the offending character.
        offset: usize,
    },
}

#[cfg(test)]
mod tests {
    use rand::Rng as _;

    use super::*;

    #[test]
    fn test_display_parse_round_trip() {
        let mut bytes = [0u8; 32];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::try_from(i).unwrap() * 7;
        }
        let seed = ShuffleSeed::from_bytes(bytes);
        let parsed: ShuffleSeed = seed.to_string().parse().unwrap();
        assert_eq!(parsed, seed);
        assert_eq!(parsed.as_bytes(), &bytes);
    }

    #[test]
    fn test_parse_accepts_uppercase() {
        let lower = "00112233445566778899aabbccddeeff00112233445566778899aabbccddeeff";
        let upper = lower.to_uppercase();
        let a: ShuffleSeed = lower.parse().unwrap();
        let b: ShuffleSeed = upper.parse().unwrap();
        assert_eq!(a, b);
        // Display always renders lowercase
        assert_eq!(b.to_string(), lower);
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert_eq!(
            "abcd".parse::<ShuffleSeed>(),
            Err(ParseSeedError::InvalidLength { len: 4 })
        );
        let long = "0".repeat(65);
        assert_eq!(
            long.parse::<ShuffleSeed>(),
            Err(ParseSeedError::InvalidLength { len: 65 })
        );
    }

    #[test]
    fn test_parse_rejects_non_hex_digits() {
        let mut text = "0".repeat(64);
        text.replace_range(10..11, "g");
        assert_eq!(
            text.parse::<ShuffleSeed>(),
            Err(ParseSeedError::InvalidDigit { offset: 10 })
        );
    }

    #[test]
    fn test_error_messages() {
        let err = ParseSeedError::InvalidLength { len: 3 };
        assert_eq!(err.to_string(), "seed must be 64 hex digits, got 3");
        let err = ParseSeedError::InvalidDigit { offset: 11 };
        assert_eq!(err.to_string(), "invalid hex digit at offset 11");
    }

    #[test]
    fn test_random_seeds_differ() {
        assert_ne!(ShuffleSeed::random(), ShuffleSeed::random());
    }

    #[test]
    fn test_rng_is_deterministic_per_seed() {
        let seed = ShuffleSeed::from_bytes([42; 32]);
        let mut a = seed.rng();
        let mut b = seed.rng();
        assert_eq!(a.next_u64(), b.next_u64());

        let other = ShuffleSeed::from_bytes([43; 32]);
        let mut c = other.rng();
        assert_ne!(seed.rng().next_u64(), c.next_u64());
    }
}
