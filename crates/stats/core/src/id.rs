//! Opaque record identifiers.
//!
//! Identifiers are 12 bytes rendered as 24 lowercase hex characters: a 4-byte
//! big-endian creation timestamp (seconds) followed by 8 random bytes. The
//! value carries no meaning beyond identity; uniqueness across teams and games
//! is enforced by the engine's allocator, not by this type.

use core::fmt;
use core::str::FromStr;

use rand::RngCore;

/// Errors produced while parsing an identifier.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    #[error("identifier must be {expected} hex characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("identifier contains non-hex characters: {0}")]
    InvalidHex(String),
}

/// Identifier of a player, team or game record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct RecordId([u8; RecordId::LEN]);

impl RecordId {
    /// Raw byte length.
    pub const LEN: usize = 12;

    /// Length of the textual form.
    pub const HEX_LEN: usize = Self::LEN * 2;

    pub const fn from_bytes(bytes: [u8; Self::LEN]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; Self::LEN] {
        &self.0
    }

    /// Mints a fresh candidate using the thread-local RNG.
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::thread_rng(), chrono::Utc::now().timestamp())
    }

    /// Mints a candidate from an explicit RNG and timestamp.
    pub fn generate_with<R: RngCore + ?Sized>(rng: &mut R, unix_seconds: i64) -> Self {
        let mut bytes = [0u8; Self::LEN];
        let seconds = u32::try_from(unix_seconds.max(0)).unwrap_or(u32::MAX);
        bytes[..4].copy_from_slice(&seconds.to_be_bytes());
        rng.fill_bytes(&mut bytes[4..]);
        Self(bytes)
    }

    /// Creation time embedded in the identifier, in unix seconds.
    pub fn timestamp(&self) -> u32 {
        u32::from_be_bytes([self.0[0], self.0[1], self.0[2], self.0[3]])
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for RecordId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() != Self::HEX_LEN {
            return Err(IdError::InvalidLength {
                expected: Self::HEX_LEN,
                actual: s.len(),
            });
        }
        let mut bytes = [0u8; Self::LEN];
        hex::decode_to_slice(s, &mut bytes).map_err(|_| IdError::InvalidHex(s.to_string()))?;
        Ok(Self(bytes))
    }
}

impl TryFrom<String> for RecordId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RecordId> for String {
    fn from(value: RecordId) -> Self {
        value.to_hex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn hex_round_trip() {
        let id: RecordId = "64b7f0c2a1b2c3d4e5f60718".parse().unwrap();
        assert_eq!(id.to_string(), "64b7f0c2a1b2c3d4e5f60718");
        assert_eq!(id.timestamp(), 0x64b7_f0c2);
    }

    #[test]
    fn uppercase_hex_is_accepted_and_normalized() {
        let id: RecordId = "64B7F0C2A1B2C3D4E5F60718".parse().unwrap();
        assert_eq!(id.to_string(), "64b7f0c2a1b2c3d4e5f60718");
    }

    #[test]
    fn rejects_malformed_identifiers() {
        assert_eq!(
            "abc".parse::<RecordId>(),
            Err(IdError::InvalidLength {
                expected: 24,
                actual: 3
            })
        );
        assert!(matches!(
            "zzzzzzzzzzzzzzzzzzzzzzzz".parse::<RecordId>(),
            Err(IdError::InvalidHex(_))
        ));
    }

    #[test]
    fn generated_ids_embed_timestamp_and_differ() {
        let mut rng = StdRng::seed_from_u64(7);
        let a = RecordId::generate_with(&mut rng, 1_700_000_000);
        let b = RecordId::generate_with(&mut rng, 1_700_000_000);
        assert_eq!(a.timestamp(), 1_700_000_000);
        assert_ne!(a, b);
    }
}
