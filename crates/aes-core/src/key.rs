//! Key types for AES-128.

use crate::block::Block;
use crate::error::Error;

/// Key size of AES-128 in bytes.
pub const KEY_SIZE: usize = 16;

/// Number of rounds for AES-128.
pub const ROUNDS: usize = 10;

/// AES-128 key wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aes128Key(pub [u8; KEY_SIZE]);

impl From<[u8; KEY_SIZE]> for Aes128Key {
    fn from(value: [u8; KEY_SIZE]) -> Self {
        Self(value)
    }
}

impl TryFrom<&[u8]> for Aes128Key {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let key: [u8; KEY_SIZE] = bytes.try_into().map_err(|_| Error::InvalidLength {
            context: "key",
            expected: KEY_SIZE,
            actual: bytes.len(),
        })?;
        Ok(Self(key))
    }
}

impl AsRef<[u8]> for Aes128Key {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Expanded round keys for AES-128.
///
/// Only [`crate::expand_key`] builds this, so it always holds `ROUNDS + 1`
/// blocks and `get(0)` is the cipher key itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundKeys(pub(crate) [Block; ROUNDS + 1]);

impl RoundKeys {
    /// Returns the round key at the requested index (0..=10).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.0[round]
    }

    /// Number of round keys (always 11).
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterates over the round keys from round 0 to round 10.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Block> + ExactSizeIterator {
        self.0.iter()
    }
}
