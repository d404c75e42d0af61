//! Error type for the AES-128 engine.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors returned by the public cipher entry points.
///
/// Every transformation is total over well-formed inputs, so the only failure
/// is a malformed input length, detected before any work is done.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A block or key was not exactly 16 bytes long.
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        /// Which input was rejected (`"plaintext"`, `"key"`, ...).
        context: &'static str,
        /// Required length in bytes.
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_input() {
        let err = Error::InvalidLength {
            context: "key",
            expected: 16,
            actual: 17,
        };
        assert_eq!(err.to_string(), "key: invalid length (expected 16, got 17)");
    }
}
