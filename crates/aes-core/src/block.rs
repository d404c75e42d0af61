//! Block representation helpers.
//!
//! The 16 bytes of a block form the AES state in column-major order: byte `i`
//! sits in column `i / 4`, row `i % 4`.

use crate::error::{Error, Result};

/// Size of an AES block in bytes.
pub const BLOCK_SIZE: usize = 16;

/// AES block of 16 bytes.
pub type Block = [u8; BLOCK_SIZE];

/// XORs two blocks, writing the result into `dst`.
#[inline]
pub fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}

/// Returns `lhs ^ rhs` as a new block.
#[inline]
pub fn xor_blocks(lhs: Block, rhs: &Block) -> Block {
    let mut out = lhs;
    xor_in_place(&mut out, rhs);
    out
}

/// Copies `bytes` into a block, rejecting anything that is not exactly 16 bytes.
///
/// `context` names the rejected input in the returned error.
pub fn block_from_slice(bytes: &[u8], context: &'static str) -> Result<Block> {
    bytes.try_into().map_err(|_| Error::InvalidLength {
        context,
        expected: BLOCK_SIZE,
        actual: bytes.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xor_with_self_is_zero() {
        let block: Block = core::array::from_fn(|i| (i as u8).wrapping_mul(17));
        assert_eq!(xor_blocks(block, &block), [0u8; 16]);
    }

    #[test]
    fn from_slice_checks_length() {
        let ok = block_from_slice(&[7u8; 16], "block").expect("16 bytes");
        assert_eq!(ok, [7u8; 16]);

        let err = block_from_slice(&[0u8; 15], "block").unwrap_err();
        assert_eq!(
            err,
            Error::InvalidLength {
                context: "block",
                expected: 16,
                actual: 15
            }
        );
        assert!(block_from_slice(&[0u8; 17], "block").is_err());
        assert!(block_from_slice(&[], "block").is_err());
    }
}
