//! Operation selection and block-batch dispatch.
//!
//! Blocks are independent of one another (no chaining), so a batch can be
//! split across threads freely. The [`ProcessingHint`] only picks how the work
//! is scheduled; it never changes a single output byte.

use rayon::prelude::*;

use crate::block::{block_from_slice, Block};
use crate::cipher::{decrypt_block, encrypt_block, expand_key};
use crate::error::Result;
use crate::key::{Aes128Key, RoundKeys};

/// Direction of a cipher call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Plaintext to ciphertext.
    Encrypt,
    /// Ciphertext to plaintext.
    Decrypt,
}

impl Operation {
    fn apply(self, block: &Block, round_keys: &RoundKeys) -> Block {
        match self {
            Operation::Encrypt => encrypt_block(block, round_keys),
            Operation::Decrypt => decrypt_block(block, round_keys),
        }
    }

    fn input_name(self) -> &'static str {
        match self {
            Operation::Encrypt => "plaintext",
            Operation::Decrypt => "ciphertext",
        }
    }
}

/// Scheduling strategy requested by the caller. Output-neutral.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ProcessingHint {
    /// Process blocks one after another on the calling thread.
    #[default]
    Standard,
    /// Spread blocks over the rayon thread pool.
    BatchOptimized,
}

/// Transforms one block, validating both input lengths first.
///
/// A single block has nothing to parallelize, so both hints take the same path.
pub fn transform(
    input: &[u8],
    key: &[u8],
    operation: Operation,
    hint: ProcessingHint,
) -> Result<Block> {
    let block = block_from_slice(input, operation.input_name())?;
    let key = Aes128Key::try_from(key)?;
    tracing::trace!(?operation, ?hint, "single block");
    Ok(operation.apply(&block, &expand_key(&key)))
}

/// Transforms every block of `blocks` in place under one key schedule.
pub fn process_blocks(
    blocks: &mut [Block],
    key: &Aes128Key,
    operation: Operation,
    hint: ProcessingHint,
) {
    if blocks.is_empty() {
        return;
    }
    let round_keys = expand_key(key);
    tracing::debug!(blocks = blocks.len(), ?operation, ?hint, "processing batch");
    match hint {
        ProcessingHint::Standard => {
            for block in blocks.iter_mut() {
                *block = operation.apply(block, &round_keys);
            }
        }
        ProcessingHint::BatchOptimized => {
            blocks
                .par_iter_mut()
                .for_each(|block| *block = operation.apply(block, &round_keys));
        }
    }
}
