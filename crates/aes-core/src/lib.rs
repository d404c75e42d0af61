//! From-scratch AES-128 block cipher.
//!
//! This crate mirrors the FIPS-197 specification and provides:
//! - The Rijndael S-box and the four round transformations.
//! - Key schedule for AES-128.
//! - Single-block encryption and decryption, plus an output-neutral batch
//!   dispatcher for many independent blocks.
//!
//! The implementation aims for clarity and testability rather than constant-time
//! guarantees; it should not be treated as side-channel hardened.
//!
//! ```
//! let key = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
//! let pt = hex::decode("00112233445566778899aabbccddeeff").unwrap();
//! let ct = aes_core::encrypt(&pt, &key).unwrap();
//! assert_eq!(hex::encode(ct), "69c4e0d86a7b0430d8cdb78070b4c55a");
//! assert_eq!(aes_core::decrypt(&ct, &key).unwrap().as_slice(), pt.as_slice());
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
mod key;
mod mode;
mod round;
mod sbox;

pub use crate::block::{block_from_slice, xor_blocks, Block, BLOCK_SIZE};
pub use crate::cipher::{decrypt, decrypt_block, encrypt, encrypt_block, expand_key, RCON};
pub use crate::error::{Error, Result};
pub use crate::key::{Aes128Key, RoundKeys, KEY_SIZE, ROUNDS};
pub use crate::mode::{process_blocks, transform, Operation, ProcessingHint};
pub use crate::round::{
    add_round_key, decrypt_round, encrypt_round, inv_mix_columns, inv_shift_rows, mix_columns,
    shift_rows, xtime,
};
pub use crate::sbox::{inv_sub_bytes, inverse_substitute, sub_bytes, substitute, INV_SBOX, SBOX};
