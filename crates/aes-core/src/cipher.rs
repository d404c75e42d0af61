//! AES-128 key schedule and block encryption/decryption.

use crate::block::{block_from_slice, xor_blocks, Block};
use crate::error::Result;
use crate::key::{Aes128Key, RoundKeys, ROUNDS};
use crate::round::{decrypt_round, encrypt_round};
use crate::sbox::substitute;

/// Round constants: successive powers of `x` in GF(2^8).
pub const RCON: [u8; ROUNDS] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

/// Offset of the last 4-byte word within a round key.
const LAST_WORD: usize = 12;

/// RotWord + SubWord + Rcon applied to the last word of `prev`.
///
/// A word is one column of the state, so in column-major order it is four
/// consecutive bytes and RotWord is a one-byte left rotation of them.
fn schedule_core(prev: &Block, rcon: u8) -> [u8; 4] {
    let mut word = [0u8; 4];
    word.copy_from_slice(&prev[LAST_WORD..]);
    word.rotate_left(1);
    let mut word = word.map(substitute);
    word[0] ^= rcon;
    word
}

fn next_round_key(prev: &Block, rcon: u8) -> Block {
    let temp = schedule_core(prev, rcon);
    let mut next = [0u8; 16];
    for i in 0..4 {
        next[i] = prev[i] ^ temp[i];
    }
    for i in 4..16 {
        next[i] = prev[i] ^ next[i - 4];
    }
    next
}

/// Expands a 128-bit key into 11 round keys.
pub fn expand_key(key: &Aes128Key) -> RoundKeys {
    let mut round_keys = [[0u8; 16]; ROUNDS + 1];
    round_keys[0] = key.0;
    for (round, &rcon) in RCON.iter().enumerate() {
        round_keys[round + 1] = next_round_key(&round_keys[round], rcon);
    }
    RoundKeys(round_keys)
}

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = xor_blocks(*block, round_keys.get(0));
    for round in 1..ROUNDS {
        state = encrypt_round(state, round_keys.get(round), false);
    }
    encrypt_round(state, round_keys.get(ROUNDS), true)
}

/// Decrypts a single 16-byte block with pre-expanded round keys.
pub fn decrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = xor_blocks(*block, round_keys.get(ROUNDS));
    for round in (1..ROUNDS).rev() {
        state = decrypt_round(state, round_keys.get(round), false);
    }
    decrypt_round(state, round_keys.get(0), true)
}

/// Encrypts one 16-byte `plaintext` under a 16-byte `key`.
///
/// Fails with [`crate::Error::InvalidLength`] before doing any work if either
/// input is not exactly 16 bytes.
pub fn encrypt(plaintext: &[u8], key: &[u8]) -> Result<Block> {
    let block = block_from_slice(plaintext, "plaintext")?;
    let key = Aes128Key::try_from(key)?;
    Ok(encrypt_block(&block, &expand_key(&key)))
}

/// Decrypts one 16-byte `ciphertext` under a 16-byte `key`.
pub fn decrypt(ciphertext: &[u8], key: &[u8]) -> Result<Block> {
    let block = block_from_slice(ciphertext, "ciphertext")?;
    let key = Aes128Key::try_from(key)?;
    Ok(decrypt_block(&block, &expand_key(&key)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use rand::RngCore;

    const APPENDIX_A_KEY: Block = [
        0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f,
        0x3c,
    ];

    #[test]
    fn schedule_core_matches_appendix_a_first_word() {
        // w[3] = 09cf4f3c -> RotWord cf4f3c09 -> SubWord 8a84eb01 -> Rcon 8b84eb01
        assert_eq!(schedule_core(&APPENDIX_A_KEY, 0), [0x8a, 0x84, 0xeb, 0x01]);
        assert_eq!(schedule_core(&APPENDIX_A_KEY, RCON[0]), [0x8b, 0x84, 0xeb, 0x01]);
    }

    #[test]
    fn schedule_core_rotates_last_word_left() {
        let mut prev = [0u8; 16];
        prev[12..].copy_from_slice(&[0x00, 0x01, 0x02, 0x03]);
        let expected = [substitute(0x01), substitute(0x02), substitute(0x03), substitute(0x00)];
        assert_eq!(schedule_core(&prev, 0), expected);
    }

    #[test]
    fn next_round_key_chains_words() {
        let mut rng = rand::thread_rng();
        for &rcon in RCON.iter() {
            let mut prev = [0u8; 16];
            rng.fill_bytes(&mut prev);
            let next = next_round_key(&prev, rcon);
            let temp = schedule_core(&prev, rcon);
            for i in 0..4 {
                assert_eq!(next[i], prev[i] ^ temp[i]);
            }
            for word in 1..4 {
                for byte in 0..4 {
                    let i = word * 4 + byte;
                    assert_eq!(next[i], prev[i] ^ next[i - 4]);
                }
            }
        }
    }

    #[test]
    fn schedule_starts_with_key_and_ends_with_fips_round_ten() {
        let key = Aes128Key::from(APPENDIX_A_KEY);
        let rks = expand_key(&key);
        assert_eq!(rks.len(), 11);
        assert_eq!(rks.get(0), &key.0);
        assert_eq!(
            rks.get(1),
            &[
                0xa0, 0xfa, 0xfe, 0x17, 0x88, 0x54, 0x2c, 0xb1, 0x23, 0xa3, 0x39, 0x39, 0x2a, 0x6c,
                0x76, 0x05
            ]
        );
        assert_eq!(
            rks.get(10),
            &[
                0xd0, 0x14, 0xf9, 0xa8, 0xc9, 0xee, 0x25, 0x89, 0xe1, 0x3f, 0x0c, 0xc8, 0xb6, 0x63,
                0x0c, 0xa6
            ]
        );
        assert_eq!(expand_key(&key), rks);
    }

    #[test]
    fn zero_key_zero_block() {
        let ct = encrypt(&[0u8; 16], &[0u8; 16]).expect("16-byte inputs");
        assert_eq!(
            ct,
            [
                0x66, 0xe9, 0x4b, 0xd4, 0xef, 0x8a, 0x2c, 0x3b, 0x88, 0x4c, 0xfa, 0x59, 0xca, 0x34,
                0x2b, 0x2e
            ]
        );
        assert_eq!(decrypt(&ct, &[0u8; 16]), Ok([0u8; 16]));
    }

    #[test]
    fn slice_api_rejects_bad_lengths() {
        let block = [0u8; 16];
        assert_eq!(
            encrypt(&block[..15], &APPENDIX_A_KEY),
            Err(Error::InvalidLength {
                context: "plaintext",
                expected: 16,
                actual: 15
            })
        );
        let long_key = [0u8; 17];
        assert_eq!(
            encrypt(&block, &long_key),
            Err(Error::InvalidLength {
                context: "key",
                expected: 16,
                actual: 17
            })
        );
        let long_block = [0u8; 17];
        assert!(matches!(
            decrypt(&long_block, &APPENDIX_A_KEY),
            Err(Error::InvalidLength {
                context: "ciphertext",
                ..
            })
        ));
    }
}
