//! AES round transformations.
//!
//! Each step takes the state by value and returns the transformed state. The
//! state layout is column-major (see [`crate::block`]), so row `r` lives at
//! indices `r, r + 4, r + 8, r + 12`.

use crate::block::{xor_blocks, Block};
use crate::sbox::{inv_sub_bytes, sub_bytes};

/// Source index for each output byte of ShiftRows: row `r` rotates left by `r`.
const SHIFT_ROWS: [usize; 16] = shift_table(false);

/// Source index for each output byte of InvShiftRows: row `r` rotates right by `r`.
const INV_SHIFT_ROWS: [usize; 16] = shift_table(true);

const fn shift_table(inverse: bool) -> [usize; 16] {
    let mut table = [0usize; 16];
    let mut col = 0;
    while col < 4 {
        let mut row = 0;
        while row < 4 {
            let src_col = if inverse {
                (col + 4 - row) % 4
            } else {
                (col + row) % 4
            };
            table[col * 4 + row] = src_col * 4 + row;
            row += 1;
        }
        col += 1;
    }
    table
}

#[inline]
fn permute(state: &Block, table: &[usize; 16]) -> Block {
    core::array::from_fn(|i| state[table[i]])
}

/// Performs ShiftRows.
#[inline]
pub fn shift_rows(state: Block) -> Block {
    permute(&state, &SHIFT_ROWS)
}

/// Performs the inverse of ShiftRows.
#[inline]
pub fn inv_shift_rows(state: Block) -> Block {
    permute(&state, &INV_SHIFT_ROWS)
}

/// Multiplies by `x` (i.e. 2) in GF(2^8) modulo `x^8 + x^4 + x^3 + x + 1`.
#[inline]
pub fn xtime(byte: u8) -> u8 {
    let shifted = byte << 1;
    if byte & 0x80 != 0 {
        shifted ^ 0x1b
    } else {
        shifted
    }
}

#[inline]
fn mul3(a: u8) -> u8 {
    xtime(a) ^ a
}

#[inline]
fn mul9(a: u8) -> u8 {
    xtime(xtime(xtime(a))) ^ a
}

#[inline]
fn mul11(a: u8) -> u8 {
    xtime(xtime(xtime(a)) ^ a) ^ a
}

#[inline]
fn mul13(a: u8) -> u8 {
    xtime(xtime(xtime(a) ^ a)) ^ a
}

#[inline]
fn mul14(a: u8) -> u8 {
    xtime(xtime(xtime(a) ^ a) ^ a)
}

fn mix_single_column([a0, a1, a2, a3]: [u8; 4]) -> [u8; 4] {
    [
        xtime(a0) ^ mul3(a1) ^ a2 ^ a3,
        a0 ^ xtime(a1) ^ mul3(a2) ^ a3,
        a0 ^ a1 ^ xtime(a2) ^ mul3(a3),
        mul3(a0) ^ a1 ^ a2 ^ xtime(a3),
    ]
}

fn inv_mix_single_column([a0, a1, a2, a3]: [u8; 4]) -> [u8; 4] {
    [
        mul14(a0) ^ mul11(a1) ^ mul13(a2) ^ mul9(a3),
        mul9(a0) ^ mul14(a1) ^ mul11(a2) ^ mul13(a3),
        mul13(a0) ^ mul9(a1) ^ mul14(a2) ^ mul11(a3),
        mul11(a0) ^ mul13(a1) ^ mul9(a2) ^ mul14(a3),
    ]
}

fn map_columns(mut state: Block, f: fn([u8; 4]) -> [u8; 4]) -> Block {
    for column in state.chunks_exact_mut(4) {
        let mixed = f([column[0], column[1], column[2], column[3]]);
        column.copy_from_slice(&mixed);
    }
    state
}

/// MixColumns over all four columns.
#[inline]
pub fn mix_columns(state: Block) -> Block {
    map_columns(state, mix_single_column)
}

/// Inverse MixColumns over all four columns.
#[inline]
pub fn inv_mix_columns(state: Block) -> Block {
    map_columns(state, inv_mix_single_column)
}

/// Adds (XORs) a round key into the state.
#[inline]
pub fn add_round_key(state: Block, round_key: &Block) -> Block {
    xor_blocks(state, round_key)
}

/// One encryption round: SubBytes, ShiftRows, MixColumns, AddRoundKey.
///
/// MixColumns is skipped when `is_final` is set.
pub fn encrypt_round(state: Block, round_key: &Block, is_final: bool) -> Block {
    let state = shift_rows(sub_bytes(state));
    let state = if is_final { state } else { mix_columns(state) };
    add_round_key(state, round_key)
}

/// One decryption round: InvShiftRows, InvSubBytes, AddRoundKey, InvMixColumns.
///
/// InvMixColumns comes after the key addition and is skipped when `is_first`
/// is set, i.e. for the round consuming `round_keys[0]`.
pub fn decrypt_round(state: Block, round_key: &Block, is_first: bool) -> Block {
    let state = add_round_key(inv_sub_bytes(inv_shift_rows(state)), round_key);
    if is_first {
        state
    } else {
        inv_mix_columns(state)
    }
}
