//! Bit helpers for the packed cell buffer.
//!
//! Layout is LSB-first: bit `n` lives in byte `n >> 3` at position `n & 7`.
//! Out-of-range indices are ignored on write and read back as `false`.

#[inline(always)]
pub fn byte_len(bits: usize) -> usize {
    (bits + 7) >> 3
}

#[inline(always)]
pub fn check_bit(bytes: &[u8], idx: usize) -> bool {
    let byte = idx >> 3;  // idx / 8
    let bit = idx & 7;    // idx % 8
    byte < bytes.len() && (bytes[byte] >> bit) & 1 == 1
}

#[inline(always)]
pub fn set_bit(bytes: &mut [u8], idx: usize) {
    let byte = idx >> 3;
    let bit = idx & 7;
    if byte < bytes.len() {
        bytes[byte] |= 1u8 << bit;
    }
}

#[inline(always)]
pub fn clear_bit(bytes: &mut [u8], idx: usize) {
    let byte = idx >> 3;
    let bit = idx & 7;
    if byte < bytes.len() {
        bytes[byte] &= !(1u8 << bit);
    }
}

#[inline(always)]
pub fn put_bit(bytes: &mut [u8], idx: usize, on: bool) {
    if on {
        set_bit(bytes, idx);
    } else {
        clear_bit(bytes, idx);
    }
}

#[inline(always)]
pub fn flip_bit(bytes: &mut [u8], idx: usize) {
    let byte = idx >> 3;
    let bit = idx & 7;
    if byte < bytes.len() {
        bytes[byte] ^= 1u8 << bit;
    }
}

/// Mask of the meaningful bits in byte `byte_idx` of a buffer holding `bits` cells.
#[inline]
pub fn valid_mask(byte_idx: usize, bits: usize) -> u8 {
    let first = byte_idx << 3;
    if first >= bits {
        0
    } else if bits - first >= 8 {
        0xFF
    } else {
        (1u8 << (bits - first)) - 1
    }
}

/// Count set bits among the first `bits` positions; padding is ignored.
pub fn count_ones(bytes: &[u8], bits: usize) -> usize {
    bytes
        .iter()
        .enumerate()
        .map(|(i, &b)| (b & valid_mask(i, bits)).count_ones() as usize)
        .sum()
}
