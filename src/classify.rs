//! Byte classification deciding which code set applies at a given position.

/// Minimum digit run worth a switch to code C when it ends the input (or
/// starts it).
pub const C_MIN_DIGITS_END: usize = 4;
/// Minimum digit run worth a switch to code C in the middle of the input.
pub const C_MIN_DIGITS_MID: usize = 6;

/// Input bytes encodable as code A literals: ASCII 0-95.
#[inline]
pub const fn in_code_a(byte: u8) -> bool {
    byte <= 95
}

/// Input bytes encodable as code B literals: ASCII 32-127.
#[inline]
pub const fn in_code_b(byte: u8) -> bool {
    matches!(byte, 32..=127)
}

#[inline]
pub const fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

/// True when the whole input can be encoded as code C pairs.
pub fn full_run_is_digits_even_length(data: &[u8]) -> bool {
    data.len() > 1 && data.len() % 2 == 0 && data.iter().copied().all(is_digit)
}

/// True when `data[start..start + len]` exists, has an even length and only
/// holds digits.
pub fn digit_run_qualifies(data: &[u8], start: usize, len: usize) -> bool {
    len % 2 == 0 && data
        .get(start..start + len)
        .is_some_and(|run| run.iter().copied().all(is_digit))
}

/// Whether encoding should switch to code C at `pos`: either the rest of the
/// input is an even run of at least [C_MIN_DIGITS_END] digits, or at least
/// [C_MIN_DIGITS_MID] digits follow.
pub fn switch_to_c_at(data: &[u8], pos: usize) -> bool {
    let remaining = data.len().saturating_sub(pos);
    (remaining >= C_MIN_DIGITS_END && digit_run_qualifies(data, pos, remaining))
        || (remaining >= C_MIN_DIGITS_MID && digit_run_qualifies(data, pos, C_MIN_DIGITS_MID))
}
