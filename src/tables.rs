//! Static Code 128 tables and the pattern to value inverse built from them.

use std::sync::OnceLock;

use crate::pattern::Pattern;
use crate::error::AlreadyInitialized;

/// Number of symbol values sharing the data pattern table (0 to 102).
pub const CODE_SIZE: usize = 103;

/// Value of the stop symbol. It has no entry in [CODE_PATTERNS].
pub const STOP_VALUE: u8 = 106;

/// Value to pattern table for the 103 data symbols, indexed by value.
pub const CODE_PATTERNS: [u16; CODE_SIZE] = [
    0b11011001100, 0b11001101100, 0b11001100110, 0b10010011000, 0b10010001100, 0b10001001100,
    0b10011001000, 0b10011000100, 0b10001100100, 0b11001001000, 0b11001000100, 0b11000100100,
    0b10110011100, 0b10011011100, 0b10011001110, 0b10111001100, 0b10011101100, 0b10011100110,
    0b11001110010, 0b11001011100, 0b11001001110, 0b11011100100, 0b11001110100, 0b11101101110,
    0b11101001100, 0b11100101100, 0b11100100110, 0b11101100100, 0b11100110100, 0b11100110010,
    0b11011011000, 0b11011000110, 0b11000110110, 0b10100011000, 0b10001011000, 0b10001000110,
    0b10110001000, 0b10001101000, 0b10001100010, 0b11010001000, 0b11000101000, 0b11000100010,
    0b10110111000, 0b10110001110, 0b10001101110, 0b10111011000, 0b10111000110, 0b10001110110,
    0b11101110110, 0b11010001110, 0b11000101110, 0b11011101000, 0b11011100010, 0b11011101110,
    0b11101011000, 0b11101000110, 0b11100010110, 0b11101101000, 0b11101100010, 0b11100011010,
    0b11101111010, 0b11001000010, 0b11110001010, 0b10100110000, 0b10100001100, 0b10010110000,
    0b10010000110, 0b10000101100, 0b10000100110, 0b10110010000, 0b10110000100, 0b10011010000,
    0b10011000010, 0b10000110100, 0b10000110010, 0b11000010010, 0b11001010000, 0b11110111010,
    0b11000010100, 0b10001111010, 0b10100111100, 0b10010111100, 0b10010011110, 0b10111100100,
    0b10011110100, 0b10011110010, 0b11110100100, 0b11110010100, 0b11110010010, 0b11011011110,
    0b11011110110, 0b11110110110, 0b10101111000, 0b10100011110, 0b10001011110, 0b10111101000,
    0b10111100010, 0b11110101000, 0b11110100010, 0b10111011110, 0b10111101110, 0b11101011110,
    0b11110101110,
];

pub const START_A: u16 = 0b11010000100;
pub const START_B: u16 = 0b11010010000;
pub const START_C: u16 = 0b11010011100;
/// Stop pattern including its final termination bar (13 modules).
pub const STOP: u16 = 0b1100011101011;

/// Start symbols in value order (103, 104, 105).
const START_PATTERNS: [u16; 3] = [START_A, START_B, START_C];

const INVERSE_SIZE: usize = 1 << 9;

type Inverse = [Option<u8>; INVERSE_SIZE];

static INVERSE: OnceLock<Inverse> = OnceLock::new();

fn build_inverse() -> Inverse {
    let mut inverse = [None; INVERSE_SIZE];
    let starts = START_PATTERNS.iter().zip((CODE_SIZE as u8)..);
    for (&bits, value) in CODE_PATTERNS.iter().zip(0u8..).chain(starts) {
        let inner = Pattern::data(bits).inner() as usize;
        debug_assert!(inverse[inner].is_none(), "duplicate pattern {bits:#b}");
        inverse[inner] = Some(value);
    }
    log::debug!("built code 128 inverse pattern table ({} entries)", CODE_SIZE + START_PATTERNS.len());
    inverse
}

fn inverse() -> &'static Inverse {
    INVERSE.get_or_init(build_inverse)
}

/// Builds the pattern to value table. The table is also built lazily on first
/// use, so calling this is optional; a second call reports
/// [AlreadyInitialized] and leaves the existing table as is.
pub fn initialize() -> Result<(), AlreadyInitialized> {
    let mut built = false;
    INVERSE.get_or_init(|| {
        built = true;
        build_inverse()
    });

    if built { Ok(()) } else { Err(AlreadyInitialized) }
}

/// Pattern of a data, start or checksum value (0 to 105).
pub const fn pattern_of(value: u8) -> Option<Pattern> {
    match value as usize {
        v if v < CODE_SIZE => Some(Pattern::data(CODE_PATTERNS[v])),
        v if v < CODE_SIZE + 3 => Some(Pattern::data(START_PATTERNS[v - CODE_SIZE])),
        _ if value == STOP_VALUE => Some(stop_pattern()),
        _ => None,
    }
}

#[inline]
pub const fn stop_pattern() -> Pattern {
    Pattern::new(STOP, crate::STOP_WIDTH as u8)
}

/// Value a pattern stands for, or `None` if it is not a Code 128 pattern.
pub fn value_of(pattern: Pattern) -> Option<u8> {
    if pattern == stop_pattern() {
        return Some(STOP_VALUE);
    }
    if pattern.width() as usize != crate::DATA_WIDTH || pattern.bits() & 0b100_0000_0001 != 0b100_0000_0000 {
        return None;
    }
    inverse()[pattern.inner() as usize]
}

/// Code A value of an input byte: 32-95 map to 0-63, control bytes 0-31 map
/// to 64-95.
#[inline]
pub const fn a_value(byte: u8) -> Option<u8> {
    match byte {
        0..=31 => Some(byte + 64),
        32..=95 => Some(byte - 32),
        _ => None,
    }
}

/// Byte encoded by a code A literal value.
#[inline]
pub const fn a_char(value: u8) -> Option<u8> {
    match value {
        0..=63 => Some(value + 32),
        64..=95 => Some(value - 64),
        _ => None,
    }
}

#[inline]
pub const fn b_value(byte: u8) -> Option<u8> {
    match byte {
        32..=127 => Some(byte - 32),
        _ => None,
    }
}

#[inline]
pub const fn b_char(value: u8) -> Option<u8> {
    match value {
        0..=95 => Some(value + 32),
        _ => None,
    }
}
