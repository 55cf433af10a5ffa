//! Input bytes to Code 128 symbols: code set selection, switches, shifts and
//! the final checksum.

use crate::barcode::Barcode;
use crate::checksum::checksum;
use crate::classify::{
    digit_run_qualifies, full_run_is_digits_even_length, in_code_a, in_code_b, is_digit,
    switch_to_c_at, C_MIN_DIGITS_END,
};
use crate::error::EncodeError;
use crate::symbol::{CodeSet, Control, Symbol};
use crate::{MAX_DATA_LEN, MAX_PATTERNS};

/// Value of a code C symbol made of two digits.
pub fn digit_pair(d0: u8, d1: u8) -> Result<u8, EncodeError> {
    if is_digit(d0) && is_digit(d1) {
        Ok((d0 - b'0') * 10 + (d1 - b'0'))
    } else {
        Err(EncodeError::ArgumentInvalid(d0, d1))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Latched(CodeSet),
    /// The next byte is emitted under `shifted`, then `latched` is restored.
    Shifted { latched: CodeSet, shifted: CodeSet },
}

impl Mode {
    const fn latched(self) -> CodeSet {
        match self {
            Mode::Latched(set) | Mode::Shifted { latched: set, .. } => set,
        }
    }
}

#[derive(Debug)]
struct Encoder<'a> {
    data: &'a [u8],
    /// Next byte to encode. Only advanced when a literal or pair is emitted.
    pos: usize,
    mode: Mode,
    symbols: Vec<Symbol>,
}

impl<'a> Encoder<'a> {
    /// Picks the start symbol and encodes the bytes it covers.
    fn start(data: &'a [u8]) -> Result<Self, EncodeError> {
        let first = data[0];
        let mut enc = Self {
            data,
            pos: 0,
            mode: Mode::Latched(CodeSet::C),
            symbols: Vec::with_capacity(MAX_PATTERNS),
        };

        if full_run_is_digits_even_length(data) {
            enc.symbols.push(Symbol::Control(CodeSet::C.start()));
            enc.push_pairs(data.len())?;
        } else if digit_run_qualifies(data, 0, C_MIN_DIGITS_END) {
            enc.symbols.push(Symbol::Control(CodeSet::C.start()));
            enc.push_pairs(C_MIN_DIGITS_END)?;
        } else {
            let set = if in_code_b(first) {
                CodeSet::B
            } else if in_code_a(first) {
                CodeSet::A
            } else {
                return Err(EncodeError::CharacterInvalid { byte: first, position: 0 });
            };
            enc.mode = Mode::Latched(set);
            enc.symbols.push(Symbol::Control(set.start()));
            enc.push_literal(set, first)?;
        }

        log::trace!("start in code {:?}, {} byte(s) consumed", enc.mode.latched(), enc.pos);
        Ok(enc)
    }

    fn push_pairs(&mut self, len: usize) -> Result<(), EncodeError> {
        for pair in self.data[self.pos..self.pos + len].chunks_exact(2) {
            self.symbols.push(Symbol::Pair(digit_pair(pair[0], pair[1])?));
        }
        self.pos += len;
        Ok(())
    }

    fn push_literal(&mut self, set: CodeSet, byte: u8) -> Result<(), EncodeError> {
        let symbol = Symbol::literal(set, byte)
            .ok_or(EncodeError::CharacterInvalid { byte, position: self.pos })?;
        self.symbols.push(symbol);
        self.pos += 1;
        Ok(())
    }

    fn switch(&mut self, from: CodeSet, to: CodeSet) {
        let Some(control) = Control::switch(from, to) else {
            unreachable!("switch from code {from:?} to itself");
        };
        log::trace!("switch code {from:?} -> {to:?} at byte {}", self.pos);
        self.symbols.push(Symbol::Control(control));
        self.mode = Mode::Latched(to);
    }

    fn shift(&mut self, from: CodeSet) {
        let Some(control) = Control::shift(from) else {
            unreachable!("code {from:?} has no shift");
        };
        let shifted = from.alternate();
        log::trace!("shift code {from:?} -> {shifted:?} for byte {}", self.pos);
        self.symbols.push(Symbol::Control(control));
        self.mode = Mode::Shifted { latched: from, shifted };
    }

    /// Emits exactly one symbol. Switches and shifts leave `pos` untouched so
    /// the same byte is looked at again under the new mode, where it is
    /// always emitted as a literal or pair.
    fn step(&mut self) -> Result<(), EncodeError> {
        let byte = self.data[self.pos];
        let next = self.data.get(self.pos + 1).copied();

        if !in_code_a(byte) && !in_code_b(byte) {
            return Err(EncodeError::CharacterInvalid { byte, position: self.pos });
        }

        let set = match self.mode {
            Mode::Shifted { latched, shifted } => {
                self.push_literal(shifted, byte)?;
                self.mode = Mode::Latched(latched);
                return Ok(());
            }
            Mode::Latched(set) => set,
        };

        match set {
            CodeSet::C => match next {
                Some(next) if is_digit(byte) && is_digit(next) => {
                    self.symbols.push(Symbol::Pair(digit_pair(byte, next)?));
                    self.pos += 2;
                }
                _ => self.switch(CodeSet::C, CodeSet::DEFAULT),
            },
            _ if is_digit(byte) && switch_to_c_at(self.data, self.pos) => {
                self.switch(set, CodeSet::C);
            }
            _ if !set.contains(byte) => {
                let other = set.alternate();
                if next.is_some_and(|n| other.contains(n)) {
                    self.switch(set, other);
                } else {
                    self.shift(set);
                }
            }
            _ => self.push_literal(set, byte)?,
        }

        Ok(())
    }

    /// Appends the checksum and stop symbols.
    fn finish(mut self) -> Vec<Symbol> {
        let values: Vec<u8> = self.symbols.iter().map(|s| s.value()).collect();
        let check = checksum(&values);
        self.symbols.push(Symbol::Checksum(check));
        self.symbols.push(Symbol::Control(self.mode.latched().stop()));

        debug_assert!(self.symbols.len() <= MAX_PATTERNS, "{} symbols", self.symbols.len());
        self.symbols
    }
}

fn check_length(data: &[u8]) -> Result<(), EncodeError> {
    if data.is_empty() || data.len() > MAX_DATA_LEN {
        return Err(EncodeError::DataLengthExceeded { len: data.len() });
    }
    Ok(())
}

/// Full symbol sequence for `data`, from the start symbol to the stop symbol.
pub fn symbols(data: &[u8]) -> Result<Vec<Symbol>, EncodeError> {
    check_length(data)?;

    let mut enc = Encoder::start(data)?;
    while enc.pos < data.len() {
        enc.step()?;
    }
    Ok(enc.finish())
}

/// Number of patterns [encode] produces for `data`.
pub fn encoded_len(data: &[u8]) -> Result<usize, EncodeError> {
    symbols(data).map(|s| s.len())
}

/// Encodes up to [MAX_DATA_LEN] ASCII bytes into a Code 128 barcode.
pub fn encode(data: &[u8]) -> Result<Barcode, EncodeError> {
    let symbols = symbols(data)?;
    log::debug!("encoded {} byte(s) into {} symbols", data.len(), symbols.len());
    let mut patterns = Vec::with_capacity(symbols.len());
    for symbol in &symbols {
        let Some(pattern) = symbol.pattern() else {
            unreachable!("symbol {symbol:?} has no pattern");
        };
        patterns.push(pattern);
    }
    Ok(Barcode::new(patterns, data.to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(data: &[u8]) -> Vec<u8> {
        symbols(data).unwrap().iter().map(|s| s.value()).collect()
    }

    /// Values with checksum and stop stripped, after checking both.
    fn body(data: &[u8]) -> Vec<u8> {
        let mut v = values(data);
        assert_eq!(v.pop(), Some(106));
        let check = v.pop().unwrap();
        assert_eq!(check, checksum(&v));
        v
    }

    #[test]
    fn test_digit_pair() {
        assert_eq!(digit_pair(b'0', b'7'), Ok(7));
        assert_eq!(digit_pair(b'9', b'9'), Ok(99));
        assert_eq!(digit_pair(b'1', b'x'), Err(EncodeError::ArgumentInvalid(b'1', b'x')));
    }

    #[test]
    fn test_encode_full_code_c() {
        assert_eq!(values(b"12345678"), &[105, 12, 34, 56, 78, 47, 106]);
    }

    #[test]
    fn test_encode_three_digits_stay_in_b() {
        assert_eq!(body(b"abc123HELLO"), &[104, 65, 66, 67, 17, 18, 19, 40, 37, 44, 44, 47]);
        assert_eq!(encoded_len(b"abc123HELLO"), Ok(14));
    }

    #[test]
    fn test_encode_control_starts_in_a() {
        assert_eq!(body(b"\x01ABC"), &[103, 65, 33, 34, 35]);
    }

    #[test]
    fn test_encode_leading_digits_then_text() {
        assert_eq!(body(b"1234AB"), &[105, 12, 34, 100, 33, 34]);
    }

    #[test]
    fn test_encode_odd_digits() {
        assert_eq!(body(b"12345"), &[105, 12, 34, 100, 21]);
        assert_eq!(body(b"123"), &[104, 17, 18, 19]);
    }

    #[test]
    fn test_encode_trailing_digits() {
        assert_eq!(body(b"AB1234"), &[104, 33, 34, 99, 12, 34]);
        // the odd leading digit stays in B
        assert_eq!(body(b"a12345"), &[104, 65, 17, 99, 23, 45]);
    }

    #[test]
    fn test_encode_middle_digits() {
        assert_eq!(body(b"ab123456cd"), &[104, 65, 66, 99, 12, 34, 56, 100, 67, 68]);
        // four digits in the middle are not worth a switch
        assert_eq!(body(b"ab1234cd"), &[104, 65, 66, 17, 18, 19, 20, 67, 68]);
    }

    #[test]
    fn test_encode_shift() {
        assert_eq!(body(b"a\x01b"), &[104, 65, 98, 65, 66]);
        assert_eq!(body(b"ab\x01"), &[104, 65, 66, 98, 65]);
        assert_eq!(body(b"\x01a\x02"), &[103, 65, 98, 65, 66]);
    }

    #[test]
    fn test_encode_switch() {
        assert_eq!(body(b"a\x01\x02"), &[104, 65, 101, 65, 66]);
        assert_eq!(body(b"\x01ab"), &[103, 65, 100, 65, 66]);
    }

    #[test]
    fn test_encode_leave_c_for_control() {
        // C -> B, then B shifts to A for the single control byte
        assert_eq!(body(b"1234\x01a"), &[105, 12, 34, 100, 98, 65, 65]);
    }

    #[test]
    fn test_encode_single_byte() {
        assert_eq!(body(b"A"), &[104, 33]);
        assert_eq!(body(b"\n"), &[103, 74]);
        assert_eq!(body(b"7"), &[104, 23]);
    }

    #[test]
    fn test_encode_length_limits() {
        assert_eq!(symbols(b"").unwrap_err(), EncodeError::DataLengthExceeded { len: 0 });
        let long = [b'x'; MAX_DATA_LEN + 1];
        assert_eq!(encode(&long).unwrap_err(), EncodeError::DataLengthExceeded { len: 21 });
        assert!(encode(&long[..MAX_DATA_LEN]).is_ok());
    }

    #[test]
    fn test_encode_non_ascii() {
        assert_eq!(encode(b"ab\xC3").unwrap_err(), EncodeError::CharacterInvalid { byte: 0xC3, position: 2 });
        assert_eq!(encode(b"\x80").unwrap_err(), EncodeError::CharacterInvalid { byte: 0x80, position: 0 });
    }

    #[test]
    fn test_encode_fits_pattern_buffer() {
        let inputs: [&[u8]; 4] = [
            b"a\x01a\x01a\x01a\x01a\x01a\x01a\x01a\x01a\x01a\x01",
            b"\x01a\x01a\x01a\x01a\x01a\x01a\x01a\x01a\x01a\x01a",
            b"1234\x011234\x01123456\x01a\x01",
            b"a\x01b\x02c\x03d\x04e\x05f\x06g\x07h\x08i\x09j",
        ];
        for data in inputs {
            let len = encoded_len(data).unwrap();
            assert!(len <= MAX_PATTERNS, "{len} patterns for {data:?}");
        }
    }

    #[test]
    fn test_encode_is_deterministic() {
        let a = encode(b"Hello 2024!").unwrap();
        let b = encode(b"Hello 2024!").unwrap();
        assert_eq!(a, b);
    }
}
