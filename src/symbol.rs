//! Code sets, control symbols and the symbols emitted by the encoder.

use crate::classify::{in_code_a, in_code_b, is_digit};
use crate::pattern::Pattern;
use crate::tables;

/// One of the three Code 128 sub-alphabets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodeSet {
    /// Control characters, digits, uppercase letters and punctuation (0-95).
    A,
    /// Printable ASCII and DEL (32-127).
    B,
    /// Pairs of digits (00-99).
    C,
}

impl CodeSet {
    /// Code set used when leaving code C.
    pub const DEFAULT: CodeSet = CodeSet::B;

    /// Whether a single input byte can be emitted as a literal in this set.
    /// For code C this only says the byte may start a pair.
    #[inline]
    pub const fn contains(self, byte: u8) -> bool {
        match self {
            CodeSet::A => in_code_a(byte),
            CodeSet::B => in_code_b(byte),
            CodeSet::C => is_digit(byte),
        }
    }

    /// The other single-character set, used for shifts and A/B switches.
    #[inline]
    pub const fn alternate(self) -> CodeSet {
        match self {
            CodeSet::A => CodeSet::B,
            CodeSet::B | CodeSet::C => CodeSet::A,
        }
    }

    pub const fn start(self) -> Control {
        match self {
            CodeSet::A => Control::A(ControlA::Start),
            CodeSet::B => Control::B(ControlB::Start),
            CodeSet::C => Control::C(ControlC::Start),
        }
    }

    pub const fn stop(self) -> Control {
        match self {
            CodeSet::A => Control::A(ControlA::Stop),
            CodeSet::B => Control::B(ControlB::Stop),
            CodeSet::C => Control::C(ControlC::Stop),
        }
    }
}

/// Control symbols available while code A is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ControlA {
    Fnc3 = 96,
    Fnc2 = 97,
    ShiftB = 98,
    CodeC = 99,
    CodeB = 100,
    Fnc4 = 101,
    Fnc1 = 102,
    Start = 103,
    Stop = 106,
}

/// Control symbols available while code B is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ControlB {
    Fnc3 = 96,
    Fnc2 = 97,
    ShiftA = 98,
    CodeC = 99,
    Fnc4 = 100,
    CodeA = 101,
    Fnc1 = 102,
    Start = 104,
    Stop = 106,
}

/// Control symbols available while code C is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ControlC {
    CodeB = 100,
    CodeA = 101,
    Fnc1 = 102,
    Start = 105,
    Stop = 106,
}

/// A control symbol tagged with the code set it belongs to. The numeric
/// values of the three sets overlap, so they are only resolved at the pattern
/// lookup boundary by [Control::value].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    A(ControlA),
    B(ControlB),
    C(ControlC),
}

impl Control {
    /// Permanent switch from `from` to `to`. `None` when both are equal.
    pub const fn switch(from: CodeSet, to: CodeSet) -> Option<Control> {
        match (from, to) {
            (CodeSet::A, CodeSet::B) => Some(Control::A(ControlA::CodeB)),
            (CodeSet::A, CodeSet::C) => Some(Control::A(ControlA::CodeC)),
            (CodeSet::B, CodeSet::A) => Some(Control::B(ControlB::CodeA)),
            (CodeSet::B, CodeSet::C) => Some(Control::B(ControlB::CodeC)),
            (CodeSet::C, CodeSet::A) => Some(Control::C(ControlC::CodeA)),
            (CodeSet::C, CodeSet::B) => Some(Control::C(ControlC::CodeB)),
            _ => None,
        }
    }

    /// One character shift out of `from`. Code C has no shift.
    pub const fn shift(from: CodeSet) -> Option<Control> {
        match from {
            CodeSet::A => Some(Control::A(ControlA::ShiftB)),
            CodeSet::B => Some(Control::B(ControlB::ShiftA)),
            CodeSet::C => None,
        }
    }

    #[inline]
    pub const fn value(self) -> u8 {
        match self {
            Control::A(c) => c as u8,
            Control::B(c) => c as u8,
            Control::C(c) => c as u8,
        }
    }

    pub const fn code_set(self) -> CodeSet {
        match self {
            Control::A(_) => CodeSet::A,
            Control::B(_) => CodeSet::B,
            Control::C(_) => CodeSet::C,
        }
    }
}

/// One emitted symbol of a barcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Control(Control),
    /// A single byte under code A or B, holding its value in that set.
    Literal(CodeSet, u8),
    /// Two digits under code C, holding their numeric value (0-99).
    Pair(u8),
    Checksum(u8),
}

impl Symbol {
    /// Literal for `byte` under `set`, if the set can encode it on its own.
    pub const fn literal(set: CodeSet, byte: u8) -> Option<Symbol> {
        let value = match set {
            CodeSet::A => tables::a_value(byte),
            CodeSet::B => tables::b_value(byte),
            CodeSet::C => None,
        };
        match value {
            Some(v) => Some(Symbol::Literal(set, v)),
            None => None,
        }
    }

    /// Byte carried by a literal symbol.
    pub const fn byte(self) -> Option<u8> {
        match self {
            Symbol::Literal(CodeSet::A, v) => tables::a_char(v),
            Symbol::Literal(CodeSet::B, v) => tables::b_char(v),
            _ => None,
        }
    }

    /// Numeric value of this symbol, as used by the checksum.
    #[inline]
    pub const fn value(self) -> u8 {
        match self {
            Symbol::Control(c) => c.value(),
            Symbol::Literal(_, v) | Symbol::Pair(v) | Symbol::Checksum(v) => v,
        }
    }

    /// Bar pattern of this symbol. `None` for values the encoder never
    /// produces: a literal above 95, a pair above 99 or a checksum above 102.
    #[inline]
    pub const fn pattern(self) -> Option<Pattern> {
        match self {
            Symbol::Literal(_, v) if v > 95 => None,
            Symbol::Pair(v) if v > 99 => None,
            Symbol::Checksum(v) if v as usize >= tables::CODE_SIZE => None,
            _ => tables::pattern_of(self.value()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_values() {
        assert_eq!(Control::A(ControlA::Start).value(), 103);
        assert_eq!(Control::B(ControlB::Start).value(), 104);
        assert_eq!(Control::C(ControlC::Start).value(), 105);
        assert_eq!(Control::switch(CodeSet::B, CodeSet::C).map(Control::value), Some(99));
        assert_eq!(Control::switch(CodeSet::C, CodeSet::B).map(Control::value), Some(100));
        assert_eq!(Control::switch(CodeSet::A, CodeSet::B).map(Control::value), Some(100));
        assert_eq!(Control::switch(CodeSet::B, CodeSet::A).map(Control::value), Some(101));
        assert_eq!(Control::switch(CodeSet::C, CodeSet::C), None);
        assert_eq!(Control::shift(CodeSet::A).map(Control::value), Some(98));
        assert_eq!(Control::shift(CodeSet::C), None);
    }

    #[test]
    fn test_literal_values() {
        assert_eq!(Symbol::literal(CodeSet::B, b'a').map(Symbol::value), Some(65));
        assert_eq!(Symbol::literal(CodeSet::A, b'\n').map(Symbol::value), Some(74));
        assert_eq!(Symbol::literal(CodeSet::A, b'Z').map(Symbol::value), Some(58));
        assert_eq!(Symbol::literal(CodeSet::A, b'a'), None);
        assert_eq!(Symbol::literal(CodeSet::C, b'1'), None);
        assert_eq!(Symbol::literal(CodeSet::A, 0x1B).and_then(Symbol::byte), Some(0x1B));
        assert_eq!(Symbol::Pair(42).value(), 42);
    }

    #[test]
    fn test_stop_pattern_width() {
        let stop = Symbol::Control(Control::C(ControlC::Stop)).pattern();
        assert_eq!(stop.map(|p| p.width()), Some(13));
        assert_eq!(Symbol::Pair(0).pattern().map(|p| p.width()), Some(11));
    }

    #[test]
    fn test_out_of_range_has_no_pattern() {
        assert_eq!(Symbol::Pair(99).pattern(), tables::pattern_of(99));
        assert_eq!(Symbol::Pair(100).pattern(), None);
        assert_eq!(Symbol::Pair(200).pattern(), None);
        assert_eq!(Symbol::Checksum(102).pattern(), tables::pattern_of(102));
        assert_eq!(Symbol::Checksum(103).pattern(), None);
        assert_eq!(Symbol::Checksum(200).pattern(), None);
        assert_eq!(Symbol::Literal(CodeSet::B, 104).pattern(), None);
    }

    #[test]
    fn test_control_code_set() {
        assert_eq!(CodeSet::A.start().code_set(), CodeSet::A);
        assert_eq!(CodeSet::C.stop().code_set(), CodeSet::C);
        assert_eq!(Control::switch(CodeSet::B, CodeSet::C).map(Control::code_set), Some(CodeSet::B));
        assert_eq!(Control::shift(CodeSet::A).map(Control::code_set), Some(CodeSet::A));
    }
}
