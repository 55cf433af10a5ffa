use core::iter;

use crate::{DATA_WIDTH, STOP_WIDTH};

/// Bar/space encoding of a single symbol, most significant bit first. A set
/// bit is a bar (black module), a cleared bit is a space (white module).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern {
    bits: u16,
    width: u8,
}

impl Pattern {
    pub const fn new(bits: u16, width: u8) -> Self {
        debug_assert!(width as usize == DATA_WIDTH || width as usize == STOP_WIDTH,
            "code 128 patterns are 11 or 13 modules wide");

        Self { bits, width }
    }

    /// Pattern of an 11 module wide data, start or checksum symbol.
    #[inline]
    pub const fn data(bits: u16) -> Self {
        Self::new(bits, DATA_WIDTH as u8)
    }

    #[inline]
    pub const fn bits(&self) -> u16 {
        self.bits
    }

    /// Number of modules covered by this pattern (11, or 13 for stop).
    #[inline]
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// The 9 inner modules of a data pattern. Every data pattern starts with
    /// a bar and ends with a space, so these two modules carry no information
    /// and are dropped here.
    #[inline]
    pub const fn inner(&self) -> u16 {
        (self.bits >> 1) & 0x1FF
    }

    /// Same pattern with every module flipped.
    #[inline]
    pub const fn inverted(&self) -> Self {
        let mask = (1u16 << self.width) - 1;
        Self { bits: !self.bits & mask, width: self.width }
    }

    pub fn modules(&self) -> Modules {
        self.into_iter()
    }
}

impl iter::IntoIterator for Pattern {
    type Item = bool;
    type IntoIter = Modules;

    fn into_iter(self) -> Self::IntoIter {
        Modules { bits: self.bits, low: 0, high: self.width }
    }
}

/// Iterator over the modules of a [Pattern], left to right.
///
/// Bit positions `low..high` are still to be yielded; the leftmost module is
/// the highest position.
#[derive(Debug, Clone)]
pub struct Modules {
    bits: u16,
    low: u8,
    high: u8,
}

impl Modules {
    #[inline]
    const fn module(&self, position: u8) -> bool {
        (self.bits >> position) & 1 != 0
    }

    #[inline]
    const fn remaining(&self) -> usize {
        (self.high - self.low) as usize
    }
}

impl iter::Iterator for Modules {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        (self.low < self.high).then(|| {
            self.high -= 1;
            self.module(self.high)
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining(), Some(self.remaining()))
    }
}

impl iter::DoubleEndedIterator for Modules {
    fn next_back(&mut self) -> Option<Self::Item> {
        (self.low < self.high).then(|| {
            self.low += 1;
            self.module(self.low - 1)
        })
    }
}

impl iter::ExactSizeIterator for Modules {}
impl iter::FusedIterator for Modules {}
