use crate::pattern::Pattern;
use crate::render::{Render, RenderOptions};
use crate::{tables, text};

/// An encoded Code 128 barcode: the pattern of every symbol from start to
/// stop, and the bytes it was built from.
///
/// `data()[0]` is a start pattern, the last pattern is the stop pattern and
/// the one before it is the checksum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Barcode {
    data: Vec<Pattern>,
    text: Vec<u8>,
}

impl Barcode {
    pub(crate) fn new(data: Vec<Pattern>, text: Vec<u8>) -> Self {
        debug_assert!(data.len() >= 3, "start, checksum and stop are mandatory");
        Self { data, text }
    }

    #[inline]
    pub fn data(&self) -> &[Pattern] {
        &self.data
    }

    /// Number of patterns, start and stop included.
    #[inline]
    pub fn data_len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn text(&self) -> &[u8] {
        &self.text
    }

    #[inline]
    pub fn text_len(&self) -> usize {
        self.text.len()
    }

    /// Total width in modules, quiet zones excluded.
    pub fn width(&self) -> usize {
        self.data.iter().map(|p| p.width() as usize).sum()
    }

    /// Symbol values recovered from the patterns, start and stop included.
    pub fn values(&self) -> impl Iterator<Item = u8> + '_ {
        // every pattern comes from the tables, so the lookup cannot miss
        self.data.iter().filter_map(|&p| tables::value_of(p))
    }

    /// Value of the checksum symbol.
    pub fn checksum(&self) -> Option<u8> {
        let idx = self.data.len().checked_sub(2)?;
        tables::value_of(self.data[idx])
    }

    /// All modules left to right, `true` being a bar.
    pub fn modules(&self) -> impl Iterator<Item = bool> + '_ {
        self.data.iter().flat_map(|p| p.modules())
    }

    /// Human readable form of the encoded text, control bytes escaped.
    pub fn label(&self) -> String {
        text::escape(&self.text)
    }

    pub fn render(&self, options: RenderOptions) -> Render<'_> {
        Render::new(self, options)
    }
}
