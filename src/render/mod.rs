//! Rendering of an encoded [Barcode] to bits, SVG and PostScript.

pub mod layout;
pub mod postscript;
pub mod svg;

#[cfg(feature = "embedded-graphics")]
mod graphics;

use crate::barcode::Barcode;
use crate::QUIET_WIDTH;

/// Total height of the default rendering, label included.
pub const DEFAULT_HEIGHT: u16 = 100;
pub const DEFAULT_FONT_SIZE: u16 = 20;
pub const DEFAULT_BAR_HEIGHT: u16 = DEFAULT_HEIGHT - DEFAULT_FONT_SIZE;

/// Rendering configuration shared by every output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    module_width: u16,
    bar_height: u16,
    font_size: u16,
    quiet_zone: u16,
    show_text: bool,
    inverted: bool,
    invert_from: Option<usize>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderOptions {
    pub const fn new() -> Self {
        Self {
            module_width: 1,
            bar_height: DEFAULT_BAR_HEIGHT,
            font_size: DEFAULT_FONT_SIZE,
            quiet_zone: QUIET_WIDTH as u16,
            show_text: true,
            inverted: false,
            invert_from: None,
        }
    }

    /// Width of a single module in output units (pixels or points).
    pub const fn module_width(&self) -> u16 {
        self.module_width
    }

    pub const fn set_module_width(mut self, width: u16) -> Self {
        assert!(width > 0, "module width must be at least 1");
        self.module_width = width;
        self
    }

    pub const fn bar_height(&self) -> u16 {
        self.bar_height
    }

    pub const fn set_bar_height(mut self, height: u16) -> Self {
        self.bar_height = height;
        self
    }

    pub const fn font_size(&self) -> u16 {
        self.font_size
    }

    pub const fn set_font_size(mut self, size: u16) -> Self {
        self.font_size = size;
        self
    }

    /// Blank margin on each side, in modules.
    pub const fn quiet_zone(&self) -> u16 {
        self.quiet_zone
    }

    pub const fn set_quiet_zone(mut self, modules: u16) -> Self {
        self.quiet_zone = modules;
        self
    }

    /// Whether the encoded text is printed under the bars.
    pub const fn show_text(&self) -> bool {
        self.show_text
    }

    pub const fn set_show_text(mut self, show: bool) -> Self {
        self.show_text = show;
        self
    }

    /// Returns if every module is rendered with its color inverted.
    pub const fn inverted(&self) -> bool {
        self.inverted
    }

    pub const fn set_inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    /// Index of the first pattern rendered with inverted bit sense.
    pub const fn invert_from(&self) -> Option<usize> {
        self.invert_from
    }

    pub const fn set_invert_from(mut self, index: Option<usize>) -> Self {
        self.invert_from = index;
        self
    }

    /// Height of the label area, zero when the text is hidden.
    pub const fn text_height(&self) -> u16 {
        if self.show_text { self.font_size } else { 0 }
    }

    pub const fn total_height(&self) -> u32 {
        self.bar_height as u32 + self.text_height() as u32
    }

    #[inline]
    const fn flips(&self, pattern: usize) -> bool {
        let partial = match self.invert_from {
            Some(n) => pattern >= n,
            None => false,
        };
        self.inverted ^ partial
    }
}

/// A barcode paired with its [RenderOptions].
#[derive(Debug, Clone)]
pub struct Render<'a> {
    barcode: &'a Barcode,
    options: RenderOptions,
}

impl<'a> Render<'a> {
    pub const fn new(barcode: &'a Barcode, options: RenderOptions) -> Self {
        Self { barcode, options }
    }

    pub const fn barcode(&self) -> &'a Barcode {
        self.barcode
    }

    pub const fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Width of the bars in output units, quiet zones excluded.
    pub fn width(&self) -> u32 {
        self.barcode.width() as u32 * self.options.module_width as u32
    }

    /// Height of the bars in output units.
    pub const fn height(&self) -> u32 {
        self.options.bar_height as u32
    }

    /// Width including both quiet zones, in output units.
    pub fn full_width(&self) -> u32 {
        self.width() + 2 * self.options.quiet_zone as u32 * self.options.module_width as u32
    }

    /// Modules left to right with inversion applied, one item per module.
    pub fn modules(&self) -> impl Iterator<Item = bool> + 'a {
        let options = self.options;
        self.barcode.data().iter()
            .enumerate()
            .flat_map(move |(i, p)| {
                let p = if options.flips(i) { p.inverted() } else { *p };
                p.into_iter()
            })
    }

    /// A single row of pixels, each module repeated `module_width` times.
    pub fn bits(&self) -> impl Iterator<Item = bool> + 'a {
        let sx = self.options.module_width as usize;
        self.modules()
            .flat_map(move |bit| core::iter::repeat(bit).take(sx))
    }

    /// Runs of bars as `(first module, module count)`.
    pub fn bars(&self) -> Vec<(usize, usize)> {
        let mut bars = Vec::new();
        let mut start = None;
        let mut end = 0;
        for (x, bit) in self.modules().enumerate() {
            match (bit, start) {
                (true, None) => start = Some(x),
                (false, Some(s)) => {
                    bars.push((s, x - s));
                    start = None;
                }
                _ => (),
            }
            end = x + 1;
        }
        if let Some(s) = start {
            bars.push((s, end - s));
        }
        bars
    }

    /// Fills `target`, row after row, with `height()` rows of `width()`
    /// pixels.
    pub fn fill<P: Clone>(&self, target: &mut [P], on: &P, off: &P) {
        let row: Vec<bool> = self.bits().collect();
        for (i, slot) in target.iter_mut().take(row.len() * self.height() as usize).enumerate() {
            *slot = if row[i % row.len()] { on.clone() } else { off.clone() };
        }
    }

    pub fn fill_bits(&self, target: &mut [bool]) {
        self.fill(target, &true, &false);
    }

    /// Packs rows MSB first, eight pixels per byte. Every row starts on a
    /// new byte.
    pub fn fill_bitmap(&self, target: &mut [u8]) {
        let row: Vec<bool> = self.bits().collect();
        let stride = row.len().div_ceil(8);
        for y in 0..self.height() as usize {
            let line = &mut target[y * stride..(y + 1) * stride];
            line.fill(0);
            for (x, &bit) in row.iter().enumerate() {
                line[x / 8] |= (bit as u8) << (7 - x % 8);
            }
        }
    }
}
