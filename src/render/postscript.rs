//! PostScript output, for a single barcode or a grid of barcodes on pages.

use crate::barcode::Barcode;
use crate::encoder::encode;
use crate::error::RenderError;
use crate::render::layout::{Layout, PAGE_HEIGHT, PAGE_WIDTH};
use crate::render::{Render, RenderOptions};

pub const PS_FONT: &str = "Courier";

fn escape_ps(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '(' | ')' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Drawing commands for one barcode with its bottom-left corner (quiet zone
/// included) at `(x, y)` and modules `mw` points wide.
fn draw(out: &mut String, barcode: &Barcode, options: &RenderOptions, x: f64, y: f64, mw: f64) {
    let render = Render::new(barcode, *options);
    let text_height = options.text_height() as f64;
    let left = x + options.quiet_zone() as f64 * mw;

    out.push_str("0 setgray\n");
    for (start, len) in render.bars() {
        out.push_str(&format!(
            "{:.2} {:.2} {:.2} {} rectfill\n",
            left + start as f64 * mw,
            y + text_height,
            len as f64 * mw,
            options.bar_height(),
        ));
    }

    if options.show_text() {
        let center = left + barcode.width() as f64 * mw / 2.0;
        out.push_str(&format!(
            "/{PS_FONT} findfont {} scalefont setfont\n({}) dup stringwidth pop 2 div {:.2} exch sub {:.2} moveto show\n",
            options.font_size(),
            escape_ps(&barcode.label()),
            center,
            y + text_height / 4.0,
        ));
    }
}

/// Renders `barcode` as an encapsulated PostScript document sized to the
/// barcode, one point per output unit.
pub fn to_postscript(barcode: &Barcode, options: &RenderOptions) -> String {
    let render = Render::new(barcode, *options);
    let width = render.full_width();
    let height = options.total_height();

    let mut out = String::with_capacity(512);
    out.push_str("%!PS-Adobe-3.0 EPSF-3.0\n");
    out.push_str(&format!("%%BoundingBox: 0 0 {width} {height}\n"));
    out.push_str("%%Pages: 1\n%%EndComments\n");
    draw(&mut out, barcode, options, 0.0, 0.0, options.module_width() as f64);
    out.push_str("showpage\n%%EOF\n");

    log::trace!("rendered {} byte(s) of text to {} bytes of PostScript", barcode.text_len(), out.len());
    out
}

/// Places `barcodes` row by row on A4 pages following `layout`. Modules are
/// narrowed and bars shortened when needed so each barcode fits its cell.
pub fn layout(barcodes: &[Barcode], options: &RenderOptions, layout: &Layout) -> String {
    let pages = layout.pages(barcodes.len());
    let (cell_w, cell_h) = layout.cell_size();

    let mut out = String::with_capacity(1024 * barcodes.len().max(1));
    out.push_str("%!PS-Adobe-3.0\n");
    out.push_str(&format!("%%BoundingBox: 0 0 {} {}\n", PAGE_WIDTH as u32, PAGE_HEIGHT as u32));
    out.push_str(&format!("%%Pages: {pages}\n%%EndComments\n"));

    let mut page = 0;
    out.push_str("%%Page: 1 1\n");
    for (i, barcode) in barcodes.iter().enumerate() {
        let cell = layout.cell(i);
        if cell.page != page {
            page = cell.page;
            out.push_str(&format!("showpage\n%%Page: {n} {n}\n", n = page + 1));
        }

        let modules = barcode.width() + 2 * options.quiet_zone() as usize;
        let mw = (options.module_width() as f64).min(cell_w / modules as f64);
        let bar_height = (options.bar_height() as f64)
            .min(cell_h - options.text_height() as f64)
            .max(0.0) as u16;
        let fitted = options.set_bar_height(bar_height);

        let (x, y) = layout.origin(cell);
        draw(&mut out, barcode, &fitted, x, y, mw);
    }
    out.push_str("showpage\n%%EOF\n");

    log::debug!("laid out {} barcode(s) on {} page(s) of {}x{}", barcodes.len(), pages, layout.rows(), layout.cols());
    out
}

/// Encodes every entry of `texts` and lays the results out with [layout].
pub fn layout_texts<T: AsRef<[u8]>>(texts: &[T], options: &RenderOptions, grid: &Layout) -> Result<String, RenderError> {
    let barcodes = texts.iter()
        .map(|t| encode(t.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(layout(&barcodes, options, grid))
}
