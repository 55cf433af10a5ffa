//! SVG output.

use crate::barcode::Barcode;
use crate::render::{Render, RenderOptions};

pub const SVG_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

/// Renders `barcode` as a standalone SVG document: one `rect` per bar, the
/// quiet zone on both sides and, if enabled, the text under the bars.
pub fn to_svg(barcode: &Barcode, options: &RenderOptions) -> String {
    let render = Render::new(barcode, *options);
    let mw = options.module_width() as usize;
    let offset = options.quiet_zone() as usize * mw;
    let width = render.full_width();
    let height = options.total_height();
    let bars = render.bars();

    let mut out = String::with_capacity(256 + bars.len() * 64);
    out.push_str(SVG_HEADER);
    out.push('\n');
    out.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    ));
    out.push('\n');
    out.push_str(r#"<rect x="0" y="0" width="100%" height="100%" fill="white"/>"#);
    out.push('\n');

    for (start, len) in bars {
        out.push_str(&format!(
            r#"<rect x="{}" y="0" width="{}" height="{}" fill="black"/>"#,
            offset + start * mw,
            len * mw,
            options.bar_height(),
        ));
        out.push('\n');
    }

    if options.show_text() {
        out.push_str(&format!(
            r#"<text x="{}" y="{}" font-family="monospace" font-size="{}" text-anchor="middle">{}</text>"#,
            width / 2,
            height - options.font_size() as u32 / 5,
            options.font_size(),
            escape_xml(&barcode.label()),
        ));
        out.push('\n');
    }

    out.push_str("</svg>\n");
    log::trace!("rendered {} byte(s) of text to {} bytes of SVG", barcode.text_len(), out.len());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode;

    #[test]
    fn test_svg_document() {
        let code = encode(b"AB").unwrap();
        let svg = to_svg(&code, &RenderOptions::new());
        assert!(svg.starts_with(SVG_HEADER));
        // four 11 module patterns, the 13 module stop and two quiet zones
        assert!(svg.contains(r#"width="77" height="100""#));
        // start B opens with a double bar right after the quiet zone
        assert!(svg.contains(r#"<rect x="10" y="0" width="2" height="80" fill="black"/>"#));
        assert!(svg.contains(">AB</text>"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_svg_bar_count() {
        let code = encode(b"12345678").unwrap();
        let svg = to_svg(&code, &RenderOptions::new().set_show_text(false));
        // three bars per symbol, four for stop
        assert_eq!(svg.matches(r#"fill="black""#).count(), 6 * 3 + 4);
        assert!(!svg.contains("<text"));
        assert!(svg.contains(r#"height="80""#));
    }

    #[test]
    fn test_svg_escapes_label() {
        let code = encode(b"a<b&\x01").unwrap();
        let svg = to_svg(&code, &RenderOptions::new().set_module_width(3));
        assert!(svg.contains(">a&lt;b&amp;^A</text>"));
    }
}
