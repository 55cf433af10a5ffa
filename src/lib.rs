//! Code 128 barcode encoder.
//!
//! [encode] turns up to [MAX_DATA_LEN] ASCII bytes into a [Barcode]: a start
//! symbol, the data symbols (switching between code sets A, B and C as
//! needed), a modulo 103 checksum and the stop symbol. The barcode can then be
//! rendered to bits, SVG or PostScript through the [render] module.
//!
//! ```
//! let barcode = code128::encode(b"12345678").unwrap();
//! assert_eq!(barcode.values().collect::<Vec<_>>(), [105, 12, 34, 56, 78, 47, 106]);
//!
//! let svg = code128::render::svg::to_svg(&barcode, &Default::default());
//! assert!(svg.contains("<svg"));
//! ```

mod barcode;
mod checksum;
mod encoder;
mod error;
mod pattern;
mod symbol;
mod text;
pub mod classify;
pub mod render;
pub mod tables;

pub use barcode::Barcode;
pub use checksum::checksum;
pub use encoder::{digit_pair, encode, encoded_len, symbols};
pub use error::{AlreadyInitialized, EncodeError, RenderError};
pub use pattern::{Modules, Pattern};
pub use render::{Render, RenderOptions};
pub use symbol::{CodeSet, Control, ControlA, ControlB, ControlC, Symbol};
pub use tables::initialize;
pub use text::string_representation;

/// Maximum number of input bytes in one barcode.
pub const MAX_DATA_LEN: usize = 20;
/// Upper bound on the patterns of one barcode, start and stop included.
pub const MAX_PATTERNS: usize = 42;
/// Modules per data, start and checksum pattern.
pub const DATA_WIDTH: usize = 11;
/// Modules in the stop pattern, termination bar included.
pub const STOP_WIDTH: usize = 13;
/// Recommended quiet zone on each side, in modules.
pub const QUIET_WIDTH: usize = 10;
