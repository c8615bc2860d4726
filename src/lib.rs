//! Raster bitmap fonts for embedded LCD controllers.
//!
//! Two layouts share the same record shape: the horizontal format for TFT
//! controllers scanning rows, where each byte holds 8 pixels of a row with
//! the leftmost pixel in the high bit, and the vertical format for SED1520
//! compatible dot matrix controllers, where each byte holds 8 pixels of a
//! column with the topmost pixel in the low bit.
//!
//! ```
//! use lcdfont::HorizontalFont;
//!
//! let data = [8, 0xC0, 0xC0, 8, 0x01, 0x01];
//! let font = HorizontalFont::new(1, 2, b'0', b'1', &data).unwrap();
//! assert_eq!(font.glyph(b'1').unwrap().bitmap(), &[0x01, 0x01]);
//! assert!(font.glyph(b'2').is_err());
//! ```

#![cfg_attr(not(test), no_std)]

#[cfg(any(feature = "alloc", test))]
extern crate alloc;

#[cfg(feature = "alloc")]
pub mod builder;
pub mod error;
pub mod font;
#[cfg(feature = "fonts")]
pub mod fonts;
pub mod glyph;
pub mod scan;

#[cfg(feature = "alloc")]
pub use builder::{FontBuilder, FontTable};
pub use error::{FontError, Malformed};
pub use font::{Glyphs, HorizontalFont, RasterFont, VerticalFont};
pub use glyph::Glyph;
pub use scan::{BitOrder, Horizontal, Scan, Vertical};
