//! Built-in font tables

use crate::font::{HorizontalFont, RasterFont, VerticalFont};

pub fn horizontal(name: &str) -> Option<&'static HorizontalFont<'static>> {
    match name {
        "digits-5x7" => Some(&DIGITS_5X7),
        _            => None,
    }
}

pub fn vertical(name: &str) -> Option<&'static VerticalFont<'static>> {
    match name {
        "digits-5x7" => Some(&DIGITS_5X7_V),
        _            => None,
    }
}

/// Digits '0' to '9' on 5x7 cells advancing by 6 pixels
pub static DIGITS_5X7: HorizontalFont<'static> = RasterFont::from_static(1, 7, b'0', b'9', &[
    0x06, 0x70, 0x88, 0x98, 0xa8, 0xc8, 0x88, 0x70, // '0'
    0x06, 0x20, 0x60, 0x20, 0x20, 0x20, 0x20, 0x70, // '1'
    0x06, 0x70, 0x88, 0x08, 0x10, 0x20, 0x40, 0xf8, // '2'
    0x06, 0xf8, 0x10, 0x20, 0x10, 0x08, 0x88, 0x70, // '3'
    0x06, 0x10, 0x30, 0x50, 0x90, 0xf8, 0x10, 0x10, // '4'
    0x06, 0xf8, 0x80, 0xf0, 0x08, 0x08, 0x88, 0x70, // '5'
    0x06, 0x30, 0x40, 0x80, 0xf0, 0x88, 0x88, 0x70, // '6'
    0x06, 0xf8, 0x08, 0x10, 0x20, 0x40, 0x40, 0x40, // '7'
    0x06, 0x70, 0x88, 0x88, 0x70, 0x88, 0x88, 0x70, // '8'
    0x06, 0x70, 0x88, 0x88, 0x78, 0x08, 0x10, 0x60, // '9'
]);

/// Same glyphs as `DIGITS_5X7` packed for SED1520 controllers
pub static DIGITS_5X7_V: VerticalFont<'static> = RasterFont::from_static(1, 5, b'0', b'9', &[
    0x06, 0x3e, 0x51, 0x49, 0x45, 0x3e, // '0'
    0x06, 0x00, 0x42, 0x7f, 0x40, 0x00, // '1'
    0x06, 0x42, 0x61, 0x51, 0x49, 0x46, // '2'
    0x06, 0x21, 0x41, 0x45, 0x4b, 0x31, // '3'
    0x06, 0x18, 0x14, 0x12, 0x7f, 0x10, // '4'
    0x06, 0x27, 0x45, 0x45, 0x45, 0x39, // '5'
    0x06, 0x3c, 0x4a, 0x49, 0x49, 0x30, // '6'
    0x06, 0x01, 0x71, 0x09, 0x05, 0x03, // '7'
    0x06, 0x36, 0x49, 0x49, 0x49, 0x36, // '8'
    0x06, 0x06, 0x49, 0x49, 0x29, 0x1e, // '9'
]);

#[test]
fn lookup_by_name() {
    assert!(horizontal("digits-5x7").is_some());
    assert!(vertical("digits-5x7").is_some());
    assert!(horizontal("terminus-8x16").is_none());
    assert!(vertical("").is_none());
}

#[test]
fn digits_tables() {
    assert_eq!(DIGITS_5X7.widthbytes(), 1);
    assert_eq!(DIGITS_5X7.height(), 7);
    assert_eq!(DIGITS_5X7_V.heightbytes(), 1);
    assert_eq!(DIGITS_5X7_V.width(), 5);
    assert_eq!(DIGITS_5X7.glyph_count(), 10);
    assert_eq!(DIGITS_5X7_V.glyph_count(), 10);
    assert!(DIGITS_5X7.glyph(b'A').is_err());
    assert!(DIGITS_5X7_V.glyph(b'/').is_err());
}

#[test]
fn digits_agree_across_formats() {
    for (h, v) in DIGITS_5X7.glyphs().zip(DIGITS_5X7_V.glyphs()) {
        assert_eq!(h.code(), v.code());
        assert_eq!(h.width(), v.width());
        for y in 0..8 {
            for x in 0..5 {
                let c = h.code() as char;
                assert_eq!(h.pixel(x, y), v.pixel(x, y), "{:?} at ({}, {})", c, x, y);
            }
        }
    }
}

#[test]
fn digits_preview() {
    use alloc::string::ToString;

    let glyph = DIGITS_5X7_V.glyph_for('7').unwrap();
    let preview = "\
        #####\n\
        ....#\n\
        ...#.\n\
        ..#..\n\
        .#...\n\
        .#...\n\
        .#...\n\
        .....\n";
    assert_eq!(glyph.to_string(), preview);
}
