use crate::scan::Scan;

use bit_field::BitField;
use core::cmp;
use core::fmt;
use core::marker::PhantomData;
use core::slice::ChunksExact;

/// Borrowed view of one glyph record
#[derive(Debug, Clone, Copy)]
pub struct Glyph<'a, S> {
    code: u8,
    width: u8,
    bitmap: &'a [u8],
    line_bytes: usize,
    _scan: PhantomData<S>,
}

impl<'a, S: Scan> Glyph<'a, S> {
    pub(crate) fn new(code: u8, record: &'a [u8], line_bytes: usize) -> Self {
        let (width, bitmap) = match record.split_first() {
            Some((&width, bitmap)) => (width, bitmap),
            None => (0, record),
        };
        Self { code, width, bitmap, line_bytes, _scan: PhantomData }
    }

    pub fn code(&self) -> u8 {
        self.code
    }

    /// Pixel width of this glyph, it can be narrower than the cell with
    /// proportional fonts
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Bitmap bytes following the width byte
    pub fn bitmap(&self) -> &'a [u8] {
        self.bitmap
    }

    pub fn cell_width(&self) -> usize {
        S::cell(self.line_bytes, self.line_count()).0
    }

    pub fn cell_height(&self) -> usize {
        S::cell(self.line_bytes, self.line_count()).1
    }

    pub fn line_count(&self) -> usize {
        self.bitmap.len() / self.line_bytes
    }

    /// Row `i` of a horizontal glyph or column `i` of a vertical glyph
    pub fn line(&self, i: usize) -> Option<&'a [u8]> {
        let start = i.checked_mul(self.line_bytes)?;
        let end = start.checked_add(self.line_bytes)?;
        self.bitmap.get(start..end)
    }

    /// Rows or columns in order. Column bytes of a vertical glyph can be
    /// written to the controller as they are.
    pub fn lines(&self) -> ChunksExact<'a, u8> {
        self.bitmap.chunks_exact(self.line_bytes)
    }

    /// Whether the pixel at `(x, y)` is drawn, `(0, 0)` being the top left
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        let (line, along) = S::split(x, y);
        if along / 8 >= self.line_bytes {
            return false;
        }
        match self.line(line) {
            Some(bytes) => bytes[along / 8].get_bit(S::BIT_ORDER.bit(along % 8)),
            None => false,
        }
    }
}

impl<'a, S: Scan> fmt::Display for Glyph<'a, S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let width = cmp::min(self.width as usize, self.cell_width());
        for y in 0..self.cell_height() {
            for x in 0..width {
                let c = if self.pixel(x, y) { '#' } else { '.' };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
use crate::font::{HorizontalFont, VerticalFont};

#[test]
fn horizontal_pixels() {
    // Two bytes per row, 10 pixel wide glyph
    let data = [10, 0b1000_0000, 0b0100_0000, 0b0000_0001, 0b1000_0000];
    let font = HorizontalFont::new(2, 2, b'x', b'x', &data).unwrap();
    let glyph = font.glyph(b'x').unwrap();
    assert_eq!(glyph.cell_width(), 16);
    assert_eq!(glyph.cell_height(), 2);
    assert!(glyph.pixel(0, 0));
    assert!(glyph.pixel(9, 0));
    assert!(!glyph.pixel(1, 0));
    assert!(glyph.pixel(7, 1));
    assert!(glyph.pixel(8, 1));
    assert!(!glyph.pixel(0, 1));
    assert!(!glyph.pixel(16, 0));
    assert!(!glyph.pixel(0, 2));
    assert_eq!(glyph.line(1), Some(&[0x01, 0x80][..]));
    assert_eq!(glyph.line(2), None);
}

#[test]
fn vertical_pixels() {
    // Bit 0 is the top pixel of each column byte
    let data = [3, 0b0000_0001, 0b1000_0000, 0b0000_0011];
    let font = VerticalFont::new(1, 3, b'|', b'|', &data).unwrap();
    let glyph = font.glyph(b'|').unwrap();
    assert_eq!(glyph.cell_width(), 3);
    assert_eq!(glyph.cell_height(), 8);
    assert!(glyph.pixel(0, 0));
    assert!(!glyph.pixel(0, 7));
    assert!(glyph.pixel(1, 7));
    assert!(glyph.pixel(2, 0));
    assert!(glyph.pixel(2, 1));
    assert!(!glyph.pixel(3, 0));
    assert!(!glyph.pixel(0, 8));
    let lines: alloc::vec::Vec<_> = glyph.lines().collect();
    assert_eq!(lines, [&[0x01][..], &[0x80][..], &[0x03][..]]);
}

#[test]
fn display_preview() {
    use alloc::string::ToString;

    let data = [3, 0b1010_0000, 0b0100_0000];
    let font = HorizontalFont::new(1, 2, b'x', b'x', &data).unwrap();
    let glyph = font.glyph(b'x').unwrap();
    assert_eq!(glyph.to_string(), "#.#\n.#.\n");

    let data = [2, 0b0000_0101, 0b0000_0010];
    let font = VerticalFont::new(1, 2, b'x', b'x', &data).unwrap();
    let glyph = font.glyph(b'x').unwrap();
    assert_eq!(glyph.to_string(), "#.\n.#\n#.\n..\n..\n..\n..\n..\n");
}

#[test]
fn display_clips_to_cell() {
    use alloc::string::ToString;

    let data = [12, 0xFF];
    let font = HorizontalFont::new(1, 1, b'x', b'x', &data).unwrap();
    assert_eq!(font.glyph(b'x').unwrap().to_string(), "########\n");
}

#[test]
fn pixels_far_outside_cell() {
    let data = [3, 0xFF, 0xFF, 0xFF];
    let font = VerticalFont::new(1, 3, b'|', b'|', &data).unwrap();
    let glyph = font.glyph(b'|').unwrap();
    assert!(!glyph.pixel(usize::MAX, 0));
    assert!(!glyph.pixel(0, usize::MAX));
    assert_eq!(glyph.line(usize::MAX), None);

    let data = [8, 0xFF, 0xFF];
    let font = HorizontalFont::new(1, 2, b'-', b'-', &data).unwrap();
    let glyph = font.glyph(b'-').unwrap();
    assert!(!glyph.pixel(0, usize::MAX));
    assert!(!glyph.pixel(usize::MAX, 0));
    assert!(!glyph.pixel(usize::MAX, usize::MAX));
}
