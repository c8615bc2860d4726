use crate::error::{FontError, Malformed};
use crate::font::RasterFont;
use crate::scan::Scan;

use alloc::vec;
use alloc::vec::Vec;
use bit_field::BitField;
use core::marker::PhantomData;

/// Packs glyph records one code after the other, starting at `start`
#[derive(Debug, Clone)]
pub struct FontBuilder<S> {
    line_bytes: usize,
    lines: usize,
    start: u8,
    count: usize,
    data: Vec<u8>,
    _scan: PhantomData<S>,
}

impl<S: Scan> FontBuilder<S> {
    pub fn new(line_bytes: usize, lines: usize, start: u8) -> Self {
        Self { line_bytes, lines, start, count: 0, data: Vec::new(), _scan: PhantomData }
    }

    fn next_code(&self) -> u32 {
        self.start as u32 + self.count as u32
    }

    /// Append the glyph of the next code from its raw bitmap
    pub fn push(&mut self, width: u8, bitmap: &[u8]) -> Result<&mut Self, FontError> {
        let expected = self.line_bytes * self.lines;
        if bitmap.len() != expected {
            let code = self.next_code();
            return Err(Malformed::Record { code, expected, actual: bitmap.len() }.into());
        }
        self.data.push(width);
        self.data.extend_from_slice(bitmap);
        self.count += 1;
        Ok(self)
    }

    /// Append the glyph of the next code, packing the pixels drawn by `f`.
    ///
    /// `f` is sampled over the whole cell, `line_bytes * 8` pixels along each
    /// line, whatever `width` says.
    pub fn push_pixels<F>(&mut self, width: u8, f: F) -> Result<&mut Self, FontError>
    where
        F: Fn(usize, usize) -> bool,
    {
        let mut bitmap = vec![0; self.line_bytes * self.lines];
        for line in 0..self.lines {
            for along in 0..self.line_bytes * 8 {
                let (x, y) = S::join(line, along);
                if f(x, y) {
                    let i = line * self.line_bytes + along / 8;
                    bitmap[i].set_bit(S::BIT_ORDER.bit(along % 8), true);
                }
            }
        }
        self.push(width, &bitmap)
    }

    pub fn build(self) -> Result<FontTable<S>, FontError> {
        if self.count == 0 {
            return Err(Malformed::Empty.into());
        }
        let end = self.next_code() - 1;
        if end > u8::MAX as u32 {
            return Err(FontError::OutOfRange { code: end, start: self.start, end: u8::MAX });
        }
        let end = end as u8;
        RasterFont::<S>::new(self.line_bytes, self.lines, self.start, end, &self.data)?;
        Ok(FontTable {
            line_bytes: self.line_bytes,
            lines: self.lines,
            start: self.start,
            end,
            data: self.data,
            _scan: PhantomData,
        })
    }
}

/// Validated font owning its glyph buffer
#[derive(Debug, Clone)]
pub struct FontTable<S> {
    line_bytes: usize,
    lines: usize,
    start: u8,
    end: u8,
    data: Vec<u8>,
    _scan: PhantomData<S>,
}

impl<S: Scan> FontTable<S> {
    pub fn font(&self) -> RasterFont<'_, S> {
        RasterFont::from_parts(self.line_bytes, self.lines, self.start, self.end, &self.data)
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

#[cfg(test)]
use crate::scan::{Horizontal, Vertical};

#[test]
fn encode_single_glyph() {
    let mut builder = FontBuilder::<Horizontal>::new(1, 1, b'A');
    builder.push(8, &[0xFF]).unwrap();
    let table = builder.build().unwrap();
    let font = table.font();
    assert_eq!((font.start_code(), font.end_code()), (65, 65));
    let glyph = font.glyph(65).unwrap();
    assert_eq!(glyph.width(), 8);
    assert_eq!(glyph.bitmap(), &[0xFF]);
    assert_eq!(table.into_bytes(), [8, 0xFF]);
}

#[test]
fn encode_records_in_code_order() {
    let mut builder = FontBuilder::<Horizontal>::new(1, 2, b'0');
    builder.push(8, &[0xC0, 0xC0]).unwrap().push(8, &[0x01, 0x01]).unwrap();
    let table = builder.build().unwrap();
    assert_eq!(table.font().glyph_count(), 2);
    assert_eq!(table.into_bytes(), [8, 0xC0, 0xC0, 8, 0x01, 0x01]);
}

#[test]
fn reject_bad_records() {
    let mut builder = FontBuilder::<Vertical>::new(2, 3, b'a');
    builder.push(3, &[0; 6]).unwrap();
    assert_eq!(
        builder.push(3, &[0; 5]).unwrap_err(),
        FontError::Malformed(Malformed::Record { code: 0x62, expected: 6, actual: 5 })
    );
    assert_eq!(builder.build().unwrap().font().glyph_count(), 1);

    let builder = FontBuilder::<Vertical>::new(1, 1, b'a');
    assert_eq!(builder.build().unwrap_err(), FontError::Malformed(Malformed::Empty));

    let mut builder = FontBuilder::<Horizontal>::new(0, 4, b'a');
    builder.push(0, &[]).unwrap();
    assert_eq!(builder.build().unwrap_err(), FontError::Malformed(Malformed::ZeroLineBytes));

    let mut builder = FontBuilder::<Horizontal>::new(1, 1, 0xFF);
    builder.push(1, &[0]).unwrap().push(1, &[0]).unwrap();
    assert_eq!(
        builder.build().unwrap_err(),
        FontError::OutOfRange { code: 0x100, start: 0xFF, end: 0xFF }
    );
}

#[test]
fn pack_pixels() {
    // Diagonal from the top left corner
    let diagonal = |x: usize, y: usize| x == y;

    let mut builder = FontBuilder::<Horizontal>::new(1, 3, b'\\');
    builder.push_pixels(3, diagonal).unwrap();
    let table = builder.build().unwrap();
    assert_eq!(table.font().glyph(b'\\').unwrap().bitmap(), &[0x80, 0x40, 0x20]);

    let mut builder = FontBuilder::<Vertical>::new(1, 3, b'\\');
    builder.push_pixels(3, diagonal).unwrap();
    let table = builder.build().unwrap();
    let glyph = table.font().glyph(b'\\').unwrap();
    assert_eq!(glyph.bitmap(), &[0x01, 0x02, 0x04]);
    for y in 0..8 {
        for x in 0..3 {
            assert_eq!(glyph.pixel(x, y), x == y);
        }
    }
}

#[test]
fn pack_pixels_across_bytes() {
    // 10x10 square outline inside a 16 pixel cell
    let border = |x: usize, y: usize| x < 10 && y < 10 && (x == 0 || x == 9 || y == 0 || y == 9);

    let mut builder = FontBuilder::<Horizontal>::new(2, 10, b'#');
    builder.push_pixels(10, border).unwrap();
    let table = builder.build().unwrap();
    let h = table.font().glyph(b'#').unwrap();
    assert_eq!(h.line(0), Some(&[0xFF, 0xC0][..]));
    assert_eq!(h.line(5), Some(&[0x80, 0x40][..]));

    let mut builder = FontBuilder::<Vertical>::new(2, 10, b'#');
    builder.push_pixels(10, border).unwrap();
    let table = builder.build().unwrap();
    let v = table.font().glyph(b'#').unwrap();
    assert_eq!(v.line(0), Some(&[0xFF, 0x03][..]));
    assert_eq!(v.line(5), Some(&[0x01, 0x02][..]));

    for y in 0..10 {
        for x in 0..10 {
            assert_eq!(h.pixel(x, y), border(x, y));
            assert_eq!(v.pixel(x, y), border(x, y));
        }
    }
}

#[test]
fn pack_pixels_over_whole_cell() {
    // Pixels past the glyph width are still packed
    let top = |_: usize, y: usize| y == 0;

    let mut builder = FontBuilder::<Horizontal>::new(2, 2, b'-');
    builder.push_pixels(3, top).unwrap();
    let table = builder.build().unwrap();
    let glyph = table.font().glyph(b'-').unwrap();
    assert_eq!(glyph.bitmap(), &[0xFF, 0xFF, 0x00, 0x00]);
    assert!(glyph.pixel(15, 0));

    let mut builder = FontBuilder::<Vertical>::new(2, 2, b'-');
    builder.push_pixels(1, top).unwrap();
    let table = builder.build().unwrap();
    let glyph = table.font().glyph(b'-').unwrap();
    assert_eq!(glyph.bitmap(), &[0x01, 0x00, 0x01, 0x00]);
    assert!(glyph.pixel(1, 0));
}
