use crate::error::{FontError, Malformed};
use crate::glyph::Glyph;
use crate::scan::{Horizontal, Scan, Vertical};

use core::marker::PhantomData;
use core::slice::ChunksExact;
use log::{debug, trace, warn};

/// Raster bitmap font backed by a packed glyph buffer.
///
/// The buffer holds one record per code of `start_code..=end_code`, each made
/// of a width byte followed by `lines * line_bytes` bitmap bytes. The metadata
/// lives next to the buffer, the buffer carries no header.
#[derive(Debug, Clone, Copy)]
pub struct RasterFont<'a, S> {
    line_bytes: usize,
    lines: usize,
    start: u8,
    end: u8,
    data: &'a [u8],
    _scan: PhantomData<S>,
}

/// Row-major font, `widthbytes` bytes per row and `height` rows per glyph
pub type HorizontalFont<'a> = RasterFont<'a, Horizontal>;

/// Column-major font, `heightbytes` bytes per column and `width` columns per glyph
pub type VerticalFont<'a> = RasterFont<'a, Vertical>;

const fn expected_len(line_bytes: usize, lines: usize, start: u8, end: u8) -> Option<usize> {
    let count = (end - start) as usize + 1;
    let bitmap = match lines.checked_mul(line_bytes) {
        Some(n) => n,
        None => return None,
    };
    match bitmap.checked_add(1) {
        Some(record) => count.checked_mul(record),
        None => None,
    }
}

const fn validate(
    line_bytes: usize,
    lines: usize,
    start: u8,
    end: u8,
    len: usize,
) -> Result<(), Malformed> {
    if line_bytes == 0 {
        return Err(Malformed::ZeroLineBytes);
    }
    if lines == 0 {
        return Err(Malformed::ZeroLines);
    }
    if start > end {
        return Err(Malformed::InvertedRange { start, end });
    }
    match expected_len(line_bytes, lines, start, end) {
        Some(expected) if expected == len => Ok(()),
        Some(expected) => Err(Malformed::Length { expected, actual: len }),
        None => Err(Malformed::Length { expected: usize::MAX, actual: len }),
    }
}

impl<'a, S: Scan> RasterFont<'a, S> {
    pub fn new(
        line_bytes: usize,
        lines: usize,
        start: u8,
        end: u8,
        data: &'a [u8],
    ) -> Result<Self, FontError> {
        if let Err(err) = validate(line_bytes, lines, start, end, data.len()) {
            warn!("Rejected {} font {:#04x}..={:#04x}: {}", S::NAME, start, end, err);
            return Err(err.into());
        }
        let font = Self::from_parts(line_bytes, lines, start, end, data);
        debug!(
            "Loaded {} font {:#04x}..={:#04x}: {} glyphs of {} bytes",
            S::NAME, start, end, font.glyph_count(), font.record_len()
        );
        Ok(font)
    }

    /// Same as `new` for tables known at compile time, where a malformed
    /// table is a compilation error.
    pub const fn from_static(
        line_bytes: usize,
        lines: usize,
        start: u8,
        end: u8,
        data: &'static [u8],
    ) -> RasterFont<'static, S> {
        match validate(line_bytes, lines, start, end, data.len()) {
            Ok(()) => {}
            Err(Malformed::ZeroLineBytes) => panic!("font table with zero bytes per line"),
            Err(Malformed::ZeroLines) => panic!("font table with zero lines per glyph"),
            Err(Malformed::InvertedRange { .. }) => panic!("font table start code after end code"),
            Err(_) => panic!("font table length does not match its metadata"),
        }
        RasterFont { line_bytes, lines, start, end, data, _scan: PhantomData }
    }

    pub(crate) const fn from_parts(
        line_bytes: usize,
        lines: usize,
        start: u8,
        end: u8,
        data: &'a [u8],
    ) -> Self {
        Self { line_bytes, lines, start, end, data, _scan: PhantomData }
    }

    /// Bytes per line (row or column)
    pub const fn line_bytes(&self) -> usize {
        self.line_bytes
    }

    /// Lines per glyph
    pub const fn lines(&self) -> usize {
        self.lines
    }

    pub const fn start_code(&self) -> u8 {
        self.start
    }

    pub const fn end_code(&self) -> u8 {
        self.end
    }

    pub const fn glyph_count(&self) -> usize {
        (self.end - self.start) as usize + 1
    }

    /// Size of one glyph record, width byte included
    pub const fn record_len(&self) -> usize {
        1 + self.lines * self.line_bytes
    }

    pub const fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Nominal cell width in pixels
    pub fn cell_width(&self) -> usize {
        S::cell(self.line_bytes, self.lines).0
    }

    /// Nominal cell height in pixels
    pub fn cell_height(&self) -> usize {
        S::cell(self.line_bytes, self.lines).1
    }

    pub const fn contains(&self, code: u8) -> bool {
        self.start <= code && code <= self.end
    }

    pub fn glyph(&self, code: u8) -> Result<Glyph<'a, S>, FontError> {
        if !self.contains(code) {
            trace!("No glyph for {:#04x} in {:#04x}..={:#04x}", code, self.start, self.end);
            let (start, end) = (self.start, self.end);
            return Err(FontError::OutOfRange { code: code as u32, start, end });
        }
        let n = self.record_len();
        let offset = (code - self.start) as usize * n;
        Ok(Glyph::new(code, &self.data[offset..offset + n], self.line_bytes))
    }

    pub fn glyph_for(&self, c: char) -> Result<Glyph<'a, S>, FontError> {
        let code = c as u32;
        if code > u8::MAX as u32 {
            return Err(FontError::OutOfRange { code, start: self.start, end: self.end });
        }
        self.glyph(code as u8)
    }

    /// Glyphs in code order
    pub fn glyphs(&self) -> Glyphs<'a, S> {
        Glyphs {
            records: self.data.chunks_exact(self.record_len()),
            code: self.start,
            line_bytes: self.line_bytes,
            _scan: PhantomData,
        }
    }
}

impl<'a> RasterFont<'a, Horizontal> {
    pub const fn widthbytes(&self) -> usize {
        self.line_bytes
    }

    pub const fn height(&self) -> usize {
        self.lines
    }
}

impl<'a> RasterFont<'a, Vertical> {
    pub const fn heightbytes(&self) -> usize {
        self.line_bytes
    }

    pub const fn width(&self) -> usize {
        self.lines
    }
}

pub struct Glyphs<'a, S> {
    records: ChunksExact<'a, u8>,
    code: u8,
    line_bytes: usize,
    _scan: PhantomData<S>,
}

impl<'a, S: Scan> Iterator for Glyphs<'a, S> {
    type Item = Glyph<'a, S>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.records.next()?;
        let glyph = Glyph::new(self.code, record, self.line_bytes);
        self.code = self.code.wrapping_add(1);
        Some(glyph)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.records.size_hint()
    }
}

impl<'a, S: Scan> ExactSizeIterator for Glyphs<'a, S> {}

#[cfg(test)]
const DIGITS: [u8; 6] = [8, 0b1100_0000, 0b1100_0000, 8, 0b0000_0001, 0b0000_0001];

#[test]
fn lookup_in_range() {
    let font = HorizontalFont::new(1, 2, b'0', b'1', &DIGITS).unwrap();
    assert_eq!(font.widthbytes(), 1);
    assert_eq!(font.height(), 2);
    assert_eq!(font.glyph_count(), 2);
    assert_eq!(font.record_len(), 3);

    let glyph = font.glyph(48).unwrap();
    assert_eq!(glyph.width(), 8);
    assert_eq!(glyph.bitmap(), &[0xC0, 0xC0]);

    let glyph = font.glyph(49).unwrap();
    assert_eq!(glyph.width(), 8);
    assert_eq!(glyph.bitmap(), &[0x01, 0x01]);

    assert_eq!(font.glyph(50).unwrap_err(), FontError::OutOfRange { code: 50, start: 48, end: 49 });
}

#[test]
fn lookup_single_glyph() {
    let data = [8, 0xFF];
    let font = HorizontalFont::new(1, 1, b'A', b'A', &data).unwrap();
    let glyph = font.glyph_for('A').unwrap();
    assert_eq!(glyph.code(), 65);
    assert_eq!(glyph.width(), 8);
    assert_eq!(glyph.bitmap(), &[0xFF]);
}

#[test]
fn lookup_out_of_range() {
    let font = HorizontalFont::new(1, 2, b'0', b'1', &DIGITS).unwrap();
    for code in 0..=u8::MAX {
        let res = font.glyph(code);
        if font.contains(code) {
            let glyph = res.unwrap();
            let offset = (code - font.start_code()) as usize * font.record_len();
            assert!(offset + font.record_len() <= font.data().len());
            assert_eq!(glyph.code(), code);
        } else {
            assert!(matches!(res, Err(FontError::OutOfRange { .. })));
        }
    }
    assert!(font.glyph_for('é').is_err());
    assert_eq!(
        font.glyph_for('\u{2603}').unwrap_err(),
        FontError::OutOfRange { code: 0x2603, start: 48, end: 49 }
    );
}

#[test]
fn reject_malformed_tables() {
    let err = |e| Err::<(), _>(FontError::Malformed(e));
    assert_eq!(
        HorizontalFont::new(0, 2, b'0', b'1', &DIGITS).map(|_| ()),
        err(Malformed::ZeroLineBytes)
    );
    assert_eq!(
        HorizontalFont::new(1, 0, b'0', b'1', &DIGITS).map(|_| ()),
        err(Malformed::ZeroLines)
    );
    assert_eq!(
        HorizontalFont::new(1, 2, b'1', b'0', &DIGITS).map(|_| ()),
        err(Malformed::InvertedRange { start: b'1', end: b'0' })
    );
    assert_eq!(
        HorizontalFont::new(1, 2, b'0', b'1', &DIGITS[..5]).map(|_| ()),
        err(Malformed::Length { expected: 6, actual: 5 })
    );
    assert_eq!(
        VerticalFont::new(1, 2, b'0', b'2', &DIGITS).map(|_| ()),
        err(Malformed::Length { expected: 9, actual: 6 })
    );
}

#[test]
fn buffer_length_formula() {
    let data = [0; 3 * (1 + 4 * 2)];
    let font = VerticalFont::new(2, 4, 0x20, 0x22, &data).unwrap();
    assert_eq!(font.heightbytes(), 2);
    assert_eq!(font.width(), 4);
    assert_eq!(font.data().len(), font.glyph_count() * (1 + font.width() * font.heightbytes()));
    assert_eq!(font.cell_width(), 4);
    assert_eq!(font.cell_height(), 16);
}

#[test]
fn full_code_range() {
    let data = [0; 256 * 2];
    let font = HorizontalFont::new(1, 1, 0x00, 0xFF, &data).unwrap();
    assert_eq!(font.glyph_count(), 256);
    assert_eq!(font.glyphs().len(), 256);
    assert_eq!(font.glyph(0xFF).unwrap().code(), 0xFF);
    assert_eq!(font.glyphs().last().map(|g| g.code()), Some(0xFF));
}

#[test]
fn iterate_glyphs() {
    let font = HorizontalFont::new(1, 2, b'0', b'1', &DIGITS).unwrap();
    let mut glyphs = font.glyphs();
    assert_eq!(glyphs.len(), 2);
    let glyph = glyphs.next().unwrap();
    assert_eq!((glyph.code(), glyph.bitmap()), (b'0', &[0xC0, 0xC0][..]));
    let glyph = glyphs.next().unwrap();
    assert_eq!((glyph.code(), glyph.bitmap()), (b'1', &[0x01, 0x01][..]));
    assert!(glyphs.next().is_none());
}

#[test]
fn static_table() {
    static FONT: HorizontalFont = RasterFont::from_static(1, 2, b'0', b'1', &DIGITS);
    assert_eq!(FONT.glyph(b'1').unwrap().bitmap(), &[0x01, 0x01]);
}

#[test]
fn reject_overflowing_metadata() {
    let res = HorizontalFont::new(usize::MAX, 1, b'A', b'A', &[]);
    assert!(matches!(res, Err(FontError::Malformed(Malformed::Length { .. }))));

    let res = VerticalFont::new(usize::MAX / 2, 3, b'A', b'A', &[]);
    assert!(matches!(res, Err(FontError::Malformed(Malformed::Length { .. }))));

    let res = HorizontalFont::new(usize::MAX / 2, 2, 0x00, 0xFF, &[]);
    assert!(matches!(res, Err(FontError::Malformed(Malformed::Length { .. }))));
}
