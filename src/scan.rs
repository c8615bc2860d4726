/// Order of the pixels packed into one bitmap byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitOrder {
    /// Bit 7 is the first pixel of the octet (leftmost)
    Msb0,
    /// Bit 0 is the first pixel of the octet (topmost)
    Lsb0,
}

impl BitOrder {
    /// Bit index holding pixel `i` (0..8) of an octet
    pub const fn bit(self, i: usize) -> usize {
        match self {
            BitOrder::Msb0 => 7 - i,
            BitOrder::Lsb0 => i,
        }
    }
}

/// Scan direction of a raster font.
///
/// A glyph bitmap is a sequence of lines of `line_bytes` bytes. For a
/// horizontal font a line is a pixel row, for a vertical font it is a pixel
/// column. The tag types carry no data and only select how `(x, y)` maps onto
/// a line and a position along it.
pub trait Scan {
    const NAME: &'static str;
    const BIT_ORDER: BitOrder;

    /// Split pixel coordinates into `(line, position along the line)`
    fn split(x: usize, y: usize) -> (usize, usize);

    /// Inverse of `split`
    fn join(line: usize, along: usize) -> (usize, usize);

    /// Cell size in pixels as `(width, height)`
    fn cell(line_bytes: usize, lines: usize) -> (usize, usize);
}

/// Row-major glyphs for TFT controllers scanning horizontally
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Horizontal {}

/// Column-major glyphs for SED1520 compatible dot matrix controllers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vertical {}

impl Scan for Horizontal {
    const NAME: &'static str = "horizontal";
    const BIT_ORDER: BitOrder = BitOrder::Msb0;

    fn split(x: usize, y: usize) -> (usize, usize) {
        (y, x)
    }

    fn join(line: usize, along: usize) -> (usize, usize) {
        (along, line)
    }

    fn cell(line_bytes: usize, lines: usize) -> (usize, usize) {
        (line_bytes * 8, lines)
    }
}

// The controller latches a column byte with D0 on the top pixel, so the
// generated tables are LSB first.
impl Scan for Vertical {
    const NAME: &'static str = "vertical";
    const BIT_ORDER: BitOrder = BitOrder::Lsb0;

    fn split(x: usize, y: usize) -> (usize, usize) {
        (x, y)
    }

    fn join(line: usize, along: usize) -> (usize, usize) {
        (line, along)
    }

    fn cell(line_bytes: usize, lines: usize) -> (usize, usize) {
        (lines, line_bytes * 8)
    }
}

#[test]
fn bit_order_index() {
    assert_eq!(BitOrder::Msb0.bit(0), 7);
    assert_eq!(BitOrder::Msb0.bit(7), 0);
    assert_eq!(BitOrder::Lsb0.bit(0), 0);
    assert_eq!(BitOrder::Lsb0.bit(7), 7);
}

#[test]
fn split_and_join() {
    assert_eq!(Horizontal::split(3, 5), (5, 3));
    assert_eq!(Vertical::split(3, 5), (3, 5));
    for &(x, y) in &[(0, 0), (7, 2), (12, 9)] {
        let (line, along) = Horizontal::split(x, y);
        assert_eq!(Horizontal::join(line, along), (x, y));
        let (line, along) = Vertical::split(x, y);
        assert_eq!(Vertical::join(line, along), (x, y));
    }
}

#[test]
fn cell_size() {
    assert_eq!(Horizontal::cell(2, 16), (16, 16));
    assert_eq!(Vertical::cell(2, 10), (10, 16));
}
