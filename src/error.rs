use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FontError {
    #[error("character code {code:#04x} is outside {start:#04x}..={end:#04x}")]
    OutOfRange { code: u32, start: u8, end: u8 },
    #[error("malformed font table: {0}")]
    Malformed(Malformed),
}

/// Rule broken by a font table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Malformed {
    #[error("zero bytes per line")]
    ZeroLineBytes,
    #[error("zero lines per glyph")]
    ZeroLines,
    #[error("start code {start:#04x} is after end code {end:#04x}")]
    InvertedRange { start: u8, end: u8 },
    #[error("glyph buffer is {actual} bytes, expected {expected}")]
    Length { expected: usize, actual: usize },
    #[error("bitmap of glyph {code:#04x} is {actual} bytes, expected {expected}")]
    Record { code: u32, expected: usize, actual: usize },
    #[error("no glyphs")]
    Empty,
}

impl From<Malformed> for FontError {
    fn from(err: Malformed) -> Self {
        FontError::Malformed(err)
    }
}

#[test]
fn display_messages() {
    use alloc::string::ToString;

    let err = FontError::OutOfRange { code: 0x32, start: 0x30, end: 0x31 };
    assert_eq!(err.to_string(), "character code 0x32 is outside 0x30..=0x31");

    let err = FontError::from(Malformed::Length { expected: 6, actual: 5 });
    assert_eq!(err.to_string(), "malformed font table: glyph buffer is 5 bytes, expected 6");
}
