use std::io;

use thiserror::Error;

/// The single failure kind of an extraction: the input was not valid JSON
/// where the scan needed it to be (or the byte source failed).
///
/// Once a `ParseError` has been produced the scan is over; no further items
/// follow it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid json: {source} at byte {offset}")]
pub struct ParseError {
    pub(crate) source: SyntaxError,
    pub(crate) offset: u64,
}

impl ParseError {
    pub(crate) fn new(source: SyntaxError, offset: u64) -> Self {
        Self { source, offset }
    }

    /// The detail describing what went wrong.
    #[must_use]
    pub fn syntax_error(&self) -> &SyntaxError {
        &self.source
    }

    /// Number of bytes consumed from the source when the failure was detected.
    #[must_use]
    pub fn offset(&self) -> u64 {
        self.offset
    }
}

/// Detail attached to a [`ParseError`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// A byte that cannot appear at this point of an object or literal.
    #[error("invalid character {}", DisplayByte(*.0))]
    InvalidCharacter(u8),
    /// A value began with a byte that starts no JSON value.
    #[error("invalid start of value {}", DisplayByte(*.0))]
    InvalidValueStart(u8),
    /// A backslash followed by an unknown escape letter.
    #[error("invalid escape sequence \\{}", DisplayByte(*.0))]
    InvalidEscape(u8),
    /// A non-hex digit inside `\uXXXX`.
    #[error("invalid unicode escape sequence at character {}", DisplayByte(*.0))]
    InvalidUnicodeEscapeChar(u8),
    /// A raw byte below 0x20 inside a string.
    #[error("unescaped control character {} in string", DisplayByte(*.0))]
    ControlCharacterInString(u8),
    /// A scalar followed by something other than `,`, `}` or `]`.
    #[error("expected ',', '}}' or ']' but found {}", DisplayByte(*.0))]
    ExpectedDelimiter(u8),
    /// A property name inside an object was not followed by `:`.
    #[error("expected ':' after property name")]
    ExpectedColon,
    /// Decoded string or number text is not valid UTF-8.
    #[error("invalid utf-8 in decoded text")]
    InvalidUtf8,
    /// The input ended in the middle of a value.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    /// The byte source failed with this I/O error kind.
    #[error("read failed: {0}")]
    Read(io::ErrorKind),
}

struct DisplayByte(u8);

impl core::fmt::Display for DisplayByte {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.0 {
            b if b.is_ascii_graphic() => write!(f, "'{}'", b as char),
            b => write!(f, "0x{b:02X}"),
        }
    }
}
