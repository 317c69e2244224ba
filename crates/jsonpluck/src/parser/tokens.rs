use super::{
    Parser,
    escape_buffer::{UnicodeEscapeBuffer, decode_pair, decode_unit, is_surrogate},
    literal_buffer::{ExpectedLiteralBuffer, Step},
    scanner::is_whitespace,
};
use crate::{
    error::{ParseError, SyntaxError},
    source::ByteSource,
    value::Value,
};

/// Position inside a string literal.
#[derive(Debug, Clone, Copy)]
enum StringState {
    Normal,
    AfterBackslash,
    /// Reading the hex digits of `\uXXXX`; `high` holds the leading
    /// surrogate when this is the second half of a pair.
    InUnicodeEscape { high: Option<u16> },
    /// A lone surrogate was followed by `\`; a `u` continues the pair.
    AfterSurrogateBackslash(u16),
}

#[inline]
fn is_delimiter(b: u8) -> bool {
    matches!(b, b',' | b'}' | b']')
}

/// Byte produced by a single-character escape, if `b` names one.
fn simple_escape(b: u8) -> Option<u8> {
    match b {
        b'"' | b'\\' | b'/' | b'\'' => Some(b),
        b'b' => Some(0x08),
        b'f' => Some(0x0C),
        b'n' => Some(b'\n'),
        b'r' => Some(b'\r'),
        b't' => Some(b'\t'),
        _ => None,
    }
}

impl<S: ByteSource> Parser<S> {
    /// Decodes a string into the scratch buffer. The opening quote has
    /// already been consumed; the closing quote is consumed here.
    pub(crate) fn read_string(&mut self) -> Result<(), ParseError> {
        self.scratch.reset();
        let mut escape = UnicodeEscapeBuffer::new();
        let mut state = StringState::Normal;

        loop {
            let b = self.scanner.expect_byte()?;
            state = match state {
                StringState::Normal => match b {
                    b'"' => return Ok(()),
                    b'\\' => StringState::AfterBackslash,
                    b if b < 0x20 => {
                        return Err(self.scanner.error(SyntaxError::ControlCharacterInString(b)));
                    }
                    b => {
                        self.scratch.push(b);
                        StringState::Normal
                    }
                },
                StringState::AfterBackslash => {
                    if b == b'u' {
                        StringState::InUnicodeEscape { high: None }
                    } else if let Some(unescaped) = simple_escape(b) {
                        self.scratch.push(unescaped);
                        StringState::Normal
                    } else {
                        return Err(self.scanner.error(SyntaxError::InvalidEscape(b)));
                    }
                }
                StringState::InUnicodeEscape { high } => {
                    let Some(unit) = escape.feed(b).map_err(|err| self.scanner.error(err))? else {
                        continue;
                    };
                    match high {
                        Some(high) => {
                            self.scratch.push_char(decode_pair(high, unit));
                            StringState::Normal
                        }
                        None if is_surrogate(unit) => {
                            if self.scanner.expect_byte()? == b'\\' {
                                StringState::AfterSurrogateBackslash(unit)
                            } else {
                                self.scratch.push_char(char::REPLACEMENT_CHARACTER);
                                self.scanner.pushback()?;
                                StringState::Normal
                            }
                        }
                        None => {
                            self.scratch.push_char(decode_unit(unit));
                            StringState::Normal
                        }
                    }
                }
                StringState::AfterSurrogateBackslash(high) => {
                    if b == b'u' {
                        StringState::InUnicodeEscape { high: Some(high) }
                    } else {
                        // Lone surrogate; `b` is an ordinary escape letter.
                        self.scratch.push_char(char::REPLACEMENT_CHARACTER);
                        self.scanner.pushback()?;
                        StringState::AfterBackslash
                    }
                }
            };
        }
    }

    /// Reads a string and returns its decoded text.
    pub(crate) fn read_string_value(&mut self) -> Result<String, ParseError> {
        self.read_string()?;
        self.scratch_text()
    }

    /// Consumes a string without decoding it. A backslash always swallows the
    /// byte after it.
    pub(crate) fn skip_string(&mut self) -> Result<(), ParseError> {
        loop {
            match self.scanner.expect_byte()? {
                b'"' => return Ok(()),
                b'\\' => {
                    self.scanner.expect_byte()?;
                }
                _ => {}
            }
        }
    }

    /// Reads the text of a number whose first byte has been consumed.
    ///
    /// The number ends at a delimiter (`,`, `}`, `]`), which is pushed back,
    /// or at whitespace, after which the next significant byte must be a
    /// delimiter. End of input ends it only when `eof_ok` is set. The text
    /// itself is not validated.
    pub(crate) fn read_number(&mut self, first: u8, eof_ok: bool) -> Result<String, ParseError> {
        self.scratch.reset();
        self.scratch.push(first);
        loop {
            let Some(b) = self.scanner.next_byte()? else {
                if eof_ok {
                    break;
                }
                return Err(self.scanner.error(SyntaxError::UnexpectedEndOfInput));
            };
            if is_whitespace(b) {
                self.expect_delimiter(eof_ok)?;
                break;
            }
            if is_delimiter(b) {
                self.scanner.pushback()?;
                break;
            }
            self.scratch.push(b);
        }
        self.scratch_text()
    }

    /// Reads `true`, `false` or `null` whose first byte has been consumed.
    /// `eof_ok` as for [`read_number`](Self::read_number).
    pub(crate) fn read_literal(&mut self, first: u8, eof_ok: bool) -> Result<Value, ParseError> {
        let mut literal = ExpectedLiteralBuffer::new(first);
        loop {
            let b = self.scanner.expect_byte()?;
            match literal.step(b) {
                Step::NeedMore => {}
                Step::Done(value) => {
                    self.end_of_scalar(eof_ok)?;
                    return Ok(value.into());
                }
                Step::Reject => return Err(self.scanner.error(SyntaxError::InvalidCharacter(b))),
            }
        }
    }

    /// Consumes an array or object whose opening byte has been consumed,
    /// tracking nesting of `open`/`close` and skipping strings.
    pub(crate) fn skip_container(&mut self, open: u8, close: u8) -> Result<(), ParseError> {
        let mut depth = 1usize;
        loop {
            match self.scanner.expect_byte()? {
                b'"' => self.skip_string()?,
                b if b == open => depth += 1,
                b if b == close => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(());
                    }
                }
                _ => {}
            }
        }
    }

    /// Reads a quoted name into the scratch buffer and reports whether a `:`
    /// follows it. When it does not, the byte found instead is pushed back.
    pub(crate) fn read_property_name(&mut self) -> Result<bool, ParseError> {
        self.read_string()?;
        if self.scanner.expect_non_whitespace()? == b':' {
            return Ok(true);
        }
        self.scanner.pushback()?;
        Ok(false)
    }

    /// Checks the byte right after a complete literal.
    fn end_of_scalar(&mut self, eof_ok: bool) -> Result<(), ParseError> {
        match self.scanner.next_byte()? {
            None if eof_ok => Ok(()),
            None => Err(self.scanner.error(SyntaxError::UnexpectedEndOfInput)),
            Some(b) if is_whitespace(b) => self.expect_delimiter(eof_ok),
            Some(b) if is_delimiter(b) => self.scanner.pushback(),
            Some(b) => Err(self.scanner.error(SyntaxError::ExpectedDelimiter(b))),
        }
    }

    /// After whitespace following a scalar: the next significant byte must be
    /// a delimiter (pushed back), or end of input when `eof_ok` is set.
    fn expect_delimiter(&mut self, eof_ok: bool) -> Result<(), ParseError> {
        match self.scanner.skip_whitespace()? {
            None if eof_ok => Ok(()),
            None => Err(self.scanner.error(SyntaxError::UnexpectedEndOfInput)),
            Some(b) if is_delimiter(b) => self.scanner.pushback(),
            Some(b) => Err(self.scanner.error(SyntaxError::ExpectedDelimiter(b))),
        }
    }
}
