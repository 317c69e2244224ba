//! Scanner: the parser's only view of the input.
//!
//! Wraps a [`ByteSource`] and keeps the shared [`ByteCounter`] in step with
//! every byte consumed or pushed back. All I/O failures are converted to
//! [`ParseError`]s here, tagged with the offset at which they happened, so the
//! readers above only ever deal with one error type.
//!
//! Invariants
//! - The counter equals the number of bytes handed out minus the number of
//!   bytes pushed back.
//! - At most one byte can be pushed back between two reads.

use crate::{
    error::{ParseError, SyntaxError},
    source::{ByteCounter, ByteSource},
};

/// JSON insignificant whitespace: space, tab, line feed and carriage return.
#[inline]
pub(crate) fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

#[derive(Debug)]
pub(crate) struct Scanner<S> {
    source: S,
    counter: ByteCounter,
}

impl<S: ByteSource> Scanner<S> {
    pub(crate) fn new(source: S, counter: ByteCounter) -> Self {
        Self { source, counter }
    }

    /// Reads one byte; `None` at end of input.
    pub(crate) fn next_byte(&mut self) -> Result<Option<u8>, ParseError> {
        match self.source.read_byte() {
            Ok(Some(b)) => {
                self.counter.increment();
                Ok(Some(b))
            }
            Ok(None) => Ok(None),
            Err(err) => Err(self.error(SyntaxError::Read(err.kind()))),
        }
    }

    /// Reads one byte, treating end of input as an error.
    pub(crate) fn expect_byte(&mut self) -> Result<u8, ParseError> {
        self.next_byte()?
            .ok_or_else(|| self.error(SyntaxError::UnexpectedEndOfInput))
    }

    /// Puts the most recently read byte back.
    pub(crate) fn pushback(&mut self) -> Result<(), ParseError> {
        self.source
            .unread_byte()
            .map_err(|err| self.error(SyntaxError::Read(err.kind())))?;
        self.counter.decrement();
        Ok(())
    }

    /// Consumes whitespace and returns the first other byte, if any.
    pub(crate) fn skip_whitespace(&mut self) -> Result<Option<u8>, ParseError> {
        while let Some(b) = self.next_byte()? {
            if !is_whitespace(b) {
                return Ok(Some(b));
            }
        }
        Ok(None)
    }

    /// Like [`skip_whitespace`](Self::skip_whitespace), but end of input is an
    /// error.
    pub(crate) fn expect_non_whitespace(&mut self) -> Result<u8, ParseError> {
        self.skip_whitespace()?
            .ok_or_else(|| self.error(SyntaxError::UnexpectedEndOfInput))
    }

    /// Builds a [`ParseError`] positioned at the current offset.
    pub(crate) fn error(&self, source: SyntaxError) -> ParseError {
        ParseError::new(source, self.counter.get())
    }

    pub(crate) fn bytes_read(&self) -> u64 {
        self.counter.get()
    }

    pub(crate) fn counter(&self) -> &ByteCounter {
        &self.counter
    }
}
