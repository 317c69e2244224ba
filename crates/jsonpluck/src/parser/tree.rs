use super::{Parser, ValueKind};
use crate::{
    error::{ParseError, SyntaxError},
    source::ByteSource,
    value::{Array, Map, Value},
};

impl<S: ByteSource> Parser<S> {
    /// Reads the complete value introduced by `first`, which has already
    /// been consumed. The value must be followed by more input.
    pub(crate) fn read_value(&mut self, first: u8) -> Result<Value, ParseError> {
        self.dispatch_value(first, false)
    }

    /// Like [`read_value`](Self::read_value) for a value at the top level of
    /// the input, where end of input may also end a number or literal.
    pub(crate) fn read_root_value(&mut self, first: u8) -> Result<Value, ParseError> {
        self.dispatch_value(first, true)
    }

    fn dispatch_value(&mut self, first: u8, eof_ok: bool) -> Result<Value, ParseError> {
        match self.kind_of(first)? {
            ValueKind::String => self.read_string_value().map(Value::String),
            ValueKind::Number => self.read_number(first, eof_ok).map(Value::Number),
            ValueKind::Boolean | ValueKind::Null => self.read_literal(first, eof_ok),
            ValueKind::Array => self.build_array().map(Value::Array),
            ValueKind::Object => self.build_object().map(Value::Object),
        }
    }

    /// Consumes the value introduced by `first` without keeping it.
    pub(crate) fn skip_value(&mut self, first: u8) -> Result<(), ParseError> {
        match self.kind_of(first)? {
            ValueKind::String => self.skip_string(),
            ValueKind::Number => self.read_number(first, false).map(drop),
            ValueKind::Boolean | ValueKind::Null => self.read_literal(first, false).map(drop),
            ValueKind::Array => self.skip_container(b'[', b']'),
            ValueKind::Object => self.skip_container(b'{', b'}'),
        }
    }

    /// Builds an object after its `{`. Properties named in the skip set are
    /// consumed but left out of the map.
    pub(crate) fn build_object(&mut self) -> Result<Map, ParseError> {
        let mut map = Map::new();
        loop {
            match self.scanner.expect_non_whitespace()? {
                b'"' => {
                    if !self.read_property_name()? {
                        return Err(self.scanner.error(SyntaxError::ExpectedColon));
                    }
                    let key = if self.is_skipped(self.scratch_bytes()) {
                        None
                    } else {
                        Some(self.scratch_text()?)
                    };
                    let first = self.scanner.expect_non_whitespace()?;
                    match key {
                        Some(key) => {
                            let value = self.read_value(first)?;
                            map.insert(key, value);
                        }
                        None => self.skip_value(first)?,
                    }
                }
                b',' => {}
                b'}' => return Ok(map),
                b => return Err(self.scanner.error(SyntaxError::InvalidCharacter(b))),
            }
        }
    }

    /// Builds an array after its `[`. Stray commas are tolerated.
    pub(crate) fn build_array(&mut self) -> Result<Array, ParseError> {
        let mut items = Array::new();
        loop {
            match self.scanner.expect_non_whitespace()? {
                b',' => {}
                b']' => return Ok(items),
                first => items.push(self.read_value(first)?),
            }
        }
    }
}
