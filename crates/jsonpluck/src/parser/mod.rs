//! Single-pass, pull-driven JSON reader over a [`ByteSource`].
//!
//! Overview
//! - [`Scanner`] hands out bytes one at a time with a single level of
//!   pushback and keeps the shared byte counter current.
//! - The token readers in `tokens` consume exactly one scalar (string,
//!   number, `true`/`false`, `null`) or skip a string or container without
//!   materializing it. Strings and numbers are assembled in a reusable
//!   [`ScratchBuffer`].
//! - The tree builders in `tree` recurse over arrays and objects after their
//!   opening bracket has been consumed, honoring the skip-property set.
//!
//! Every reader returns its first error to the caller without attempting
//! recovery; a failed read leaves the parser unusable for anything but
//! reporting that error.

mod buffer;
mod escape_buffer;
mod literal_buffer;
pub(crate) mod scanner;
mod tokens;
mod tree;


use std::collections::HashSet;

pub(crate) use self::scanner::Scanner;
use self::buffer::ScratchBuffer;
use crate::{
    error::{ParseError, SyntaxError},
    options::ExtractorOptions,
    source::{ByteCounter, ByteSource},
};

/// The kind of value announced by its first byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValueKind {
    String,
    Number,
    Boolean,
    Null,
    Array,
    Object,
}

impl ValueKind {
    pub(crate) fn from_byte(b: u8) -> Option<Self> {
        match b {
            b'"' => Some(Self::String),
            b'0'..=b'9' | b'-' => Some(Self::Number),
            b't' | b'f' => Some(Self::Boolean),
            b'n' => Some(Self::Null),
            b'[' => Some(Self::Array),
            b'{' => Some(Self::Object),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub(crate) struct Parser<S> {
    pub(crate) scanner: Scanner<S>,
    scratch: ScratchBuffer,
    skip_properties: HashSet<Vec<u8>>,
}

impl<S: ByteSource> Parser<S> {
    pub(crate) fn new(source: S, options: &ExtractorOptions, counter: ByteCounter) -> Self {
        Self {
            scanner: Scanner::new(source, counter),
            scratch: ScratchBuffer::with_capacity(options.scratch_capacity),
            skip_properties: options
                .skip_properties
                .iter()
                .map(|name| name.as_bytes().to_vec())
                .collect(),
        }
    }

    /// Classifies the first byte of a value.
    pub(crate) fn kind_of(&self, first: u8) -> Result<ValueKind, ParseError> {
        ValueKind::from_byte(first)
            .ok_or_else(|| self.scanner.error(SyntaxError::InvalidValueStart(first)))
    }

    /// The raw content of the most recently read string or number.
    pub(crate) fn scratch_bytes(&self) -> &[u8] {
        self.scratch.as_bytes()
    }

    fn scratch_text(&self) -> Result<String, ParseError> {
        self.scratch.to_text().map_err(|err| self.scanner.error(err))
    }

    fn is_skipped(&self, name: &[u8]) -> bool {
        self.skip_properties.contains(name)
    }
}
