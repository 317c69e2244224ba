//! The document scanner.
//!
//! [`Extractor`] walks the input once, looking for quoted property names at
//! any depth. When a name equals the loop property its value is materialized
//! and yielded; an array value yields each of its elements instead. Every
//! other value is scanned past, with strings skipped explicitly so that their
//! content can never be mistaken for a property name.
//!
//! The extractor is a plain [`Iterator`]; batch collection and the threaded
//! streaming mode are both built on top of it.
use core::iter::FusedIterator;
use std::io::BufRead;

use bstr::{BString, ByteSlice};
use tracing::{debug, trace};

use crate::{
    error::ParseError,
    options::ExtractorOptions,
    parser::{Parser, ValueKind},
    source::{ByteCounter, ByteSource, ReaderSource, SliceSource},
    value::Value,
};

pub(crate) const TARGET: &str = "jsonpluck::extract";

/// One extracted value, or the error that ended the scan.
pub type Item = Result<Value, ParseError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Free scan for the loop property.
    Document,
    /// Inside a matched array, yielding its elements.
    LoopArray,
    /// Root-list mode, between root values.
    Root,
    Done,
}

/// Pull-driven extractor of every value stored under one property name.
///
/// # Examples
///
/// ```
/// use jsonpluck::{Extractor, ExtractorOptions, Value};
///
/// let json = br#"{"meta": {"n": 2}, "rows": [{"id": 1}, {"id": 2, "blob": "..."}]}"#;
/// let options = ExtractorOptions::new("rows").skip(["blob"]);
/// let rows: Vec<Value> = Extractor::from_slice(json, options)
///     .collect::<Result<_, _>>()
///     .unwrap();
///
/// assert_eq!(rows.len(), 2);
/// assert_eq!(rows[1].to_string(), r#"{"id":2}"#);
/// ```
#[derive(Debug)]
pub struct Extractor<S> {
    parser: Parser<S>,
    loop_property: BString,
    options: ExtractorOptions,
    state: State,
    started: bool,
}

impl<S: ByteSource> Extractor<S> {
    /// Creates an extractor reading from `source`. Nothing is read until the
    /// first item is requested.
    #[must_use]
    pub fn new(source: S, options: ExtractorOptions) -> Self {
        let parser = Parser::new(source, &options, ByteCounter::default());
        let state = if options.is_root_list() {
            State::Root
        } else {
            State::Document
        };
        Self {
            parser,
            loop_property: BString::from(options.loop_property.as_bytes()),
            options,
            state,
            started: false,
        }
    }

    /// The options this extractor was built with.
    #[must_use]
    pub fn options(&self) -> &ExtractorOptions {
        &self.options
    }

    /// Bytes consumed from the source so far.
    #[must_use]
    pub fn bytes_read(&self) -> u64 {
        self.parser.scanner.bytes_read()
    }

    /// A handle on the byte counter that stays valid after the extractor has
    /// been moved, for instance into a streaming thread.
    #[must_use]
    pub fn byte_counter(&self) -> ByteCounter {
        self.parser.scanner.counter().clone()
    }

    /// Runs the scan to completion on the calling thread.
    ///
    /// The returned list ends with the error item if the scan failed.
    pub fn collect_all(self) -> Vec<Item> {
        let items: Vec<Item> = self.collect();
        debug!(target: TARGET, items = items.len(), "batch collection complete");
        items
    }

    fn resume_state(&self) -> State {
        if self.options.is_root_list() {
            State::Root
        } else {
            State::Document
        }
    }

    fn finish(&mut self) {
        self.state = State::Done;
        debug!(target: TARGET, bytes_read = self.bytes_read(), "scan finished");
    }

    /// Free scan up to the next match. Returns `None` after switching state.
    fn scan_document(&mut self) -> Result<Option<Value>, ParseError> {
        loop {
            let Some(b) = self.parser.scanner.next_byte()? else {
                self.finish();
                return Ok(None);
            };
            if b != b'"' || !self.parser.read_property_name()? {
                continue;
            }

            let matched = self.parser.scratch_bytes() == self.loop_property.as_slice();
            let first = self.parser.scanner.expect_non_whitespace()?;
            let kind = self.parser.kind_of(first)?;
            if !matched {
                if kind == ValueKind::String {
                    self.parser.skip_string()?;
                }
                continue;
            }

            trace!(
                target: TARGET,
                property = %self.parser.scratch_bytes().as_bstr(),
                offset = self.bytes_read(),
                "matched loop property"
            );
            if kind == ValueKind::Array {
                self.state = State::LoopArray;
                return Ok(None);
            }
            return self.parser.read_value(first).map(Some);
        }
    }

    fn next_loop_element(&mut self) -> Result<Option<Value>, ParseError> {
        loop {
            match self.parser.scanner.expect_non_whitespace()? {
                b',' => {}
                b']' => {
                    self.state = self.resume_state();
                    return Ok(None);
                }
                first => return self.parser.read_value(first).map(Some),
            }
        }
    }

    fn next_root(&mut self) -> Result<Option<Value>, ParseError> {
        let Some(first) = self.parser.scanner.skip_whitespace()? else {
            self.finish();
            return Ok(None);
        };
        if self.parser.kind_of(first)? == ValueKind::Array {
            self.state = State::LoopArray;
            return Ok(None);
        }
        self.parser.read_root_value(first).map(Some)
    }
}

impl<R: BufRead> Extractor<ReaderSource<R>> {
    /// Extracts from a buffered reader.
    pub fn from_reader(reader: R, options: ExtractorOptions) -> Self {
        Self::new(ReaderSource::new(reader), options)
    }
}

impl<'a> Extractor<SliceSource<'a>> {
    /// Extracts from an in-memory document.
    pub fn from_slice(bytes: &'a [u8], options: ExtractorOptions) -> Self {
        Self::new(SliceSource::new(bytes), options)
    }
}

impl<S: ByteSource> Iterator for Extractor<S> {
    type Item = Item;

    fn next(&mut self) -> Option<Item> {
        if !self.started {
            self.started = true;
            debug!(
                target: TARGET,
                loop_property = %self.loop_property,
                root_list = self.options.is_root_list(),
                skipped = self.options.skip_properties.len(),
                "scan started"
            );
        }
        loop {
            let step = match self.state {
                State::Done => return None,
                State::Document => self.scan_document(),
                State::LoopArray => self.next_loop_element(),
                State::Root => self.next_root(),
            };
            match step {
                Ok(Some(value)) => {
                    trace!(target: TARGET, offset = self.bytes_read(), "emitting item");
                    return Some(Ok(value));
                }
                Ok(None) => {}
                Err(err) => {
                    self.state = State::Done;
                    debug!(target: TARGET, error = %err, "scan halted");
                    return Some(Err(err));
                }
            }
        }
    }
}

impl<S: ByteSource> FusedIterator for Extractor<S> {}
