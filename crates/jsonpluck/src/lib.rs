//! Single-pass extraction of one named property from a JSON byte stream.
//!
//! Point an [`Extractor`] at a byte source and name a loop property; every
//! occurrence of that property, at any depth, is materialized as a [`Value`]
//! while the rest of the document is scanned past without being built. A
//! matched array yields each of its elements as a separate item. Property
//! names in the skip set are scanned but never materialized.
//!
//! Items can be pulled on the calling thread (the extractor is an
//! [`Iterator`]), collected in one go with [`Extractor::collect_all`], or
//! produced on a background thread with [`Extractor::stream`]. All three
//! deliver the same sequence: the values in document order, ending with a
//! [`ParseError`] if the input was malformed.
//!
//! ```rust
//! use jsonpluck::{Extractor, ExtractorOptions};
//!
//! let input = br#"{"page": 1, "items": [{"id": "a"}, {"id": "b"}]}"#;
//! let ids: Vec<String> = Extractor::from_slice(input, ExtractorOptions::new("items"))
//!     .map(|item| item.unwrap().get("id").unwrap().to_string())
//!     .collect();
//! assert_eq!(ids, [r#""a""#, r#""b""#]);
//! ```

mod error;
mod extractor;
mod options;
mod parser;
mod source;
mod stream;
mod value;

#[cfg(test)]
mod tests;

pub use error::{ParseError, SyntaxError};
pub use extractor::{Extractor, Item};
pub use options::{DEFAULT_QUEUE_CAPACITY, DEFAULT_SCRATCH_CAPACITY, ExtractorOptions};
pub use source::{ByteCounter, ByteSource, ReaderSource, SliceSource};
pub use stream::ItemStream;
pub use value::{Array, Map, Value};
