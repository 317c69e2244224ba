//! Byte sources consumed by the scanner.
//!
//! The extractor reads its input one byte at a time and occasionally needs to
//! put the last byte back (for example after seeing the `,` that ends a
//! number). [`ByteSource`] captures exactly that contract; [`ReaderSource`]
//! provides it on top of any [`BufRead`], and [`SliceSource`] over an
//! in-memory buffer.
use std::{
    io::{self, BufRead},
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
};

/// A sequential source of bytes with a single level of pushback.
pub trait ByteSource {
    /// Reads the next byte, or `Ok(None)` once the input is exhausted.
    ///
    /// # Errors
    ///
    /// Any I/O error of the underlying source.
    fn read_byte(&mut self) -> io::Result<Option<u8>>;

    /// Undoes the most recent successful [`read_byte`](Self::read_byte), so
    /// the same byte is returned again by the next read.
    ///
    /// # Errors
    ///
    /// Fails when there is no byte to put back.
    fn unread_byte(&mut self) -> io::Result<()>;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        (**self).read_byte()
    }

    fn unread_byte(&mut self) -> io::Result<()> {
        (**self).unread_byte()
    }
}

fn nothing_to_unread() -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, "no byte available to unread")
}

/// Adapts any [`BufRead`] into a [`ByteSource`].
///
/// The last byte read is remembered so that it can be replayed once.
///
/// ```
/// use jsonpluck::{ByteSource, ReaderSource};
///
/// let mut src = ReaderSource::new(&b"ab"[..]);
/// assert_eq!(src.read_byte().unwrap(), Some(b'a'));
/// src.unread_byte().unwrap();
/// assert_eq!(src.read_byte().unwrap(), Some(b'a'));
/// assert_eq!(src.read_byte().unwrap(), Some(b'b'));
/// assert_eq!(src.read_byte().unwrap(), None);
/// ```
#[derive(Debug)]
pub struct ReaderSource<R> {
    inner: R,
    last: Option<u8>,
    replay: bool,
}

impl<R: BufRead> ReaderSource<R> {
    /// Wraps `inner`. Nothing is read until the first call to
    /// [`read_byte`](ByteSource::read_byte).
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            last: None,
            replay: false,
        }
    }

    /// Returns the wrapped reader. A pending pushed-back byte is lost.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: BufRead> ByteSource for ReaderSource<R> {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        if self.replay {
            self.replay = false;
            return Ok(self.last);
        }
        loop {
            let buf = match self.inner.fill_buf() {
                Ok(buf) => buf,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            };
            let Some(&byte) = buf.first() else {
                self.last = None;
                return Ok(None);
            };
            self.inner.consume(1);
            self.last = Some(byte);
            return Ok(Some(byte));
        }
    }

    fn unread_byte(&mut self) -> io::Result<()> {
        if self.replay || self.last.is_none() {
            return Err(nothing_to_unread());
        }
        self.replay = true;
        Ok(())
    }
}

/// A [`ByteSource`] over a byte slice.
#[derive(Debug, Clone)]
pub struct SliceSource<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> SliceSource<'a> {
    /// Starts reading at the beginning of `bytes`.
    #[must_use]
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    /// The bytes not read yet.
    #[must_use]
    pub fn remaining(&self) -> &'a [u8] {
        &self.bytes[self.pos..]
    }
}

impl ByteSource for SliceSource<'_> {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let byte = self.bytes.get(self.pos).copied();
        if byte.is_some() {
            self.pos += 1;
        }
        Ok(byte)
    }

    fn unread_byte(&mut self) -> io::Result<()> {
        if self.pos == 0 {
            return Err(nothing_to_unread());
        }
        self.pos -= 1;
        Ok(())
    }
}

/// Shared, monotonically advancing count of bytes consumed from a source.
///
/// Clones observe the same counter, so a handle taken before a scan starts
/// (see [`Extractor::byte_counter`](crate::Extractor::byte_counter)) can be
/// read from another thread while the scan is running.
#[derive(Debug, Clone, Default)]
pub struct ByteCounter(Arc<AtomicU64>);

impl ByteCounter {
    /// Bytes consumed so far, net of pushback.
    #[must_use]
    pub fn get(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }

    pub(crate) fn increment(&self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn decrement(&self) {
        self.0.fetch_sub(1, Ordering::Relaxed);
    }
}
