use crate::error::SyntaxError;

/// Growable accumulator for the bytes of the token currently being read.
///
/// The buffer is reused for every string and number token of a scan. Its
/// capacity doubles whenever an append would overflow and is never released,
/// so a long scan settles on a buffer as large as its largest token.
#[derive(Debug)]
pub(crate) struct ScratchBuffer {
    data: Vec<u8>,
}

impl ScratchBuffer {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity.max(1)),
        }
    }

    /// Empties the buffer, keeping its capacity.
    pub(crate) fn reset(&mut self) {
        self.data.clear();
    }

    pub(crate) fn push(&mut self, byte: u8) {
        self.ensure_headroom(1);
        self.data.push(byte);
    }

    /// Appends the UTF-8 encoding of `ch`.
    pub(crate) fn push_char(&mut self, ch: char) {
        let mut utf8 = [0; 4];
        let encoded = ch.encode_utf8(&mut utf8);
        self.ensure_headroom(encoded.len());
        self.data.extend_from_slice(encoded.as_bytes());
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Copies the content out as text.
    pub(crate) fn to_text(&self) -> Result<String, SyntaxError> {
        core::str::from_utf8(&self.data)
            .map(str::to_owned)
            .map_err(|_| SyntaxError::InvalidUtf8)
    }

    fn ensure_headroom(&mut self, needed: usize) {
        while self.data.capacity() - self.data.len() < needed {
            let grow_by = self.data.capacity().max(1);
            self.data.reserve_exact(grow_by);
        }
    }
}
