//! Threaded delivery of extracted items.
use std::{io, thread};

use crossbeam_channel::{Receiver, Sender, bounded};
use tracing::debug;

use crate::{
    extractor::{Extractor, Item},
    source::{ByteCounter, ByteSource},
};

const TARGET: &str = "jsonpluck::stream";

/// Items produced by a scan running on its own thread.
///
/// The scan stays at most
/// [`queue_capacity`](crate::ExtractorOptions::queue_capacity) items ahead
/// of the consumer. Dropping the stream disconnects the queue, and the
/// scanning thread stops at its next attempt to deliver an item.
#[derive(Debug)]
pub struct ItemStream {
    receiver: Receiver<Item>,
    counter: ByteCounter,
}

impl ItemStream {
    /// Bytes consumed by the scanning thread so far.
    #[must_use]
    pub fn bytes_read(&self) -> u64 {
        self.counter.get()
    }

    /// A shareable handle on the scanning thread's byte counter.
    #[must_use]
    pub fn byte_counter(&self) -> ByteCounter {
        self.counter.clone()
    }
}

impl Iterator for ItemStream {
    type Item = Item;

    fn next(&mut self) -> Option<Item> {
        self.receiver.recv().ok()
    }
}

impl<S: ByteSource + Send + 'static> Extractor<S> {
    /// Moves the scan onto a new thread and returns the receiving end.
    ///
    /// # Errors
    ///
    /// Fails only if the thread cannot be spawned.
    pub fn stream(self) -> io::Result<ItemStream> {
        let capacity = self.options().queue_capacity;
        let (sender, receiver) = bounded(capacity);
        let counter = self.byte_counter();
        thread::Builder::new()
            .name("jsonpluck-extract".into())
            .spawn(move || produce(self, &sender))?;
        debug!(target: TARGET, capacity, "spawned extraction thread");
        Ok(ItemStream { receiver, counter })
    }
}

fn produce<S: ByteSource>(extractor: Extractor<S>, sender: &Sender<Item>) {
    for item in extractor {
        if sender.send(item).is_err() {
            debug!(target: TARGET, "consumer disconnected, stopping extraction");
            return;
        }
    }
    debug!(target: TARGET, "extraction thread finished");
}
