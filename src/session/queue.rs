//! Pending-input queue
//!
//! The only state shared between the ingest thread and the render thread:
//! a bounded FIFO of raw byte chunks plus a condition variable that serves
//! as the "data available" signal. Chunks are drained strictly in arrival
//! order; terminal output is order-dependent, so reordering is never
//! acceptable.
//!
//! Overflow policy: when the queue is full the oldest *data* chunk is
//! dropped and the drop is logged at warn level, since lost output is
//! visible corruption. Disconnect markers are never dropped.

use std::collections::VecDeque;
use std::sync::{Condvar, Mutex};
use std::time::Duration;

use tracing::warn;

/// An event handed from the ingest thread to the render thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestEvent {
    /// A chunk of raw bytes read from the channel
    Data(Vec<u8>),
    /// The channel failed or ended; emitted exactly once, always last
    Disconnected,
}

#[derive(Debug, Default)]
struct Inner {
    events: VecDeque<IngestEvent>,
    dropped: u64,
}

/// Bounded FIFO of ingest events with a data-available signal.
#[derive(Debug)]
pub struct IngestQueue {
    inner: Mutex<Inner>,
    available: Condvar,
    capacity: usize,
}

impl IngestQueue {
    /// Create a queue bounded to `capacity` events.
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
            available: Condvar::new(),
            capacity: capacity.max(1),
        }
    }

    /// Push an event, applying the overflow policy, and raise the signal.
    pub fn push(&self, event: IngestEvent) {
        let mut inner = self.inner.lock().unwrap();

        if inner.events.len() >= self.capacity {
            let oldest_data = inner
                .events
                .iter()
                .position(|e| matches!(e, IngestEvent::Data(_)));
            if let Some(index) = oldest_data {
                inner.events.remove(index);
                inner.dropped += 1;
                warn!(
                    dropped_total = inner.dropped,
                    "pending-input queue full, dropping oldest chunk"
                );
            }
        }

        inner.events.push_back(event);
        drop(inner);
        self.available.notify_one();
    }

    /// Take every queued event, in arrival order.
    pub fn drain(&self) -> Vec<IngestEvent> {
        let mut inner = self.inner.lock().unwrap();
        inner.events.drain(..).collect()
    }

    /// Block until at least one event is queued or the timeout expires.
    /// Returns whether data is available.
    pub fn wait_data(&self, timeout: Duration) -> bool {
        let inner = self.inner.lock().unwrap();
        if !inner.events.is_empty() {
            return true;
        }
        let (inner, _result) = self
            .available
            .wait_timeout_while(inner, timeout, |inner| inner.events.is_empty())
            .unwrap();
        !inner.events.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().unwrap().events.is_empty()
    }

    /// Total data chunks dropped to overflow since creation.
    pub fn dropped(&self) -> u64 {
        self.inner.lock().unwrap().dropped
    }
}
