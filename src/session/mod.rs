//! Live session management
//!
//! A [`Session`] owns everything one remote shell needs: the terminal
//! (parser + screen), the transport channel, the ingest thread, the
//! pending-input queue, and the resize coordinator. Ownership is explicit;
//! nothing is looked up through global state.
//!
//! Threading discipline: the ingest thread only reads the channel and
//! pushes chunks into the queue. All screen mutation and all reads for
//! rendering happen on whichever thread calls [`Session::pump`] and
//! [`Session::snapshot`], one logical render thread. The queue is the only
//! cross-thread handoff, so the grid itself needs no lock.

mod channel;
mod ingest;
mod queue;
mod resize;

#[cfg(unix)]
mod pty;

pub use channel::{SessionChannel, TransportError, TransportResult};
pub use queue::{IngestEvent, IngestQueue};
pub use resize::{FontMetrics, ResizeCoordinator};

#[cfg(unix)]
pub use pty::PtyChannel;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::core::Snapshot;
use crate::input::{encode_key, EncoderOptions, Key, Modifiers};
use crate::terminal::Terminal;

/// Session construction options.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Initial grid size
    pub cols: usize,
    pub rows: usize,
    /// Scrollback capacity in lines
    pub history_limit: usize,
    /// Pending-input queue capacity in chunks
    pub queue_capacity: usize,
    /// Key encoding configuration
    pub encoder: EncoderOptions,
    /// Floor for sizes computed from the render area
    pub min_cols: usize,
    pub min_rows: usize,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            cols: 80,
            rows: 24,
            history_limit: 10_000,
            queue_capacity: 1024,
            encoder: EncoderOptions::default(),
            min_cols: 80,
            min_rows: 24,
        }
    }
}

/// What a `pump` call observed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PumpOutcome {
    /// Bytes applied to the terminal
    pub bytes_applied: usize,
    /// A debounced resize settled and was applied
    pub resized: bool,
    /// The disconnect marker was consumed on this pump
    pub disconnected: bool,
    /// Bell events seen since the previous pump
    pub bells: u32,
}

impl PumpOutcome {
    /// Whether a repaint is warranted.
    pub fn changed(&self) -> bool {
        self.bytes_applied > 0 || self.resized || self.disconnected
    }
}

/// One live remote-shell session.
pub struct Session {
    terminal: Terminal,
    channel: Arc<dyn SessionChannel>,
    queue: Arc<IngestQueue>,
    stopping: Arc<AtomicBool>,
    ingest: Option<JoinHandle<()>>,
    resize: ResizeCoordinator,
    encoder: EncoderOptions,
    connected: bool,
}

impl Session {
    /// Start a session over a connected channel: sizes the terminal, spawns
    /// the ingest thread, and is immediately ready to pump.
    pub fn connect(
        channel: Arc<dyn SessionChannel>,
        options: SessionOptions,
    ) -> TransportResult<Self> {
        let queue = Arc::new(IngestQueue::new(options.queue_capacity));
        let stopping = Arc::new(AtomicBool::new(false));

        let ingest = ingest::spawn(
            Arc::clone(&channel),
            Arc::clone(&queue),
            Arc::clone(&stopping),
        )?;

        Ok(Self {
            terminal: Terminal::new(options.cols, options.rows, options.history_limit),
            channel,
            queue,
            stopping,
            ingest: Some(ingest),
            resize: ResizeCoordinator::new(options.min_cols, options.min_rows),
            encoder: options.encoder,
            connected: true,
        })
    }

    /// Whether the channel is still delivering data.
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// The terminal owned by this session.
    pub fn terminal(&self) -> &Terminal {
        &self.terminal
    }

    /// Block until the ingest thread has queued data, or the timeout
    /// expires. Lets a render loop idle instead of spinning.
    pub fn wait_data(&self, timeout: Duration) -> bool {
        self.queue.wait_data(timeout)
    }

    /// Drain every queued chunk into the terminal, in arrival order, and
    /// apply any settled resize. Call from the render thread on its tick.
    pub fn pump(&mut self) -> PumpOutcome {
        let mut outcome = PumpOutcome::default();

        for event in self.queue.drain() {
            match event {
                IngestEvent::Data(chunk) => {
                    self.terminal.feed(&chunk);
                    outcome.bytes_applied += chunk.len();
                }
                IngestEvent::Disconnected => {
                    if self.connected {
                        debug!("session disconnected");
                        self.connected = false;
                        outcome.disconnected = true;
                    }
                }
            }
        }

        if let Some((cols, rows)) = self.resize.poll(Instant::now()) {
            self.apply_resize(cols, rows);
            outcome.resized = true;
        }

        outcome.bells = self.terminal.take_bells();
        outcome
    }

    /// Capture the current screen for painting.
    pub fn snapshot(&self) -> Snapshot {
        self.terminal.snapshot()
    }

    /// Encode a key event and write it to the channel. Refused once the
    /// session is disconnected.
    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> TransportResult<()> {
        if !self.connected {
            return Err(TransportError::NotConnected);
        }
        let bytes = encode_key(key, modifiers, &self.encoder);
        self.channel.write_all(&bytes)
    }

    /// Write pasted text to the channel verbatim.
    pub fn send_text(&mut self, text: &str) -> TransportResult<()> {
        if !self.connected {
            return Err(TransportError::NotConnected);
        }
        self.channel.write_all(text.as_bytes())
    }

    /// Report a change of the render area in pixels. Applies immediately
    /// after a quiet period, otherwise coalesces until the debounce window
    /// elapses (`pump` picks the settled target up).
    pub fn notify_area_resized(&mut self, pixel_width: u32, pixel_height: u32, metrics: FontMetrics) {
        if let Some((cols, rows)) = self
            .resize
            .note_area(Instant::now(), pixel_width, pixel_height, metrics)
        {
            self.apply_resize(cols, rows);
        }
    }

    /// Resize channel and screen right now, bypassing the debounce.
    pub fn resize_now(&mut self, cols: usize, rows: usize) {
        self.apply_resize(cols, rows);
    }

    fn apply_resize(&mut self, cols: usize, rows: usize) {
        if cols == self.terminal.cols() && rows == self.terminal.rows() {
            return;
        }

        // Remote first, so its next output is already laid out for the new
        // grid; the local buffer resizes regardless so the emulator stays
        // internally consistent even when the remote could not be told.
        if self.connected {
            if let Err(err) = self.channel.resize(cols as u16, rows as u16) {
                warn!(error = %err, cols, rows, "channel resize failed");
            }
        }
        self.terminal.resize(cols, rows);
    }

    /// Close the session: stops the ingest thread, closes the channel, and
    /// marks the session disconnected. Idempotent.
    pub fn close(&mut self) {
        self.stopping.store(true, Ordering::SeqCst);
        self.channel.close();
        if let Some(handle) = self.ingest.take() {
            let _ = handle.join();
        }
        self.connected = false;
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.close();
    }
}
