//! Ingest loop
//!
//! One background thread per session. It blocks in the channel read, hands
//! every chunk to the pending-input queue, and exits after pushing a single
//! `Disconnected` marker when the channel errors or ends. It never touches
//! the screen: all mutation stays on the render thread.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use tracing::debug;

use super::channel::SessionChannel;
use super::queue::{IngestEvent, IngestQueue};

const READ_BUFFER_SIZE: usize = 8192;

/// Spawn the ingest thread for a session.
pub(crate) fn spawn(
    channel: Arc<dyn SessionChannel>,
    queue: Arc<IngestQueue>,
    stopping: Arc<AtomicBool>,
) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("hawser-ingest".to_string())
        .spawn(move || run(channel.as_ref(), &queue, &stopping))
}

fn run(channel: &dyn SessionChannel, queue: &IngestQueue, stopping: &Arc<AtomicBool>) {
    let mut buf = [0u8; READ_BUFFER_SIZE];

    loop {
        match channel.read_chunk(&mut buf) {
            Ok(0) => {
                debug!("channel reached end of stream");
                break;
            }
            Ok(n) => {
                queue.push(IngestEvent::Data(buf[..n].to_vec()));
            }
            Err(err) => {
                // During an orderly close the read unblocks with an error;
                // that is expected and not worth a log line.
                if !stopping.load(Ordering::SeqCst) {
                    debug!(error = %err, "channel read failed");
                }
                break;
            }
        }
    }

    queue.push(IngestEvent::Disconnected);
}
