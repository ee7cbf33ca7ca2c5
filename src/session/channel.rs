//! Channel boundary
//!
//! The transport (SSH or otherwise) lives outside this crate; the core only
//! sees a connected, authenticated virtual-terminal channel through this
//! trait. Implementations must be callable from two threads: the ingest
//! thread blocks in `read_chunk` while the session thread writes keystrokes
//! and resizes.

use std::io;

use thiserror::Error;

/// Errors surfaced by a transport channel.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("channel I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("channel closed")]
    ChannelClosed,

    #[error("remote signalled end of stream")]
    EndOfStream,

    #[error("session is not connected")]
    NotConnected,

    #[error("channel does not support resize")]
    ResizeUnsupported,
}

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// A connected interactive terminal channel.
pub trait SessionChannel: Send + Sync {
    /// Block until data is available and read it into `buf`. Returns the
    /// number of bytes read; `Ok(0)` means the remote ended the stream.
    fn read_chunk(&self, buf: &mut [u8]) -> TransportResult<usize>;

    /// Write all of `data` to the remote.
    fn write_all(&self, data: &[u8]) -> TransportResult<()>;

    /// Tell the remote pseudo-terminal its new size.
    fn resize(&self, cols: u16, rows: u16) -> TransportResult<()>;

    /// Close the channel. Must unblock a pending `read_chunk`.
    fn close(&self);
}
