//! Error types for character sources

use thiserror::Error;

/// Errors that can occur while reading from a character source
#[derive(Error, Debug)]
pub enum ReaderError {
    /// Operation on a closed source
    #[error("Stream closed")]
    Closed,

    /// Buffer window outside the destination buffer
    #[error("Index out of bounds: offset {offset}, count {count}, buffer length {len}")]
    OutOfBounds {
        /// Requested start offset into the buffer
        offset: usize,
        /// Requested number of characters
        count: usize,
        /// Actual buffer length
        len: usize,
    },

    /// Failure of an underlying streaming source
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
