//! ard I/O
//!
//! Sequential character sources for the deserialiser.
//!
//! [`ChunkReader`] wraps an in-memory string. Unlike a conventional string
//! reader, whose readiness only promises that the next read will not block,
//! [`ChunkReader::ready`] reports whether unread characters remain. That makes
//! "read while ready" a complete drain of the currently available content.
//!
//! ```
//! use ard_io::{drain, ChunkReader};
//!
//! let reader = ChunkReader::new("two words");
//! assert_eq!(drain(&reader).unwrap(), "two words");
//! assert!(!reader.ready().unwrap());
//! ```

#![warn(missing_docs)]

mod error;
mod reader;
mod source;

pub use error::ReaderError;
pub use reader::ChunkReader;
pub use source::{drain, CharSource};
