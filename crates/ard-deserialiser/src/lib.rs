//! ard Deserialiser
//!
//! Extracts structured records from unstructured text by mapping pattern
//! matches onto record fields.
//!
//! # Overview
//!
//! A [`Deserialiser`] repeatedly drains the next chunk from a character
//! source, creates a fresh record, selects the field to populate, finds the
//! first match of that field's pattern in the chunk, and assigns the matched
//! text. A field without a pattern (or with an empty one) captures the whole
//! chunk.
//!
//! # Architecture
//!
//! ```text
//! Text → ChunkReader → chunk → ResolvedField (pattern) → Record::assign / setter → Vec<E>
//! ```
//!
//! # Key Features
//!
//! - **Compile-time record description**: types implement [`Record`] instead of being reflected on
//! - **Setter fallback**: refused assignments retry through a conventionally named setter
//! - **Two selection policies**: see [`FieldPolicy`]
//! - **Fail-fast**: any error aborts the run; no partial results
//!
//! # Example Usage
//!
//! ```
//! use ard_deserialiser::{Deserialiser, FieldDescriptor, Record, Refused};
//!
//! #[derive(Default)]
//! struct Palindrome {
//!     value: String,
//! }
//!
//! impl Record for Palindrome {
//!     fn fields() -> &'static [FieldDescriptor] {
//!         const FIELDS: &[FieldDescriptor] =
//!             &[FieldDescriptor::new("value", "Palindrome").with_pattern("a.*a")];
//!         FIELDS
//!     }
//!
//!     fn assign(&mut self, field: &str, value: String) -> Result<(), Refused> {
//!         match field {
//!             "value" => {
//!                 self.value = value;
//!                 Ok(())
//!             }
//!             _ => Err(Refused(value)),
//!         }
//!     }
//! }
//!
//! let deserialiser = Deserialiser::<Palindrome>::new();
//! let records = deserialiser.match_text("zzzabccbazzz")?;
//!
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].value, "abccba");
//! # Ok::<(), ard_deserialiser::DeserialiserError>(())
//! ```

#![warn(missing_docs)]

mod config;
mod deserialiser;
mod error;
mod resolve;


pub use config::{DeserialiserConfig, FieldPolicy};
pub use deserialiser::Deserialiser;
pub use error::DeserialiserError;
pub use resolve::{ResolvedField, MATCH_EVERYTHING};

pub use ard_domain::{FieldDescriptor, Record, Refused, SetterConvention};
pub use ard_io::{CharSource, ChunkReader, ReaderError};
