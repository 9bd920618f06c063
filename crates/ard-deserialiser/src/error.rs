//! Error types for the Deserialiser

use crate::config::FieldPolicy;
use ard_io::ReaderError;
use thiserror::Error;

/// Errors that abort a deserialisation run
#[derive(Error, Debug)]
pub enum DeserialiserError {
    /// Failure reading the text source
    #[error("Reader error: {0}")]
    Reader(#[from] ReaderError),

    /// The target type has no field the selection policy can pick
    #[error("No field of {type_name} is eligible under {policy:?}")]
    NoEligibleField {
        /// Target type
        type_name: &'static str,
        /// Policy that found nothing
        policy: FieldPolicy,
    },

    /// A declared pattern does not compile
    #[error("Invalid pattern for field '{field}': {source}")]
    InvalidPattern {
        /// Field declaring the pattern
        field: &'static str,
        /// Compilation failure
        source: regex::Error,
    },

    /// The effective pattern has no match in the chunk
    #[error("Pattern '{pattern}' for field '{field}' found no match")]
    PatternNotFound {
        /// Field being populated
        field: &'static str,
        /// Effective pattern that was searched for
        pattern: String,
    },

    /// Direct assignment was refused and no setter accepted the value
    #[error("Unable to set field '{field}': not assignable and no setter '{setter}'")]
    Unassignable {
        /// Field being populated
        field: &'static str,
        /// Setter name tried as fallback
        setter: String,
    },

    /// The record factory failed
    #[error("Construction error: {0}")]
    Construction(String),

    /// Text exceeds maximum length
    #[error("Text too long: {0} chars (max: {1})")]
    TextTooLong(usize, usize),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
