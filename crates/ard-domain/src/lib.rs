//! ard Domain Layer
//!
//! This crate describes the records that the deserialiser populates. It stands in
//! for runtime reflection: a target type implements [`Record`] to enumerate its
//! fields, declare the pattern each field is extracted with, and accept values
//! either by direct assignment or through a conventionally named setter.
//!
//! ## Key Concepts
//!
//! - **Field Descriptor**: name, declaring type and optional pattern of one field
//! - **Record**: a type whose fields can be enumerated and assigned by name
//! - **Setter Convention**: how a field name maps onto its fallback setter name
//!
//! ## Architecture
//!
//! - No I/O and no pattern engine
//! - Descriptors are `const`-constructible so a type's field table is `'static`
//! - Trait definitions only; the deserialiser lives in `ard-deserialiser`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod field;
pub mod record;
pub mod setter;

// Re-exports for convenience
pub use field::FieldDescriptor;
pub use record::{Record, Refused};
pub use setter::SetterConvention;
