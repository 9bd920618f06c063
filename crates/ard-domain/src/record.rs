//! The record capability interface
//!
//! Implemented by every type the deserialiser produces.

use crate::FieldDescriptor;

/// A value handed back by a record that would not accept it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Refused(pub String);

impl Refused {
    /// Recover the refused value
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// A type whose fields can be enumerated and populated by name
///
/// # Examples
///
/// ```
/// use ard_domain::{FieldDescriptor, Record, Refused};
///
/// #[derive(Default)]
/// struct Reference {
///     code: String,
/// }
///
/// impl Record for Reference {
///     fn fields() -> &'static [FieldDescriptor] {
///         const FIELDS: &[FieldDescriptor] =
///             &[FieldDescriptor::new("code", "Reference").with_pattern("[A-Z]{3}-[0-9]+")];
///         FIELDS
///     }
///
///     fn assign(&mut self, field: &str, value: String) -> Result<(), Refused> {
///         match field {
///             "code" => {
///                 self.code = value;
///                 Ok(())
///             }
///             _ => Err(Refused(value)),
///         }
///     }
/// }
///
/// let mut reference = Reference::default();
/// assert!(reference.assign("code", "ABC-42".to_string()).is_ok());
/// assert_eq!(reference.code, "ABC-42");
/// ```
pub trait Record {
    /// Fields eligible for population, in declaration order
    fn fields() -> &'static [FieldDescriptor];

    /// Assign `value` directly to `field`
    ///
    /// Returns the value inside [`Refused`] when the field is unknown or not
    /// directly assignable, which sends the caller to the setter fallback.
    fn assign(&mut self, field: &str, value: String) -> Result<(), Refused>;

    /// Invoke the setter named `setter` with `value`
    ///
    /// The default implementation has no setters.
    fn invoke_setter(&mut self, setter: &str, value: String) -> Result<(), Refused> {
        let _ = setter;
        Err(Refused(value))
    }

    /// Type name used in diagnostics
    fn type_name() -> &'static str {
        std::any::type_name::<Self>()
    }
}
