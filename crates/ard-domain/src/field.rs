//! Field descriptors

/// Metadata about one field of a [`Record`](crate::Record)
///
/// `pattern` distinguishes "not annotated" (`None`) from "annotated with an
/// empty pattern" (`Some("")`). Both resolve to the match-everything pattern
/// when the field is populated, but field selection treats them differently.
///
/// ```
/// use ard_domain::FieldDescriptor;
///
/// const VALUE: FieldDescriptor = FieldDescriptor::new("value", "Invoice").with_pattern("[0-9]+");
/// assert_eq!(VALUE.effective_pattern(), Some("[0-9]+"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldDescriptor {
    name: &'static str,
    declaring_type: &'static str,
    pattern: Option<&'static str>,
}

impl FieldDescriptor {
    /// Describe a field without a declared pattern
    pub const fn new(name: &'static str, declaring_type: &'static str) -> Self {
        Self {
            name,
            declaring_type,
            pattern: None,
        }
    }

    /// Attach the pattern that selects this field's value
    pub const fn with_pattern(mut self, pattern: &'static str) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Field name, as accepted by [`Record::assign`](crate::Record::assign)
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Name of the type that declares the field
    pub const fn declaring_type(&self) -> &'static str {
        self.declaring_type
    }

    /// Declared pattern, exactly as written
    pub const fn pattern(&self) -> Option<&'static str> {
        self.pattern
    }

    /// Whether the field carries a pattern declaration (possibly empty)
    pub const fn has_pattern(&self) -> bool {
        self.pattern.is_some()
    }

    /// Pattern to search with, or `None` when the field should capture everything
    pub fn effective_pattern(&self) -> Option<&'static str> {
        self.pattern.filter(|pattern| !pattern.is_empty())
    }
}
