//! Field selection and pattern resolution

use crate::config::FieldPolicy;
use crate::error::DeserialiserError;
use ard_domain::{FieldDescriptor, Record};
use regex::Regex;
use tracing::debug;

/// Pattern used when a field declares none: spans the whole search space, line breaks included
pub const MATCH_EVERYTHING: &str = "(?s).*";

/// The field a deserialiser populates, with its compiled effective pattern
#[derive(Debug, Clone)]
pub struct ResolvedField {
    descriptor: FieldDescriptor,
    pattern: Regex,
}

impl ResolvedField {
    /// Select the field of `E` under `policy` and compile its effective pattern
    pub(crate) fn resolve<E: Record>(policy: FieldPolicy) -> Result<Self, DeserialiserError> {
        let descriptor = select_field(E::fields(), policy).ok_or_else(|| {
            DeserialiserError::NoEligibleField {
                type_name: E::type_name(),
                policy,
            }
        })?;

        let source = match policy {
            FieldPolicy::FirstWithPattern => {
                descriptor.effective_pattern().unwrap_or(MATCH_EVERYTHING)
            }
            FieldPolicy::FirstWithoutPattern => MATCH_EVERYTHING,
        };
        let pattern = Regex::new(source).map_err(|source| DeserialiserError::InvalidPattern {
            field: descriptor.name(),
            source,
        })?;

        debug!(
            "Resolved field '{}' of {} with pattern '{}'",
            descriptor.name(),
            descriptor.declaring_type(),
            pattern.as_str()
        );

        Ok(Self {
            descriptor: *descriptor,
            pattern,
        })
    }

    /// Descriptor of the selected field
    pub fn descriptor(&self) -> &FieldDescriptor {
        &self.descriptor
    }

    /// Effective pattern source
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Leftmost-first match of the effective pattern in `search_space`
    pub(crate) fn extract<'t>(&self, search_space: &'t str) -> Result<&'t str, DeserialiserError> {
        self.pattern
            .find(search_space)
            .map(|m| m.as_str())
            .ok_or_else(|| DeserialiserError::PatternNotFound {
                field: self.descriptor.name(),
                pattern: self.pattern.as_str().to_string(),
            })
    }
}

fn select_field(fields: &[FieldDescriptor], policy: FieldPolicy) -> Option<&FieldDescriptor> {
    match policy {
        FieldPolicy::FirstWithPattern => fields.iter().find(|field| field.has_pattern()),
        FieldPolicy::FirstWithoutPattern => fields.iter().find(|field| !field.has_pattern()),
    }
}
