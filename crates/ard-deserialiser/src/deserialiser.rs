//! Core Deserialiser implementation

use crate::config::DeserialiserConfig;
use crate::error::DeserialiserError;
use crate::resolve::ResolvedField;
use ard_domain::{FieldDescriptor, Record, Refused};
use ard_io::{drain, CharSource, ChunkReader};
use std::sync::OnceLock;
use tracing::{debug, info, trace, warn};

type Factory<E> = Box<dyn Fn() -> Result<E, String> + Send + Sync>;

/// The Deserialiser turns text into a sequence of `E` records
///
/// Each chunk drained from the source produces one record with exactly one
/// field populated: the field selected by the configured
/// [`FieldPolicy`](crate::FieldPolicy), holding the first match of its
/// effective pattern.
pub struct Deserialiser<E> {
    factory: Factory<E>,
    config: DeserialiserConfig,
    resolved: OnceLock<ResolvedField>,
}

impl<E> Deserialiser<E>
where
    E: Record + Default + 'static,
{
    /// Create a Deserialiser that starts every record from `E::default()`
    pub fn new() -> Self {
        Self::with_factory(E::default)
    }
}

impl<E> Default for Deserialiser<E>
where
    E: Record + Default + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Record + 'static> Deserialiser<E> {
    /// Create a Deserialiser that starts every record from `factory()`
    pub fn with_factory<F>(factory: F) -> Self
    where
        F: Fn() -> E + Send + Sync + 'static,
    {
        Self::with_fallible_factory(move || Ok(factory()))
    }

    /// Create a Deserialiser whose record factory may fail
    ///
    /// A factory error aborts the run with [`DeserialiserError::Construction`].
    pub fn with_fallible_factory<F>(factory: F) -> Self
    where
        F: Fn() -> Result<E, String> + Send + Sync + 'static,
    {
        Self {
            factory: Box::new(factory),
            config: DeserialiserConfig::default(),
            resolved: OnceLock::new(),
        }
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: DeserialiserConfig) -> Result<Self, DeserialiserError> {
        config.validate().map_err(DeserialiserError::Config)?;
        self.config = config;
        self.resolved = OnceLock::new();
        Ok(self)
    }

    /// Current configuration
    pub fn config(&self) -> &DeserialiserConfig {
        &self.config
    }

    /// Deserialise every chunk of `text`
    ///
    /// Empty text yields no records. Any failure aborts the whole run.
    pub fn match_text(&self, text: &str) -> Result<Vec<E>, DeserialiserError> {
        if let Some(max) = self.config.max_text_length {
            let len = text.chars().count();
            if len > max {
                return Err(DeserialiserError::TextTooLong(len, max));
            }
        }

        let reader = ChunkReader::new(text);
        self.match_source(&reader)
    }

    /// Deserialise chunks from `source` until it stops being ready
    pub fn match_source<S>(&self, source: &S) -> Result<Vec<E>, DeserialiserError>
    where
        S: CharSource + ?Sized,
    {
        info!("Starting deserialisation into {}", E::type_name());

        let mut records = Vec::new();
        while source.ready()? {
            let search_space = drain(source)?;
            if search_space.is_empty() {
                warn!("Source reported ready but yielded no characters, stopping");
                break;
            }

            debug!(
                "Processing chunk {} ({} chars)",
                records.len() + 1,
                search_space.chars().count()
            );
            records.push(self.match_single(&search_space)?);
        }

        info!("Deserialisation complete: {} records", records.len());
        Ok(records)
    }

    /// Field populated by this Deserialiser, resolved on first use and cached
    pub fn resolved_field(&self) -> Result<&ResolvedField, DeserialiserError> {
        if let Some(resolved) = self.resolved.get() {
            return Ok(resolved);
        }
        let resolved = ResolvedField::resolve::<E>(self.config.field_policy)?;
        Ok(self.resolved.get_or_init(|| resolved))
    }

    /// Build one record from one chunk
    fn match_single(&self, search_space: &str) -> Result<E, DeserialiserError> {
        let mut instance = (self.factory)().map_err(DeserialiserError::Construction)?;
        let field = self.resolved_field()?;

        let value = field.extract(search_space).inspect_err(|_| {
            warn!(
                "No match for field '{}' in {} char chunk",
                field.descriptor().name(),
                search_space.chars().count()
            );
        })?;

        self.assign(&mut instance, field.descriptor(), value.to_string())?;
        Ok(instance)
    }

    /// Assign directly, falling back to the conventional setter
    fn assign(
        &self,
        instance: &mut E,
        field: &FieldDescriptor,
        value: String,
    ) -> Result<(), DeserialiserError> {
        let Err(Refused(value)) = instance.assign(field.name(), value) else {
            return Ok(());
        };

        let setter = self.config.setter_convention.setter_name(field.name());
        trace!("Field '{}' not assignable, trying setter '{}'", field.name(), setter);

        if instance.invoke_setter(&setter, value).is_err() {
            warn!("Unable to set field '{}' of {}", field.name(), field.declaring_type());
            return Err(DeserialiserError::Unassignable {
                field: field.name(),
                setter,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldPolicy;

    #[derive(Debug, Default)]
    struct Line {
        text: String,
    }

    impl Record for Line {
        fn fields() -> &'static [FieldDescriptor] {
            const FIELDS: &[FieldDescriptor] = &[FieldDescriptor::new("text", "Line").with_pattern("")];
            FIELDS
        }

        fn assign(&mut self, field: &str, value: String) -> Result<(), Refused> {
            match field {
                "text" => {
                    self.text = value;
                    Ok(())
                }
                _ => Err(Refused(value)),
            }
        }
    }

    #[test]
    fn test_match_empty_text() {
        let deserialiser = Deserialiser::<Line>::new();
        assert!(deserialiser.match_text("").unwrap().is_empty());
    }

    #[test]
    fn test_match_whole_text() {
        let deserialiser = Deserialiser::<Line>::new();
        let records = deserialiser.match_text("all of it").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].text, "all of it");
    }

    #[test]
    fn test_text_too_long() {
        let deserialiser = Deserialiser::<Line>::new()
            .with_config(DeserialiserConfig {
                max_text_length: Some(3),
                ..Default::default()
            })
            .unwrap();
        assert!(matches!(
            deserialiser.match_text("four"),
            Err(DeserialiserError::TextTooLong(4, 3))
        ));
        assert_eq!(deserialiser.match_text("ółw").unwrap()[0].text, "ółw");
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = Deserialiser::<Line>::new().with_config(DeserialiserConfig {
            max_text_length: Some(0),
            ..Default::default()
        });
        assert!(matches!(result, Err(DeserialiserError::Config(_))));
    }

    #[test]
    fn test_resolved_field_is_cached() {
        let deserialiser = Deserialiser::<Line>::new();
        let first = deserialiser.resolved_field().unwrap() as *const ResolvedField;
        let second = deserialiser.resolved_field().unwrap() as *const ResolvedField;
        assert_eq!(first, second);
    }

    #[test]
    fn test_with_config_discards_cached_field() {
        let deserialiser = Deserialiser::<Line>::new();
        deserialiser.resolved_field().unwrap();
        let deserialiser = deserialiser
            .with_config(DeserialiserConfig {
                field_policy: FieldPolicy::FirstWithoutPattern,
                ..Default::default()
            })
            .unwrap();
        assert!(matches!(
            deserialiser.resolved_field(),
            Err(DeserialiserError::NoEligibleField { .. })
        ));
    }

    #[test]
    fn test_factory_runs_per_record() {
        let deserialiser = Deserialiser::with_factory(|| Line {
            text: "unset".to_string(),
        });
        let records = deserialiser.match_text("set").unwrap();
        assert_eq!(records[0].text, "set");
    }

    #[test]
    fn test_construction_error() {
        let deserialiser =
            Deserialiser::<Line>::with_fallible_factory(|| Err("no default line".to_string()));
        let err = deserialiser.match_text("text").unwrap_err();
        assert!(matches!(err, DeserialiserError::Construction(ref msg) if msg == "no default line"));
    }
}
