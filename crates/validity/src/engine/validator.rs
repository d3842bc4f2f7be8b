//! The evaluation orchestrator

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use indexmap::IndexMap;
use parking_lot::Mutex;

use crate::config::ValidatorConfig;
use crate::engine::field::CompiledField;
use crate::engine::{DataSource, FieldResult, FieldSpec, Results};
use crate::foundation::SchemaError;

/// A compiled schema.
///
/// Every rule string is resolved once, in [`with_config`](Self::with_config).
/// After that, validation cannot fail: bad data only ever shows up in the
/// returned [`Results`].
#[derive(Debug, Clone)]
pub struct Validator {
    fields: Vec<CompiledField>,
    config: ValidatorConfig,
}

impl Validator {
    /// Compiles `fields` with the default configuration.
    pub fn new(fields: impl IntoIterator<Item = FieldSpec>) -> Result<Self, SchemaError> {
        Self::with_config(fields, ValidatorConfig::default())
    }

    /// Compiles `fields`, stopping at the first configuration error.
    pub fn with_config(
        fields: impl IntoIterator<Item = FieldSpec>,
        config: ValidatorConfig,
    ) -> Result<Self, SchemaError> {
        let mut seen = HashSet::new();
        let fields = fields
            .into_iter()
            .map(|spec| {
                if !seen.insert(spec.name().to_owned()) {
                    return Err(SchemaError::DuplicateField {
                        field: spec.name().to_owned(),
                    });
                }
                CompiledField::compile(spec, &config)
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(fields = fields.len(), "validator compiled");
        Ok(Self { fields, config })
    }

    /// Compiles a JSON array of field declarations.
    ///
    /// ```
    /// use validity::{ValidatorConfig, engine::Validator};
    ///
    /// let schema = r#"[
    ///     { "name": "cnp", "kind": "Special", "rules": ["cnp"] },
    ///     { "name": "age", "kind": "Int", "rules": ["min:18"], "optional": true }
    /// ]"#;
    /// let validator = Validator::from_json(schema, ValidatorConfig::default()).unwrap();
    /// assert_eq!(validator.fields().count(), 2);
    /// ```
    pub fn from_json(schema: &str, config: ValidatorConfig) -> Result<Self, SchemaError> {
        let fields: Vec<FieldSpec> = serde_json::from_str(schema)?;
        Self::with_config(fields, config)
    }

    /// The declarations, in order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().map(|field| &field.spec)
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validates every declared field against `data`, in declaration order.
    pub fn validate<D: DataSource + ?Sized>(&self, data: &D) -> Results {
        let results = self
            .fields
            .iter()
            .map(|field| (field.name().to_owned(), evaluate(field, data)))
            .collect();
        finish(results)
    }

    /// Validates on up to `workers` scoped threads.
    ///
    /// `0` means [`ValidatorConfig::workers`]. The outcome is identical to
    /// [`validate`](Self::validate), including field order.
    pub fn validate_parallel<D>(&self, data: &D, workers: usize) -> Results
    where
        D: DataSource + Sync + ?Sized,
    {
        let workers = match workers {
            0 => self.config.workers(),
            n => n,
        };
        let workers = workers.min(self.fields.len());

        if workers <= 1 {
            return self.validate(data);
        }

        let cursor = AtomicUsize::new(0);
        let sink: Mutex<Vec<Option<FieldResult>>> = Mutex::new(vec![None; self.fields.len()]);

        std::thread::scope(|scope| {
            for _ in 0..workers {
                scope.spawn(|| {
                    loop {
                        let index = cursor.fetch_add(1, Ordering::Relaxed);
                        let Some(field) = self.fields.get(index) else {
                            break;
                        };
                        let result = evaluate(field, data);
                        sink.lock()[index] = Some(result);
                    }
                });
            }
        });

        let results = self
            .fields
            .iter()
            .zip(sink.into_inner())
            .map(|(field, result)| {
                let result = result.unwrap_or_else(|| evaluate(field, data));
                (field.name().to_owned(), result)
            })
            .collect();
        finish(results)
    }
}

fn evaluate<D: DataSource + ?Sized>(field: &CompiledField, data: &D) -> FieldResult {
    let result = field.evaluate(data.get_raw(field.name()));
    tracing::trace!(
        field = field.name(),
        valid = result.is_valid,
        errors = ?result.errors,
        "field evaluated"
    );
    result
}

fn finish(fields: IndexMap<String, FieldResult>) -> Results {
    let results = Results::from_fields(fields);
    tracing::debug!(
        fields = results.len(),
        valid = results.is_valid(),
        "validation finished"
    );
    results
}

/// Compiles `fields` and validates `data` in one call.
///
/// ```
/// use serde_json::json;
/// use validity::engine::{FieldSpec, validate_map};
///
/// let results = validate_map(
///     &json!({ "cif": "13880063" }),
///     [FieldSpec::special("cif").rule("cif")],
/// )
/// .unwrap();
/// assert!(results.is_valid());
/// ```
pub fn validate_map<D: DataSource + ?Sized>(
    data: &D,
    fields: impl IntoIterator<Item = FieldSpec>,
) -> Result<Results, SchemaError> {
    Ok(Validator::new(fields)?.validate(data))
}
