//! Validation outcomes

use indexmap::IndexMap;
use serde::Serialize;

use crate::value::{FieldKind, TypedValue};

/// The outcome for one field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldResult {
    pub kind: FieldKind,
    pub is_valid: bool,
    /// Failure codes in rule order: the rule's source text, `"required"`,
    /// `"Int"` or `"Float"`.
    pub errors: Vec<String>,
    /// The coerced value; present only when the field is valid and was
    /// supplied.
    pub value: Option<TypedValue>,
}

impl FieldResult {
    pub(crate) fn valid(kind: FieldKind, value: TypedValue) -> Self {
        Self {
            kind,
            is_valid: true,
            errors: Vec::new(),
            value: Some(value),
        }
    }

    pub(crate) fn absent(kind: FieldKind) -> Self {
        Self {
            kind,
            is_valid: true,
            errors: Vec::new(),
            value: None,
        }
    }

    pub(crate) fn invalid(kind: FieldKind, errors: Vec<String>) -> Self {
        Self {
            kind,
            is_valid: false,
            errors,
            value: None,
        }
    }
}

/// Per-field outcomes in declaration order.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use validity::engine::{FieldSpec, Validator};
///
/// let validator = Validator::new([
///     FieldSpec::int("age").rule("between:18,65"),
///     FieldSpec::text("email").rule("email"),
/// ])
/// .unwrap();
///
/// let results = validator.validate(&json!({ "age": "70", "email": "ion@firma.ro" }));
/// assert!(!results.is_valid());
/// assert_eq!(results.errors("age"), ["between:18,65"]);
/// assert_eq!(results.value("email").and_then(|v| v.as_text()), Some("ion@firma.ro"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Results {
    fields: IndexMap<String, FieldResult>,
}

impl Results {
    pub(crate) fn from_fields(fields: IndexMap<String, FieldResult>) -> Self {
        Self { fields }
    }

    /// `true` when every field is valid.
    pub fn is_valid(&self) -> bool {
        self.fields.values().all(|field| field.is_valid)
    }

    pub fn field(&self, name: &str) -> Option<&FieldResult> {
        self.fields.get(name)
    }

    /// Failure codes of one field; empty for unknown names.
    pub fn errors(&self, name: &str) -> &[String] {
        self.fields
            .get(name)
            .map(|field| field.errors.as_slice())
            .unwrap_or_default()
    }

    pub fn value(&self, name: &str) -> Option<&TypedValue> {
        self.fields.get(name).and_then(|field| field.value.as_ref())
    }

    /// Failure codes of every field that has any.
    pub fn error_map(&self) -> IndexMap<&str, &[String]> {
        self.fields
            .iter()
            .filter(|(_, field)| !field.errors.is_empty())
            .map(|(name, field)| (name.as_str(), field.errors.as_slice()))
            .collect()
    }

    /// Coerced values of every valid, supplied field.
    pub fn data(&self) -> IndexMap<&str, &TypedValue> {
        self.fields
            .iter()
            .filter_map(|(name, field)| Some((name.as_str(), field.value.as_ref()?)))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldResult)> {
        self.fields.iter().map(|(name, field)| (name.as_str(), field))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<'a> IntoIterator for &'a Results {
    type Item = (&'a String, &'a FieldResult);
    type IntoIter = indexmap::map::Iter<'a, String, FieldResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
