//! Field declarations and their compiled form

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::checkers::{FloatRule, Guard, IntRule, SpecialRule, TextRule};
use crate::config::ValidatorConfig;
use crate::engine::FieldResult;
use crate::foundation::{RuleError, RuleSpec, SchemaError};
use crate::value::{self, CoercionFailure, FieldKind, TypedValue};

/// Failure code recorded for a required field that is absent.
pub const REQUIRED: &str = "required";

const OPTIONAL: &str = "optional";

// ============================================================================
// FIELD SPEC
// ============================================================================

/// A field declaration: name, kind and rule strings.
///
/// Fields are required unless marked optional, either with
/// [`optional`](Self::optional) or by listing `"optional"` among the rules.
/// When both `"required"` and `"optional"` appear, the last one wins.
///
/// # Examples
///
/// ```
/// use validity::engine::FieldSpec;
///
/// let age = FieldSpec::int("age").rules(["min:18", "max:120"]);
/// let note = FieldSpec::text("note").rule("max:200").optional();
/// assert!(note.is_optional());
/// assert_eq!(age.rule_strings(), ["min:18", "max:120"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    name: String,
    #[serde(alias = "type")]
    kind: FieldKind,
    #[serde(default)]
    rules: Vec<String>,
    #[serde(default)]
    optional: bool,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            rules: Vec::new(),
            optional: false,
        }
    }

    pub fn int(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Int)
    }

    pub fn float(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Float)
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Text)
    }

    pub fn special(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Special)
    }

    /// Appends one rule string.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule(mut self, rule: impl Into<String>) -> Self {
        self.rules.push(rule.into());
        self
    }

    /// Appends several rule strings.
    #[must_use = "builder methods must be chained or built"]
    pub fn rules<I, S>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rules.extend(rules.into_iter().map(Into::into));
        self
    }

    /// Absence is not a failure.
    #[must_use = "builder methods must be chained or built"]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn rule_strings(&self) -> &[String] {
        &self.rules
    }

    /// Whether the declaration itself is marked optional. Presence markers
    /// in the rule list are applied at compile time.
    pub fn is_optional(&self) -> bool {
        self.optional
    }
}

// ============================================================================
// COMPILED FIELD
// ============================================================================

/// The rule list of one field, resolved against its kind.
#[derive(Debug, Clone)]
pub(crate) enum FieldGuard {
    Int(Guard<IntRule>),
    Float(Guard<FloatRule>),
    Text(Guard<TextRule>),
    Special(Guard<SpecialRule>),
}

impl FieldGuard {
    fn compile(
        kind: FieldKind,
        specs: &[RuleSpec],
        config: &ValidatorConfig,
    ) -> Result<Self, RuleError> {
        Ok(match kind {
            FieldKind::Int => Self::Int(Guard::compile(specs, config)?),
            FieldKind::Float => Self::Float(Guard::compile(specs, config)?),
            FieldKind::Text => Self::Text(Guard::compile(specs, config)?),
            FieldKind::Special => Self::Special(Guard::compile(specs, config)?),
        })
    }

    /// Coerces `raw` to the guarded kind and runs every rule on it.
    fn run(&self, raw: &Value) -> Result<(TypedValue, Vec<String>), CoercionFailure> {
        Ok(match self {
            Self::Int(guard) => {
                let value = value::coerce_int(raw)?;
                (TypedValue::Int(value), guard.failures(&value))
            }
            Self::Float(guard) => {
                let value = value::coerce_float(raw)?;
                (TypedValue::Float(value), guard.failures(&value))
            }
            Self::Text(guard) => {
                let value = value::text_form(raw);
                let failures = guard.failures(&value);
                (TypedValue::Text(value.into_owned()), failures)
            }
            Self::Special(guard) => {
                let value = value::text_form(raw);
                let failures = guard.failures(&value);
                (TypedValue::Text(value.into_owned()), failures)
            }
        })
    }
}

/// A field ready to evaluate.
#[derive(Debug, Clone)]
pub(crate) struct CompiledField {
    pub(crate) spec: FieldSpec,
    required: bool,
    guard: FieldGuard,
}

impl CompiledField {
    pub(crate) fn compile(spec: FieldSpec, config: &ValidatorConfig) -> Result<Self, SchemaError> {
        let wrap = |source: RuleError| SchemaError::Rule {
            field: spec.name.clone(),
            source,
        };

        let mut required = !spec.optional;
        let mut checks = Vec::with_capacity(spec.rules.len());
        for rule in &spec.rules {
            let parsed = RuleSpec::parse(rule).map_err(wrap)?;
            match parsed.key() {
                REQUIRED | OPTIONAL => {
                    parsed.expect_arity(0).map_err(wrap)?;
                    required = parsed.key() == REQUIRED;
                }
                _ => checks.push(parsed),
            }
        }

        let guard = FieldGuard::compile(spec.kind, &checks, config).map_err(wrap)?;
        Ok(Self {
            spec,
            required,
            guard,
        })
    }

    pub(crate) fn name(&self) -> &str {
        &self.spec.name
    }

    /// Evaluates one raw value. `None` and JSON `null` mean absent.
    pub(crate) fn evaluate(&self, raw: Option<&Value>) -> FieldResult {
        let kind = self.spec.kind;
        let raw = match raw {
            Some(Value::Null) | None => {
                return if self.required {
                    FieldResult::invalid(kind, vec![REQUIRED.to_owned()])
                } else {
                    FieldResult::absent(kind)
                };
            }
            Some(raw) => raw,
        };

        match self.guard.run(raw) {
            Err(failure) => FieldResult::invalid(kind, vec![failure.code().to_owned()]),
            Ok((value, errors)) if errors.is_empty() => FieldResult::valid(kind, value),
            Ok((_, errors)) => FieldResult::invalid(kind, errors),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn compile(spec: FieldSpec) -> CompiledField {
        CompiledField::compile(spec, &ValidatorConfig::default()).unwrap()
    }

    #[test]
    fn deserializes_with_defaults() {
        let spec: FieldSpec =
            serde_json::from_value(json!({ "name": "age", "kind": "Integer" })).unwrap();
        assert_eq!(spec, FieldSpec::int("age"));
    }

    #[test]
    fn presence_markers_are_not_dispatched() {
        let field = compile(FieldSpec::int("age").rules(["optional", "min:3"]));
        assert!(!field.required);

        let field = compile(FieldSpec::int("age").optional().rules(["optional", "required"]));
        assert!(field.required);
    }

    #[test]
    fn absent_values() {
        let required = compile(FieldSpec::int("age"));
        assert_eq!(required.evaluate(None).errors, vec!["required"]);
        assert_eq!(required.evaluate(Some(&Value::Null)).errors, vec!["required"]);

        let optional = compile(FieldSpec::int("age").optional());
        let result = optional.evaluate(None);
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
        assert_eq!(result.value, None);
    }

    #[test]
    fn coercion_failure_skips_rules() {
        let field = compile(FieldSpec::int("age").rules(["min:3", "max:1"]));
        let result = field.evaluate(Some(&json!("Not A Number!")));
        assert_eq!(result.errors, vec!["Int"]);
        assert_eq!(result.value, None);
    }

    #[test]
    fn all_failures_are_collected() {
        let field = compile(FieldSpec::int("age").rules(["min:50", "digits:3", "Max: 60"]));
        let result = field.evaluate(Some(&json!("42")));
        assert!(!result.is_valid);
        assert_eq!(result.errors, vec!["min:50", "digits:3"]);
        assert_eq!(result.value, None);

        let result = field.evaluate(Some(&json!(555)));
        assert_eq!(result.errors, vec!["Max: 60"]);
    }

    #[test]
    fn valid_value_is_kept() {
        let field = compile(FieldSpec::float("price").rule("between:1,10"));
        let result = field.evaluate(Some(&json!("2.5")));
        assert!(result.is_valid);
        assert_eq!(result.value, Some(TypedValue::Float(2.5)));
    }

    #[test]
    fn rule_errors_name_the_field() {
        let err = CompiledField::compile(
            FieldSpec::text("name").rule("cnp"),
            &ValidatorConfig::default(),
        )
        .unwrap_err();
        assert_eq!(err.field(), Some("name"));
        assert_eq!(err.code(), "RULE_UNKNOWN");

        let err = CompiledField::compile(
            FieldSpec::text("name").rule("required:yes"),
            &ValidatorConfig::default(),
        )
        .unwrap_err();
        assert_eq!(err.code(), "RULE_ARITY");
    }
}
