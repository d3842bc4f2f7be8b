//! Configuration error types
//!
//! Everything in this module describes a *setup* mistake: a rule string
//! that cannot be parsed, a rule name the declared kind does not know, a
//! schema that names the same field twice, a locale nobody registered.
//! These are returned as `Err` from compilation and translation and are
//! never recorded as validation failures. Failures of well-formed rules
//! live in [`Results`](crate::engine::Results) as plain codes.

use crate::value::FieldKind;

// ============================================================================
// RULE ERROR
// ============================================================================

/// A single rule string could not be turned into a checkable rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    /// The rule string was empty or had an empty name (`":5"`).
    #[error("empty rule `{rule}`")]
    Empty { rule: String },

    /// The declared kind has no rule with this name.
    #[error("the {kind} checker does not have the rule `{rule}`")]
    Unknown { kind: FieldKind, rule: String },

    /// Wrong number of arguments.
    #[error("rule `{rule}` takes {expected} argument(s), got {actual}")]
    Arity {
        rule: String,
        expected: usize,
        actual: usize,
    },

    /// An argument could not be parsed into the type the rule needs.
    #[error("rule `{rule}`: argument `{argument}` is not a valid {expected}")]
    InvalidArgument {
        rule: String,
        argument: String,
        expected: &'static str,
    },

    /// Interval bounds are reversed.
    #[error("rule `{rule}`: lower bound {min} is greater than upper bound {max}")]
    InvalidRange {
        rule: String,
        min: String,
        max: String,
    },

    /// The pattern of a `regexp` rule does not compile.
    #[error("rule `{rule}`: invalid pattern: {reason}")]
    InvalidPattern { rule: String, reason: String },
}

impl RuleError {
    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Empty { .. } => "RULE_EMPTY",
            Self::Unknown { .. } => "RULE_UNKNOWN",
            Self::Arity { .. } => "RULE_ARITY",
            Self::InvalidArgument { .. } => "RULE_INVALID_ARGUMENT",
            Self::InvalidRange { .. } => "RULE_INVALID_RANGE",
            Self::InvalidPattern { .. } => "RULE_INVALID_PATTERN",
        }
    }
}

// ============================================================================
// SCHEMA ERROR
// ============================================================================

/// A field schema could not be compiled into a [`Validator`](crate::engine::Validator).
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// One of the field's rules is malformed or unknown.
    #[error("field `{field}`: {source}")]
    Rule {
        field: String,
        #[source]
        source: RuleError,
    },

    /// The same field name was declared twice.
    #[error("field `{field}` is declared more than once")]
    DuplicateField { field: String },

    /// A field type name is not one of `Int`, `Float`, `String`, `Special`.
    #[error("unknown field type `{name}`")]
    InvalidKind { name: String },

    /// A schema document could not be deserialized.
    #[error("invalid schema document: {0}")]
    Json(#[from] serde_json::Error),
}

impl SchemaError {
    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Rule { source, .. } => source.code(),
            Self::DuplicateField { .. } => "SCHEMA_DUPLICATE_FIELD",
            Self::InvalidKind { .. } => "SCHEMA_INVALID_KIND",
            Self::Json(_) => "SCHEMA_JSON",
        }
    }

    /// The field the error belongs to, if any.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Rule { field, .. } | Self::DuplicateField { field } => Some(field),
            Self::InvalidKind { .. } | Self::Json(_) => None,
        }
    }
}

// ============================================================================
// TRANSLATE ERROR
// ============================================================================

/// Translation could not run.
#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    /// No locale table is registered under this tag or alias.
    #[error("the language `{locale}` is not supported")]
    UnsupportedLocale { locale: String },

    /// A locale table document could not be deserialized.
    #[error("invalid locale table: {0}")]
    InvalidTable(#[from] serde_json::Error),
}

impl TranslateError {
    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnsupportedLocale { .. } => "TRANSLATE_UNSUPPORTED_LOCALE",
            Self::InvalidTable(_) => "TRANSLATE_INVALID_TABLE",
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
