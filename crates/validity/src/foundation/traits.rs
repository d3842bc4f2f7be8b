//! Core traits for the rule system
//!
//! Every field kind owns a closed set of rules. A rule set is a type
//! implementing [`Rule`]: `compile` resolves a parsed [`RuleSpec`] into a
//! typed rule once, when the schema is built, and `check` runs it against
//! a coerced value as many times as needed.

use crate::config::ValidatorConfig;
use crate::foundation::{RuleError, RuleSpec};
use crate::value::FieldKind;

// ============================================================================
// CORE RULE TRAIT
// ============================================================================

/// A compiled, typed validation rule.
///
/// # Examples
///
/// ```rust,ignore
/// use validity::foundation::{Rule, RuleError, RuleSpec};
///
/// enum EvenRule { Even }
///
/// impl Rule for EvenRule {
///     type Input = i64;
///     const KIND: FieldKind = FieldKind::Int;
///
///     fn compile(spec: &RuleSpec, _: &ValidatorConfig) -> Result<Self, RuleError> {
///         match spec.key() {
///             "even" => Ok(Self::Even),
///             _ => Err(RuleError::unknown(Self::KIND, spec)),
///         }
///     }
///
///     fn check(&self, input: &i64) -> bool {
///         input % 2 == 0
///     }
/// }
/// ```
pub trait Rule: Sized + Send + Sync {
    /// The coerced value this rule inspects.
    ///
    /// Use `?Sized` to allow rules over `str`.
    type Input: ?Sized;

    /// The field kind this rule set belongs to.
    const KIND: FieldKind;

    /// Resolves a parsed rule string into a rule of this set.
    ///
    /// Unknown names, wrong arity and unparsable arguments are
    /// configuration errors.
    fn compile(spec: &RuleSpec, config: &ValidatorConfig) -> Result<Self, RuleError>;

    /// Returns `true` when `input` satisfies the rule.
    fn check(&self, input: &Self::Input) -> bool;
}

impl RuleError {
    /// Builds the "unknown rule" error for a rule set.
    pub fn unknown(kind: FieldKind, spec: &RuleSpec) -> Self {
        Self::Unknown {
            kind,
            rule: spec.name().to_owned(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
