//! Integer rules

use crate::checkers::{Interval, digit_count};
use crate::config::ValidatorConfig;
use crate::foundation::{Rule, RuleError, RuleSpec};
use crate::value::FieldKind;

/// Rules available to `Int` fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntRule {
    /// `min:x`: value ≥ x.
    Min(i64),
    /// `max:x`: value ≤ x.
    Max(i64),
    /// `between:a,b` / `between_strict:a,b` (aliases `value`, `value_strict`).
    Between(Interval<i64>),
    /// `digits:n`: exactly n decimal digits.
    Digits(u32),
    /// `digits_between:a,b` / `digits_between_strict:a,b`.
    DigitsBetween(Interval<u32>),
    /// `accepted`: value > 0.
    Accepted,
}

impl Rule for IntRule {
    type Input = i64;
    const KIND: FieldKind = FieldKind::Int;

    fn compile(spec: &RuleSpec, _config: &ValidatorConfig) -> Result<Self, RuleError> {
        let rule = match spec.key() {
            "min" => {
                spec.expect_arity(1)?;
                Self::Min(spec.parse_arg(0, "integer")?)
            }
            "max" => {
                spec.expect_arity(1)?;
                Self::Max(spec.parse_arg(0, "integer")?)
            }
            "between" | "value" => Self::Between(Interval::from_spec(spec, false, "integer")?),
            "betweenstrict" | "valuestrict" => {
                Self::Between(Interval::from_spec(spec, true, "integer")?)
            }
            "digits" => {
                spec.expect_arity(1)?;
                Self::Digits(spec.parse_arg(0, "digit count")?)
            }
            "digitsbetween" => {
                Self::DigitsBetween(Interval::from_spec(spec, false, "digit count")?)
            }
            "digitsbetweenstrict" => {
                Self::DigitsBetween(Interval::from_spec(spec, true, "digit count")?)
            }
            "accepted" => {
                spec.expect_arity(0)?;
                Self::Accepted
            }
            _ => return Err(RuleError::unknown(Self::KIND, spec)),
        };
        Ok(rule)
    }

    fn check(&self, input: &i64) -> bool {
        let value = *input;
        match self {
            Self::Min(min) => value >= *min,
            Self::Max(max) => value <= *max,
            Self::Between(interval) => interval.contains(value),
            Self::Digits(n) => digit_count(value.unsigned_abs()) == *n,
            Self::DigitsBetween(interval) => interval.contains(digit_count(value.unsigned_abs())),
            Self::Accepted => value > 0,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
