//! Float rules

use crate::checkers::{Interval, digit_count};
use crate::config::ValidatorConfig;
use crate::foundation::{Rule, RuleError, RuleSpec};
use crate::value::FieldKind;

/// Rules available to `Float` fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FloatRule {
    Min(f64),
    Max(f64),
    /// `between:a,b` / `between_strict:a,b` (aliases `value`, `value_strict`).
    Between(Interval<f64>),
    /// Digit count of the integer part.
    Digits(u32),
    DigitsBetween(Interval<u32>),
    /// `accepted`: value > 0.
    Accepted,
}

impl Rule for FloatRule {
    type Input = f64;
    const KIND: FieldKind = FieldKind::Float;

    fn compile(spec: &RuleSpec, _config: &ValidatorConfig) -> Result<Self, RuleError> {
        let rule = match spec.key() {
            "min" => {
                spec.expect_arity(1)?;
                Self::Min(finite_arg(spec, 0)?)
            }
            "max" => {
                spec.expect_arity(1)?;
                Self::Max(finite_arg(spec, 0)?)
            }
            "between" | "value" => Self::Between(finite_interval(spec, false)?),
            "betweenstrict" | "valuestrict" => Self::Between(finite_interval(spec, true)?),
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

    fn check(&self, input: &f64) -> bool {
        let value = *input;
        match self {
            Self::Min(min) => value >= *min,
            Self::Max(max) => value <= *max,
            Self::Between(interval) => interval.contains(value),
            Self::Digits(n) => integer_digits(value) == *n,
            Self::DigitsBetween(interval) => interval.contains(integer_digits(value)),
            Self::Accepted => value > 0.0,
        }
    }
}

fn finite_arg(spec: &RuleSpec, index: usize) -> Result<f64, RuleError> {
    let value: f64 = spec.parse_arg(index, "finite number")?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RuleError::InvalidArgument {
            rule: spec.source().to_owned(),
            argument: spec.args()[index].clone(),
            expected: "finite number",
        })
    }
}

fn finite_interval(spec: &RuleSpec, strict: bool) -> Result<Interval<f64>, RuleError> {
    let interval = Interval::from_spec(spec, strict, "finite number")?;
    finite_arg(spec, 0)?;
    finite_arg(spec, 1)?;
    Ok(interval)
}

/// Digit count of `|trunc(value)|`.
fn integer_digits(value: f64) -> u32 {
    let integer = value.abs().trunc();
    if integer < u64::MAX as f64 {
        digit_count(integer as u64)
    } else {
        format!("{integer:.0}").len() as u32
    }
}

// ============================================================================
// TESTS
// ============================================================================
