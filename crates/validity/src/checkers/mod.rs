//! Per-kind rule sets
//!
//! Each field kind owns a closed rule enum:
//!
//! - **Int**: [`IntRule`] over `i64`
//! - **Float**: [`FloatRule`] over `f64`
//! - **Text**: [`TextRule`] over `str`
//! - **Special**: [`SpecialRule`] over `str` (checksums, dates)
//!
//! A [`Guard`] holds the compiled rules of one field and reports every rule
//! a value fails, in declaration order.
//!
//! Intervals are inclusive unless the rule name ends in `_strict`.

pub mod checksum;
pub mod float;
pub mod int;
pub mod special;
pub mod text;

use std::fmt::Display;
use std::str::FromStr;

use crate::config::ValidatorConfig;
use crate::foundation::{Rule, RuleError, RuleSpec};

pub use float::FloatRule;
pub use int::IntRule;
pub use special::SpecialRule;
pub use text::TextRule;

// ============================================================================
// GUARD
// ============================================================================

/// The compiled rule list of one field.
#[derive(Debug, Clone)]
pub struct Guard<R> {
    rules: Vec<(String, R)>,
}

impl<R: Rule> Guard<R> {
    /// Compiles every spec against the rule set `R`.
    pub fn compile<'a, I>(specs: I, config: &ValidatorConfig) -> Result<Self, RuleError>
    where
        I: IntoIterator<Item = &'a RuleSpec>,
    {
        let rules = specs
            .into_iter()
            .map(|spec| Ok((spec.source().to_owned(), R::compile(spec, config)?)))
            .collect::<Result<Vec<_>, RuleError>>()?;
        Ok(Self { rules })
    }

    /// Runs every rule and returns the source text of each one that failed.
    ///
    /// Never stops at the first failure.
    pub fn failures(&self, input: &R::Input) -> Vec<String> {
        self.rules
            .iter()
            .filter(|(_, rule)| !rule.check(input))
            .map(|(code, _)| code.clone())
            .collect()
    }

    /// Number of compiled rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

// ============================================================================
// SHARED HELPERS
// ============================================================================

/// A closed (`strict == false`) or open (`strict == true`) interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval<T> {
    pub min: T,
    pub max: T,
    pub strict: bool,
}

impl<T: PartialOrd + Copy> Interval<T> {
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        if self.strict {
            value > self.min && value < self.max
        } else {
            value >= self.min && value <= self.max
        }
    }
}

impl<T: PartialOrd + Copy + FromStr + Display> Interval<T> {
    /// Reads a two-argument interval rule such as `between:a,b`.
    pub(crate) fn from_spec(
        spec: &RuleSpec,
        strict: bool,
        expected: &'static str,
    ) -> Result<Self, RuleError> {
        spec.expect_arity(2)?;
        let min: T = spec.parse_arg(0, expected)?;
        let max: T = spec.parse_arg(1, expected)?;
        if min > max {
            return Err(RuleError::InvalidRange {
                rule: spec.source().to_owned(),
                min: min.to_string(),
                max: max.to_string(),
            });
        }
        Ok(Self { min, max, strict })
    }
}

/// Number of decimal digits in `value`. Zero has one digit.
#[inline]
pub fn digit_count(value: u64) -> u32 {
    value.checked_ilog10().map_or(1, |log| log + 1)
}
