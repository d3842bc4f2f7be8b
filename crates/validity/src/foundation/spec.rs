//! Rule string parsing
//!
//! A rule string is either a bare name (`"email"`) or a name followed by a
//! colon and a comma-separated argument list (`"between:3, 6"`). Only the
//! first colon splits; everything after it belongs to the arguments.

use std::fmt;
use std::str::FromStr;

use crate::foundation::RuleError;

/// One parsed rule string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSpec {
    name: String,
    key: String,
    args: Vec<String>,
    raw: Option<String>,
    source: String,
}

impl RuleSpec {
    /// Parses a rule string.
    ///
    /// # Examples
    ///
    /// ```
    /// use validity::foundation::RuleSpec;
    ///
    /// let spec = RuleSpec::parse("digits_between: 2, 4").unwrap();
    /// assert_eq!(spec.key(), "digitsbetween");
    /// assert_eq!(spec.args(), ["2", "4"]);
    ///
    /// let spec = RuleSpec::parse("email").unwrap();
    /// assert!(spec.args().is_empty());
    /// ```
    pub fn parse(rule: &str) -> Result<Self, RuleError> {
        let source = rule.trim();
        let (name, raw) = match source.split_once(':') {
            Some((name, rest)) => (name.trim(), Some(rest.trim())),
            None => (source, None),
        };

        if name.is_empty() {
            return Err(RuleError::Empty {
                rule: source.to_owned(),
            });
        }

        let args = raw
            .map(|rest| rest.split(',').map(|arg| arg.trim().to_owned()).collect())
            .unwrap_or_default();

        Ok(Self {
            name: name.to_owned(),
            key: normalize(name),
            args,
            raw: raw.map(str::to_owned),
            source: source.to_owned(),
        })
    }

    /// The rule name as written.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The lookup key: lowercase, underscores removed.
    ///
    /// `digits_between`, `DigitsBetween` and `digitsBetween` share one key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Trimmed arguments, in order.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Everything after the first colon, trimmed but not split on commas.
    #[must_use]
    pub fn raw_args(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    /// The trimmed rule string. Used as the failure code.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the arguments if there are exactly `expected` of them.
    pub fn expect_arity(&self, expected: usize) -> Result<&[String], RuleError> {
        if self.args.len() == expected {
            Ok(&self.args)
        } else {
            Err(RuleError::Arity {
                rule: self.source.clone(),
                expected,
                actual: self.args.len(),
            })
        }
    }

    /// Returns the unsplit argument text, which must be present.
    pub fn expect_raw(&self) -> Result<&str, RuleError> {
        match self.raw.as_deref() {
            Some(raw) => Ok(raw),
            None => Err(RuleError::Arity {
                rule: self.source.clone(),
                expected: 1,
                actual: 0,
            }),
        }
    }

    /// Parses argument `index`; `expected` names the type for the error.
    pub fn parse_arg<T: FromStr>(&self, index: usize, expected: &'static str) -> Result<T, RuleError> {
        let argument = self.args.get(index).map_or("", String::as_str);
        argument.parse().map_err(|_| RuleError::InvalidArgument {
            rule: self.source.clone(),
            argument: argument.to_owned(),
            expected,
        })
    }
}

impl FromStr for RuleSpec {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RuleSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Normalizes a rule name into its lookup key.
pub(crate) fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}
