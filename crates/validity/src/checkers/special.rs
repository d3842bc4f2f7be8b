//! Special rules: identifiers with checksums, fixed-format dates and
//! length-bounded email addresses

use std::collections::HashSet;

use chrono::{NaiveDate, NaiveDateTime};

use crate::checkers::checksum;
use crate::checkers::text::is_email_shape;
use crate::config::ValidatorConfig;
use crate::foundation::{Rule, RuleError, RuleSpec};
use crate::value::FieldKind;

/// `DD.MM.YYYY`
pub const SHORT_DATE_FORMAT: &str = "%d.%m.%Y";
/// `DD.MM.YYYYTHH:MM:SS`
pub const LONG_DATE_FORMAT: &str = "%d.%m.%YT%H:%M:%S";

/// Rules available to `Special` fields.
///
/// Values captured from [`ValidatorConfig`] at compile time (country list,
/// reference year, email bounds) are frozen into the rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecialRule {
    /// Bank account number.
    Iban { countries: HashSet<String> },
    /// Company fiscal code.
    Cif,
    /// Personal numeric code.
    Cnp { reference_year: i32, min_age: i32 },
    ShortDate,
    LongDate,
    /// Email shape with a length bound in chars.
    Email { min_len: usize, max_len: usize },
}

impl Rule for SpecialRule {
    type Input = str;
    const KIND: FieldKind = FieldKind::Special;

    fn compile(spec: &RuleSpec, config: &ValidatorConfig) -> Result<Self, RuleError> {
        let rule = match spec.key() {
            "iban" => Self::Iban {
                countries: config
                    .bank_account_countries
                    .iter()
                    .map(|c| c.to_ascii_uppercase())
                    .collect(),
            },
            "cif" => Self::Cif,
            "cnp" => Self::Cnp {
                reference_year: config.reference_year(),
                min_age: config.personal_id_min_age,
            },
            "shortdate" => Self::ShortDate,
            "longdate" => Self::LongDate,
            "email" => Self::Email {
                min_len: config.email_min_len,
                max_len: config.email_max_len,
            },
            _ => return Err(RuleError::unknown(Self::KIND, spec)),
        };
        spec.expect_arity(0)?;
        Ok(rule)
    }

    fn check(&self, input: &str) -> bool {
        match self {
            Self::Iban { countries } => checksum::iban(input, |c| countries.contains(c)),
            Self::Cif => checksum::cif(input),
            Self::Cnp {
                reference_year,
                min_age,
            } => checksum::cnp(input, *reference_year, *min_age),
            Self::ShortDate => NaiveDate::parse_from_str(input, SHORT_DATE_FORMAT).is_ok(),
            Self::LongDate => NaiveDateTime::parse_from_str(input, LONG_DATE_FORMAT).is_ok(),
            Self::Email { min_len, max_len } => {
                let len = input.chars().count();
                (*min_len..=*max_len).contains(&len) && is_email_shape(input)
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
