//! Text rules
//!
//! Lengths are counted in Unicode scalar values, not bytes.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;

use crate::checkers::Interval;
use crate::config::ValidatorConfig;
use crate::foundation::{Rule, RuleError, RuleSpec};
use crate::value::FieldKind;

/// Timestamp part of a `date` value, as in `Jan 2, 2006 at 3:04pm (MST)`.
pub const DATE_FORMAT: &str = "%b %d, %Y at %I:%M%p";

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^.+@.+\..+$").unwrap());

/// `local@domain.tld` shape check shared with the Special `email` rule.
pub(crate) fn is_email_shape(input: &str) -> bool {
    EMAIL_REGEX.is_match(input)
}

/// Rules available to `String` fields.
#[derive(Debug, Clone)]
pub enum TextRule {
    /// `min:n` / `min_len:n`
    MinLen(usize),
    /// `max:n` / `max_len:n`
    MaxLen(usize),
    /// `len:n`
    Len(usize),
    /// `between:a,b` / `between_strict:a,b` over the length.
    Between(Interval<usize>),
    /// `regexp:pattern`, anchored at both ends.
    Pattern(Regex),
    Email,
    Ipv4,
    Ipv6,
    Ip,
    /// Absolute URL, or an absolute path as sent in a request line.
    Url,
    Alpha,
    AlphaNum,
    AlphaDash,
    FullName,
    /// `yes`, `on` or `1`.
    Accepted,
    /// A timestamp followed by a zone abbreviation in parentheses.
    Date,
}

impl Rule for TextRule {
    type Input = str;
    const KIND: FieldKind = FieldKind::Text;

    fn compile(spec: &RuleSpec, _config: &ValidatorConfig) -> Result<Self, RuleError> {
        let rule = match spec.key() {
            "min" | "minlen" => {
                spec.expect_arity(1)?;
                Self::MinLen(spec.parse_arg(0, "length")?)
            }
            "max" | "maxlen" => {
                spec.expect_arity(1)?;
                Self::MaxLen(spec.parse_arg(0, "length")?)
            }
            "len" => {
                spec.expect_arity(1)?;
                Self::Len(spec.parse_arg(0, "length")?)
            }
            "between" => Self::Between(Interval::from_spec(spec, false, "length")?),
            "betweenstrict" => Self::Between(Interval::from_spec(spec, true, "length")?),
            "regexp" | "regex" => Self::Pattern(anchored(spec)?),
            other => {
                let rule = match other {
                    "email" => Self::Email,
                    "ipv4" => Self::Ipv4,
                    "ipv6" => Self::Ipv6,
                    "ip" => Self::Ip,
                    "url" => Self::Url,
                    "alpha" => Self::Alpha,
                    "alphanum" => Self::AlphaNum,
                    "alphadash" => Self::AlphaDash,
                    "fullname" => Self::FullName,
                    "accepted" => Self::Accepted,
                    "date" => Self::Date,
                    _ => return Err(RuleError::unknown(Self::KIND, spec)),
                };
                spec.expect_arity(0)?;
                rule
            }
        };
        Ok(rule)
    }

    fn check(&self, input: &str) -> bool {
        match self {
            Self::MinLen(min) => input.chars().count() >= *min,
            Self::MaxLen(max) => input.chars().count() <= *max,
            Self::Len(len) => input.chars().count() == *len,
            Self::Between(interval) => interval.contains(input.chars().count()),
            Self::Pattern(pattern) => pattern.is_match(input),
            Self::Email => is_email_shape(input),
            Self::Ipv4 => input.parse::<Ipv4Addr>().is_ok(),
            Self::Ipv6 => input.parse::<Ipv6Addr>().is_ok(),
            Self::Ip => input.parse::<IpAddr>().is_ok(),
            Self::Url => is_request_uri(input),
            Self::Alpha => input.chars().all(|c| c.is_ascii_alphabetic()),
            Self::AlphaNum => input.chars().all(|c| c.is_ascii_alphanumeric()),
            Self::AlphaDash => input
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-'),
            Self::FullName => input
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c.is_ascii_whitespace() || c == '.'),
            Self::Accepted => matches!(input, "yes" | "on" | "1"),
            Self::Date => is_zoned_date(input),
        }
    }
}

fn anchored(spec: &RuleSpec) -> Result<Regex, RuleError> {
    let raw = spec.expect_raw()?;
    Regex::new(&format!("^(?:{raw})$")).map_err(|err| RuleError::InvalidPattern {
        rule: spec.source().to_owned(),
        reason: err.to_string(),
    })
}

fn is_request_uri(input: &str) -> bool {
    if input.starts_with('/') {
        return !input.chars().any(char::is_whitespace);
    }
    url::Url::parse(input).is_ok()
}

fn is_zoned_date(input: &str) -> bool {
    let Some((stamp, zone)) = input
        .strip_suffix(')')
        .and_then(|rest| rest.rsplit_once(" ("))
    else {
        return false;
    };
    (3..=5).contains(&zone.len())
        && zone.bytes().all(|b| b.is_ascii_uppercase())
        && NaiveDateTime::parse_from_str(stamp, DATE_FORMAT).is_ok()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn compile(rule: &str) -> Result<TextRule, RuleError> {
        TextRule::compile(&RuleSpec::parse(rule).unwrap(), &ValidatorConfig::default())
    }

    fn check(rule: &str, value: &str) -> bool {
        compile(rule).unwrap().check(value)
    }

    #[rstest]
    #[case("min:3", "abc", true)]
    #[case("min_len:4", "abc", false)]
    #[case("max:3", "abcd", false)]
    #[case("maxLen:4", "abcd", true)]
    #[case("len:2", "ăș", true)]
    #[case("len:2", "abc", false)]
    #[case("between:2,4", "ab", true)]
    #[case("between:2,4", "abcd", true)]
    #[case("between:2,4", "a", false)]
    #[case("between_strict:2,4", "ab", false)]
    #[case("between_strict:2,4", "abc", true)]
    fn lengths(#[case] rule: &str, #[case] value: &str, #[case] expected: bool) {
        assert_eq!(check(rule, value), expected);
    }

    #[rstest]
    #[case(r"regexp:\d{3}", "123", true)]
    #[case(r"regexp:\d{3}", "1234", false)]
    #[case(r"regexp:\d{3}", "a123", false)]
    #[case(r"regex:a{1,2}", "aa", true)]
    #[case(r"regexp:[a-z]+|\d+", "42", true)]
    #[case(r"regexp:^\d+:\d+$", "12:30", true)]
    fn patterns_match_whole_value(#[case] rule: &str, #[case] value: &str, #[case] expected: bool) {
        assert_eq!(check(rule, value), expected);
    }

    #[test]
    fn bad_pattern_is_a_configuration_error() {
        assert_eq!(compile("regexp:(").unwrap_err().code(), "RULE_INVALID_PATTERN");
        assert_eq!(compile("regexp").unwrap_err().code(), "RULE_ARITY");
    }

    #[rstest]
    #[case("popescu@vlad.ro", true)]
    #[case("a@b.c", true)]
    #[case("popescu@vlad", false)]
    #[case("", false)]
    #[case("@vlad.ro", false)]
    fn email(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(check("email", value), expected);
    }

    #[rstest]
    #[case("ipv4", "192.168.0.1", true)]
    #[case("ipv4", "256.1.1.1", false)]
    #[case("ipv4", "::1", false)]
    #[case("ipv6", "::1", true)]
    #[case("ipv6", "2001:db8::ff00:42:8329", true)]
    #[case("ipv6", "10.0.0.1", false)]
    #[case("ip", "10.0.0.1", true)]
    #[case("ip", "fe80::1", true)]
    #[case("ip", "localhost", false)]
    fn ip_addresses(#[case] rule: &str, #[case] value: &str, #[case] expected: bool) {
        assert_eq!(check(rule, value), expected);
    }

    #[rstest]
    #[case("https://example.com/path?q=1", true)]
    #[case("ftp://files.example.com", true)]
    #[case("/relative/path", true)]
    #[case("example.com", false)]
    #[case("not a url", false)]
    #[case("", false)]
    fn urls(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(check("url", value), expected);
    }

    #[rstest]
    #[case("alpha", "Abc", true)]
    #[case("alpha", "Ab1", false)]
    #[case("alpha_num", "Ab1", true)]
    #[case("alpha_num", "Ab-1", false)]
    #[case("alpha_dash", "Ab-1_x", true)]
    #[case("alpha_dash", "Ab 1", false)]
    #[case("full_name", "Ion I. Popescu", true)]
    #[case("full_name", "Ion-Popescu", false)]
    #[case("alpha", "", true)]
    fn character_classes(#[case] rule: &str, #[case] value: &str, #[case] expected: bool) {
        assert_eq!(check(rule, value), expected);
    }

    #[rstest]
    #[case("yes", true)]
    #[case("on", true)]
    #[case("1", true)]
    #[case("no", false)]
    #[case("YES", false)]
    fn accepted(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(check("accepted", value), expected);
    }

    #[rstest]
    #[case("Jan 2, 2006 at 3:04pm (MST)", true)]
    #[case("Feb 3, 2013 at 7:54PM (PST)", true)]
    #[case("Dec 31, 1999 at 11:59pm (EEST)", true)]
    #[case("Feb 30, 2013 at 7:54pm (PST)", false)]
    #[case("Feb 3, 2013 at 13:54pm (PST)", false)]
    #[case("Feb 3, 2013 at 7:54pm", false)]
    #[case("Feb 3, 2013 at 7:54pm (pst)", false)]
    #[case("Feb 3, 2013 at 7:54pm ()", false)]
    #[case("2013-02-03", false)]
    fn dates(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(check("date", value), expected);
    }

    #[test]
    fn configuration_errors() {
        assert_eq!(compile("cnp").unwrap_err().code(), "RULE_UNKNOWN");
        assert_eq!(compile("email:x").unwrap_err().code(), "RULE_ARITY");
        assert_eq!(compile("date:x").unwrap_err().code(), "RULE_ARITY");
        assert_eq!(compile("min:-1").unwrap_err().code(), "RULE_INVALID_ARGUMENT");
    }
}
