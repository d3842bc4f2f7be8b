//! Message templates for one locale

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::foundation::TranslateError;
use crate::foundation::spec::normalize;
use crate::value::FieldKind;

/// Templates that turn failure codes into sentences.
///
/// A code such as `"between:3,6"` is split on its first colon. The name is
/// looked up (case and underscores ignored) first among the templates of the
/// field's kind, then among the shared templates; when neither has it the
/// fallback is used.
///
/// Placeholders:
///
/// - `{rule}`: the rule name as written
/// - `{args}`: the arguments, joined with the locale's conjunction
///   (`"3 and 6"`)
/// - `{raw}`: the argument text exactly as written (`"3,6"`)
///
/// # Examples
///
/// ```
/// use validity::translate::LocaleTable;
/// use validity::value::FieldKind;
///
/// let table = LocaleTable::new("pirate", "an'")
///     .with_rule("between", "Keep it 'twixt {args}, matey")
///     .with_fallback("Arr, [{rule}] be broken");
///
/// assert_eq!(table.render(FieldKind::Int, "between:1,5"), "Keep it 'twixt 1 an' 5, matey");
/// assert_eq!(table.render(FieldKind::Int, "digits:3"), "Arr, [digits] be broken");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleTable {
    tag: String,
    #[serde(default)]
    aliases: Vec<String>,
    conjunction: String,
    #[serde(default)]
    rules: HashMap<String, String>,
    #[serde(default)]
    kinds: HashMap<FieldKind, HashMap<String, String>>,
    #[serde(default = "default_fallback")]
    fallback: String,
}

fn default_fallback() -> String {
    "Validation for rule [{rule}] failed".to_owned()
}

impl LocaleTable {
    pub fn new(tag: impl Into<String>, conjunction: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            aliases: Vec::new(),
            conjunction: conjunction.into(),
            rules: HashMap::new(),
            kinds: HashMap::new(),
            fallback: default_fallback(),
        }
    }

    /// Loads a table from JSON.
    ///
    /// Template keys are normalized the same way rule names are.
    pub fn from_json(json: &str) -> Result<Self, TranslateError> {
        let table: Self = serde_json::from_str(json)?;
        Ok(table.normalized())
    }

    fn normalized(mut self) -> Self {
        self.rules = self
            .rules
            .into_iter()
            .map(|(key, template)| (normalize(&key), template))
            .collect();
        for templates in self.kinds.values_mut() {
            *templates = std::mem::take(templates)
                .into_iter()
                .map(|(key, template)| (normalize(&key), template))
                .collect();
        }
        self
    }

    /// Another name this table answers to.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// A template shared by every kind.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_rule(mut self, rule: &str, template: impl Into<String>) -> Self {
        self.rules.insert(normalize(rule), template.into());
        self
    }

    /// A template used only for fields of `kind`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_kind_rule(mut self, kind: FieldKind, rule: &str, template: impl Into<String>) -> Self {
        self.kinds
            .entry(kind)
            .or_default()
            .insert(normalize(rule), template.into());
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_fallback(mut self, template: impl Into<String>) -> Self {
        self.fallback = template.into();
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Whether `name` is this table's tag or one of its aliases,
    /// ignoring case.
    pub fn answers_to(&self, name: &str) -> bool {
        let name = name.trim();
        self.tag.eq_ignore_ascii_case(name)
            || self.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name))
    }

    /// The template for a rule, if the table has one.
    pub fn template(&self, kind: FieldKind, rule: &str) -> Option<&str> {
        let key = normalize(rule);
        self.kinds
            .get(&kind)
            .and_then(|templates| templates.get(&key))
            .or_else(|| self.rules.get(&key))
            .map(String::as_str)
    }

    /// Renders one failure code. Unknown rules use the fallback.
    pub fn render(&self, kind: FieldKind, code: &str) -> String {
        let (rule, raw) = split_code(code);
        let template = self.template(kind, rule).unwrap_or_else(|| {
            tracing::warn!(locale = %self.tag, rule, "no message for rule, using fallback");
            self.fallback.as_str()
        });
        self.fill(template, rule, raw)
    }

    fn fill(&self, template: &str, rule: &str, raw: &str) -> String {
        let separator = format!(" {} ", self.conjunction);
        let args = raw
            .split(',')
            .map(str::trim)
            .collect::<Vec<_>>()
            .join(&separator);
        template
            .replace("{rule}", rule)
            .replace("{args}", &args)
            .replace("{raw}", raw)
    }
}

fn split_code(code: &str) -> (&str, &str) {
    let code = code.trim();
    match code.split_once(':') {
        Some((rule, raw)) => (rule.trim(), raw.trim()),
        None => (code, ""),
    }
}
