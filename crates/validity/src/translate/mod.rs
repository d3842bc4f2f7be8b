//! Human-readable messages for failure codes
//!
//! A [`Catalog`] holds one [`LocaleTable`] per language and is built
//! explicitly by the caller; there is no global registry.
//!
//! ```
//! use serde_json::json;
//! use validity::engine::{FieldSpec, Validator};
//! use validity::translate::Catalog;
//!
//! let validator = Validator::new([FieldSpec::int("age").rule("between:18,65")]).unwrap();
//! let results = validator.validate(&json!({ "age": 12 }));
//!
//! let messages = Catalog::builtin().translate(&results, "en").unwrap();
//! assert_eq!(
//!     messages["age"],
//!     ["It must be an integer between 18 and 65 (the boundaries are allowed)"]
//! );
//! ```

mod english;
mod romanian;
mod table;

pub use table::LocaleTable;

use indexmap::IndexMap;

use crate::engine::Results;
use crate::foundation::TranslateError;
use crate::value::FieldKind;

/// Registered locale tables.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tables: Vec<LocaleTable>,
}

impl Catalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// English (`en`, `english`) and Romanian (`ro`, `romanian`).
    pub fn builtin() -> Self {
        Self::new().with(english::table()).with(romanian::table())
    }

    /// Adds a table. A table with the same tag replaces the old one.
    pub fn register(&mut self, table: LocaleTable) {
        self.tables.retain(|existing| !existing.answers_to(table.tag()));
        self.tables.push(table);
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, table: LocaleTable) -> Self {
        self.register(table);
        self
    }

    /// Finds the table answering to `locale`, ignoring case.
    pub fn locale(&self, locale: &str) -> Result<&LocaleTable, TranslateError> {
        self.tables
            .iter()
            .find(|table| table.answers_to(locale))
            .ok_or_else(|| TranslateError::UnsupportedLocale {
                locale: locale.to_owned(),
            })
    }

    /// Tags of every registered table.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.tables.iter().map(LocaleTable::tag)
    }

    /// Renders a single failure code for a field of `kind`.
    pub fn translate_rule(
        &self,
        locale: &str,
        kind: FieldKind,
        code: &str,
    ) -> Result<String, TranslateError> {
        Ok(self.locale(locale)?.render(kind, code))
    }

    /// Renders every failure in `results`, keyed by field in declaration
    /// order. Fields without failures are left out.
    pub fn translate(
        &self,
        results: &Results,
        locale: &str,
    ) -> Result<IndexMap<String, Vec<String>>, TranslateError> {
        let table = self.locale(locale)?;
        Ok(results
            .iter()
            .filter(|(_, field)| !field.errors.is_empty())
            .map(|(name, field)| {
                let messages = field
                    .errors
                    .iter()
                    .map(|code| table.render(field.kind, code))
                    .collect();
                (name.to_owned(), messages)
            })
            .collect())
    }
}

impl Results {
    /// Shorthand for [`Catalog::translate`].
    pub fn translate(
        &self,
        catalog: &Catalog,
        locale: &str,
    ) -> Result<IndexMap<String, Vec<String>>, TranslateError> {
        catalog.translate(self, locale)
    }
}

// ============================================================================
// TESTS
// ============================================================================
