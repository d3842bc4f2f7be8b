//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use validity::prelude::*;
//! ```

// ============================================================================
// FOUNDATION: Rule trait, parsing, errors
// ============================================================================

pub use crate::foundation::{Rule, RuleError, RuleSpec, SchemaError, TranslateError};

// ============================================================================
// ENGINE: Schemas, validation, results
// ============================================================================

pub use crate::config::ValidatorConfig;
pub use crate::engine::{DataSource, FieldResult, FieldSpec, Results, Validator, validate_map};
pub use crate::value::{FieldKind, TypedValue};

// ============================================================================
// TRANSLATION
// ============================================================================

pub use crate::translate::{Catalog, LocaleTable};
