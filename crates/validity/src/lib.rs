//! # validity
//!
//! Declarative field validation driven by rule strings.
//!
//! ## Quick Start
//!
//! ```
//! use serde_json::json;
//! use validity::prelude::*;
//!
//! let validator = Validator::new([
//!     FieldSpec::int("age").rules(["min:18", "max:120"]),
//!     FieldSpec::special("cnp").rule("cnp"),
//!     FieldSpec::text("email").rule("email").optional(),
//! ])
//! .unwrap();
//!
//! let results = validator.validate(&json!({ "age": "17", "cnp": "1851021345131" }));
//! assert!(!results.is_valid());
//! assert_eq!(results.errors("age"), ["min:18"]);
//! assert!(results.field("email").unwrap().is_valid);
//!
//! let messages = Catalog::builtin().translate(&results, "ro").unwrap();
//! assert_eq!(messages["age"], ["Trebuie să fie un număr întreg mai mare sau egal cu 18"]);
//! ```
//!
//! ## Field Kinds
//!
//! - **Int**: `min`, `max`, `between`, `between_strict`, `digits`, `digits_between`, `accepted`
//! - **Float**: as Int, digit rules count the integer part
//! - **String**: lengths, `regexp`, `email`, `url`, `ip`, `ipv4`, `ipv6`, character classes
//! - **Special**: `iban`, `cif`, `cnp`, `short_date`, `long_date`, `email`
//!
//! Rule names ignore case and underscores. A rule a kind does not know is
//! a [`SchemaError`](foundation::SchemaError) when the validator is built,
//! never a validation failure.

pub mod checkers;
pub mod config;
pub mod engine;
pub mod foundation;
pub mod prelude;
pub mod translate;
pub mod value;

pub use config::ValidatorConfig;
pub use engine::{FieldResult, FieldSpec, Results, Validator, validate_map};
pub use foundation::{RuleError, SchemaError, TranslateError};
pub use translate::{Catalog, LocaleTable};
pub use value::{FieldKind, TypedValue};
