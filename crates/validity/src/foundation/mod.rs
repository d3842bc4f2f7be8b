//! Core rule types and traits
//!
//! This module contains the fundamental building blocks of the rule system:
//!
//! - **Parsing**: [`RuleSpec`] turns `"between:3,6"` into a name and arguments
//! - **Traits**: [`Rule`], implemented by every per-kind rule set
//! - **Errors**: [`RuleError`], [`SchemaError`], [`TranslateError`]
//!
//! # Architecture
//!
//! ## 1. Resolve once, check many times
//!
//! Rule strings are parsed and resolved against a kind's rule set when a
//! schema is compiled. An unknown name or a malformed argument surfaces
//! there, before any data is seen:
//!
//! ```rust,ignore
//! let err = Validator::new([FieldSpec::int("age").rule("between:3")]).unwrap_err();
//! assert_eq!(err.code(), "RULE_ARITY");
//! ```
//!
//! ## 2. Two kinds of "wrong"
//!
//! Configuration errors are `Err` values from compilation. A value that
//! fails a well-formed rule is an ordinary outcome and shows up in
//! [`Results`](crate::engine::Results) under the rule's source text.

pub mod error;
pub mod spec;
pub mod traits;

pub use error::{RuleError, SchemaError, TranslateError};
pub use spec::RuleSpec;
pub use traits::Rule;

/// Common imports for implementing rule sets.
pub mod prelude {
    pub use super::{Rule, RuleError, RuleSpec, SchemaError, TranslateError};
}
