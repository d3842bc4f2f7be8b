//! Schema compilation and evaluation
//!
//! A schema is a list of [`FieldSpec`]s. [`Validator`] compiles it once and
//! then evaluates any [`DataSource`], producing [`Results`]:
//!
//! 1. absent (missing key or `null`): `"required"`, or nothing when optional
//! 2. coercion to the field's kind: `"Int"` / `"Float"` on failure, and no
//!    rule runs
//! 3. every rule, in order; each failing rule is recorded by its source text
//!
//! Fields never affect each other. [`Validator::validate_parallel`] spreads
//! them over scoped threads and returns the same [`Results`].

mod field;
mod results;
mod source;
mod validator;

pub use field::{FieldSpec, REQUIRED};
pub use results::{FieldResult, Results};
pub use source::DataSource;
pub use validator::{Validator, validate_map};
