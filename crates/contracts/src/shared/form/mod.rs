//! Form schema and validation for node configuration forms
//!
//! A schema declares which fields a form has and what value kind each field
//! must hold. Validation is a plain function over the schema and the current
//! values; it has no dependency on any particular UI layer.

mod field_kind;
mod schema;
mod validation;

pub use field_kind::FieldKind;
pub use schema::{FieldSpec, FormSchema};
pub use validation::{validate, FieldError};

/// Current values of one form instance, keyed by field name
pub type FormValues = serde_json::Map<String, serde_json::Value>;
