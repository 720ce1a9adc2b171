//! Plain validation of form values against a schema

use super::{FormSchema, FormValues};

/// One validation failure attached to a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn type_mismatch(field: &str, expected: &str) -> Self {
        Self {
            field: field.to_string(),
            message: format!("{} is not of {} type", field, expected),
        }
    }

    fn empty(field: &str) -> Self {
        Self {
            field: field.to_string(),
            message: format!("{} must not be empty", field),
        }
    }
}

/// Validate values against a schema, one error per failing field.
///
/// A present value of the wrong kind yields a type-mismatch error. A required
/// field that is missing or holds a blank string yields an emptiness error.
/// Keys not declared in the schema are ignored.
pub fn validate(schema: &FormSchema, values: &FormValues) -> Vec<FieldError> {
    let mut errors = Vec::new();
    for spec in schema.fields() {
        match values.get(spec.name) {
            Some(value) if !spec.kind.matches(value) => {
                errors.push(FieldError::type_mismatch(spec.name, spec.kind.as_str()));
            }
            Some(value) => {
                let blank = value.as_str().is_some_and(|s| s.trim().is_empty());
                if spec.required && blank {
                    errors.push(FieldError::empty(spec.name));
                }
            }
            None => {
                if spec.required {
                    errors.push(FieldError::empty(spec.name));
                }
            }
        }
    }
    errors
}
