//! Form schema types

use super::FieldKind;

/// Static description of one form field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    /// Free-text field; empty value allowed
    pub const fn text(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Text,
            required: false,
        }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Schema of one form: the set of fields it binds
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormSchema {
    fields: Vec<FieldSpec>,
}

impl FormSchema {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Look up a field spec by name
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_lookup() {
        let schema = FormSchema::new(vec![FieldSpec::text("comment")]);
        assert!(schema.field("comment").is_some());
        assert!(schema.field("missing").is_none());
    }

    #[test]
    fn test_text_spec_is_not_required() {
        let spec = FieldSpec::text("comment");
        assert_eq!(spec.kind, FieldKind::Text);
        assert!(!spec.required);
        assert!(FieldSpec::text("code").required().required);
    }
}
