//! Field kind enumeration for form schemas

use serde_json::Value;

/// Kind of value a form field holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Text,   // free-form string
    Number, // integer or float
    Flag,   // boolean
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "string",
            Self::Number => "number",
            Self::Flag => "boolean",
        }
    }

    /// Check whether a JSON value is of this kind
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            Self::Text => value.is_string(),
            Self::Number => value.is_number(),
            Self::Flag => value.is_boolean(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_matches_any_string() {
        assert!(FieldKind::Text.matches(&json!("")));
        assert!(FieldKind::Text.matches(&json!("{\"type\":\"service_account\"}")));
        assert!(!FieldKind::Text.matches(&json!(42)));
        assert!(!FieldKind::Text.matches(&json!(null)));
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(FieldKind::Text.as_str(), "string");
        assert_eq!(FieldKind::Number.as_str(), "number");
        assert_eq!(FieldKind::Flag.as_str(), "boolean");
    }
}
