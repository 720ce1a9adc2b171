//! Configuration contract for the Google Docs read node
//!
//! The node reads a document on behalf of the user with a Google service
//! account. The credential is stored as pasted free text; the form layer only
//! checks that it is a string. Whether it is well-formed JSON is checked by
//! the tool at execution time, outside this crate.

use crate::shared::form::{FieldSpec, FormSchema, FormValues};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Field holding the pasted service-account credential
pub const SERVICE_ACCOUNT_JSON: &str = "service_account_json";

/// Saved configuration of one Google Docs read node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GoogleDocsReadConfig {
    #[serde(default)]
    pub service_account_json: String,
}

/// Schema of the node's configuration form: one free-text field, empty allowed
pub fn schema() -> FormSchema {
    FormSchema::new(vec![FieldSpec::text(SERVICE_ACCOUNT_JSON)])
}

impl GoogleDocsReadConfig {
    /// Form values seeded from this config
    pub fn to_values(&self) -> FormValues {
        let mut values = FormValues::new();
        values.insert(
            SERVICE_ACCOUNT_JSON.to_string(),
            Value::String(self.service_account_json.clone()),
        );
        values
    }

    /// Read the config back out of form values.
    ///
    /// A missing or non-string value maps to the empty string; other JSON
    /// types are never coerced into text.
    pub fn from_values(values: &FormValues) -> Self {
        Self {
            service_account_json: values
                .get(SERVICE_ACCOUNT_JSON)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
        }
    }
}
