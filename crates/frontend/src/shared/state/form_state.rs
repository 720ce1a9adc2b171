//! Form state for node configuration forms
//!
//! One `FormState` per mounted form: current values, the schema they are
//! validated against, the resulting errors, and change watchers. Components
//! receive the state as an explicit prop; there is no ambient context lookup.

use contracts::shared::form::{validate, FieldError, FormSchema, FormValues};
use serde_json::Value;
use std::sync::Arc;

/// Change watcher: called with the full values after every mutation
pub type FormWatcher = Arc<dyn Fn(&FormValues) + Send + Sync>;

/// In-memory state of one mounted form
#[derive(Clone)]
pub struct FormState {
    schema: FormSchema,
    values: FormValues,
    errors: Vec<FieldError>,
    watchers: Vec<FormWatcher>,
}

impl FormState {
    /// Create a form from a schema and externally supplied initial values
    pub fn new(schema: FormSchema, initial: FormValues) -> Self {
        let errors = validate(&schema, &initial);
        Self {
            schema,
            values: initial,
            errors,
            watchers: Vec::new(),
        }
    }

    /// Current value at a field
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    /// Current string value at a field; missing or non-string reads as ""
    pub fn text(&self, field: &str) -> &str {
        self.get(field).and_then(Value::as_str).unwrap_or_default()
    }

    /// Write a value, revalidate, and notify watchers in registration order
    pub fn set(&mut self, field: &str, value: impl Into<Value>) {
        self.values.insert(field.to_string(), value.into());
        self.errors = validate(&self.schema, &self.values);
        for watcher in &self.watchers {
            watcher(&self.values);
        }
    }

    /// Validation message currently attached to a field, if any
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn error_list(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Subscribe to value changes; called synchronously on every `set`
    pub fn watch(&mut self, watcher: FormWatcher) {
        self.watchers.push(watcher);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::flow::google_docs_read::{self, GoogleDocsReadConfig, SERVICE_ACCOUNT_JSON};
    use std::sync::Mutex;

    fn form_with(text: &str) -> FormState {
        let config = GoogleDocsReadConfig {
            service_account_json: text.to_string(),
        };
        FormState::new(google_docs_read::schema(), config.to_values())
    }

    #[test]
    fn test_set_then_get_round_trips() {
        let samples = ["", "plain text", "{\"a\": 1}", "line one\nline two\n"];
        let mut form = form_with("");
        for sample in samples {
            form.set(SERVICE_ACCOUNT_JSON, sample);
            assert_eq!(form.text(SERVICE_ACCOUNT_JSON), sample);
        }
    }

    #[test]
    fn test_initial_value_is_preserved() {
        let form = form_with("X");
        assert_eq!(form.text(SERVICE_ACCOUNT_JSON), "X");
    }

    #[test]
    fn test_watcher_receives_exact_value() {
        let seen = Arc::new(Mutex::new(Vec::<String>::new()));
        let mut form = form_with("");
        form.watch(Arc::new({
            let seen = seen.clone();
            move |values| {
                let config = GoogleDocsReadConfig::from_values(values);
                seen.lock().unwrap().push(config.service_account_json);
            }
        }));

        form.set(SERVICE_ACCOUNT_JSON, "{\"type\":\"service_account\"}");
        assert_eq!(
            seen.lock().unwrap().as_slice(),
            ["{\"type\":\"service_account\"}"]
        );
    }

    #[test]
    fn test_watcher_fires_on_every_set() {
        let count = Arc::new(Mutex::new(0usize));
        let mut form = form_with("");
        form.watch(Arc::new({
            let count = count.clone();
            move |_| *count.lock().unwrap() += 1
        }));

        form.set(SERVICE_ACCOUNT_JSON, "a");
        form.set(SERVICE_ACCOUNT_JSON, "ab");
        assert_eq!(*count.lock().unwrap(), 2);
    }

    #[test]
    fn test_empty_string_has_no_error() {
        let form = form_with("");
        assert!(form.error(SERVICE_ACCOUNT_JSON).is_none());
        assert!(form.error_list().is_empty());
    }

    #[test]
    fn test_non_string_value_reports_type_mismatch() {
        let mut form = form_with("");
        form.set(SERVICE_ACCOUNT_JSON, 42);
        let message = form.error(SERVICE_ACCOUNT_JSON).unwrap();
        assert!(message.contains("string"));
    }

    #[test]
    fn test_initialization_is_idempotent() {
        let first = form_with("X");
        let second = form_with("X");
        assert_eq!(first.values(), second.values());
        assert_eq!(first.error_list(), second.error_list());
    }
}
