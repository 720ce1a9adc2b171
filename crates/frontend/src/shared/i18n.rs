//! Localized UI strings
//!
//! Keys are dotted paths grouped by screen (`flow.*` for the node editor).
//! A key missing from the catalog resolves to the key itself, so an
//! untranslated string shows up in the UI instead of breaking it.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Active UI language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    Ru,
}

// (en, ru) per key
static CATALOG: Lazy<HashMap<&'static str, (&'static str, &'static str)>> = Lazy::new(|| {
    HashMap::from([
        (
            "flow.googleDocsRead",
            ("Google Docs Read", "Чтение Google Docs"),
        ),
        (
            "flow.serviceAccountJson",
            ("Service account JSON", "JSON сервисного аккаунта"),
        ),
        (
            "flow.serviceAccountJsonPlaceholder",
            (
                "Paste the Google service account key (JSON) here",
                "Вставьте сюда ключ сервисного аккаунта Google (JSON)",
            ),
        ),
    ])
});

/// Resolve a string key for the given locale
pub fn t(locale: Locale, key: &str) -> String {
    match CATALOG.get(key) {
        Some((en, ru)) => match locale {
            Locale::En => (*en).to_string(),
            Locale::Ru => (*ru).to_string(),
        },
        None => key.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_locales_resolve_flow_keys() {
        assert_eq!(t(Locale::En, "flow.serviceAccountJson"), "Service account JSON");
        assert_eq!(
            t(Locale::Ru, "flow.serviceAccountJson"),
            "JSON сервисного аккаунта"
        );
        assert_eq!(
            t(Locale::En, "flow.serviceAccountJsonPlaceholder"),
            "Paste the Google service account key (JSON) here"
        );
    }

    #[test]
    fn test_missing_key_falls_back_to_key() {
        assert_eq!(t(Locale::En, "flow.unknownKey"), "flow.unknownKey");
        assert_eq!(t(Locale::Ru, "flow.unknownKey"), "flow.unknownKey");
    }
}
