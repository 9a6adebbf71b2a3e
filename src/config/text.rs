//! Localized strings keyed by language code.
//!
//! Language codes are free-form; nothing here checks them against ISO 639.
//! Lookups that miss the requested language fall back to the caller-supplied
//! default locale and return `None` only when both are absent.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use ts_rs::TS;

/// Mapping from language code to display string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct LocalizedText(BTreeMap<String, String>);

impl LocalizedText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, handy for host configuration code.
    pub fn with(mut self, lang: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(lang, text);
        self
    }

    pub fn insert(&mut self, lang: impl Into<String>, text: impl Into<String>) -> Option<String> {
        self.0.insert(lang.into(), text.into())
    }

    pub fn remove(&mut self, lang: &str) -> Option<String> {
        self.0.remove(lang)
    }

    /// Exact lookup without fallback.
    pub fn get(&self, lang: &str) -> Option<&str> {
        self.0.get(lang).map(String::as_str)
    }

    /// Lookup with default-locale fallback.
    pub fn resolve(&self, lang: &str, default_locale: &str) -> Option<&str> {
        self.get(lang).or_else(|| self.get(default_locale))
    }

    pub fn contains(&self, lang: &str) -> bool {
        self.0.contains_key(lang)
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for LocalizedText
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        LocalizedText(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for LocalizedText
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn greeting() -> LocalizedText {
        LocalizedText::from([("en", "Hello"), ("de", "Hallo")])
    }

    #[test]
    fn resolves_requested_language_first() {
        assert_eq!(greeting().resolve("de", "en"), Some("Hallo"));
    }

    #[test]
    fn falls_back_to_default_locale_for_unknown_language() {
        assert_eq!(greeting().resolve("it", "en"), Some("Hello"));
    }

    #[test]
    fn returns_none_when_default_locale_is_missing_too() {
        let text = LocalizedText::new().with("nl", "Hallo");
        assert_eq!(text.resolve("it", "en"), None);
        assert_eq!(text.get("nl"), Some("Hallo"));
    }

    #[test]
    fn language_codes_are_free_form() {
        let text = LocalizedText::new().with("x-pirate", "Ahoy");
        assert!(text.contains("x-pirate"));
        assert_eq!(text.languages().collect::<Vec<_>>(), vec!["x-pirate"]);
    }

    #[test]
    fn entries_can_be_removed_and_listed() {
        let mut text = greeting();
        assert_eq!(text.len(), 2);
        assert_eq!(
            text.iter().collect::<Vec<_>>(),
            vec![("de", "Hallo"), ("en", "Hello")]
        );

        assert_eq!(text.remove("de"), Some("Hallo".to_string()));
        assert_eq!(text.remove("de"), None);
        assert_eq!(text.remove("en"), Some("Hello".to_string()));
        assert!(text.is_empty());
    }

    #[test]
    fn serializes_as_plain_map() {
        let json = serde_json::to_value(greeting()).expect("serialize text");
        assert_eq!(json["en"], "Hello");
        assert_eq!(json["de"], "Hallo");
    }
}
