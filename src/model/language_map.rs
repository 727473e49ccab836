//! Language maps: the per-language variants of a textual property.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as Json};

use super::{primitive, Literal, LiteralKind};

/// Language tag → localized string, carried on the wire as `<property>Map`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageMap {
    entries: HashMap<String, String>,
}

impl LanguageMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Language tags present, sorted.
    pub fn languages(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    pub fn get(&self, tag: &str) -> Option<&str> {
        self.entries.get(tag).map(String::as_str)
    }

    /// Set the text for a language, returning the previous text.
    pub fn set(&mut self, tag: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(tag.into(), value.into())
    }

    pub fn remove(&mut self, tag: &str) -> Option<String> {
        self.entries.remove(tag)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(tag, text)| (tag.as_str(), text.as_str()))
    }

    /// Decode a wire map. Anything but a non-empty object of strings is not
    /// a language map and returns `None`, so the caller can keep it opaque.
    pub(crate) fn from_json(raw: &Json) -> Option<Self> {
        let Json::Object(map) = raw else { return None };
        if map.is_empty() {
            return None;
        }
        let mut entries = HashMap::with_capacity(map.len());
        for (tag, value) in map {
            match primitive::decode(LiteralKind::LangText, value) {
                Ok(Some(Literal::LangText(text))) => {
                    entries.insert(tag.clone(), text);
                }
                _ => return None,
            }
        }
        Some(Self { entries })
    }

    pub(crate) fn to_json(&self) -> Json {
        let map: Map<String, Json> = self
            .entries
            .iter()
            .map(|(tag, text)| (tag.clone(), Json::String(text.clone())))
            .collect();
        Json::Object(map)
    }
}

impl<K, V> FromIterator<(K, V)> for LanguageMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_languages_sorted() {
        let map: LanguageMap = [("fr", "Salut"), ("en", "Hi"), ("de", "Hallo")].into_iter().collect();
        assert_eq!(map.languages(), vec!["de", "en", "fr"]);
        assert_eq!(map.get("fr"), Some("Salut"));
        assert_eq!(map.get("es"), None);
    }

    #[test]
    fn test_from_json_requires_strings() {
        assert!(LanguageMap::from_json(&json!({"en": "Hi", "fr": 3})).is_none());
        assert!(LanguageMap::from_json(&json!({})).is_none());
        assert!(LanguageMap::from_json(&json!("Hi")).is_none());

        let map = LanguageMap::from_json(&json!({"en": "Hi"})).unwrap();
        assert_eq!(map.to_json(), json!({"en": "Hi"}));
    }

    #[test]
    fn test_set_replaces() {
        let mut map = LanguageMap::new();
        assert_eq!(map.set("en", "Hi"), None);
        assert_eq!(map.set("en", "Hello"), Some("Hi".to_string()));
        assert_eq!(map.len(), 1);
        assert_eq!(map.remove("en"), Some("Hello".to_string()));
        assert!(map.is_empty());
    }
}
