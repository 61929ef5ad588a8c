//! Plain or per-language text values
//!
//! Titles and abstracts on the bilingual site may be a single string or a
//! mapping from language code to string. The untagged serde representation
//! accepts both JSON shapes (`"..."` and `{"en": "...", "zh": "..."}`).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Text that is either a plain string or localized per language code.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocalizedText {
    Plain(String),
    Localized(BTreeMap<String, String>),
}

impl LocalizedText {
    /// Resolve the display string: `en`, then `zh`, then the first
    /// available language, then the plain string itself.
    pub fn resolve(&self) -> Option<&str> {
        match self {
            LocalizedText::Plain(s) => Some(s.as_str()),
            LocalizedText::Localized(map) => map
                .get("en")
                .or_else(|| map.get("zh"))
                .or_else(|| map.values().next())
                .map(String::as_str),
        }
    }

    /// The plain string, if this value is not a language mapping.
    pub fn as_plain(&self) -> Option<&str> {
        match self {
            LocalizedText::Plain(s) => Some(s.as_str()),
            LocalizedText::Localized(_) => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            LocalizedText::Plain(s) => s.is_empty(),
            LocalizedText::Localized(map) => map.values().all(|v| v.is_empty()),
        }
    }
}

impl From<String> for LocalizedText {
    fn from(s: String) -> Self {
        LocalizedText::Plain(s)
    }
}

impl From<&str> for LocalizedText {
    fn from(s: &str) -> Self {
        LocalizedText::Plain(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_plain() {
        let text = LocalizedText::from("Deep Learning");
        assert_eq!(text.resolve(), Some("Deep Learning"));
    }

    #[test]
    fn test_resolve_prefers_en() {
        let mut map = BTreeMap::new();
        map.insert("zh".to_string(), "深度学习".to_string());
        map.insert("en".to_string(), "Deep Learning".to_string());
        let text = LocalizedText::Localized(map);
        assert_eq!(text.resolve(), Some("Deep Learning"));
    }

    #[test]
    fn test_resolve_falls_back_to_zh() {
        let mut map = BTreeMap::new();
        map.insert("zh".to_string(), "深度学习".to_string());
        let text = LocalizedText::Localized(map);
        assert_eq!(text.resolve(), Some("深度学习"));
    }

    #[test]
    fn test_resolve_first_available_language() {
        let mut map = BTreeMap::new();
        map.insert("fr".to_string(), "Apprentissage profond".to_string());
        let text = LocalizedText::Localized(map);
        assert_eq!(text.resolve(), Some("Apprentissage profond"));
    }

    #[test]
    fn test_untagged_json_shapes() {
        let plain: LocalizedText = serde_json::from_str("\"A Title\"").unwrap();
        assert_eq!(plain.resolve(), Some("A Title"));

        let localized: LocalizedText =
            serde_json::from_str(r#"{"en": "A Title", "zh": "一个标题"}"#).unwrap();
        assert_eq!(localized.resolve(), Some("A Title"));
    }
}
