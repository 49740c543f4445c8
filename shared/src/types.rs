//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// GPS coordinates attached to an assessment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
}

/// Supported languages for generated text
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Chinese,
    English,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::Chinese => "zh",
            Language::English => "en",
        }
    }

    /// Pick the variant of a bilingual text
    pub fn pick(&self, zh: &'static str, en: &'static str) -> &'static str {
        match self {
            Language::Chinese => zh,
            Language::English => en,
        }
    }
}

/// A fixed text in both supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizedText {
    pub zh: &'static str,
    pub en: &'static str,
}

impl LocalizedText {
    pub const fn new(zh: &'static str, en: &'static str) -> Self {
        Self { zh, en }
    }

    pub fn get(&self, language: Language) -> &'static str {
        language.pick(self.zh, self.en)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_defaults_to_chinese() {
        assert_eq!(Language::default(), Language::Chinese);
        assert_eq!(Language::default().code(), "zh");
    }

    #[test]
    fn test_localized_text_picks_language() {
        let text = LocalizedText::new("健康", "Healthy");
        assert_eq!(text.get(Language::Chinese), "健康");
        assert_eq!(text.get(Language::English), "Healthy");
    }

    #[test]
    fn test_language_deserializes_lowercase() {
        let lang: Language = serde_json::from_str("\"english\"").unwrap();
        assert_eq!(lang, Language::English);
    }
}
