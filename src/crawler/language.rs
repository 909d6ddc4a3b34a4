//! Heuristic language detection
//!
//! A cheap Turkish-vs-English proxy, not a general language identifier.
//! False `Unknown` results are acceptable and never block page acceptance.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Detected page language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    /// Turkish content
    Turkish,
    /// English content
    English,
    /// Too short or indeterminate
    Unknown,
}

/// Characters that only occur in Turkish text
const TURKISH_CHARS: &[char] = &['ğ', 'ü', 'ş', 'ı', 'ö', 'ç', 'Ğ', 'Ü', 'Ş', 'İ', 'Ö', 'Ç'];

/// Common Turkish function words, matched as substrings
const TURKISH_STOPWORDS: &[&str] = &[
    "ve", "ile", "için", "bir", "bu", "olan", "ancak", "hakkında", "üzerinde",
];

/// Common English function words, matched on word boundaries
const ENGLISH_STOPWORDS: &[&str] = &["the", "and", "for", "with", "this", "that", "about", "from"];

impl Language {
    /// Detect the language of normalized content
    ///
    /// Priority order: short input is `Unknown`; any Turkish-specific
    /// character wins; more than two Turkish stop-word hits win; more than
    /// two word-boundary English stop-word hits give `English`; otherwise
    /// `Unknown`.
    pub fn detect(content: &str) -> Language {
        if content.chars().count() < 20 {
            return Language::Unknown;
        }

        if content.contains(TURKISH_CHARS) {
            return Language::Turkish;
        }

        let lower = content.to_lowercase();
        let turkish_hits = TURKISH_STOPWORDS
            .iter()
            .filter(|word| lower.contains(*word))
            .count();
        if turkish_hits > 2 {
            return Language::Turkish;
        }

        let tokens: HashSet<&str> = lower
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
            .collect();
        let english_hits = ENGLISH_STOPWORDS
            .iter()
            .filter(|word| tokens.contains(**word))
            .count();
        if english_hits > 2 {
            return Language::English;
        }

        Language::Unknown
    }

    /// Stable snake_case name, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Turkish => "turkish",
            Language::English => "english",
            Language::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_content_is_unknown() {
        assert_eq!(Language::detect(""), Language::Unknown);
        assert_eq!(Language::detect("kısa"), Language::Unknown);
        assert_eq!(Language::detect("the and for"), Language::Unknown);
    }

    #[test]
    fn test_turkish_characters_win_immediately() {
        assert_eq!(
            Language::detect("Mühendislik fakültesi lisans programlari"),
            Language::Turkish
        );
    }

    #[test]
    fn test_turkish_stopwords_without_special_chars() {
        // no Turkish-specific characters, but four stop-word hits
        assert_eq!(
            Language::detect("bu kampus ve bina bir merkez olan yerde"),
            Language::Turkish
        );
    }

    #[test]
    fn test_english_stopwords_on_word_boundaries() {
        assert_eq!(
            Language::detect("information about the programs and requirements for students"),
            Language::English
        );
    }

    #[test]
    fn test_english_substrings_do_not_count() {
        // "theory", "android", "forest" contain stop-words only as substrings
        assert_eq!(
            Language::detect("theory android forest theory android forest"),
            Language::Unknown
        );
    }

    #[test]
    fn test_indeterminate_is_unknown() {
        assert_eq!(
            Language::detect("0212 123 45 67 lorem ipsum dolor sit amet"),
            Language::Unknown
        );
    }
}
