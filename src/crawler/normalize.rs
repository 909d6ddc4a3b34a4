//! Text normalization
//!
//! Strips recurring bilingual boilerplate (navigation clusters, social-media
//! link rows, copyright lines) and short UI words from raw extracted text,
//! then canonicalizes whitespace and Unicode form. Normalization is
//! idempotent: running it over its own output is a no-op.

use regex::Regex;
use std::sync::OnceLock;
use unicode_normalization::UnicodeNormalization;

/// Boilerplate phrase patterns, maintained as data. Adding a new noise phrase
/// means adding a line here, never touching the normalization logic.
const NOISE_PATTERNS: &[&str] = &[
    r"Medya\s*Kampüs\s*İnsan Kaynakları\s*İletişim",
    r"Turkish Language Center\s*International Students\s*Erasmus\+\s*Contact",
    r"AKADEMİK\s*ARAŞTIRMA\s*ÖĞRENCİ\s*ULUSLARARASI\s*ADAY ÖĞRENCİ\s*İZÜ HAKKINDA",
    r"Academic\s*Research\s*Students\s*International\s*About IZU",
    r"Search\s*Türkçe\s*English\s*Ara",
    r"E-HİZMETLER\s*KURUMSAL\s*BAĞLANTILAR\s*BİZE ULAŞIN\s*HIZLI ERİŞİM",
    r"Facebook\s*Twitter\s*Instagram\s*Youtube\s*Linkedin",
    r"© IZU \d{4}",
];

/// Short menu labels removed as whole words
const UI_WORDS: &[&str] = &["Ara", "Search", "English", "Türkçe", "Menu", "Close"];

fn whitespace_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("valid whitespace regex"))
}

fn zero_width_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\u{200b}\u{200c}\u{200d}\u{feff}]").expect("valid regex"))
}

fn ui_word_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let alternation = UI_WORDS.join("|");
        Regex::new(&format!(r"\b(?:{alternation})\b")).expect("valid UI-word regex")
    })
}

fn noise_res() -> &'static Vec<Regex> {
    static RES: OnceLock<Vec<Regex>> = OnceLock::new();
    RES.get_or_init(|| {
        NOISE_PATTERNS
            .iter()
            .map(|p| Regex::new(&format!("(?i){p}")).expect("valid noise pattern"))
            .collect()
    })
}

/// Normalizer for raw page text
///
/// Steps, in order: collapse whitespace runs, strip noise patterns to a
/// fixed point, remove UI words as whole words, NFC-normalize and drop
/// zero-width characters, collapse again and trim.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextNormalizer;

impl TextNormalizer {
    /// Create a normalizer
    pub fn new() -> Self {
        TextNormalizer
    }

    /// Normalize raw extracted text
    pub fn normalize(&self, raw: &str) -> String {
        if raw.is_empty() {
            return String::new();
        }

        let mut text = whitespace_re().replace_all(raw, " ").into_owned();

        // Stripping one noise phrase can splice two others together, so run
        // the pattern pass until nothing changes.
        loop {
            let mut stripped = text.clone();
            for re in noise_res() {
                stripped = re.replace_all(&stripped, "").into_owned();
            }
            if stripped == text {
                break;
            }
            text = stripped;
        }

        let text = ui_word_re().replace_all(&text, "");
        let text: String = text.nfc().collect();
        let text = zero_width_re().replace_all(&text, "");
        let text = whitespace_re().replace_all(&text, " ");
        text.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(s: &str) -> String {
        TextNormalizer::new().normalize(s)
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(norm("a  b\t\nc"), "a b c");
    }

    #[test]
    fn test_strips_social_media_cluster() {
        let text = "Engineering programs Facebook Twitter Instagram Youtube Linkedin apply now";
        assert_eq!(norm(text), "Engineering programs apply now");
    }

    #[test]
    fn test_strips_copyright_line() {
        assert_eq!(norm("Welcome © IZU 2024 to campus"), "Welcome to campus");
    }

    #[test]
    fn test_noise_patterns_case_insensitive() {
        let text = "before facebook twitter instagram youtube linkedin after";
        assert_eq!(norm(text), "before after");
    }

    #[test]
    fn test_ui_words_removed_as_whole_words() {
        assert_eq!(norm("Menu Research Close"), "Research");
        // "Menu" inside a longer word is left alone
        assert_eq!(norm("Menus of the cafeteria"), "Menus of the cafeteria");
    }

    #[test]
    fn test_removes_zero_width_characters() {
        assert_eq!(norm("uni\u{200b}versity"), "university");
        assert_eq!(norm("\u{feff}hello"), "hello");
    }

    #[test]
    fn test_nfc_normalization() {
        // decomposed u + combining diaeresis composes to ü
        let decomposed = "u\u{0308}niversite";
        assert_eq!(norm(decomposed), "üniversite");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "Engineering  programs Facebook Twitter Instagram Youtube Linkedin apply",
            "Menu Ara Search plain text Close",
            "  padded   with \t whitespace  ",
            "© IZU 2023 Fakülteler ve bölümler",
            "",
            "already clean text",
        ];
        let normalizer = TextNormalizer::new();
        for input in inputs {
            let once = normalizer.normalize(input);
            let twice = normalizer.normalize(&once);
            assert_eq!(once, twice, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_spliced_noise_is_still_stripped() {
        // removing the inner phrase butts the halves of the social cluster
        // together; the fixed-point loop catches the second pass
        let text = "x Facebook Twitter © IZU 2024 Instagram Youtube Linkedin y";
        assert_eq!(norm(text), "x y");
    }
}
