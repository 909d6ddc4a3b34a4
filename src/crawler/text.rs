//! Shared text-extraction helpers
//!
//! Regex captures used by the record builder and several structured
//! extractors: contact details, dates, currency-tagged amounts, and the
//! degree/duration/teaching-language inference rules for program pages.

use crate::crawler::structured::{DegreeType, TeachingLanguage};
use regex::Regex;
use std::sync::OnceLock;
use unicode_normalization::UnicodeNormalization;

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\b[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}\b").expect("valid regex")
    })
}

fn phone_res() -> &'static Vec<Regex> {
    static RES: OnceLock<Vec<Regex>> = OnceLock::new();
    RES.get_or_init(|| {
        [
            // international: +90 XXX XXX XX XX
            r"\+90\s*\d{3}\s*\d{3}\s*\d{2}\s*\d{2}",
            // parenthesized area code: (0XXX) XXX XX XX
            r"\(0\d{3}\)\s*\d{3}\s*\d{2}\s*\d{2}",
            // plain: 0XXX XXX XX XX
            r"0\d{3}\s*\d{3}\s*\d{2}\s*\d{2}",
        ]
        .iter()
        .map(|p| Regex::new(p).expect("valid phone regex"))
        .collect()
    })
}

fn date_res() -> &'static Vec<Regex> {
    static RES: OnceLock<Vec<Regex>> = OnceLock::new();
    RES.get_or_init(|| {
        [
            r"\b(\d{1,2}[./]\d{1,2}[./]\d{4})\b",
            r"\b(\d{4}-\d{2}-\d{2})\b",
            r"(?i)\b(\d{1,2}\s+(?:Ocak|Şubat|Mart|Nisan|Mayıs|Haziran|Temmuz|Ağustos|Eylül|Ekim|Kasım|Aralık|January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{4})\b",
        ]
        .iter()
        .map(|p| Regex::new(p).expect("valid date regex"))
        .collect()
    })
}

fn price_res() -> &'static Vec<(Regex, &'static str)> {
    static RES: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    RES.get_or_init(|| {
        [
            (r"(?i)(\d{1,3}(?:[.,]\d{3})*(?:[.,]\d{2})?)\s*(?:TL|₺|TRY)", "TRY"),
            (r"(?i)(?:TL|₺|TRY)\s*(\d{1,3}(?:[.,]\d{3})*(?:[.,]\d{2})?)", "TRY"),
            (r"\$\s*(\d{1,3}(?:,\d{3})*(?:\.\d{2})?)", "USD"),
            (r"(?i)(\d{1,3}(?:,\d{3})*(?:\.\d{2})?)\s*(?:USD|Dolar)", "USD"),
            (r"€\s*(\d{1,3}(?:[.,]\d{3})*(?:[.,]\d{2})?)", "EUR"),
            (r"(?i)(\d{1,3}(?:[.,]\d{3})*(?:[.,]\d{2})?)\s*(?:EUR|Euro)", "EUR"),
        ]
        .iter()
        .map(|(p, cur)| (Regex::new(p).expect("valid price regex"), *cur))
        .collect()
    })
}

/// Lightweight cleanup for headings, cells, and list items: NFC, zero-width
/// removal, whitespace collapse, trim. The full noise-pattern pipeline in
/// [`super::TextNormalizer`] is reserved for page content.
pub fn tidy(text: &str) -> String {
    static ZW: OnceLock<Regex> = OnceLock::new();
    static WS: OnceLock<Regex> = OnceLock::new();
    let zw = ZW.get_or_init(|| {
        Regex::new(r"[\u{200b}\u{200c}\u{200d}\u{feff}]").expect("valid regex")
    });
    let ws = WS.get_or_init(|| Regex::new(r"\s+").expect("valid regex"));

    let text: String = text.nfc().collect();
    let text = zw.replace_all(&text, "");
    let text = ws.replace_all(&text, " ");
    text.trim().to_string()
}

/// Extract unique email addresses, in first-seen order
pub fn extract_emails(text: &str) -> Vec<String> {
    let mut seen = Vec::new();
    for m in email_re().find_iter(text) {
        let email = m.as_str().to_string();
        if !seen.contains(&email) {
            seen.push(email);
        }
    }
    seen
}

/// Extract unique Turkish-format phone numbers, in first-seen order
pub fn extract_phones(text: &str) -> Vec<String> {
    let mut seen = Vec::new();
    for re in phone_res() {
        for m in re.find_iter(text) {
            let phone = m.as_str().to_string();
            if !seen.contains(&phone) {
                seen.push(phone);
            }
        }
    }
    seen
}

/// Extract date-like tokens in DD.MM.YYYY, YYYY-MM-DD, and month-name
/// (Turkish or English) formats
pub fn extract_dates(text: &str) -> Vec<String> {
    let mut dates = Vec::new();
    for re in date_res() {
        for caps in re.captures_iter(text) {
            if let Some(m) = caps.get(1) {
                dates.push(m.as_str().to_string());
            }
        }
    }
    dates
}

/// Extract the first currency-tagged amount as `"<amount> <currency>"`
/// (TRY, USD, or EUR)
pub fn extract_price(text: &str) -> Option<String> {
    for (re, currency) in price_res() {
        if let Some(caps) = re.captures(text) {
            if let Some(amount) = caps.get(1) {
                return Some(format!("{} {}", amount.as_str(), currency));
            }
        }
    }
    None
}

/// Infer the degree type from page text
///
/// Compound Turkish degree names are checked before the bare `lisans`
/// keyword so master and associate pages do not fall through to bachelor.
pub fn infer_degree_type(text: &str) -> Option<DegreeType> {
    static RES: OnceLock<Vec<(Regex, DegreeType)>> = OnceLock::new();
    let rules = RES.get_or_init(|| {
        [
            (r"(?i)\b(?:yüksek lisans|master|graduate)\b", DegreeType::Master),
            (r"(?i)\b(?:doktora|phd|doctorate)\b", DegreeType::Phd),
            (r"(?i)\b(?:ön lisans|önlisans|associate)\b", DegreeType::Associate),
            (r"(?i)\b(?:lisans|bachelor|undergraduate)\b", DegreeType::Bachelor),
        ]
        .iter()
        .map(|(p, d)| (Regex::new(p).expect("valid degree regex"), *d))
        .collect()
    });
    rules
        .iter()
        .find(|(re, _)| re.is_match(text))
        .map(|(_, degree)| *degree)
}

/// Infer the program duration in years from page text
pub fn infer_duration_years(text: &str) -> Option<f32> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"(?i)(\d+)\s*(?:yıl|year|sene)").expect("valid regex"));
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Infer the teaching language from page text
pub fn infer_teaching_language(text: &str) -> Option<TeachingLanguage> {
    static FULLY_EN: OnceLock<Regex> = OnceLock::new();
    static EN: OnceLock<Regex> = OnceLock::new();
    static TR: OnceLock<Regex> = OnceLock::new();
    // dotted capital İ does not case-fold to i, so it is spelled out
    let fully_en = FULLY_EN.get_or_init(|| {
        Regex::new(r"(?i)(?:%100|100%|tamamen|fully|completely)\s*(?:[iİ]ngilizce|english)\b")
            .expect("valid regex")
    });
    let en = EN.get_or_init(|| Regex::new(r"(?i)\b[iİ]ngilizce\b").expect("valid regex"));
    let tr = TR.get_or_init(|| Regex::new(r"(?i)\btürkçe\b").expect("valid regex"));

    if fully_en.is_match(text) {
        Some(TeachingLanguage::English)
    } else if en.is_match(text) && tr.is_match(text) {
        Some(TeachingLanguage::Bilingual)
    } else if en.is_match(text) {
        Some(TeachingLanguage::English)
    } else if tr.is_match(text) {
        Some(TeachingLanguage::Turkish)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_emails_unique() {
        let text = "write to info@izu.edu.tr or dean@izu.edu.tr, again info@izu.edu.tr";
        assert_eq!(
            extract_emails(text),
            vec!["info@izu.edu.tr".to_string(), "dean@izu.edu.tr".to_string()]
        );
    }

    #[test]
    fn test_extract_phones_all_formats() {
        let text = "call +90 212 692 96 00 or (0212) 692 96 00 or 0212 692 96 53";
        let phones = extract_phones(text);
        assert_eq!(phones.len(), 3);
        assert!(phones.contains(&"+90 212 692 96 00".to_string()));
    }

    #[test]
    fn test_extract_dates_formats() {
        let dates = extract_dates("apply by 15.08.2025, term starts 2025-09-15, ends 12 June 2026");
        assert!(dates.contains(&"15.08.2025".to_string()));
        assert!(dates.contains(&"2025-09-15".to_string()));
        assert!(dates.contains(&"12 June 2026".to_string()));
    }

    #[test]
    fn test_extract_price_currencies() {
        assert_eq!(
            extract_price("tuition is 120.000 TL per year"),
            Some("120.000 TRY".to_string())
        );
        assert_eq!(
            extract_price("tuition is $ 4,500 per year"),
            Some("4,500 USD".to_string())
        );
        assert_eq!(
            extract_price("tuition is 3.000 EUR per year"),
            Some("3.000 EUR".to_string())
        );
        assert_eq!(extract_price("no amounts here"), None);
    }

    #[test]
    fn test_infer_degree_type_ordering() {
        assert_eq!(
            infer_degree_type("Yüksek lisans programı"),
            Some(DegreeType::Master)
        );
        assert_eq!(
            infer_degree_type("Ön lisans programları"),
            Some(DegreeType::Associate)
        );
        assert_eq!(
            infer_degree_type("Lisans programı dört yıl"),
            Some(DegreeType::Bachelor)
        );
        assert_eq!(infer_degree_type("PhD in engineering"), Some(DegreeType::Phd));
        assert_eq!(infer_degree_type("nothing relevant"), None);
    }

    #[test]
    fn test_infer_duration() {
        assert_eq!(infer_duration_years("the program takes 4 years"), Some(4.0));
        assert_eq!(infer_duration_years("2 yıl sürer"), Some(2.0));
        assert_eq!(infer_duration_years("no duration"), None);
    }

    #[test]
    fn test_infer_teaching_language() {
        assert_eq!(
            infer_teaching_language("eğitim dili %100 İngilizce"),
            Some(TeachingLanguage::English)
        );
        assert_eq!(
            infer_teaching_language("dersler İngilizce ve Türkçe verilir"),
            Some(TeachingLanguage::Bilingual)
        );
        assert_eq!(
            infer_teaching_language("eğitim dili Türkçe"),
            Some(TeachingLanguage::Turkish)
        );
        assert_eq!(infer_teaching_language("language unspecified"), None);
    }

    #[test]
    fn test_tidy() {
        assert_eq!(tidy("  a \t b\u{200b}c  "), "a bc");
    }
}
