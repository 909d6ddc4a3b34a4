//! Faculty-member extraction strategy

use crate::crawler::page::{OutlineBlock, ParsedPage};
use crate::crawler::structured::{FacultyMember, StructuredData};
use crate::crawler::text;
use regex::Regex;
use std::sync::OnceLock;

const RESEARCH_KEYWORDS: &[&str] = &["araştırma alan", "research area", "uzmanlık", "expertise"];
const EDUCATION_KEYWORDS: &[&str] = &["eğitim", "education", "öğrenim"];
const COURSE_KEYWORDS: &[&str] = &["verdiği ders", "course", "ders"];

/// Academic title prefixes, most senior first; the first match wins
fn title_res() -> &'static Vec<Regex> {
    static RES: OnceLock<Vec<Regex>> = OnceLock::new();
    RES.get_or_init(|| {
        [
            r"(?i)(Prof\.?\s*Dr\.?)",
            r"(?i)(Doç\.?\s*Dr\.?)",
            r"(?i)(Dr\.?\s*Öğr\.?\s*Üyesi)",
            r"(?i)(Öğr\.?\s*Gör\.?)",
            r"(?i)(Arş\.?\s*Gör\.?)",
        ]
        .iter()
        .map(|p| Regex::new(p).expect("valid title regex"))
        .collect()
    })
}

pub(super) fn extract(page: &ParsedPage) -> Option<StructuredData> {
    // a profile without a name is not a profile
    let name = page.primary_heading()?;
    let page_text = page.text();

    let title = title_res().iter().find_map(|re| {
        re.captures(&page_text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    });

    let mut member = FacultyMember {
        name,
        title,
        email: text::extract_emails(&page_text).into_iter().next(),
        phone: text::extract_phones(&page_text).into_iter().next(),
        ..Default::default()
    };

    if let Some(OutlineBlock::List(items)) = page.heading_block(RESEARCH_KEYWORDS, &["ul", "ol"]) {
        member.research_areas = items;
    }
    if let Some(OutlineBlock::List(items)) = page.heading_block(EDUCATION_KEYWORDS, &["ul", "ol"]) {
        member.education = items;
    }
    if let Some(OutlineBlock::List(items)) = page.heading_block(COURSE_KEYWORDS, &["ul", "ol"]) {
        member.courses = items;
    }

    Some(StructuredData::FacultyMember(member))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HTML: &str = r#"<html><body><main>
        <h1>Ayşe Yılmaz</h1>
        <p>Prof. Dr. Ayşe Yılmaz, ayse.yilmaz@izu.edu.tr, +90 212 692 96 00</p>
        <h2>Research Areas</h2>
        <ul><li>Distributed systems</li><li>Database engines</li></ul>
        <h2>Education</h2>
        <ul><li>PhD, Computer Engineering, 2010</li></ul>
        <h2>Courses Taught</h2>
        <ul><li>Operating Systems</li><li>Databases</li></ul>
    </main></body></html>"#;

    #[test]
    fn test_full_profile() {
        let page = ParsedPage::new("https://www.izu.edu.tr/en/faculty/ayse-yilmaz", HTML).unwrap();
        let Some(StructuredData::FacultyMember(member)) = extract(&page) else {
            panic!("expected a faculty payload");
        };

        assert_eq!(member.name, "Ayşe Yılmaz");
        assert_eq!(member.title.as_deref(), Some("Prof. Dr."));
        assert_eq!(member.email.as_deref(), Some("ayse.yilmaz@izu.edu.tr"));
        assert_eq!(member.phone.as_deref(), Some("+90 212 692 96 00"));
        assert_eq!(member.research_areas, vec!["Distributed systems", "Database engines"]);
        assert_eq!(member.education, vec!["PhD, Computer Engineering, 2010"]);
        assert_eq!(member.courses, vec!["Operating Systems", "Databases"]);
    }

    #[test]
    fn test_title_priority_order() {
        let html = r#"<html><body><main>
            <h1>Mehmet Demir</h1>
            <p>Arş. Gör. Mehmet Demir works with Prof. Dr. Kaya.</p>
        </main></body></html>"#;
        let page = ParsedPage::new("https://www.izu.edu.tr/en/faculty/md", html).unwrap();
        let Some(StructuredData::FacultyMember(member)) = extract(&page) else {
            panic!("expected a faculty payload");
        };
        // Prof. Dr. outranks Arş. Gör. even though it appears later in the text
        assert_eq!(member.title.as_deref(), Some("Prof. Dr."));
    }

    #[test]
    fn test_no_heading_yields_none() {
        let page = ParsedPage::new(
            "https://www.izu.edu.tr/en/faculty",
            "<html><body><p>Staff directory listing page</p></body></html>",
        )
        .unwrap();
        assert!(extract(&page).is_none());
    }
}
