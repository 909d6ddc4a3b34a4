//! Admission-info extraction strategy

use crate::crawler::page::{OutlineBlock, ParsedPage};
use crate::crawler::structured::{AdmissionInfo, StructuredData};
use crate::crawler::text;
use regex::Regex;
use std::sync::OnceLock;

const DOCUMENT_KEYWORDS: &[&str] = &["gerekli belgeler", "required document", "başvuru belge"];
const REQUIREMENT_KEYWORDS: &[&str] = &["başvuru koşul", "admission requirement", "koşul"];
const PROCESS_KEYWORDS: &[&str] = &["başvuru süreci", "application process", "nasıl başvuru"];

/// Entrance exams worth flagging when mentioned anywhere in the text
const EXAM_NAMES: &[&str] = &["yks", "ales", "gmat", "gre", "toefl", "ielts", "ydil"];

fn exam_res() -> &'static Vec<(Regex, &'static str)> {
    static RES: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    RES.get_or_init(|| {
        EXAM_NAMES
            .iter()
            .map(|name| {
                let re = Regex::new(&format!(r"(?i)\b{name}\b")).expect("valid exam regex");
                (re, *name)
            })
            .collect()
    })
}

pub(super) fn extract(page: &ParsedPage) -> Option<StructuredData> {
    let page_text = page.text();

    let mut info = AdmissionInfo {
        application_deadline: text::extract_dates(&page_text).into_iter().next(),
        ..Default::default()
    };

    if let Some(OutlineBlock::List(items)) = page.heading_block(DOCUMENT_KEYWORDS, &["ul", "ol"]) {
        info.required_documents = items;
    }
    if let Some(OutlineBlock::List(items)) = page.heading_block(REQUIREMENT_KEYWORDS, &["ul", "ol"])
    {
        info.requirements = items;
    }
    if let Some(OutlineBlock::List(items)) = page.heading_block(PROCESS_KEYWORDS, &["ul", "ol"]) {
        info.application_process = items;
    }

    for (re, name) in exam_res() {
        if re.is_match(&page_text) {
            info.entrance_exams.push(name.to_uppercase());
        }
    }

    (!info.is_empty()).then_some(StructuredData::Admission(info))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HTML: &str = r#"<html><body><main>
        <h1>International Admissions</h1>
        <p>Applications close on 15.08.2025. TOEFL or IELTS scores are accepted, YKS is not required.</p>
        <h2>Required Documents</h2>
        <ul><li>Passport copy</li><li>High school transcript</li></ul>
        <h2>Admission Requirements</h2>
        <ul><li>Minimum GPA of 2.5</li></ul>
        <h2>Application Process</h2>
        <ol><li>Create an online account</li><li>Upload documents</li><li>Pay the application fee</li></ol>
    </main></body></html>"#;

    #[test]
    fn test_full_admission_page() {
        let page = ParsedPage::new("https://www.izu.edu.tr/en/admissions", HTML).unwrap();
        let Some(StructuredData::Admission(info)) = extract(&page) else {
            panic!("expected an admission payload");
        };

        assert_eq!(info.application_deadline.as_deref(), Some("15.08.2025"));
        assert_eq!(info.required_documents, vec!["Passport copy", "High school transcript"]);
        assert_eq!(info.requirements, vec!["Minimum GPA of 2.5"]);
        assert_eq!(info.application_process.len(), 3);
        assert_eq!(info.entrance_exams, vec!["YKS", "TOEFL", "IELTS"]);
    }

    #[test]
    fn test_exam_names_matched_once_case_insensitive() {
        let html = r#"<html><body><main>
            <p>The toefl requirement: TOEFL iBT 80. Toefl scores expire after two years. This page is about exams.</p>
        </main></body></html>"#;
        let page = ParsedPage::new("https://www.izu.edu.tr/en/exams", html).unwrap();
        let Some(StructuredData::Admission(info)) = extract(&page) else {
            panic!("expected an admission payload");
        };
        assert_eq!(info.entrance_exams, vec!["TOEFL"]);
    }

    #[test]
    fn test_empty_page_yields_none() {
        let page = ParsedPage::new(
            "https://www.izu.edu.tr/en/admissions",
            "<html><body><p>General information only, nothing structured.</p></body></html>",
        )
        .unwrap();
        assert!(extract(&page).is_none());
    }
}
