//! Page records
//!
//! [`PageRecord`] is the immutable output of the pipeline, one per accepted
//! page. [`RecordBuilder`] derives it from a [`ParsedPage`]: normalize the
//! content, detect the language, hash the normalized text, run the
//! structured-extraction registry for the page's category.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::categorize::Category;
use super::dedup;
use super::extract;
use super::language::Language;
use super::normalize::TextNormalizer;
use super::page::{MediaRef, ParsedPage};
use super::structured::StructuredData;
use super::text;

const MAX_CONTACTS: usize = 5;
const MAX_LISTS: usize = 15;
const MIN_LIST_ITEMS: usize = 3;
const MIN_LIST_ITEM_CHARS: usize = 11;

/// Emails and phone numbers found in the page content
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    /// Email addresses, first five in document order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub emails: Vec<String>,
    /// Phone numbers, first five in document order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phones: Vec<String>,
}

impl ContactInfo {
    /// True when neither emails nor phones were found
    pub fn is_empty(&self) -> bool {
        self.emails.is_empty() && self.phones.is_empty()
    }
}

/// One crawled page, ready for export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageRecord {
    /// Canonical page URL
    pub url: String,
    /// Page title, from `<title>` with the primary heading as fallback
    pub title: String,
    /// Content category assigned from the URL
    pub category: Category,
    /// Normalized main-content text
    pub content: String,
    /// Detected content language
    pub language: Language,
    /// Word count of the normalized content
    pub word_count: usize,
    /// Multi-row tables from the main content, header row included
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tables: Vec<Vec<Vec<String>>>,
    /// Substantial lists from the main content
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lists: Vec<Vec<String>>,
    /// Images from the main content
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<MediaRef>,
    /// Linked documents (pdf, doc, xls, ppt)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub documents: Vec<MediaRef>,
    /// Contact details found in the content
    #[serde(default, skip_serializing_if = "ContactInfo::is_empty")]
    pub contact_info: ContactInfo,
    /// Breadcrumb trail entries
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub breadcrumb: Vec<String>,
    /// Meta description, when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    /// When the page was fetched
    pub fetched_at: DateTime<Utc>,
    /// SHA-256 digest of the normalized content, lowercase hex
    pub content_hash: String,
    /// Category-specific payload, when an extractor produced one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structured_data: Option<StructuredData>,
}

/// Builds [`PageRecord`]s from parsed pages
#[derive(Debug, Default)]
pub struct RecordBuilder {
    normalizer: TextNormalizer,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive a record from a parsed page
    pub fn build(&self, url: &str, category: Category, page: &ParsedPage) -> PageRecord {
        let title = page
            .title()
            .map(|t| self.normalizer.normalize(&t))
            .filter(|t| !t.is_empty())
            .or_else(|| page.primary_heading())
            .unwrap_or_default();

        let content = self.normalizer.normalize(&page.content_text());
        let word_count = content.split_whitespace().count();

        let tables: Vec<Vec<Vec<String>>> = page
            .tables()
            .into_iter()
            .filter(|t| t.rows.len() > 1)
            .map(|t| t.rows)
            .collect();

        let lists: Vec<Vec<String>> = page
            .lists()
            .into_iter()
            .take(MAX_LISTS)
            .map(|items| {
                items
                    .into_iter()
                    .filter(|item| item.chars().count() >= MIN_LIST_ITEM_CHARS)
                    .collect::<Vec<_>>()
            })
            .filter(|items| items.len() >= MIN_LIST_ITEMS)
            .collect();

        let contact_info = ContactInfo {
            emails: text::extract_emails(&content)
                .into_iter()
                .take(MAX_CONTACTS)
                .collect(),
            phones: text::extract_phones(&content)
                .into_iter()
                .take(MAX_CONTACTS)
                .collect(),
        };

        PageRecord {
            url: url.to_string(),
            title,
            category,
            language: Language::detect(&content),
            word_count,
            tables,
            lists,
            images: page.images(),
            documents: page.document_links(),
            contact_info,
            breadcrumb: page.breadcrumb(),
            meta_description: page.meta_description(),
            fetched_at: Utc::now(),
            content_hash: dedup::content_hash(&content),
            structured_data: extract::run_extractor(category, page),
            content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HTML: &str = r#"<html><head>
        <title>Computer Engineering | IZU</title>
        <meta name="description" content="Undergraduate program in computer engineering">
      </head><body>
        <nav class="breadcrumb"><a href="/">Home</a><a href="/eng">Engineering</a></nav>
        <main>
          <h1>Computer Engineering</h1>
          <p>The department offers a four year undergraduate curriculum covering software and hardware.</p>
          <p>Contact us at info@izu.edu.tr or call +90 212 692 96 00 for details.</p>
          <ul>
            <li>Accredited engineering curriculum</li>
            <li>English-language instruction track</li>
            <li>Industry internship in the final year</li>
          </ul>
          <table>
            <tr><th>Course</th><th>Credits</th></tr>
            <tr><td>Programming I</td><td>6</td></tr>
          </table>
          <a href="/files/handbook.pdf">Student handbook</a>
        </main>
      </body></html>"#;

    fn build_record(html: &str) -> PageRecord {
        let url = "https://www.izu.edu.tr/en/department/computer-engineering";
        let page = ParsedPage::new(url, html).unwrap();
        RecordBuilder::new().build(url, Category::Department, &page)
    }

    #[test]
    fn test_record_fields() {
        let record = build_record(HTML);

        assert_eq!(record.title, "Computer Engineering | IZU");
        assert_eq!(record.category, Category::Department);
        assert_eq!(record.language, Language::English);
        assert_eq!(record.word_count, record.content.split_whitespace().count());
        assert!(record.word_count > 20);
        assert_eq!(record.breadcrumb, vec!["Home", "Engineering"]);
        assert_eq!(
            record.meta_description.as_deref(),
            Some("Undergraduate program in computer engineering")
        );
        assert_eq!(record.content_hash.len(), 64);
    }

    #[test]
    fn test_contact_info_extracted_from_content() {
        let record = build_record(HTML);
        assert_eq!(record.contact_info.emails, vec!["info@izu.edu.tr"]);
        assert_eq!(record.contact_info.phones, vec!["+90 212 692 96 00"]);
    }

    #[test]
    fn test_tables_and_lists_filtered() {
        let record = build_record(HTML);
        // the two-row table survives; single-row tables would not
        assert_eq!(record.tables.len(), 1);
        assert_eq!(record.tables[0].len(), 2);
        // the three-item list survives with all items above the length floor
        assert_eq!(record.lists.len(), 1);
        assert_eq!(record.lists[0].len(), 3);
    }

    #[test]
    fn test_documents_collected() {
        let record = build_record(HTML);
        assert_eq!(record.documents.len(), 1);
        assert!(record.documents[0].url.ends_with("/files/handbook.pdf"));
    }

    #[test]
    fn test_title_falls_back_to_heading() {
        let html = r#"<html><body><main>
            <h1>Untitled Department</h1>
            <p>Body text for a page that has no title element at all.</p>
        </main></body></html>"#;
        let record = build_record(html);
        assert_eq!(record.title, "Untitled Department");
    }

    #[test]
    fn test_list_item_gate_counts_characters_not_bytes() {
        // each item is 10 characters but more than 10 bytes; the length
        // floor must drop them the same as their ASCII equivalents
        let html = r#"<html><body><main>
            <p>Some content paragraph that is long enough to keep around.</p>
            <ul><li>öğrenciler</li><li>öğrenciler</li><li>öğrenciler</li></ul>
            <ul><li>öğrenci işleri</li><li>kayıt yenileme</li><li>burs başvurusu</li></ul>
        </main></body></html>"#;
        let record = build_record(html);
        assert_eq!(record.lists.len(), 1);
        assert_eq!(record.lists[0][0], "öğrenci işleri");
    }

    #[test]
    fn test_short_list_dropped() {
        let html = r#"<html><body><main>
            <p>Some content paragraph that is long enough to keep around.</p>
            <ul><li>Only item long enough here</li><li>ok</li></ul>
        </main></body></html>"#;
        let record = build_record(html);
        assert!(record.lists.is_empty());
    }
}
