//! Fee-structure extraction strategy

use crate::crawler::page::{OutlineBlock, ParsedPage};
use crate::crawler::structured::{FeeStructure, StructuredData};
use crate::crawler::text;

/// A table is a fee table when its header cells mention any of these
const FEE_HEADER_KEYWORDS: &[&str] = &["ücret", "fee", "tuition", "harç"];
const SCHOLARSHIP_KEYWORDS: &[&str] = &["burs", "scholarship", "indirim", "discount"];

pub(super) fn extract(page: &ParsedPage) -> Option<StructuredData> {
    let page_text = page.text();

    let mut fees = FeeStructure {
        tuition_fee: text::extract_price(&page_text),
        ..Default::default()
    };

    for table in page.tables() {
        let header_key: String = table
            .headers
            .iter()
            .map(|h| h.to_lowercase())
            .collect::<Vec<_>>()
            .join(" ");
        if !FEE_HEADER_KEYWORDS.iter().any(|kw| header_key.contains(kw)) {
            continue;
        }
        // first row is the header; data rows map name -> amount
        for row in table.rows.iter().skip(1) {
            if let [name, amount, ..] = row.as_slice() {
                fees.other_fees.insert(name.clone(), amount.clone());
            }
        }
    }

    if let Some(block) = page.heading_block(SCHOLARSHIP_KEYWORDS, &["p", "ul", "ol"]) {
        fees.scholarship_available = Some(true);
        fees.scholarship_details = match block {
            OutlineBlock::List(items) => items,
            OutlineBlock::Paragraph(text) => vec![text],
            OutlineBlock::Table(_) => Vec::new(),
        };
    }

    // scholarship mentions alone do not make a fee page
    (fees.tuition_fee.is_some() || !fees.other_fees.is_empty())
        .then_some(StructuredData::FeeStructure(fees))
}
