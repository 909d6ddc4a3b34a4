//! News-article extraction strategy

use crate::crawler::page::ParsedPage;
use crate::crawler::structured::{NewsItem, StructuredData};
use crate::crawler::text;

pub(super) fn extract(page: &ParsedPage) -> Option<StructuredData> {
    let title = page.primary_heading()?;

    let date = page
        .time_datetime()
        .or_else(|| text::extract_dates(&page.text()).into_iter().next());

    let paragraphs = page.article_paragraphs();
    let summary = paragraphs.first().cloned();
    let content = if paragraphs.is_empty() {
        None
    } else {
        Some(paragraphs.join("\n"))
    };

    let item = NewsItem {
        title,
        date,
        category: page.breadcrumb().last().cloned(),
        summary,
        content,
        image_url: page.featured_image(),
    };

    Some(StructuredData::News(item))
}
