//! Event extraction strategy

use crate::crawler::page::ParsedPage;
use crate::crawler::structured::{Event, StructuredData};
use crate::crawler::text;
use regex::Regex;
use std::sync::OnceLock;

/// Labels that introduce a venue, bilingual
const LOCATION_LABELS: &[&str] = &["konum", "yer", "location", "venue", "mekan"];

fn time_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b(\d{1,2}:\d{2})\b").expect("valid time regex"))
}

fn location_res() -> &'static Vec<Regex> {
    static RES: OnceLock<Vec<Regex>> = OnceLock::new();
    RES.get_or_init(|| {
        LOCATION_LABELS
            .iter()
            .map(|label| {
                Regex::new(&format!(r"(?i){label}\s*:?\s*([^\n.]+)")).expect("valid location regex")
            })
            .collect()
    })
}

pub(super) fn extract(page: &ParsedPage) -> Option<StructuredData> {
    let title = page.primary_heading()?;
    let page_text = page.text();

    let location = location_res().iter().find_map(|re| {
        re.captures(&page_text)
            .and_then(|caps| caps.get(1))
            .map(|m| text::tidy(m.as_str()))
            .filter(|l| !l.is_empty())
    });

    let event = Event {
        title,
        date: text::extract_dates(&page_text).into_iter().next(),
        time: time_re()
            .captures(&page_text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string()),
        location,
        description: page.meta_description().or_else(|| page.first_paragraph()),
    };

    Some(StructuredData::Event(event))
}
