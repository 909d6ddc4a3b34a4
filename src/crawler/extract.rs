//! Structured-extraction registry
//!
//! Dispatch from [`Category`] to the matching extraction strategy is a data
//! table, not a conditional chain: registering a new category means adding a
//! row here and a strategy module, never touching existing strategies.
//!
//! Extractors are pure functions over a [`ParsedPage`]. The registry runs
//! them under a panic guard: a broken extraction logs a warning and yields
//! no payload, and the page is still accepted with its unstructured record.

mod admission;
mod event;
mod faculty;
mod fees;
mod news;
mod program;

use crate::crawler::categorize::Category;
use crate::crawler::page::ParsedPage;
use crate::crawler::structured::StructuredData;
use std::panic::{AssertUnwindSafe, catch_unwind};
use tracing::warn;

/// An extraction strategy: parsed page in, category-specific payload out
pub type Extractor = fn(&ParsedPage) -> Option<StructuredData>;

/// Category-to-strategy table. Categories absent here (research, student
/// services, departments, general) have no structured form.
const REGISTRY: &[(Category, Extractor)] = &[
    (Category::AcademicProgram, program::extract),
    (Category::FacultyMember, faculty::extract),
    (Category::Admission, admission::extract),
    (Category::FeeStructure, fees::extract),
    (Category::Event, event::extract),
    (Category::News, news::extract),
];

/// Look up the extraction strategy registered for a category
pub fn extractor_for(category: Category) -> Option<Extractor> {
    REGISTRY
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, extractor)| *extractor)
}

/// Run the registered extractor for a category, containing any panic
pub(crate) fn run_extractor(category: Category, page: &ParsedPage) -> Option<StructuredData> {
    let extractor = extractor_for(category)?;
    run_guarded(extractor, page)
}

fn run_guarded(extractor: Extractor, page: &ParsedPage) -> Option<StructuredData> {
    match catch_unwind(AssertUnwindSafe(|| extractor(page))) {
        Ok(payload) => payload,
        Err(_) => {
            warn!(url = %page.url(), "structured extraction panicked, page kept without payload");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registered_categories() {
        assert!(extractor_for(Category::AcademicProgram).is_some());
        assert!(extractor_for(Category::FacultyMember).is_some());
        assert!(extractor_for(Category::Admission).is_some());
        assert!(extractor_for(Category::FeeStructure).is_some());
        assert!(extractor_for(Category::Event).is_some());
        assert!(extractor_for(Category::News).is_some());
    }

    #[test]
    fn test_unregistered_categories_yield_none() {
        assert!(extractor_for(Category::Research).is_none());
        assert!(extractor_for(Category::StudentService).is_none());
        assert!(extractor_for(Category::Department).is_none());
        assert!(extractor_for(Category::General).is_none());
    }

    #[test]
    fn test_empty_page_is_safe_for_every_strategy() {
        let page = ParsedPage::new("https://www.izu.edu.tr/empty", "").unwrap();
        for (category, _) in REGISTRY {
            assert!(
                run_extractor(*category, &page).is_none(),
                "{category} emitted a payload for an empty page"
            );
        }
    }

    #[test]
    fn test_panicking_extractor_is_contained() {
        fn broken(_page: &ParsedPage) -> Option<StructuredData> {
            panic!("boom");
        }
        let page = ParsedPage::new("https://www.izu.edu.tr/x", "<html></html>").unwrap();
        assert!(run_guarded(broken, &page).is_none());
    }
}
