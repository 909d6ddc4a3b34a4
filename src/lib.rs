//! # unicrawl - Categorizing Crawler for University Websites
//!
//! This crate implements a single-domain web crawler that classifies pages by
//! URL, extracts structured data per content category, and deduplicates pages
//! by content hash. It produces one immutable [`crawler::PageRecord`] per
//! accepted page, suitable for feeding a retrieval pipeline or exporting to
//! record-oriented formats.
//!
//! ## Features
//!
//! - Keyword-prioritized breadth-first crawl frontier with page and time budgets
//! - URL categorization into a fixed set of university content categories
//! - Bilingual (Turkish/English) boilerplate stripping and text normalization
//! - Content-hash deduplication across distinct URLs
//! - Per-category structured extractors (programs, faculty, admissions, fees,
//!   events, news) dispatched through a data-driven registry
//! - JSON, JSONL, and CSV export
//!
//! ## Example
//!
//! ```rust,no_run
//! use unicrawl::crawler::{Crawler, CrawlerConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = CrawlerConfig::builder()
//!         .base_url("https://www.izu.edu.tr")
//!         .max_pages(100)
//!         .build();
//!
//!     let report = Crawler::new(config)?.run().await;
//!
//!     println!("saved {} pages", report.stats.pages_saved);
//!     Ok(())
//! }
//! ```

mod error;

pub mod crawler;
pub mod export;

pub use error::Error;

/// Re-export of common types for public use
pub mod prelude {
    pub use crate::error::Error;
    pub use crate::error::Result;
}
