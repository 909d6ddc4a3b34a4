//! # Categorizing Crawler Module
//!
//! This module contains the whole crawl pipeline: the frontier scheduler, the
//! URL categorizer, the text normalizer and deduplicator, the heuristic
//! language detector, and the structured-extraction registry. The scheduler
//! drives a fetch -> parse -> categorize -> extract -> enqueue loop over a
//! single domain and accumulates [`PageRecord`]s.
//!
//! ## Key Components
//!
//! - `CrawlerConfig`: crawl budgets, politeness delay, link filters, seeds
//! - `Category`: closed set of content categories, assigned from the URL
//! - `TextNormalizer`: bilingual boilerplate stripping, idempotent
//! - `ParsedPage`: exclusion-aware view over a parsed HTML document
//! - `PageRecord`: the immutable per-page output record
//! - `Crawler`: the frontier scheduler; produces a [`CrawlReport`]
//!
//! ## Flow
//!
//! The scheduler pops a task, fetches and parses the page, categorizes the
//! URL, builds a record (normalize -> detect language -> run extractor), and
//! accepts the record iff it meets the word-count threshold and its content
//! hash is unseen. Duplicate pages still contribute their outbound links to
//! the frontier. Priority links are enqueued unbounded; normal links are
//! capped per page to bound the branching factor.

mod categorize;
mod config;
mod dedup;
mod error;
mod extract;
mod fetch;
mod language;
mod normalize;
mod page;
mod record;
mod scheduler;
mod structured;
pub mod text;

pub use categorize::Category;
pub use config::{CrawlerConfig, CrawlerConfigBuilder};
pub use dedup::{Deduplicator, content_hash};
pub use error::CrawlError;
pub use extract::extractor_for;
pub use fetch::{HttpFetcher, PageFetcher};
pub use language::Language;
pub use normalize::TextNormalizer;
pub use page::{MediaRef, OutlineBlock, ParsedPage, Table};
pub use record::{ContactInfo, PageRecord, RecordBuilder};
pub use scheduler::{CrawlReport, CrawlStats, Crawler, PageEvent, StopReason};
pub use structured::{
    AcademicProgram, AdmissionInfo, DegreeType, Event, FacultyMember, FeeStructure, NewsItem,
    StructuredData, TeachingLanguage,
};
