//! # Export Module
//!
//! Serializes crawled [`PageRecord`]s to the three output formats: a pretty
//! JSON array, JSONL (one record per line), and a summary CSV with one row
//! per page. Parent directories are created on demand.
//!
//! ## Key Components
//!
//! - `write_json` / `write_jsonl` / `write_csv`: the format writers
//! - `ExportSummary`: totals the CLI prints after a run
//! - `ExportError`: io/serde/csv failures, converted into the crate error

use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::crawler::PageRecord;
use crate::error::Error as CrateError;

/// Error type for export operations
#[derive(Debug, Error)]
pub enum ExportError {
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV serialization error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl From<ExportError> for CrateError {
    fn from(err: ExportError) -> Self {
        match err {
            ExportError::Io(e) => CrateError::Io(e),
            ExportError::Json(e) => CrateError::Json(e),
            ExportError::Csv(e) => CrateError::Export(e.to_string()),
        }
    }
}

/// Totals over an exported record set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportSummary {
    /// Number of records exported
    pub total_pages: usize,
    /// Sum of per-page word counts
    pub total_words: usize,
    /// Records carrying a structured payload
    pub structured_pages: usize,
}

/// Compute the summary the CLI prints after exporting
pub fn summarize(records: &[PageRecord]) -> ExportSummary {
    ExportSummary {
        total_pages: records.len(),
        total_words: records.iter().map(|r| r.word_count).sum(),
        structured_pages: records
            .iter()
            .filter(|r| r.structured_data.is_some())
            .count(),
    }
}

async fn ensure_parent(path: &Path) -> Result<(), ExportError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent).await?;
    }
    Ok(())
}

/// Write all records as a pretty-printed JSON array
pub async fn write_json(records: &[PageRecord], path: &Path) -> Result<(), ExportError> {
    ensure_parent(path).await?;
    let body = serde_json::to_vec_pretty(records)?;
    tokio::fs::write(path, body).await?;
    info!(path = %path.display(), records = records.len(), "JSON export written");
    Ok(())
}

/// Write records as JSONL, one record per line
pub async fn write_jsonl(records: &[PageRecord], path: &Path) -> Result<(), ExportError> {
    ensure_parent(path).await?;
    let mut body = Vec::new();
    for record in records {
        serde_json::to_writer(&mut body, record)?;
        body.push(b'\n');
    }
    tokio::fs::write(path, body).await?;
    info!(path = %path.display(), records = records.len(), "JSONL export written");
    Ok(())
}

/// Write a per-page summary CSV
pub async fn write_csv(records: &[PageRecord], path: &Path) -> Result<(), ExportError> {
    ensure_parent(path).await?;
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "URL",
        "Title",
        "Category",
        "Language",
        "Word Count",
        "Has Structured Data",
    ])?;
    for record in records {
        writer.write_record([
            record.url.as_str(),
            record.title.as_str(),
            record.category.as_str(),
            record.language.as_str(),
            &record.word_count.to_string(),
            if record.structured_data.is_some() {
                "Yes"
            } else {
                "No"
            },
        ])?;
    }
    let body = writer
        .into_inner()
        .map_err(|e| ExportError::Io(e.into_error()))?;
    tokio::fs::write(path, body).await?;
    info!(path = %path.display(), records = records.len(), "CSV export written");
    Ok(())
}
