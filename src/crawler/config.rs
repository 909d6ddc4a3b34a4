//! # Crawler Configuration Module
//!
//! This module provides configuration options for the site crawler, including
//! crawl budgets, rate limiting, frontier tuning, and URL filters. It uses a
//! builder pattern for flexible configuration.
//!
//! ## Key Components
//!
//! - `CrawlerConfig`: The main configuration struct with crawler parameters
//! - `CrawlerConfigBuilder`: Builder pattern implementation for easier configuration
//!
//! ## Features
//!
//! - Defaults sized for a full polite crawl of a university site
//! - Page and wall-clock budgets, per-request delay, per-page link cap
//! - Keyword-driven link prioritization and URL skip filters
//! - User-agent and request-timeout customization

use std::time::Duration;

/// Configuration for the crawler
#[derive(Debug, Clone)]
pub struct CrawlerConfig {
    /// Base URL of the site to crawl; links are kept only on this host
    /// or its subdomains
    pub base_url: String,

    /// Paths appended to the base URL to seed the frontier
    pub seed_paths: Vec<String>,

    /// Maximum number of pages to visit
    pub max_pages: usize,

    /// Wall-clock budget for the whole run
    pub time_budget: Duration,

    /// Delay in milliseconds between requests
    pub request_delay_ms: u64,

    /// Cap on non-priority links enqueued per page; priority links
    /// are not capped
    pub normal_links_per_page: usize,

    /// Minimum word count for a page to be kept
    pub min_word_count: usize,

    /// Substrings that mark a link as priority
    pub priority_keywords: Vec<String>,

    /// URL substrings (file extensions) that mark a link as an asset download
    pub skip_extensions: Vec<String>,

    /// URL substrings that mark a link as a login/admin page
    pub skip_path_keywords: Vec<String>,

    /// User agent to use for requests
    pub user_agent: String,

    /// Per-request timeout
    pub fetch_timeout: Duration,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.izu.edu.tr".to_string(),
            seed_paths: [
                "",
                "/en",
                "/tr",
                "/en/academic",
                "/en/faculties",
                "/en/students",
                "/en/international",
                "/tr/akademik",
                "/tr/fakulteler",
                "/tr/ogrenci",
            ]
            .iter()
            .map(|p| p.to_string())
            .collect(),
            max_pages: 500,
            time_budget: Duration::from_secs(40 * 60),
            request_delay_ms: 500,
            normal_links_per_page: 30,
            min_word_count: 30,
            priority_keywords: [
                "program", "faculty", "fakulte", "fee", "ucret", "admission", "basvuru",
                "department", "bolum", "master", "phd", "lisans",
            ]
            .iter()
            .map(|k| k.to_string())
            .collect(),
            skip_extensions: [
                ".pdf", ".jpg", ".jpeg", ".png", ".gif", ".doc", ".docx", ".zip", ".mp4",
                ".mp3", ".avi", ".xlsx", ".xml",
            ]
            .iter()
            .map(|e| e.to_string())
            .collect(),
            skip_path_keywords: ["login", "signin", "logout", "admin", "wp-admin"]
                .iter()
                .map(|k| k.to_string())
                .collect(),
            user_agent: format!("unicrawl/{}", env!("CARGO_PKG_VERSION")),
            fetch_timeout: Duration::from_secs(20),
        }
    }
}

/// Builder for CrawlerConfig
#[derive(Debug, Default)]
pub struct CrawlerConfigBuilder {
    config: CrawlerConfig,
}

impl CrawlerConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: CrawlerConfig::default(),
        }
    }

    /// Set the base URL of the site to crawl
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Set the seed paths appended to the base URL
    pub fn seed_paths(mut self, seed_paths: Vec<String>) -> Self {
        self.config.seed_paths = seed_paths;
        self
    }

    /// Set the maximum number of pages to visit
    pub fn max_pages(mut self, max_pages: usize) -> Self {
        self.config.max_pages = max_pages;
        self
    }

    /// Set the wall-clock budget for the run
    pub fn time_budget(mut self, time_budget: Duration) -> Self {
        self.config.time_budget = time_budget;
        self
    }

    /// Set the delay in milliseconds between requests
    pub fn request_delay_ms(mut self, request_delay_ms: u64) -> Self {
        self.config.request_delay_ms = request_delay_ms;
        self
    }

    /// Set the cap on non-priority links enqueued per page
    pub fn normal_links_per_page(mut self, normal_links_per_page: usize) -> Self {
        self.config.normal_links_per_page = normal_links_per_page;
        self
    }

    /// Set the minimum word count for a page to be kept
    pub fn min_word_count(mut self, min_word_count: usize) -> Self {
        self.config.min_word_count = min_word_count;
        self
    }

    /// Set the substrings that mark a link as priority
    pub fn priority_keywords(mut self, priority_keywords: Vec<String>) -> Self {
        self.config.priority_keywords = priority_keywords;
        self
    }

    /// Set the user agent to use for requests
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Set the per-request timeout
    pub fn fetch_timeout(mut self, fetch_timeout: Duration) -> Self {
        self.config.fetch_timeout = fetch_timeout;
        self
    }

    /// Build the configuration
    pub fn build(self) -> CrawlerConfig {
        self.config
    }
}

impl CrawlerConfig {
    /// Create a new builder
    pub fn builder() -> CrawlerConfigBuilder {
        CrawlerConfigBuilder::new()
    }

    /// Get the request delay as a Duration
    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }

    /// Seed URLs, base URL plus each seed path
    pub fn seed_urls(&self) -> Vec<String> {
        self.seed_paths
            .iter()
            .map(|p| format!("{}{}", self.base_url.trim_end_matches('/'), p))
            .collect()
    }

    /// Host part of the base URL, if it parses
    pub fn base_host(&self) -> Option<String> {
        url::Url::parse(&self.base_url)
            .ok()
            .and_then(|u| u.host_str().map(|h| h.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_budgets() {
        let config = CrawlerConfig::default();
        assert_eq!(config.max_pages, 500);
        assert_eq!(config.time_budget, Duration::from_secs(2400));
        assert_eq!(config.request_delay(), Duration::from_millis(500));
        assert_eq!(config.normal_links_per_page, 30);
        assert_eq!(config.min_word_count, 30);
        assert_eq!(config.seed_paths.len(), 10);
    }

    #[test]
    fn test_builder_overrides() {
        let config = CrawlerConfig::builder()
            .base_url("https://example.edu")
            .max_pages(10)
            .request_delay_ms(0)
            .build();
        assert_eq!(config.base_url, "https://example.edu");
        assert_eq!(config.max_pages, 10);
        assert_eq!(config.request_delay(), Duration::ZERO);
        // untouched fields keep their defaults
        assert_eq!(config.min_word_count, 30);
    }

    #[test]
    fn test_seed_urls_join_base_and_path() {
        let config = CrawlerConfig::builder()
            .base_url("https://example.edu/")
            .seed_paths(vec!["".to_string(), "/en".to_string()])
            .build();
        assert_eq!(
            config.seed_urls(),
            vec!["https://example.edu", "https://example.edu/en"]
        );
    }

    #[test]
    fn test_base_host() {
        let config = CrawlerConfig::default();
        assert_eq!(config.base_host().as_deref(), Some("www.izu.edu.tr"));
    }
}
