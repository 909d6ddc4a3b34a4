//! Frontier scheduler
//!
//! The crawl loop: pop a task, fetch, parse, categorize, build a record,
//! accept it iff it clears the word-count threshold and its content hash is
//! unseen, then enqueue the page's outbound links with priority links first.
//! Budgets (page count and wall clock) are checked between iterations, so a
//! run always ends with a complete [`CrawlReport`].

use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;
use std::time::{Duration, Instant};

use serde::Serialize;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

use super::categorize::Category;
use super::config::CrawlerConfig;
use super::dedup::Deduplicator;
use super::error::CrawlError;
use super::fetch::{HttpFetcher, PageFetcher};
use super::page::ParsedPage;
use super::record::{PageRecord, RecordBuilder};

const PROGRESS_EVERY: usize = 25;

/// A URL waiting in the frontier
#[derive(Debug, Clone)]
struct CrawlTask {
    url: String,
    priority: bool,
}

/// FIFO frontier with a membership mirror so a URL is never queued twice
#[derive(Debug, Default)]
struct Frontier {
    queue: VecDeque<CrawlTask>,
    queued: HashSet<String>,
}

impl Frontier {
    fn push(&mut self, task: CrawlTask) {
        if self.queued.insert(task.url.clone()) {
            self.queue.push_back(task);
        }
    }

    fn pop(&mut self) -> Option<CrawlTask> {
        let task = self.queue.pop_front()?;
        self.queued.remove(&task.url);
        Some(task)
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Counters accumulated over a run
#[derive(Debug, Clone, Default, Serialize)]
pub struct CrawlStats {
    /// Pages visited, successful or not
    pub pages_crawled: usize,
    /// Pages accepted into the result set
    pub pages_saved: usize,
    /// Pages rejected for an already-seen content hash
    pub duplicates_skipped: usize,
    /// Pages rejected for falling below the word-count threshold
    pub pages_below_threshold: usize,
    /// Fetch or parse failures
    pub fetch_errors: usize,
    /// Accepted pages per category
    pub categories: HashMap<Category, usize>,
}

/// Why the crawl loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// The page budget was spent
    PageBudget,
    /// The wall-clock budget was spent
    TimeBudget,
    /// The frontier ran dry
    FrontierExhausted,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StopReason::PageBudget => "page budget reached",
            StopReason::TimeBudget => "time budget reached",
            StopReason::FrontierExhausted => "frontier exhausted",
        };
        f.write_str(s)
    }
}

/// Complete result of a crawl run
#[derive(Debug)]
pub struct CrawlReport {
    /// Accepted page records, in crawl order
    pub records: Vec<PageRecord>,
    /// Run counters
    pub stats: CrawlStats,
    /// Why the run ended
    pub stop_reason: StopReason,
    /// Wall-clock duration of the run
    pub elapsed: Duration,
    /// URLs still queued when the run ended
    pub frontier_len: usize,
}

/// Per-page progress notification for the CLI
#[derive(Debug, Clone)]
pub struct PageEvent {
    /// URL just visited
    pub url: String,
    /// Pages visited so far
    pub pages_crawled: usize,
    /// Pages accepted so far
    pub pages_saved: usize,
}

/// The frontier scheduler, generic over its fetch collaborator
pub struct Crawler<F: PageFetcher> {
    config: CrawlerConfig,
    fetcher: F,
    builder: RecordBuilder,
}

impl Crawler<HttpFetcher> {
    /// Build a crawler with the production HTTP fetcher
    pub fn new(config: CrawlerConfig) -> Result<Self, CrawlError> {
        let fetcher = HttpFetcher::new(&config)?;
        Ok(Self::with_fetcher(config, fetcher))
    }
}

impl<F: PageFetcher> Crawler<F> {
    /// Build a crawler over a custom fetch collaborator
    pub fn with_fetcher(config: CrawlerConfig, fetcher: F) -> Self {
        Self {
            config,
            fetcher,
            builder: RecordBuilder::new(),
        }
    }

    /// Run the crawl to completion
    pub async fn run(&self) -> CrawlReport {
        self.run_with_progress(None).await
    }

    /// Run the crawl, sending a [`PageEvent`] after every visited page
    #[instrument(skip(self, progress), fields(base_url = %self.config.base_url))]
    pub async fn run_with_progress(
        &self,
        progress: Option<mpsc::Sender<PageEvent>>,
    ) -> CrawlReport {
        let start = Instant::now();
        let mut frontier = Frontier::default();
        let mut visited: HashSet<String> = HashSet::new();
        let mut dedup = Deduplicator::new();
        let mut stats = CrawlStats::default();
        let mut records: Vec<PageRecord> = Vec::new();

        for url in self.config.seed_urls() {
            frontier.push(CrawlTask {
                url,
                priority: false,
            });
        }

        info!(
            max_pages = self.config.max_pages,
            time_budget_secs = self.config.time_budget.as_secs(),
            seeds = frontier.len(),
            "starting crawl"
        );

        let stop_reason = loop {
            if stats.pages_crawled >= self.config.max_pages {
                break StopReason::PageBudget;
            }
            if start.elapsed() > self.config.time_budget {
                break StopReason::TimeBudget;
            }
            let Some(task) = frontier.pop() else {
                break StopReason::FrontierExhausted;
            };
            if !visited.insert(task.url.clone()) {
                continue;
            }
            stats.pages_crawled += 1;
            debug!(
                url = %task.url,
                priority = task.priority,
                n = stats.pages_crawled,
                "visiting page"
            );

            // parse inside a sync block: the DOM is not Send and must be
            // dropped before the next await point
            let links = match self.fetcher.fetch(&task.url).await {
                Ok(body) => self.process_page(&task.url, &body, &mut dedup, &mut stats, &mut records),
                Err(err) => {
                    warn!(url = %task.url, error = %err, "fetch failed, skipping page");
                    stats.fetch_errors += 1;
                    Vec::new()
                }
            };

            self.enqueue_links(links, &visited, &mut frontier);

            if let Some(tx) = &progress {
                let _ = tx
                    .send(PageEvent {
                        url: task.url,
                        pages_crawled: stats.pages_crawled,
                        pages_saved: stats.pages_saved,
                    })
                    .await;
            }

            if stats.pages_crawled % PROGRESS_EVERY == 0 {
                info!(
                    pages_crawled = stats.pages_crawled,
                    pages_saved = stats.pages_saved,
                    duplicates_skipped = stats.duplicates_skipped,
                    queue = frontier.len(),
                    elapsed_secs = start.elapsed().as_secs(),
                    "crawl progress"
                );
            }

            let delay = self.config.request_delay();
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
        };

        let elapsed = start.elapsed();
        info!(
            pages_crawled = stats.pages_crawled,
            pages_saved = stats.pages_saved,
            duplicates_skipped = stats.duplicates_skipped,
            fetch_errors = stats.fetch_errors,
            elapsed_secs = elapsed.as_secs(),
            %stop_reason,
            "crawl finished"
        );

        CrawlReport {
            records,
            stats,
            stop_reason,
            elapsed,
            frontier_len: frontier.len(),
        }
    }

    /// Parse a fetched body, record it if acceptable, return its links.
    /// Duplicate and below-threshold pages still contribute links.
    fn process_page(
        &self,
        url: &str,
        body: &str,
        dedup: &mut Deduplicator,
        stats: &mut CrawlStats,
        records: &mut Vec<PageRecord>,
    ) -> Vec<String> {
        let page = match ParsedPage::new(url, body) {
            Ok(page) => page,
            Err(err) => {
                warn!(url, error = %err, "page did not parse, skipping");
                stats.fetch_errors += 1;
                return Vec::new();
            }
        };

        let category = Category::from_url(url);
        let record = self.builder.build(url, category, &page);
        let links = page.links();

        if record.word_count < self.config.min_word_count {
            debug!(url, words = record.word_count, "below word threshold, skipped");
            stats.pages_below_threshold += 1;
        } else if dedup.is_duplicate(&record.content_hash) {
            debug!(url, "duplicate content, skipped");
            stats.duplicates_skipped += 1;
        } else {
            dedup.register(record.content_hash.clone());
            stats.pages_saved += 1;
            *stats.categories.entry(category).or_insert(0) += 1;
            records.push(record);
        }

        links
    }

    /// Filter a page's outbound links and enqueue them, priority first.
    /// Priority links are unbounded; normal links are capped per page.
    fn enqueue_links(&self, links: Vec<String>, visited: &HashSet<String>, frontier: &mut Frontier) {
        let base_host = self.config.base_host();
        let (priority, normal): (Vec<String>, Vec<String>) = links
            .into_iter()
            .filter(|link| self.keep_link(link, base_host.as_deref(), visited))
            .partition(|link| {
                let lower = link.to_lowercase();
                self.config
                    .priority_keywords
                    .iter()
                    .any(|kw| lower.contains(kw))
            });

        for url in priority {
            frontier.push(CrawlTask {
                url,
                priority: true,
            });
        }
        for url in normal.into_iter().take(self.config.normal_links_per_page) {
            frontier.push(CrawlTask {
                url,
                priority: false,
            });
        }
    }

    fn keep_link(&self, link: &str, base_host: Option<&str>, visited: &HashSet<String>) -> bool {
        if visited.contains(link) {
            return false;
        }
        let lower = link.to_lowercase();
        if self.config.skip_extensions.iter().any(|ext| lower.contains(ext)) {
            return false;
        }
        if self
            .config
            .skip_path_keywords
            .iter()
            .any(|kw| lower.contains(kw))
        {
            return false;
        }
        let Some(base_host) = base_host else {
            return false;
        };
        match url::Url::parse(link).ok().and_then(|u| u.host_str().map(String::from)) {
            Some(host) => host == base_host || host.ends_with(&format!(".{base_host}")),
            None => false,
        }
    }
}
