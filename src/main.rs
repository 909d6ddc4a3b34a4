//! # Unicrawl CLI Application
//!
//! Command-line interface for the categorizing site crawler.
//!
//! ## Key Components
//!
//! - CLI argument parsing with clap
//! - `crawl` subcommand: run a full crawl and export the results
//!
//! ## Features
//!
//! - Configurable page and time budgets with a politeness delay
//! - Test mode for a quick 10-page smoke run
//! - Progress bar over visited pages
//! - JSON, JSONL, and CSV exports plus a final statistics block

mod telemetry;

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, CommandFactory, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::mpsc;
use tracing::instrument;
use unicrawl::crawler::{CrawlReport, Crawler, CrawlerConfig, PageEvent};
use unicrawl::export;

#[derive(Parser)]
#[command(author, version, about = "A categorizing web crawler with structured data extraction", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Crawl a site and export the categorized records
    Crawl(CrawlArgs),
}

#[derive(Args, Debug)]
struct CrawlArgs {
    /// Base URL to crawl
    #[arg(required = true)]
    url: String,

    /// Maximum number of pages to visit
    #[arg(short = 'p', long, default_value = "500")]
    max_pages: usize,

    /// Maximum crawl time in minutes
    #[arg(short = 't', long, default_value = "40")]
    max_time_mins: u64,

    /// Delay between requests in milliseconds
    #[arg(short, long, default_value = "500")]
    delay_ms: u64,

    /// Directory for the exported files
    #[arg(short, long, default_value = "output")]
    output_dir: PathBuf,

    /// Quick smoke run: 10 pages, 5 minutes
    #[arg(long)]
    test_mode: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    telemetry::init_tracing_subscriber();

    match cli.command {
        Some(Commands::Crawl(args)) => {
            crawl_command(args).await?;
        }
        None => {
            Cli::command().print_help()?;
        }
    }

    Ok(())
}

#[instrument(skip(args), fields(url = %args.url))]
async fn crawl_command(args: CrawlArgs) -> anyhow::Result<()> {
    let (max_pages, max_time_mins) = if args.test_mode {
        (10, 5)
    } else {
        (args.max_pages, args.max_time_mins)
    };

    let config = CrawlerConfig::builder()
        .base_url(args.url.clone())
        .max_pages(max_pages)
        .time_budget(Duration::from_secs(max_time_mins * 60))
        .request_delay_ms(args.delay_ms)
        .build();

    println!("Crawling {} (max {} pages, {} minutes)", args.url, max_pages, max_time_mins);

    let crawler = Crawler::new(config)?;

    // Progress channel: the scheduler sends an event per visited page
    let (progress_sender, mut progress_receiver) = mpsc::channel::<PageEvent>(100);

    let progress_bar = ProgressBar::new(max_pages as u64);
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} ({eta}) {msg}")?
            .progress_chars("##-"),
    );
    progress_bar.set_message("Crawling...");

    let progress_handle = tokio::spawn({
        let progress_bar = progress_bar.clone();
        async move {
            while let Some(event) = progress_receiver.recv().await {
                progress_bar.inc(1);
                progress_bar.set_message(format!(
                    "{} saved | {}",
                    event.pages_saved, event.url
                ));
            }
            progress_bar.finish_with_message("Crawl finished");
        }
    });

    let report = crawler.run_with_progress(Some(progress_sender)).await;
    progress_handle.await?;

    write_exports(&report, &args.output_dir).await?;
    print_stats(&report);

    Ok(())
}

async fn write_exports(report: &CrawlReport, output_dir: &std::path::Path) -> anyhow::Result<()> {
    if report.records.is_empty() {
        println!("No pages accepted, nothing to export");
        return Ok(());
    }

    let json_path = output_dir.join("crawl_data.json");
    let jsonl_path = output_dir.join("crawl_data.jsonl");
    let csv_path = output_dir.join("crawl_data.csv");

    export::write_json(&report.records, &json_path).await?;
    export::write_jsonl(&report.records, &jsonl_path).await?;
    export::write_csv(&report.records, &csv_path).await?;

    let summary = export::summarize(&report.records);
    println!("\nExported {} pages to {}", summary.total_pages, output_dir.display());
    println!("  Total words: {}", summary.total_words);
    println!("  Pages with structured data: {}", summary.structured_pages);

    Ok(())
}

fn print_stats(report: &CrawlReport) {
    let stats = &report.stats;
    println!("\nCrawl complete ({})", report.stop_reason);
    println!("  Pages crawled: {}", stats.pages_crawled);
    println!("  Pages saved: {}", stats.pages_saved);
    println!("  Duplicates skipped: {}", stats.duplicates_skipped);
    println!("  Below word threshold: {}", stats.pages_below_threshold);
    println!("  Fetch errors: {}", stats.fetch_errors);
    println!("  Elapsed: {:.1} minutes", report.elapsed.as_secs_f64() / 60.0);

    if !stats.categories.is_empty() {
        println!("\nCategories:");
        let mut categories: Vec<_> = stats.categories.iter().collect();
        categories.sort_by(|a, b| b.1.cmp(a.1));
        for (category, count) in categories {
            println!("  {category}: {count}");
        }
    }
}
