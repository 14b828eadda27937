//! Sumi-Sift main entry point
//!
//! This is the command-line interface for the Sumi-Sift keyword crawler.

use clap::Parser;
use std::path::{Path, PathBuf};
use sumi_sift::config::{load_config_with_hash, validate, Config};
use sumi_sift::crawler::{parse_keywords, Crawler};
use sumi_sift::output::{format_preview, print_statistics, write_export, CrawlStatistics, ExportFormat};
use sumi_sift::storage::{ResultStore, SqliteStorage};
use tracing_subscriber::EnvFilter;

/// Sumi-Sift: a single-domain keyword crawler
///
/// Sumi-Sift crawls one website breadth-first from a seed URL, extracts the
/// visible text of each page, and keeps the lines that mention one of the
/// given keywords. Results are previewed, stored under a run id, and exported
/// as text or CSV.
#[derive(Parser, Debug)]
#[command(name = "sumi-sift")]
#[command(version = "1.0.0")]
#[command(about = "A single-domain keyword crawler", long_about = None)]
struct Cli {
    /// Seed URL to start crawling from (https:// is assumed if omitted)
    #[arg(value_name = "URL", required_unless_present_any = ["export_run", "list_runs"])]
    url: Option<String>,

    /// Comma-separated keywords, e.g. "contact, email"
    #[arg(short, long, default_value = "")]
    keywords: String,

    /// Maximum number of pages to visit
    #[arg(long)]
    max_pages: Option<usize>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Export format: text or csv (also sets the export file's extension unless --output is given)
    #[arg(short, long)]
    format: Option<ExportFormat>,

    /// Path to write the export to
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Print crawl statistics after the preview
    #[arg(long)]
    stats: bool,

    /// Do not save the report to the result store
    #[arg(long)]
    no_store: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Export a previously stored run instead of crawling
    #[arg(long, value_name = "RUN_ID", conflicts_with_all = ["url", "list_runs"])]
    export_run: Option<i64>,

    /// List stored runs and exit
    #[arg(long, conflicts_with_all = ["url", "export_run"])]
    list_runs: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match load_configuration(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e);
        }
    };

    if cli.list_runs {
        handle_list_runs(&config)
    } else if let Some(run_id) = cli.export_run {
        handle_export_run(&config, run_id)
    } else {
        handle_crawl(&cli, &config).await
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("sumi_sift=info,warn"),
            1 => EnvFilter::new("sumi_sift=debug,info"),
            2 => EnvFilter::new("sumi_sift=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the config file if one was given, then applies command-line overrides
fn load_configuration(cli: &Cli) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => Config::default(),
    };

    if let Some(max_pages) = cli.max_pages {
        config.crawler.max_pages = max_pages;
    }
    if let Some(format) = cli.format {
        config.output.format = format;
        // Keep the configured file name, but give it the chosen format's extension
        config.output.export_path = Path::new(&config.output.export_path)
            .with_extension(format.extension())
            .display()
            .to_string();
    }
    if let Some(output) = &cli.output {
        config.output.export_path = output.display().to_string();
    }

    validate(&config)?;
    Ok(config)
}

/// Handles the main crawl operation
async fn handle_crawl(cli: &Cli, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let seed = cli.url.as_deref().unwrap_or_default();
    let keywords = parse_keywords(&cli.keywords);

    if keywords.is_empty() {
        tracing::warn!("No keywords given; no lines will match");
    }

    let crawler = Crawler::new(config)?;
    let report = match crawler.crawl(seed, &keywords, config.crawler.max_pages).await {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            return Err(e.into());
        }
    };

    println!("{}", format_preview(&report));

    if cli.stats {
        print_statistics(&CrawlStatistics::from_report(&report));
    }

    if !cli.no_store {
        let mut storage = SqliteStorage::new(Path::new(&config.output.database_path))?;
        let run_id = storage.save_report(&report)?;
        println!("✓ Stored as run {} in {}", run_id, config.output.database_path);
    }

    write_export(
        &report.results,
        config.output.format,
        Path::new(&config.output.export_path),
    )?;
    println!(
        "✓ Exported {} results to {}",
        report.results.len(),
        config.output.export_path
    );

    Ok(())
}

/// Handles --export-run: writes a stored run's results without crawling
fn handle_export_run(config: &Config, run_id: i64) -> Result<(), Box<dyn std::error::Error>> {
    let storage = SqliteStorage::new(Path::new(&config.output.database_path))?;
    let results = storage.load_results(run_id)?;

    write_export(
        &results,
        config.output.format,
        Path::new(&config.output.export_path),
    )?;
    println!(
        "✓ Exported {} results from run {} to {}",
        results.len(),
        run_id,
        config.output.export_path
    );

    Ok(())
}

/// Handles --list-runs: prints every stored run
fn handle_list_runs(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let storage = SqliteStorage::new(Path::new(&config.output.database_path))?;
    let runs = storage.list_runs()?;

    println!("Database: {}\n", config.output.database_path);

    if runs.is_empty() {
        println!("No stored runs");
        return Ok(());
    }

    for run in runs {
        println!(
            "  #{} {} ({}) - {} visited, {} with matches",
            run.id, run.seed_url, run.created_at, run.visited_count, run.result_count
        );
    }

    Ok(())
}
