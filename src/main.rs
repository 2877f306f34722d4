//! Seedcrawl main entry point
//!
//! This is the command-line interface for the seedcrawl site crawler.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use seedcrawl::config::{load_config, validate, Config};
use seedcrawl::crawler::crawl;
use seedcrawl::output::{print_statistics, ReportBuilder};
use seedcrawl::PageRecord;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Page budget when neither the command line nor a config file sets one
const CLI_DEFAULT_MAX_PAGES: usize = 10;

/// Titles longer than this are cut in the progress output
const TITLE_DISPLAY_CHARS: usize = 80;

/// Seedcrawl: a bounded breadth-first site crawler
///
/// Seedcrawl walks a website outward from one seed URL, records the title,
/// a text excerpt, links and images of every page, and writes CSV, JSON
/// and Markdown reports.
#[derive(Parser, Debug)]
#[command(name = "seedcrawl")]
#[command(version)]
#[command(about = "A bounded breadth-first site crawler", long_about = None)]
struct Cli {
    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Crawl a site and write reports
    Crawl(CrawlArgs),

    /// Run the live web dashboard
    Serve(ServeArgs),
}

#[derive(Args, Debug)]
struct CrawlArgs {
    /// URL to start crawling from
    #[arg(value_name = "URL")]
    url: String,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Maximum number of pages to crawl
    #[arg(long)]
    max_pages: Option<usize>,

    /// Maximum link depth from the start URL
    #[arg(long)]
    max_depth: Option<u32>,

    /// Follow links to other domains
    #[arg(long)]
    include_external: bool,

    /// Do not record image sources
    #[arg(long)]
    no_images: bool,

    /// Do not record or follow links
    #[arg(long)]
    no_links: bool,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// User-Agent header to send
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Directory for report files
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Base file name of the reports
    #[arg(long, value_name = "NAME")]
    report_name: Option<String>,
}

#[derive(Args, Debug)]
struct ServeArgs {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 8000)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    match cli.command {
        Command::Crawl(args) => handle_crawl(args).await,
        Command::Serve(args) => handle_serve(args).await,
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("seedcrawl=info,warn")),
            1 => EnvFilter::new("seedcrawl=debug,info"),
            2 => EnvFilter::new("seedcrawl=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Builds the run configuration: config file first, then flags on top
fn build_config(args: CrawlArgs) -> anyhow::Result<Config> {
    let mut config = match &args.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("failed to load config {}", path.display()))?
        }
        None => {
            let mut config = Config::default();
            config.crawler.max_pages = CLI_DEFAULT_MAX_PAGES;
            config
        }
    };

    let crawler = &mut config.crawler;
    crawler.start_url = args.url;
    if let Some(max_pages) = args.max_pages {
        crawler.max_pages = max_pages;
    }
    if let Some(max_depth) = args.max_depth {
        crawler.max_depth = max_depth;
    }
    if args.include_external {
        crawler.same_domain_only = false;
    }
    if args.no_images {
        crawler.include_images = false;
    }
    if args.no_links {
        crawler.extract_links = false;
    }
    if let Some(timeout) = args.timeout {
        crawler.timeout_secs = timeout;
    }
    if let Some(user_agent) = args.user_agent {
        crawler.user_agent = user_agent;
    }

    if let Some(output_dir) = args.output_dir {
        config.output.output_dir = output_dir;
    }
    if let Some(report_name) = args.report_name {
        config.output.report_name = report_name;
    }

    validate(&config).context("invalid crawl settings")?;
    Ok(config)
}

/// Handles the `crawl` subcommand
async fn handle_crawl(args: CrawlArgs) -> anyhow::Result<()> {
    let config = build_config(args)?;

    let pages = crawl(config.crawler.clone(), print_page)
        .await
        .context("crawl failed")?;

    let builder = ReportBuilder::from_config(&pages, &config.output);
    let paths = builder.save().context("failed to save reports")?;

    println!("\nReports:");
    for (kind, path) in paths.entries() {
        println!("  {:<9} {}", kind, path.display());
    }
    println!();
    print_statistics(&builder.statistics());

    Ok(())
}

/// Handles the `serve` subcommand
async fn handle_serve(args: ServeArgs) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .with_context(|| format!("invalid listen address {}:{}", args.host, args.port))?;

    seedcrawl::dashboard::serve(addr).await
}

/// Progress sink for the CLI
fn print_page(page: &PageRecord) {
    println!("[depth={}] {} {}", page.depth, page.status_code, page.url);
    println!("  Title: {}", display_title(&page.title));
}

fn display_title(title: &str) -> String {
    if title.is_empty() {
        return "<no title>".to_string();
    }
    title.chars().take(TITLE_DISPLAY_CHARS).collect()
}
