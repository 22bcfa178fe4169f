use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use hero_scrape::{url_utils, ScrapeOptions, Scraper};

#[derive(Parser)]
#[command(name = "hero-scrape")]
#[command(about = "Find hero images, favicons and logos for web pages")]
#[command(version)]
struct Cli {
    /// Page URLs to scrape
    urls: Vec<String>,

    /// File with page URLs (one per line, or any text containing http(s) links)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Where to write the JSON results, `-` for stdout
    #[arg(short, long, default_value = "result.json")]
    output: PathBuf,

    /// Candidates inspected per pipeline stage
    #[arg(long, default_value_t = 20)]
    max_images: usize,

    /// Images at or below this many pixels in either dimension are thumbnails
    #[arg(long, default_value_t = 150)]
    min_dimension: u32,

    /// Page request timeout in seconds
    #[arg(long, default_value_t = 30)]
    page_timeout: u64,

    /// Image request timeout in seconds
    #[arg(long, default_value_t = 10)]
    asset_timeout: u64,

    /// Skip favicon lookup
    #[arg(long)]
    no_favicon: bool,

    /// Skip logo lookup
    #[arg(long)]
    no_logo: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,
}

impl Cli {
    fn options(&self) -> ScrapeOptions {
        ScrapeOptions {
            max_images_to_check: self.max_images,
            min_dimension: self.min_dimension,
            page_timeout: Duration::from_secs(self.page_timeout),
            asset_timeout: Duration::from_secs(self.asset_timeout),
            locate_favicon: !self.no_favicon,
            locate_logo: !self.no_logo,
            ..ScrapeOptions::default()
        }
    }

    fn collect_urls(&self) -> Result<Vec<String>> {
        let mut urls = self.urls.clone();

        if let Some(path) = &self.input {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            urls.extend(url_utils::find_page_urls(&text).into_iter().map(String::from));
        }

        if urls.is_empty() {
            bail!("no URLs given; pass them as arguments or with --input");
        }
        Ok(urls)
    }
}

fn init_logging(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.json_logs);

    let urls = cli.collect_urls()?;
    let scraper = Scraper::http(cli.options()).context("failed to set up HTTP client")?;
    let results = scraper.scrape_all(&urls);

    let found = results.iter().filter(|r| r.has_image()).count();
    let json = serde_json::to_string_pretty(&results)?;

    if cli.output.as_os_str() == "-" {
        let mut out = BufWriter::new(io::stdout().lock());
        writeln!(out, "{json}")?;
        out.flush()?;
    } else {
        fs::write(&cli.output, json)
            .with_context(|| format!("failed to write {}", cli.output.display()))?;
        info!(path = %cli.output.display(), "results saved");
    }

    info!(processed = results.len(), images_found = found, "done");
    Ok(())
}
