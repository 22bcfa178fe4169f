//! # hero-scrape
//!
//! Picks a representative hero image, a favicon and a logo for web pages,
//! for use in link-preview cards.
//!
//! ## Quick Start
//!
//! ```rust
//! use hero_scrape::{scrape_html, ScrapeOptions};
//!
//! let html = r#"<html><head><link rel="icon" href="/icon.png"></head>
//! <body><header><a href="/"><img src="/logo.svg"></a></header>
//! <div class="story"><img src="/hero.jpg" width="1200" height="630"></div></body></html>"#;
//!
//! let assets = scrape_html(html, "https://example.com/news/1", &ScrapeOptions::default())?;
//! assert_eq!(assets.hero.map(String::from).as_deref(), Some("https://example.com/hero.jpg"));
//! assert_eq!(assets.favicon.map(String::from).as_deref(), Some("https://example.com/icon.png"));
//! assert_eq!(assets.logo.map(String::from).as_deref(), Some("https://example.com/logo.svg"));
//! # Ok::<(), hero_scrape::Error>(())
//! ```
//!
//! ## How the hero image is chosen
//!
//! Stages run in priority order (header/nav, `<figure>`, `<div>`, whole
//! document) and the first candidate judged large enough wins. Size is
//! judged from the URL and markup when possible, and from the downloaded
//! image header otherwise. See [`extractor::pipeline`].
//!
//! Heuristics are best effort: nothing guarantees the editorially intended
//! image is found.

mod error;
mod options;
mod result;
mod scrape;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Image element view (sources, declared dimensions).
pub mod element;

/// Compiled regex patterns and ordered rule tables.
pub mod patterns;

/// Selector rules: advertising exclusion and page regions.
pub mod selector;

/// Size verdicts for candidate images.
pub mod oracle;

/// Hero image extraction (candidates and the selection pipeline).
pub mod extractor;

/// Favicon and logo locators.
pub mod locators;

/// Page, asset and dimension collaborators.
pub mod fetch;

/// URL utilities for resolution and inspection.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::ScrapeOptions;
pub use oracle::SizeVerdict;
pub use result::{PageAssets, ScrapeResult, NO_FAVICON, NO_IMAGE, NO_LOGO};
pub use scrape::{scrape_document, Scraper};

/// Find hero image, favicon and logo in HTML that was already retrieved.
///
/// Candidates whose size cannot be told from markup are downloaded over
/// plain HTTP, as [`Scraper::http`] would.
///
/// # Example
///
/// ```rust
/// use hero_scrape::{scrape_html, ScrapeOptions};
///
/// let assets = scrape_html("<p>text only</p>", "https://example.com/", &ScrapeOptions::default())?;
/// assert!(assets.hero.is_none());
/// assert!(assets.logo.is_none());
/// // the conventional location is reported even though nothing declares it
/// assert_eq!(assets.favicon.map(String::from).as_deref(), Some("https://example.com/favicon.ico"));
/// # Ok::<(), hero_scrape::Error>(())
/// ```
pub fn scrape_html(html: &str, page_url: &str, options: &ScrapeOptions) -> Result<PageAssets> {
    let base = url_utils::parse_page_url(page_url)
        .ok_or_else(|| Error::InvalidUrl(page_url.to_string()))?;
    let fetcher = fetch::HttpFetcher::new(options)?;

    Ok(scrape_document(html, &base, options, &fetcher, &fetch::ImageSizeDecoder))
}

/// Scrape a list of page URLs over plain HTTP, in order.
///
/// Per-URL failures never abort the batch; they show up as records with no
/// assets. The only error is failing to set up the HTTP client.
pub fn scrape_urls<S: AsRef<str>>(urls: &[S], options: &ScrapeOptions) -> Result<Vec<ScrapeResult>> {
    Ok(Scraper::http(options.clone())?.scrape_all(urls))
}
