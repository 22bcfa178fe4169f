//! Configuration options for asset scraping.
//!
//! The `ScrapeOptions` struct controls how much work the pipeline does per
//! page and how long network collaborators may block.

use std::time::Duration;

/// Browser-like user agent sent with page and asset requests.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Configuration options for scraping.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use hero_scrape::ScrapeOptions;
///
/// let options = ScrapeOptions {
///     max_images_to_check: 5,
///     locate_logo: false,
///     ..ScrapeOptions::default()
/// };
/// assert_eq!(options.min_dimension, 150);
/// ```
#[derive(Debug, Clone)]
pub struct ScrapeOptions {
    /// Maximum number of candidates a single pipeline stage inspects.
    ///
    /// Bounds work on pages with hundreds of images.
    ///
    /// Default: `20`
    pub max_images_to_check: usize,

    /// Size threshold in pixels. A hero image must be strictly larger than
    /// this in both dimensions; anything at or below it is a thumbnail.
    ///
    /// Default: `150`
    pub min_dimension: u32,

    /// Timeout for a single page request.
    ///
    /// Default: 30 seconds
    pub page_timeout: Duration,

    /// Timeout for a single image request.
    ///
    /// Default: 10 seconds
    pub asset_timeout: Duration,

    /// User agent sent with every request.
    pub user_agent: String,

    /// Run the favicon locator.
    ///
    /// Default: `true`
    pub locate_favicon: bool,

    /// Run the logo locator.
    ///
    /// Default: `true`
    pub locate_logo: bool,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            max_images_to_check: 20,
            min_dimension: 150,
            page_timeout: Duration::from_secs(30),
            asset_timeout: Duration::from_secs(10),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            locate_favicon: true,
            locate_logo: true,
        }
    }
}
