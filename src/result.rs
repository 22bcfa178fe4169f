//! Result types for scraping output.
//!
//! One `ScrapeResult` is produced per input URL. Missing assets are `None`
//! in memory and serialize to fixed sentinel strings, which is what
//! downstream preview consumers expect.

use serde::{Deserialize, Serialize};
use url::Url;

/// Sentinel written when no hero image qualified.
pub const NO_IMAGE: &str = "No image found";

/// Sentinel written when no favicon was located.
pub const NO_FAVICON: &str = "No favicon found";

/// Sentinel written when no logo was located.
pub const NO_LOGO: &str = "No logo found";

/// Assets chosen for one parsed page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageAssets {
    /// Hero image chosen by the selection pipeline.
    pub hero: Option<Url>,

    /// Favicon chosen by the favicon locator.
    pub favicon: Option<Url>,

    /// Logo chosen by the logo locator.
    pub logo: Option<Url>,
}

/// Output record for one input URL.
///
/// Created once after the pipeline and locators finish, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "ScrapeRecord", from = "ScrapeRecord")]
pub struct ScrapeResult {
    /// 1-based position in the input list.
    pub id: usize,

    /// The input URL as given.
    pub url: String,

    /// Hero image URL.
    pub image: Option<String>,

    /// Favicon URL.
    pub favicon: Option<String>,

    /// Logo URL.
    pub logo: Option<String>,
}

impl ScrapeResult {
    /// Builds a record from the assets found on a page.
    #[must_use]
    pub fn new(id: usize, url: impl Into<String>, assets: PageAssets) -> Self {
        Self {
            id,
            url: url.into(),
            image: assets.hero.map(String::from),
            favicon: assets.favicon.map(String::from),
            logo: assets.logo.map(String::from),
        }
    }

    /// Record for a page that could not be retrieved.
    #[must_use]
    pub fn empty(id: usize, url: impl Into<String>) -> Self {
        Self::new(id, url, PageAssets::default())
    }

    /// Whether a hero image was found.
    #[must_use]
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }
}

/// Wire form of [`ScrapeResult`] with sentinel strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ScrapeRecord {
    id: usize,
    url: String,
    image_path: String,
    favicon_path: String,
    logo_path: String,
}

impl From<ScrapeResult> for ScrapeRecord {
    fn from(result: ScrapeResult) -> Self {
        Self {
            id: result.id,
            url: result.url,
            image_path: result.image.unwrap_or_else(|| NO_IMAGE.to_string()),
            favicon_path: result.favicon.unwrap_or_else(|| NO_FAVICON.to_string()),
            logo_path: result.logo.unwrap_or_else(|| NO_LOGO.to_string()),
        }
    }
}

impl From<ScrapeRecord> for ScrapeResult {
    fn from(record: ScrapeRecord) -> Self {
        fn present(value: String, sentinel: &str) -> Option<String> {
            (value != sentinel).then_some(value)
        }

        Self {
            id: record.id,
            url: record.url,
            image: present(record.image_path, NO_IMAGE),
            favicon: present(record.favicon_path, NO_FAVICON),
            logo: present(record.logo_path, NO_LOGO),
        }
    }
}
