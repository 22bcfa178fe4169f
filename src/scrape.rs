//! Per-URL orchestration.
//!
//! Pages are processed one at a time. Every failure is contained to the URL
//! it happened on: the record for that URL simply carries no assets.

use tracing::{info, info_span, warn};
use url::Url;

use crate::dom;
use crate::extractor::HeroSelector;
use crate::fetch::{AssetFetcher, DimensionDecoder, HttpFetcher, ImageSizeDecoder, PageFetcher};
use crate::locators::{favicon, logo};
use crate::options::ScrapeOptions;
use crate::result::{PageAssets, ScrapeResult};
use crate::url_utils;

/// Find hero image, favicon and logo in an already retrieved page.
///
/// `page_url` is the base every relative source is resolved against.
pub fn scrape_document<A, D>(
    html: &str,
    page_url: &Url,
    options: &ScrapeOptions,
    assets: &A,
    decoder: &D,
) -> PageAssets
where
    A: AssetFetcher + ?Sized,
    D: DimensionDecoder + ?Sized,
{
    let doc = dom::parse(html);

    let hero = HeroSelector::new(assets, decoder, options)
        .select(&doc, page_url)
        .map(|hero| hero.url);
    let favicon = if options.locate_favicon {
        favicon::locate(&doc, page_url)
    } else {
        None
    };
    let logo = if options.locate_logo {
        logo::locate(&doc, page_url)
    } else {
        None
    };

    PageAssets { hero, favicon, logo }
}

/// Scrapes pages through a fetcher and a dimension decoder.
pub struct Scraper<F, D = ImageSizeDecoder> {
    fetcher: F,
    decoder: D,
    options: ScrapeOptions,
}

impl Scraper<HttpFetcher> {
    /// Scraper over plain HTTP with header-only dimension decoding.
    pub fn http(options: ScrapeOptions) -> crate::Result<Self> {
        let fetcher = HttpFetcher::new(&options)?;
        Ok(Self::new(fetcher, ImageSizeDecoder, options))
    }
}

impl<F, D> Scraper<F, D>
where
    F: PageFetcher + AssetFetcher,
    D: DimensionDecoder,
{
    #[must_use]
    pub fn new(fetcher: F, decoder: D, options: ScrapeOptions) -> Self {
        Self {
            fetcher,
            decoder,
            options,
        }
    }

    #[must_use]
    pub fn options(&self) -> &ScrapeOptions {
        &self.options
    }

    /// Scrape one page. `id` is the record's position in the batch.
    ///
    /// Unparseable URLs and retrieval failures yield a record with no assets
    /// and no extraction attempted.
    pub fn scrape_url(&self, id: usize, url: &str) -> ScrapeResult {
        let _span = info_span!("scrape", id, url).entered();

        let Some(page_url) = url_utils::parse_page_url(url) else {
            warn!("not an absolute http(s) URL");
            return ScrapeResult::empty(id, url);
        };

        let html = match self.fetcher.fetch_page(&page_url) {
            Ok(html) => html,
            Err(err) => {
                warn!(error = %err, "page retrieval failed");
                return ScrapeResult::empty(id, url);
            }
        };

        let assets = scrape_document(&html, &page_url, &self.options, &self.fetcher, &self.decoder);
        ScrapeResult::new(id, url, assets)
    }

    /// Scrape every URL in order. Ids start at 1.
    pub fn scrape_all<S: AsRef<str>>(&self, urls: &[S]) -> Vec<ScrapeResult> {
        let total = urls.len();
        urls.iter()
            .enumerate()
            .map(|(i, url)| {
                let url = url.as_ref();
                info!(index = i + 1, total, url, "processing");
                self.scrape_url(i + 1, url)
            })
            .collect()
    }
}
