//! Network and decoding collaborators.
//!
//! The selection pipeline only sees these traits. Each call is a single,
//! failure-tolerant operation: a failure is returned as an [`Error`] and the
//! pipeline moves on. A cheap-then-expensive strategy (plain HTTP, then a
//! rendering-capable fetcher) is expressed with [`Fallback`].
//!
//! [`Error`]: crate::Error

use url::Url;

use crate::error::Result;

mod decode;
mod http;

pub use decode::ImageSizeDecoder;
pub use http::HttpFetcher;

/// Pixel dimensions of a decoded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Retrieves a page's HTML text.
pub trait PageFetcher {
    fn fetch_page(&self, url: &Url) -> Result<String>;
}

/// Retrieves the raw bytes of an asset.
pub trait AssetFetcher {
    fn fetch_bytes(&self, url: &Url) -> Result<Vec<u8>>;
}

/// Reads pixel dimensions from raw image bytes.
pub trait DimensionDecoder {
    fn decode_dimensions(&self, bytes: &[u8]) -> Result<Dimensions>;
}

impl<T: PageFetcher + ?Sized> PageFetcher for &T {
    fn fetch_page(&self, url: &Url) -> Result<String> {
        (**self).fetch_page(url)
    }
}

impl<T: AssetFetcher + ?Sized> AssetFetcher for &T {
    fn fetch_bytes(&self, url: &Url) -> Result<Vec<u8>> {
        (**self).fetch_bytes(url)
    }
}

impl<T: DimensionDecoder + ?Sized> DimensionDecoder for &T {
    fn decode_dimensions(&self, bytes: &[u8]) -> Result<Dimensions> {
        (**self).decode_dimensions(bytes)
    }
}

/// Tries `primary`, then `secondary` once if the primary fails.
///
/// This is where a fetcher able to render JavaScript plugs in behind
/// [`HttpFetcher`]; none ships with this crate. Pass the chain to
/// [`Scraper::new`](crate::Scraper::new). There is no retry within a tier
/// and no backoff.
#[derive(Debug, Clone)]
pub struct Fallback<A, B> {
    primary: A,
    secondary: B,
}

impl<A, B> Fallback<A, B> {
    #[must_use]
    pub fn new(primary: A, secondary: B) -> Self {
        Self { primary, secondary }
    }
}

impl<A: PageFetcher, B: PageFetcher> PageFetcher for Fallback<A, B> {
    fn fetch_page(&self, url: &Url) -> Result<String> {
        self.primary.fetch_page(url).or_else(|err| {
            tracing::debug!(%url, error = %err, "page fetch failed, trying fallback");
            self.secondary.fetch_page(url)
        })
    }
}

impl<A: AssetFetcher, B: AssetFetcher> AssetFetcher for Fallback<A, B> {
    fn fetch_bytes(&self, url: &Url) -> Result<Vec<u8>> {
        self.primary.fetch_bytes(url).or_else(|err| {
            tracing::debug!(%url, error = %err, "asset fetch failed, trying fallback");
            self.secondary.fetch_bytes(url)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::cell::Cell;

    struct Counting {
        calls: Cell<usize>,
        body: Option<&'static str>,
    }

    impl Counting {
        fn new(body: Option<&'static str>) -> Self {
            Self { calls: Cell::new(0), body }
        }
    }

    impl PageFetcher for Counting {
        fn fetch_page(&self, _url: &Url) -> Result<String> {
            self.calls.set(self.calls.get() + 1);
            self.body
                .map(str::to_string)
                .ok_or_else(|| Error::Retrieval("blocked".to_string()))
        }
    }

    impl AssetFetcher for Counting {
        fn fetch_bytes(&self, url: &Url) -> Result<Vec<u8>> {
            self.fetch_page(url).map(String::into_bytes)
        }
    }

    fn url() -> Url {
        Url::parse("https://example.com/").map_or_else(|e| panic!("{e}"), |u| u)
    }

    #[test]
    fn test_fallback_skips_secondary_on_success() {
        let chain = Fallback::new(Counting::new(Some("plain")), Counting::new(Some("rendered")));
        assert_eq!(chain.fetch_page(&url()).ok().as_deref(), Some("plain"));
        assert_eq!(chain.secondary.calls.get(), 0);
    }

    #[test]
    fn test_fallback_tries_secondary_once() {
        let chain = Fallback::new(Counting::new(None), Counting::new(Some("rendered")));
        assert_eq!(chain.fetch_bytes(&url()).ok(), Some(b"rendered".to_vec()));
        assert_eq!(chain.primary.calls.get(), 1);
        assert_eq!(chain.secondary.calls.get(), 1);
    }

    #[test]
    fn test_fallback_reports_secondary_failure() {
        let chain = Fallback::new(Counting::new(None), Counting::new(None));
        assert!(matches!(chain.fetch_page(&url()), Err(Error::Retrieval(_))));
        assert_eq!(chain.secondary.calls.get(), 1);
    }
}
