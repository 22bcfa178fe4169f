//! Plain HTTP collaborator backed by a blocking `reqwest` client.

use std::io::Read;

use reqwest::blocking::{Client, Response};
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, CONTENT_TYPE, REFERER};
use tracing::debug;
use url::Url;

use crate::encoding;
use crate::error::{Error, Result};
use crate::options::ScrapeOptions;
use crate::url_utils;

use super::{AssetFetcher, PageFetcher};

const PAGE_ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
const IMAGE_ACCEPT: &str = "image/webp,image/apng,image/*,*/*;q=0.8";
const LANGUAGE: &str = "en-US,en;q=0.9";

/// Bytes of an image read for dimension probing. Enough for JPEG files whose
/// frame header follows a full EXIF segment.
const ASSET_PREFIX_BYTES: u64 = 128 * 1024;

/// Fetches pages and assets over plain HTTP with browser-like headers.
///
/// One client with a cookie store serves both pages and assets, so session
/// cookies a page sets are sent along with its image requests. Redirects are
/// followed. Non-2xx responses are failures. Image bodies are cut off after
/// a prefix large enough for header-only decoding.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    options: ScrapeOptions,
}

impl HttpFetcher {
    /// Build a fetcher using the timeouts and user agent in `options`.
    pub fn new(options: &ScrapeOptions) -> Result<Self> {
        let client = Client::builder()
            .user_agent(options.user_agent.clone())
            .cookie_store(true)
            .build()
            .map_err(|e| Error::Retrieval(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            options: options.clone(),
        })
    }

    fn check(url: &Url, response: reqwest::Result<Response>) -> Result<Response> {
        let response = response.map_err(|e| Error::Retrieval(format!("{url}: {e}")))?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Retrieval(format!("{url}: HTTP {}", status.as_u16())));
        }
        Ok(response)
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch_page(&self, url: &Url) -> Result<String> {
        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, PAGE_ACCEPT)
            .header(ACCEPT_LANGUAGE, LANGUAGE)
            .timeout(self.options.page_timeout)
            .send();
        let response = Self::check(url, response)?;

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response
            .bytes()
            .map_err(|e| Error::Retrieval(format!("{url}: {e}")))?;

        debug!(%url, bytes = body.len(), "fetched page");
        Ok(encoding::decode_page(&body, content_type.as_deref()))
    }
}

impl AssetFetcher for HttpFetcher {
    fn fetch_bytes(&self, url: &Url) -> Result<Vec<u8>> {
        let mut request = self
            .client
            .get(url.clone())
            .header(ACCEPT, IMAGE_ACCEPT)
            .header(ACCEPT_LANGUAGE, LANGUAGE)
            .timeout(self.options.asset_timeout);
        if let Some(referer) = url_utils::origin(url) {
            request = request.header(REFERER, referer);
        }

        let response = Self::check(url, request.send())?;
        read_prefix(response, ASSET_PREFIX_BYTES)
            .map_err(|e| Error::Retrieval(format!("{url}: {e}")))
    }
}

/// Read at most `limit` bytes; the rest of the body is never transferred.
fn read_prefix<R: Read>(reader: R, limit: u64) -> std::io::Result<Vec<u8>> {
    let mut prefix = Vec::new();
    reader.take(limit).read_to_end(&mut prefix)?;
    Ok(prefix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_prefix_stops_at_limit() {
        let body = vec![7u8; 10_000];
        let prefix = read_prefix(Cursor::new(body), 4096).map_or_else(|e| panic!("{e}"), |p| p);
        assert_eq!(prefix.len(), 4096);
    }

    #[test]
    fn test_read_prefix_short_body_whole() {
        let prefix = read_prefix(Cursor::new(b"GIF89a".to_vec()), ASSET_PREFIX_BYTES)
            .map_or_else(|e| panic!("{e}"), |p| p);
        assert_eq!(prefix, b"GIF89a");
    }

    #[test]
    fn test_prefix_still_decodes() {
        use crate::fetch::{DimensionDecoder, Dimensions, ImageSizeDecoder};

        let mut gif = b"GIF89a".to_vec();
        gif.extend_from_slice(&640u16.to_le_bytes());
        gif.extend_from_slice(&480u16.to_le_bytes());
        gif.extend(std::iter::repeat(0u8).take(50_000));

        let prefix = read_prefix(Cursor::new(gif), 1024).map_or_else(|e| panic!("{e}"), |p| p);
        let dims = ImageSizeDecoder.decode_dimensions(&prefix).ok();
        assert_eq!(dims, Some(Dimensions { width: 640, height: 480 }));
    }
}
