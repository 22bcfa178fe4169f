//! Dimension Oracle
//!
//! Decides whether a candidate image is large enough to be a hero image.
//! Cheap signals are consulted first: the URL path, dimension hints embedded
//! in the URL text, then the element's declared `width`/`height`. Only when
//! none of those decide does the caller pay for a download and decode, see
//! [`confirm_by_bytes`].

use tracing::debug;
use url::Url;

use crate::element::ImageElement;
use crate::fetch::{AssetFetcher, Dimensions, DimensionDecoder};
use crate::patterns::{DIMENSION_PAIR, THUMBNAIL_MARKER};
use crate::url_utils;

/// Outcome of the cheap size checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeVerdict {
    /// Large enough, decided from URL text or markup.
    Accept,
    /// Too small or not a raster image.
    Reject,
    /// Undecided: the bytes must be fetched and decoded.
    Unknown,
}

/// Judge a candidate from its URL and markup alone.
///
/// `threshold` is the largest size still considered a thumbnail; a hero
/// image must exceed it in both dimensions.
#[must_use]
pub fn verify(candidate: &Url, element: &ImageElement<'_>, threshold: u32) -> SizeVerdict {
    if url_utils::is_svg(candidate) {
        return SizeVerdict::Reject;
    }

    let text = candidate.as_str();
    if text.contains(THUMBNAIL_MARKER) || has_thumbnail_hint(text, threshold) {
        return SizeVerdict::Reject;
    }

    match element.declared_dimensions() {
        Some((width, height)) if width <= threshold || height <= threshold => SizeVerdict::Reject,
        Some(_) => SizeVerdict::Accept,
        None => SizeVerdict::Unknown,
    }
}

/// Whether the markup alone shows the image exceeds the threshold.
///
/// This is the evidence behind the document stage's fallback list.
#[must_use]
pub fn declared_large(element: &ImageElement<'_>, threshold: u32) -> bool {
    element
        .declared_dimensions()
        .is_some_and(|(width, height)| width > threshold && height > threshold)
}

/// Whether decoded dimensions exceed the threshold in both directions.
#[inline]
#[must_use]
pub fn exceeds(dimensions: Dimensions, threshold: u32) -> bool {
    dimensions.width > threshold && dimensions.height > threshold
}

/// Download the candidate and decode its real dimensions.
///
/// Fetch and decode failures count as "too small". The byte buffer is
/// dropped as soon as the decode attempt returns.
pub fn confirm_by_bytes<A, D>(candidate: &Url, assets: &A, decoder: &D, threshold: u32) -> bool
where
    A: AssetFetcher + ?Sized,
    D: DimensionDecoder + ?Sized,
{
    let decoded = match assets.fetch_bytes(candidate) {
        Ok(bytes) => decoder.decode_dimensions(&bytes),
        Err(err) => {
            debug!(url = %candidate, error = %err, "image download failed");
            return false;
        }
    };

    match decoded {
        Ok(dimensions) => {
            debug!(url = %candidate, width = dimensions.width, height = dimensions.height, "decoded image");
            exceeds(dimensions, threshold)
        }
        Err(err) => {
            debug!(url = %candidate, error = %err, "image not decodable");
            false
        }
    }
}

/// Any `<width>x<height>` pair in the URL with both sides at or below the
/// threshold.
fn has_thumbnail_hint(text: &str, threshold: u32) -> bool {
    DIMENSION_PAIR.captures_iter(text).any(|caps| {
        let side = |i| {
            caps.get(i)
                .and_then(|m| m.as_str().parse::<u64>().ok())
                .is_some_and(|v| v <= u64::from(threshold))
        };
        side(1) && side(2)
    })
}
