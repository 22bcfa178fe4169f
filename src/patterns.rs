//! Compiled regex patterns and rule tables for asset selection.
//!
//! Every heuristic priority chain lives here as an ordered, immutable table
//! so each rule can be audited and tested on its own. Regexes are compiled
//! once using `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Image Sources
// =============================================================================

/// Attributes holding an image's source, in priority order.
/// The `data-*` variants cover lazy-loading scripts.
pub const IMAGE_SOURCE_ATTRS: &[&str] = &["src", "data-src", "data-lazy-src"];

// =============================================================================
// Dimension Hints
// =============================================================================

/// Platform-generated thumbnail size (WordPress media conventions).
pub const THUMBNAIL_MARKER: &str = "150x150";

/// Matches `<width>x<height>` pairs embedded in URLs, e.g. `photo-300x200.jpg`.
pub static DIMENSION_PAIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)x(\d+)").expect("DIMENSION_PAIR regex"));

/// Extension of vector images, compared against the URL path only.
pub const SVG_EXTENSION: &str = ".svg";

// =============================================================================
// Exclusion
// =============================================================================

/// Class/id substrings marking a container as advertising.
///
/// Matched as plain substrings, so "additional" or "shadow" also match.
pub const AD_KEYWORDS: &[&str] = &[
    "ad",
    "banner",
    "sponsor",
    "advertisement",
    "promo",
    "promotion",
    "adsbygoogle",
    "doubleclick",
    "adserver",
    "advert",
];

// =============================================================================
// Page Regions
// =============================================================================

/// Selectors for header/navigation regions, in priority order.
/// Class selectors match a single class token, id selectors the whole id.
pub const HEADER_NAV_SELECTORS: &[&str] = &[
    "header",
    "nav",
    ".header",
    "#header",
    ".navbar",
    "#navbar",
    ".nav",
    "#nav",
    ".site-header",
    "#site-header",
    ".main-header",
    "#main-header",
];

// =============================================================================
// Favicon
// =============================================================================

/// `rel` values identifying a favicon link, in priority order.
pub const FAVICON_RELS: &[&str] = &[
    "icon",
    "shortcut icon",
    "apple-touch-icon",
    "apple-touch-icon-precomposed",
    "mask-icon",
    "fluid-icon",
];

/// Conventional favicon location used when the page declares none.
pub const DEFAULT_FAVICON_PATH: &str = "/favicon.ico";

// =============================================================================
// Logo
// =============================================================================

/// Class substring marking a logo element.
pub const LOGO_CLASS_MARKERS: &[&str] = &["logo"];

/// Id substrings marking a logo element.
pub const LOGO_ID_MARKERS: &[&str] = &["logo", "brand"];

/// Substrings of class/id/alt text that identify a header image as a logo.
pub const LOGO_TEXT_MARKERS: &[&str] = &["logo", "brand"];

/// Attributes on SVG `image`/`use` elements referencing external content.
pub const SVG_REFERENCE_ATTRS: &[&str] = &["href", "xlink:href"];

/// Matches an http(s) URL in free text. Brackets, quotes and angle brackets
/// end it; parentheses are balanced afterwards.
#[allow(clippy::expect_used)]
pub static PAGE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"https?://[^\s<>"'\[\]]+"#).expect("PAGE_URL regex")
});

/// Matches `background-image: url(...)` in an inline style attribute.
pub static BACKGROUND_IMAGE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)background-image\s*:\s*url\(\s*['"]?([^'")]+?)['"]?\s*\)"#)
        .expect("BACKGROUND_IMAGE_URL regex")
});
