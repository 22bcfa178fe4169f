//! Character encoding detection and transcoding for fetched pages.
//!
//! The charset is taken from the HTTP `Content-Type` header when present,
//! then from HTML meta tags, and defaults to UTF-8.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Match `charset=...` inside a `Content-Type` header value
#[allow(clippy::expect_used)]
static HEADER_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)charset\s*=\s*["']?([^"';\s]+)"#).expect("valid regex")
});

/// Match `<meta charset="...">` tag
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>]+)"#).expect("valid regex")
});

/// Resolve the encoding of a page body.
///
/// Only the first 1024 bytes of the body are examined for meta tags.
#[must_use]
pub fn detect_encoding(body: &[u8], content_type: Option<&str>) -> &'static Encoding {
    let from_header = content_type
        .and_then(|value| HEADER_CHARSET_RE.captures(value))
        .and_then(|c| c.get(1))
        .and_then(|m| Encoding::for_label(m.as_str().as_bytes()));
    if let Some(encoding) = from_header {
        return encoding;
    }

    let head = String::from_utf8_lossy(&body[..body.len().min(1024)]);
    CHARSET_META_RE
        .captures(&head)
        .and_then(|c| c.get(1))
        .and_then(|m| Encoding::for_label(m.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Transcode a page body to a UTF-8 string.
///
/// Invalid sequences are replaced with � rather than failing.
///
/// # Examples
///
/// ```
/// use hero_scrape::encoding::decode_page;
///
/// let body = b"<html><body>Caf\xE9</body></html>";
/// let text = decode_page(body, Some("text/html; charset=ISO-8859-1"));
/// assert!(text.contains("Café"));
/// ```
#[must_use]
pub fn decode_page(body: &[u8], content_type: Option<&str>) -> String {
    let encoding = detect_encoding(body, content_type);

    if encoding == UTF_8 {
        return String::from_utf8_lossy(body).into_owned();
    }

    let (decoded, _encoding_used, _had_errors) = encoding.decode(body);
    decoded.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_charset_wins_over_meta() {
        let body = br#"<meta charset="utf-8"><p>x</p>"#;
        let encoding = detect_encoding(body, Some("text/html; charset=windows-1252"));
        assert_eq!(encoding.name(), "windows-1252");
    }

    #[test]
    fn test_meta_charset_used_without_header() {
        let body = br#"<html><head><meta charset="ISO-8859-1"></head></html>"#;
        // ISO-8859-1 maps to windows-1252 per the WHATWG encoding standard
        assert_eq!(detect_encoding(body, Some("text/html")).name(), "windows-1252");
    }

    #[test]
    fn test_defaults_to_utf8() {
        assert_eq!(detect_encoding(b"<html></html>", None), UTF_8);
    }

    #[test]
    fn test_decode_page_replaces_invalid_utf8() {
        let text = decode_page(b"<p>ok \xFF</p>", None);
        assert!(text.contains("ok"));
        assert!(text.contains('\u{FFFD}'));
    }
}
