//! URL Utility Functions
//!
//! Resolution of declared sources into candidate URLs, plus the small URL
//! inspections the selection heuristics rely on.

use url::Url;

use crate::patterns::{PAGE_URL, SVG_EXTENSION};

/// Parse an input page URL.
///
/// # Returns
/// * `Some(Url)` if the string is an absolute http(s) URL with a host
#[must_use]
pub fn parse_page_url(s: &str) -> Option<Url> {
    let s = s.trim();

    if !s.starts_with("http://") && !s.starts_with("https://") {
        return None;
    }

    Url::parse(s).ok().filter(|url| url.host().is_some())
}

/// Whether a declared source is an embedded `data:` URI.
#[must_use]
pub fn is_embedded(src: &str) -> bool {
    src.trim_start()
        .get(..5)
        .is_some_and(|scheme| scheme.eq_ignore_ascii_case("data:"))
}

/// Resolve a declared source against the page URL.
///
/// Embedded `data:` sources are never candidates: they cannot be downloaded.
///
/// # Returns
/// * The absolute URL, or `None` for empty, embedded or unresolvable sources
#[must_use]
pub fn resolve_candidate(src: &str, base: &Url) -> Option<Url> {
    let src = src.trim();

    if src.is_empty() || is_embedded(src) {
        return None;
    }

    base.join(src).ok().filter(|url| url.scheme() != "data")
}

/// Whether the URL path (query and fragment ignored) names an SVG file.
#[must_use]
pub fn is_svg(url: &Url) -> bool {
    url.path().to_ascii_lowercase().ends_with(SVG_EXTENSION)
}

/// Origin of a URL in `scheme://host[:port]` form, used as a referer.
#[must_use]
pub fn origin(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    Some(match url.port() {
        Some(port) => format!("{}://{host}:{port}", url.scheme()),
        None => format!("{}://{host}", url.scheme()),
    })
}

/// Extract http(s) URLs from free text such as a markdown link list.
///
/// Lines starting with `#` are comments. Trailing punctuation left over from
/// prose is stripped, and a closing parenthesis only when it has no opening
/// partner inside the URL, so `[a](https://x/y)` and
/// `https://x/Rust_(language)` both come out whole.
#[must_use]
pub fn find_page_urls(text: &str) -> Vec<Url> {
    text.lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .flat_map(|line| PAGE_URL.find_iter(line))
        .filter_map(|m| parse_page_url(trim_url_tail(m.as_str())))
        .collect()
}

fn trim_url_tail(mut token: &str) -> &str {
    loop {
        let trimmed = token.trim_end_matches([']', '}', ',', '.', ';', ':', '!', '?']);
        let unbalanced = trimmed.ends_with(')') && trimmed.matches(')').count() > trimmed.matches('(').count();
        if unbalanced {
            token = &trimmed[..trimmed.len() - 1];
        } else {
            return trimmed;
        }
    }
}
