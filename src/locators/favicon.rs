//! Favicon locator.

use dom_query::{Document, Selection};
use url::Url;

use crate::dom;
use crate::patterns::{DEFAULT_FAVICON_PATH, FAVICON_RELS};
use crate::url_utils;

/// Favicon declared by the page, or the conventional `/favicon.ico`.
///
/// `<link>` elements in `<head>` are matched against [`FAVICON_RELS`] in
/// priority order. The default path is not checked for existence.
#[must_use]
pub fn locate(doc: &Document, base: &Url) -> Option<Url> {
    declared(doc, base).or_else(|| base.join(DEFAULT_FAVICON_PATH).ok())
}

/// Favicon declared by a `<link rel=...>` in `<head>`, if any.
#[must_use]
pub fn declared(doc: &Document, base: &Url) -> Option<Url> {
    let links: Vec<(String, Selection)> = dom::elements(&doc.select("head link[rel]"))
        .into_iter()
        .filter_map(|link| Some((normalized_rel(&link)?, link)))
        .collect();

    FAVICON_RELS.iter().find_map(|wanted| {
        links
            .iter()
            .filter(|(rel, _)| rel_matches(rel, wanted))
            .find_map(|(_, link)| {
                let href = dom::get_attribute(link, "href")?;
                url_utils::resolve_candidate(&href, base)
            })
    })
}

/// Whole-value match for multi-word entries such as `"shortcut icon"`,
/// token match otherwise, so `rel="alternate icon"` counts as `icon`.
fn rel_matches(rel: &str, wanted: &str) -> bool {
    rel == wanted || (!wanted.contains(' ') && rel.split(' ').any(|token| token == wanted))
}

/// `rel` lowercased with whitespace collapsed, e.g. `"Shortcut  Icon"` → `"shortcut icon"`.
fn normalized_rel(link: &Selection) -> Option<String> {
    let rel = dom::get_attribute(link, "rel")?;
    Some(rel.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase())
}
