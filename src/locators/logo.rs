//! Logo locator.
//!
//! Candidate elements come from three places, in order: header/navigation
//! regions, elements whose class mentions "logo", and elements whose id
//! mentions "logo" or "brand". Each element is probed with the rules in
//! [`SOURCE_RULES`]; the first resolved URL wins. When that finds nothing,
//! images inside `header`/`nav` whose own or parent's class, id or alt text
//! mentions a logo are tried.

use std::collections::HashSet;

use dom_query::{Document, Selection};
use url::Url;

use crate::dom;
use crate::element::ImageElement;
use crate::patterns::{
    BACKGROUND_IMAGE_URL, LOGO_CLASS_MARKERS, LOGO_ID_MARKERS, LOGO_TEXT_MARKERS,
    SVG_REFERENCE_ATTRS,
};
use crate::selector::{self, contains_any, regions};
use crate::url_utils;

/// A way of finding a logo URL on one candidate element.
type SourceRule = fn(&Selection, &Url) -> Option<Url>;

/// Probes applied to each candidate element, in priority order.
const SOURCE_RULES: &[SourceRule] = &[image_source, svg_reference, background_image];

/// Locate the site logo.
#[must_use]
pub fn locate(doc: &Document, base: &Url) -> Option<Url> {
    candidate_elements(doc)
        .iter()
        .find_map(|element| SOURCE_RULES.iter().find_map(|rule| rule(element, base)))
        .or_else(|| marked_header_image(doc, base))
}

/// Header/nav regions, then class matches, then id matches, each element once.
fn candidate_elements(doc: &Document) -> Vec<Selection<'_>> {
    let root = doc.select("html");
    let mut seen = HashSet::new();

    regions::header_nav_regions(doc)
        .into_iter()
        .chain(selector::query_all(&root, has_logo_class))
        .chain(selector::query_all(&root, has_logo_id))
        .filter(|element| dom::node_key(element).is_some_and(|key| seen.insert(key)))
        .collect()
}

fn has_logo_class(sel: &Selection) -> bool {
    dom::class_name(sel).is_some_and(|class| contains_any(&class.to_lowercase(), LOGO_CLASS_MARKERS))
}

fn has_logo_id(sel: &Selection) -> bool {
    dom::id(sel).is_some_and(|id| contains_any(&id.to_lowercase(), LOGO_ID_MARKERS))
}

/// The element itself when it is an image, otherwise the images inside it.
///
/// This covers a link wrapping the logo image as well as any other nesting.
fn image_source(element: &Selection, base: &Url) -> Option<Url> {
    let images = if dom::tag_name(element).as_deref() == Some("img") {
        vec![element.clone()]
    } else {
        dom::elements(&element.select("img"))
    };

    images
        .into_iter()
        .find_map(|img| ImageElement::new(img).resolved_source(base))
}

/// Inline SVG `<image>` or `<use>` referencing an external image or fragment.
fn svg_reference(element: &Selection, base: &Url) -> Option<Url> {
    dom::elements(&element.select("svg image, svg use"))
        .iter()
        .find_map(|node| {
            SVG_REFERENCE_ATTRS
                .iter()
                .filter_map(|attr| dom::get_attribute(node, attr))
                .find_map(|href| url_utils::resolve_candidate(&href, base))
        })
}

/// `background-image: url(...)` in the element's inline style.
fn background_image(element: &Selection, base: &Url) -> Option<Url> {
    let style = dom::get_attribute(element, "style")?;
    let src = BACKGROUND_IMAGE_URL.captures(&style)?.get(1)?.as_str().to_string();
    url_utils::resolve_candidate(&src, base)
}

/// Header/nav image whose own or parent's class, id or alt mentions a logo.
fn marked_header_image(doc: &Document, base: &Url) -> Option<Url> {
    dom::elements(&doc.select("header img, nav img"))
        .into_iter()
        .filter(|img| {
            let parent = dom::parent_element(img);
            std::iter::once(Some(img))
                .chain(std::iter::once(parent.as_ref()))
                .flatten()
                .any(|el| contains_any(&marker_text(el), LOGO_TEXT_MARKERS))
        })
        .find_map(|img| ImageElement::new(img).resolved_source(base))
}

fn marker_text(sel: &Selection) -> String {
    let alt = dom::get_attribute(sel, "alt").unwrap_or_default().to_lowercase();
    format!("{} {alt}", dom::class_and_id(sel))
}
