//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate giving the extraction code a small,
//! consistent vocabulary: attribute access, class/id text, structural
//! identity and ancestor walks.

// Re-export core types for external use
pub use dom_query::{Document, NodeId, Selection};

// === Attribute Operations ===

/// Get element ID attribute
#[inline]
#[must_use]
pub fn id(sel: &Selection) -> Option<String> {
    sel.attr("id").map(|s| s.to_string())
}

/// Get element class attribute
#[inline]
#[must_use]
pub fn class_name(sel: &Selection) -> Option<String> {
    sel.attr("class").map(|s| s.to_string())
}

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Class tokens of an element, in declaration order.
#[must_use]
pub fn class_tokens(sel: &Selection) -> Vec<String> {
    class_name(sel)
        .map(|c| c.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}

/// Class tokens and id joined with spaces and lowercased.
///
/// This is the text the class/id heuristics match substrings against.
#[must_use]
pub fn class_and_id(sel: &Selection) -> String {
    let mut text = class_tokens(sel).join(" ");
    text.push(' ');
    text.push_str(&id(sel).unwrap_or_default());
    text.to_lowercase()
}

// === Tag/Node Information ===

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string())
}

/// Structural identity of the first node in a selection.
///
/// Stable for the lifetime of the document, so it is safe to use as a
/// deduplication key when an element is reachable through several selectors.
#[inline]
#[must_use]
pub fn node_key(sel: &Selection) -> Option<NodeId> {
    sel.nodes().first().map(|node| node.id)
}

// === Tree Navigation ===

/// Split a selection into one selection per element, in document order.
#[must_use]
pub fn elements<'a>(sel: &Selection<'a>) -> Vec<Selection<'a>> {
    sel.nodes()
        .iter()
        .filter(|node| node.is_element())
        .map(|node| Selection::from(*node))
        .collect()
}

/// Get parent element, if the parent is an element.
#[must_use]
pub fn parent_element<'a>(sel: &Selection<'a>) -> Option<Selection<'a>> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::parent)
        .filter(dom_query::NodeRef::is_element)
        .map(Selection::from)
}

/// Ancestor elements ordered from nearest to furthest.
#[must_use]
pub fn ancestors<'a>(sel: &Selection<'a>) -> Vec<Selection<'a>> {
    let mut found = Vec::new();
    let mut current = parent_element(sel);

    while let Some(ancestor) = current {
        current = parent_element(&ancestor);
        found.push(ancestor);
    }

    found
}

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_select() {
        let doc = parse(r#"<div id="main" class="container wide">content</div>"#);
        let div = doc.select("div");

        assert_eq!(id(&div), Some("main".to_string()));
        assert_eq!(class_name(&div), Some("container wide".to_string()));
        assert_eq!(class_tokens(&div), vec!["container", "wide"]);
        assert_eq!(tag_name(&div), Some("div".to_string()));
    }

    #[test]
    fn test_class_and_id_is_lowercased() {
        let doc = parse(r#"<div id="Sponsor-Link" class="Top  Bar"></div>"#);
        let div = doc.select("div");

        assert_eq!(class_and_id(&div), "top bar sponsor-link");
    }

    #[test]
    fn test_ancestors_nearest_first() {
        let doc = parse(r#"<section><div class="outer"><p><img src="a.jpg"></p></div></section>"#);
        let img = doc.select("img");

        let tags: Vec<String> = ancestors(&img).iter().filter_map(tag_name).collect();
        assert_eq!(tags.first().map(String::as_str), Some("p"));
        assert_eq!(tags.get(1).map(String::as_str), Some("div"));
        assert!(tags.contains(&"section".to_string()));
        assert_eq!(tags.last().map(String::as_str), Some("html"));
    }

    #[test]
    fn test_node_key_identifies_same_element() {
        let doc = parse(r#"<header id="header"><img src="a.jpg"></header>"#);

        let by_tag = doc.select("header");
        let by_id = doc.select("#header");
        assert!(node_key(&by_tag).is_some());
        assert_eq!(node_key(&by_tag), node_key(&by_id));
        assert_ne!(node_key(&by_tag), node_key(&doc.select("img")));
    }

    #[test]
    fn test_elements_splits_in_document_order() {
        let doc = parse(r#"<div id="a"></div><div id="b"></div>"#);
        let ids: Vec<Option<String>> = elements(&doc.select("div")).iter().map(id).collect();
        assert_eq!(ids, vec![Some("a".to_string()), Some("b".to_string())]);
    }
}
