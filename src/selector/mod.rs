//! Selector Infrastructure
//!
//! Rules are simple predicates over a `Selection`. They classify containers
//! (advertising or not) and locate page regions (header/navigation) for the
//! extraction stages.

use dom_query::Selection;

pub mod exclusion;
pub mod regions;

/// A selector rule that tests if a selection matches certain criteria
pub type Rule = fn(&Selection) -> bool;

/// Query for all elements matching the rule
///
/// Iterates through all descendants in document order and collects all
/// elements for which the rule returns true.
///
/// # Example
///
/// ```rust
/// use hero_scrape::selector;
/// use hero_scrape::dom;
///
/// let doc = dom::parse(r#"<div><p class="item">1</p><p class="item">2</p></div>"#);
/// let root = doc.select("div");
///
/// fn has_item_class(sel: &dom_query::Selection) -> bool {
///     dom::class_tokens(sel).iter().any(|c| c == "item")
/// }
///
/// let results = selector::query_all(&root, has_item_class);
/// assert_eq!(results.len(), 2);
/// ```
#[must_use]
pub fn query_all<'a>(root: &Selection<'a>, rule: Rule) -> Vec<Selection<'a>> {
    let mut matches = Vec::new();

    for node in root.select("*").nodes() {
        let sel = Selection::from(*node);
        if rule(&sel) {
            matches.push(sel);
        }
    }

    matches
}

/// Whether any marker occurs in `text` as a substring.
#[inline]
#[must_use]
pub fn contains_any(text: &str, markers: &[&str]) -> bool {
    markers.iter().any(|marker| text.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;

    #[test]
    fn test_query_all_in_document_order() {
        let doc = dom::parse(r#"
            <div>
                <p id="first" class="target">First</p>
                <span><p id="second" class="target">Second</p></span>
                <p>Other</p>
            </div>
        "#);
        let root = doc.select("body");

        fn is_target(sel: &Selection) -> bool {
            dom::class_tokens(sel).iter().any(|c| c == "target")
        }

        let ids: Vec<Option<String>> = query_all(&root, is_target).iter().map(dom::id).collect();
        assert_eq!(ids, vec![Some("first".to_string()), Some("second".to_string())]);
    }

    #[test]
    fn test_contains_any() {
        assert!(contains_any("site-logo", &["brand", "logo"]));
        assert!(!contains_any("site-title", &["brand", "logo"]));
        assert!(!contains_any("anything", &[]));
    }
}
