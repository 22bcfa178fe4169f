//! Page region lookup.

use std::collections::HashSet;

use dom_query::{Document, Selection};

use crate::dom;
use crate::patterns::HEADER_NAV_SELECTORS;

/// Header and navigation regions of a page.
///
/// Elements are gathered selector by selector in the priority order of
/// [`HEADER_NAV_SELECTORS`], document order within a selector. An element
/// reached through several selectors appears once, at its first position.
#[must_use]
pub fn header_nav_regions(doc: &Document) -> Vec<Selection<'_>> {
    let mut seen = HashSet::new();
    let mut regions = Vec::new();

    for selector in HEADER_NAV_SELECTORS {
        for element in dom::elements(&doc.select(selector)) {
            if dom::node_key(&element).is_some_and(|key| seen.insert(key)) {
                regions.push(element);
            }
        }
    }

    regions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regions_follow_selector_priority() {
        let doc = dom::parse(r#"
            <div id="header">by id</div>
            <nav id="menu">nav</nav>
            <header id="top">header</header>
        "#);

        let ids: Vec<String> = header_nav_regions(&doc).iter().filter_map(dom::id).collect();
        assert_eq!(ids, vec!["top", "menu", "header"]);
    }

    #[test]
    fn test_regions_are_duplicate_free() {
        let doc = dom::parse(r#"<header id="header" class="site-header nav">x</header>"#);
        assert_eq!(header_nav_regions(&doc).len(), 1);
    }

    #[test]
    fn test_class_selector_matches_whole_token_only() {
        let doc = dom::parse(r#"<div class="article-header">x</div><div class="navigation">y</div>"#);
        assert!(header_nav_regions(&doc).is_empty());
    }
}
