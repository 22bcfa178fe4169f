//! Advertising container detection.
//!
//! A container is excluded when its lowercased class tokens and id contain
//! any advertising keyword as a substring. Substring matching flags legitimate
//! names such as "additional-content" or "shadow-box" too; that behavior is
//! kept as-is.

use dom_query::Selection;

use crate::dom;
use crate::patterns::AD_KEYWORDS;

use super::contains_any;

/// Whether a container element looks advertising-related.
#[must_use]
pub fn is_excluded(sel: &Selection) -> bool {
    contains_any(&dom::class_and_id(sel), AD_KEYWORDS)
}

/// The first advertising keyword found in the container's class/id, if any.
///
/// Useful when logging why a container was skipped.
#[must_use]
pub fn matched_keyword(sel: &Selection) -> Option<&'static str> {
    let text = dom::class_and_id(sel);
    AD_KEYWORDS.iter().copied().find(|keyword| text.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_div(html: &str) -> bool {
        let doc = dom::parse(html);
        is_excluded(&doc.select("div"))
    }

    #[test]
    fn test_class_keyword_excludes() {
        assert!(first_div(r#"<div class="ad-banner-top" id=""></div>"#));
    }

    #[test]
    fn test_id_keyword_excludes() {
        assert!(first_div(r#"<div class="" id="sponsor-link"></div>"#));
    }

    #[test]
    fn test_keyword_inside_longer_word_still_excludes() {
        // "additional" contains "ad"
        assert!(first_div(r#"<div class="additional-content"></div>"#));
        assert!(first_div(r#"<div class="shadow-box"></div>"#));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert!(first_div(r#"<div class="DoubleClick-Slot"></div>"#));
        assert!(first_div(r#"<div id="PROMO"></div>"#));
    }

    #[test]
    fn test_plain_container_not_excluded() {
        assert!(!first_div(r#"<div class="article-body" id="main"></div>"#));
        assert!(!first_div("<div></div>"));
    }

    #[test]
    fn test_matched_keyword_reports_first_rule() {
        let doc = dom::parse(r#"<div class="sponsor-box"></div>"#);
        assert_eq!(matched_keyword(&doc.select("div")), Some("sponsor"));

        let doc = dom::parse(r#"<div class="story"></div>"#);
        assert_eq!(matched_keyword(&doc.select("div")), None);
    }
}
