//! Candidate extraction.
//!
//! A scope names a region of the document. Extraction walks the image
//! elements inside that region in a fixed order and yields their resolved,
//! absolute source URLs.

use std::collections::HashSet;
use std::fmt;

use dom_query::{Document, Selection};
use tracing::trace;
use url::Url;

use crate::dom;
use crate::element::ImageElement;
use crate::selector::{exclusion, regions};

/// Region of the document an extraction stage searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Header and navigation regions.
    HeaderNav,
    /// Every element with this tag, skipping advertising containers.
    Container(&'static str),
    /// Every image in the document.
    Document,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HeaderNav => f.write_str("header/nav"),
            Self::Container(tag) => write!(f, "<{tag}> containers"),
            Self::Document => f.write_str("document"),
        }
    }
}

/// An image source under consideration, with the element declaring it.
#[derive(Clone)]
pub struct Candidate<'a> {
    pub url: Url,
    pub element: ImageElement<'a>,
}

/// Lazily resolved candidates of one scope, capped.
///
/// Elements without a usable source and embedded `data:` sources are skipped
/// and do not count against the cap.
pub struct Candidates<'a> {
    images: std::vec::IntoIter<Selection<'a>>,
    base: Url,
    remaining: usize,
}

impl<'a> Iterator for Candidates<'a> {
    type Item = Candidate<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.remaining > 0 {
            let element = ImageElement::new(self.images.next()?);
            let Some(url) = element.resolved_source(&self.base) else {
                continue;
            };
            self.remaining -= 1;
            return Some(Candidate { url, element });
        }
        None
    }
}

/// Candidates of `scope`, at most `cap` of them.
#[must_use]
pub fn extract<'a>(doc: &'a Document, scope: Scope, base: &Url, cap: usize) -> Candidates<'a> {
    let images = match scope {
        Scope::HeaderNav => images_within(regions::header_nav_regions(doc)),
        Scope::Container(tag) => images_within(eligible_containers(doc, tag)),
        Scope::Document => dom::elements(&doc.select("img")),
    };

    Candidates {
        images: images.into_iter(),
        base: base.clone(),
        remaining: cap,
    }
}

/// Containers with `tag`, in document order, minus advertising ones.
///
/// A container nested inside an excluded container of the same tag is
/// excluded as well.
fn eligible_containers<'a>(doc: &'a Document, tag: &str) -> Vec<Selection<'a>> {
    let mut excluded = HashSet::new();
    let mut eligible = Vec::new();

    for container in dom::elements(&doc.select(tag)) {
        let Some(key) = dom::node_key(&container) else {
            continue;
        };

        let inside_excluded = dom::ancestors(&container)
            .iter()
            .filter_map(dom::node_key)
            .any(|ancestor| excluded.contains(&ancestor));

        if inside_excluded || exclusion::is_excluded(&container) {
            trace!(tag, keyword = exclusion::matched_keyword(&container), "skipping container");
            excluded.insert(key);
            continue;
        }
        eligible.push(container);
    }

    eligible
}

/// Images inside each region, region by region, each image once.
fn images_within<'a>(regions: Vec<Selection<'a>>) -> Vec<Selection<'a>> {
    let mut seen = HashSet::new();
    let mut images = Vec::new();

    for region in regions {
        for img in dom::elements(&region.select("img")) {
            if dom::node_key(&img).is_some_and(|key| seen.insert(key)) {
                images.push(img);
            }
        }
    }

    images
}
