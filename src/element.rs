//! Image element view.

use dom_query::Selection;
use url::Url;

use crate::dom;
use crate::patterns::IMAGE_SOURCE_ATTRS;
use crate::url_utils;

/// A view over one `<img>` element of a parsed document.
#[derive(Clone)]
pub struct ImageElement<'a> {
    sel: Selection<'a>,
}

impl<'a> ImageElement<'a> {
    #[must_use]
    pub fn new(sel: Selection<'a>) -> Self {
        Self { sel }
    }

    /// The underlying selection.
    #[must_use]
    pub fn selection(&self) -> &Selection<'a> {
        &self.sel
    }

    /// First non-empty source attribute, in [`IMAGE_SOURCE_ATTRS`] order.
    #[must_use]
    pub fn source(&self) -> Option<String> {
        IMAGE_SOURCE_ATTRS
            .iter()
            .filter_map(|attr| dom::get_attribute(&self.sel, attr))
            .find(|value| !value.trim().is_empty())
    }

    /// Source resolved against the page URL, skipping embedded data.
    #[must_use]
    pub fn resolved_source(&self, base: &Url) -> Option<Url> {
        self.source()
            .and_then(|src| url_utils::resolve_candidate(&src, base))
    }

    /// Declared `width` attribute, if numeric.
    #[must_use]
    pub fn declared_width(&self) -> Option<u32> {
        self.numeric_attribute("width")
    }

    /// Declared `height` attribute, if numeric.
    #[must_use]
    pub fn declared_height(&self) -> Option<u32> {
        self.numeric_attribute("height")
    }

    /// Declared `(width, height)` when both attributes are numeric.
    #[must_use]
    pub fn declared_dimensions(&self) -> Option<(u32, u32)> {
        Some((self.declared_width()?, self.declared_height()?))
    }

    fn numeric_attribute(&self, name: &str) -> Option<u32> {
        dom::get_attribute(&self.sel, name)?.trim().parse().ok()
    }
}
