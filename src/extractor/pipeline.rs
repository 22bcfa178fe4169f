//! Hero image selection pipeline.
//!
//! Four stages run in priority order, each terminal on its first accepted
//! candidate:
//!
//! 1. header/navigation regions
//! 2. `<figure>` containers
//! 3. `<div>` containers
//! 4. every image in the document, with a fallback list
//!
//! A candidate is accepted when the [`oracle`](crate::oracle) accepts it from
//! URL and markup alone, or when it returns `Unknown` and the downloaded bytes
//! decode to a large enough image.

use dom_query::Document;
use tracing::{debug, info};
use url::Url;

use crate::fetch::{AssetFetcher, DimensionDecoder};
use crate::options::ScrapeOptions;
use crate::oracle::{self, SizeVerdict};
use crate::url_utils;

use super::candidates::{self, Candidate, Scope};

/// Stages in the order they run.
pub const STAGES: &[Scope] = &[
    Scope::HeaderNav,
    Scope::Container("figure"),
    Scope::Container("div"),
    Scope::Document,
];

/// How a hero image was confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evidence {
    /// URL text and declared attributes.
    Markup,
    /// Downloaded and decoded dimensions.
    Decoded,
    /// First entry of the document stage's fallback list.
    Fallback,
}

/// The chosen hero image and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroImage {
    pub url: Url,
    pub scope: Scope,
    pub evidence: Evidence,
}

/// Runs the hero image stages against one parsed page.
pub struct HeroSelector<'c, A: ?Sized, D: ?Sized> {
    assets: &'c A,
    decoder: &'c D,
    max_images_to_check: usize,
    threshold: u32,
}

impl<'c, A, D> HeroSelector<'c, A, D>
where
    A: AssetFetcher + ?Sized,
    D: DimensionDecoder + ?Sized,
{
    #[must_use]
    pub fn new(assets: &'c A, decoder: &'c D, options: &ScrapeOptions) -> Self {
        Self {
            assets,
            decoder,
            max_images_to_check: options.max_images_to_check,
            threshold: options.min_dimension,
        }
    }

    /// Select the hero image of `doc`, whose URL is `base`.
    pub fn select(&self, doc: &Document, base: &Url) -> Option<HeroImage> {
        for &scope in STAGES {
            let found = match scope {
                Scope::Document => self.run_document_stage(doc, base),
                _ => self.run_stage(doc, base, scope),
            };
            if let Some(hero) = found {
                info!(url = %hero.url, stage = %hero.scope, evidence = ?hero.evidence, "selected hero image");
                return Some(hero);
            }
            debug!(stage = %scope, "stage exhausted");
        }
        None
    }

    /// A single stage with the plain acceptance protocol.
    pub fn run_stage(&self, doc: &Document, base: &Url, scope: Scope) -> Option<HeroImage> {
        candidates::extract(doc, scope, base, self.max_images_to_check)
            .find_map(|candidate| self.accept(&candidate, scope))
    }

    /// The document-wide stage.
    ///
    /// Besides the plain protocol it records every non-SVG candidate whose
    /// declared attributes exceed the threshold, whatever its verdict. The
    /// first such candidate is used when nothing is accepted outright.
    pub fn run_document_stage(&self, doc: &Document, base: &Url) -> Option<HeroImage> {
        let scope = Scope::Document;
        let mut fallback: Vec<Url> = Vec::new();

        for candidate in candidates::extract(doc, scope, base, self.max_images_to_check) {
            if !url_utils::is_svg(&candidate.url)
                && oracle::declared_large(&candidate.element, self.threshold)
            {
                fallback.push(candidate.url.clone());
            }

            if let Some(hero) = self.accept(&candidate, scope) {
                return Some(hero);
            }
        }

        fallback.into_iter().next().map(|url| HeroImage {
            url,
            scope,
            evidence: Evidence::Fallback,
        })
    }

    fn accept(&self, candidate: &Candidate<'_>, scope: Scope) -> Option<HeroImage> {
        let verdict = oracle::verify(&candidate.url, &candidate.element, self.threshold);
        debug!(url = %candidate.url, stage = %scope, ?verdict, "checked candidate");

        let evidence = match verdict {
            SizeVerdict::Accept => Evidence::Markup,
            SizeVerdict::Reject => return None,
            SizeVerdict::Unknown => {
                if !oracle::confirm_by_bytes(&candidate.url, self.assets, self.decoder, self.threshold) {
                    return None;
                }
                Evidence::Decoded
            }
        };

        Some(HeroImage {
            url: candidate.url.clone(),
            scope,
            evidence,
        })
    }
}
