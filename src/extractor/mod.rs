//! Hero image extraction.
//!
//! # Module Structure
//!
//! - `candidates`: Scopes and the capped candidate iterator
//! - `pipeline`: Stage ordering, acceptance protocol and fallback list
//!
//! # Usage
//!
//! ```rust
//! use hero_scrape::extractor::{candidates, Scope};
//! use hero_scrape::dom;
//! use url::Url;
//!
//! let doc = dom::parse(r#"<figure><img src="/a.jpg"></figure><img src="data:,x">"#);
//! let base = Url::parse("https://example.com/post")?;
//!
//! let found: Vec<String> = candidates::extract(&doc, Scope::Document, &base, 20)
//!     .map(|c| c.url.to_string())
//!     .collect();
//! assert_eq!(found, vec!["https://example.com/a.jpg"]);
//! # Ok::<(), url::ParseError>(())
//! ```

pub mod candidates;
pub mod pipeline;

pub use candidates::{Candidate, Scope};
pub use pipeline::{Evidence, HeroImage, HeroSelector};
