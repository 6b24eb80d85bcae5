//! Point-of-interest curation for the Wayfinder engine.
//!
//! The crate turns a raw, noisy batch of geographic search results into a
//! ranked, deduplicated, facet-filterable list whose text is safe to hand to
//! script-sensitive consumers such as generative models:
//!
//! - [`rank`] orders results by tourist relevance or by distance.
//! - [`dedup`] collapses duplicates by provider identity or by proximity.
//! - [`available_facets`] and [`FacetSelection`] derive and apply filters.
//! - [`to_ascii_safe`] produces lossy ASCII text.
//! - [`PinRegistry`] tracks map pins with dedup on insert and a transient
//!   highlight.
//!
//! Everything here is synchronous and free of I/O. Search providers and model
//! sessions live outside the crate and only exchange [`Place`] batches and
//! strings with it.
//!
//! # Examples
//!
//! ```
//! use wayfinder_core::{Category, Coordinate, Facet, FacetSelection, Place, search};
//!
//! let at = Coordinate::new(48.8606, 2.3376);
//! let places = vec![
//!     Place::new("Musée du Louvre", at).with_category(Category::Museum).with_identity("a"),
//!     Place::new("Jardin du Louvre", at).with_category(Category::Park).with_identity("b"),
//! ];
//! let results = search(places, "louvre", 20);
//!
//! let mut selection = FacetSelection::new();
//! selection.rebuild(&results);
//! assert!(selection.select(Facet::Category(Category::Park)));
//! let parks = selection.apply(results);
//! assert_eq!(parks[0].place.name, "Jardin du Louvre");
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod category;
mod coordinate;
mod curate;
mod dedup;
mod facet;
mod pins;
mod place;
mod rank;
mod region;
mod transliterate;

pub use category::{
    Category, CategoryMetadata, CategoryParseError, UNCATEGORIZED_PRIORITY, priority_of,
    span_degrees_of,
};
pub use coordinate::{Coordinate, distance_meters};
pub use curate::{DEFAULT_SEARCH_LIMIT, DEFAULT_SUGGESTION_LIMIT, nearby_suggestions, search};
pub use dedup::{
    DedupStrategy, NAMED_RESULT_THRESHOLD_METERS, PIN_DROP_THRESHOLD_METERS, dedup,
};
pub use facet::{Facet, FacetParseError, FacetSelection, apply, available_facets};
pub use pins::{
    DEFAULT_PIN_NAME, HIGHLIGHT_DURATION, HighlightTicket, Insertion, Pin, PinId, PinRegistry,
    PinSource,
};
pub use place::{Locatable, Place, RankedPlace, subtitle};
pub use rank::{RankMode, name_match_score, rank, rank_with};
pub use region::{Continent, continent_for_region, standardized_name};
pub use transliterate::{display_text, prompt_text, to_ascii_safe};
