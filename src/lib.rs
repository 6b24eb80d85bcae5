//! Facade crate for the Wayfinder curation engine.
//!
//! This crate re-exports the core domain types and pipelines from
//! `wayfinder-core`.

#![forbid(unsafe_code)]

pub use wayfinder_core::{
    Category, Continent, Coordinate, DedupStrategy, Facet, FacetSelection, HighlightTicket,
    Insertion, Locatable, Pin, PinRegistry, PinSource, Place, RankMode, RankedPlace,
    available_facets, continent_for_region, dedup, display_text, distance_meters,
    nearby_suggestions, prompt_text, rank, search, standardized_name, to_ascii_safe,
};
