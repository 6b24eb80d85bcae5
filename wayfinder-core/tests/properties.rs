//! Property-based tests for distance and ranking.
//!
//! # Invariants tested
//!
//! - **Symmetry:** distance from `a` to `b` equals distance from `b` to `a`.
//! - **Identity:** a coordinate is zero meters from itself.
//! - **Idempotence:** ranking an already ranked list leaves it unchanged.
//! - **Dense ranks:** ranks run from zero without gaps.

use proptest::prelude::*;
use wayfinder_core::{Category, Coordinate, Place, RankMode, distance_meters, rank_with};

fn coordinate() -> impl Strategy<Value = Coordinate> {
    (-90.0_f64..=90.0, -180.0_f64..=180.0).prop_map(|(lat, lon)| Coordinate::new(lat, lon))
}

fn place() -> impl Strategy<Value = Place> {
    (
        "[A-Za-z ]{0,12}",
        coordinate(),
        proptest::option::of(proptest::sample::select(Category::ALL.to_vec())),
    )
        .prop_map(|(name, at, category)| {
            let place = Place::new(name, at);
            match category {
                Some(category) => place.with_category(category),
                None => place,
            }
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: distance ignores argument order, bit for bit.
    #[test]
    fn distance_is_symmetric(a in coordinate(), b in coordinate()) {
        prop_assert_eq!(distance_meters(a, b).to_bits(), distance_meters(b, a).to_bits());
    }

    #[test]
    fn distance_to_self_is_zero(a in coordinate()) {
        prop_assert_eq!(distance_meters(a, a), 0.0);
    }

    /// Property: the free-text order is total, so a second pass is a no-op.
    #[test]
    fn free_text_ranking_is_idempotent(
        places in proptest::collection::vec(place(), 0..12),
        query in "[a-z]{0,4}",
    ) {
        let mode = RankMode::FreeText { query: &query };
        let once: Vec<Place> = rank_with(places, mode).into_iter().map(|r| r.place).collect();
        let twice: Vec<Place> = rank_with(once.clone(), mode).into_iter().map(|r| r.place).collect();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn nearby_ranking_is_idempotent(
        places in proptest::collection::vec(place(), 0..12),
        center in coordinate(),
    ) {
        let mode = RankMode::Nearby { center };
        let once: Vec<Place> = rank_with(places, mode).into_iter().map(|r| r.place).collect();
        let twice: Vec<Place> = rank_with(once.clone(), mode).into_iter().map(|r| r.place).collect();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn ranks_are_consecutive(places in proptest::collection::vec(place(), 0..12)) {
        let count = places.len();
        let ranked = rank_with(places, RankMode::FreeText { query: "" });
        let ranks: Vec<usize> = ranked.iter().map(|r| r.rank).collect();
        prop_assert_eq!(ranks, (0..count).collect::<Vec<_>>());
    }
}
