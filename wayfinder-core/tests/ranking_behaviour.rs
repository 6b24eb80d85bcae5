//! Behavioural tests for relevance ranking.

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;
use wayfinder_core::{Category, Coordinate, Place, RankMode, RankedPlace, rank, rank_with};

fn centre() -> Coordinate {
    Coordinate::new(48.8566, 2.3522)
}

fn names(ranked: &[RankedPlace]) -> Vec<&str> {
    ranked.iter().map(|r| r.place.name.as_str()).collect()
}

#[fixture]
fn places() -> RefCell<Vec<Place>> {
    RefCell::new(Vec::new())
}

#[fixture]
fn ranked() -> RefCell<Vec<RankedPlace>> {
    RefCell::new(Vec::new())
}

#[fixture]
fn reranked() -> RefCell<Vec<RankedPlace>> {
    RefCell::new(Vec::new())
}

#[given("a museum, a museum with an accented name and a park")]
fn given_museums_and_park(#[from(places)] places: &RefCell<Vec<Place>>) {
    let at = centre();
    *places.borrow_mut() = vec![
        Place::new("City Park", at).with_category(Category::Park),
        Place::new("Musée Rodin", at).with_category(Category::Museum),
        Place::new("Natural History Museum", at).with_category(Category::Museum),
    ];
}

#[given("three cafés at increasing distance from the centre")]
fn given_cafes(#[from(places)] places: &RefCell<Vec<Place>>) {
    let at = centre();
    *places.borrow_mut() = vec![
        Place::new("Far Café", Coordinate::new(at.latitude + 0.010, at.longitude))
            .with_category(Category::Cafe),
        Place::new("Near Café", Coordinate::new(at.latitude + 0.001, at.longitude))
            .with_category(Category::Cafe),
        Place::new("Middle Café", Coordinate::new(at.latitude + 0.005, at.longitude))
            .with_category(Category::Cafe),
    ];
}

#[when("I rank them for the query \"muse\"")]
fn when_rank_free_text(
    #[from(places)] places: &RefCell<Vec<Place>>,
    #[from(ranked)] ranked: &RefCell<Vec<RankedPlace>>,
) {
    *ranked.borrow_mut() = rank(places.borrow().clone(), "muse", None);
}

#[when("I rank them around the centre")]
fn when_rank_nearby(
    #[from(places)] places: &RefCell<Vec<Place>>,
    #[from(ranked)] ranked: &RefCell<Vec<RankedPlace>>,
) {
    *ranked.borrow_mut() = rank(places.borrow().clone(), "", Some(centre()));
}

#[when("I rank the result again for the query \"muse\"")]
fn when_rerank(
    #[from(ranked)] ranked: &RefCell<Vec<RankedPlace>>,
    #[from(reranked)] reranked: &RefCell<Vec<RankedPlace>>,
) {
    let again: Vec<Place> = ranked.borrow().iter().map(|r| r.place.clone()).collect();
    *reranked.borrow_mut() = rank_with(again, RankMode::FreeText { query: "muse" });
}

#[then("the order is Natural History Museum, Musée Rodin, City Park")]
fn then_muse_order(#[from(ranked)] ranked: &RefCell<Vec<RankedPlace>>) {
    assert_eq!(
        names(&ranked.borrow()),
        ["Natural History Museum", "Musée Rodin", "City Park"],
        "category priority dominates, then match quality"
    );
}

#[then("the closest café comes first")]
fn then_closest_first(#[from(ranked)] ranked: &RefCell<Vec<RankedPlace>>) {
    assert_eq!(
        names(&ranked.borrow()),
        ["Near Café", "Middle Café", "Far Café"]
    );
}

#[then("both rankings agree")]
fn then_idempotent(
    #[from(ranked)] ranked: &RefCell<Vec<RankedPlace>>,
    #[from(reranked)] reranked: &RefCell<Vec<RankedPlace>>,
) {
    assert_eq!(*ranked.borrow(), *reranked.borrow());
}

#[scenario(path = "tests/features/ranking.feature", index = 0)]
fn free_text_ranking(
    places: RefCell<Vec<Place>>,
    ranked: RefCell<Vec<RankedPlace>>,
    reranked: RefCell<Vec<RankedPlace>>,
) {
    let _ = (places, ranked, reranked);
}

#[scenario(path = "tests/features/ranking.feature", index = 1)]
fn nearby_ranking(
    places: RefCell<Vec<Place>>,
    ranked: RefCell<Vec<RankedPlace>>,
    reranked: RefCell<Vec<RankedPlace>>,
) {
    let _ = (places, ranked, reranked);
}

#[scenario(path = "tests/features/ranking.feature", index = 2)]
fn ranking_is_idempotent(
    places: RefCell<Vec<Place>>,
    ranked: RefCell<Vec<RankedPlace>>,
    reranked: RefCell<Vec<RankedPlace>>,
) {
    let _ = (places, ranked, reranked);
}
