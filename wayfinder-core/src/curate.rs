//! End-to-end pipelines that turn a raw provider batch into curated output.

use log::warn;

use crate::{
    Coordinate, DedupStrategy, Place, RankMode, RankedPlace, dedup, display_text, rank_with,
};

/// Suggestions returned by [`nearby_suggestions`] unless told otherwise.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 3;

/// Results returned by [`search`] unless told otherwise.
pub const DEFAULT_SEARCH_LIMIT: usize = 20;

/// Names of the places closest to `center`, safe for a generative model.
///
/// The batch is ranked by distance, same-named places within
/// [`crate::NAMED_RESULT_THRESHOLD_METERS`] collapse onto the closest one,
/// unnamed places are dropped and the remaining names pass through
/// [`display_text`]. At most `limit` names are returned.
///
/// # Examples
/// ```
/// use wayfinder_core::{Coordinate, Place, nearby_suggestions};
///
/// let centre = Coordinate::new(35.6586, 139.7454);
/// let places = vec![
///     Place::new("東京タワー", Coordinate::new(35.6590, 139.7454)),
///     Place::new("Café Lumière", centre),
///     Place::new("Café Lumière", Coordinate::new(35.6587, 139.7454)),
/// ];
/// let names = nearby_suggestions(places, centre, 3);
/// assert_eq!(names.len(), 2);
/// assert_eq!(names[0], "Cafe Lumiere");
/// ```
#[must_use]
pub fn nearby_suggestions(places: Vec<Place>, center: Coordinate, limit: usize) -> Vec<String> {
    let ranked = rank_with(places, RankMode::Nearby { center });
    dedup(ranked, DedupStrategy::NAMED_RESULTS)
        .into_iter()
        .filter_map(|item| {
            let name = item.place.trimmed_name();
            if name.is_empty() {
                warn!("dropping unnamed place at {:?}", item.place.coordinate);
                None
            } else {
                Some(display_text(name))
            }
        })
        .take(limit)
        .collect()
}

/// Rank the verified places of a free-text search.
///
/// Places without a provider identity are discarded before ranking. A blank
/// query yields no results.
///
/// # Examples
/// ```
/// use wayfinder_core::{Category, Coordinate, Place, search};
///
/// let at = Coordinate::new(41.8902, 12.4922);
/// let places = vec![
///     Place::new("Colosseum", at).with_category(Category::Landmark).with_identity("c1"),
///     Place::new("Colosseum Snacks", at),
/// ];
/// let results = search(places, "colosseum", 20);
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].place.name, "Colosseum");
/// ```
#[must_use]
pub fn search(places: Vec<Place>, query: &str, limit: usize) -> Vec<RankedPlace> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    let verified: Vec<Place> = places
        .into_iter()
        .filter(|place| place.identity.is_some())
        .collect();
    let mut ranked = rank_with(verified, RankMode::FreeText { query: trimmed });
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Category;
    use rstest::{fixture, rstest};

    #[fixture]
    fn centre() -> Coordinate {
        Coordinate::new(51.5007, -0.1246)
    }

    fn offset(centre: Coordinate, degrees: f64) -> Coordinate {
        Coordinate::new(centre.latitude + degrees, centre.longitude)
    }

    #[rstest]
    fn suggestions_are_closest_first_and_limited(centre: Coordinate) {
        let places = vec![
            Place::new("Four", offset(centre, 0.004)),
            Place::new("One", offset(centre, 0.001)),
            Place::new("Three", offset(centre, 0.003)),
            Place::new("Two", offset(centre, 0.002)),
        ];
        assert_eq!(
            nearby_suggestions(places, centre, DEFAULT_SUGGESTION_LIMIT),
            ["One", "Two", "Three"]
        );
    }

    #[rstest]
    fn suggestions_drop_blank_names(centre: Coordinate) {
        let places = vec![
            Place::new("   ", centre),
            Place::new("", offset(centre, 0.001)),
            Place::new("  Pub  ", offset(centre, 0.002)),
        ];
        assert_eq!(nearby_suggestions(places, centre, 3), ["Pub"]);
    }

    #[rstest]
    fn suggestions_keep_originals_without_ascii_form(centre: Coordinate) {
        let places = vec![Place::new("🍺", centre)];
        assert_eq!(nearby_suggestions(places, centre, 3), ["🍺"]);
    }

    #[rstest]
    fn suggestions_carry_no_stray_spacing_or_symbols(centre: Coordinate) {
        let places = vec![
            Place::new("東京", centre),
            Place::new("القاهرة", offset(centre, 0.001)),
        ];
        assert_eq!(nearby_suggestions(places, centre, 3), ["Dong Jing", "lqhr"]);
    }

    #[rstest]
    fn suggestions_with_zero_limit_are_empty(centre: Coordinate) {
        assert!(nearby_suggestions(vec![Place::new("A", centre)], centre, 0).is_empty());
    }

    #[rstest]
    fn search_ignores_blank_queries(centre: Coordinate) {
        let places = vec![Place::new("A", centre).with_identity("a")];
        assert!(search(places, "  ", DEFAULT_SEARCH_LIMIT).is_empty());
    }

    #[rstest]
    fn search_ranks_verified_places_and_truncates(centre: Coordinate) {
        let places = vec![
            Place::new("Tower Hotel", centre)
                .with_category(Category::Hotel)
                .with_identity("h"),
            Place::new("Tower Bridge", centre)
                .with_category(Category::Landmark)
                .with_identity("b"),
            Place::new("Tower of London", centre)
                .with_category(Category::Museum)
                .with_identity("l"),
            Place::new("Tower Kiosk", centre),
        ];
        let results = search(places, "tower", 2);
        let names: Vec<_> = results.iter().map(|r| r.place.name.as_str()).collect();
        assert_eq!(names, ["Tower Bridge", "Tower of London"]);
        assert_eq!(results[1].rank, 1);
    }
}
