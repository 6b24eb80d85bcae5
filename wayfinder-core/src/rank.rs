//! Relevance ranking for raw search results.
//!
//! Two modes are supported:
//!
//! - [`RankMode::Nearby`] orders category-scoped suggestions by distance from
//!   a centre, breaking ties by case-insensitive name.
//! - [`RankMode::FreeText`] orders textual search hits by category priority,
//!   then by how well the name matches the query, then by name.
//!
//! Both orders are total, so ranking an already ranked list is a no-op.
//!
//! Name matching lowercases both sides but does not fold accents: `"muse"`
//! does not match `"Musée"`. The final tiebreak compares the raw names
//! byte-wise.

use std::cmp::Ordering;

use log::warn;

use crate::{Coordinate, Place, RankedPlace, distance_meters, priority_of};

/// How a batch of places should be ordered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RankMode<'a> {
    /// Order by distance from `center`, then by case-insensitive name.
    Nearby {
        /// Reference point for distances.
        center: Coordinate,
    },
    /// Order by category priority, name match quality and name.
    FreeText {
        /// Text entered by the user.
        query: &'a str,
    },
}

impl<'a> RankMode<'a> {
    /// Choose a mode from a user request.
    ///
    /// A non-blank query selects [`RankMode::FreeText`] even when a centre is
    /// supplied. Without a query, a centre selects [`RankMode::Nearby`].
    /// With neither, every place ties on match quality and the result is
    /// ordered by priority and name.
    ///
    /// # Examples
    /// ```
    /// use wayfinder_core::{Coordinate, RankMode};
    ///
    /// let centre = Coordinate::new(0.0, 0.0);
    /// assert_eq!(
    ///     RankMode::from_request(" louvre ", Some(centre)),
    ///     RankMode::FreeText { query: "louvre" },
    /// );
    /// assert_eq!(
    ///     RankMode::from_request("", Some(centre)),
    ///     RankMode::Nearby { center: centre },
    /// );
    /// ```
    #[must_use]
    pub fn from_request(query: &'a str, center: Option<Coordinate>) -> Self {
        let trimmed = query.trim();
        match center {
            Some(center) if trimmed.is_empty() => Self::Nearby { center },
            _ => Self::FreeText { query: trimmed },
        }
    }
}

/// Rank `places` for a query and optional centre.
///
/// See [`RankMode::from_request`] for how the mode is chosen.
#[must_use]
pub fn rank(places: Vec<Place>, query: &str, center: Option<Coordinate>) -> Vec<RankedPlace> {
    rank_with(places, RankMode::from_request(query, center))
}

/// Rank `places` using an explicit mode.
///
/// # Examples
/// ```
/// use wayfinder_core::{Category, Coordinate, Place, RankMode, rank_with};
///
/// let at = Coordinate::new(48.86, 2.34);
/// let places = vec![
///     Place::new("City Park", at).with_category(Category::Park),
///     Place::new("Louvre", at).with_category(Category::Museum),
/// ];
/// let ranked = rank_with(places, RankMode::FreeText { query: "louvre" });
/// assert_eq!(ranked[0].place.name, "Louvre");
/// assert_eq!(ranked[1].rank, 1);
/// ```
#[must_use]
pub fn rank_with(places: Vec<Place>, mode: RankMode<'_>) -> Vec<RankedPlace> {
    let ordered = match mode {
        RankMode::Nearby { center } => sort_nearby(places, center),
        RankMode::FreeText { query } => sort_free_text(places, query),
    };
    ordered
        .into_iter()
        .enumerate()
        .map(|(rank, place)| RankedPlace { rank, place })
        .collect()
}

/// Score how well `name` matches `query`, ignoring case.
///
/// `0` for an exact match, `1` for a prefix, `2` for a substring and `3`
/// otherwise.
///
/// # Examples
/// ```
/// use wayfinder_core::name_match_score;
///
/// assert_eq!(name_match_score("Louvre", "louvre"), 0);
/// assert_eq!(name_match_score("Louvre Pyramid", "louvre"), 1);
/// assert_eq!(name_match_score("Musée du Louvre", "louvre"), 2);
/// assert_eq!(name_match_score("Orsay", "louvre"), 3);
/// ```
#[must_use]
pub fn name_match_score(name: &str, query: &str) -> u8 {
    score_lowercased(&name.to_lowercase(), &query.to_lowercase())
}

fn score_lowercased(name: &str, query: &str) -> u8 {
    if name == query {
        0
    } else if name.starts_with(query) {
        1
    } else if name.contains(query) {
        2
    } else {
        3
    }
}

fn sort_free_text(mut places: Vec<Place>, query: &str) -> Vec<Place> {
    let folded_query = query.to_lowercase();
    places.sort_by_cached_key(|place| {
        (
            priority_of(place.category),
            score_lowercased(&place.name.to_lowercase(), &folded_query),
            place.name.clone(),
        )
    });
    places
}

struct NearbyKey {
    distance: f64,
    folded_name: String,
}

fn sort_nearby(places: Vec<Place>, center: Coordinate) -> Vec<Place> {
    let mut keyed: Vec<(NearbyKey, Place)> = places
        .into_iter()
        .map(|place| {
            let distance = distance_meters(place.coordinate, center);
            if !distance.is_finite() {
                warn!(
                    "non-finite distance for '{}' at {:?}; ranking it last",
                    place.name, place.coordinate
                );
            }
            let key = NearbyKey {
                distance,
                folded_name: place.name.to_lowercase(),
            };
            (key, place)
        })
        .collect();
    keyed.sort_by(|(left_key, left), (right_key, right)| {
        compare_nearby(left_key, right_key).then_with(|| left.name.cmp(&right.name))
    });
    keyed.into_iter().map(|(_, place)| place).collect()
}

fn compare_nearby(left: &NearbyKey, right: &NearbyKey) -> Ordering {
    let by_distance = match (left.distance.is_finite(), right.distance.is_finite()) {
        (true, true) => left.distance.total_cmp(&right.distance),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => Ordering::Equal,
    };
    by_distance.then_with(|| left.folded_name.cmp(&right.folded_name))
}
