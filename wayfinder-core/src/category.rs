//! Point-of-interest categories and their static metadata.
//!
//! Every category maps to a fixed [`CategoryMetadata`] record: a display
//! name, a tourist relevance priority (lower is more relevant), a suggested
//! map span and an icon key. Places without a category rank at
//! [`UNCATEGORIZED_PRIORITY`].
//!
//! # Examples
//! ```
//! use wayfinder_core::Category;
//!
//! assert_eq!(Category::Landmark.priority(), 0);
//! assert_eq!(Category::NationalPark.display_name(), "National Park");
//! assert_eq!("MKPOICategoryNationalPark".parse(), Ok(Category::NationalPark));
//! ```

use thiserror::Error;

/// Priority shared by uncategorized places and non-tourist categories.
pub const UNCATEGORIZED_PRIORITY: u32 = 50;

const DEFAULT_SPAN_DEGREES: f64 = 0.08;
const DEFAULT_ICON_KEY: &str = "mappin";
const PROVIDER_PREFIX: &str = "mkpoicategory";

/// A kind of point of interest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Category {
    /// Monuments and famous sights.
    Landmark,
    /// Museums and galleries.
    Museum,
    /// National parks.
    NationalPark,
    /// Urban and regional parks.
    Park,
    /// Beaches.
    Beach,
    /// Aquariums.
    Aquarium,
    /// Amusement and theme parks.
    AmusementPark,
    /// Stadiums and arenas.
    Stadium,
    /// Live performance theaters.
    Theater,
    /// Cinemas.
    MovieTheater,
    /// Marinas and harbours.
    Marina,
    /// Wineries.
    Winery,
    /// Breweries.
    Brewery,
    /// Libraries.
    Library,
    /// Universities.
    University,
    /// Campgrounds.
    Campground,
    /// Bars and clubs.
    Nightlife,
    /// Hotels.
    Hotel,
    /// Restaurants.
    Restaurant,
    /// Cafes.
    Cafe,
}

/// Static presentation and ranking data for a [`Category`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryMetadata {
    /// Stable snake_case tag.
    pub tag: &'static str,
    /// Human readable name.
    pub display_name: &'static str,
    /// Tourist relevance; lower sorts first.
    pub priority: u32,
    /// Suggested viewport size in degrees.
    pub span_degrees: f64,
    /// Symbol name used by map and filter renderers.
    pub icon_key: &'static str,
}

impl CategoryMetadata {
    const fn tourist(
        tag: &'static str,
        display_name: &'static str,
        priority: u32,
        span_degrees: f64,
        icon_key: &'static str,
    ) -> Self {
        Self {
            tag,
            display_name,
            priority,
            span_degrees,
            icon_key,
        }
    }

    const fn general(tag: &'static str, display_name: &'static str) -> Self {
        Self::tourist(
            tag,
            display_name,
            UNCATEGORIZED_PRIORITY,
            DEFAULT_SPAN_DEGREES,
            DEFAULT_ICON_KEY,
        )
    }
}

impl Category {
    /// Every known category.
    pub const ALL: [Self; 20] = [
        Self::Landmark,
        Self::Museum,
        Self::NationalPark,
        Self::Park,
        Self::Beach,
        Self::Aquarium,
        Self::AmusementPark,
        Self::Stadium,
        Self::Theater,
        Self::MovieTheater,
        Self::Marina,
        Self::Winery,
        Self::Brewery,
        Self::Library,
        Self::University,
        Self::Campground,
        Self::Nightlife,
        Self::Hotel,
        Self::Restaurant,
        Self::Cafe,
    ];

    /// Categories included when searching for tourist attractions.
    pub const TOURIST: [Self; 17] = [
        Self::Museum,
        Self::Landmark,
        Self::Park,
        Self::NationalPark,
        Self::Beach,
        Self::Marina,
        Self::Aquarium,
        Self::AmusementPark,
        Self::Stadium,
        Self::Theater,
        Self::MovieTheater,
        Self::Nightlife,
        Self::Winery,
        Self::Brewery,
        Self::Library,
        Self::University,
        Self::Campground,
    ];

    /// Return the static metadata record for this category.
    #[must_use]
    pub const fn metadata(self) -> CategoryMetadata {
        match self {
            Self::Landmark => {
                CategoryMetadata::tourist("landmark", "Landmark", 0, 0.03, "star.circle.fill")
            }
            Self::Museum => {
                CategoryMetadata::tourist("museum", "Museum", 1, 0.03, "building.columns")
            }
            Self::NationalPark => CategoryMetadata::tourist(
                "national_park",
                "National Park",
                2,
                0.50,
                "mountain.2.fill",
            ),
            Self::Park => CategoryMetadata::tourist("park", "Park", 3, 0.10, "tree.fill"),
            Self::Beach => {
                CategoryMetadata::tourist("beach", "Beach", 4, 0.15, "beach.umbrella.fill")
            }
            Self::Aquarium => CategoryMetadata::tourist("aquarium", "Aquarium", 5, 0.04, "fish"),
            Self::AmusementPark => CategoryMetadata::tourist(
                "amusement_park",
                "Amusement Park",
                6,
                0.12,
                "sparkles",
            ),
            Self::Stadium => {
                CategoryMetadata::tourist("stadium", "Stadium", 7, 0.05, "sportscourt.fill")
            }
            Self::Theater => {
                CategoryMetadata::tourist("theater", "Theater", 8, 0.03, "theatermasks.fill")
            }
            Self::MovieTheater => {
                CategoryMetadata::tourist("movie_theater", "Movie Theater", 9, 0.03, "film.fill")
            }
            Self::Marina => CategoryMetadata::tourist("marina", "Marina", 10, 0.06, "sailboat.fill"),
            Self::Winery => CategoryMetadata::tourist("winery", "Winery", 11, 0.06, "wineglass"),
            Self::Brewery => CategoryMetadata::tourist("brewery", "Brewery", 12, 0.04, "wineglass"),
            Self::Library => {
                CategoryMetadata::tourist("library", "Library", 13, 0.03, "books.vertical")
            }
            Self::University => CategoryMetadata::tourist(
                "university",
                "University",
                14,
                0.12,
                "graduationcap.fill",
            ),
            Self::Campground => {
                CategoryMetadata::tourist("campground", "Campground", 15, 0.12, "tent.fill")
            }
            Self::Nightlife => {
                CategoryMetadata::tourist("nightlife", "Nightlife", 16, 0.05, "moon.stars.fill")
            }
            Self::Hotel => CategoryMetadata::general("hotel", "Hotel"),
            Self::Restaurant => CategoryMetadata::general("restaurant", "Restaurant"),
            Self::Cafe => CategoryMetadata::general("cafe", "Cafe"),
        }
    }

    /// Return the category's snake_case tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.metadata().tag
    }

    /// Return the human readable name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        self.metadata().display_name
    }

    /// Return the tourist relevance priority; lower is more relevant.
    #[must_use]
    pub const fn priority(self) -> u32 {
        self.metadata().priority
    }

    /// Return the suggested map span in degrees.
    #[must_use]
    pub const fn span_degrees(self) -> f64 {
        self.metadata().span_degrees
    }

    /// Return the icon key.
    #[must_use]
    pub const fn icon_key(self) -> &'static str {
        self.metadata().icon_key
    }

    /// Report whether the category is one of [`Category::TOURIST`].
    #[must_use]
    pub const fn is_tourist(self) -> bool {
        self.priority() < UNCATEGORIZED_PRIORITY
    }
}

/// Ranking priority for an optional category.
///
/// # Examples
/// ```
/// use wayfinder_core::{Category, UNCATEGORIZED_PRIORITY, priority_of};
///
/// assert_eq!(priority_of(Some(Category::Museum)), 1);
/// assert_eq!(priority_of(None), UNCATEGORIZED_PRIORITY);
/// ```
#[must_use]
pub const fn priority_of(category: Option<Category>) -> u32 {
    match category {
        Some(category) => category.priority(),
        None => UNCATEGORIZED_PRIORITY,
    }
}

/// Suggested map span for an optional category.
#[must_use]
pub const fn span_degrees_of(category: Option<Category>) -> f64 {
    match category {
        Some(category) => category.span_degrees(),
        None => DEFAULT_SPAN_DEGREES,
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a category tag is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category '{0}'")]
pub struct CategoryParseError(pub String);

impl std::str::FromStr for Category {
    type Err = CategoryParseError;

    /// Parse snake_case, camelCase or provider-prefixed tags, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        let key = folded.strip_prefix(PROVIDER_PREFIX).unwrap_or(folded.as_str());
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().replace('_', "") == key)
            .ok_or_else(|| CategoryParseError(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    #[rstest]
    #[case("museum", Category::Museum)]
    #[case("national_park", Category::NationalPark)]
    #[case("nationalPark", Category::NationalPark)]
    #[case("MKPOICategoryMovieTheater", Category::MovieTheater)]
    #[case("  Amusement Park ", Category::AmusementPark)]
    fn parses_known_spellings(#[case] raw: &str, #[case] expected: Category) {
        assert_eq!(raw.parse::<Category>(), Ok(expected));
    }

    #[rstest]
    fn parsing_rejects_unknown() {
        let err = "spaceport".parse::<Category>().unwrap_err();
        assert!(err.to_string().contains("unknown category"));
    }

    #[rstest]
    fn display_round_trips_through_parse() {
        for category in Category::ALL {
            assert_eq!(category.to_string().parse::<Category>(), Ok(category));
        }
    }

    #[rstest]
    fn tourist_priorities_are_unique_and_below_floor() {
        let priorities: HashSet<u32> = Category::TOURIST.iter().map(|c| c.priority()).collect();
        assert_eq!(priorities.len(), Category::TOURIST.len());
        assert!(Category::TOURIST.iter().all(|c| c.is_tourist()));
    }

    #[rstest]
    #[case(Category::Hotel)]
    #[case(Category::Restaurant)]
    #[case(Category::Cafe)]
    fn general_categories_use_defaults(#[case] category: Category) {
        assert_eq!(category.priority(), UNCATEGORIZED_PRIORITY);
        assert_eq!(category.icon_key(), DEFAULT_ICON_KEY);
        assert!(!category.is_tourist());
    }

    #[rstest]
    fn uncategorized_span_uses_default() {
        assert_eq!(span_degrees_of(None), DEFAULT_SPAN_DEGREES);
        assert_eq!(span_degrees_of(Some(Category::NationalPark)), 0.50);
    }
}
