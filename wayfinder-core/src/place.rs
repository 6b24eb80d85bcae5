//! Candidate places produced by an external search provider.

use log::debug;

use crate::{Category, Coordinate};

/// A candidate search result.
///
/// `identity` is a stable, provider-verified identifier. It is absent for
/// features the provider could not verify.
///
/// # Examples
/// ```
/// use wayfinder_core::{Category, Coordinate, Place};
///
/// let place = Place::new("Louvre", Coordinate::new(48.8606, 2.3376))
///     .with_category(Category::Museum)
///     .with_identity("I6A2F");
/// assert_eq!(place.identity.as_deref(), Some("I6A2F"));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Place {
    /// Name as reported by the provider.
    pub name: String,
    /// Position of the place.
    pub coordinate: Coordinate,
    /// Category, or `None` when uncategorized or unrecognised.
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "lenient::category")
    )]
    pub category: Option<Category>,
    /// Provider identity, when verified.
    #[cfg_attr(feature = "serde", serde(default))]
    pub identity: Option<String>,
    /// City with surrounding context, e.g. "Paris, Île-de-France".
    #[cfg_attr(feature = "serde", serde(default))]
    pub locality: Option<String>,
}

impl Place {
    /// Construct an uncategorized place without identity.
    #[must_use]
    pub fn new(name: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            name: name.into(),
            coordinate,
            category: None,
            identity: None,
            locality: None,
        }
    }

    /// Set the category while returning `self` for chaining.
    #[must_use]
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Set the category from a provider tag.
    ///
    /// Unrecognised tags leave the place uncategorized.
    ///
    /// # Examples
    /// ```
    /// use wayfinder_core::{Category, Coordinate, Place};
    ///
    /// let origin = Coordinate::new(0.0, 0.0);
    /// let park = Place::new("Hyde Park", origin).with_category_tag("MKPOICategoryPark");
    /// assert_eq!(park.category, Some(Category::Park));
    /// let odd = Place::new("Spaceport", origin).with_category_tag("spaceport");
    /// assert_eq!(odd.category, None);
    /// ```
    #[must_use]
    pub fn with_category_tag(mut self, tag: &str) -> Self {
        self.category = tag
            .parse::<Category>()
            .inspect_err(|err| debug!("treating '{}' as uncategorized: {err}", self.name))
            .ok();
        self
    }

    /// Set the provider identity while returning `self` for chaining.
    #[must_use]
    pub fn with_identity(mut self, identity: impl Into<String>) -> Self {
        self.identity = Some(identity.into());
        self
    }

    /// Set the locality while returning `self` for chaining.
    #[must_use]
    pub fn with_locality(mut self, locality: impl Into<String>) -> Self {
        self.locality = Some(locality.into());
        self
    }

    /// Name with surrounding whitespace removed.
    #[must_use]
    pub fn trimmed_name(&self) -> &str {
        self.name.trim()
    }
}

/// A place annotated with its zero-based position in a ranking.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedPlace {
    /// Position in the ranked list, starting at zero.
    pub rank: usize,
    /// The ranked place.
    pub place: Place,
}

/// Anything with a name, a position and optional category and identity.
///
/// Deduplication and facet filtering operate on this trait so the same rules
/// apply to search results and map pins.
pub trait Locatable {
    /// Display name.
    fn name(&self) -> &str;
    /// Position.
    fn coordinate(&self) -> Coordinate;
    /// Category, if known.
    fn category(&self) -> Option<Category>;
    /// Provider identity, if verified.
    fn identity(&self) -> Option<&str>;
}

impl Locatable for Place {
    fn name(&self) -> &str {
        &self.name
    }

    fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    fn category(&self) -> Option<Category> {
        self.category
    }

    fn identity(&self) -> Option<&str> {
        self.identity.as_deref()
    }
}

impl Locatable for RankedPlace {
    fn name(&self) -> &str {
        self.place.name()
    }

    fn coordinate(&self) -> Coordinate {
        self.place.coordinate
    }

    fn category(&self) -> Option<Category> {
        self.place.category
    }

    fn identity(&self) -> Option<&str> {
        self.place.identity()
    }
}

/// One-line description of a place for result lists.
///
/// Joins the category display name and locality with a single space. When
/// neither is available the coordinate is shown to four decimal places.
///
/// # Examples
/// ```
/// use wayfinder_core::{Category, Coordinate, Place, subtitle};
///
/// let coordinate = Coordinate::new(48.86061, 2.33764);
/// let louvre = Place::new("Louvre", coordinate)
///     .with_category(Category::Museum)
///     .with_locality("Paris");
/// assert_eq!(subtitle(&louvre), "Museum Paris");
/// assert_eq!(subtitle(&Place::new("?", coordinate)), "48.8606, 2.3376");
/// ```
#[must_use]
pub fn subtitle(place: &Place) -> String {
    subtitle_parts(place.category, place.locality.as_deref(), place.coordinate)
}

fn subtitle_parts(
    category: Option<Category>,
    locality: Option<&str>,
    coordinate: Coordinate,
) -> String {
    let parts: Vec<&str> = [category.map(Category::display_name), locality.map(str::trim)]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect();
    if parts.is_empty() {
        format!("{:.4}, {:.4}", coordinate.latitude, coordinate.longitude)
    } else {
        parts.join(" ")
    }
}

#[cfg(feature = "serde")]
mod lenient {
    use log::debug;
    use serde::{Deserialize, Deserializer};

    use crate::Category;

    /// Decode an optional category tag, mapping unknown tags to `None`.
    pub(super) fn category<'de, D>(deserializer: D) -> Result<Option<Category>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.and_then(|tag| {
            tag.parse::<Category>()
                .inspect_err(|err| debug!("ignoring category tag: {err}"))
                .ok()
        }))
    }
}
