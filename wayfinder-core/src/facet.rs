//! Filter facets derived from the categories present in a result set.
//!
//! Facets are rebuilt from scratch whenever the results change.
//! [`FacetSelection`] keeps the current selection valid across rebuilds by
//! falling back to [`Facet::All`] whenever the selected facet disappears.

use std::collections::BTreeSet;

use log::debug;
use thiserror::Error;

use crate::{Category, Locatable};

/// A filter bucket offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Facet {
    /// Every result.
    #[default]
    All,
    /// Results of one category.
    Category(Category),
    /// Results without a category.
    Uncategorized,
}

impl Facet {
    /// Stable identifier: `"all"`, `"uncategorized"` or the category tag.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Uncategorized => "uncategorized",
            Self::Category(category) => category.as_str(),
        }
    }

    /// Label shown on the filter chip.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Uncategorized => "Uncategorized",
            Self::Category(category) => category.display_name(),
        }
    }

    /// Icon shown on the filter chip.
    #[must_use]
    pub const fn icon_key(self) -> &'static str {
        match self {
            Self::All => "square.grid.2x2",
            Self::Uncategorized => "mappin",
            Self::Category(category) => category.icon_key(),
        }
    }

    /// Report whether `item` belongs to this facet.
    #[must_use]
    pub fn matches<T: Locatable + ?Sized>(self, item: &T) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => item.category() == Some(category),
            Self::Uncategorized => item.category().is_none(),
        }
    }
}

impl std::fmt::Display for Facet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Error returned when a facet identifier is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown facet '{0}'")]
pub struct FacetParseError(pub String);

impl std::str::FromStr for Facet {
    type Err = FacetParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "uncategorized" => Ok(Self::Uncategorized),
            _ => s
                .parse::<Category>()
                .map(Self::Category)
                .map_err(|_| FacetParseError(s.to_owned())),
        }
    }
}

/// Derive the facets offered for `items`.
///
/// [`Facet::All`] comes first, then one facet per distinct category ordered
/// by priority and display name, then [`Facet::Uncategorized`] when any item
/// lacks a category.
///
/// # Examples
/// ```
/// use wayfinder_core::{Category, Coordinate, Facet, Place, available_facets};
///
/// let at = Coordinate::new(0.0, 0.0);
/// let places = vec![
///     Place::new("Park", at).with_category(Category::Park),
///     Place::new("Louvre", at).with_category(Category::Museum),
///     Place::new("Kiosk", at),
/// ];
/// assert_eq!(
///     available_facets(&places),
///     [
///         Facet::All,
///         Facet::Category(Category::Museum),
///         Facet::Category(Category::Park),
///         Facet::Uncategorized,
///     ],
/// );
/// ```
#[must_use]
pub fn available_facets<T: Locatable>(items: &[T]) -> Vec<Facet> {
    let categories: BTreeSet<Category> = items.iter().filter_map(Locatable::category).collect();
    let mut ordered: Vec<Category> = categories.into_iter().collect();
    ordered.sort_by(|left, right| {
        left.priority()
            .cmp(&right.priority())
            .then_with(|| left.display_name().cmp(right.display_name()))
    });

    let mut facets = Vec::with_capacity(ordered.len() + 2);
    facets.push(Facet::All);
    facets.extend(ordered.into_iter().map(Facet::Category));
    if items.iter().any(|item| item.category().is_none()) {
        facets.push(Facet::Uncategorized);
    }
    facets
}

/// Keep the items belonging to `facet`, preserving order.
#[must_use]
pub fn apply<T: Locatable>(facet: Facet, items: Vec<T>) -> Vec<T> {
    match facet {
        Facet::All => items,
        _ => items.into_iter().filter(|item| facet.matches(item)).collect(),
    }
}

/// The facets offered for the current results and the user's selection.
///
/// # Examples
/// ```
/// use wayfinder_core::{Category, Coordinate, Facet, FacetSelection, Place};
///
/// let at = Coordinate::new(0.0, 0.0);
/// let mut selection = FacetSelection::new();
/// selection.rebuild(&[Place::new("Louvre", at).with_category(Category::Museum)]);
/// assert!(selection.select(Facet::Category(Category::Museum)));
///
/// selection.rebuild(&[Place::new("Park", at).with_category(Category::Park)]);
/// assert_eq!(selection.selected(), Facet::All);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetSelection {
    facets: Vec<Facet>,
    selected: Facet,
}

impl Default for FacetSelection {
    fn default() -> Self {
        Self {
            facets: vec![Facet::All],
            selected: Facet::All,
        }
    }
}

impl FacetSelection {
    /// Start with only [`Facet::All`] offered and selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-derive the facets for `items`.
    ///
    /// The selection reverts to [`Facet::All`] when the new facets no longer
    /// include it.
    pub fn rebuild<T: Locatable>(&mut self, items: &[T]) {
        self.facets = available_facets(items);
        if !self.facets.contains(&self.selected) {
            debug!("facet '{}' no longer offered; selecting all", self.selected);
            self.selected = Facet::All;
        }
    }

    /// Select `facet` if it is currently offered.
    ///
    /// Returns `false` and leaves the selection unchanged otherwise.
    pub fn select(&mut self, facet: Facet) -> bool {
        if self.facets.contains(&facet) {
            self.selected = facet;
            true
        } else {
            false
        }
    }

    /// Currently offered facets.
    #[must_use]
    pub const fn facets(&self) -> &[Facet] {
        self.facets.as_slice()
    }

    /// Currently selected facet.
    #[must_use]
    pub const fn selected(&self) -> Facet {
        self.selected
    }

    /// Filter `items` by the selected facet.
    #[must_use]
    pub fn apply<T: Locatable>(&self, items: Vec<T>) -> Vec<T> {
        apply(self.selected, items)
    }
}
