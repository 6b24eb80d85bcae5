//! Duplicate detection for search results and map pins.
//!
//! A [`DedupStrategy`] decides whether a candidate duplicates an item already
//! accepted. Strategies are never mixed within one call: callers pick
//! [`DedupStrategy::Identity`] when the provider verified an identity and a
//! proximity rule otherwise.

use log::debug;

use crate::{Locatable, distance_meters};

/// Named results closer than this many meters are the same place.
pub const NAMED_RESULT_THRESHOLD_METERS: f64 = 75.0;

/// Pins within this many meters of an existing pin are rejected.
pub const PIN_DROP_THRESHOLD_METERS: f64 = 20.0;

/// Rule used to decide whether two items describe the same place.
///
/// # Examples
/// ```
/// use wayfinder_core::{Coordinate, DedupStrategy, Place};
///
/// let a = Place::new("Grand Hotel", Coordinate::new(0.0, 0.0));
/// let b = Place::new("grand hotel ", Coordinate::new(0.0003, 0.0));
/// assert!(DedupStrategy::NAMED_RESULTS.is_duplicate_of(&b, &a));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DedupStrategy {
    /// Equal provider identities. Items without identity never match.
    Identity,
    /// Same trimmed, case-insensitive name and strictly closer than the
    /// threshold in meters.
    NamedProximity(f64),
    /// Within the threshold in meters (inclusive), whatever the names.
    Proximity(f64),
}

impl DedupStrategy {
    /// Name and distance rule for search results.
    pub const NAMED_RESULTS: Self = Self::NamedProximity(NAMED_RESULT_THRESHOLD_METERS);

    /// Distance-only rule for dropped pins.
    pub const PIN_DROP: Self = Self::Proximity(PIN_DROP_THRESHOLD_METERS);

    /// Strategy for inserting a pin: identity when the candidate has one,
    /// [`DedupStrategy::PIN_DROP`] otherwise.
    #[must_use]
    pub fn for_pin<T: Locatable + ?Sized>(candidate: &T) -> Self {
        if candidate.identity().is_some() {
            Self::Identity
        } else {
            Self::PIN_DROP
        }
    }

    /// Report whether `candidate` duplicates `existing`.
    #[must_use]
    pub fn is_duplicate_of<T, U>(&self, candidate: &T, existing: &U) -> bool
    where
        T: Locatable + ?Sized,
        U: Locatable + ?Sized,
    {
        match *self {
            Self::Identity => candidate
                .identity()
                .is_some_and(|identity| existing.identity() == Some(identity)),
            Self::NamedProximity(threshold) => {
                same_name(candidate.name(), existing.name())
                    && distance_meters(candidate.coordinate(), existing.coordinate()) < threshold
            }
            Self::Proximity(threshold) => {
                distance_meters(candidate.coordinate(), existing.coordinate()) <= threshold
            }
        }
    }

    /// Report whether `candidate` duplicates any of `existing`.
    #[must_use]
    pub fn is_duplicate<T, U>(&self, candidate: &T, existing: &[U]) -> bool
    where
        T: Locatable + ?Sized,
        U: Locatable,
    {
        existing
            .iter()
            .any(|item| self.is_duplicate_of(candidate, item))
    }
}

fn same_name(left: &str, right: &str) -> bool {
    left.trim().to_lowercase() == right.trim().to_lowercase()
}

/// Drop items that duplicate an earlier item.
///
/// Items are visited in order and compared against the items already kept,
/// so the earlier (better ranked) item always survives.
///
/// # Examples
/// ```
/// use wayfinder_core::{Coordinate, DedupStrategy, Place, dedup};
///
/// let places = vec![
///     Place::new("Grand Hotel", Coordinate::new(0.0, 0.0)),
///     Place::new("Grand Hotel", Coordinate::new(0.00045, 0.0)),
///     Place::new("Grand Hotel", Coordinate::new(0.01, 0.0)),
/// ];
/// let kept = dedup(places, DedupStrategy::NAMED_RESULTS);
/// assert_eq!(kept.len(), 2);
/// ```
#[must_use]
pub fn dedup<T: Locatable>(items: Vec<T>, strategy: DedupStrategy) -> Vec<T> {
    let mut kept: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        if strategy.is_duplicate(&item, kept.as_slice()) {
            debug!("dropping duplicate '{}' under {strategy:?}", item.name());
        } else {
            kept.push(item);
        }
    }
    kept
}
