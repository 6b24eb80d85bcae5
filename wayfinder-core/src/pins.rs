//! Session-scoped registry of map pins dropped or selected by the user.
//!
//! Accepted pins keep their insertion order. The most recently accepted pin
//! is highlighted for [`HIGHLIGHT_DURATION`]. Each highlight bumps a version
//! counter and hands out a [`HighlightTicket`]; expiring a ticket clears the
//! highlight only while that ticket is still current, so a newer highlight is
//! never cleared by an older timer.
//!
//! The registry is not synchronised. Share it behind a `Mutex` when pins can
//! be inserted from several threads.

use std::hash::{Hash, Hasher};
use std::time::{Duration, Instant};

use log::debug;
use uuid::Uuid;

use crate::{Category, Coordinate, DedupStrategy, Locatable, Place};

/// How long a newly accepted pin stays highlighted.
pub const HIGHLIGHT_DURATION: Duration = Duration::from_millis(1200);

/// Name given to pins whose source has none.
pub const DEFAULT_PIN_NAME: &str = "Selected Place";

/// Process-local unique pin token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PinId(Uuid);

impl PinId {
    fn fresh() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for PinId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Where a pin came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum PinSource {
    /// One of our own search results.
    OwnItem,
    /// A feature tapped on the base map.
    SystemFeature,
}

/// A user-visible map annotation.
///
/// Two pins are equal when both carry an identity and the identities match;
/// otherwise they are compared by their unique [`PinId`], never by position.
///
/// The identity is fixed once set. [`Pin::with_identity`] issues a fresh
/// [`PinId`], so pins sharing an id always agree on their identity and
/// equality stays transitive across clones.
#[derive(Debug, Clone)]
pub struct Pin {
    id: PinId,
    /// Position of the pin.
    pub coordinate: Coordinate,
    /// Display name.
    pub name: String,
    identity: Option<String>,
    /// Category, if known.
    pub category: Option<Category>,
    /// Origin of the pin.
    pub source: PinSource,
}

impl Pin {
    /// Create a pin with a fresh id.
    ///
    /// A blank name is replaced with [`DEFAULT_PIN_NAME`].
    #[must_use]
    pub fn new(label: impl Into<String>, coordinate: Coordinate, source: PinSource) -> Self {
        let raw: String = label.into();
        let name = if raw.trim().is_empty() {
            DEFAULT_PIN_NAME.to_owned()
        } else {
            raw
        };
        Self {
            id: PinId::fresh(),
            coordinate,
            name,
            identity: None,
            category: None,
            source,
        }
    }

    /// Create a pin for a search result or tapped feature.
    ///
    /// # Examples
    /// ```
    /// use wayfinder_core::{Coordinate, Locatable, Pin, PinSource, Place};
    ///
    /// let place = Place::new("", Coordinate::new(1.0, 2.0)).with_identity("abc");
    /// let pin = Pin::from_place(&place, PinSource::SystemFeature);
    /// assert_eq!(pin.name, "Selected Place");
    /// assert_eq!(pin.identity(), Some("abc"));
    /// ```
    #[must_use]
    pub fn from_place(place: &Place, source: PinSource) -> Self {
        let mut pin = Self::new(place.trimmed_name(), place.coordinate, source);
        pin.identity.clone_from(&place.identity);
        pin.category = place.category;
        pin
    }

    /// Set the identity while returning `self` for chaining.
    ///
    /// The result is a new pin with its own [`PinId`].
    #[must_use]
    pub fn with_identity(mut self, identity: impl Into<String>) -> Self {
        self.id = PinId::fresh();
        self.identity = Some(identity.into());
        self
    }

    /// Set the category while returning `self` for chaining.
    #[must_use]
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Unique token of this pin.
    #[must_use]
    pub const fn id(&self) -> PinId {
        self.id
    }
}

impl PartialEq for Pin {
    fn eq(&self, other: &Self) -> bool {
        match (&self.identity, &other.identity) {
            (Some(left), Some(right)) => left == right,
            _ => self.id == other.id,
        }
    }
}

impl Eq for Pin {}

impl Hash for Pin {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match &self.identity {
            Some(identity) => identity.hash(state),
            None => self.id.hash(state),
        }
    }
}

impl Locatable for Pin {
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

/// Proof that a highlight was assigned, used to expire it later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightTicket {
    pin: PinId,
    version: u64,
}

impl HighlightTicket {
    /// Pin that was highlighted.
    #[must_use]
    pub const fn pin(&self) -> PinId {
        self.pin
    }

    /// Delay after which the ticket should be expired.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        HIGHLIGHT_DURATION
    }

    /// Instant at which the ticket should be expired, counting from `start`.
    #[must_use]
    pub fn deadline(&self, start: Instant) -> Instant {
        start + HIGHLIGHT_DURATION
    }
}

/// Outcome of [`PinRegistry::insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Insertion {
    /// The pin was added and highlighted.
    Accepted(HighlightTicket),
    /// The pin duplicated an existing pin; nothing changed.
    RejectedAsDuplicate,
}

impl Insertion {
    /// Report whether the pin was added.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// Ordered, deduplicated collection of pins with a transient highlight.
///
/// # Examples
/// ```
/// use wayfinder_core::{Coordinate, Insertion, Pin, PinRegistry, PinSource};
///
/// let mut registry = PinRegistry::new();
/// let first = Pin::new("Fountain", Coordinate::new(41.9009, 12.4833), PinSource::OwnItem);
/// let nearby = Pin::new("Steps", Coordinate::new(41.90095, 12.4833), PinSource::OwnItem);
///
/// let Insertion::Accepted(ticket) = registry.insert(first) else {
///     panic!("first pin is accepted");
/// };
/// assert_eq!(registry.highlighted(), Some(ticket.pin()));
/// assert_eq!(registry.insert(nearby), Insertion::RejectedAsDuplicate);
///
/// assert!(registry.expire(ticket));
/// assert_eq!(registry.highlighted(), None);
/// ```
#[derive(Debug, Default)]
pub struct PinRegistry {
    pins: Vec<Pin>,
    selected: Option<PinId>,
    highlighted: Option<PinId>,
    highlight_version: u64,
}

impl PinRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `candidate` unless it duplicates an existing pin.
    ///
    /// Candidates with an identity are compared by identity; others are
    /// rejected when within [`crate::PIN_DROP_THRESHOLD_METERS`] of any pin.
    /// A rejected candidate leaves the registry untouched.
    pub fn insert(&mut self, candidate: Pin) -> Insertion {
        let strategy = DedupStrategy::for_pin(&candidate);
        if strategy.is_duplicate(&candidate, &self.pins) {
            debug!("rejecting duplicate pin '{}' under {strategy:?}", candidate.name);
            return Insertion::RejectedAsDuplicate;
        }
        let id = candidate.id;
        self.pins.push(candidate);
        self.selected = Some(id);
        Insertion::Accepted(self.highlight(id))
    }

    fn highlight(&mut self, pin: PinId) -> HighlightTicket {
        self.highlight_version = self.highlight_version.wrapping_add(1);
        self.highlighted = Some(pin);
        HighlightTicket {
            pin,
            version: self.highlight_version,
        }
    }

    /// Clear the highlight if `ticket` is still the current one.
    ///
    /// Returns `true` when the highlight was cleared. Tickets superseded by a
    /// newer highlight, or issued before [`PinRegistry::clear`], do nothing.
    pub fn expire(&mut self, ticket: HighlightTicket) -> bool {
        if ticket.version == self.highlight_version && self.highlighted == Some(ticket.pin) {
            self.highlighted = None;
            true
        } else {
            false
        }
    }

    /// Remove every pin and all highlight state.
    pub fn clear(&mut self) {
        self.pins.clear();
        self.selected = None;
        self.highlighted = None;
        self.highlight_version = self.highlight_version.wrapping_add(1);
    }

    /// Accepted pins in insertion order.
    #[must_use]
    pub const fn pins(&self) -> &[Pin] {
        self.pins.as_slice()
    }

    /// Number of accepted pins.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.pins.len()
    }

    /// Report whether no pins have been accepted.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }

    /// Pin currently highlighted, if any.
    #[must_use]
    pub const fn highlighted(&self) -> Option<PinId> {
        self.highlighted
    }

    /// Most recently accepted pin. Unlike the highlight, this persists.
    #[must_use]
    pub const fn selected(&self) -> Option<PinId> {
        self.selected
    }

    /// Most recently accepted pin that came from a base-map feature.
    #[must_use]
    pub fn last_system_feature(&self) -> Option<&Pin> {
        self.pins
            .iter()
            .rev()
            .find(|pin| pin.source == PinSource::SystemFeature)
    }

    /// Look up a pin by id.
    #[must_use]
    pub fn get(&self, id: PinId) -> Option<&Pin> {
        self.pins.iter().find(|pin| pin.id == id)
    }
}
