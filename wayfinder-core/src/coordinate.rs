//! Geographic coordinates and the surface distance between them.
//!
//! Distances use the haversine great-circle model from `geo`, measured on the
//! mean Earth radius. Coordinates are WGS84 degrees; validating their ranges
//! is the caller's job.

use std::cmp::Ordering;

use geo::{Coord, Distance, Haversine, Point};

/// A latitude/longitude pair in degrees.
///
/// # Examples
/// ```
/// use wayfinder_core::Coordinate;
///
/// let louvre = Coordinate::new(48.8606, 2.3376);
/// assert_eq!(louvre.distance_meters(louvre), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    /// Degrees north of the equator.
    pub latitude: f64,
    /// Degrees east of the prime meridian.
    pub longitude: f64,
}

impl Coordinate {
    /// Construct a coordinate from latitude and longitude in degrees.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Distance to `other` in meters. See [`distance_meters`].
    #[must_use]
    pub fn distance_meters(self, other: Self) -> f64 {
        distance_meters(self, other)
    }
}

impl From<Coordinate> for Coord<f64> {
    fn from(value: Coordinate) -> Self {
        Self {
            x: value.longitude,
            y: value.latitude,
        }
    }
}

impl From<Coord<f64>> for Coordinate {
    fn from(value: Coord<f64>) -> Self {
        Self::new(value.y, value.x)
    }
}

impl From<Coordinate> for Point<f64> {
    fn from(value: Coordinate) -> Self {
        Self::from(Coord::from(value))
    }
}

/// Surface distance between two coordinates in meters.
///
/// The result is symmetric, zero for identical coordinates, and grows with
/// angular separation.
///
/// # Examples
/// ```
/// use wayfinder_core::{Coordinate, distance_meters};
///
/// let a = Coordinate::new(0.0, 0.0);
/// let b = Coordinate::new(1.0, 0.0);
/// let d = distance_meters(a, b);
/// assert!((111_000.0..111_400.0).contains(&d));
/// assert_eq!(d, distance_meters(b, a));
/// ```
#[must_use]
pub fn distance_meters(a: Coordinate, b: Coordinate) -> f64 {
    // Fixed endpoint order keeps the result bit-for-bit symmetric.
    let (first, second) = match compare_coordinates(a, b) {
        Ordering::Greater => (b, a),
        Ordering::Less | Ordering::Equal => (a, b),
    };
    Haversine.distance(Point::from(first), Point::from(second))
}

fn compare_coordinates(a: Coordinate, b: Coordinate) -> Ordering {
    a.latitude
        .total_cmp(&b.latitude)
        .then_with(|| a.longitude.total_cmp(&b.longitude))
}
