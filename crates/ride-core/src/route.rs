//! A resolved route polyline.

use crate::GeoPoint;

/// The result of one successful route resolution.
///
/// Replaced wholesale on every successful resolution; cleared whenever the
/// endpoints it was computed from stop being simultaneously defined, or on
/// resolution failure.  Never mutated in place.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutePath {
    /// Polyline vertices as `[lng, lat]` pairs (collaborator wire order).
    pub coordinates: Vec<[f64; 2]>,
    /// Total length in metres.
    pub distance_m: f64,
    /// Estimated travel time in seconds.
    pub duration_s: f64,
}

impl RoutePath {
    pub fn new(coordinates: Vec<[f64; 2]>, distance_m: f64, duration_s: f64) -> Self {
        Self {
            coordinates,
            distance_m,
            duration_s,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// Vertices as `GeoPoint`s, in path order.
    pub fn points(&self) -> impl Iterator<Item = GeoPoint> + '_ {
        self.coordinates
            .iter()
            .map(|&[lng, lat]| GeoPoint::new(lat, lng))
    }
}
