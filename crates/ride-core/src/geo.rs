//! Geographic coordinate type and spatial utilities.
//!
//! `GeoPoint` uses `f64` latitude/longitude.  Map-click coordinates and
//! collaborator payloads are full-precision doubles, and points are compared
//! by value (a click point must round-trip through the session unchanged),
//! so there is no room for a lossy narrowing here.

/// A WGS-84 geographic coordinate.
///
/// Compared by value, never by identity: two fixes at the same coordinates
/// are the same point.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Haversine great-circle distance in kilometres.
    ///
    /// Matches the unit the fleet collaborator reports (`distance_km`), so
    /// test fixtures and synthetic rosters can be built without conversion.
    pub fn distance_km(self, other: GeoPoint) -> f64 {
        const R_KM: f64 = 6_371.0; // mean Earth radius

        let d_lat = (other.lat - self.lat).to_radians();
        let d_lng = (other.lng - self.lng).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lng * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        R_KM * c
    }

    /// The `[lng, lat]` pair used by the routing collaborator's wire format.
    #[inline]
    pub fn lng_lat(self) -> [f64; 2] {
        [self.lng, self.lat]
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lng)
    }
}
