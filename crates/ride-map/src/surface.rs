//! The seam between the sync engine and a concrete map binding.

use ride_core::{CarId, GeoPoint};

/// Which fixed point marker an operation addresses.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum PointKind {
    Pickup,
    Dropoff,
}

/// A lat/lng bounding box accumulated point by point, for camera fitting.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl Bounds {
    /// A degenerate box containing exactly `p`.
    pub fn around(p: GeoPoint) -> Self {
        Self {
            south: p.lat,
            west: p.lng,
            north: p.lat,
            east: p.lng,
        }
    }

    /// Grow the box to contain `p`.
    pub fn extend(&mut self, p: GeoPoint) {
        self.south = self.south.min(p.lat);
        self.west = self.west.min(p.lng);
        self.north = self.north.max(p.lat);
        self.east = self.east.max(p.lng);
    }
}

/// One method per visual mutation of the retained map surface.
///
/// Implementations hold the actual marker/layer handles; the sync engine
/// never sees them.  Every call is the *result* of a diff — an
/// implementation may apply each one unconditionally, and an unchanged
/// snapshot produces no calls at all.
pub trait MapSurface {
    // ── User marker ───────────────────────────────────────────────────────

    /// Create the user marker.  Called at most once per marker lifetime.
    fn place_user(&mut self, at: GeoPoint);
    /// Reposition the existing user marker.
    fn move_user(&mut self, to: GeoPoint);

    // ── Pickup / dropoff markers ──────────────────────────────────────────

    fn place_point(&mut self, kind: PointKind, at: GeoPoint);
    fn move_point(&mut self, kind: PointKind, to: GeoPoint);
    fn remove_point(&mut self, kind: PointKind);

    // ── Vehicle markers ───────────────────────────────────────────────────

    fn add_vehicle(&mut self, id: &CarId, at: GeoPoint, heading_deg: f64, selected: bool);
    /// Mutate an existing vehicle marker in place (position, rotation,
    /// emphasis).  Never recreates the marker.
    fn update_vehicle(&mut self, id: &CarId, at: GeoPoint, heading_deg: f64, selected: bool);
    fn remove_vehicle(&mut self, id: &CarId);

    // ── Route line ────────────────────────────────────────────────────────

    /// Replace the route line wholesale with `[lng, lat]` vertices.
    fn set_route(&mut self, coordinates: &[[f64; 2]]);
    fn clear_route(&mut self);

    // ── Camera ────────────────────────────────────────────────────────────

    fn fly_to(&mut self, center: GeoPoint);
    fn fit_bounds(&mut self, bounds: Bounds);
}
