//! One roster entry as reported by the fleet collaborator.

use crate::{CarId, GeoPoint};

/// A vehicle visible on the map.
///
/// Created and removed each poll based on presence in the latest roster
/// response.  Identity is [`CarId`]; `position` and `heading_deg` may change
/// between polls for the same id, and consumers must treat such changes as
/// updates to an existing entity, never as a new one.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vehicle {
    pub id: CarId,
    pub position: GeoPoint,
    /// Compass heading in degrees, `[0, 360)`.
    pub heading_deg: f64,
    /// Distance from the query center, as reported by the collaborator.
    pub distance_km: f64,
}

impl Vehicle {
    pub fn new(id: impl Into<CarId>, position: GeoPoint, heading_deg: f64, distance_km: f64) -> Self {
        Self {
            id: id.into(),
            position,
            heading_deg,
            distance_km,
        }
    }
}
