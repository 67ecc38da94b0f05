//! Session state and the snapshot handed to the rendering sync engine.

use ride_core::{CarId, GeoPoint, RoutePath, Vehicle};

use crate::SelectionMode;

/// The single mutable session record.
///
/// Owned and mutated exclusively by [`SessionEngine`][crate::SessionEngine];
/// every other component sees session data only through [`SceneSnapshot`]
/// or event/effect payloads.
#[derive(Clone, Debug, Default)]
pub struct Session {
    /// Latest location fix, updated on every fix while tracking is active.
    pub user_location: Option<GeoPoint>,
    /// Ride origin.  Seeded from the first fix if still unset at that
    /// moment (one-time), thereafter changed only by pickup-select clicks.
    pub pickup: Option<GeoPoint>,
    /// Ride destination.  Exists only via dropoff-select clicks.
    pub dropoff: Option<GeoPoint>,
    /// Currently selected vehicle, if any.  Always present in the last
    /// successfully applied roster.
    pub selected: Option<CarId>,
    /// How the next map click is interpreted.
    pub mode: SelectionMode,
    /// Latest applied route, or `None` when no route is displayable.
    pub route: Option<RoutePath>,
    /// Transient, user-visible but non-blocking error notice.
    pub notice: Option<String>,
}

/// An immutable capture of session-visible state for one reconciliation
/// pass of the map sync engine.
///
/// `PartialEq` is what makes idempotent re-rendering possible: the sync
/// engine compares against the snapshot it last *applied* and skips
/// everything that is unchanged.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct SceneSnapshot {
    pub user_location: Option<GeoPoint>,
    pub pickup: Option<GeoPoint>,
    pub dropoff: Option<GeoPoint>,
    pub vehicles: Vec<Vehicle>,
    pub selected: Option<CarId>,
    pub route: Option<RoutePath>,
}
