//! Events — the external stimuli the session engine reacts to.

use ride_core::{CarId, GeoPoint, RideError, RoutePath, SeqToken, Vehicle};

use crate::RouteSlot;

/// One external stimulus, handled to completion before the next.
///
/// Events arrive from four independently timed sources: the location
/// tracker, user gestures, the poll timer, and network responses.  The
/// engine is the single consumer; there is no parallel mutation of
/// session state.
#[derive(Clone, Debug)]
pub enum Event {
    /// A successful location fix.  Fixes arrive in order by construction.
    LocationFix(GeoPoint),
    /// The tracker failed; the last known fix (if any) stays untouched.
    LocationFailed(RideError),
    /// Tracking stopped — any fix arriving after this is ignored.
    StopTracking,

    /// A raw map click; meaning depends on the current selection mode.
    MapClick(GeoPoint),
    /// User pressed the pickup-select toggle.
    BeginPickupSelect,
    /// User pressed the dropoff-select toggle.
    BeginDropoffSelect,
    /// User abandoned selection without clicking.
    CancelSelect,
    /// User removed the dropoff point.
    ClearDropoff,

    /// User tapped a vehicle in the list.  Tapping the selected vehicle
    /// again deselects it.
    VehicleTapped(CarId),

    /// The fixed-cadence poll timer fired.
    PollTick,
    /// A roster poll came back.  `token` was captured when the matching
    /// [`Effect::QueryFleet`][crate::Effect::QueryFleet] was issued.
    RosterResponse {
        token: SeqToken,
        result: Result<Vec<Vehicle>, RideError>,
    },
    /// A route resolution came back for the given slot.
    RouteResponse {
        slot: RouteSlot,
        token: SeqToken,
        result: Result<RoutePath, RideError>,
    },

    /// User submitted a free-text command.
    ChatCommand(String),
    /// The chat interpreter answered (or failed).
    ChatResponse {
        result: Result<ChatOutcome, RideError>,
    },
}

/// A successful chat interpretation.
///
/// A non-empty `vehicles` set supersedes the roster wholesale; `highlight`
/// (which may be absent) becomes the new selection.  The textual `reply`
/// is display-only and never touches session state.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatOutcome {
    pub reply: String,
    pub vehicles: Vec<Vehicle>,
    pub highlight: Option<CarId>,
}
