//! Effects — the requests the engine wants made on its behalf.
//!
//! Effects are the only place network work is initiated.  Every
//! asynchronous effect carries the [`SeqToken`] issued for it; the driver
//! must echo that token back in the corresponding response event so the
//! engine can recognise (and drop) superseded responses.

use ride_core::{CarId, GeoPoint, SeqToken};

/// The two logical route-resolution channels.
///
/// At most one of them is "live" at a time: issuing a request on one slot
/// invalidates the other, so a late response from an abandoned channel can
/// never overwrite the active channel's result.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RouteSlot {
    /// The pickup → dropoff ride route.
    Ride,
    /// The rider → selected-vehicle route.
    Vehicle,
}

/// An action requested by the engine, executed by the driver.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Ask the fleet collaborator for vehicles around `center`.
    ///
    /// The response must come back as
    /// [`Event::RosterResponse`][crate::Event::RosterResponse] with this
    /// `token`.  The collaborator returns vehicles sorted by ascending
    /// distance from `center`; any display-count policy is applied by the
    /// engine when the response is accepted, not by the driver.
    QueryFleet {
        token: SeqToken,
        center: GeoPoint,
        radius_km: f64,
    },

    /// Resolve the ride route `origin` → `destination`
    /// (slot: [`RouteSlot::Ride`]).
    ResolveRoute {
        token: SeqToken,
        origin: GeoPoint,
        destination: GeoPoint,
    },

    /// Resolve the route from the rider's reference point to `car`
    /// (slot: [`RouteSlot::Vehicle`]).
    ResolveVehicleRoute {
        token: SeqToken,
        car: CarId,
        rider: GeoPoint,
    },

    /// Forward a free-text command to the chat interpreter.
    SendChat { message: String, origin: GeoPoint },

    /// The poll query center or mode changed: restart the poll timer from
    /// now.  Restart, never double-schedule — the driver owns exactly one
    /// timer.
    ReschedulePoll,
}
