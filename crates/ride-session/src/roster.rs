//! Roster query policy and the displayed vehicle set.
//!
//! # Policy
//!
//! Before a dropoff is chosen the rider should see the whole fleet, so the
//! query is centered at the pickup (falling back to the user location) with
//! a radius wide enough to cover the entire deployment.  Once a dropoff is
//! set only a short list of realistic candidates matters: the query centers
//! at the dropoff and the first five of the distance-sorted response are
//! kept.
//!
//! Polls run on a fixed cadence regardless of the previous poll's outcome.
//! A failed poll is logged and the previously displayed roster is kept —
//! the list must never flicker to empty on a transient network error.
//! Responses are token-checked: network latency varies, and a stale
//! full-fleet response must not overwrite a fresher five-nearest one.

use std::time::Duration;

use ride_core::{CarId, SeqToken, Slot, Vehicle};

/// Display cap once a dropoff is set.
pub const NEARBY_LIMIT: usize = 5;
/// Query radius around the dropoff — effectively unbounded for the
/// deployment's fleet distribution.
pub const DROPOFF_RADIUS_KM: f64 = 100.0;
/// Query radius for the full-fleet view.
pub const FLEET_RADIUS_KM: f64 = 1000.0;
/// Fixed poll cadence.
pub const POLL_PERIOD: Duration = Duration::from_secs(5);

/// Which of the two query shapes a poll was issued as.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum RosterQuery {
    /// No dropoff: whole fleet, unfiltered.
    #[default]
    FullFleet,
    /// Dropoff set: first [`NEARBY_LIMIT`] nearest to the dropoff.
    Nearest,
}

impl RosterQuery {
    /// The query radius this shape is issued with.
    pub fn radius_km(self) -> f64 {
        match self {
            RosterQuery::FullFleet => FLEET_RADIUS_KM,
            RosterQuery::Nearest => DROPOFF_RADIUS_KM,
        }
    }
}

/// The displayed vehicle set plus the poll request slot.
#[derive(Default)]
pub struct RosterState {
    slot: Slot,
    /// Shape of the most recently issued poll — consulted when its
    /// response is accepted, so truncation follows the query that was
    /// actually made, not whatever the session looks like on arrival.
    issued_query: RosterQuery,
    vehicles: Vec<Vehicle>,
}

impl RosterState {
    /// Tag a new poll.  Any response to an earlier poll becomes stale.
    pub fn issue(&mut self, query: RosterQuery) -> SeqToken {
        self.issued_query = query;
        self.slot.issue()
    }

    /// Apply a poll response.  Returns `false` (roster untouched) if the
    /// token has been superseded.
    pub fn accept(&mut self, token: SeqToken, mut vehicles: Vec<Vehicle>) -> bool {
        if !self.slot.is_current(token) {
            log::debug!("discarding stale roster response {token}");
            return false;
        }
        if self.issued_query == RosterQuery::Nearest {
            vehicles.truncate(NEARBY_LIMIT);
        }
        self.vehicles = vehicles;
        true
    }

    /// Replace the roster wholesale from a chat result, bypassing the poll
    /// pipeline.  Invalidates the slot so an in-flight poll response cannot
    /// immediately clobber the superseding set.
    pub fn supersede(&mut self, vehicles: Vec<Vehicle>) {
        self.slot.invalidate();
        self.vehicles = vehicles;
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn contains(&self, id: &CarId) -> bool {
        self.vehicles.iter().any(|v| &v.id == id)
    }
}
