//! `SessionEngine` — the orchestrator.
//!
//! The engine owns the [`Session`] and is the only code that mutates it.
//! Each call to [`SessionEngine::handle`] runs one event to completion and
//! returns the effects the driver must execute; a handler either fully
//! applies a result or fully discards it, so the session is never observed
//! in a partially mutated state.
//!
//! # Route invocation policy
//!
//! | Trigger                                  | Action                                   |
//! |------------------------------------------|------------------------------------------|
//! | pickup set, dropoff defined              | resolve(new pickup, dropoff)             |
//! | dropoff set, pickup defined              | resolve(pickup, new dropoff)             |
//! | pickup set, dropoff undefined            | clear route                              |
//! | vehicle selected                         | resolve(pickup ?? user location, vehicle)|
//! | vehicle deselected, both endpoints set   | re-resolve(pickup, dropoff)              |
//! | vehicle deselected otherwise             | clear route                              |
//!
//! Every resolution is tagged with a token from its slot, and issuing on
//! one route slot invalidates the other: when the user deselects a vehicle
//! and the ride route is re-requested, a still-in-flight vehicle-route
//! response has already been staled.

use ride_core::{CarId, GeoPoint, RideError, RoutePath, SeqToken};

use crate::event::ChatOutcome;
use crate::roster::{RosterQuery, RosterState};
use crate::{ClickAction, Effect, Event, RouteSlot, SceneSnapshot, SelectionMode, Session};

// ── Poll key ──────────────────────────────────────────────────────────────────

/// What the poll schedule is keyed on.  A change of center or shape
/// restarts the cadence (one immediate query + one reschedule).
#[derive(Copy, Clone, PartialEq, Debug)]
struct PollKey {
    center: GeoPoint,
    query: RosterQuery,
}

// ── Engine ────────────────────────────────────────────────────────────────────

/// The session orchestrator: every external stimulus enters through
/// [`handle`][Self::handle], every outward request leaves as an [`Effect`].
#[derive(Default)]
pub struct SessionEngine {
    session: Session,
    roster: RosterState,
    ride_slot: ride_core::Slot,
    vehicle_slot: ride_core::Slot,
    /// Poll key of the currently scheduled cadence, `None` until polling
    /// has started (requires a known user location or pickup).
    poll_key: Option<PollKey>,
    /// Cleared by `StopTracking`; fixes arriving afterwards are ignored.
    tracking: bool,
}

impl SessionEngine {
    pub fn new() -> Self {
        Self {
            tracking: true,
            ..Self::default()
        }
    }

    /// Read-only view of the session record.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The currently displayed roster, in collaborator sort order.
    pub fn roster(&self) -> &[ride_core::Vehicle] {
        self.roster.vehicles()
    }

    /// Immutable capture of everything the map sync engine renders from.
    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot {
            user_location: self.session.user_location,
            pickup: self.session.pickup,
            dropoff: self.session.dropoff,
            vehicles: self.roster.vehicles().to_vec(),
            selected: self.session.selected.clone(),
            route: self.session.route.clone(),
        }
    }

    // ── Event dispatch ────────────────────────────────────────────────────

    /// Run one event to completion.
    pub fn handle(&mut self, event: Event) -> Vec<Effect> {
        let mut effects = Vec::new();
        match event {
            Event::LocationFix(point) => self.on_location_fix(point, &mut effects),
            Event::LocationFailed(err) => self.on_location_failed(err),
            Event::StopTracking => self.tracking = false,

            Event::MapClick(point) => self.on_map_click(point, &mut effects),
            Event::BeginPickupSelect => self.session.mode = SelectionMode::SelectingPickup,
            Event::BeginDropoffSelect => self.session.mode = SelectionMode::SelectingDropoff,
            Event::CancelSelect => self.session.mode = SelectionMode::Idle,
            Event::ClearDropoff => self.on_clear_dropoff(&mut effects),

            Event::VehicleTapped(id) => self.on_vehicle_tapped(id, &mut effects),

            Event::PollTick => self.on_poll_tick(&mut effects),
            Event::RosterResponse { token, result } => {
                self.on_roster_response(token, result, &mut effects)
            }
            Event::RouteResponse {
                slot,
                token,
                result,
            } => self.on_route_response(slot, token, result),

            Event::ChatCommand(message) => self.on_chat_command(message, &mut effects),
            Event::ChatResponse { result } => self.on_chat_response(result),
        }
        effects
    }

    // ── Location ──────────────────────────────────────────────────────────

    fn on_location_fix(&mut self, point: GeoPoint, effects: &mut Vec<Effect>) {
        if !self.tracking {
            log::debug!("ignoring location fix after tracking stopped");
            return;
        }
        self.session.user_location = Some(point);
        // One-time seeding: once the pickup has a value — from this seed or
        // from the user — later fixes must not overwrite it.
        if self.session.pickup.is_none() {
            self.session.pickup = Some(point);
        }
        self.session.notice = None;
        self.refresh_polling(effects);
    }

    fn on_location_failed(&mut self, err: RideError) {
        // Last known fix stays untouched.
        self.session.notice = Some(err.to_string());
    }

    // ── Selection & clicks ────────────────────────────────────────────────

    fn on_map_click(&mut self, point: GeoPoint, effects: &mut Vec<Effect>) {
        let (mode, action) = self.session.mode.resolve_click(point);
        self.session.mode = mode;
        match action {
            ClickAction::Ignored => {}
            ClickAction::SetPickup(p) => {
                self.session.pickup = Some(p);
                match self.session.dropoff {
                    Some(d) => effects.push(self.resolve_ride(p, d)),
                    None => self.clear_route(),
                }
                self.refresh_polling(effects);
            }
            ClickAction::SetDropoff(d) => {
                self.session.dropoff = Some(d);
                if let Some(p) = self.session.pickup {
                    effects.push(self.resolve_ride(p, d));
                }
                self.refresh_polling(effects);
            }
        }
    }

    fn on_clear_dropoff(&mut self, effects: &mut Vec<Effect>) {
        if self.session.dropoff.take().is_none() {
            return;
        }
        // The ride route's endpoints are no longer simultaneously defined.
        // A displayed vehicle route survives: its endpoints still exist.
        if self.session.selected.is_none() {
            self.clear_route();
        }
        self.refresh_polling(effects);
    }

    // ── Vehicle selection ─────────────────────────────────────────────────

    fn on_vehicle_tapped(&mut self, id: CarId, effects: &mut Vec<Effect>) {
        if self.session.selected.as_ref() == Some(&id) {
            self.session.selected = None;
            self.restore_ride_route(effects);
            return;
        }
        self.session.selected = Some(id.clone());
        // Rider's reference point; without one the selection is recorded
        // but no route can be requested.
        if let Some(rider) = self.session.pickup.or(self.session.user_location) {
            effects.push(self.resolve_vehicle(id, rider));
        }
    }

    /// After a deselection (explicit or via roster exclusion): bring back
    /// the ride route if both endpoints exist, otherwise clear.
    fn restore_ride_route(&mut self, effects: &mut Vec<Effect>) {
        match (self.session.pickup, self.session.dropoff) {
            (Some(p), Some(d)) => effects.push(self.resolve_ride(p, d)),
            _ => self.clear_route(),
        }
    }

    // ── Roster polling ────────────────────────────────────────────────────

    /// The current poll key, or `None` while no center is known yet.
    fn current_poll_key(&self) -> Option<PollKey> {
        if let Some(dropoff) = self.session.dropoff {
            return Some(PollKey {
                center: dropoff,
                query: RosterQuery::Nearest,
            });
        }
        let center = self.session.pickup.or(self.session.user_location)?;
        Some(PollKey {
            center,
            query: RosterQuery::FullFleet,
        })
    }

    /// Start or restart polling when the key changed: one immediate query
    /// plus a cadence restart.  No-op while the key is stable, so the
    /// driver's timer is never double-scheduled.
    fn refresh_polling(&mut self, effects: &mut Vec<Effect>) {
        let Some(key) = self.current_poll_key() else { return };
        if self.poll_key == Some(key) {
            return;
        }
        self.poll_key = Some(key);
        effects.push(self.query_fleet(key));
        effects.push(Effect::ReschedulePoll);
    }

    fn on_poll_tick(&mut self, effects: &mut Vec<Effect>) {
        // A tick can race a key change; always poll the current key.
        let Some(key) = self.current_poll_key() else { return };
        effects.push(self.query_fleet(key));
    }

    fn query_fleet(&mut self, key: PollKey) -> Effect {
        Effect::QueryFleet {
            token: self.roster.issue(key.query),
            center: key.center,
            radius_km: key.query.radius_km(),
        }
    }

    fn on_roster_response(
        &mut self,
        token: SeqToken,
        result: Result<Vec<ride_core::Vehicle>, RideError>,
        effects: &mut Vec<Effect>,
    ) {
        let vehicles = match result {
            Ok(vehicles) => vehicles,
            Err(err) => {
                // Transient: keep the previous roster, retry next cycle.
                log::warn!("roster poll failed, keeping previous roster: {err}");
                return;
            }
        };
        if !self.roster.accept(token, vehicles) {
            return;
        }
        // The selection must exist in the roster that is actually shown.
        if let Some(selected) = self.session.selected.clone() {
            if !self.roster.contains(&selected) {
                self.session.selected = None;
                self.restore_ride_route(effects);
            }
        }
    }

    // ── Route resolution ──────────────────────────────────────────────────

    fn resolve_ride(&mut self, origin: GeoPoint, destination: GeoPoint) -> Effect {
        self.vehicle_slot.invalidate();
        Effect::ResolveRoute {
            token: self.ride_slot.issue(),
            origin,
            destination,
        }
    }

    fn resolve_vehicle(&mut self, car: CarId, rider: GeoPoint) -> Effect {
        self.ride_slot.invalidate();
        Effect::ResolveVehicleRoute {
            token: self.vehicle_slot.issue(),
            car,
            rider,
        }
    }

    /// Drop the displayed route and stale every in-flight resolution.
    fn clear_route(&mut self) {
        self.session.route = None;
        self.ride_slot.invalidate();
        self.vehicle_slot.invalidate();
    }

    fn on_route_response(
        &mut self,
        slot: RouteSlot,
        token: SeqToken,
        result: Result<RoutePath, RideError>,
    ) {
        let current = match slot {
            RouteSlot::Ride => self.ride_slot.is_current(token),
            RouteSlot::Vehicle => self.vehicle_slot.is_current(token),
        };
        if !current {
            log::debug!("discarding stale {slot:?} route response {token}");
            return;
        }
        match result {
            Ok(route) => self.session.route = Some(route),
            Err(err) => {
                self.session.route = None;
                self.session.notice = Some(err.to_string());
            }
        }
    }

    // ── Chat ──────────────────────────────────────────────────────────────

    fn on_chat_command(&mut self, message: String, effects: &mut Vec<Effect>) {
        let Some(origin) = self.session.user_location else {
            self.session.notice =
                Some("waiting for your location before sending commands".to_owned());
            return;
        };
        effects.push(Effect::SendChat { message, origin });
    }

    fn on_chat_response(&mut self, result: Result<ChatOutcome, RideError>) {
        let outcome = match result {
            Ok(outcome) => outcome,
            Err(err) => {
                // Roster and selection stay exactly as they were.
                self.session.notice = Some(err.to_string());
                return;
            }
        };
        if outcome.vehicles.is_empty() {
            // Reply-only answer; nothing on the map changes.
            return;
        }
        self.roster.supersede(outcome.vehicles);
        self.session.selected = outcome.highlight;
        self.clear_route();
    }
}
