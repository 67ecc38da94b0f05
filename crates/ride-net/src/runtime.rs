//! The event loop: single consumer, cooperative, no shared mutation.
//!
//! All work is triggered by events — location fixes, user gestures, the
//! poll timer, network responses — and each event runs to completion
//! before the next is taken.  Effects that need the network are spawned as
//! tasks that re-enter the loop through the same channel; nothing outside
//! [`Runtime::dispatch`] ever touches the engine or the map sync state.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Notify, mpsc};
use tokio::time::{Instant, Interval, interval_at};

use ride_core::RideError;
use ride_map::{MapSurface, MapSync};
use ride_session::{Effect, Event, RouteSlot, SessionEngine};

use crate::ApiClient;

/// A cloneable handle for feeding events into a running [`Runtime`].
///
/// Location fixes and user gestures enter through here, on equal footing
/// with the loop's own response events.
#[derive(Clone)]
pub struct RuntimeHandle {
    events: mpsc::UnboundedSender<Event>,
    shutdown: Arc<Notify>,
}

impl RuntimeHandle {
    /// Queue an event.  Returns `false` if the runtime has already stopped.
    pub fn send(&self, event: Event) -> bool {
        self.events.send(event).is_ok()
    }

    /// Ask the runtime to finish its current event and stop.
    pub fn shutdown(&self) {
        self.shutdown.notify_one();
    }
}

/// Owns the engine, the map sync state, and the poll timer.
pub struct Runtime<S: MapSurface> {
    engine: SessionEngine,
    sync: MapSync<S>,
    client: ApiClient,
    events_tx: mpsc::UnboundedSender<Event>,
    events_rx: mpsc::UnboundedReceiver<Event>,
    poll: Interval,
    poll_period: Duration,
    shutdown: Arc<Notify>,
}

impl<S: MapSurface> Runtime<S> {
    pub fn new(client: ApiClient, surface: S, poll_period: Duration) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            engine: SessionEngine::new(),
            sync: MapSync::new(surface),
            client,
            events_tx,
            events_rx,
            // Engine-driven polls are immediate; the timer only continues
            // the cadence, so its first tick is one full period out.
            poll: interval_at(Instant::now() + poll_period, poll_period),
            poll_period,
            shutdown: Arc::new(Notify::new()),
        }
    }

    pub fn handle(&self) -> RuntimeHandle {
        RuntimeHandle {
            events: self.events_tx.clone(),
            shutdown: Arc::clone(&self.shutdown),
        }
    }

    /// Read-only view of the engine, for hosts that render peripheral UI
    /// (vehicle lists, session details) from the same state.
    pub fn engine(&self) -> &SessionEngine {
        &self.engine
    }

    /// Run until [`RuntimeHandle::shutdown`] is called.
    pub async fn run(&mut self) {
        loop {
            tokio::select! {
                _ = self.shutdown.notified() => break,
                _ = self.poll.tick() => self.dispatch(Event::PollTick),
                event = self.events_rx.recv() => match event {
                    Some(event) => self.dispatch(event),
                    None => break,
                },
            }
        }
    }

    /// Handle one event: engine transition, effect execution, re-render.
    ///
    /// Rendering after *every* event is safe because the sync engine is
    /// idempotent on equal snapshots.
    pub fn dispatch(&mut self, event: Event) {
        for effect in self.engine.handle(event) {
            self.execute(effect);
        }
        self.sync.apply(&self.engine.snapshot());
    }

    fn execute(&mut self, effect: Effect) {
        match effect {
            Effect::QueryFleet {
                token,
                center,
                radius_km,
            } => {
                let client = self.client.clone();
                let tx = self.events_tx.clone();
                tokio::spawn(async move {
                    let result = client
                        .nearby_vehicles(center, radius_km)
                        .await
                        .map_err(|e| RideError::RosterFetchFailed(e.to_string()));
                    let _ = tx.send(Event::RosterResponse { token, result });
                });
            }

            Effect::ResolveRoute {
                token,
                origin,
                destination,
            } => {
                let client = self.client.clone();
                let tx = self.events_tx.clone();
                tokio::spawn(async move {
                    let result = client
                        .route(origin, destination)
                        .await
                        .map_err(|e| RideError::RouteComputationFailed(e.to_string()));
                    let _ = tx.send(Event::RouteResponse {
                        slot: RouteSlot::Ride,
                        token,
                        result,
                    });
                });
            }

            Effect::ResolveVehicleRoute { token, car, rider } => {
                let client = self.client.clone();
                let tx = self.events_tx.clone();
                tokio::spawn(async move {
                    let result = client
                        .car_to_user_route(&car, rider)
                        .await
                        .map_err(|e| RideError::RouteComputationFailed(e.to_string()));
                    let _ = tx.send(Event::RouteResponse {
                        slot: RouteSlot::Vehicle,
                        token,
                        result,
                    });
                });
            }

            Effect::SendChat { message, origin } => {
                let client = self.client.clone();
                let tx = self.events_tx.clone();
                tokio::spawn(async move {
                    let result = client
                        .chat(&message, origin)
                        .await
                        .map_err(|e| RideError::ChatDispatchFailed(e.to_string()));
                    let _ = tx.send(Event::ChatResponse { result });
                });
            }

            Effect::ReschedulePoll => {
                // One timer, restarted in place — never double-scheduled.
                self.poll = interval_at(Instant::now() + self.poll_period, self.poll_period);
            }
        }
    }
}
