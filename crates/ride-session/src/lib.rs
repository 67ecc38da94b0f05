//! `ride-session` — the coordination core's state machine.
//!
//! Everything in this crate is pure: no timers, no sockets, no map handles.
//! The entire session lifecycle is expressed as one transition function,
//!
//! ```text
//! SessionEngine::handle(Event) -> Vec<Effect>
//! ```
//!
//! where [`Event`]s are the external stimuli (location fixes, map clicks,
//! poll ticks, network responses) and [`Effect`]s are the requests the
//! engine wants made on its behalf.  A driver (see `ride-net`) executes
//! effects and feeds the responses back in as events.  This shape makes
//! every ordering property of the core directly unit-testable without a
//! live network or map surface.
//!
//! # What lives here
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`mode`]     | `SelectionMode` — how map clicks are interpreted      |
//! | [`session`]  | `Session`, `SceneSnapshot`                            |
//! | [`event`]    | `Event`, `ChatOutcome`                                |
//! | [`effect`]   | `Effect`, `RouteSlot`                                 |
//! | [`roster`]   | Roster query policy, truncation, stale discard        |
//! | [`engine`]   | `SessionEngine` — the orchestrator                    |

pub mod effect;
pub mod engine;
pub mod event;
pub mod mode;
pub mod roster;
pub mod session;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use effect::{Effect, RouteSlot};
pub use engine::SessionEngine;
pub use event::{ChatOutcome, Event};
pub use mode::{ClickAction, SelectionMode};
pub use roster::{DROPOFF_RADIUS_KM, FLEET_RADIUS_KM, NEARBY_LIMIT, POLL_PERIOD, RosterQuery};
pub use session::{SceneSnapshot, Session};
