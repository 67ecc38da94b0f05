//! `ride-net` — where the coordination core meets the network.
//!
//! The session engine is pure; this crate supplies the impure half:
//!
//! - [`ApiClient`] — `reqwest` clients for the fleet, routing, and chat
//!   collaborators (JSON over HTTP, request/response only),
//! - [`Runtime`] — the single-consumer tokio event loop that executes the
//!   engine's [`Effect`][ride_session::Effect]s and feeds collaborator
//!   responses back in as [`Event`][ride_session::Event]s,
//! - [`NetConfig`] — base URL, timeouts, poll cadence.
//!
//! Network calls are the only suspension points: each one runs in a spawned
//! task and re-enters the loop as an event carrying the token it was issued
//! with, so the engine's stale-discard rule sees every response — even one
//! arriving long after it was superseded.

pub mod client;
pub mod config;
pub mod error;
pub mod runtime;
pub mod wire;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use client::ApiClient;
pub use config::NetConfig;
pub use error::{NetError, NetResult};
pub use runtime::{Runtime, RuntimeHandle};
