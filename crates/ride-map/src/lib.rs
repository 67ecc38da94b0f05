//! `ride-map` — the marker-diffing sync engine.
//!
//! The interactive map is a retained visual surface: markers persist between
//! renders and must be mutated incrementally, never rebuilt from scratch (a
//! rebuilt vehicle marker loses its rotation animation; a flickering roster
//! reads as a bug).  [`MapSync`] reconciles the surface against each
//! [`SceneSnapshot`][ride_session::SceneSnapshot] with minimal create /
//! update / remove operations, keyed by stable vehicle identity.
//!
//! The surface itself sits behind the [`MapSurface`] trait, so the engine is
//! testable against a recording double and portable across map bindings.

pub mod surface;
pub mod sync;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use surface::{Bounds, MapSurface, PointKind};
pub use sync::MapSync;
