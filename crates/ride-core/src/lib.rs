//! `ride-core` — foundational types for the ride-hail map coordination core.
//!
//! This crate is a dependency of every other `ride-*` crate.  It intentionally
//! has no `ride-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`geo`]     | `GeoPoint`, haversine distance                        |
//! | [`ids`]     | `CarId` — the stable vehicle identity                 |
//! | [`token`]   | `SeqToken`, `Slot` — stale-response discard primitive |
//! | [`vehicle`] | `Vehicle` — one roster entry                          |
//! | [`route`]   | `RoutePath` — a resolved route polyline               |
//! | [`error`]   | `RideError`, `RideResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod geo;
pub mod ids;
pub mod route;
pub mod token;
pub mod vehicle;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{RideError, RideResult};
pub use geo::GeoPoint;
pub use ids::CarId;
pub use route::RoutePath;
pub use token::{SeqToken, Slot};
pub use vehicle::Vehicle;
