//! Coordination-core error taxonomy.
//!
//! Every variant here is a *boundary* error: it is caught where the failing
//! component meets the session engine and converted into either a transient
//! user-visible notice or a silent retry-on-next-cycle.  None of them may
//! cross the engine as a panic or leave the session partially mutated.
//!
//! Stale (superseded) responses are deliberately **not** represented here:
//! they are not errors, they are silently dropped.

use thiserror::Error;

/// The failure categories of the coordination core.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RideError {
    /// The platform reports no location capability at all.
    #[error("location is not available on this device")]
    LocationUnavailable,

    /// The user denied the location permission.
    #[error("location permission denied")]
    LocationDenied,

    /// A location fix did not arrive in time.
    #[error("timed out waiting for a location fix")]
    LocationTimeout,

    /// The routing collaborator was unreachable or found no path.
    #[error("route computation failed: {0}")]
    RouteComputationFailed(String),

    /// A roster poll failed; the previously displayed roster is kept.
    #[error("vehicle roster fetch failed: {0}")]
    RosterFetchFailed(String),

    /// The chat interpreter was unreachable or rejected the command.
    #[error("chat command failed: {0}")]
    ChatDispatchFailed(String),
}

/// Shorthand result type for all `ride-*` crates.
pub type RideResult<T> = Result<T, RideError>;
