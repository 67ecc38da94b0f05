//! Network-layer error type.
//!
//! `NetError` stays inside this crate's clients; the runtime converts it
//! into the appropriate [`RideError`][ride_core::RideError] category at the
//! boundary (a roster failure is not a chat failure, even when both are the
//! same connection refused underneath).

use thiserror::Error;

/// Errors produced by `ride-net` clients.
#[derive(Debug, Error)]
pub enum NetError {
    /// Transport failure, timeout, non-2xx status, or undecodable body.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type NetResult<T> = Result<T, NetError>;
