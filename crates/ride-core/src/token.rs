//! `SeqToken` and `Slot` — the stale-response discard primitive.
//!
//! # Why this exists
//!
//! Pickup and dropoff points can change faster than a network round-trip
//! completes, so responses are not guaranteed to arrive in request order.
//! There is no cancellation channel: a superseded request's response may
//! still arrive arbitrarily late.  Correctness therefore rests entirely on
//! being able to recognise such a response and drop it unapplied.
//!
//! Each logical request channel (ride route, vehicle route, roster poll)
//! owns one [`Slot`].  Issuing a request bumps the slot's counter and tags
//! the request with the resulting [`SeqToken`]; when a response comes back,
//! it is applied only if its token still equals the highest issued one.
//! A slow earlier response can never overwrite a faster later one.

use std::fmt;

/// A monotonically increasing request marker.
///
/// Tokens are only meaningful relative to the [`Slot`] that issued them;
/// comparing tokens from different slots is a bug.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeqToken(pub u64);

impl fmt::Display for SeqToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Per-channel bookkeeping: the highest token issued so far.
///
/// `Slot` is deliberately tiny (one `u64`) and holds no record of what the
/// request *was* — callers capture request parameters in the effect they
/// emit.  The slot only answers one question: "is this response still the
/// one we are waiting for?"
#[derive(Clone, Debug, Default)]
pub struct Slot {
    issued: SeqToken,
}

impl Slot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next token.  The returned token is now the only one this
    /// slot will accept.
    #[inline]
    pub fn issue(&mut self) -> SeqToken {
        self.issued = SeqToken(self.issued.0 + 1);
        self.issued
    }

    /// `true` if `token` is the most recently issued token.
    #[inline]
    pub fn is_current(&self, token: SeqToken) -> bool {
        token == self.issued && token.0 != 0
    }

    /// Invalidate every in-flight request without issuing a new one.
    ///
    /// Used when another channel takes over (e.g. a chat result replaces
    /// the roster): any response already on the wire becomes stale.
    #[inline]
    pub fn invalidate(&mut self) {
        self.issued = SeqToken(self.issued.0 + 1);
    }

    /// The most recently issued token, or `SeqToken(0)` if none yet.
    #[inline]
    pub fn current(&self) -> SeqToken {
        self.issued
    }
}
