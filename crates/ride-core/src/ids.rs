//! Vehicle identity.
//!
//! Vehicle ids are issued by the fleet collaborator as opaque strings and are
//! the diffing key for everything downstream: roster reconciliation, marker
//! identity, and selection.  Wrapping them in a newtype keeps them from being
//! confused with free text (chat messages, notices) at call sites.

use std::fmt;

/// The stable, collaborator-issued identity of one vehicle.
///
/// Stable across polls: the same physical vehicle keeps the same `CarId`
/// for as long as it exists, which is what makes in-place marker updates
/// (rather than recreation) possible.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarId(pub String);

impl CarId {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for CarId {
    fn from(s: String) -> Self {
        CarId(s)
    }
}

impl From<&str> for CarId {
    fn from(s: &str) -> Self {
        CarId(s.to_owned())
    }
}

impl fmt::Display for CarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
