//! `SelectionMode` — the three-state machine governing map-click meaning.
//!
//! The two selecting states are mutually exclusive and transient: the very
//! next resolved click (or an explicit cancel) returns the mode to `Idle`.
//! The enum is closed and consumed at exactly one dispatch point
//! ([`SelectionMode::resolve_click`]); nothing else in the workspace
//! branches on it ad hoc.

use ride_core::GeoPoint;

/// How the next map click will be interpreted.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum SelectionMode {
    /// Clicks are ignored by the selection machinery.
    #[default]
    Idle,
    /// The next click becomes the pickup point.
    SelectingPickup,
    /// The next click becomes the dropoff point.
    SelectingDropoff,
}

/// What a resolved map click means for the session.
#[derive(Clone, Debug, PartialEq)]
pub enum ClickAction {
    /// Click arrived in `Idle` — a no-op for the selection machinery.
    Ignored,
    SetPickup(GeoPoint),
    SetDropoff(GeoPoint),
}

impl SelectionMode {
    /// `true` in either selecting state.
    #[inline]
    pub fn is_selecting(self) -> bool {
        self != SelectionMode::Idle
    }

    /// Resolve a map click: the successor mode and the action it implies.
    ///
    /// A click in a selecting state always returns the machine to `Idle`,
    /// regardless of what the session does with the resulting action.
    pub fn resolve_click(self, point: GeoPoint) -> (SelectionMode, ClickAction) {
        match self {
            SelectionMode::Idle => (SelectionMode::Idle, ClickAction::Ignored),
            SelectionMode::SelectingPickup => (SelectionMode::Idle, ClickAction::SetPickup(point)),
            SelectionMode::SelectingDropoff => (SelectionMode::Idle, ClickAction::SetDropoff(point)),
        }
    }
}
