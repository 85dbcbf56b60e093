//! Lifecycle states of memberships and their periods.
//!
//! A membership's state is derived once, at creation, from its validity
//! window and the creation time. It is not re-evaluated afterwards, so a
//! stored `Active` membership may be past its window by the time it is read.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

/// Membership lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MembershipState {
    /// Validity window starts in the future.
    Pending,

    /// Validity window contains the creation time.
    Active,

    /// Validity window ended before the creation time.
    Expired,
}

impl MembershipState {
    /// Derives the state of a window `[valid_from, valid_until]` at `now`.
    ///
    /// Rules apply in order and the last match wins: `Active` by default,
    /// `Pending` if the window starts after `now`, `Expired` if it ends
    /// before `now`.
    pub fn derive(valid_from: Timestamp, valid_until: Timestamp, now: Timestamp) -> Self {
        let mut state = MembershipState::Active;
        if valid_from.is_after(&now) {
            state = MembershipState::Pending;
        }
        if valid_until.is_before(&now) {
            state = MembershipState::Expired;
        }
        state
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MembershipState::Pending => "pending",
            MembershipState::Active => "active",
            MembershipState::Expired => "expired",
        }
    }
}

/// Billing period state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodState {
    /// Every period starts out planned.
    Planned,
}

impl PeriodState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PeriodState::Planned => "planned",
        }
    }
}
