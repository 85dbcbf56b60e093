//! MembershipPeriod - one billing cycle within a membership.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ExternalId, MembershipId, PeriodId, Timestamp};

use super::PeriodState;

/// One billing cycle of a membership.
///
/// # Invariants
///
/// - `id` is the 1-based position within the owning membership
/// - `start < end`
/// - Periods of one membership are contiguous: each `end` is the next `start`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipPeriod {
    pub id: PeriodId,
    pub uuid: ExternalId,
    pub membership: MembershipId,
    pub start: Timestamp,
    pub end: Timestamp,
    pub state: PeriodState,
}

impl MembershipPeriod {
    /// Creates a planned period.
    pub fn planned(
        id: PeriodId,
        membership: MembershipId,
        start: Timestamp,
        end: Timestamp,
    ) -> Self {
        Self {
            id,
            uuid: ExternalId::new(),
            membership,
            start,
            end,
            state: PeriodState::Planned,
        }
    }

    /// Returns true if this period belongs to the given membership.
    pub fn belongs_to(&self, membership: MembershipId) -> bool {
        self.membership == membership
    }
}
