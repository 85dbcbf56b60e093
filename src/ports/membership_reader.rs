//! Membership reader port (read side).
//!
//! Defines the contract for listing memberships together with the
//! billing periods that belong to them.

use crate::domain::foundation::DomainError;
use crate::domain::membership::{Membership, MembershipPeriod};
use async_trait::async_trait;

/// Reader port for membership queries.
#[async_trait]
pub trait MembershipReader: Send + Sync {
    /// Lists every stored membership in insertion order, each paired with
    /// its periods.
    ///
    /// A membership without stored periods gets an empty list.
    async fn list_with_periods(&self) -> Result<Vec<MembershipWithPeriods>, DomainError>;
}

/// A membership and the periods whose `membership` field references it.
#[derive(Debug, Clone, PartialEq)]
pub struct MembershipWithPeriods {
    pub membership: Membership,
    pub periods: Vec<MembershipPeriod>,
}

impl MembershipWithPeriods {
    /// Pairs a membership with the matching entries of `all_periods`,
    /// keeping their stored order.
    pub fn collect(membership: Membership, all_periods: &[MembershipPeriod]) -> Self {
        let periods = all_periods
            .iter()
            .filter(|period| period.belongs_to(membership.id))
            .cloned()
            .collect();
        Self { membership, periods }
    }
}
