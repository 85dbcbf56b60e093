//! Membership aggregate and its builder.
//!
//! A membership is built in two steps. [`NewMembership::build`] computes
//! the validity window and state from the billing terms and the creation
//! time; the store then assigns the numeric identifier, and
//! [`Membership::plan_periods`] lays out the billing periods.
//!
//! # Design Decisions
//!
//! - **Derived window**: `valid_until` is always computed, never supplied
//! - **Chained periods**: each period ends one interval after its own
//!   start, so with month-end rollover the boundaries drift and the last
//!   period can end after `valid_until`
//! - **Frozen state**: `state` reflects the creation time only

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ExternalId, MembershipId, PeriodId, Timestamp, UserId};

use super::{BillingInterval, MembershipError, MembershipPeriod, MembershipState, MembershipTerms};

/// Membership aggregate - one subscription instance.
///
/// # Invariants
///
/// - `valid_until` is `valid_from` advanced by `billing_periods` intervals
/// - `valid_until > valid_from` for any positive period count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Membership {
    pub id: MembershipId,
    pub uuid: ExternalId,
    pub name: String,
    pub user: UserId,
    pub recurring_price: f64,
    pub valid_from: Timestamp,
    pub valid_until: Timestamp,
    pub state: MembershipState,
    pub payment_method: String,
    pub billing_interval: BillingInterval,
    pub billing_periods: u32,
}

/// A built membership that has not been assigned a store identifier yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMembership {
    pub uuid: ExternalId,
    pub name: String,
    pub user: UserId,
    pub recurring_price: f64,
    pub valid_from: Timestamp,
    pub valid_until: Timestamp,
    pub state: MembershipState,
    pub payment_method: String,
    pub billing_interval: BillingInterval,
    pub billing_periods: u32,
}

impl NewMembership {
    /// Builds a membership from validated terms at time `now`.
    ///
    /// The window starts at the requested `valid_from`, or `now` when
    /// none was given.
    ///
    /// # Errors
    ///
    /// Returns `InvalidValidFrom` if the window end falls outside the
    /// representable date range.
    pub fn build(terms: MembershipTerms, user: UserId, now: Timestamp) -> Result<Self, MembershipError> {
        let valid_from = terms.valid_from.unwrap_or(now);
        let valid_until = terms
            .billing_interval
            .advance(valid_from, terms.billing_periods)
            .ok_or_else(|| {
                MembershipError::invalid_valid_from(format!(
                    "{} {} periods from {} exceed the supported date range",
                    terms.billing_periods,
                    terms.billing_interval,
                    valid_from.to_iso_string()
                ))
            })?;

        Ok(Self {
            uuid: ExternalId::new(),
            name: terms.name,
            user,
            recurring_price: terms.recurring_price,
            valid_from,
            valid_until,
            state: MembershipState::derive(valid_from, valid_until, now),
            payment_method: terms.payment_method,
            billing_interval: terms.billing_interval,
            billing_periods: terms.billing_periods,
        })
    }

    /// Attaches the store-assigned identifier.
    pub fn with_id(self, id: MembershipId) -> Membership {
        Membership {
            id,
            uuid: self.uuid,
            name: self.name,
            user: self.user,
            recurring_price: self.recurring_price,
            valid_from: self.valid_from,
            valid_until: self.valid_until,
            state: self.state,
            payment_method: self.payment_method,
            billing_interval: self.billing_interval,
            billing_periods: self.billing_periods,
        }
    }
}

impl Membership {
    /// Lays out the billing periods starting at `valid_from`.
    ///
    /// Produces exactly `billing_periods` planned periods with ids
    /// `1..=billing_periods`, in chronological order. Each period starts
    /// where the previous one ended and spans one billing interval.
    ///
    /// # Errors
    ///
    /// Returns `InvalidValidFrom` if a boundary falls outside the
    /// representable date range.
    pub fn plan_periods(&self) -> Result<Vec<MembershipPeriod>, MembershipError> {
        let mut periods = Vec::with_capacity(self.billing_periods as usize);
        let mut period_start = self.valid_from;

        for index in 1..=self.billing_periods {
            let period_end = self
                .billing_interval
                .advance(period_start, 1)
                .ok_or_else(|| {
                    MembershipError::invalid_valid_from(format!(
                        "period {} of membership {} exceeds the supported date range",
                        index, self.id
                    ))
                })?;
            periods.push(MembershipPeriod::planned(
                PeriodId::new(index),
                self.id,
                period_start,
                period_end,
            ));
            period_start = period_end;
        }

        Ok(periods)
    }
}
