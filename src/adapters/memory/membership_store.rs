//! In-memory membership store.
//!
//! Implements both [`MembershipRepository`] and [`MembershipReader`] over
//! two vectors guarded by a single mutex. Nothing is persisted across
//! restarts.
//!
//! # Usage
//!
//! ```ignore
//! let store = Arc::new(InMemoryMembershipStore::seeded(UserId::new(2000)?)?);
//! let create = CreateMembershipHandler::new(store.clone(), user);
//! let list = ListMembershipsHandler::new(store);
//! ```

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::domain::foundation::{
    DomainError, ErrorCode, ExternalId, MembershipId, PeriodId, Timestamp, UserId,
};
use crate::domain::membership::{
    BillingInterval, Membership, MembershipPeriod, MembershipState, NewMembership, PeriodState,
};
use crate::ports::{MembershipReader, MembershipRepository, MembershipWithPeriods};

const SEED_MEMBERSHIPS: &str = include_str!("seed/memberships.json");
const SEED_PERIODS: &str = include_str!("seed/membership-periods.json");

#[derive(Debug, Default)]
struct StoreState {
    memberships: Vec<Membership>,
    periods: Vec<MembershipPeriod>,
}

/// Append-only membership store held in process memory.
#[derive(Debug, Default)]
pub struct InMemoryMembershipStore {
    state: Mutex<StoreState>,
}

impl InMemoryMembershipStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the given records.
    pub fn with_records(memberships: Vec<Membership>, periods: Vec<MembershipPeriod>) -> Self {
        Self {
            state: Mutex::new(StoreState {
                memberships,
                periods,
            }),
        }
    }

    /// Creates a store loaded with the bundled seed data.
    ///
    /// Seed memberships without a `userId` are assigned `default_user`.
    ///
    /// # Errors
    ///
    /// Returns `SeedDataInvalid` if the bundled JSON cannot be decoded.
    pub fn seeded(default_user: UserId) -> Result<Self, DomainError> {
        Self::from_seed_json(SEED_MEMBERSHIPS, SEED_PERIODS, default_user)
    }

    /// Creates a store from seed JSON documents.
    ///
    /// # Errors
    ///
    /// Returns `SeedDataInvalid` if either document cannot be decoded or
    /// holds a user id of 0.
    pub fn from_seed_json(
        memberships_json: &str,
        periods_json: &str,
        default_user: UserId,
    ) -> Result<Self, DomainError> {
        let seed_memberships: Vec<SeedMembership> = serde_json::from_str(memberships_json)
            .map_err(|e| seed_error("memberships", e.to_string()))?;
        let seed_periods: Vec<SeedPeriod> = serde_json::from_str(periods_json)
            .map_err(|e| seed_error("membership periods", e.to_string()))?;

        let memberships = seed_memberships
            .into_iter()
            .map(|seed| seed.into_membership(default_user))
            .collect::<Result<Vec<_>, _>>()?;
        let periods: Vec<MembershipPeriod> =
            seed_periods.into_iter().map(SeedPeriod::into_period).collect();

        debug!(
            memberships = memberships.len(),
            periods = periods.len(),
            "Loaded membership seed data"
        );

        Ok(Self::with_records(memberships, periods))
    }

    /// Number of stored memberships.
    pub fn membership_count(&self) -> Result<usize, DomainError> {
        Ok(self.lock()?.memberships.len())
    }

    /// Number of stored periods across all memberships.
    pub fn period_count(&self) -> Result<usize, DomainError> {
        Ok(self.lock()?.periods.len())
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreState>, DomainError> {
        self.state.lock().map_err(|_| {
            DomainError::new(ErrorCode::StoreUnavailable, "Membership store lock poisoned")
        })
    }
}

#[async_trait]
impl MembershipRepository for InMemoryMembershipStore {
    async fn append(&self, membership: NewMembership) -> Result<Membership, DomainError> {
        let mut state = self.lock()?;
        let next = u32::try_from(state.memberships.len() + 1).map_err(|_| {
            DomainError::new(ErrorCode::StoreUnavailable, "Membership identifiers exhausted")
        })?;
        let stored = membership.with_id(MembershipId::new(next));
        state.memberships.push(stored.clone());
        Ok(stored)
    }

    async fn append_periods(&self, periods: &[MembershipPeriod]) -> Result<(), DomainError> {
        self.lock()?.periods.extend_from_slice(periods);
        Ok(())
    }
}

#[async_trait]
impl MembershipReader for InMemoryMembershipStore {
    async fn list_with_periods(&self) -> Result<Vec<MembershipWithPeriods>, DomainError> {
        let state = self.lock()?;
        Ok(state
            .memberships
            .iter()
            .map(|membership| MembershipWithPeriods::collect(membership.clone(), &state.periods))
            .collect())
    }
}

fn seed_error(what: &str, reason: String) -> DomainError {
    DomainError::new(
        ErrorCode::SeedDataInvalid,
        format!("Invalid {} seed data: {}", what, reason),
    )
}

// ════════════════════════════════════════════════════════════════════════════
// Seed Records
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedMembership {
    id: u32,
    uuid: ExternalId,
    name: String,
    #[serde(default, alias = "user")]
    user_id: Option<u32>,
    recurring_price: f64,
    valid_from: Timestamp,
    valid_until: Timestamp,
    state: MembershipState,
    payment_method: String,
    billing_interval: BillingInterval,
    billing_periods: u32,
}

impl SeedMembership {
    fn into_membership(self, default_user: UserId) -> Result<Membership, DomainError> {
        let user = match self.user_id {
            Some(id) => UserId::new(id).map_err(|e| seed_error("memberships", e.to_string()))?,
            None => default_user,
        };
        Ok(Membership {
            id: MembershipId::new(self.id),
            uuid: self.uuid,
            name: self.name,
            user,
            recurring_price: self.recurring_price,
            valid_from: self.valid_from,
            valid_until: self.valid_until,
            state: self.state,
            payment_method: self.payment_method,
            billing_interval: self.billing_interval,
            billing_periods: self.billing_periods,
        })
    }
}

#[derive(Debug, Deserialize)]
struct SeedPeriod {
    id: u32,
    uuid: ExternalId,
    membership: u32,
    start: Timestamp,
    end: Timestamp,
    state: PeriodState,
}

impl SeedPeriod {
    fn into_period(self) -> MembershipPeriod {
        MembershipPeriod {
            id: PeriodId::new(self.id),
            uuid: self.uuid,
            membership: MembershipId::new(self.membership),
            start: self.start,
            end: self.end,
            state: self.state,
        }
    }
}
