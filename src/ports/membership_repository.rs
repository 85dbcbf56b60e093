//! Membership repository port (write side).
//!
//! Defines the contract for persisting memberships and their billing
//! periods. Implementations own identifier assignment.
//!
//! # Design
//!
//! - **Append-only**: memberships and periods are never updated or removed
//! - **Atomic numbering**: the next identifier is assigned under the same
//!   guard that appends the record, so concurrent creates never collide
//!
//! # Example
//!
//! ```ignore
//! async fn store(
//!     repo: &dyn MembershipRepository,
//!     built: NewMembership,
//! ) -> Result<Membership, DomainError> {
//!     let membership = repo.append(built).await?;
//!     let periods = membership.plan_periods()?;
//!     repo.append_periods(&periods).await?;
//!     Ok(membership)
//! }
//! ```

use crate::domain::foundation::DomainError;
use crate::domain::membership::{Membership, MembershipPeriod, NewMembership};
use async_trait::async_trait;

/// Repository port for membership persistence.
#[async_trait]
pub trait MembershipRepository: Send + Sync {
    /// Appends a built membership and returns it with its assigned id.
    ///
    /// The id is one more than the number of memberships already stored.
    ///
    /// # Errors
    ///
    /// - `StoreUnavailable` if the backing store cannot be written
    async fn append(&self, membership: NewMembership) -> Result<Membership, DomainError>;

    /// Appends the billing periods of a stored membership.
    ///
    /// Periods are stored so that listings return them alongside their
    /// membership. A plain builder would hand them back to the caller
    /// without persisting them; this port keeps them instead.
    ///
    /// Called after [`append`](Self::append) as a separate write. If it
    /// fails, the membership stays stored and is listed with no periods.
    ///
    /// # Errors
    ///
    /// - `StoreUnavailable` if the backing store cannot be written
    async fn append_periods(&self, periods: &[MembershipPeriod]) -> Result<(), DomainError>;
}
