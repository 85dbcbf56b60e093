//! CreateMembershipHandler - Command handler for creating memberships.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::membership::{
    validate_request, Membership, MembershipError, MembershipPeriod, MembershipRequest,
    NewMembership,
};
use crate::ports::MembershipRepository;

/// Command to create a membership from a caller's request.
#[derive(Debug, Clone)]
pub struct CreateMembershipCommand {
    pub request: MembershipRequest,
}

/// Result of successful membership creation.
#[derive(Debug, Clone)]
pub struct CreateMembershipResult {
    pub membership: Membership,
    pub periods: Vec<MembershipPeriod>,
}

/// Handler for creating memberships.
///
/// Every membership created here is owned by the configured user.
pub struct CreateMembershipHandler {
    repository: Arc<dyn MembershipRepository>,
    user: UserId,
}

impl CreateMembershipHandler {
    pub fn new(repository: Arc<dyn MembershipRepository>, user: UserId) -> Self {
        Self { repository, user }
    }

    pub async fn handle(
        &self,
        cmd: CreateMembershipCommand,
    ) -> Result<CreateMembershipResult, MembershipError> {
        self.handle_at(cmd, Timestamp::now()).await
    }

    /// Creates the membership as if the current time were `now`.
    pub async fn handle_at(
        &self,
        cmd: CreateMembershipCommand,
        now: Timestamp,
    ) -> Result<CreateMembershipResult, MembershipError> {
        // 1. Validate request
        let terms = validate_request(&cmd.request).map_err(|reason| {
            info!(reason = reason.as_str(), "Membership request rejected");
            MembershipError::rejected(reason)
        })?;

        // 2. Build membership and its validity window
        let built = NewMembership::build(terms, self.user, now)?;

        // 3. Persist membership, which assigns its id
        let membership = self.repository.append(built).await?;
        debug!(
            membership_id = %membership.id,
            valid_from = %membership.valid_from.to_iso_string(),
            valid_until = %membership.valid_until.to_iso_string(),
            billing_interval = membership.billing_interval.as_str(),
            billing_periods = membership.billing_periods,
            state = membership.state.as_str(),
            "Membership window computed"
        );

        // 4. Plan and persist billing periods
        let periods = membership.plan_periods()?;
        self.repository.append_periods(&periods).await?;

        Ok(CreateMembershipResult {
            membership,
            periods,
        })
    }
}
