//! ListMembershipsHandler - Query handler for listing memberships.

use std::sync::Arc;

use crate::domain::membership::MembershipError;
use crate::ports::{MembershipReader, MembershipWithPeriods};

/// Query for every membership and its periods.
#[derive(Debug, Clone, Default)]
pub struct ListMembershipsQuery;

/// Result of the membership listing, in insertion order.
pub type ListMembershipsResult = Vec<MembershipWithPeriods>;

/// Handler for listing memberships.
pub struct ListMembershipsHandler {
    reader: Arc<dyn MembershipReader>,
}

impl ListMembershipsHandler {
    pub fn new(reader: Arc<dyn MembershipReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        _query: ListMembershipsQuery,
    ) -> Result<ListMembershipsResult, MembershipError> {
        Ok(self.reader.list_with_periods().await?)
    }
}
