//! HTTP handlers for membership endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::{error, info};

use crate::application::handlers::membership::{
    CreateMembershipHandler, ListMembershipsHandler, ListMembershipsQuery,
};
use crate::domain::foundation::UserId;
use crate::domain::membership::MembershipError;
use crate::ports::{MembershipReader, MembershipRepository};

use super::dto::{
    CreateMembershipRequest, CreateMembershipResponse, ErrorResponse,
    MembershipWithPeriodsResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
///
/// This struct is cloned for each request and contains Arc-wrapped dependencies
/// for efficient sharing across handlers.
#[derive(Clone)]
pub struct MembershipAppState {
    pub membership_repository: Arc<dyn MembershipRepository>,
    pub membership_reader: Arc<dyn MembershipReader>,
    /// Owner of every membership created through the API.
    pub default_user: UserId,
}

impl MembershipAppState {
    /// Create handlers on demand from the shared state.
    pub fn create_membership_handler(&self) -> CreateMembershipHandler {
        CreateMembershipHandler::new(self.membership_repository.clone(), self.default_user)
    }

    pub fn list_memberships_handler(&self) -> ListMembershipsHandler {
        ListMembershipsHandler::new(self.membership_reader.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /memberships - List every membership with its periods
pub async fn list_memberships(
    State(state): State<MembershipAppState>,
) -> Result<impl IntoResponse, MembershipApiError> {
    let handler = state.list_memberships_handler();
    let result = handler.handle(ListMembershipsQuery).await?;

    let response: Vec<MembershipWithPeriodsResponse> =
        result.into_iter().map(Into::into).collect();

    Ok(Json(response))
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /memberships - Create a membership and its billing periods
pub async fn create_membership(
    State(state): State<MembershipAppState>,
    payload: Result<Json<CreateMembershipRequest>, JsonRejection>,
) -> Result<impl IntoResponse, MembershipApiError> {
    let Json(request) = payload.map_err(|rejection| {
        info!(error = %rejection.body_text(), "Malformed membership request body");
        MembershipApiError::InvalidBody
    })?;

    let handler = state.create_membership_handler();
    let result = handler.handle(request.into_command()?).await?;

    let response = CreateMembershipResponse {
        membership: result.membership.into(),
        membership_periods: result.periods.into_iter().map(Into::into).collect(),
    };

    Ok((StatusCode::CREATED, Json(response)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error wrapper for converting domain errors to HTTP responses.
#[derive(Debug)]
pub enum MembershipApiError {
    /// The body is not a JSON object of the expected shape.
    InvalidBody,
    Membership(MembershipError),
}

impl From<MembershipError> for MembershipApiError {
    fn from(err: MembershipError) -> Self {
        Self::Membership(err)
    }
}

impl From<crate::domain::foundation::DomainError> for MembershipApiError {
    fn from(err: crate::domain::foundation::DomainError) -> Self {
        Self::Membership(MembershipError::from(err))
    }
}

impl IntoResponse for MembershipApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            MembershipApiError::InvalidBody => (StatusCode::BAD_REQUEST, "invalidRequestBody"),
            MembershipApiError::Membership(MembershipError::Rejected(reason)) => {
                (StatusCode::BAD_REQUEST, reason.as_str())
            }
            MembershipApiError::Membership(MembershipError::InvalidValidFrom(detail)) => {
                info!(detail = %detail, "Rejected membership validFrom");
                (StatusCode::BAD_REQUEST, "invalidValidFrom")
            }
            MembershipApiError::Membership(err @ MembershipError::Infrastructure(_)) => {
                error!(code = %err.code(), error = %err, "Membership request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}
