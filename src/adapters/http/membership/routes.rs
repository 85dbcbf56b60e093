//! Axum router configuration for membership endpoints.
//!
//! This module defines the route structure for membership-related API endpoints
//! and wires them to their corresponding handlers.

use axum::{routing::get, Router};

use super::handlers::{create_membership, list_memberships, MembershipAppState};

/// Create the membership API router.
///
/// # Routes
///
/// - `GET /memberships` - List memberships with their periods
/// - `POST /memberships` - Create a membership and its periods
pub fn membership_routes() -> Router<MembershipAppState> {
    Router::new().route("/memberships", get(list_memberships).post(create_membership))
}

/// Create the membership router with its state applied.
///
/// # Example
///
/// ```ignore
/// let store = Arc::new(InMemoryMembershipStore::new());
/// let state = MembershipAppState {
///     membership_repository: store.clone(),
///     membership_reader: store,
///     default_user: UserId::new(2000)?,
/// };
/// let app = membership_router(state);
/// ```
pub fn membership_router(state: MembershipAppState) -> Router {
    membership_routes().with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryMembershipStore;
    use crate::domain::foundation::{DomainError, ErrorCode, UserId};
    use crate::domain::membership::{Membership, MembershipPeriod, NewMembership};
    use crate::ports::{MembershipReader, MembershipRepository, MembershipWithPeriods};
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    // ───────────────────────────────────────────────────────────────
    // Mock implementations (minimal for route testing)
    // ───────────────────────────────────────────────────────────────

    struct FailingStore;

    #[async_trait]
    impl MembershipRepository for FailingStore {
        async fn append(&self, _membership: NewMembership) -> Result<Membership, DomainError> {
            Err(DomainError::new(ErrorCode::StoreUnavailable, "Simulated append failure"))
        }

        async fn append_periods(&self, _periods: &[MembershipPeriod]) -> Result<(), DomainError> {
            Err(DomainError::new(ErrorCode::StoreUnavailable, "Simulated append failure"))
        }
    }

    #[async_trait]
    impl MembershipReader for FailingStore {
        async fn list_with_periods(&self) -> Result<Vec<MembershipWithPeriods>, DomainError> {
            Err(DomainError::new(ErrorCode::StoreUnavailable, "Simulated read failure"))
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Helpers
    // ───────────────────────────────────────────────────────────────

    fn state_with(store: Arc<InMemoryMembershipStore>) -> MembershipAppState {
        MembershipAppState {
            membership_repository: store.clone(),
            membership_reader: store,
            default_user: UserId::new(2000).unwrap(),
        }
    }

    fn failing_state() -> MembershipAppState {
        let store = Arc::new(FailingStore);
        MembershipAppState {
            membership_repository: store.clone(),
            membership_reader: store,
            default_user: UserId::new(2000).unwrap(),
        }
    }

    fn post_json(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/memberships")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn read_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    // ───────────────────────────────────────────────────────────────
    // Route tests
    // ───────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn get_memberships_lists_seeded_entries() {
        let store = Arc::new(InMemoryMembershipStore::seeded(UserId::new(2000).unwrap()).unwrap());
        let app = membership_router(state_with(store));

        let response = app
            .oneshot(Request::builder().uri("/memberships").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = read_json(response).await;
        let entries = json.as_array().unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0]["membership"]["name"], "Platinum Plan");
        assert_eq!(entries[1]["membership"]["user"], 2000);
        assert_eq!(entries[2]["periods"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn post_membership_returns_201_with_periods() {
        let store = Arc::new(InMemoryMembershipStore::new());
        let app = membership_router(state_with(store.clone()));

        let response = app
            .oneshot(post_json(
                r#"{"name":"Gold Plan","recurringPrice":50,"paymentMethod":"credit card",
                    "billingInterval":"monthly","billingPeriods":6,"validFrom":"2024-01-01"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let json = read_json(response).await;
        assert_eq!(json["membership"]["id"], 1);
        assert_eq!(json["membership"]["validUntil"], "2024-07-01T00:00:00.000Z");
        let periods = json["membershipPeriods"].as_array().unwrap();
        assert_eq!(periods.len(), 6);
        assert_eq!(periods[5]["end"], "2024-07-01T00:00:00.000Z");
        assert_eq!(store.period_count().unwrap(), 6);
    }

    #[tokio::test]
    async fn post_membership_rejection_returns_400_reason() {
        let app = membership_router(state_with(Arc::new(InMemoryMembershipStore::new())));

        let response = app
            .oneshot(post_json(
                r#"{"name":"Gold Plan","recurringPrice":150,"paymentMethod":"cash",
                    "billingInterval":"monthly","billingPeriods":6}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(read_json(response).await["message"], "cashPriceBelow100");
    }

    #[tokio::test]
    async fn post_malformed_body_returns_400() {
        let app = membership_router(state_with(Arc::new(InMemoryMembershipStore::new())));

        let response = app.oneshot(post_json("{\"name\": ")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(read_json(response).await["message"], "invalidRequestBody");
    }

    #[tokio::test]
    async fn get_memberships_store_failure_returns_500() {
        let app = membership_router(failing_state());

        let response = app
            .oneshot(Request::builder().uri("/memberships").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(read_json(response).await["message"], "Internal server error");
    }

    #[tokio::test]
    async fn post_membership_store_failure_returns_500() {
        let app = membership_router(failing_state());

        let response = app
            .oneshot(post_json(
                r#"{"name":"Gold Plan","recurringPrice":50,"paymentMethod":"card",
                    "billingInterval":"yearly","billingPeriods":3}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
