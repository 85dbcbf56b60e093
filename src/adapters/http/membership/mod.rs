//! HTTP adapter for membership endpoints.
//!
//! Exposes the membership domain via REST API:
//! - `GET /memberships` - List memberships with their billing periods
//! - `POST /memberships` - Create a membership

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::{MembershipApiError, MembershipAppState};
pub use routes::{membership_router, membership_routes};
