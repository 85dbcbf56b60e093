//! Membership handlers.
//!
//! ## Commands
//! - Creating a membership and planning its billing periods
//!
//! ## Queries
//! - Listing memberships with their periods

mod create_membership;
mod list_memberships;

// Commands
pub use create_membership::{
    CreateMembershipCommand, CreateMembershipHandler, CreateMembershipResult,
};

// Queries
pub use list_memberships::{ListMembershipsHandler, ListMembershipsQuery, ListMembershipsResult};
