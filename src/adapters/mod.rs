//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - REST API (axum)
//! - `memory` - In-memory membership store

pub mod http;
pub mod memory;

pub use http::{build_app, MembershipAppState};
pub use memory::InMemoryMembershipStore;
