//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `membership` - Request validation, membership building, period planning

pub mod foundation;
pub mod membership;
