//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `MembershipRepository` - Appends memberships and their periods
//! - `MembershipReader` - Lists memberships with their periods

mod membership_reader;
mod membership_repository;

pub use membership_reader::{MembershipReader, MembershipWithPeriods};
pub use membership_repository::MembershipRepository;
