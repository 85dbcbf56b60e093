//! In-memory adapters.
//!
//! - `InMemoryMembershipStore` - Membership repository and reader backed by process memory

mod membership_store;

pub use membership_store::InMemoryMembershipStore;
