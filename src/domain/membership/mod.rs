//! Membership domain module.
//!
//! Validates membership requests, builds memberships with their validity
//! window, and plans the billing periods that cover it.
//!
//! # Module Structure
//!
//! - `aggregate` - Membership aggregate and its builder
//! - `billing_interval` - Billing cadence and calendar arithmetic
//! - `errors` - Membership error type
//! - `period` - Billing period entity
//! - `request` - Raw request and validated terms
//! - `status` - Membership and period states
//! - `validation` - Ordered request rules and rejection reasons

mod aggregate;
mod billing_interval;
mod errors;
mod period;
mod request;
mod status;
mod validation;

pub use aggregate::{Membership, NewMembership};
pub use billing_interval::BillingInterval;
pub use errors::MembershipError;
pub use period::MembershipPeriod;
pub use request::{MembershipRequest, MembershipTerms};
pub use status::{MembershipState, PeriodState};
pub use validation::{validate_request, MembershipRejection, CASH_PAYMENT_METHOD, CASH_PRICE_LIMIT};
