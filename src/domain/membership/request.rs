//! Membership creation input, before and after validation.

use crate::domain::foundation::Timestamp;

use super::BillingInterval;

/// Raw membership creation request as received from a caller.
///
/// Fields stay loosely typed so that validation can report the exact
/// rejection reason instead of failing at parse time.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MembershipRequest {
    pub name: Option<String>,
    pub recurring_price: Option<f64>,
    pub payment_method: String,
    pub billing_interval: String,
    pub billing_periods: i64,
    pub valid_from: Option<Timestamp>,
}

/// Billing terms of a membership, typed and ready for the builder.
///
/// Produced by [`validate_request`](super::validate_request) for caller
/// input. Code that constructs terms directly (for example with a
/// `Weekly` interval) bypasses the request rules.
#[derive(Debug, Clone, PartialEq)]
pub struct MembershipTerms {
    pub name: String,
    pub recurring_price: f64,
    pub payment_method: String,
    pub billing_interval: BillingInterval,
    pub billing_periods: u32,
    pub valid_from: Option<Timestamp>,
}
