//! Membership request validation.
//!
//! Rules run in a fixed order and the first failing rule decides the
//! rejection. Reasons are part of the public API and are returned to
//! callers verbatim.

use serde::Serialize;
use thiserror::Error;

use super::{BillingInterval, MembershipRequest, MembershipTerms};

/// Cash payments are refused above this recurring price.
pub const CASH_PRICE_LIMIT: f64 = 100.0;

/// Payment method label subject to the cash price limit.
pub const CASH_PAYMENT_METHOD: &str = "cash";

/// Reason a membership request was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MembershipRejection {
    #[error("missingMandatoryFields")]
    MissingMandatoryFields,

    #[error("negativeRecurringPrice")]
    NegativeRecurringPrice,

    /// Raised when a cash price is *above* the limit; the name is kept for
    /// API compatibility.
    #[error("cashPriceBelow100")]
    CashPriceBelow100,

    #[error("billingPeriodsMoreThan12Months")]
    BillingPeriodsMoreThan12Months,

    #[error("billingPeriodsLessThan6Months")]
    BillingPeriodsLessThan6Months,

    #[error("billingPeriodsLessThan3Years")]
    BillingPeriodsLessThan3Years,

    #[error("billingPeriodsMoreThan10Years")]
    BillingPeriodsMoreThan10Years,

    #[error("invalidBillingPeriods")]
    InvalidBillingPeriods,
}

impl MembershipRejection {
    /// Wire string returned to API callers.
    pub fn as_str(&self) -> &'static str {
        match self {
            MembershipRejection::MissingMandatoryFields => "missingMandatoryFields",
            MembershipRejection::NegativeRecurringPrice => "negativeRecurringPrice",
            MembershipRejection::CashPriceBelow100 => "cashPriceBelow100",
            MembershipRejection::BillingPeriodsMoreThan12Months => "billingPeriodsMoreThan12Months",
            MembershipRejection::BillingPeriodsLessThan6Months => "billingPeriodsLessThan6Months",
            MembershipRejection::BillingPeriodsLessThan3Years => "billingPeriodsLessThan3Years",
            MembershipRejection::BillingPeriodsMoreThan10Years => "billingPeriodsMoreThan10Years",
            MembershipRejection::InvalidBillingPeriods => "invalidBillingPeriods",
        }
    }
}

/// Validates a creation request and returns its typed terms.
///
/// # Rules (first failure wins)
///
/// 1. Name missing or empty, or price missing or zero: `MissingMandatoryFields`
/// 2. Negative price: `NegativeRecurringPrice`
/// 3. Price above 100 paid in cash: `CashPriceBelow100`
/// 4. Monthly: more than 12 or fewer than 6 periods
/// 5. Yearly: fewer than 3 or more than 10 periods
/// 6. Any other interval, `weekly` included: `InvalidBillingPeriods`
///
/// # Errors
///
/// Returns the reason of the first rule the request breaks.
pub fn validate_request(request: &MembershipRequest) -> Result<MembershipTerms, MembershipRejection> {
    let (name, price) = match (request.name.as_deref(), request.recurring_price) {
        (Some(name), Some(price)) if !name.is_empty() && price != 0.0 && !price.is_nan() => {
            (name, price)
        }
        _ => return Err(MembershipRejection::MissingMandatoryFields),
    };

    if price < 0.0 {
        return Err(MembershipRejection::NegativeRecurringPrice);
    }

    if price > CASH_PRICE_LIMIT && request.payment_method == CASH_PAYMENT_METHOD {
        return Err(MembershipRejection::CashPriceBelow100);
    }

    let periods = request.billing_periods;
    let interval = match request.billing_interval.parse::<BillingInterval>() {
        Ok(BillingInterval::Monthly) => {
            if periods > 12 {
                return Err(MembershipRejection::BillingPeriodsMoreThan12Months);
            }
            if periods < 6 {
                return Err(MembershipRejection::BillingPeriodsLessThan6Months);
            }
            BillingInterval::Monthly
        }
        Ok(BillingInterval::Yearly) => {
            if periods < 3 {
                return Err(MembershipRejection::BillingPeriodsLessThan3Years);
            }
            if periods > 10 {
                return Err(MembershipRejection::BillingPeriodsMoreThan10Years);
            }
            BillingInterval::Yearly
        }
        Ok(BillingInterval::Weekly) | Err(_) => {
            return Err(MembershipRejection::InvalidBillingPeriods)
        }
    };

    let billing_periods =
        u32::try_from(periods).map_err(|_| MembershipRejection::InvalidBillingPeriods)?;

    Ok(MembershipTerms {
        name: name.to_string(),
        recurring_price: price,
        payment_method: request.payment_method.clone(),
        billing_interval: interval,
        billing_periods,
        valid_from: request.valid_from,
    })
}
