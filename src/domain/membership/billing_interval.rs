//! Billing interval - the cadence unit of a membership.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{Timestamp, ValidationError};

/// Cadence at which a membership is billed.
///
/// `Weekly` is understood by the period builder but rejected by request
/// validation, so it only appears on memberships created by trusted code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingInterval {
    Weekly,
    Monthly,
    Yearly,
}

impl BillingInterval {
    /// Wire name of the interval.
    pub fn as_str(&self) -> &'static str {
        match self {
            BillingInterval::Weekly => "weekly",
            BillingInterval::Monthly => "monthly",
            BillingInterval::Yearly => "yearly",
        }
    }

    /// Advances `from` by `units` whole intervals.
    ///
    /// Monthly and yearly use calendar-month rollover; weekly adds 7 days
    /// per unit. Returns `None` past the representable date range.
    pub fn advance(&self, from: Timestamp, units: u32) -> Option<Timestamp> {
        match self {
            BillingInterval::Weekly => from.checked_add_days(i64::from(units) * 7),
            BillingInterval::Monthly => from.checked_add_calendar_months(units),
            BillingInterval::Yearly => units
                .checked_mul(12)
                .and_then(|months| from.checked_add_calendar_months(months)),
        }
    }
}

impl fmt::Display for BillingInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BillingInterval {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weekly" => Ok(BillingInterval::Weekly),
            "monthly" => Ok(BillingInterval::Monthly),
            "yearly" => Ok(BillingInterval::Yearly),
            other => Err(ValidationError::invalid_format(
                "billing_interval",
                format!("unknown interval '{}'", other),
            )),
        }
    }
}
