//! HTTP DTOs (Data Transfer Objects) for membership endpoints.
//!
//! These types define the JSON request/response structure for the membership API.
//! They serve as the boundary between HTTP and the application layer.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::CreateMembershipCommand;
use crate::domain::foundation::{DomainError, Timestamp};
use crate::domain::membership::{
    validate_request, Membership, MembershipError, MembershipPeriod, MembershipRequest,
};
use crate::ports::MembershipWithPeriods;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to create a membership.
///
/// Every field is optional at this layer so that missing values reach the
/// validator and produce its rejection reason.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMembershipRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub recurring_price: Option<f64>,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub billing_interval: Option<String>,
    #[serde(default)]
    pub billing_periods: Option<i64>,
    /// ISO 8601 instant or `YYYY-MM-DD`; empty means "now".
    #[serde(default)]
    pub valid_from: Option<String>,
}

impl CreateMembershipRequest {
    /// Converts the body into a create command.
    ///
    /// An unparseable `validFrom` only surfaces once the rest of the
    /// request passes validation, so rule violations keep priority.
    pub fn into_command(self) -> Result<CreateMembershipCommand, MembershipError> {
        let raw_valid_from = self.valid_from.filter(|value| !value.trim().is_empty());
        let mut request = MembershipRequest {
            name: self.name,
            recurring_price: self.recurring_price,
            payment_method: self.payment_method.unwrap_or_default(),
            billing_interval: self.billing_interval.unwrap_or_default(),
            billing_periods: self.billing_periods.unwrap_or_default(),
            valid_from: None,
        };

        if let Some(raw) = raw_valid_from {
            match Timestamp::parse_iso(&raw) {
                Ok(valid_from) => request.valid_from = Some(valid_from),
                Err(parse_error) => {
                    validate_request(&request)?;
                    return Err(DomainError::from(parse_error).into());
                }
            }
        }

        Ok(CreateMembershipCommand { request })
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Membership as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipDto {
    pub id: u32,
    pub uuid: Uuid,
    pub name: String,
    pub user: u32,
    pub recurring_price: f64,
    pub valid_from: String,
    pub valid_until: String,
    pub state: String,
    pub payment_method: String,
    pub billing_interval: String,
    pub billing_periods: u32,
}

impl From<Membership> for MembershipDto {
    fn from(membership: Membership) -> Self {
        Self {
            id: membership.id.value(),
            uuid: *membership.uuid.as_uuid(),
            name: membership.name,
            user: membership.user.value(),
            recurring_price: membership.recurring_price,
            valid_from: membership.valid_from.to_iso_string(),
            valid_until: membership.valid_until.to_iso_string(),
            state: membership.state.as_str().to_string(),
            payment_method: membership.payment_method,
            billing_interval: membership.billing_interval.as_str().to_string(),
            billing_periods: membership.billing_periods,
        }
    }
}

/// Billing period as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipPeriodDto {
    pub id: u32,
    pub uuid: Uuid,
    pub membership: u32,
    pub start: String,
    pub end: String,
    pub state: String,
}

impl From<MembershipPeriod> for MembershipPeriodDto {
    fn from(period: MembershipPeriod) -> Self {
        Self {
            id: period.id.value(),
            uuid: *period.uuid.as_uuid(),
            membership: period.membership.value(),
            start: period.start.to_iso_string(),
            end: period.end.to_iso_string(),
            state: period.state.as_str().to_string(),
        }
    }
}

/// One entry of `GET /memberships`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MembershipWithPeriodsResponse {
    pub membership: MembershipDto,
    pub periods: Vec<MembershipPeriodDto>,
}

impl From<MembershipWithPeriods> for MembershipWithPeriodsResponse {
    fn from(entry: MembershipWithPeriods) -> Self {
        Self {
            membership: entry.membership.into(),
            periods: entry.periods.into_iter().map(Into::into).collect(),
        }
    }
}

/// Response of `POST /memberships`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMembershipResponse {
    pub membership: MembershipDto,
    pub membership_periods: Vec<MembershipPeriodDto>,
}

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Rejection reason or generic error message.
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{MembershipId, UserId};
    use crate::domain::membership::{
        BillingInterval, MembershipRejection, MembershipTerms, NewMembership,
    };

    fn body(json: &str) -> CreateMembershipRequest {
        serde_json::from_str(json).unwrap()
    }

    fn stored_membership() -> Membership {
        let start = Timestamp::from_ymd(2024, 6, 1).unwrap();
        let terms = MembershipTerms {
            name: "Gold Plan".to_string(),
            recurring_price: 100.0,
            payment_method: "cash".to_string(),
            billing_interval: BillingInterval::Yearly,
            billing_periods: 3,
            valid_from: Some(start),
        };
        NewMembership::build(terms, UserId::new(2000).unwrap(), start)
            .unwrap()
            .with_id(MembershipId::new(4))
    }

    // Request conversion

    #[test]
    fn camel_case_body_becomes_command() {
        let cmd = body(
            r#"{"name":"Gold","recurringPrice":50,"paymentMethod":"cash",
                "billingInterval":"monthly","billingPeriods":6,"validFrom":"2024-06-01"}"#,
        )
        .into_command()
        .unwrap();

        assert_eq!(cmd.request.name.as_deref(), Some("Gold"));
        assert_eq!(cmd.request.recurring_price, Some(50.0));
        assert_eq!(cmd.request.billing_periods, 6);
        assert_eq!(cmd.request.valid_from, Timestamp::from_ymd(2024, 6, 1));
    }

    #[test]
    fn missing_fields_default_for_the_validator() {
        let cmd = body("{}").into_command().unwrap();

        assert_eq!(cmd.request, MembershipRequest::default());
    }

    #[test]
    fn empty_valid_from_means_now() {
        let cmd = body(r#"{"validFrom":""}"#).into_command().unwrap();
        assert!(cmd.request.valid_from.is_none());
    }

    #[test]
    fn bad_valid_from_is_reported_for_valid_request() {
        let result = body(
            r#"{"name":"Gold","recurringPrice":50,"paymentMethod":"card",
                "billingInterval":"monthly","billingPeriods":6,"validFrom":"soon"}"#,
        )
        .into_command();

        assert!(matches!(result, Err(MembershipError::InvalidValidFrom(_))));
    }

    #[test]
    fn rule_violation_wins_over_bad_valid_from() {
        let result = body(r#"{"name":"Gold","validFrom":"soon"}"#).into_command();

        assert_eq!(
            result.unwrap_err(),
            MembershipError::Rejected(MembershipRejection::MissingMandatoryFields)
        );
    }

    // Response conversion

    #[test]
    fn membership_dto_uses_wire_names_and_iso_dates() {
        let json = serde_json::to_value(MembershipDto::from(stored_membership())).unwrap();

        assert_eq!(json["id"], 4);
        assert_eq!(json["user"], 2000);
        assert_eq!(json["validFrom"], "2024-06-01T00:00:00.000Z");
        assert_eq!(json["validUntil"], "2027-06-01T00:00:00.000Z");
        assert_eq!(json["billingInterval"], "yearly");
        assert_eq!(json["paymentMethod"], "cash");
        assert_eq!(json["state"], "active");
    }

    #[test]
    fn period_dto_references_membership_id() {
        let periods = stored_membership().plan_periods().unwrap();
        let json = serde_json::to_value(MembershipPeriodDto::from(periods[2].clone())).unwrap();

        assert_eq!(json["id"], 3);
        assert_eq!(json["membership"], 4);
        assert_eq!(json["start"], "2026-06-01T00:00:00.000Z");
        assert_eq!(json["end"], "2027-06-01T00:00:00.000Z");
        assert_eq!(json["state"], "planned");
    }

    #[test]
    fn create_response_names_periods_membership_periods() {
        let membership = stored_membership();
        let periods = membership.plan_periods().unwrap();
        let response = CreateMembershipResponse {
            membership: membership.into(),
            membership_periods: periods.into_iter().map(Into::into).collect(),
        };

        let json = serde_json::to_value(response).unwrap();
        assert_eq!(json["membershipPeriods"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn error_response_has_only_message() {
        let json = serde_json::to_value(ErrorResponse::new("negativeRecurringPrice")).unwrap();
        assert_eq!(json, serde_json::json!({ "message": "negativeRecurringPrice" }));
    }
}
