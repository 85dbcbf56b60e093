//! Membership-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | Rejected | 400 |
//! | InvalidValidFrom | 400 |
//! | Infrastructure | 500 |

use crate::domain::foundation::{DomainError, ErrorCode};

use super::MembershipRejection;

/// Membership-specific errors.
#[derive(Debug, Clone, PartialEq)]
pub enum MembershipError {
    /// The request broke a validation rule.
    Rejected(MembershipRejection),

    /// The start of the validity window is unusable (unparseable, or its
    /// window falls outside the supported date range).
    InvalidValidFrom(String),

    /// Infrastructure error.
    Infrastructure(String),
}

impl MembershipError {
    pub fn rejected(reason: MembershipRejection) -> Self {
        MembershipError::Rejected(reason)
    }

    pub fn invalid_valid_from(message: impl Into<String>) -> Self {
        MembershipError::InvalidValidFrom(message.into())
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        MembershipError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            MembershipError::Rejected(_) => ErrorCode::ValidationFailed,
            MembershipError::InvalidValidFrom(_) => ErrorCode::InvalidFormat,
            MembershipError::Infrastructure(_) => ErrorCode::InternalError,
        }
    }

    /// Returns a human-readable error message.
    pub fn message(&self) -> String {
        match self {
            MembershipError::Rejected(reason) => reason.as_str().to_string(),
            MembershipError::InvalidValidFrom(msg) => format!("Invalid validFrom: {}", msg),
            MembershipError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for MembershipError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for MembershipError {}

impl From<MembershipRejection> for MembershipError {
    fn from(reason: MembershipRejection) -> Self {
        MembershipError::Rejected(reason)
    }
}

impl From<DomainError> for MembershipError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::InvalidFormat => MembershipError::InvalidValidFrom(err.message),
            _ => MembershipError::Infrastructure(err.to_string()),
        }
    }
}

impl From<MembershipError> for DomainError {
    fn from(err: MembershipError) -> Self {
        DomainError::new(err.code(), err.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_message_is_wire_reason() {
        let err = MembershipError::rejected(MembershipRejection::NegativeRecurringPrice);
        assert_eq!(err.message(), "negativeRecurringPrice");
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
    }

    #[test]
    fn invalid_valid_from_has_format_code() {
        let err = MembershipError::invalid_valid_from("'soon' is not an ISO date");
        assert_eq!(err.code(), ErrorCode::InvalidFormat);
        assert!(err.message().contains("soon"));
    }

    #[test]
    fn infrastructure_has_internal_code() {
        let err = MembershipError::infrastructure("store lock poisoned");
        assert_eq!(err.code(), ErrorCode::InternalError);
    }

    #[test]
    fn display_matches_message() {
        let err = MembershipError::infrastructure("boom");
        assert_eq!(format!("{}", err), err.message());
    }

    #[test]
    fn converts_from_rejection() {
        let err: MembershipError = MembershipRejection::InvalidBillingPeriods.into();
        assert_eq!(err, MembershipError::Rejected(MembershipRejection::InvalidBillingPeriods));
    }

    #[test]
    fn store_failure_converts_to_infrastructure() {
        let domain_err = DomainError::new(ErrorCode::StoreUnavailable, "poisoned");
        let err: MembershipError = domain_err.into();
        assert!(matches!(err, MembershipError::Infrastructure(_)));
    }

    #[test]
    fn converts_to_domain_error() {
        let err = MembershipError::rejected(MembershipRejection::CashPriceBelow100);
        let domain_err: DomainError = err.clone().into();
        assert_eq!(domain_err.code, err.code());
    }
}
