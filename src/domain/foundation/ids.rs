//! Strongly-typed identifier value objects.
//!
//! Memberships and periods carry two identifiers: a small integer assigned
//! by the store (or by position, for periods) and an opaque external
//! identifier that is globally unique.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::ValidationError;

/// Store-assigned identifier of a membership.
///
/// Starts at 1 and increases with every appended membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MembershipId(u32);

impl MembershipId {
    /// Creates a MembershipId from its numeric value.
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for MembershipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Position of a period within its membership, 1-based.
///
/// Only unique within one membership's period sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PeriodId(u32);

impl PeriodId {
    /// Creates a PeriodId from its numeric value.
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for PeriodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reference to the user owning a membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u32);

impl UserId {
    /// Creates a new UserId, returning error if zero.
    pub fn new(id: u32) -> Result<Self, ValidationError> {
        if id == 0 {
            return Err(ValidationError::out_of_range(
                "user_id",
                1,
                u32::MAX as i64,
                0,
            ));
        }
        Ok(Self(id))
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Globally unique external identifier for memberships and periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExternalId(Uuid);

impl ExternalId {
    /// Creates a new random ExternalId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ExternalId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ExternalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_id_serializes_as_number() {
        let id = MembershipId::new(7);
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");
    }

    #[test]
    fn membership_ids_order_numerically() {
        assert!(MembershipId::new(2) < MembershipId::new(10));
    }

    #[test]
    fn period_id_displays_value() {
        assert_eq!(PeriodId::new(3).to_string(), "3");
    }

    #[test]
    fn user_id_rejects_zero() {
        assert!(UserId::new(0).is_err());
    }

    #[test]
    fn user_id_accepts_positive() {
        let user = UserId::new(2000).unwrap();
        assert_eq!(user.value(), 2000);
    }

    #[test]
    fn external_ids_are_unique() {
        assert_ne!(ExternalId::new(), ExternalId::new());
    }

    #[test]
    fn external_id_displays_as_hyphenated_uuid() {
        let id = ExternalId::new();
        assert_eq!(id.to_string(), id.as_uuid().hyphenated().to_string());
    }
}
