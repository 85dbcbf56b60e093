//! Membership store configuration

use serde::Deserialize;

use crate::domain::foundation::UserId;

use super::error::ValidationError;

/// Membership store configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Load the bundled seed memberships at startup
    #[serde(default = "default_seed")]
    pub seed: bool,

    /// User owning created memberships and seed records without one
    #[serde(default = "default_user_id")]
    pub default_user_id: u32,
}

impl StoreConfig {
    /// The configured default user.
    pub fn default_user(&self) -> Result<UserId, ValidationError> {
        UserId::new(self.default_user_id).map_err(|_| ValidationError::InvalidDefaultUser)
    }

    /// Validate store configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.default_user()?;
        Ok(())
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            default_user_id: default_user_id(),
        }
    }
}

fn default_seed() -> bool {
    true
}

fn default_user_id() -> u32 {
    2000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_config_defaults() {
        let config = StoreConfig::default();
        assert!(config.seed);
        assert_eq!(config.default_user().unwrap().value(), 2000);
    }

    #[test]
    fn test_zero_default_user_is_rejected() {
        let config = StoreConfig {
            default_user_id: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidDefaultUser)
        ));
    }
}
