//! Access gate configuration

use serde::Deserialize;

use crate::domain::access::UserStatus;

use super::error::ValidationError;
use super::server::is_http_url;

/// Dashboard gate and CORS test endpoint settings
#[derive(Debug, Clone, Deserialize)]
pub struct AccessConfig {
    /// Statuses granted dashboard access (comma-separated)
    #[serde(default = "default_allowed_statuses")]
    pub allowed_statuses: String,

    /// Origin advertised by the CORS test endpoint
    #[serde(default = "default_cors_test_origin")]
    pub cors_test_origin: String,
}

impl AccessConfig {
    /// Parse the allow-list into statuses.
    pub fn allowed_statuses_list(&self) -> Result<Vec<UserStatus>, ValidationError> {
        self.allowed_statuses
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse::<UserStatus>()
                    .map_err(|_| ValidationError::UnknownStatus(s.to_string()))
            })
            .collect()
    }

    /// Validate access configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.allowed_statuses_list()?.is_empty() {
            return Err(ValidationError::MissingRequired("access.allowed_statuses"));
        }
        let origin = self.cors_test_origin.trim();
        if !is_http_url(origin) || axum::http::HeaderValue::from_str(origin).is_err() {
            return Err(ValidationError::InvalidOrigin {
                field: "access.cors_test_origin",
                value: self.cors_test_origin.clone(),
            });
        }
        Ok(())
    }
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            allowed_statuses: default_allowed_statuses(),
            cors_test_origin: default_cors_test_origin(),
        }
    }
}

fn default_allowed_statuses() -> String {
    "premium,grace_period".to_string()
}

fn default_cors_test_origin() -> String {
    "https://dopair.app".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_allow_premium_and_grace_period() {
        let config = AccessConfig::default();
        assert_eq!(
            config.allowed_statuses_list().unwrap(),
            vec![UserStatus::Premium, UserStatus::GracePeriod]
        );
        assert_eq!(config.cors_test_origin, "https://dopair.app");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn unknown_status_is_rejected() {
        let config = AccessConfig {
            allowed_statuses: "premium,vip".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::UnknownStatus("vip".to_string()))
        );
    }

    #[test]
    fn empty_allow_list_is_rejected() {
        let config = AccessConfig {
            allowed_statuses: " , ".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("access.allowed_statuses"))
        );
    }

    #[test]
    fn cors_test_origin_needs_scheme() {
        let config = AccessConfig {
            cors_test_origin: "dopair.app".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidOrigin { .. })
        ));
    }
}
