//! Public front-end URLs
//!
//! Shared with the front-end builds through the `NEXT_PUBLIC_` variables:
//! `NEXT_PUBLIC_APP_URL`, `NEXT_PUBLIC_QUIZ_URL`, `NEXT_PUBLIC_MARKETING_URL`.

use serde::Deserialize;

use super::error::{ConfigError, ValidationError};
use super::server::is_http_url;

/// Front-end deployment URLs. All optional.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct PublicUrls {
    pub app_url: Option<String>,
    pub quiz_url: Option<String>,
    pub marketing_url: Option<String>,
}

impl PublicUrls {
    /// Load from `NEXT_PUBLIC_*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let urls = config::Config::builder()
            .add_source(config::Environment::default().prefix("NEXT_PUBLIC"))
            .build()?
            .try_deserialize()?;
        Ok(urls)
    }

    /// Configured URLs, in app/quiz/marketing order.
    pub fn origins(&self) -> Vec<String> {
        [&self.app_url, &self.quiz_url, &self.marketing_url]
            .into_iter()
            .flatten()
            .map(|url| url.trim_end_matches('/').to_string())
            .collect()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let fields = [
            ("NEXT_PUBLIC_APP_URL", &self.app_url),
            ("NEXT_PUBLIC_QUIZ_URL", &self.quiz_url),
            ("NEXT_PUBLIC_MARKETING_URL", &self.marketing_url),
        ];
        for (field, value) in fields {
            if let Some(value) = value {
                if !is_http_url(value) {
                    return Err(ValidationError::InvalidUrl {
                        field,
                        value: value.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}
