//! Client configuration: service location, optional API key and request timeout.

use bon::Builder;
use std::env::VarError;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://dmigw.govcloud.dk/v2/metObs";
pub const API_KEY_VAR: &str = "DMI_API_KEY";
pub const BASE_URL_VAR: &str = "DMI_BASE_URL";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} value is not valid unicode")]
    NotUnicode(&'static str),

    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

/// Settings for [`crate::DmiClient`].
///
/// The current metObs API (v2) is open and needs no key. A key is only sent
/// when configured, as the `api-key` query parameter.
///
/// # Examples
///
/// ```
/// use dmi_open_data::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::builder()
///     .api_key("my-key")
///     .timeout(Duration::from_secs(30))
///     .build();
/// assert_eq!(config.base_url, "https://dmigw.govcloud.dk/v2/metObs");
/// assert_eq!(config.api_key.as_deref(), Some("my-key"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct ClientConfig {
    #[builder(into, default = DEFAULT_BASE_URL.to_string())]
    pub base_url: String,
    #[builder(into)]
    pub api_key: Option<String>,
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig::builder().build()
    }
}

impl ClientConfig {
    /// Reads `DMI_API_KEY` and `DMI_BASE_URL`. Both are optional.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name))
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Result<String, VarError>,
    {
        let optional = |name: &'static str| match lookup(name) {
            Ok(value) if value.trim().is_empty() => Ok(None),
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode(name)),
        };

        let config = ClientConfig::builder()
            .maybe_api_key(optional(API_KEY_VAR)?)
            .maybe_base_url(optional(BASE_URL_VAR)?)
            .build();
        config.validate()?;
        Ok(config)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason: reason.to_string(),
        };
        let url = reqwest::Url::parse(&self.base_url).map_err(|e| invalid(&e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid("scheme must be http or https"));
        }
        Ok(())
    }

    /// `{base_url}/collections/{collection}/items`
    pub(crate) fn items_url(&self, collection: &str) -> String {
        format!(
            "{}/collections/{}/items",
            self.base_url.trim_end_matches('/'),
            collection
        )
    }
}
