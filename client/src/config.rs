//! Delivery configuration for the lead-capture relay.
//!
//! DESIGN
//! ======
//! Values are baked in at build time with `option_env!` and validated once
//! when the app mounts. Parsing is a pure function over a key lookup so the
//! rules can be tested without touching the process environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const SERVICE_ID_VAR: &str = "LUMIQ_EMAILJS_SERVICE_ID";
pub const TEMPLATE_ID_VAR: &str = "LUMIQ_EMAILJS_TEMPLATE_ID";
pub const PUBLIC_KEY_VAR: &str = "LUMIQ_EMAILJS_PUBLIC_KEY";
pub const ENDPOINT_VAR: &str = "LUMIQ_EMAILJS_ENDPOINT";

pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing delivery setting {0}")]
    Missing(&'static str),
    #[error("delivery endpoint must be an http(s) URL, got {0:?}")]
    InvalidEndpoint(String),
}

/// Credentials and endpoint for the transactional email relay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeliveryConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub endpoint_base: String,
}

impl DeliveryConfig {
    /// Build from a key lookup. Blank values count as missing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for the first missing credential or an
    /// endpoint that is not an http(s) URL.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
        let require = |key: &'static str| read(key).ok_or(ConfigError::Missing(key));

        let service_id = require(SERVICE_ID_VAR)?;
        let template_id = require(TEMPLATE_ID_VAR)?;
        let public_key = require(PUBLIC_KEY_VAR)?;
        let endpoint_base = read(ENDPOINT_VAR).unwrap_or_else(|| DEFAULT_ENDPOINT.to_owned());
        if !(endpoint_base.starts_with("https://") || endpoint_base.starts_with("http://")) {
            return Err(ConfigError::InvalidEndpoint(endpoint_base));
        }

        Ok(Self { service_id, template_id, public_key, endpoint_base })
    }

    /// Read the values compiled into this build.
    ///
    /// # Errors
    ///
    /// See [`DeliveryConfig::from_lookup`].
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| {
            let value = match key {
                SERVICE_ID_VAR => option_env!("LUMIQ_EMAILJS_SERVICE_ID"),
                TEMPLATE_ID_VAR => option_env!("LUMIQ_EMAILJS_TEMPLATE_ID"),
                PUBLIC_KEY_VAR => option_env!("LUMIQ_EMAILJS_PUBLIC_KEY"),
                ENDPOINT_VAR => option_env!("LUMIQ_EMAILJS_ENDPOINT"),
                _ => None,
            };
            value.map(str::to_owned)
        })
    }
}
