//! Delivery seam for lead submissions.
//!
//! ERROR HANDLING
//! ==============
//! Every transport outcome is folded into [`DeliveryError`] and then into one
//! of three [`FailureCategory`] buckets. The pipeline turns the category into
//! a user-facing message; nothing here panics or touches UI state.

#[cfg(test)]
#[path = "delivery_test.rs"]
mod delivery_test;

use super::payload::TemplateParams;
use crate::config::ConfigError;

/// Address shown when the relay cannot be used at all.
pub const FALLBACK_CONTACT: &str = "partnerships@lumiq.ai";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureCategory {
    Configuration,
    Network,
    Unclassified,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DeliveryError {
    #[error("delivery not configured: {0}")]
    NotConfigured(ConfigError),
    #[error("relay rejected credentials ({status}): {detail}")]
    Configuration { status: u16, detail: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("relay returned {status}: {detail}")]
    Rejected { status: u16, detail: String },
}

impl DeliveryError {
    /// Classify a non-200 relay response.
    #[must_use]
    pub fn from_status(status: u16, detail: impl Into<String>) -> Self {
        let detail = detail.into();
        match status {
            0 => Self::Network(detail),
            400 | 401 | 403 | 404 | 412 => Self::Configuration { status, detail },
            _ => Self::Rejected { status, detail },
        }
    }

    #[must_use]
    pub fn category(&self) -> FailureCategory {
        match self {
            Self::NotConfigured(_) | Self::Configuration { .. } => FailureCategory::Configuration,
            Self::Network(_) => FailureCategory::Network,
            Self::Rejected { .. } => FailureCategory::Unclassified,
        }
    }

    /// Message shown in the form's status area.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self.category() {
            FailureCategory::Configuration => format!(
                "Our contact service is temporarily unavailable. Please email us at {FALLBACK_CONTACT}."
            ),
            FailureCategory::Network => {
                "We couldn't reach our contact service. Check your connection and try again.".to_owned()
            }
            FailureCategory::Unclassified => {
                let detail = match self {
                    Self::Rejected { status, detail } if detail.trim().is_empty() => {
                        format!("status {status}")
                    }
                    Self::Rejected { detail, .. } => detail.trim().to_owned(),
                    other => other.to_string(),
                };
                format!("Something went wrong while sending your message ({detail}). Please try again.")
            }
        }
    }
}

/// Sends one set of template parameters to a relay.
#[async_trait::async_trait(?Send)]
pub trait LeadDelivery {
    /// # Errors
    ///
    /// Returns a [`DeliveryError`] when the relay is unreachable, rejects
    /// the request, or is not configured.
    async fn deliver(&self, params: &TemplateParams) -> Result<(), DeliveryError>;
}
