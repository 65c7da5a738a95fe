//! EmailJS REST relay and the non-network delivery variants.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: the relay reports a network error so tests and tooling
//! never reach the internet.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "emailjs_test.rs"]
mod emailjs_test;

use super::delivery::{DeliveryError, LeadDelivery};
use super::payload::TemplateParams;
use crate::config::{ConfigError, DeliveryConfig};
use crate::util::mount::MountScope;

const SEND_PATH: &str = "/api/v1.0/email/send";

#[cfg(any(feature = "csr", test))]
#[derive(Debug, serde::Serialize)]
pub(crate) struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

#[derive(Clone, Debug)]
pub struct EmailJsDelivery {
    config: DeliveryConfig,
    #[cfg(feature = "csr")]
    abort: Option<web_sys::AbortSignal>,
}

impl EmailJsDelivery {
    #[must_use]
    pub fn new(config: DeliveryConfig) -> Self {
        Self {
            config,
            #[cfg(feature = "csr")]
            abort: None,
        }
    }

    /// Cancel the request when `scope` ends.
    #[must_use]
    pub fn abort_with(self, scope: &MountScope) -> Self {
        #[cfg(feature = "csr")]
        {
            let mut this = self;
            match web_sys::AbortController::new() {
                Ok(controller) => {
                    this.abort = Some(controller.signal());
                    scope.defer(move || controller.abort());
                }
                Err(_) => log::warn!("AbortController unavailable; relay request cannot be cancelled"),
            }
            this
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = scope;
            self
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}{SEND_PATH}", self.config.endpoint_base.trim_end_matches('/'))
    }

    #[cfg(any(feature = "csr", test))]
    pub(crate) fn request_body<'a>(&'a self, params: &'a TemplateParams) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: params,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl LeadDelivery for EmailJsDelivery {
    async fn deliver(&self, params: &TemplateParams) -> Result<(), DeliveryError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoint())
                .abort_signal(self.abort.as_ref())
                .json(&self.request_body(params))
                .map_err(|e| DeliveryError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| DeliveryError::Network(e.to_string()))?;
            let status = resp.status();
            if status == 200 {
                return Ok(());
            }
            let detail = resp.text().await.unwrap_or_default();
            Err(DeliveryError::from_status(status, detail))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = params;
            Err(DeliveryError::Network("relay is only reachable from the browser".to_owned()))
        }
    }
}

/// Stand-in used when the build carries no usable relay settings.
#[derive(Clone, Debug)]
pub struct UnconfiguredDelivery(pub ConfigError);

#[async_trait::async_trait(?Send)]
impl LeadDelivery for UnconfiguredDelivery {
    async fn deliver(&self, _params: &TemplateParams) -> Result<(), DeliveryError> {
        Err(DeliveryError::NotConfigured(self.0.clone()))
    }
}

/// Accepts every submission after a short pause. Used by the pilot form.
#[derive(Clone, Copy, Debug)]
pub struct SimulatedDelivery {
    pub delay_ms: u32,
}

impl Default for SimulatedDelivery {
    fn default() -> Self {
        Self { delay_ms: 1_200 }
    }
}

#[async_trait::async_trait(?Send)]
impl LeadDelivery for SimulatedDelivery {
    async fn deliver(&self, params: &TemplateParams) -> Result<(), DeliveryError> {
        #[cfg(feature = "csr")]
        gloo_timers::future::TimeoutFuture::new(self.delay_ms).await;
        leptos::logging::log!("simulated delivery accepted {} params", params.len());
        Ok(())
    }
}

/// Which relay a form submits through. Provided to forms through context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeliveryChoice {
    Relay(Result<DeliveryConfig, ConfigError>),
    Simulated,
}

impl DeliveryChoice {
    /// Delivery for one submission; an in-flight relay request is aborted
    /// when `scope` ends.
    #[must_use]
    pub fn build(&self, scope: &MountScope) -> Box<dyn LeadDelivery> {
        match self {
            Self::Relay(Ok(config)) => Box::new(EmailJsDelivery::new(config.clone()).abort_with(scope)),
            Self::Relay(Err(err)) => Box::new(UnconfiguredDelivery(err.clone())),
            Self::Simulated => Box::new(SimulatedDelivery::default()),
        }
    }
}
