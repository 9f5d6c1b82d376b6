//! Outbound delivery of submissions to the spreadsheet webhook.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use thiserror::Error;
use url::Url;

use crate::config::WebhookConfig;
use crate::contact::NormalizedSubmission;

/// Why a delivery failed. Every variant is reported to the client the same way.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("webhook did not respond within {0:?}")]
    Timeout(Duration),

    #[error("webhook request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("webhook responded with status {0}")]
    Rejected(StatusCode),

    #[error("failed to build webhook client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("invalid webhook URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Forwards normalized submissions to a single preconfigured endpoint.
///
/// One attempt per submission; the caller decides what a failure means.
#[derive(Debug, Clone)]
pub struct WebhookRelay {
    client: Client,
    endpoint: Url,
    timeout: Duration,
}

impl WebhookRelay {
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, RelayError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(RelayError::Client)?;

        Ok(Self {
            client,
            endpoint,
            timeout,
        })
    }

    /// Build a relay from configuration, or `None` when no webhook is set.
    pub fn from_config(config: &WebhookConfig) -> Result<Option<Self>, RelayError> {
        config
            .webhook_url
            .as_deref()
            .map(|raw| Self::new(Url::parse(raw)?, config.timeout()))
            .transpose()
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// POST `{ name, email, message }` to the webhook.
    ///
    /// Any 2xx status counts as delivered; the response body is ignored.
    pub async fn submit(&self, submission: &NormalizedSubmission) -> Result<(), RelayError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(submission)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RelayError::Timeout(self.timeout)
                } else {
                    RelayError::Transport(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RelayError::Rejected(status));
        }

        tracing::debug!(status = %status, "Webhook accepted submission");
        Ok(())
    }
}
