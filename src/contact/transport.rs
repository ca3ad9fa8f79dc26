use reqwest::header::CONTENT_TYPE;
use thiserror::Error;

use super::Submission;
use crate::config::ContactConfig;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("contact webhook is not configured")]
    NotConfigured,
    #[error("couldn't encode submission: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("webhook request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Delivers a contact submission somewhere.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, submission: &Submission) -> Result<(), TransportError>;
}

/// Posts submissions to the configured webhook (a Google Apps Script endpoint in production).
///
/// In the browser the request goes out in `no-cors` mode, which yields an opaque
/// response. Nothing about the remote outcome is observable, so only a failure to
/// send at all is reported.
#[derive(Debug, Clone)]
pub struct WebhookTransport {
    client: reqwest::Client,
    url: Option<String>,
}

impl WebhookTransport {
    pub fn new(config: &ContactConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: config.webhook_url.clone(),
        }
    }
}

impl Transport for WebhookTransport {
    async fn send(&self, submission: &Submission) -> Result<(), TransportError> {
        let url = self.url.as_deref().ok_or(TransportError::NotConfigured)?;
        let body = serde_json::to_string(submission)?;

        let request = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body);
        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_mode_no_cors();

        // opaque under no-cors, so the status carries nothing
        let _ = request.send().await?;
        Ok(())
    }
}
