//! WhatsApp Cloud API channel.

use std::time::Duration;

use reqwest::Client;
use thiserror::Error;

const GRAPH_API_BASE: &str = "https://graph.facebook.com/v19.0";

/// Keep provider latency from tying up dispatch tasks.
const SEND_TIMEOUT: Duration = Duration::from_secs(10);

/// WhatsApp Cloud API credentials.
#[derive(Debug, Clone)]
pub struct WhatsAppConfig {
    /// Cloud API access token.
    pub access_token: String,

    /// Sender phone number id.
    pub phone_number_id: String,
}

/// HTTP client for the WhatsApp Cloud API messages endpoint.
#[derive(Debug, Clone)]
pub(crate) struct WhatsAppClient {
    config: WhatsAppConfig,
    http: Client,
}

impl WhatsAppClient {
    #[must_use]
    pub(crate) fn new(config: WhatsAppConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    /// Send a plain-text message to an E.164 phone number.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or a non-2xx response.
    pub(crate) async fn send_text(&self, to: &str, body: &str) -> Result<(), WhatsAppError> {
        let url = format!("{GRAPH_API_BASE}/{}/messages", self.config.phone_number_id);

        let payload = serde_json::json!({
            "messaging_product": "whatsapp",
            "to": to,
            "type": "text",
            "text": { "body": body },
        });

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.access_token)
            .timeout(SEND_TIMEOUT)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(WhatsAppError::UnexpectedResponse(format!(
                "send failed with status {status}: {text}"
            )));
        }

        Ok(())
    }
}

/// Errors from the WhatsApp Cloud API.
#[derive(Debug, Error)]
pub(crate) enum WhatsAppError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected response from WhatsApp: {0}")]
    UnexpectedResponse(String),
}
