// Outbound webhook delivery.
//
// Fire-once JSON POST to a user-supplied URL. Callers treat failures as
// reportable and retry by re-invoking; no backoff lives here.

use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::Error;

/// Minimal client for delivering the final configuration to a
/// user-supplied workflow-automation webhook.
pub struct WebhookClient {
    http: reqwest::Client,
}

impl WebhookClient {
    /// Build from shared transport settings.
    pub fn new(transport: &crate::TransportConfig) -> Result<Self, Error> {
        Ok(Self {
            http: transport.build_client()?,
        })
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn from_reqwest(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// POST a JSON body to the webhook URL.
    ///
    /// Any non-2xx response maps to [`Error::Api`] with the status and
    /// reason; transport failures surface as [`Error::Transport`].
    pub async fn deliver<B: Serialize + Sync>(&self, url: &Url, body: &B) -> Result<(), Error> {
        debug!("POST {url}");

        let resp = self.http.post(url.clone()).json(body).send().await?;
        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }

        let reason = status.canonical_reason().unwrap_or("");
        let raw = resp.text().await.unwrap_or_default();
        Err(Error::Api {
            status: status.as_u16(),
            message: if raw.is_empty() {
                format!("webhook delivery failed: {reason}")
            } else {
                format!("webhook delivery failed: {reason}: {raw}")
            },
        })
    }
}
