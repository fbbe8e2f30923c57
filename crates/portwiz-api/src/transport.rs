// Shared transport configuration for building reqwest::Client instances.
//
// The dashboard client and the webhook forwarder share timeout and
// user-agent settings through this module.

use std::time::Duration;

/// Shared transport configuration for building HTTP clients.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, crate::error::Error> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent("portwiz/0.1.0")
            .build()
            .map_err(crate::error::Error::Transport)
    }

    /// Build a `reqwest::Client` with additional default headers.
    ///
    /// Used by the dashboard client to inject the `X-Cisco-Meraki-API-Key`
    /// header on every request.
    pub fn build_client_with_headers(
        &self,
        headers: reqwest::header::HeaderMap,
    ) -> Result<reqwest::Client, crate::error::Error> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent("portwiz/0.1.0")
            .default_headers(headers)
            .build()
            .map_err(crate::error::Error::Transport)
    }
}
