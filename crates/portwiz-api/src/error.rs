use thiserror::Error;

/// Top-level error type for the `portwiz-api` crate.
///
/// Covers every failure mode of the Dashboard API surface and the
/// outbound webhook POST. `portwiz-core` maps these into user-facing
/// diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Credentials ─────────────────────────────────────────────────
    /// No API key was supplied. Checked before any network call.
    #[error("API key is required")]
    MissingApiKey,

    /// API key rejected by the dashboard (HTTP 401).
    #[error("Invalid API key")]
    InvalidApiKey,

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ── Dashboard API ───────────────────────────────────────────────
    /// Non-success HTTP status from the Dashboard API.
    #[error("API request failed: {status} {message}")]
    Api { status: u16, message: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if this is a connectivity-level failure the user
    /// can address by checking their network.
    pub fn is_connectivity(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }
}
