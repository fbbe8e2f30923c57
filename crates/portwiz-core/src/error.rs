// ── Core error types ──
//
// User-facing errors from portwiz-core. Consumers never see raw HTTP
// status codes or JSON parse failures directly; the
// `From<portwiz_api::Error>` impl translates transport-layer errors
// into domain-appropriate variants. Nothing here is fatal -- every
// error can be retried by repeating the triggering action.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("API key is required")]
    MissingCredential,

    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("Connection failed: {message}")]
    ConnectionFailed { message: String },

    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },

    /// Wrapped Dashboard API error.
    #[error("API error: {message}")]
    Api {
        message: String,
        status: Option<u16>,
    },

    /// Webhook delivery failed. Reportable and retryable; the draft and
    /// wizard step are never affected.
    #[error("Webhook delivery failed: {message}")]
    WebhookFailed { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::ValidationFailed {
            message: message.into(),
        }
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<portwiz_api::Error> for CoreError {
    fn from(err: portwiz_api::Error) -> Self {
        match err {
            portwiz_api::Error::MissingApiKey => CoreError::MissingCredential,
            portwiz_api::Error::InvalidApiKey => CoreError::AuthenticationFailed {
                message: "Invalid API key".into(),
            },
            portwiz_api::Error::Transport(ref e) => {
                if err.is_connectivity() {
                    CoreError::ConnectionFailed {
                        message: "Connection failed. Please check your internet connection and API key.".into(),
                    }
                } else {
                    CoreError::Api {
                        message: e.to_string(),
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            portwiz_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            portwiz_api::Error::Api { status, message } => CoreError::Api {
                message,
                status: Some(status),
            },
            portwiz_api::Error::Deserialization { message, body: _ } => {
                CoreError::Internal(format!("Deserialization error: {message}"))
            }
        }
    }
}
