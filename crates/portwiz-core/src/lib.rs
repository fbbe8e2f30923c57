// portwiz-core: Domain layer between portwiz-api and the CLI shell.

pub mod draft;
pub mod error;
pub mod output;
pub mod session;
pub mod validate;
pub mod wizard;

// ── Primary re-exports ──────────────────────────────────────────────
pub use draft::{ConfigurationDraft, FieldChange, UseCase};
pub use error::CoreError;
pub use output::{ConfigPayload, WebhookEnvelope, WifiPayload, WiredPayload, WEBHOOK_SOURCE};
pub use session::Session;
pub use validate::{canonical_mac, is_valid_mac, is_valid_vlan};
pub use wizard::{Generation, Step, Wizard};

// Re-export the wire types consumers select from.
pub use portwiz_api::types::{Device, Network, Organization, Ssid, SwitchPort};
