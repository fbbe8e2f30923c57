// portwiz-api: Async Rust client for the Meraki Dashboard API subset used by portwiz.

pub mod client;
pub mod error;
pub mod transport;
pub mod types;
pub mod webhook;

pub use client::{DEFAULT_BASE_URL, DashboardClient};
pub use error::Error;
pub use transport::TransportConfig;
pub use webhook::WebhookClient;
