// ── Final output assembly ──
//
// Projects a completed draft into the canonical configuration payload.
// The two payload shapes are flat JSON objects with fixed camelCase
// keys; `ConfigPayload` is an untagged union so serialization emits the
// bare object with no discriminant wrapper.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::draft::{ConfigurationDraft, UseCase};
use crate::error::CoreError;
use crate::validate::{is_valid_mac, is_valid_vlan};

/// `source` tag stamped onto webhook envelopes.
pub const WEBHOOK_SOURCE: &str = "portwiz";

/// Wired (MAC whitelisting + VLAN tagging) output shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WiredPayload {
    pub org_id: String,
    pub network_id: String,
    pub serial_number: String,
    pub vlan: String,
    pub mac_id: String,
    pub port_number: String,
}

/// WiFi output shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WifiPayload {
    pub org_id: String,
    pub network_id: String,
    pub ssid: String,
    pub ssid_name: String,
    pub client_name: String,
    pub mac_id: String,
}

/// The assembled configuration, one variant per use case. Untagged: each
/// variant serializes to its flat object directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigPayload {
    Wired(WiredPayload),
    Wifi(WifiPayload),
}

impl ConfigPayload {
    /// Pretty-printed JSON, as shown on the final wizard screen.
    pub fn to_json_pretty(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CoreError::Internal(format!("payload serialization failed: {e}")))
    }
}

/// Project a completed draft into its output payload. Re-checks the
/// branch-specific completeness rules so a caller can never emit a
/// payload from a half-filled draft.
pub fn assemble(draft: &ConfigurationDraft) -> Result<ConfigPayload, CoreError> {
    match draft.use_case {
        Some(UseCase::Wired) => {
            if !is_valid_mac(&draft.mac_id) {
                return Err(CoreError::validation("MAC address is invalid"));
            }
            if !is_valid_vlan(&draft.vlan) {
                return Err(CoreError::validation("VLAN must be a number from 1 to 4094"));
            }
            if draft.device_serial.is_empty() || draft.port_number.is_empty() {
                return Err(CoreError::validation("switch and port selection incomplete"));
            }
            Ok(ConfigPayload::Wired(WiredPayload {
                org_id: draft.organization_id.clone(),
                network_id: draft.network_id.clone(),
                serial_number: draft.device_serial.clone(),
                vlan: draft.vlan.trim().to_owned(),
                mac_id: draft.mac_id.clone(),
                port_number: draft.port_number.clone(),
            }))
        }
        Some(UseCase::WiFi) => {
            if !is_valid_mac(&draft.mac_id) {
                return Err(CoreError::validation("MAC address is invalid"));
            }
            if draft.ssid.is_empty() || draft.client_name.is_empty() {
                return Err(CoreError::validation("SSID and client name are required"));
            }
            Ok(ConfigPayload::Wifi(WifiPayload {
                org_id: draft.organization_id.clone(),
                network_id: draft.network_id.clone(),
                ssid: draft.ssid.clone(),
                ssid_name: draft.ssid_name.clone(),
                client_name: draft.client_name.clone(),
                mac_id: draft.mac_id.clone(),
            }))
        }
        None => Err(CoreError::validation("no use case selected")),
    }
}

/// The payload as delivered to a webhook: the flat configuration object
/// plus a delivery timestamp and a fixed source tag.
#[derive(Debug, Clone, Serialize)]
pub struct WebhookEnvelope {
    #[serde(flatten)]
    pub payload: ConfigPayload,
    pub timestamp: String,
    pub source: &'static str,
}

impl WebhookEnvelope {
    pub fn new(payload: ConfigPayload) -> Self {
        Self {
            payload,
            timestamp: Utc::now().to_rfc3339(),
            source: WEBHOOK_SOURCE,
        }
    }
}
