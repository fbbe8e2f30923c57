// Wire types for the Dashboard API responses portwiz consumes.
//
// Field names follow the dashboard's camelCase JSON; unknown fields are
// ignored so API additions never break deserialization.

use serde::{Deserialize, Serialize};

/// Top-level tenant in the dashboard hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: String,
    pub name: String,
}

/// A site scoped under an organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    pub id: String,
    pub name: String,
}

/// A configured wireless SSID slot on a network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ssid {
    pub number: u32,
    pub name: String,
    #[serde(default)]
    pub enabled: bool,
}

/// A device claimed into a network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub serial: String,
    #[serde(default)]
    pub name: Option<String>,
    pub model: String,
}

impl Device {
    /// A switch qualifies by model-name convention: the MS family prefix
    /// or an explicit "switch" in the model string.
    pub fn is_switch(&self) -> bool {
        self.model.starts_with("MS") || self.model.to_lowercase().contains("switch")
    }

    /// Display label: name when set, model otherwise.
    pub fn label(&self) -> &str {
        self.name.as_deref().filter(|n| !n.is_empty()).unwrap_or(&self.model)
    }
}

/// A physical port on a switch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchPort {
    pub port_id: String,
    #[serde(default)]
    pub name: Option<String>,
}
