// ── Configuration draft and field-change reducer ──
//
// The draft is the single session-scoped record the wizard accumulates.
// Every mutation flows through `apply`, a pure reducer that encodes all
// cascading-invalidation rules in one place so the invariants (network
// requires org, port requires device, one parameter branch at a time)
// stay centrally enforceable and unit-testable.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::validate::canonical_mac;

/// Which kind of configuration the operator is building.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
pub enum UseCase {
    WiFi,
    Wired,
}

impl UseCase {
    /// The fixed operation vocabulary: exactly one legal label per use case.
    pub fn operation(self) -> &'static str {
        match self {
            Self::WiFi => "WiFi Configuration",
            Self::Wired => "MAC Whitelisting and VLAN Tagging",
        }
    }
}

/// The accumulating configuration draft. Created empty at session start,
/// mutated field-by-field as steps complete, read once at the final step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationDraft {
    pub organization_id: String,
    pub organization_name: String,
    pub network_id: String,
    pub network_name: String,
    pub use_case: Option<UseCase>,
    pub operation: String,

    // WiFi branch
    pub ssid: String,
    pub ssid_name: String,
    pub client_name: String,

    // Wired branch
    pub vlan: String,
    pub device_serial: String,
    pub device_name: String,
    pub port_number: String,

    // Common
    pub mac_id: String,
}

/// A single field update flowing into the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldChange {
    SelectOrganization { id: String, name: String },
    SelectNetwork { id: String, name: String },
    SelectUseCase(UseCase),
    SelectOperation(String),
    SelectSsid { number: String, name: String },
    SetClientName(String),
    SetVlan(String),
    SelectDevice { serial: String, name: String },
    SelectPort(String),
    SetMac(String),
    Reset,
}

/// Compute the next draft from a field change.
///
/// Clearing rules:
/// - a new organization clears the network and both parameter branches
/// - a new network clears the device/port and SSID selections
/// - a new use case clears the operation and both parameter branches
///   (the MAC stays: it is common to both branches)
/// - a new device clears the port selection
pub fn apply(draft: &ConfigurationDraft, change: FieldChange) -> ConfigurationDraft {
    let mut next = draft.clone();
    match change {
        FieldChange::SelectOrganization { id, name } => {
            next.organization_id = id;
            next.organization_name = name;
            next.network_id.clear();
            next.network_name.clear();
            clear_parameter_branches(&mut next);
        }
        FieldChange::SelectNetwork { id, name } => {
            next.network_id = id;
            next.network_name = name;
            clear_parameter_branches(&mut next);
        }
        FieldChange::SelectUseCase(use_case) => {
            next.use_case = Some(use_case);
            next.operation.clear();
            clear_parameter_branches(&mut next);
        }
        FieldChange::SelectOperation(operation) => {
            next.operation = operation;
        }
        FieldChange::SelectSsid { number, name } => {
            next.ssid = number;
            next.ssid_name = name;
        }
        FieldChange::SetClientName(name) => {
            next.client_name = name;
        }
        FieldChange::SetVlan(vlan) => {
            next.vlan = vlan;
        }
        FieldChange::SelectDevice { serial, name } => {
            next.device_serial = serial;
            next.device_name = name;
            next.port_number.clear();
        }
        FieldChange::SelectPort(port) => {
            next.port_number = port;
        }
        FieldChange::SetMac(mac) => {
            next.mac_id = canonical_mac(&mac);
        }
        FieldChange::Reset => {
            next = ConfigurationDraft::default();
        }
    }
    next
}

fn clear_parameter_branches(draft: &mut ConfigurationDraft) {
    draft.ssid.clear();
    draft.ssid_name.clear();
    draft.client_name.clear();
    draft.vlan.clear();
    draft.device_serial.clear();
    draft.device_name.clear();
    draft.port_number.clear();
}

impl ConfigurationDraft {
    /// Step-1 gate: organization, network, use case, and operation all set.
    pub fn context_complete(&self) -> bool {
        !self.organization_id.is_empty()
            && !self.network_id.is_empty()
            && self.use_case.is_some()
            && !self.operation.is_empty()
    }

    /// Step-2 gate, branch-specific.
    pub fn parameters_complete(&self) -> bool {
        match self.use_case {
            Some(UseCase::WiFi) => {
                crate::validate::is_valid_mac(&self.mac_id)
                    && !self.ssid.is_empty()
                    && !self.client_name.is_empty()
            }
            Some(UseCase::Wired) => {
                crate::validate::is_valid_mac(&self.mac_id)
                    && crate::validate::is_valid_vlan(&self.vlan)
                    && !self.device_serial.is_empty()
                    && !self.port_number.is_empty()
            }
            None => false,
        }
    }
}
