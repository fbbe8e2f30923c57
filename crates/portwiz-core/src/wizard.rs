// ── Wizard state machine ──
//
// Owns the draft, the credential, the loaded option lists, and a
// per-list generation counter. Selections bump the generation of every
// dependent list, so a response from a load that started under an older
// selection compares unequal and is discarded instead of applied.

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use portwiz_api::types::{Device, Network, Organization, Ssid, SwitchPort};

use crate::draft::{ConfigurationDraft, FieldChange, UseCase, apply};
use crate::error::CoreError;

/// Monotonic token identifying which selection a dependent-list load
/// belongs to. Captured when the load starts, compared when it lands.
pub type Generation = u64;

/// Wizard steps, ordered and linear; the only branch is WiFi/Wired
/// inside step 2.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    #[default]
    AwaitingCredential,
    SelectingContext,
    ConfiguringParameters,
    Complete,
}

impl Step {
    /// Zero-based step index for progress display.
    pub fn index(self) -> usize {
        match self {
            Self::AwaitingCredential => 0,
            Self::SelectingContext => 1,
            Self::ConfiguringParameters => 2,
            Self::Complete => 3,
        }
    }

    /// Step title for display.
    pub fn title(self) -> &'static str {
        match self {
            Self::AwaitingCredential => "API Configuration",
            Self::SelectingContext => "Organizational Context",
            Self::ConfiguringParameters => "Configure Parameters",
            Self::Complete => "Review & Output",
        }
    }
}

/// The wizard state machine.
#[derive(Debug, Default)]
pub struct Wizard {
    step: Step,
    api_key: Option<SecretString>,
    draft: ConfigurationDraft,

    organizations: Vec<Organization>,
    networks: Vec<Network>,
    devices: Vec<Device>,
    ports: Vec<SwitchPort>,
    ssids: Vec<Ssid>,

    network_generation: Generation,
    device_generation: Generation,
    port_generation: Generation,
    ssid_generation: Generation,
}

impl Wizard {
    /// Fresh wizard at step 0 with an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session with a credential already resolved (profile or
    /// env), skipping step 0.
    pub fn with_api_key(api_key: SecretString) -> Result<Self, CoreError> {
        let mut wizard = Self::new();
        wizard.submit_credential(api_key.expose_secret())?;
        Ok(wizard)
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn draft(&self) -> &ConfigurationDraft {
        &self.draft
    }

    pub fn api_key(&self) -> Option<&SecretString> {
        self.api_key.as_ref()
    }

    pub fn organizations(&self) -> &[Organization] {
        &self.organizations
    }

    pub fn networks(&self) -> &[Network] {
        &self.networks
    }

    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    pub fn ports(&self) -> &[SwitchPort] {
        &self.ports
    }

    pub fn ssids(&self) -> &[Ssid] {
        &self.ssids
    }

    // ── Step 0: credential ───────────────────────────────────────────

    /// Store a non-blank credential token for the session and advance
    /// to context selection. The token lives in memory only.
    pub fn submit_credential(&mut self, key: &str) -> Result<(), CoreError> {
        let trimmed = key.trim();
        if trimmed.is_empty() {
            return Err(CoreError::MissingCredential);
        }
        self.api_key = Some(SecretString::from(trimmed.to_owned()));
        if self.step == Step::AwaitingCredential {
            self.step = Step::SelectingContext;
        }
        Ok(())
    }

    // ── Step 1: context selections ───────────────────────────────────

    /// Apply the organization list (not generation-guarded: the list is
    /// top-level and has no upstream selection to go stale against).
    pub fn set_organizations(&mut self, organizations: Vec<Organization>) {
        self.organizations = organizations;
    }

    /// Select an organization. Clears the network selection plus every
    /// dependent list, and returns the token for the network load this
    /// triggers.
    pub fn select_organization(&mut self, id: &str, name: &str) -> Generation {
        self.draft = apply(
            &self.draft,
            FieldChange::SelectOrganization {
                id: id.to_owned(),
                name: name.to_owned(),
            },
        );
        self.networks.clear();
        self.invalidate_parameter_lists();
        self.network_generation += 1;
        self.network_generation
    }

    /// Guarded apply for a network-list response. Returns `false` when
    /// the response belongs to a superseded organization selection.
    pub fn apply_networks(&mut self, generation: Generation, networks: Vec<Network>) -> bool {
        if generation != self.network_generation {
            debug!(
                generation,
                current = self.network_generation,
                "discarding stale network list"
            );
            return false;
        }
        self.networks = networks;
        true
    }

    /// Select a network. Clears device/port/SSID selections and
    /// invalidates their lists; dependent loads pick up fresh tokens
    /// from the `*_generation` accessors.
    pub fn select_network(&mut self, id: &str, name: &str) {
        self.draft = apply(
            &self.draft,
            FieldChange::SelectNetwork {
                id: id.to_owned(),
                name: name.to_owned(),
            },
        );
        self.invalidate_parameter_lists();
    }

    /// Choose WiFi or Wired. Clears the operation and both parameter
    /// branches, and invalidates the dependent lists so they reload.
    pub fn select_use_case(&mut self, use_case: UseCase) {
        self.draft = apply(&self.draft, FieldChange::SelectUseCase(use_case));
        self.invalidate_parameter_lists();
    }

    /// Pick an operation label; must belong to the current use case's
    /// fixed vocabulary.
    pub fn select_operation(&mut self, operation: &str) -> Result<(), CoreError> {
        let Some(use_case) = self.draft.use_case else {
            return Err(CoreError::validation("select a use case first"));
        };
        if operation != use_case.operation() {
            return Err(CoreError::validation(format!(
                "operation '{operation}' is not valid for the {use_case} use case"
            )));
        }
        self.draft = apply(&self.draft, FieldChange::SelectOperation(operation.to_owned()));
        Ok(())
    }

    // ── Step 2: parameter selections ─────────────────────────────────

    /// Current token for a device-list load.
    pub fn device_generation(&self) -> Generation {
        self.device_generation
    }

    /// Guarded apply for a device-list response.
    pub fn apply_devices(&mut self, generation: Generation, devices: Vec<Device>) -> bool {
        if generation != self.device_generation {
            debug!(
                generation,
                current = self.device_generation,
                "discarding stale device list"
            );
            return false;
        }
        self.devices = devices;
        true
    }

    /// Current token for an SSID-list load.
    pub fn ssid_generation(&self) -> Generation {
        self.ssid_generation
    }

    /// Guarded apply for an SSID-list response.
    pub fn apply_ssids(&mut self, generation: Generation, ssids: Vec<Ssid>) -> bool {
        if generation != self.ssid_generation {
            debug!(
                generation,
                current = self.ssid_generation,
                "discarding stale SSID list"
            );
            return false;
        }
        self.ssids = ssids;
        true
    }

    /// Select a switch. Clears the port selection and returns the token
    /// for the port load this triggers.
    pub fn select_device(&mut self, serial: &str, name: &str) -> Generation {
        self.draft = apply(
            &self.draft,
            FieldChange::SelectDevice {
                serial: serial.to_owned(),
                name: name.to_owned(),
            },
        );
        self.ports.clear();
        self.port_generation += 1;
        self.port_generation
    }

    /// Guarded apply for a port-list response.
    pub fn apply_ports(&mut self, generation: Generation, ports: Vec<SwitchPort>) -> bool {
        if generation != self.port_generation {
            debug!(
                generation,
                current = self.port_generation,
                "discarding stale port list"
            );
            return false;
        }
        self.ports = ports;
        true
    }

    pub fn select_port(&mut self, port: &str) {
        self.draft = apply(&self.draft, FieldChange::SelectPort(port.to_owned()));
    }

    pub fn select_ssid(&mut self, number: &str, name: &str) {
        self.draft = apply(
            &self.draft,
            FieldChange::SelectSsid {
                number: number.to_owned(),
                name: name.to_owned(),
            },
        );
    }

    pub fn set_client_name(&mut self, name: &str) {
        self.draft = apply(&self.draft, FieldChange::SetClientName(name.to_owned()));
    }

    pub fn set_vlan(&mut self, vlan: &str) {
        self.draft = apply(&self.draft, FieldChange::SetVlan(vlan.to_owned()));
    }

    pub fn set_mac(&mut self, mac: &str) {
        self.draft = apply(&self.draft, FieldChange::SetMac(mac.to_owned()));
    }

    // ── Gates and transitions ────────────────────────────────────────

    /// Step-1 forward gate.
    pub fn can_proceed_context(&self) -> bool {
        self.draft.context_complete()
    }

    /// Step-2 forward gate (branch-specific).
    pub fn can_generate(&self) -> bool {
        self.draft.parameters_complete()
    }

    /// Advance one step if the current step's gate is satisfied.
    pub fn advance(&mut self) -> Result<Step, CoreError> {
        let next = match self.step {
            Step::AwaitingCredential => {
                return Err(CoreError::MissingCredential);
            }
            Step::SelectingContext => {
                if !self.can_proceed_context() {
                    return Err(CoreError::validation(
                        "organization, network, use case, and operation must all be selected",
                    ));
                }
                Step::ConfiguringParameters
            }
            Step::ConfiguringParameters => {
                if !self.can_generate() {
                    return Err(CoreError::validation(
                        "parameters are incomplete or invalid for the selected use case",
                    ));
                }
                Step::Complete
            }
            Step::Complete => Step::Complete,
        };
        self.step = next;
        Ok(next)
    }

    /// Go back one step. Always permitted; never clears entered fields.
    pub fn back(&mut self) -> Step {
        self.step = match self.step {
            Step::Complete => Step::ConfiguringParameters,
            Step::ConfiguringParameters => Step::SelectingContext,
            other => other,
        };
        self.step
    }

    /// Explicit reset: credential, draft, lists, and step all return to
    /// their initial state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn invalidate_parameter_lists(&mut self) {
        self.devices.clear();
        self.ports.clear();
        self.ssids.clear();
        self.device_generation += 1;
        self.port_generation += 1;
        self.ssid_generation += 1;
    }
}
