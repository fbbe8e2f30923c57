// ── Async session orchestrator ──
//
// Owns the dashboard client and the wizard, wiring each selection to
// its dependent load with the generation guard applied on completion.
// One logical actor: every method takes `&mut self`, no locking.

use secrecy::SecretString;
use tracing::debug;
use url::Url;

use portwiz_api::types::{Device, Network, Organization, Ssid, SwitchPort};
use portwiz_api::{DashboardClient, TransportConfig, WebhookClient};

use crate::draft::UseCase;
use crate::error::CoreError;
use crate::output::{ConfigPayload, WebhookEnvelope, assemble};
use crate::wizard::{Step, Wizard};

/// A live wizard session bound to a dashboard credential.
pub struct Session {
    client: DashboardClient,
    wizard: Wizard,
}

impl Session {
    /// Start a session from a resolved API key. Fails fast on a blank
    /// key before any network traffic.
    pub fn start(
        base_url: &str,
        api_key: SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, CoreError> {
        let client = DashboardClient::from_api_key(base_url, &api_key, transport)?;
        let wizard = Wizard::with_api_key(api_key)?;
        Ok(Self { client, wizard })
    }

    /// Wrap an existing client and wizard (tests, custom transports).
    pub fn from_parts(client: DashboardClient, wizard: Wizard) -> Self {
        Self { client, wizard }
    }

    pub fn wizard(&self) -> &Wizard {
        &self.wizard
    }

    pub fn wizard_mut(&mut self) -> &mut Wizard {
        &mut self.wizard
    }

    // ── Loads and selections ─────────────────────────────────────────

    /// Fetch the organization list into the wizard.
    pub async fn load_organizations(&mut self) -> Result<&[Organization], CoreError> {
        let orgs = self.client.list_organizations().await?;
        debug!(count = orgs.len(), "loaded organizations");
        self.wizard.set_organizations(orgs);
        Ok(self.wizard.organizations())
    }

    /// Select an organization by id and load its networks. A response
    /// superseded by a newer selection is discarded by the wizard.
    pub async fn select_organization(&mut self, id: &str) -> Result<&[Network], CoreError> {
        let name = self
            .wizard
            .organizations()
            .iter()
            .find(|o| o.id == id)
            .map(|o| o.name.clone())
            .unwrap_or_default();
        let generation = self.wizard.select_organization(id, &name);

        let networks = self.client.list_networks(id).await?;
        self.wizard.apply_networks(generation, networks);
        Ok(self.wizard.networks())
    }

    /// Select a network by id.
    pub fn select_network(&mut self, id: &str) {
        let name = self
            .wizard
            .networks()
            .iter()
            .find(|n| n.id == id)
            .map(|n| n.name.clone())
            .unwrap_or_default();
        self.wizard.select_network(id, &name);
    }

    pub fn select_use_case(&mut self, use_case: UseCase) {
        self.wizard.select_use_case(use_case);
    }

    pub fn select_operation(&mut self, operation: &str) -> Result<(), CoreError> {
        self.wizard.select_operation(operation)
    }

    /// Load the dependent option list for the current use case:
    /// switches for Wired, enabled SSIDs for WiFi.
    pub async fn load_parameter_options(&mut self) -> Result<(), CoreError> {
        let network_id = self.wizard.draft().network_id.clone();
        if network_id.is_empty() {
            return Err(CoreError::validation("select a network first"));
        }
        match self.wizard.draft().use_case {
            Some(UseCase::Wired) => {
                let generation = self.wizard.device_generation();
                let devices: Vec<Device> = self.client.list_network_devices(&network_id).await?;
                self.wizard.apply_devices(generation, devices);
            }
            Some(UseCase::WiFi) => {
                let generation = self.wizard.ssid_generation();
                let ssids: Vec<Ssid> = self.client.list_wireless_ssids(&network_id).await?;
                self.wizard.apply_ssids(generation, ssids);
            }
            None => {
                return Err(CoreError::validation("select a use case first"));
            }
        }
        Ok(())
    }

    /// Select a switch by serial and load its ports.
    pub async fn select_device(&mut self, serial: &str) -> Result<&[SwitchPort], CoreError> {
        let name = self
            .wizard
            .devices()
            .iter()
            .find(|d| d.serial == serial)
            .map(|d| d.label().to_owned())
            .unwrap_or_else(|| "Unknown Device".to_owned());
        let generation = self.wizard.select_device(serial, &name);

        let ports = self.client.list_switch_ports(serial).await?;
        self.wizard.apply_ports(generation, ports);
        Ok(self.wizard.ports())
    }

    // ── Completion ───────────────────────────────────────────────────

    /// Project the completed draft into the canonical output payload.
    pub fn assemble(&self) -> Result<ConfigPayload, CoreError> {
        assemble(self.wizard.draft())
    }

    /// POST the final configuration (plus timestamp and source tag) to a
    /// user-supplied webhook. Failure is reportable and retryable; it
    /// never mutates the draft or the wizard step.
    pub async fn forward_to_webhook(
        &self,
        url: &Url,
        transport: &TransportConfig,
    ) -> Result<(), CoreError> {
        let payload = self.assemble()?;
        let envelope = WebhookEnvelope::new(payload);

        let hook = WebhookClient::new(transport)?;
        hook.deliver(url, &envelope)
            .await
            .map_err(|e| CoreError::WebhookFailed {
                message: e.to_string(),
            })
    }

    pub fn advance(&mut self) -> Result<Step, CoreError> {
        self.wizard.advance()
    }

    pub fn back(&mut self) -> Step {
        self.wizard.back()
    }

    pub fn reset(&mut self) {
        self.wizard.reset();
    }
}
