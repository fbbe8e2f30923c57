//! GlobalOpts-aware wrappers over `portwiz-config`.
//!
//! Resolves the active profile, layers CLI flag overrides on top, and
//! builds the dashboard client the commands run against.

use secrecy::SecretString;

use portwiz_api::{DashboardClient, TransportConfig};
use portwiz_config::{Profile, load_config_or_default, resolve_api_key};

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// Everything a dashboard-bound command needs.
pub struct Context {
    pub client: DashboardClient,
    pub api_key: SecretString,
    pub transport: TransportConfig,
    pub profile: Profile,
}

/// Resolve the API key: `--api-key` / `MERAKI_API_KEY` first, then the
/// profile's credential chain (named env var, keyring, plaintext).
pub fn resolve_key(
    global: &GlobalOpts,
    profile: &Profile,
    profile_name: &str,
) -> Result<SecretString, CliError> {
    if let Some(ref key) = global.api_key {
        if !key.trim().is_empty() {
            return Ok(SecretString::from(key.clone()));
        }
    }
    Ok(resolve_api_key(profile, profile_name)?)
}

/// Build the command context from config file, profile, and CLI overrides.
pub fn build_context(global: &GlobalOpts) -> Result<Context, CliError> {
    let cfg = load_config_or_default();
    let (profile_name, profile) = cfg.profile(global.profile.as_deref())?;

    let api_key = resolve_key(global, &profile, &profile_name)?;
    let base_url = global
        .base_url
        .clone()
        .unwrap_or_else(|| profile.base_url().to_owned());
    let transport = profile.transport(global.timeout);

    let client = DashboardClient::from_api_key(&base_url, &api_key, &transport)
        .map_err(portwiz_core::CoreError::from)?;

    Ok(Context {
        client,
        api_key,
        transport,
        profile,
    })
}
