//! Config subcommand handlers.

use dialoguer::{Input, Password, Select};

use portwiz_config::{
    Profile, config_path, load_config_or_default, save_config, store_api_key,
};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

/// Map a dialoguer / interactive I/O failure into CliError.
fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        // ── Init: interactive profile setup ─────────────────────────
        ConfigCommand::Init => {
            let path = config_path();
            eprintln!("portwiz — configuration setup");
            eprintln!("Config path: {}\n", path.display());

            let profile_name: String = Input::new()
                .with_prompt("Profile name")
                .default("default".into())
                .interact_text()
                .map_err(prompt_err)?;

            let key = Password::new()
                .with_prompt("Meraki API key")
                .interact()
                .map_err(prompt_err)?;
            if key.trim().is_empty() {
                return Err(CliError::Validation {
                    field: "api_key".into(),
                    reason: "API key is required".into(),
                });
            }

            let store_choices = [
                "Store in system keyring (recommended)",
                "Save to config file (plaintext)",
            ];
            let store_selection = Select::new()
                .with_prompt("Where to store the API key?")
                .items(&store_choices)
                .default(0)
                .interact()
                .map_err(prompt_err)?;

            let api_key_field = if store_selection == 0 {
                store_api_key(&profile_name, key.trim())?;
                eprintln!("API key stored in system keyring");
                None
            } else {
                Some(key.trim().to_owned())
            };

            let webhook: String = Input::new()
                .with_prompt("Webhook URL (blank to skip)")
                .allow_empty(true)
                .interact_text()
                .map_err(prompt_err)?;

            let mut cfg = load_config_or_default();
            cfg.profiles.insert(
                profile_name.clone(),
                Profile {
                    base_url: None,
                    api_key: api_key_field,
                    api_key_env: None,
                    webhook_url: (!webhook.trim().is_empty()).then(|| webhook.trim().to_owned()),
                    timeout: None,
                },
            );
            if cfg.default_profile.is_none() {
                cfg.default_profile = Some(profile_name.clone());
            }
            save_config(&cfg)?;

            eprintln!("\nProfile '{profile_name}' saved to {}", path.display());
            Ok(())
        }

        // ── Show: effective config with secrets redacted ────────────
        ConfigCommand::Show => {
            let mut cfg = load_config_or_default();
            for profile in cfg.profiles.values_mut() {
                if profile.api_key.is_some() {
                    profile.api_key = Some("<redacted>".into());
                }
            }
            let rendered = toml::to_string_pretty(&cfg).map_err(|e| CliError::Validation {
                field: "config".into(),
                reason: format!("failed to serialize config: {e}"),
            })?;
            output::print_output(&rendered, global.quiet);
            Ok(())
        }

        ConfigCommand::Path => {
            output::print_output(&config_path().display().to_string(), global.quiet);
            Ok(())
        }

        ConfigCommand::Profiles => {
            let cfg = load_config_or_default();
            let default = cfg.default_profile.as_deref().unwrap_or("default");
            let mut names: Vec<&String> = cfg.profiles.keys().collect();
            names.sort();
            let listing = names
                .iter()
                .map(|name| {
                    if name.as_str() == default {
                        format!("{name} (default)")
                    } else {
                        (*name).to_string()
                    }
                })
                .collect::<Vec<_>>()
                .join("\n");
            output::print_output(&listing, global.quiet);
            Ok(())
        }

        // ── SetKey: keyring storage without touching the file ───────
        ConfigCommand::SetKey { profile } => {
            let key = Password::new()
                .with_prompt(format!("Meraki API key for profile '{profile}'"))
                .interact()
                .map_err(prompt_err)?;
            if key.trim().is_empty() {
                return Err(CliError::Validation {
                    field: "api_key".into(),
                    reason: "API key is required".into(),
                });
            }
            store_api_key(&profile, key.trim())?;
            eprintln!("API key stored in system keyring for profile '{profile}'");
            Ok(())
        }
    }
}
