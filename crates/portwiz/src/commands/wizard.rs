//! The interactive configuration wizard.
//!
//! Drives a `portwiz_core::Session` through its steps with dialoguer
//! prompts: select org -> network -> use case -> operation, then the
//! branch-specific parameters, then review the generated JSON and
//! optionally forward it to a webhook.

use dialoguer::{Confirm, Input, Password, Select};
use owo_colors::OwoColorize;
use url::Url;

use portwiz_core::{Session, Step, UseCase, Wizard, is_valid_mac, is_valid_vlan};

use crate::cli::{GlobalOpts, WizardArgs};
use crate::config::Context;
use crate::error::CliError;
use crate::output;

/// Map a dialoguer / interactive I/O failure into CliError.
fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}

/// What the operator chose at a step's closing action menu.
enum Action {
    Continue,
    Back,
    StartOver,
}

fn action_menu(forward_label: &str) -> Result<Action, CliError> {
    let choices = [forward_label, "Go back", "Start over"];
    let idx = Select::new()
        .with_prompt("Next")
        .items(&choices)
        .default(0)
        .interact()
        .map_err(prompt_err)?;
    Ok(match idx {
        0 => Action::Continue,
        1 => Action::Back,
        _ => Action::StartOver,
    })
}

/// Index of the currently drafted value in a re-prompted select, so
/// "go back" pre-selects what the operator already chose.
fn default_index<T>(items: &[T], is_current: impl Fn(&T) -> bool) -> usize {
    items.iter().position(is_current).unwrap_or(0)
}

/// Whether a re-prompted selection must be applied to the session.
/// Re-picking the unchanged value is a no-op so the cascade does not
/// clear downstream fields the operator already entered.
fn needs_apply(current: &str, chosen: &str, dependents_loaded: bool) -> bool {
    current != chosen || !dependents_loaded
}

fn banner(step: Step, color: bool) {
    let heading = format!("Step {}: {}", step.index(), step.title());
    if color {
        eprintln!("\n{}", heading.bold().cyan());
    } else {
        eprintln!("\n{heading}");
    }
}

pub async fn handle(ctx: Context, args: WizardArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let color = output::should_color(&global.color);
    let wizard = Wizard::with_api_key(ctx.api_key.clone())?;
    let mut session = Session::from_parts(ctx.client, wizard);

    loop {
        match session.wizard().step() {
            Step::AwaitingCredential => {
                // Only reachable after "Start over": the initial key came
                // from the profile chain.
                banner(Step::AwaitingCredential, color);
                let key = Password::new()
                    .with_prompt("Meraki API key")
                    .interact()
                    .map_err(prompt_err)?;
                session.wizard_mut().submit_credential(&key)?;
            }

            Step::SelectingContext => {
                banner(Step::SelectingContext, color);
                run_context_step(&mut session).await?;
                session.advance()?;
            }

            Step::ConfiguringParameters => {
                banner(Step::ConfiguringParameters, color);
                match run_parameters_step(&mut session).await? {
                    Action::Continue => {
                        session.advance()?;
                    }
                    Action::Back => {
                        session.back();
                    }
                    Action::StartOver => session.reset(),
                }
            }

            Step::Complete => {
                banner(Step::Complete, color);
                match run_complete_step(&session, &ctx.transport, &ctx.profile, &args, global)
                    .await?
                {
                    Action::Continue => return Ok(()),
                    Action::Back => {
                        session.back();
                    }
                    Action::StartOver => session.reset(),
                }
            }
        }
    }
}

// ── Step 1: organizational context ───────────────────────────────────

async fn run_context_step(session: &mut Session) -> Result<(), CliError> {
    if session.wizard().organizations().is_empty() {
        session.load_organizations().await?;
    }

    let org_labels: Vec<String> = session
        .wizard()
        .organizations()
        .iter()
        .map(|o| format!("{} ({})", o.name, o.id))
        .collect();
    if org_labels.is_empty() {
        return Err(CliError::Validation {
            field: "organization".into(),
            reason: "no organizations are visible to this API key".into(),
        });
    }
    let current_org = session.wizard().draft().organization_id.clone();
    let org_idx = Select::new()
        .with_prompt("Organization")
        .items(&org_labels)
        .default(default_index(session.wizard().organizations(), |o| {
            o.id == current_org
        }))
        .interact()
        .map_err(prompt_err)?;
    let org_id = session.wizard().organizations()[org_idx].id.clone();
    if needs_apply(&current_org, &org_id, !session.wizard().networks().is_empty()) {
        session.select_organization(&org_id).await?;
    }

    let net_labels: Vec<String> = session
        .wizard()
        .networks()
        .iter()
        .map(|n| format!("{} ({})", n.name, n.id))
        .collect();
    if net_labels.is_empty() {
        return Err(CliError::Validation {
            field: "network".into(),
            reason: format!("organization {org_id} has no networks"),
        });
    }
    let current_net = session.wizard().draft().network_id.clone();
    let net_idx = Select::new()
        .with_prompt("Network")
        .items(&net_labels)
        .default(default_index(session.wizard().networks(), |n| {
            n.id == current_net
        }))
        .interact()
        .map_err(prompt_err)?;
    let net_id = session.wizard().networks()[net_idx].id.clone();
    if current_net != net_id {
        session.select_network(&net_id);
    }

    let use_cases = [UseCase::WiFi, UseCase::Wired];
    let uc_labels: Vec<String> = use_cases.iter().map(ToString::to_string).collect();
    let current_uc = session.wizard().draft().use_case;
    let uc_idx = Select::new()
        .with_prompt("Use case")
        .items(&uc_labels)
        .default(default_index(&use_cases, |uc| Some(*uc) == current_uc))
        .interact()
        .map_err(prompt_err)?;
    let use_case = use_cases[uc_idx];
    if current_uc != Some(use_case) {
        session.select_use_case(use_case);
    }

    // one legal operation per use case; the select makes it explicit
    let op = use_case.operation();
    Select::new()
        .with_prompt("Operation")
        .items(&[op])
        .default(0)
        .interact()
        .map_err(prompt_err)?;
    session.select_operation(op)?;

    Ok(())
}

// ── Step 2: parameters ───────────────────────────────────────────────

async fn run_parameters_step(session: &mut Session) -> Result<Action, CliError> {
    session.load_parameter_options().await?;

    match session.wizard().draft().use_case {
        Some(UseCase::Wired) => run_wired_parameters(session).await?,
        Some(UseCase::WiFi) => run_wifi_parameters(session)?,
        None => {
            return Err(CliError::Validation {
                field: "use_case".into(),
                reason: "no use case selected".into(),
            });
        }
    }

    action_menu("Generate configuration")
}

async fn run_wired_parameters(session: &mut Session) -> Result<(), CliError> {
    let device_labels: Vec<String> = session
        .wizard()
        .devices()
        .iter()
        .map(|d| format!("{} ({})", d.label(), d.serial))
        .collect();
    if device_labels.is_empty() {
        return Err(CliError::Validation {
            field: "device".into(),
            reason: "no switches found in this network".into(),
        });
    }
    let current_serial = session.wizard().draft().device_serial.clone();
    let dev_idx = Select::new()
        .with_prompt("Switch")
        .items(&device_labels)
        .default(default_index(session.wizard().devices(), |d| {
            d.serial == current_serial
        }))
        .interact()
        .map_err(prompt_err)?;
    let serial = session.wizard().devices()[dev_idx].serial.clone();
    if needs_apply(&current_serial, &serial, !session.wizard().ports().is_empty()) {
        session.select_device(&serial).await?;
    }

    let port_labels: Vec<String> = session
        .wizard()
        .ports()
        .iter()
        .map(|p| match p.name {
            Some(ref name) if !name.is_empty() => format!("{} ({name})", p.port_id),
            _ => p.port_id.clone(),
        })
        .collect();
    if port_labels.is_empty() {
        return Err(CliError::Validation {
            field: "port".into(),
            reason: format!("switch {serial} reports no ports"),
        });
    }
    let current_port = session.wizard().draft().port_number.clone();
    let port_idx = Select::new()
        .with_prompt("Port")
        .items(&port_labels)
        .default(default_index(session.wizard().ports(), |p| {
            p.port_id == current_port
        }))
        .interact()
        .map_err(prompt_err)?;
    let port = session.wizard().ports()[port_idx].port_id.clone();
    session.wizard_mut().select_port(&port);

    let mut vlan_prompt = Input::new().with_prompt("VLAN ID (1-4094)");
    let current_vlan = session.wizard().draft().vlan.clone();
    if !current_vlan.is_empty() {
        vlan_prompt = vlan_prompt.default(current_vlan);
    }
    let vlan: String = vlan_prompt
        .validate_with(|s: &String| {
            if is_valid_vlan(s) {
                Ok(())
            } else {
                Err("VLAN must be a number from 1 to 4094")
            }
        })
        .interact_text()
        .map_err(prompt_err)?;
    session.wizard_mut().set_vlan(&vlan);

    prompt_mac(session)
}

fn run_wifi_parameters(session: &mut Session) -> Result<(), CliError> {
    let ssid_labels: Vec<String> = session
        .wizard()
        .ssids()
        .iter()
        .map(|s| format!("{} (slot {})", s.name, s.number))
        .collect();
    if ssid_labels.is_empty() {
        return Err(CliError::Validation {
            field: "ssid".into(),
            reason: "no enabled SSIDs found on this network".into(),
        });
    }
    let current_ssid = session.wizard().draft().ssid.clone();
    let ssid_idx = Select::new()
        .with_prompt("SSID")
        .items(&ssid_labels)
        .default(default_index(session.wizard().ssids(), |s| {
            s.number.to_string() == current_ssid
        }))
        .interact()
        .map_err(prompt_err)?;
    let ssid = &session.wizard().ssids()[ssid_idx];
    let (number, name) = (ssid.number.to_string(), ssid.name.clone());
    session.wizard_mut().select_ssid(&number, &name);

    let mut name_prompt = Input::new().with_prompt("Client name");
    let current_client = session.wizard().draft().client_name.clone();
    if !current_client.is_empty() {
        name_prompt = name_prompt.default(current_client);
    }
    let client_name: String = name_prompt
        .validate_with(|s: &String| {
            if s.trim().is_empty() {
                Err("client name cannot be empty")
            } else {
                Ok(())
            }
        })
        .interact_text()
        .map_err(prompt_err)?;
    session.wizard_mut().set_client_name(client_name.trim());

    prompt_mac(session)
}

fn prompt_mac(session: &mut Session) -> Result<(), CliError> {
    let mut mac_prompt = Input::new().with_prompt("Client MAC address");
    let current_mac = session.wizard().draft().mac_id.clone();
    if !current_mac.is_empty() {
        mac_prompt = mac_prompt.default(current_mac);
    }
    let mac: String = mac_prompt
        .validate_with(|s: &String| {
            if is_valid_mac(s.trim()) {
                Ok(())
            } else {
                Err("expected six hex pairs separated by ':' or '-' (e.g. aa:bb:cc:dd:ee:ff)")
            }
        })
        .interact_text()
        .map_err(prompt_err)?;
    session.wizard_mut().set_mac(&mac);
    Ok(())
}

// ── Step 3: review and output ────────────────────────────────────────

async fn run_complete_step(
    session: &Session,
    transport: &portwiz_api::TransportConfig,
    profile: &portwiz_config::Profile,
    args: &WizardArgs,
    global: &GlobalOpts,
) -> Result<Action, CliError> {
    let draft = session.wizard().draft();

    if !global.quiet {
        eprintln!("{}", summary(draft));
    }

    let payload = session.assemble()?;
    output::print_output(&payload.to_json_pretty()?, global.quiet);

    if !args.no_webhook {
        if let Some(url) = resolve_webhook_url(args, profile)? {
            match session.forward_to_webhook(&url, transport).await {
                Ok(()) => {
                    if !global.quiet {
                        eprintln!("Configuration forwarded to {url}");
                    }
                }
                Err(err) => {
                    // report and keep going; the JSON above is still valid
                    eprintln!("{:?}", miette::Report::new(CliError::from(err)));
                }
            }
        }
    }

    action_menu("Finish")
}

/// Webhook URL resolution: flag, then profile, then an interactive offer.
fn resolve_webhook_url(
    args: &WizardArgs,
    profile: &portwiz_config::Profile,
) -> Result<Option<Url>, CliError> {
    if let Some(ref raw) = args.webhook_url {
        let url = raw.parse().map_err(|_| CliError::Validation {
            field: "webhook_url".into(),
            reason: format!("invalid URL: {raw}"),
        })?;
        return Ok(Some(url));
    }

    if let Some(url) = profile.webhook_url().map_err(CliError::from)? {
        return Ok(Some(url));
    }

    let wants_hook = Confirm::new()
        .with_prompt("Forward this configuration to a webhook?")
        .default(false)
        .interact()
        .map_err(prompt_err)?;
    if !wants_hook {
        return Ok(None);
    }

    let raw: String = Input::new()
        .with_prompt("Webhook URL")
        .validate_with(|s: &String| {
            s.parse::<Url>()
                .map(|_| ())
                .map_err(|_| "expected a valid http(s) URL")
        })
        .interact_text()
        .map_err(prompt_err)?;
    Ok(Some(raw.parse().map_err(|_| CliError::Validation {
        field: "webhook_url".into(),
        reason: format!("invalid URL: {raw}"),
    })?))
}

fn summary(draft: &portwiz_core::ConfigurationDraft) -> String {
    let mut lines = vec![
        format!("Organization: {} ({})", draft.organization_name, draft.organization_id),
        format!("Network:      {} ({})", draft.network_name, draft.network_id),
        format!("Operation:    {}", draft.operation),
    ];
    match draft.use_case {
        Some(UseCase::Wired) => {
            lines.push(format!(
                "Switch:       {} ({})",
                draft.device_name, draft.device_serial
            ));
            lines.push(format!("Port:         {}", draft.port_number));
            lines.push(format!("VLAN:         {}", draft.vlan));
        }
        Some(UseCase::WiFi) => {
            lines.push(format!(
                "SSID:         {} (slot {})",
                draft.ssid_name, draft.ssid
            ));
            lines.push(format!("Client:       {}", draft.client_name));
        }
        None => {}
    }
    lines.push(format!("MAC:          {}", draft.mac_id));
    lines.join("\n")
}
