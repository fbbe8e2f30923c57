//! Clap derive structures for the `portwiz` CLI.
//!
//! Defines the command tree, global flags, and shared types.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// portwiz -- guided Meraki dashboard configuration from the terminal
#[derive(Debug, Parser)]
#[command(
    name = "portwiz",
    version,
    about = "Build Meraki port and WiFi configurations interactively",
    long_about = "A step-by-step wizard over the Meraki Dashboard API.\n\n\
        Walks organization -> network -> use case -> parameters, validates\n\
        MAC addresses and VLAN IDs as you go, and emits the finished\n\
        configuration as JSON or forwards it to a webhook.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Dashboard profile to use
    #[arg(long, short = 'p', env = "PORTWIZ_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Dashboard API key
    #[arg(long, env = "MERAKI_API_KEY", global = true, hide_env = true)]
    pub api_key: Option<String>,

    /// Dashboard base URL (overrides profile)
    #[arg(long, env = "PORTWIZ_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "PORTWIZ_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Request timeout in seconds
    #[arg(long, env = "PORTWIZ_TIMEOUT", default_value = "30", global = true)]
    pub timeout: u64,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the interactive configuration wizard
    #[command(alias = "w")]
    Wizard(WizardArgs),

    /// List organizations visible to the API key
    #[command(alias = "o")]
    Orgs,

    /// List networks in an organization
    #[command(alias = "net", alias = "n")]
    Networks(NetworksArgs),

    /// List switches in a network
    #[command(alias = "dev", alias = "d")]
    Devices(DevicesArgs),

    /// List enabled SSIDs on a network
    Ssids(SsidsArgs),

    /// List ports on a switch
    Ports(PortsArgs),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Per-Command Arguments ────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct WizardArgs {
    /// Forward the finished configuration to this webhook URL
    #[arg(long, env = "PORTWIZ_WEBHOOK_URL")]
    pub webhook_url: Option<String>,

    /// Never prompt to forward to a webhook
    #[arg(long, conflicts_with = "webhook_url")]
    pub no_webhook: bool,
}

#[derive(Debug, Args)]
pub struct NetworksArgs {
    /// Organization ID
    #[arg(long, short = 'g')]
    pub org: String,
}

#[derive(Debug, Args)]
pub struct DevicesArgs {
    /// Network ID
    #[arg(long, short = 'n')]
    pub network: String,
}

#[derive(Debug, Args)]
pub struct SsidsArgs {
    /// Network ID
    #[arg(long, short = 'n')]
    pub network: String,
}

#[derive(Debug, Args)]
pub struct PortsArgs {
    /// Switch serial number
    pub serial: String,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Interactively create or update a profile
    Init,

    /// Show the effective configuration (keys redacted)
    Show,

    /// Print the config file path
    Path,

    /// List configured profiles
    Profiles,

    /// Store an API key in the system keyring
    SetKey {
        /// Profile to store the key for
        #[arg(long, short = 'p', default_value = "default")]
        profile: String,
    },
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
