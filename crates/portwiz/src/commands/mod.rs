//! Command dispatch: bridges CLI args -> dashboard calls -> output formatting.

pub mod config_cmd;
pub mod devices;
pub mod networks;
pub mod orgs;
pub mod ports;
pub mod ssids;
pub mod wizard;

use crate::cli::{Command, GlobalOpts};
use crate::config::Context;
use crate::error::CliError;

/// Dispatch a dashboard-bound command to the appropriate handler.
pub async fn dispatch(cmd: Command, ctx: Context, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Wizard(args) => wizard::handle(ctx, args, global).await,
        Command::Orgs => orgs::handle(&ctx, global).await,
        Command::Networks(args) => networks::handle(&ctx, args, global).await,
        Command::Devices(args) => devices::handle(&ctx, args, global).await,
        Command::Ssids(args) => ssids::handle(&ctx, args, global).await,
        Command::Ports(args) => ports::handle(&ctx, args, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
