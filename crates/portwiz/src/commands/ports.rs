//! Switch-port listing.

use tabled::Tabled;

use portwiz_core::CoreError;

use crate::cli::{GlobalOpts, PortsArgs};
use crate::config::Context;
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct PortRow {
    #[tabled(rename = "Port")]
    port_id: String,
    #[tabled(rename = "Name")]
    name: String,
}

pub async fn handle(ctx: &Context, args: PortsArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let ports = ctx
        .client
        .list_switch_ports(&args.serial)
        .await
        .map_err(CoreError::from)?;

    let out = output::render_list(
        &global.output,
        &ports,
        |p| PortRow {
            port_id: p.port_id.clone(),
            name: p.name.clone().unwrap_or_default(),
        },
        |p| p.port_id.clone(),
    );
    output::print_output(&out, global.quiet);
    Ok(())
}
