//! Switch listing (network devices filtered to switch-class models).

use tabled::Tabled;

use portwiz_core::CoreError;

use crate::cli::{DevicesArgs, GlobalOpts};
use crate::config::Context;
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct DeviceRow {
    #[tabled(rename = "Serial")]
    serial: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Model")]
    model: String,
}

pub async fn handle(ctx: &Context, args: DevicesArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let devices = ctx
        .client
        .list_network_devices(&args.network)
        .await
        .map_err(CoreError::from)?;

    let out = output::render_list(
        &global.output,
        &devices,
        |d| DeviceRow {
            serial: d.serial.clone(),
            name: d.label().to_owned(),
            model: d.model.clone(),
        },
        |d| d.serial.clone(),
    );
    output::print_output(&out, global.quiet);
    Ok(())
}
