//! Enabled-SSID listing.

use tabled::Tabled;

use portwiz_core::CoreError;

use crate::cli::{GlobalOpts, SsidsArgs};
use crate::config::Context;
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct SsidRow {
    #[tabled(rename = "Number")]
    number: u32,
    #[tabled(rename = "Name")]
    name: String,
}

pub async fn handle(ctx: &Context, args: SsidsArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let ssids = ctx
        .client
        .list_wireless_ssids(&args.network)
        .await
        .map_err(CoreError::from)?;

    let out = output::render_list(
        &global.output,
        &ssids,
        |s| SsidRow {
            number: s.number,
            name: s.name.clone(),
        },
        |s| s.number.to_string(),
    );
    output::print_output(&out, global.quiet);
    Ok(())
}
