//! Network listing.

use tabled::Tabled;

use portwiz_core::CoreError;

use crate::cli::{GlobalOpts, NetworksArgs};
use crate::config::Context;
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct NetworkRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
}

pub async fn handle(ctx: &Context, args: NetworksArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let networks = ctx
        .client
        .list_networks(&args.org)
        .await
        .map_err(CoreError::from)?;

    let out = output::render_list(
        &global.output,
        &networks,
        |n| NetworkRow {
            id: n.id.clone(),
            name: n.name.clone(),
        },
        |n| n.id.clone(),
    );
    output::print_output(&out, global.quiet);
    Ok(())
}
