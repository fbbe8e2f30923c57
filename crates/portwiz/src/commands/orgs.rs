//! Organization listing.

use tabled::Tabled;

use portwiz_core::CoreError;

use crate::cli::GlobalOpts;
use crate::config::Context;
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct OrgRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
}

pub async fn handle(ctx: &Context, global: &GlobalOpts) -> Result<(), CliError> {
    let orgs = ctx
        .client
        .list_organizations()
        .await
        .map_err(CoreError::from)?;

    let out = output::render_list(
        &global.output,
        &orgs,
        |o| OrgRow {
            id: o.id.clone(),
            name: o.name.clone(),
        },
        |o| o.id.clone(),
    );
    output::print_output(&out, global.quiet);
    Ok(())
}
