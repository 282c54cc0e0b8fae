mod add;
mod get;
mod list;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PartnerCommands;
use crate::context::AppContext;

/// Handle `pact partner`.
pub async fn handle(
    action: &PartnerCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        PartnerCommands::Add { pool, json, file } => {
            add::run(pool, json.as_deref(), file.as_deref(), ctx, flags).await
        }
        PartnerCommands::Get { id } => get::run(id, ctx, flags).await,
        PartnerCommands::List { pool } => list::run(pool, ctx, flags).await,
    }
}
