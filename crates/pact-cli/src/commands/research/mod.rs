use pact_core::responses::PartnerResearch;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ResearchCommands;
use crate::commands::shared::input::read_object;
use crate::commands::shared::limit::apply_limit;
use crate::context::AppContext;
use crate::output::output;

/// Handle `pact research`.
pub async fn handle(
    action: &ResearchCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ResearchCommands::Add { json, file } => {
            let data = read_object(json.as_deref(), file.as_deref())?;
            let result = ctx.store.add_research(data).await?;
            output(&result, flags.format)
        }
        ResearchCommands::List { partner_id } => {
            let research = ctx.store.get_research_for_partner(partner_id).await?;
            let research_entries = apply_limit(research.research_entries, flags.limit);
            output(
                &PartnerResearch {
                    research_entries,
                    ..research
                },
                flags.format,
            )
        }
    }
}
