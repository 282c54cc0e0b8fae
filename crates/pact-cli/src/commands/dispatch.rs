use anyhow::bail;
use pact_config::PactConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command that needs the record store.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Partner { action } => commands::partner::handle(&action, ctx, flags).await,
        Commands::Research { action } => commands::research::handle(&action, ctx, flags).await,
        Commands::History => commands::history::handle(ctx, flags).await,
        Commands::Gaps(args) if args.file.is_none() => {
            commands::gaps::handle_stored(ctx, flags).await
        }
        other => dispatch_stateless(other, &ctx.config, flags),
    }
}

/// Dispatch a command that works on its inputs alone.
pub fn dispatch_stateless(
    command: Commands,
    config: &PactConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Score(args) => commands::score::handle(&args, config, flags),
        Commands::Gaps(args) => match &args.file {
            Some(path) => commands::gaps::handle_file(path, config, flags),
            None => bail!("gap analysis of stored partners needs the record store"),
        },
        Commands::Query { action } => commands::query::handle(&action, config, flags),
        Commands::Schema(args) => commands::schema::handle(&args, flags),
        Commands::Partner { .. } | Commands::Research { .. } | Commands::History => {
            bail!("this command needs the record store")
        }
    }
}
