use std::path::PathBuf;

use clap::Subcommand;

/// Research commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ResearchCommands {
    /// Add a research entry from a JSON object (stdin when neither flag is given).
    Add {
        #[arg(long, conflicts_with = "file")]
        json: Option<String>,
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// List research entries for a partner.
    List { partner_id: String },
}
