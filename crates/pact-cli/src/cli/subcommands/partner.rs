use std::path::PathBuf;

use clap::Subcommand;

/// Partner commands.
#[derive(Clone, Debug, Subcommand)]
pub enum PartnerCommands {
    /// Add a partner from a JSON object (stdin when neither flag is given).
    Add {
        /// current or potential
        #[arg(long, default_value = "potential")]
        pool: String,
        #[arg(long, conflicts_with = "file")]
        json: Option<String>,
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Get a partner by ID from either pool.
    Get { id: String },
    /// List partners in a pool.
    List {
        #[arg(long, default_value = "current")]
        pool: String,
    },
}
