use std::path::PathBuf;

use clap::Subcommand;

/// Search query refinement commands.
#[derive(Clone, Debug, Subcommand)]
pub enum QueryCommands {
    /// Analyze a search query.
    Analyze { text: String },
    /// Evaluate search results (JSON array of `{title, snippet, url}`; `-` reads stdin).
    Evaluate { file: PathBuf },
}
