use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::subcommands::{PartnerCommands, QueryCommands, ResearchCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Current and potential partners.
    Partner {
        #[command(subcommand)]
        action: PartnerCommands,
    },
    /// Partner research entries.
    Research {
        #[command(subcommand)]
        action: ResearchCommands,
    },
    /// Recent additions, oldest first.
    History,
    /// Score and rank candidate partners.
    Score(ScoreArgs),
    /// Industry gap analysis of the current portfolio.
    Gaps(GapsArgs),
    /// Search query and result quality checks.
    Query {
        #[command(subcommand)]
        action: QueryCommands,
    },
    /// Export JSON Schemas.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ScoreArgs {
    /// JSON file with one candidate or an array of candidates
    /// (`{"name": ..., "criteria_scores": {...}}`); `-` reads stdin.
    pub file: PathBuf,
}

#[derive(Clone, Debug, Args)]
pub struct GapsArgs {
    /// JSON array of partner objects to analyze instead of the stored
    /// current partners.
    #[arg(long)]
    pub file: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Schema name; omit to list all names.
    pub type_name: Option<String>,
}
