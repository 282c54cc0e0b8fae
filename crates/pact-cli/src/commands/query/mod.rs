use anyhow::Context;
use pact_analysis::SearchResult;
use pact_config::PactConfig;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::QueryCommands;
use crate::commands::shared::input::{one_or_many, read_json_file};
use crate::context::query_refiner;
use crate::output::output;

/// Handle `pact query`.
pub fn handle(action: &QueryCommands, config: &PactConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let refiner = query_refiner(config)?;
    match action {
        QueryCommands::Analyze { text } => output(&refiner.analyze_query(text), flags.format),
        QueryCommands::Evaluate { file } => {
            let results = one_or_many(read_json_file(file)?)
                .into_iter()
                .map(serde_json::from_value::<SearchResult>)
                .collect::<Result<Vec<_>, _>>()
                .context("search results must be objects with title, snippet and url")?;
            output(&refiner.evaluate_results(&results), flags.format)
        }
    }
}
