use anyhow::Context;
use pact_analysis::CandidateScores;
use pact_config::PactConfig;
use pact_schema::SchemaRegistry;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ScoreArgs;
use crate::commands::shared::input::{one_or_many, read_json_file};
use crate::commands::shared::limit::apply_limit;
use crate::context::fit_score_engine;
use crate::output::output;

/// Handle `pact score`.
pub fn handle(args: &ScoreArgs, config: &PactConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let engine = fit_score_engine(config)?;
    let schemas = SchemaRegistry::new();

    let candidates = one_or_many(read_json_file(&args.file)?)
        .into_iter()
        .enumerate()
        .map(|(i, value)| {
            schemas
                .validate("candidate_scores", &value)
                .with_context(|| format!("candidate #{i} is malformed"))?;
            serde_json::from_value::<CandidateScores>(value)
                .with_context(|| format!("candidate #{i} is malformed"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let ranked = engine.rank(&candidates)?;
    output(&apply_limit(ranked, flags.limit), flags.format)
}
