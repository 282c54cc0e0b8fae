use std::path::Path;

use anyhow::Context;
use pact_config::PactConfig;
use pact_core::enums::Pool;
use serde_json::{Map, Value};

use crate::cli::GlobalFlags;
use crate::commands::shared::input::{into_object, read_json_file};
use crate::context::{AppContext, gap_analyzer};
use crate::output::output;

/// Handle `pact gaps` over the stored current partners.
pub async fn handle_stored(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let analyzer = gap_analyzer(&ctx.config)?;
    let partners = ctx.store.partners(Pool::Current).await?;
    output(&analyzer.identify_gaps(&partners), flags.format)
}

/// Handle `pact gaps --file`.
pub fn handle_file(path: &Path, config: &PactConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let analyzer = gap_analyzer(config)?;
    let Value::Array(items) = read_json_file(path)? else {
        anyhow::bail!("{} must contain a JSON array of partners", path.display());
    };
    let partners = items
        .into_iter()
        .enumerate()
        .map(|(i, item)| into_object(item).with_context(|| format!("partner #{i}")))
        .collect::<anyhow::Result<Vec<Map<String, Value>>>>()?;
    output(&analyzer.identify_gaps(&partners), flags.format)
}
