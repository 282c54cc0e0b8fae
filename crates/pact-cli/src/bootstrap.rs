use anyhow::Context;
use pact_config::PactConfig;

use crate::cli::GlobalFlags;

/// Load `.env`, then the layered config, then apply CLI overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<PactConfig> {
    let mut config = PactConfig::load_with_dotenv().context("failed to load pact configuration")?;
    apply_overrides(&mut config, flags);
    Ok(config)
}

fn apply_overrides(config: &mut PactConfig, flags: &GlobalFlags) {
    if let Some(dir) = &flags.data_dir {
        tracing::debug!(data_dir = %dir.display(), "data directory overridden on command line");
        config.store.data_dir.clone_from(dir);
    }
}
