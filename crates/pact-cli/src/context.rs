use anyhow::Context;
use pact_analysis::{FitScoreEngine, GapAnalyzer, QueryRefiner};
use pact_config::PactConfig;
use pact_store::RecordStore;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub store: RecordStore,
    pub config: PactConfig,
}

impl AppContext {
    pub async fn init(config: PactConfig) -> anyhow::Result<Self> {
        let store = RecordStore::open(config.store.clone())
            .await
            .with_context(|| {
                format!(
                    "failed to open record store at {}",
                    config.store.data_dir.display()
                )
            })?;
        Ok(Self { store, config })
    }
}

pub fn fit_score_engine(config: &PactConfig) -> anyhow::Result<FitScoreEngine> {
    FitScoreEngine::new(config.scoring.clone()).context("invalid scoring configuration")
}

pub fn gap_analyzer(config: &PactConfig) -> anyhow::Result<GapAnalyzer> {
    GapAnalyzer::new(config.gaps.clone()).context("invalid gap configuration")
}

pub fn query_refiner(config: &PactConfig) -> anyhow::Result<QueryRefiner> {
    QueryRefiner::new(config.refiner.clone()).context("invalid refiner configuration")
}
