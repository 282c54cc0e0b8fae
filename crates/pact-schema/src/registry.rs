//! Central schema registry for all pact types.
//!
//! Schemas are generated once at construction with [`schemars::schema_for!`];
//! validation compiles them with `jsonschema`.

use std::collections::HashMap;

use schemars::schema_for;
use serde_json::Value;

use crate::error::SchemaError;

pub struct SchemaRegistry {
    schemas: HashMap<&'static str, Value>,
}

macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name, schema_for!($ty).to_value());
    };
}

impl SchemaRegistry {
    /// Build a registry with the record, document, result, and analysis
    /// schemas.
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        // --- Records (3) ---
        register!(schemas, "partner", pact_core::entities::Partner);
        register!(schemas, "research_entry", pact_core::entities::ResearchEntry);
        register!(schemas, "history_entry", pact_core::entities::HistoryEntry);

        // --- Persisted documents (3) ---
        register!(
            schemas,
            "partners_document",
            pact_core::documents::PartnersDocument
        );
        register!(
            schemas,
            "research_document",
            pact_core::documents::ResearchDocument
        );
        register!(
            schemas,
            "history_document",
            pact_core::documents::HistoryDocument
        );

        // --- Store results (5) ---
        register!(
            schemas,
            "partner_result",
            pact_core::responses::OpResult<pact_core::entities::Partner>
        );
        register!(
            schemas,
            "research_result",
            pact_core::responses::OpResult<pact_core::entities::ResearchEntry>
        );
        register!(
            schemas,
            "partner_lookup_result",
            pact_core::responses::OpResult<pact_core::responses::PartnerLookup>
        );
        register!(
            schemas,
            "partner_research",
            pact_core::responses::PartnerResearch
        );
        register!(schemas, "history_window", pact_core::responses::HistoryWindow);

        // --- Analysis inputs and outputs (7) ---
        register!(schemas, "candidate_scores", pact_analysis::CandidateScores);
        register!(schemas, "fit_score", pact_analysis::FitScore);
        register!(
            schemas,
            "portfolio_analysis",
            pact_analysis::PortfolioAnalysis
        );
        register!(schemas, "gap_analysis", pact_analysis::GapAnalysis);
        register!(schemas, "query_analysis", pact_analysis::QueryAnalysis);
        register!(schemas, "search_result", pact_analysis::SearchResult);
        register!(
            schemas,
            "results_evaluation",
            pact_analysis::ResultsEvaluation
        );

        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` listing every violation.
    pub fn validate(&self, name: &str, instance: &Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Compilation(format!("{name}: {e}")))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{e}"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// All registered schema names, sorted.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
