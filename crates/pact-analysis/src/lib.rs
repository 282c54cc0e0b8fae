//! # pact-analysis
//!
//! Read-only analytics over partnership records:
//!
//! - [`FitScoreEngine`]: weighted multi-criteria fit score and recommendation tier
//! - [`GapAnalyzer`]: industry distribution of a portfolio against benchmarks
//! - [`QueryRefiner`]: heuristic quality signals for research search queries
//!   and their results
//!
//! Every analyzer is built from an immutable configuration section and holds
//! no mutable state, so one instance can be shared freely across threads.

pub mod error;
pub mod fit_score;
pub mod gaps;
pub mod refiner;

pub use error::AnalysisError;
pub use fit_score::{CandidateScores, FitScore, FitScoreEngine, RecommendationTier};
pub use gaps::{GapAnalysis, GapAnalyzer, GapRecord, PortfolioAnalysis, PortfolioMember};
pub use refiner::{QueryAnalysis, QueryRefiner, ResultsEvaluation, SearchResult};
