//! Portfolio gap analysis.
//!
//! Compares the industry mix of a partner portfolio against per-industry
//! benchmark shares. Each benchmark is evaluated on its own; the benchmarks
//! need not sum to 1.

use std::cmp::Ordering;

use pact_config::GapConfig;
use pact_core::entities::Partner;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::AnalysisError;

/// Industry reported for a partner record that has none.
pub const UNKNOWN_INDUSTRY: &str = "Unknown";

/// Anything that can be placed in a portfolio: stored partners or raw
/// caller-supplied partner objects.
pub trait PortfolioMember {
    fn industry(&self) -> Option<&str>;
    fn partnership_type(&self) -> Option<&str>;
}

impl PortfolioMember for Partner {
    fn industry(&self) -> Option<&str> {
        Some(self.industry.as_str())
    }

    fn partnership_type(&self) -> Option<&str> {
        Partner::partnership_type(self)
    }
}

impl PortfolioMember for Map<String, Value> {
    fn industry(&self) -> Option<&str> {
        self.get("industry").and_then(Value::as_str)
    }

    fn partnership_type(&self) -> Option<&str> {
        self.get("partnership_type").and_then(Value::as_str)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct IndustryShare {
    pub industry: String,
    pub count: usize,
    /// `count / total_partners`, or 0 for an empty portfolio.
    pub percentage: f64,
}

/// Industry distribution of a portfolio.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct PortfolioAnalysis {
    pub total_partners: usize,
    /// Every benchmarked industry, in configured order.
    pub industries: Vec<IndustryShare>,
    /// Industries of partners outside the benchmark list, one per partner.
    pub other_industries: Vec<String>,
}

impl PortfolioAnalysis {
    #[must_use]
    pub fn share_of(&self, industry: &str) -> f64 {
        self.industries
            .iter()
            .find(|s| s.industry == industry)
            .map_or(0.0, |s| s.percentage)
    }
}

/// An under-represented industry.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct GapRecord {
    pub industry: String,
    pub current_percentage: f64,
    pub benchmark_percentage: f64,
    /// `benchmark_percentage - current_percentage`, always positive.
    pub gap: f64,
    /// `gap * 10`.
    pub opportunity_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct GapRecommendation {
    pub industry: String,
    pub opportunity_score: f64,
    pub recommendation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PartnershipTypeCount {
    pub partnership_type: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct GapAnalysis {
    pub current_analysis: PortfolioAnalysis,
    /// Ranked by opportunity score, highest first.
    pub industry_gaps: Vec<GapRecord>,
    pub partnership_type_distribution: Vec<PartnershipTypeCount>,
    pub top_recommendations: Vec<GapRecommendation>,
}

#[derive(Debug, Clone)]
pub struct GapAnalyzer {
    config: GapConfig,
}

impl GapAnalyzer {
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidConfig` if a benchmark is outside
    /// `[0, 1]` or an industry is listed twice.
    pub fn new(config: GapConfig) -> Result<Self, AnalysisError> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub const fn config(&self) -> &GapConfig {
        &self.config
    }

    /// Count partners per benchmarked industry and compute each share.
    #[must_use]
    pub fn analyze_portfolio<P: PortfolioMember>(&self, partners: &[P]) -> PortfolioAnalysis {
        let mut counts = vec![0_usize; self.config.benchmarks.len()];
        let mut other_industries = Vec::new();

        for partner in partners {
            let industry = partner.industry().unwrap_or(UNKNOWN_INDUSTRY);
            match self
                .config
                .benchmarks
                .iter()
                .position(|b| b.industry == industry)
            {
                Some(i) => counts[i] += 1,
                None => other_industries.push(industry.to_string()),
            }
        }

        let total_partners = partners.len();
        let industries = self
            .config
            .benchmarks
            .iter()
            .zip(counts)
            .map(|(benchmark, count)| IndustryShare {
                industry: benchmark.industry.clone(),
                count,
                percentage: share(count, total_partners),
            })
            .collect();

        PortfolioAnalysis {
            total_partners,
            industries,
            other_industries,
        }
    }

    /// Full gap analysis: portfolio shares, ranked gaps, partnership-type
    /// counts, and recommendations for the top gaps.
    #[must_use]
    pub fn identify_gaps<P: PortfolioMember>(&self, partners: &[P]) -> GapAnalysis {
        let current_analysis = self.analyze_portfolio(partners);

        let mut industry_gaps: Vec<GapRecord> = self
            .config
            .benchmarks
            .iter()
            .filter_map(|benchmark| {
                let current_percentage = current_analysis.share_of(&benchmark.industry);
                let gap = benchmark.benchmark - current_percentage;
                (gap > 0.0).then(|| GapRecord {
                    industry: benchmark.industry.clone(),
                    current_percentage,
                    benchmark_percentage: benchmark.benchmark,
                    gap,
                    opportunity_score: gap * 10.0,
                })
            })
            .collect();
        industry_gaps.sort_by(|a, b| {
            b.opportunity_score
                .partial_cmp(&a.opportunity_score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.industry.cmp(&b.industry))
        });

        let top_recommendations = industry_gaps
            .iter()
            .take(self.config.top_recommendations)
            .map(|gap| GapRecommendation {
                industry: gap.industry.clone(),
                opportunity_score: gap.opportunity_score,
                recommendation: format!(
                    "Pursue partnerships in the {} sector to address significant gap of {:.1}%",
                    gap.industry,
                    gap.gap * 100.0
                ),
            })
            .collect();

        tracing::debug!(
            partners = current_analysis.total_partners,
            gaps = industry_gaps.len(),
            "identified portfolio gaps"
        );

        GapAnalysis {
            partnership_type_distribution: self.partnership_type_distribution(partners),
            current_analysis,
            industry_gaps,
            top_recommendations,
        }
    }

    /// Partners per known partnership type, in vocabulary order. Partners
    /// with an unknown or missing type are not counted.
    #[must_use]
    pub fn partnership_type_distribution<P: PortfolioMember>(
        &self,
        partners: &[P],
    ) -> Vec<PartnershipTypeCount> {
        self.config
            .partnership_types
            .iter()
            .map(|ptype| PartnershipTypeCount {
                partnership_type: ptype.clone(),
                count: partners
                    .iter()
                    .filter(|p| p.partnership_type() == Some(ptype.as_str()))
                    .count(),
            })
            .collect()
    }
}

#[allow(clippy::cast_precision_loss)]
fn share(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}
