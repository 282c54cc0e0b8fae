//! Weighted multi-criteria partner fit scoring.
//!
//! The overall score is `Σ raw × weight` over the configured criteria,
//! rounded to two decimals. The tier is chosen from the rounded score so a
//! reported 8.5 is always excellent.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use pact_config::{RangePolicy, ScoringConfig};
use pact_core::ValidationError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

const MIN_RAW_SCORE: f64 = 0.0;
const MAX_RAW_SCORE: f64 = 10.0;

/// A candidate partner and its raw score (0 to 10) per criterion.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CandidateScores {
    pub name: String,
    pub criteria_scores: BTreeMap<String, f64>,
}

// ---------------------------------------------------------------------------
// RecommendationTier
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationTier {
    Excellent,
    Strong,
    Good,
    Moderate,
    Poor,
}

impl RecommendationTier {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Strong => "strong",
            Self::Good => "good",
            Self::Moderate => "moderate",
            Self::Poor => "poor",
        }
    }

    /// Human-readable recommendation for the tier.
    #[must_use]
    pub const fn recommendation(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent fit - Pursue partnership immediately",
            Self::Strong => "Strong fit - Highly recommended for partnership",
            Self::Good => "Good fit - Consider for partnership",
            Self::Moderate => "Moderate fit - Explore specific opportunities",
            Self::Poor => "Poor fit - Not recommended at this time",
        }
    }
}

impl fmt::Display for RecommendationTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// FitScore
// ---------------------------------------------------------------------------

/// One criterion's contribution to the overall score.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CriterionBreakdown {
    pub criterion: String,
    pub description: String,
    pub raw_score: f64,
    pub weight: f64,
    pub weighted_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct FitScore {
    pub partner_name: String,
    pub overall_score: f64,
    /// In configured criterion order.
    pub score_breakdown: Vec<CriterionBreakdown>,
    pub tier: RecommendationTier,
    pub recommendation: String,
}

/// Scores candidates against a validated [`ScoringConfig`].
#[derive(Debug, Clone)]
pub struct FitScoreEngine {
    config: ScoringConfig,
}

impl FitScoreEngine {
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidConfig` if the weights do not sum to
    /// 1.0 or the tier thresholds are not descending.
    pub fn new(config: ScoringConfig) -> Result<Self, AnalysisError> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub const fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score one candidate.
    ///
    /// Scores for criteria that are not configured are ignored.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MissingField` if a configured criterion has
    /// no score, or `ValidationError::ScoreOutOfRange` for a non-finite score
    /// or, under [`RangePolicy::Reject`], a score outside `[0, 10]`.
    pub fn calculate_score(&self, candidate: &CandidateScores) -> Result<FitScore, AnalysisError> {
        let mut total = 0.0;
        let mut score_breakdown = Vec::with_capacity(self.config.criteria.len());

        for criterion in &self.config.criteria {
            let raw = *candidate
                .criteria_scores
                .get(&criterion.name)
                .ok_or_else(|| ValidationError::missing("criteria_scores", &criterion.name))?;
            let raw_score = self.check_range(&criterion.name, raw)?;
            let weighted_score = raw_score * criterion.weight;
            total += weighted_score;

            score_breakdown.push(CriterionBreakdown {
                criterion: criterion.name.clone(),
                description: criterion.description.clone(),
                raw_score,
                weight: criterion.weight,
                weighted_score,
            });
        }

        let overall_score = round2(total);
        let tier = self.tier_for(overall_score);
        Ok(FitScore {
            partner_name: candidate.name.clone(),
            overall_score,
            score_breakdown,
            tier,
            recommendation: tier.recommendation().to_string(),
        })
    }

    /// Score every candidate and sort best first. Equal scores are ordered
    /// by partner name.
    ///
    /// # Errors
    ///
    /// Returns the first candidate's error, if any; see
    /// [`FitScoreEngine::calculate_score`].
    pub fn rank(&self, candidates: &[CandidateScores]) -> Result<Vec<FitScore>, AnalysisError> {
        let mut scores = candidates
            .iter()
            .map(|candidate| self.calculate_score(candidate))
            .collect::<Result<Vec<_>, _>>()?;
        scores.sort_by(|a, b| {
            b.overall_score
                .partial_cmp(&a.overall_score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.partner_name.cmp(&b.partner_name))
        });
        Ok(scores)
    }

    /// Tier for an overall score. Thresholds are inclusive lower bounds.
    #[must_use]
    pub fn tier_for(&self, score: f64) -> RecommendationTier {
        let tiers = &self.config.tiers;
        if score >= tiers.excellent {
            RecommendationTier::Excellent
        } else if score >= tiers.strong {
            RecommendationTier::Strong
        } else if score >= tiers.good {
            RecommendationTier::Good
        } else if score >= tiers.moderate {
            RecommendationTier::Moderate
        } else {
            RecommendationTier::Poor
        }
    }

    fn check_range(&self, criterion: &str, score: f64) -> Result<f64, ValidationError> {
        let out_of_range = || ValidationError::ScoreOutOfRange {
            criterion: criterion.to_string(),
            score,
        };
        if !score.is_finite() {
            return Err(out_of_range());
        }
        if (MIN_RAW_SCORE..=MAX_RAW_SCORE).contains(&score) {
            return Ok(score);
        }
        match self.config.range_policy {
            RangePolicy::Reject => Err(out_of_range()),
            RangePolicy::Clamp => {
                tracing::debug!(criterion, score, "clamping out-of-range score");
                Ok(score.clamp(MIN_RAW_SCORE, MAX_RAW_SCORE))
            }
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    const CRITERIA: [&str; 6] = [
        "brand_alignment",
        "financial_health",
        "audience_overlap",
        "partnership_history",
        "activation_potential",
        "exclusivity_value",
    ];

    fn engine() -> FitScoreEngine {
        FitScoreEngine::new(ScoringConfig::default()).unwrap()
    }

    fn uniform(name: &str, score: f64) -> CandidateScores {
        CandidateScores {
            name: name.to_string(),
            criteria_scores: CRITERIA.iter().map(|c| ((*c).to_string(), score)).collect(),
        }
    }

    #[test]
    fn perfect_scores_are_excellent() {
        let result = engine().calculate_score(&uniform("TechCorp Inc.", 10.0)).unwrap();
        assert_eq!(result.overall_score, 10.0);
        assert_eq!(result.tier, RecommendationTier::Excellent);
        assert_eq!(
            result.recommendation,
            "Excellent fit - Pursue partnership immediately"
        );
        assert_eq!(result.score_breakdown.len(), 6);
        assert_eq!(result.score_breakdown[0].criterion, "brand_alignment");
        assert_eq!(result.score_breakdown[0].weighted_score, 2.5);
    }

    #[rstest]
    #[case(0.0)]
    #[case(3.0)]
    #[case(5.5)]
    #[case(7.25)]
    #[case(9.0)]
    fn uniform_scores_equal_overall(#[case] score: f64) {
        let result = engine().calculate_score(&uniform("x", score)).unwrap();
        assert!((result.overall_score - score).abs() < 0.005);
    }

    #[rstest]
    #[case(8.5, RecommendationTier::Excellent)]
    #[case(8.49, RecommendationTier::Strong)]
    #[case(7.0, RecommendationTier::Strong)]
    #[case(5.5, RecommendationTier::Good)]
    #[case(4.0, RecommendationTier::Moderate)]
    #[case(3.99, RecommendationTier::Poor)]
    fn tier_thresholds_are_inclusive(#[case] score: f64, #[case] tier: RecommendationTier) {
        assert_eq!(engine().tier_for(score), tier);
    }

    #[test]
    fn exactly_eight_and_a_half_is_excellent() {
        let result = engine().calculate_score(&uniform("x", 8.5)).unwrap();
        assert_eq!(result.overall_score, 8.5);
        assert_eq!(result.tier, RecommendationTier::Excellent);
    }

    #[test]
    fn missing_criterion_is_rejected() {
        let mut candidate = uniform("x", 5.0);
        candidate.criteria_scores.remove("exclusivity_value");
        let err = engine().calculate_score(&candidate).unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::Validation(ValidationError::MissingField { ref field, .. })
                if field == "exclusivity_value"
        ));
    }

    #[test]
    fn out_of_range_rejected_by_default() {
        let mut candidate = uniform("x", 5.0);
        candidate.criteria_scores.insert("brand_alignment".into(), 11.0);
        let err = engine().calculate_score(&candidate).unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::Validation(ValidationError::ScoreOutOfRange { .. })
        ));
    }

    #[test]
    fn out_of_range_clamped_when_configured() {
        let config = ScoringConfig {
            range_policy: RangePolicy::Clamp,
            ..ScoringConfig::default()
        };
        let engine = FitScoreEngine::new(config).unwrap();
        let mut candidate = uniform("x", 10.0);
        candidate.criteria_scores.insert("brand_alignment".into(), 40.0);
        candidate.criteria_scores.insert("financial_health".into(), -3.0);

        let result = engine.calculate_score(&candidate).unwrap();
        assert_eq!(result.score_breakdown[0].raw_score, 10.0);
        assert_eq!(result.score_breakdown[1].raw_score, 0.0);
        assert_eq!(result.overall_score, 8.0);
    }

    #[test]
    fn nan_is_rejected_even_when_clamping() {
        let config = ScoringConfig {
            range_policy: RangePolicy::Clamp,
            ..ScoringConfig::default()
        };
        let engine = FitScoreEngine::new(config).unwrap();
        let mut candidate = uniform("x", 5.0);
        candidate.criteria_scores.insert("audience_overlap".into(), f64::NAN);
        assert!(engine.calculate_score(&candidate).is_err());
    }

    #[test]
    fn unbalanced_weights_fail_construction() {
        let mut config = ScoringConfig::default();
        config.criteria[0].weight = 0.9;
        assert!(matches!(
            FitScoreEngine::new(config),
            Err(AnalysisError::InvalidConfig(_))
        ));
    }

    #[test]
    fn rank_sorts_descending_then_by_name() {
        let ranked = engine()
            .rank(&[
                uniform("Beta", 6.0),
                uniform("Gamma", 9.0),
                uniform("Alpha", 6.0),
            ])
            .unwrap();
        let names: Vec<&str> = ranked.iter().map(|s| s.partner_name.as_str()).collect();
        assert_eq!(names, ["Gamma", "Alpha", "Beta"]);
    }
}
