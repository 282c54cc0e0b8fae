//! Partner fit-score configuration: criteria, weights, tier thresholds.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Weights must sum to 1.0 within this tolerance.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// One weighted scoring criterion.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct CriterionConfig {
    pub name: String,
    pub weight: f64,
    #[serde(default)]
    pub description: String,
}

impl CriterionConfig {
    fn new(name: &str, weight: f64, description: &str) -> Self {
        Self {
            name: name.to_string(),
            weight,
            description: description.to_string(),
        }
    }
}

/// What to do with raw scores outside `[0, 10]`.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RangePolicy {
    /// Fail the call with a validation error.
    #[default]
    Reject,
    /// Clamp into `[0, 10]` and continue.
    Clamp,
}

/// Inclusive lower bounds of each recommendation tier. Anything below
/// `moderate` is poor.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
pub struct TierThresholds {
    pub excellent: f64,
    pub strong: f64,
    pub good: f64,
    pub moderate: f64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            excellent: 8.5,
            strong: 7.0,
            good: 5.5,
            moderate: 4.0,
        }
    }
}

fn default_criteria() -> Vec<CriterionConfig> {
    vec![
        CriterionConfig::new(
            "brand_alignment",
            0.25,
            "How well the partner's brand aligns with the organisation's values and image",
        ),
        CriterionConfig::new(
            "financial_health",
            0.20,
            "The partner's financial stability and growth potential",
        ),
        CriterionConfig::new(
            "audience_overlap",
            0.20,
            "How much the partner's audience overlaps with the fan base",
        ),
        CriterionConfig::new(
            "partnership_history",
            0.15,
            "The partner's history with sports sponsorships and partnerships",
        ),
        CriterionConfig::new(
            "activation_potential",
            0.10,
            "Potential for creative and engaging partnership activations",
        ),
        CriterionConfig::new(
            "exclusivity_value",
            0.10,
            "Value of category exclusivity and competitive advantage",
        ),
    ]
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ScoringConfig {
    #[serde(default = "default_criteria")]
    pub criteria: Vec<CriterionConfig>,

    #[serde(default)]
    pub range_policy: RangePolicy,

    #[serde(default)]
    pub tiers: TierThresholds,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            criteria: default_criteria(),
            range_policy: RangePolicy::default(),
            tiers: TierThresholds::default(),
        }
    }
}

impl ScoringConfig {
    /// Sum of all criterion weights.
    #[must_use]
    pub fn weight_sum(&self) -> f64 {
        self.criteria.iter().map(|c| c.weight).sum()
    }

    /// Check weights, names, and tier ordering.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if there are no criteria, a name is
    /// empty or repeated, a weight is negative or not finite, the weights do
    /// not sum to 1.0, or the tier thresholds are not strictly descending.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.criteria.is_empty() {
            return Err(ConfigError::invalid("scoring.criteria", "at least one criterion is required"));
        }
        for (i, criterion) in self.criteria.iter().enumerate() {
            if criterion.name.trim().is_empty() {
                return Err(ConfigError::invalid(
                    format!("scoring.criteria[{i}].name"),
                    "must not be empty",
                ));
            }
            if self.criteria[..i].iter().any(|c| c.name == criterion.name) {
                return Err(ConfigError::invalid(
                    format!("scoring.criteria[{i}].name"),
                    format!("duplicate criterion '{}'", criterion.name),
                ));
            }
            if !criterion.weight.is_finite() || criterion.weight < 0.0 {
                return Err(ConfigError::invalid(
                    format!("scoring.criteria[{i}].weight"),
                    format!("must be a non-negative number, got {}", criterion.weight),
                ));
            }
        }

        let sum = self.weight_sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::invalid(
                "scoring.criteria",
                format!("weights must sum to 1.0, got {sum}"),
            ));
        }

        let t = self.tiers;
        if !(t.excellent > t.strong && t.strong > t.good && t.good > t.moderate) {
            return Err(ConfigError::invalid(
                "scoring.tiers",
                "thresholds must be strictly descending: excellent > strong > good > moderate",
            ));
        }
        Ok(())
    }
}
