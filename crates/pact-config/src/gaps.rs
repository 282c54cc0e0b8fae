//! Portfolio gap analysis configuration: industry benchmarks and the
//! partnership-type vocabulary.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Expected share of a portfolio for one industry, in `[0, 1]`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct IndustryBenchmark {
    pub industry: String,
    pub benchmark: f64,
}

const fn default_top_recommendations() -> usize {
    3
}

fn default_benchmarks() -> Vec<IndustryBenchmark> {
    [
        ("Financial Services", 0.15),
        ("Telecommunications", 0.10),
        ("Technology", 0.12),
        ("Automotive", 0.08),
        ("Apparel & Sportswear", 0.10),
        ("Food & Beverage", 0.12),
        ("Health & Wellness", 0.08),
        ("Travel & Hospitality", 0.06),
        ("Insurance", 0.05),
        ("Energy", 0.04),
        ("Entertainment", 0.05),
        ("Retail", 0.03),
        ("Luxury Goods", 0.02),
    ]
    .into_iter()
    .map(|(industry, benchmark)| IndustryBenchmark {
        industry: industry.to_string(),
        benchmark,
    })
    .collect()
}

fn default_partnership_types() -> Vec<String> {
    [
        "Naming Rights",
        "Jersey Sponsor",
        "Official Partner",
        "Media Partner",
        "Technology Partner",
        "Community Partner",
        "Event Sponsor",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct GapConfig {
    /// Known industries in declaration order, each with its benchmark share.
    /// Shares are evaluated independently and need not sum to 1.0.
    #[serde(default = "default_benchmarks")]
    pub benchmarks: Vec<IndustryBenchmark>,

    /// Partnership types tallied by the type distribution.
    #[serde(default = "default_partnership_types")]
    pub partnership_types: Vec<String>,

    /// How many ranked gaps become recommendations.
    #[serde(default = "default_top_recommendations")]
    pub top_recommendations: usize,
}

impl Default for GapConfig {
    fn default() -> Self {
        Self {
            benchmarks: default_benchmarks(),
            partnership_types: default_partnership_types(),
            top_recommendations: default_top_recommendations(),
        }
    }
}

impl GapConfig {
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if an industry name is empty or
    /// repeated, or a benchmark is outside `[0, 1]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (i, entry) in self.benchmarks.iter().enumerate() {
            if entry.industry.trim().is_empty() {
                return Err(ConfigError::invalid(
                    format!("gaps.benchmarks[{i}].industry"),
                    "must not be empty",
                ));
            }
            if self.benchmarks[..i].iter().any(|b| b.industry == entry.industry) {
                return Err(ConfigError::invalid(
                    format!("gaps.benchmarks[{i}].industry"),
                    format!("duplicate industry '{}'", entry.industry),
                ));
            }
            if !(0.0..=1.0).contains(&entry.benchmark) {
                return Err(ConfigError::invalid(
                    format!("gaps.benchmarks[{i}].benchmark"),
                    format!("must be within [0, 1], got {}", entry.benchmark),
                ));
            }
        }
        Ok(())
    }
}
