//! Query refiner vocabularies and thresholds.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Name of the term category whose hits count as general partnership terms.
pub const GENERAL_TERMS: &str = "general";

/// A named list of partnership terms.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct TermCategory {
    pub name: String,
    pub terms: Vec<String>,
}

/// Phrases that signal a good search result, by category.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct QualityIndicators {
    pub relevance: Vec<String>,
    pub recency: Vec<String>,
    pub specificity: Vec<String>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn category(name: &str, terms: &[&str]) -> TermCategory {
    TermCategory {
        name: name.to_string(),
        terms: strings(terms),
    }
}

fn default_search_operators() -> Vec<String> {
    strings(&["-", "site:", "filetype:", "intitle:"])
}

fn default_term_categories() -> Vec<TermCategory> {
    vec![
        category(
            GENERAL_TERMS,
            &["partnership", "sponsorship", "collaboration", "alliance", "sponsor"],
        ),
        category(
            "sports",
            &[
                "sports sponsorship",
                "team sponsor",
                "arena naming rights",
                "jersey sponsor",
                "official partner",
                "sports marketing",
                "fan engagement",
            ],
        ),
        category(
            "financial",
            &[
                "financial services partner",
                "banking partner",
                "payment partner",
                "financial sponsor",
                "credit card partner",
            ],
        ),
        category(
            "technology",
            &[
                "technology partner",
                "tech sponsor",
                "innovation partner",
                "digital transformation",
                "tech alliance",
            ],
        ),
        category(
            "media",
            &[
                "media rights",
                "broadcast partner",
                "streaming partner",
                "content partnership",
                "media sponsor",
            ],
        ),
    ]
}

impl Default for QualityIndicators {
    fn default() -> Self {
        Self {
            relevance: strings(&[
                "partnership details",
                "sponsorship agreement",
                "deal terms",
                "partnership announcement",
                "sponsor agreement",
            ]),
            recency: strings(&["recent", "new", "announced", "latest", "updated"]),
            specificity: strings(&[
                "specific terms",
                "contract details",
                "partnership value",
                "agreement length",
                "specific benefits",
            ]),
        }
    }
}

const fn default_min_word_count() -> usize {
    3
}

const fn default_quote_word_threshold() -> usize {
    3
}

const fn default_min_average_relevance() -> f64 {
    5.0
}

const fn default_min_indicator_ratio() -> f64 {
    0.3
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct RefinerConfig {
    /// Substrings that mark a query as using search operators.
    #[serde(default = "default_search_operators")]
    pub search_operators: Vec<String>,

    /// Partnership vocabulary. The `general` category feeds query advisories;
    /// every category feeds result scoring.
    #[serde(default = "default_term_categories")]
    pub term_categories: Vec<TermCategory>,

    #[serde(default)]
    pub quality_indicators: QualityIndicators,

    /// Queries with fewer words are flagged as too short.
    #[serde(default = "default_min_word_count")]
    pub min_word_count: usize,

    /// Unquoted queries with more words than this get a quoting advisory.
    #[serde(default = "default_quote_word_threshold")]
    pub quote_word_threshold: usize,

    /// Result sets averaging below this score are flagged.
    #[serde(default = "default_min_average_relevance")]
    pub min_average_relevance: f64,

    /// Indicator hits below this fraction of the result count are flagged.
    #[serde(default = "default_min_indicator_ratio")]
    pub min_indicator_ratio: f64,
}

impl Default for RefinerConfig {
    fn default() -> Self {
        Self {
            search_operators: default_search_operators(),
            term_categories: default_term_categories(),
            quality_indicators: QualityIndicators::default(),
            min_word_count: default_min_word_count(),
            quote_word_threshold: default_quote_word_threshold(),
            min_average_relevance: default_min_average_relevance(),
            min_indicator_ratio: default_min_indicator_ratio(),
        }
    }
}

impl RefinerConfig {
    /// Terms of the general category, or none when it is not configured.
    #[must_use]
    pub fn general_terms(&self) -> &[String] {
        self.term_categories
            .iter()
            .find(|c| c.name == GENERAL_TERMS)
            .map_or(&[], |c| c.terms.as_slice())
    }

    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a threshold is negative or not
    /// finite, or a configured term is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.min_average_relevance.is_finite() || self.min_average_relevance < 0.0 {
            return Err(ConfigError::invalid(
                "refiner.min_average_relevance",
                "must be a non-negative number",
            ));
        }
        if !self.min_indicator_ratio.is_finite() || self.min_indicator_ratio < 0.0 {
            return Err(ConfigError::invalid(
                "refiner.min_indicator_ratio",
                "must be a non-negative number",
            ));
        }
        let all_terms = self
            .term_categories
            .iter()
            .flat_map(|c| c.terms.iter())
            .chain(&self.quality_indicators.relevance)
            .chain(&self.quality_indicators.recency)
            .chain(&self.quality_indicators.specificity)
            .chain(&self.search_operators);
        for term in all_terms {
            if term.is_empty() {
                return Err(ConfigError::invalid("refiner", "terms must not be empty"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = RefinerConfig::default();
        assert_eq!(config.general_terms().len(), 5);
        assert_eq!(config.term_categories.len(), 5);
        assert_eq!(config.quality_indicators.recency.len(), 5);
        assert_eq!(config.min_word_count, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn missing_general_category_yields_no_terms() {
        let mut config = RefinerConfig::default();
        config.term_categories.retain(|c| c.name != GENERAL_TERMS);
        assert!(config.general_terms().is_empty());
    }

    #[test]
    fn empty_term_is_rejected() {
        let mut config = RefinerConfig::default();
        config.quality_indicators.recency.push(String::new());
        assert!(config.validate().is_err());
    }
}
