//! Search query refinement heuristics.
//!
//! Matching is plain case-insensitive substring search against the
//! configured vocabularies. Nothing here is stateful.

use std::fmt;

use pact_config::{GENERAL_TERMS, RefinerConfig};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

const MAX_RELEVANCE_SCORE: u32 = 10;
const TERM_HIT_POINTS: u32 = 2;
const RELEVANCE_POINTS: u32 = 3;
const SPECIFICITY_POINTS: u32 = 3;
const RECENCY_POINTS: u32 = 2;

// ---------------------------------------------------------------------------
// Issue kinds
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryIssueKind {
    TooShort,
    ConsiderQuoting,
    MissingOperators,
    MissingPartnershipTerms,
}

impl QueryIssueKind {
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::TooShort => "Query is too short and may return overly broad results",
            Self::ConsiderQuoting => "Consider using quotes for key phrases to improve precision",
            Self::MissingOperators => "Query lacks search operators that could improve results",
            Self::MissingPartnershipTerms => "Query lacks specific partnership-related terminology",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ResultIssueKind {
    LowRelevance,
    LacksSpecificity,
    LacksRecency,
}

impl ResultIssueKind {
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::LowRelevance => "Results have low overall relevance to partnership research",
            Self::LacksSpecificity => "Results lack specific partnership details",
            Self::LacksRecency => "Results may not include recent partnership information",
        }
    }
}

/// An advisory with a stable code and a readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Issue<K> {
    pub kind: K,
    pub message: String,
}

impl<K> fmt::Display for Issue<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<QueryIssueKind> for Issue<QueryIssueKind> {
    fn from(kind: QueryIssueKind) -> Self {
        Self {
            kind,
            message: kind.message().to_string(),
        }
    }
}

impl From<ResultIssueKind> for Issue<ResultIssueKind> {
    fn from(kind: ResultIssueKind) -> Self {
        Self {
            kind,
            message: kind.message().to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Query analysis
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct QueryComponents {
    /// Length in characters.
    pub length: usize,
    pub word_count: usize,
    pub has_quotes: bool,
    pub has_operators: bool,
    /// Matched terms from the industry-specific categories.
    pub industry_terms: Vec<String>,
    /// Matched general partnership terms.
    pub partnership_terms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct QueryAnalysis {
    pub query: String,
    pub components: QueryComponents,
    pub potential_issues: Vec<Issue<QueryIssueKind>>,
}

// ---------------------------------------------------------------------------
// Result evaluation
// ---------------------------------------------------------------------------

/// One search hit as returned by a search tool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SearchResult {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub snippet: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct IndicatorFlags {
    pub relevance: bool,
    pub recency: bool,
    pub specificity: bool,
}

/// Indicator matches summed over all results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct IndicatorCounts {
    pub relevance: usize,
    pub recency: usize,
    pub specificity: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ResultScore {
    pub title: String,
    /// 0 to 10.
    pub relevance_score: u32,
    pub quality_indicators: IndicatorFlags,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ResultsEvaluation {
    pub result_count: usize,
    pub average_relevance: f64,
    pub quality_indicator_counts: IndicatorCounts,
    pub result_relevance: Vec<ResultScore>,
    pub result_issues: Vec<Issue<ResultIssueKind>>,
}

// ---------------------------------------------------------------------------
// QueryRefiner
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct QueryRefiner {
    config: RefinerConfig,
}

impl QueryRefiner {
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidConfig` if a threshold is negative or a
    /// vocabulary contains an empty term.
    pub fn new(config: RefinerConfig) -> Result<Self, AnalysisError> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub const fn config(&self) -> &RefinerConfig {
        &self.config
    }

    /// Break a query into components and list advisories.
    #[must_use]
    pub fn analyze_query(&self, query: &str) -> QueryAnalysis {
        let lowered = query.to_lowercase();
        let word_count = query.split_whitespace().count();
        let has_quotes = query.contains('"');
        let has_operators = self
            .config
            .search_operators
            .iter()
            .any(|op| query.contains(op.as_str()));

        let partnership_terms = matching(self.config.general_terms(), &lowered);
        let industry_terms = self
            .config
            .term_categories
            .iter()
            .filter(|c| c.name != GENERAL_TERMS)
            .flat_map(|c| matching(&c.terms, &lowered))
            .collect();

        let mut issues = Vec::new();
        if word_count < self.config.min_word_count {
            issues.push(QueryIssueKind::TooShort);
        }
        if !has_quotes && word_count > self.config.quote_word_threshold {
            issues.push(QueryIssueKind::ConsiderQuoting);
        }
        if !has_operators {
            issues.push(QueryIssueKind::MissingOperators);
        }
        if partnership_terms.is_empty() {
            issues.push(QueryIssueKind::MissingPartnershipTerms);
        }

        QueryAnalysis {
            query: query.to_string(),
            components: QueryComponents {
                length: query.chars().count(),
                word_count,
                has_quotes,
                has_operators,
                industry_terms,
                partnership_terms,
            },
            potential_issues: issues.into_iter().map(Issue::from).collect(),
        }
    }

    /// Score each result 0 to 10 and flag weaknesses of the result set.
    #[must_use]
    pub fn evaluate_results(&self, results: &[SearchResult]) -> ResultsEvaluation {
        let indicators = &self.config.quality_indicators;
        let mut counts = IndicatorCounts::default();
        let mut result_relevance = Vec::with_capacity(results.len());

        for result in results {
            let content = format!("{} {}", result.title, result.snippet).to_lowercase();

            let relevance = count_matches(&indicators.relevance, &content);
            let recency = count_matches(&indicators.recency, &content);
            let specificity = count_matches(&indicators.specificity, &content);
            counts.relevance += relevance;
            counts.recency += recency;
            counts.specificity += specificity;

            let flags = IndicatorFlags {
                relevance: relevance > 0,
                recency: recency > 0,
                specificity: specificity > 0,
            };

            let term_hits: usize = self
                .config
                .term_categories
                .iter()
                .map(|c| count_matches(&c.terms, &content))
                .sum();
            let term_points = u32::try_from(term_hits)
                .unwrap_or(u32::MAX)
                .saturating_mul(TERM_HIT_POINTS);
            let relevance_score = term_points
                .saturating_add(u32::from(flags.relevance) * RELEVANCE_POINTS)
                .saturating_add(u32::from(flags.specificity) * SPECIFICITY_POINTS)
                .saturating_add(u32::from(flags.recency) * RECENCY_POINTS)
                .min(MAX_RELEVANCE_SCORE);

            result_relevance.push(ResultScore {
                title: result.title.clone(),
                relevance_score,
                quality_indicators: flags,
            });
        }

        let average_relevance = average(&result_relevance);
        let expected = ratio_of(results.len(), self.config.min_indicator_ratio);

        let mut issues = Vec::new();
        if average_relevance < self.config.min_average_relevance {
            issues.push(ResultIssueKind::LowRelevance);
        }
        if as_f64(counts.specificity) < expected {
            issues.push(ResultIssueKind::LacksSpecificity);
        }
        if as_f64(counts.recency) < expected {
            issues.push(ResultIssueKind::LacksRecency);
        }

        ResultsEvaluation {
            result_count: results.len(),
            average_relevance,
            quality_indicator_counts: counts,
            result_relevance,
            result_issues: issues.into_iter().map(Issue::from).collect(),
        }
    }
}

fn matching(terms: &[String], lowered: &str) -> Vec<String> {
    terms
        .iter()
        .filter(|term| lowered.contains(&term.to_lowercase()))
        .cloned()
        .collect()
}

fn count_matches(terms: &[String], lowered: &str) -> usize {
    terms
        .iter()
        .filter(|term| lowered.contains(&term.to_lowercase()))
        .count()
}

fn average(scores: &[ResultScore]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    let total: u32 = scores.iter().map(|s| s.relevance_score).sum();
    f64::from(total) / as_f64(scores.len())
}

fn ratio_of(count: usize, ratio: f64) -> f64 {
    as_f64(count) * ratio
}

#[allow(clippy::cast_precision_loss)]
const fn as_f64(value: usize) -> f64 {
    value as f64
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn refiner() -> QueryRefiner {
        QueryRefiner::new(RefinerConfig::default()).unwrap()
    }

    fn kinds(analysis: &QueryAnalysis) -> Vec<QueryIssueKind> {
        analysis.potential_issues.iter().map(|i| i.kind).collect()
    }

    #[test]
    fn short_bare_query_gets_every_applicable_advisory() {
        let analysis = refiner().analyze_query("TechCorp news");
        assert_eq!(analysis.components.word_count, 2);
        assert_eq!(analysis.components.length, 13);
        assert_eq!(
            kinds(&analysis),
            [
                QueryIssueKind::TooShort,
                QueryIssueKind::MissingOperators,
                QueryIssueKind::MissingPartnershipTerms,
            ]
        );
        assert_eq!(
            analysis.potential_issues[0].message,
            "Query is too short and may return overly broad results"
        );
    }

    #[test]
    fn long_unquoted_query_should_be_quoted() {
        let analysis = refiner().analyze_query("TechCorp Sponsorship history with sports teams");
        assert_eq!(analysis.components.partnership_terms, ["sponsorship", "sponsor"]);
        assert_eq!(
            kinds(&analysis),
            [QueryIssueKind::ConsiderQuoting, QueryIssueKind::MissingOperators]
        );
    }

    #[test]
    fn refined_query_is_clean() {
        let analysis = refiner()
            .analyze_query(r#""TechCorp" sponsorship "arena naming rights" site:techcorp.com"#);
        assert!(analysis.components.has_quotes);
        assert!(analysis.components.has_operators);
        assert_eq!(analysis.components.industry_terms, ["arena naming rights"]);
        assert!(analysis.potential_issues.is_empty());
    }

    #[test]
    fn scores_results_by_indicators_and_terms() {
        let results = [
            SearchResult {
                title: "TechCorp announced new sponsorship agreement".into(),
                snippet: "Contract details include partnership value of $10M".into(),
                url: "https://example.com/a".into(),
            },
            SearchResult {
                title: "Quarterly earnings".into(),
                snippet: "Revenue grew".into(),
                url: "https://example.com/b".into(),
            },
        ];

        let evaluation = refiner().evaluate_results(&results);
        assert_eq!(evaluation.result_count, 2);

        let first = &evaluation.result_relevance[0];
        assert_eq!(first.relevance_score, 10);
        assert_eq!(
            first.quality_indicators,
            IndicatorFlags {
                relevance: true,
                recency: true,
                specificity: true,
            }
        );

        let second = &evaluation.result_relevance[1];
        assert_eq!(second.relevance_score, 0);
        assert_eq!(evaluation.average_relevance, 5.0);
        assert_eq!(evaluation.quality_indicator_counts.specificity, 2);
        assert!(evaluation.result_issues.is_empty());
    }

    #[test]
    fn weak_results_are_flagged() {
        let results = [SearchResult {
            title: "Company profile".into(),
            snippet: "A sponsor of local events".into(),
            url: String::new(),
        }];
        let evaluation = refiner().evaluate_results(&results);
        assert_eq!(evaluation.result_relevance[0].relevance_score, 2);
        let kinds: Vec<ResultIssueKind> = evaluation.result_issues.iter().map(|i| i.kind).collect();
        assert_eq!(
            kinds,
            [
                ResultIssueKind::LowRelevance,
                ResultIssueKind::LacksSpecificity,
                ResultIssueKind::LacksRecency,
            ]
        );
    }

    #[test]
    fn empty_results_only_report_low_relevance() {
        let evaluation = refiner().evaluate_results(&[]);
        assert_eq!(evaluation.average_relevance, 0.0);
        let kinds: Vec<ResultIssueKind> = evaluation.result_issues.iter().map(|i| i.kind).collect();
        assert_eq!(kinds, [ResultIssueKind::LowRelevance]);
    }
}
