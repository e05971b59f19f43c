//! Weighted score aggregation
//!
//! # Scoring Formula
//!
//! ```text
//! max   = Σ weight(metric)                  over evaluated metrics
//! total = Σ weight(metric) × credit(grade)  where credit is 1 / factor / 0
//! score = round(total / max × 100), or 0 when max = 0
//! ```
//!
//! Results are folded independently of their order, so reordering a report
//! never changes its score.

use crate::types::{MetricKind, MetricResult};

/// A metric and its share of the 100-point score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricDefinition {
    pub metric: MetricKind,
    pub weight: u32,
}

/// Weights for every metric; they add up to 100
pub const METRIC_DEFINITIONS: [MetricDefinition; 11] = [
    MetricDefinition { metric: MetricKind::PageTitle, weight: 15 },
    MetricDefinition { metric: MetricKind::MetaDescription, weight: 15 },
    MetricDefinition { metric: MetricKind::H1Tag, weight: 15 },
    MetricDefinition { metric: MetricKind::Subheadings, weight: 10 },
    MetricDefinition { metric: MetricKind::ImageAlt, weight: 10 },
    MetricDefinition { metric: MetricKind::KeywordDensity, weight: 5 },
    MetricDefinition { metric: MetricKind::ContentLength, weight: 10 },
    MetricDefinition { metric: MetricKind::InternalLinks, weight: 5 },
    MetricDefinition { metric: MetricKind::ExternalLinks, weight: 5 },
    MetricDefinition { metric: MetricKind::UrlFriendliness, weight: 5 },
    MetricDefinition { metric: MetricKind::Https, weight: 5 },
];

/// Weight of a metric, `None` if it has no definition
pub fn weight_of(metric: MetricKind) -> Option<u32> {
    METRIC_DEFINITIONS
        .iter()
        .find(|definition| definition.metric == metric)
        .map(|definition| definition.weight)
}

/// Running sums of a score fold
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoreBreakdown {
    pub total: f64,
    pub max: f64,
}

impl ScoreBreakdown {
    /// Add one result's contribution
    pub fn add(mut self, result: &MetricResult) -> Self {
        if let Some(weight) = weight_of(result.metric) {
            let weight = f64::from(weight);
            self.max += weight;
            self.total += weight * result.grade().credit();
        }
        self
    }

    /// Normalized score, rounded half up and clamped to `0..=100`
    pub fn final_score(&self) -> u8 {
        if self.max <= 0.0 {
            return 0;
        }
        let score = (self.total * 100.0 / self.max).round();
        score.clamp(0.0, 100.0) as u8
    }
}

/// Fold results into their running sums
pub fn breakdown(results: &[MetricResult]) -> ScoreBreakdown {
    results
        .iter()
        .fold(ScoreBreakdown::default(), ScoreBreakdown::add)
}

/// Final 0-100 score for a set of results
pub fn aggregate(results: &[MetricResult]) -> u8 {
    breakdown(results).final_score()
}
