//! Audit entry points and report assembly

use crate::document::{DocumentAccessor, HtmlDocument};
use crate::metrics::{AuditContext, evaluate_all};
use crate::rules::RuleTable;
use crate::score;
use crate::types::MetricResult;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;
use url::Url;

/// Errors raised before an audit can start
#[derive(Error, Debug)]
pub enum AuditError {
    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("URL '{0}' has no host")]
    MissingHost(String),
}

/// Coarse reading of a final score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    /// 80 and above
    Good,
    /// 50 to 79
    Fair,
    /// Below 50
    Poor,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => ScoreBand::Good,
            50..=79 => ScoreBand::Fair,
            _ => ScoreBand::Poor,
        }
    }
}

/// The outcome of auditing one page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// URL that was audited
    pub url: String,

    /// One result per metric, in report order
    pub results: Vec<MetricResult>,

    /// Weighted score (0-100)
    pub final_score: u8,
}

impl Report {
    /// Put results into report order and score them
    pub fn assemble(url: &Url, mut results: Vec<MetricResult>) -> Self {
        results.sort_by_key(|result| result.metric.position());
        let final_score = score::aggregate(&results);

        Self {
            url: url.to_string(),
            results,
            final_score,
        }
    }

    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.final_score)
    }
}

/// Parse and check an audit target: it must be absolute and have a host
pub fn parse_page_url(input: &str) -> Result<Url, AuditError> {
    let url = Url::parse(input.trim()).map_err(|source| AuditError::InvalidUrl {
        url: input.to_string(),
        source,
    })?;
    if url.host_str().is_none_or(str::is_empty) {
        return Err(AuditError::MissingHost(input.to_string()));
    }
    Ok(url)
}

/// Audit an already parsed page
pub fn audit(document: &dyn DocumentAccessor, page: &Url, rules: &RuleTable) -> Report {
    let ctx = AuditContext::new(document, page, rules);
    let report = Report::assemble(page, evaluate_all(&ctx));

    info!(url = %report.url, score = report.final_score, "Audit complete");
    report
}

/// Parse raw HTML and audit it as the page at `url`
pub fn audit_html(html: &str, url: &str, rules: &RuleTable) -> Result<Report, AuditError> {
    let page = parse_page_url(url)?;
    let document = HtmlDocument::parse(html);
    Ok(audit(&document, &page, rules))
}
