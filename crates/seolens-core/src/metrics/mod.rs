//! The metric evaluator suite
//!
//! Each evaluator is a pure function of an [`AuditContext`] returning the
//! [`MetricResult`] for its heuristic. They share nothing but the read-only
//! context, so they can run in any order.

pub mod address;
pub mod content;
pub mod head;
pub mod headings;
pub mod navigation;

use crate::document::DocumentAccessor;
use crate::rules::RuleTable;
use crate::types::MetricResult;
use tracing::debug;
use url::Url;

/// Sentinel detected value for a missing masculine element (el título)
pub const NOT_FOUND_M: &str = "No encontrado";
/// Sentinel detected value for a missing feminine element (la etiqueta)
pub const NOT_FOUND_F: &str = "No encontrada";

/// Everything an evaluator may read
pub struct AuditContext<'a> {
    pub document: &'a dyn DocumentAccessor,
    pub page: &'a Url,
    pub rules: &'a RuleTable,
    body_text: String,
}

impl<'a> AuditContext<'a> {
    pub fn new(document: &'a dyn DocumentAccessor, page: &'a Url, rules: &'a RuleTable) -> Self {
        Self {
            document,
            page,
            rules,
            body_text: document.body_text(),
        }
    }

    /// Lowercased body text, read once per audit
    pub fn body_text(&self) -> &str {
        &self.body_text
    }
}

/// Run every evaluator, in report order
pub fn evaluate_all(ctx: &AuditContext<'_>) -> Vec<MetricResult> {
    let [internal, external] = navigation::evaluate_links(ctx);

    let results = vec![
        head::evaluate_title(ctx),
        head::evaluate_meta_description(ctx),
        headings::evaluate_h1(ctx),
        headings::evaluate_subheadings(ctx),
        content::evaluate_image_alt(ctx),
        content::evaluate_keyword_density(ctx),
        content::evaluate_content_length(ctx),
        internal,
        external,
        address::evaluate_url_friendliness(ctx),
        address::evaluate_https(ctx),
    ];

    for result in &results {
        debug!(
            metric = %result.metric,
            status = ?result.status,
            value = %result.detected_value,
            "Evaluated metric"
        );
    }

    results
}
