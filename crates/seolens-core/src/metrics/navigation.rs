//! Internal and external links

use super::AuditContext;
use super::content::grade_tier;
use crate::links::classify_links;
use crate::types::{Grade, MetricKind, MetricResult};

/// Classify the page's anchors once and grade both link metrics
pub fn evaluate_links(ctx: &AuditContext<'_>) -> [MetricResult; 2] {
    let anchors = ctx.document.select_all("a");
    let counts = classify_links(ctx.page, &anchors);

    let internal_grade = grade_tier(&ctx.rules.internal_links, counts.internal);
    let internal_suggestion = match internal_grade {
        Grade::Ok => "Buen número de enlaces internos. Ayuda a la navegación y SEO.",
        Grade::Warning(_) => {
            "Considera añadir más enlaces internos a páginas relevantes de tu blog para mejorar la estructura."
        }
        Grade::Fail => {
            "No se encontraron enlaces internos. Esto perjudica la navegación y la distribución de autoridad."
        }
    };
    let internal = MetricResult::new(
        MetricKind::InternalLinks,
        internal_grade,
        format!("{} enlaces", counts.internal),
        internal_suggestion,
    );

    let rule = &ctx.rules.external_links;
    let external = if counts.external >= rule.min {
        MetricResult::new(
            MetricKind::ExternalLinks,
            Grade::Ok,
            format!("{} enlaces", counts.external),
            "Se encontraron enlaces externos. Es bueno enlazar a fuentes de autoridad cuando sea relevante.",
        )
    } else {
        MetricResult::new(
            MetricKind::ExternalLinks,
            Grade::Warning(rule.warning_credit),
            format!("{} enlaces", counts.external),
            "Considera añadir enlaces externos a fuentes de autoridad para respaldar tu contenido y mejorar la credibilidad.",
        )
    };

    [internal, external]
}
