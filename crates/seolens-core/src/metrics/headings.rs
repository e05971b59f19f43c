//! Heading structure

use super::{AuditContext, NOT_FOUND_F};
use crate::types::{Grade, MetricKind, MetricResult};

/// A page should have exactly one `<h1>`; none and several both fail.
pub fn evaluate_h1(ctx: &AuditContext<'_>) -> MetricResult {
    let headings = ctx.document.select_all("h1");

    let detected = headings
        .first()
        .map(|h1| h1.text().to_string())
        .unwrap_or_else(|| NOT_FOUND_F.to_string());

    let (grade, suggestion) = match headings.len() {
        0 => (
            Grade::Fail,
            "Cada página debe tener una única etiqueta H1, idealmente con la palabra clave principal."
                .to_string(),
        ),
        1 => (
            Grade::Ok,
            "H1 encontrado. Asegúrate de que sea único y contenga tu palabra clave principal."
                .to_string(),
        ),
        n => (
            Grade::Fail,
            format!("Se encontraron {n} etiquetas H1. Lo ideal es tener solo una por página."),
        ),
    };

    MetricResult::new(MetricKind::H1Tag, grade, detected, suggestion)
}

/// H2 and H3 count toward structure. H4 is reported but does not help.
pub fn evaluate_subheadings(ctx: &AuditContext<'_>) -> MetricResult {
    let h2 = ctx.document.count("h2");
    let h3 = ctx.document.count("h3");
    let h4 = ctx.document.count("h4");
    let rule = &ctx.rules.subheadings;

    let detected = format!("H2s: {h2}, H3s: {h3}, H4s: {h4}");

    if h2 + h3 >= rule.min {
        MetricResult::new(
            MetricKind::Subheadings,
            Grade::Ok,
            detected,
            "Usa H2, H3, etc., para estructurar el contenido y mejorar la legibilidad. Incluye palabras clave secundarias.",
        )
    } else {
        MetricResult::new(
            MetricKind::Subheadings,
            Grade::Warning(rule.warning_credit),
            detected,
            "Considera usar encabezados H2, H3 para estructurar mejor tu contenido.",
        )
    }
}
