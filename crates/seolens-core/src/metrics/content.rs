//! Body content: image alt coverage, keyword density, length

use super::AuditContext;
use crate::rules::TierRule;
use crate::types::{Grade, MetricKind, MetricResult};

/// Grade a count against a two-tier rule
pub(crate) fn grade_tier(rule: &TierRule, value: usize) -> Grade {
    if value >= rule.ok_min {
        Grade::Ok
    } else if value >= rule.warn_min {
        Grade::Warning(rule.warning_credit)
    } else {
        Grade::Fail
    }
}

/// Images without a non-blank `alt`. Fails once half or more are missing.
pub fn evaluate_image_alt(ctx: &AuditContext<'_>) -> MetricResult {
    let images = ctx.document.select_all("img");
    let total = images.len();
    let missing = images
        .iter()
        .filter(|img| img.trimmed_attr("alt").is_none_or(str::is_empty))
        .count();

    let detected = format!(
        "{} de {} imágenes tienen atributo alt.",
        total - missing,
        total
    );

    if missing == 0 {
        return MetricResult::new(
            MetricKind::ImageAlt,
            Grade::Ok,
            detected,
            "Todas las imágenes tienen atributo alt. ¡Bien hecho!",
        );
    }

    // missing < total / 2, kept in integers
    let grade = if missing * 2 < total {
        Grade::Warning(ctx.rules.image_alt.warning_credit)
    } else {
        Grade::Fail
    };

    MetricResult::new(
        MetricKind::ImageAlt,
        grade,
        detected,
        format!(
            "Hay {missing} imagen(es) sin atributo alt. Añade texto alt descriptivo para accesibilidad y SEO."
        ),
    )
}

/// Keyword occurrences and density figures for a body text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeywordStats {
    pub occurrences: usize,
    pub tokens: usize,
    /// Percent, rounded to two decimals
    pub density: f64,
}

/// Count `keyword` in `body`.
///
/// Occurrences are raw substring matches over the whole text, so the keyword
/// also counts inside longer words ("seo" in "seoul"). Tokens are the
/// whitespace-separated words. Both inputs are expected lowercased.
pub fn keyword_stats(body: &str, keyword: &str) -> KeywordStats {
    let occurrences = if keyword.is_empty() {
        0
    } else {
        body.matches(keyword).count()
    };
    let tokens = body.split_whitespace().count();
    let density = if tokens > 0 {
        round_to_hundredths(occurrences as f64 / tokens as f64 * 100.0)
    } else {
        0.0
    };

    KeywordStats {
        occurrences,
        tokens,
        density,
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Density of the rule table's keyword. Never fails; a missing keyword is a
/// warning.
pub fn evaluate_keyword_density(ctx: &AuditContext<'_>) -> MetricResult {
    let rule = &ctx.rules.keyword;
    let keyword = rule.keyword.trim();
    let stats = keyword_stats(ctx.body_text(), &keyword.to_lowercase());
    let density = stats.density;

    let detected = format!("{density:.2}% ({} ocurrencias)", stats.occurrences);
    let in_range = (rule.min_density..=rule.max_density).contains(&density);

    let (grade, suggestion) = if stats.occurrences > 0 && in_range {
        (
            Grade::Ok,
            format!(
                "La palabra clave \"{keyword}\" tiene una densidad adecuada. Asegúrate de un uso natural."
            ),
        )
    } else if stats.occurrences == 0 {
        (
            Grade::Warning(rule.warning_credit),
            format!("La palabra clave \"{keyword}\" no se encontró en el contenido."),
        )
    } else if density < rule.min_density {
        (
            Grade::Warning(rule.warning_credit),
            format!("La densidad de \"{keyword}\" es baja. Considera añadirla de forma natural."),
        )
    } else {
        (
            Grade::Warning(rule.warning_credit),
            format!(
                "La densidad de \"{keyword}\" ({density:.2}%) es alta. Evita el \"keyword stuffing\"."
            ),
        )
    };

    MetricResult::new(MetricKind::KeywordDensity, grade, detected, suggestion)
        .with_name(format!("Densidad de Palabras Clave (Ej: \"{keyword}\")"))
}

/// Length of the whole body text, whitespace included
pub fn evaluate_content_length(ctx: &AuditContext<'_>) -> MetricResult {
    let length = ctx.body_text().chars().count();
    let grade = grade_tier(&ctx.rules.content_length, length);

    let suggestion = match grade {
        Grade::Ok => "El contenido es extenso y potencialmente profundo. ¡Excelente!",
        Grade::Warning(_) => {
            "El contenido es de longitud moderada. Considera expandirlo para ofrecer más valor."
        }
        Grade::Fail => "El contenido es muy corto. Extiéndelo para aportar más valor y mejorar el SEO.",
    };

    MetricResult::new(
        MetricKind::ContentLength,
        grade,
        format!("{length} caracteres"),
        suggestion,
    )
}
