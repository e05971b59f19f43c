//! `<title>` and `<meta name="description">`

use super::{AuditContext, NOT_FOUND_F, NOT_FOUND_M};
use crate::rules::LengthRule;
use crate::types::{Grade, MetricKind, MetricResult};

/// How a length suggestion is phrased for one element
struct Wording {
    subject: &'static str,
    too_short: &'static str,
    too_long: &'static str,
    ok: &'static str,
}

const TITLE_WORDING: Wording = Wording {
    subject: "El título",
    too_short: "muy corto",
    too_long: "muy largo",
    ok: "El título tiene una longitud adecuada. Asegúrate de que contenga tu palabra clave principal.",
};

const DESCRIPTION_WORDING: Wording = Wording {
    subject: "La meta descripción",
    too_short: "muy corta",
    too_long: "muy larga",
    ok: "La meta descripción tiene una longitud adecuada. Asegúrate de que sea persuasiva y contenga tu palabra clave principal.",
};

/// Grade a present text by its length, producing the matching suggestion
fn grade_length(rule: &LengthRule, length: usize, wording: &Wording) -> (Grade, String) {
    let window = format!(
        "Debería tener entre {} y {} caracteres.",
        rule.min, rule.max
    );
    let adjective = if length < rule.min {
        wording.too_short
    } else if length > rule.max {
        wording.too_long
    } else {
        return (Grade::Ok, wording.ok.to_string());
    };

    (
        Grade::Warning(rule.warning_credit),
        format!("{} es {adjective} ({length} caracteres). {window}", wording.subject),
    )
}

pub fn evaluate_title(ctx: &AuditContext<'_>) -> MetricResult {
    let Some(title) = ctx.document.select_first("title") else {
        return MetricResult::new(
            MetricKind::PageTitle,
            Grade::Fail,
            NOT_FOUND_M,
            "Añade un título descriptivo y único.",
        );
    };

    let title = title.text();
    let (grade, suggestion) =
        grade_length(&ctx.rules.title, title.chars().count(), &TITLE_WORDING);

    MetricResult::new(MetricKind::PageTitle, grade, title, suggestion)
}

/// The first `<meta name="description">`. A tag without `content` counts as
/// missing.
pub fn evaluate_meta_description(ctx: &AuditContext<'_>) -> MetricResult {
    let description = ctx
        .document
        .select_all("meta")
        .into_iter()
        .find(|meta| meta.attr("name") == Some("description"))
        .and_then(|meta| meta.trimmed_attr("content").map(str::to_string));

    let Some(description) = description else {
        return MetricResult::new(
            MetricKind::MetaDescription,
            Grade::Fail,
            NOT_FOUND_F,
            "Añade una meta descripción atractiva que incluya tu palabra clave principal.",
        );
    };

    let (grade, suggestion) = grade_length(
        &ctx.rules.meta_description,
        description.chars().count(),
        &DESCRIPTION_WORDING,
    );

    MetricResult::new(MetricKind::MetaDescription, grade, description, suggestion)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Element, MemoryDocument};
    use crate::rules::RuleTable;
    use crate::types::Status;
    use url::Url;

    fn run(doc: &MemoryDocument, f: fn(&AuditContext<'_>) -> MetricResult) -> MetricResult {
        let page = Url::parse("https://example.com/").unwrap();
        let rules = RuleTable::default();
        f(&AuditContext::new(doc, &page, &rules))
    }

    fn with_description(content: &str) -> MemoryDocument {
        MemoryDocument::new().with(
            "meta",
            Element::new()
                .with_attr("name", "description")
                .with_attr("content", content),
        )
    }

    #[test]
    fn title_in_range_is_ok() {
        let doc = MemoryDocument::new().with("title", Element::with_text("  Rust SEO audits  "));
        let result = run(&doc, evaluate_title);
        assert_eq!(result.status, Status::Ok);
        assert_eq!(result.detected_value, "Rust SEO audits");
    }

    #[test]
    fn title_boundaries_are_inclusive() {
        for length in [10, 70] {
            let doc = MemoryDocument::new().with("title", Element::with_text("t".repeat(length)));
            assert_eq!(run(&doc, evaluate_title).status, Status::Ok);
        }
    }

    #[test]
    fn short_title_is_warning() {
        let doc = MemoryDocument::new().with("title", Element::with_text("Home"));
        let result = run(&doc, evaluate_title);
        assert_eq!(result.status, Status::Warning);
        assert_eq!(result.partial_credit_factor, 0.5);
        assert_eq!(
            result.suggestion,
            "El título es muy corto (4 caracteres). Debería tener entre 10 y 70 caracteres."
        );
    }

    #[test]
    fn long_title_is_warning() {
        let doc = MemoryDocument::new().with("title", Element::with_text("t".repeat(71)));
        let result = run(&doc, evaluate_title);
        assert_eq!(result.status, Status::Warning);
        assert!(result.suggestion.starts_with("El título es muy largo (71 caracteres)"));
    }

    #[test]
    fn title_length_counts_characters_not_bytes() {
        let doc = MemoryDocument::new().with("title", Element::with_text("ñ".repeat(10)));
        assert_eq!(run(&doc, evaluate_title).status, Status::Ok);
    }

    #[test]
    fn missing_title_fails_with_sentinel() {
        let result = run(&MemoryDocument::new(), evaluate_title);
        assert_eq!(result.status, Status::Fail);
        assert_eq!(result.detected_value, "No encontrado");
        assert_eq!(result.icon, "❌");
    }

    #[test]
    fn empty_title_is_present_but_short() {
        let doc = MemoryDocument::new().with("title", Element::with_text("   "));
        let result = run(&doc, evaluate_title);
        assert_eq!(result.status, Status::Warning);
        assert_eq!(result.detected_value, "");
    }

    #[test]
    fn description_in_range_is_ok() {
        let result = run(&with_description(&"d".repeat(100)), evaluate_meta_description);
        assert_eq!(result.status, Status::Ok);
    }

    #[test]
    fn short_description_is_warning() {
        let result = run(&with_description("Too short"), evaluate_meta_description);
        assert_eq!(result.status, Status::Warning);
        assert_eq!(
            result.suggestion,
            "La meta descripción es muy corta (9 caracteres). Debería tener entre 50 y 160 caracteres."
        );
    }

    #[test]
    fn long_description_is_warning() {
        let result = run(&with_description(&"d".repeat(161)), evaluate_meta_description);
        assert_eq!(result.status, Status::Warning);
    }

    #[test]
    fn missing_description_fails() {
        let doc = MemoryDocument::new()
            .with("meta", Element::new().with_attr("charset", "utf-8"))
            .with("meta", Element::new().with_attr("name", "keywords").with_attr("content", "x"));
        let result = run(&doc, evaluate_meta_description);
        assert_eq!(result.status, Status::Fail);
        assert_eq!(result.detected_value, "No encontrada");
    }

    #[test]
    fn description_without_content_fails() {
        let doc = MemoryDocument::new().with("meta", Element::new().with_attr("name", "description"));
        assert_eq!(run(&doc, evaluate_meta_description).status, Status::Fail);
    }

    #[test]
    fn first_description_wins() {
        let doc = with_description("first").with(
            "meta",
            Element::new()
                .with_attr("name", "description")
                .with_attr("content", "d".repeat(100)),
        );
        let result = run(&doc, evaluate_meta_description);
        assert_eq!(result.detected_value, "first");
    }
}
