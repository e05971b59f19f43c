//! Checks on the audited URL itself

use super::AuditContext;
use crate::types::{Grade, MetricKind, MetricResult};
use once_cell::sync::Lazy;
use regex::Regex;

static RE_UNFRIENDLY_PATH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[%&?=_\s]").expect("invalid path regex"));

/// A path is friendly when it has no percent escapes, query-like characters,
/// whitespace or underscores.
pub fn is_friendly_path(path: &str) -> bool {
    !RE_UNFRIENDLY_PATH.is_match(path)
}

pub fn evaluate_url_friendliness(ctx: &AuditContext<'_>) -> MetricResult {
    if is_friendly_path(ctx.page.path()) {
        MetricResult::new(
            MetricKind::UrlFriendliness,
            Grade::Ok,
            ctx.page.as_str(),
            "La URL parece limpia y amigable. Intenta incluir tu palabra clave principal.",
        )
    } else {
        MetricResult::new(
            MetricKind::UrlFriendliness,
            Grade::Fail,
            ctx.page.as_str(),
            "La URL contiene caracteres especiales, espacios o guiones bajos que la hacen menos amigable. Opta por URLs cortas, descriptivas y con guiones para separar palabras.",
        )
    }
}

pub fn evaluate_https(ctx: &AuditContext<'_>) -> MetricResult {
    if ctx.page.scheme() == "https" {
        MetricResult::new(
            MetricKind::Https,
            Grade::Ok,
            "Sí",
            "Tu sitio usa HTTPS. ¡Excelente para seguridad y SEO!",
        )
    } else {
        MetricResult::new(
            MetricKind::Https,
            Grade::Fail,
            "No",
            "Tu sitio no usa HTTPS. Deberías implementar un certificado SSL. Es un factor de clasificación importante.",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::MemoryDocument;
    use crate::rules::RuleTable;
    use crate::types::Status;
    use url::Url;

    fn run(url: &str, f: fn(&AuditContext<'_>) -> MetricResult) -> MetricResult {
        let doc = MemoryDocument::new();
        let page = Url::parse(url).unwrap();
        let rules = RuleTable::default();
        f(&AuditContext::new(&doc, &page, &rules))
    }

    #[test]
    fn clean_paths_are_friendly() {
        assert!(is_friendly_path("/"));
        assert!(is_friendly_path("/blog/my-first-post"));
        assert!(is_friendly_path("/docs/v2/index.html"));
    }

    #[test]
    fn special_characters_are_unfriendly() {
        for path in ["/my_post", "/a%20b", "/a b", "/x=1", "/a&b", "/what?"] {
            assert!(!is_friendly_path(path), "{path} should be unfriendly");
        }
    }

    #[test]
    fn query_string_is_not_part_of_the_path() {
        let result = run("https://example.com/blog/post?id=1&ref=x", evaluate_url_friendliness);
        assert_eq!(result.status, Status::Ok);
        assert_eq!(result.detected_value, "https://example.com/blog/post?id=1&ref=x");
    }

    #[test]
    fn encoded_space_in_path_fails() {
        let result = run("https://example.com/my page", evaluate_url_friendliness);
        assert_eq!(result.status, Status::Fail);
    }

    #[test]
    fn underscore_in_path_fails() {
        let result = run("https://example.com/my_page", evaluate_url_friendliness);
        assert_eq!(result.status, Status::Fail);
        assert_eq!(result.icon, "❌");
    }

    #[test]
    fn https_scheme() {
        let result = run("https://example.com/", evaluate_https);
        assert_eq!(result.status, Status::Ok);
        assert_eq!(result.detected_value, "Sí");

        let result = run("http://example.com/", evaluate_https);
        assert_eq!(result.status, Status::Fail);
        assert_eq!(result.detected_value, "No");
    }
}
