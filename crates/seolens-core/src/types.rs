//! Common types used across seolens

use serde::{Deserialize, Serialize};
use std::fmt;

/// The on-page heuristics a report is made of, in canonical report order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    PageTitle,
    MetaDescription,
    H1Tag,
    Subheadings,
    ImageAlt,
    KeywordDensity,
    ContentLength,
    InternalLinks,
    ExternalLinks,
    UrlFriendliness,
    Https,
}

impl MetricKind {
    /// Every metric, in the order results are shown to the user
    pub const ALL: [MetricKind; 11] = [
        MetricKind::PageTitle,
        MetricKind::MetaDescription,
        MetricKind::H1Tag,
        MetricKind::Subheadings,
        MetricKind::ImageAlt,
        MetricKind::KeywordDensity,
        MetricKind::ContentLength,
        MetricKind::InternalLinks,
        MetricKind::ExternalLinks,
        MetricKind::UrlFriendliness,
        MetricKind::Https,
    ];

    /// Position of this metric in the report
    pub fn position(self) -> usize {
        Self::ALL
            .iter()
            .position(|kind| *kind == self)
            .unwrap_or(Self::ALL.len())
    }

    /// Stable machine key, identical to the serialized form
    pub fn key(self) -> &'static str {
        match self {
            MetricKind::PageTitle => "page_title",
            MetricKind::MetaDescription => "meta_description",
            MetricKind::H1Tag => "h1_tag",
            MetricKind::Subheadings => "subheadings",
            MetricKind::ImageAlt => "image_alt",
            MetricKind::KeywordDensity => "keyword_density",
            MetricKind::ContentLength => "content_length",
            MetricKind::InternalLinks => "internal_links",
            MetricKind::ExternalLinks => "external_links",
            MetricKind::UrlFriendliness => "url_friendliness",
            MetricKind::Https => "https",
        }
    }

    /// Display name shown next to the icon.
    ///
    /// The keyword density label embeds the audited keyword, so it is built by
    /// the evaluator instead.
    pub fn label(self) -> &'static str {
        match self {
            MetricKind::PageTitle => "Título de la Página",
            MetricKind::MetaDescription => "Meta Descripción",
            MetricKind::H1Tag => "Etiqueta H1",
            MetricKind::Subheadings => "Encabezados (H2, H3, H4)",
            MetricKind::ImageAlt => "Atributos Alt en Imágenes",
            MetricKind::KeywordDensity => "Densidad de Palabras Clave",
            MetricKind::ContentLength => "Longitud del Contenido",
            MetricKind::InternalLinks => "Enlaces Internos",
            MetricKind::ExternalLinks => "Enlaces Externos",
            MetricKind::UrlFriendliness => "URL Amigable",
            MetricKind::Https => "Uso de HTTPS",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Outcome label of a single metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Ok,
    Warning,
    Fail,
}

impl Status {
    /// Glyph rendered next to the metric name
    pub fn icon(self) -> &'static str {
        match self {
            Status::Ok => "✅",
            Status::Warning => "⚠️",
            Status::Fail => "❌",
        }
    }
}

/// What an evaluator decided, carrying the credit it earns
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Grade {
    /// Full weight
    Ok,
    /// Fraction of the weight, in `[0, 1]`
    Warning(f64),
    /// Nothing
    Fail,
}

impl Grade {
    pub fn status(self) -> Status {
        match self {
            Grade::Ok => Status::Ok,
            Grade::Warning(_) => Status::Warning,
            Grade::Fail => Status::Fail,
        }
    }

    /// Fraction of the metric weight this grade earns
    pub fn credit(self) -> f64 {
        match self {
            Grade::Ok => 1.0,
            Grade::Warning(factor) => factor.clamp(0.0, 1.0),
            Grade::Fail => 0.0,
        }
    }
}

/// One evaluated metric, as shown in the report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricResult {
    pub metric: MetricKind,
    pub name: String,
    pub detected_value: String,
    pub status: Status,
    pub suggestion: String,
    pub icon: String,
    pub partial_credit_factor: f64,
}

impl MetricResult {
    /// Build a result whose status, icon and credit all follow from `grade`
    pub fn new(
        metric: MetricKind,
        grade: Grade,
        detected_value: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        let status = grade.status();
        Self {
            metric,
            name: metric.label().to_string(),
            detected_value: detected_value.into(),
            status,
            suggestion: suggestion.into(),
            icon: status.icon().to_string(),
            partial_credit_factor: grade.credit(),
        }
    }

    /// Replace the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Recover the tagged grade from the flattened fields
    pub fn grade(&self) -> Grade {
        match self.status {
            Status::Ok => Grade::Ok,
            Status::Warning => Grade::Warning(self.partial_credit_factor),
            Status::Fail => Grade::Fail,
        }
    }
}
