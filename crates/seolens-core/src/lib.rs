//! # seolens-core
//!
//! Core library for auditing the on-page SEO of a single HTML page.
//!
//! This library provides:
//! - A [`DocumentAccessor`] abstraction over parsed markup
//! - Eleven metric evaluators driven by an injectable [`RuleTable`]
//! - Partial-credit score aggregation into a 0-100 score
//! - Report assembly in a stable, user-facing order
//!
//! ## Features
//!
//! - `default`: Parsing, evaluation and scoring (WASM-compatible, no I/O)
//! - `fetch`: Page retrieval, directly or through a relay
//!
//! ## Example
//!
//! ```
//! use seolens_core::{RuleTable, audit_html};
//!
//! # fn example() -> anyhow::Result<()> {
//! let html = r#"
//!     <html>
//!         <head><title>Learning SEO with Rust</title></head>
//!         <body><h1>Hello</h1></body>
//!     </html>
//! "#;
//!
//! let report = audit_html(html, "https://example.com/learning-seo", &RuleTable::default())?;
//! assert!(report.final_score <= 100);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod document;
pub mod links;
pub mod metrics;
pub mod relay;
pub mod report;
pub mod rules;
pub mod score;
pub mod types;

#[cfg(feature = "fetch")]
pub mod fetch;

// Re-export commonly used types
pub use document::{DocumentAccessor, Element, HtmlDocument, MemoryDocument};
pub use report::{AuditError, Report, ScoreBand, audit, audit_html, parse_page_url};
pub use rules::{RuleTable, RulesError};
pub use types::{Grade, MetricKind, MetricResult, Status};

#[cfg(feature = "fetch")]
pub use fetch::{fetch_html, fetch_via_relay};
