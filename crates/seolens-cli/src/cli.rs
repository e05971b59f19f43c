use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use url::Url;

/// Command-line options for a single-page audit
#[derive(Parser, Debug)]
#[command(
    name = "seolens",
    version,
    about = "seolens — an on-page SEO lens for a single web page",
    after_help = "\
Examples:
  seolens https://example.com/blog/post              Fetch and audit a page
  seolens https://example.com/ --format json         JSON report for scripting
  seolens https://example.com/ --file page.html      Audit a saved copy of the page
  seolens https://example.com/ --relay https://relay.example.com/api/proxy

Developed by Pon Datalab"
)]
pub struct Cli {
    /// Page to audit (http or https)
    pub url: String,

    /// Read the page HTML from a file instead of fetching it
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Fetch through a relay endpoint (e.g. https://host/api/proxy)
    #[arg(long, env = "SEOLENS_RELAY", value_name = "URL", conflicts_with = "file")]
    pub relay: Option<Url>,

    /// Rule table overriding the default thresholds (.toml, .json, .yaml)
    #[arg(long, env = "SEOLENS_RULES", value_name = "PATH")]
    pub rules: Option<PathBuf>,

    /// Target keyword for the density check
    #[arg(short, long)]
    pub keyword: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also write the report to a file
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(long, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
