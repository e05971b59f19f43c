//! Command-line front end for seolens-core

pub mod cli;
pub mod render;

use anyhow::{Context, Result, anyhow};
use seolens_core::{HtmlDocument, Report, RuleTable, audit, fetch_html, fetch_via_relay};
use std::fs;
use tracing::{debug, info};
use url::Url;

use crate::cli::{Cli, OutputFormat};

/// Parse the page URL and make sure it is a web address we can audit
pub fn validate_target(input: &str) -> Result<Url> {
    let url = Url::parse(input.trim()).with_context(|| format!("invalid URL '{input}'"))?;

    match url.scheme() {
        "http" | "https" => {}
        other => return Err(anyhow!("unsupported scheme '{other}'; use http or https")),
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(anyhow!("URL '{input}' has no host"));
    }

    Ok(url)
}

/// Build the rule table from `--rules` and `--keyword`
pub fn load_rules(cli: &Cli) -> Result<RuleTable> {
    let mut rules = match cli.rules.as_ref() {
        Some(path) => {
            debug!("Loading rules from {}", path.display());
            RuleTable::from_path(path)?
        }
        None => RuleTable::default(),
    };

    if let Some(keyword) = cli.keyword.as_deref() {
        rules = rules.with_keyword(keyword);
    }

    rules.validate()?;
    Ok(rules)
}

/// Serialize a report in the requested format
pub fn format_report(report: &Report, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => render::render_text(report),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(report)?;
            json.push('\n');
            json
        }
    })
}

async fn load_html(cli: &Cli, url: &Url) -> Result<String> {
    if let Some(path) = cli.file.as_ref() {
        return fs::read_to_string(path)
            .with_context(|| format!("failed to read HTML file {}", path.display()));
    }

    match cli.relay.as_ref() {
        Some(relay) => fetch_via_relay(relay, url.as_str())
            .await
            .with_context(|| format!("failed to fetch {url} via {relay}")),
        None => fetch_html(url.as_str())
            .await
            .with_context(|| format!("failed to fetch {url}")),
    }
}

pub async fn run(cli: Cli) -> Result<()> {
    let url = validate_target(&cli.url)?;
    let rules = load_rules(&cli)?;
    let html = load_html(&cli, &url).await?;

    let document = HtmlDocument::parse(&html);
    let report = audit(&document, &url, &rules);
    info!("{} scored {}/100", report.url, report.final_score);

    let output = format_report(&report, cli.format)?;
    print!("{output}");

    if let Some(path) = cli.output.as_ref() {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed to create output directory {}", parent.display())
            })?;
        }
        fs::write(path, output.as_bytes())
            .with_context(|| format!("failed to write output file {}", path.display()))?;
        eprintln!("Wrote report to {}", path.display());
    }

    Ok(())
}
