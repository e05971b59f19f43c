//! Plain-text rendering of an audit report

use seolens_core::{Report, ScoreBand};
use std::fmt::Write as FmtWrite;

const DIVIDER: &str = "─────────────────────────────────────────────────────────────";
const LABEL_WIDTH: usize = 16;

fn push_section_header(buf: &mut String, icon: &str, title: &str) {
    let _ = writeln!(buf, "{DIVIDER}");
    let _ = writeln!(buf, "{icon} {title}");
    let _ = writeln!(buf, "{DIVIDER}");
}

fn push_key_value(buf: &mut String, label: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    let _ = writeln!(buf, "• {:<width$} : {}", label, value, width = LABEL_WIDTH);
}

fn band_icon(band: ScoreBand) -> &'static str {
    match band {
        ScoreBand::Good => "🟢",
        ScoreBand::Fair => "🟡",
        ScoreBand::Poor => "🔴",
    }
}

fn band_label(band: ScoreBand) -> &'static str {
    match band {
        ScoreBand::Good => "good",
        ScoreBand::Fair => "fair",
        ScoreBand::Poor => "poor",
    }
}

/// Render a report the way the terminal shows it
pub fn render_text(report: &Report) -> String {
    let mut output = String::new();
    let band = report.band();

    push_section_header(&mut output, "🔎", "SEO Audit");
    push_key_value(&mut output, "URL", &report.url);
    push_key_value(
        &mut output,
        "Score",
        &format!(
            "{}/100 {} {}",
            report.final_score,
            band_icon(band),
            band_label(band)
        ),
    );
    output.push('\n');

    push_section_header(&mut output, "📋", "Metrics");
    for result in &report.results {
        let _ = writeln!(output, "{} {}:", result.icon, result.name);
        let _ = writeln!(output, "   Valor Detectado: {}", result.detected_value);
        let _ = writeln!(output, "   Sugerencia: {}", result.suggestion);
        output.push('\n');
    }

    output
}
