//! Rendering of match reports.

use std::fmt::Write;
use std::str::FromStr;

use crate::models::MatchReport;

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One line per assignment, then the total
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format '{}'", other)),
        }
    }
}

/// Render a report in the requested format
pub fn render(report: &MatchReport, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => serde_json::to_string_pretty(report).map(|json| json + "\n"),
    }
}

fn render_text(report: &MatchReport) -> String {
    let mut out = String::new();
    for a in &report.assignments {
        // Writing to a String cannot fail
        let _ = writeln!(out, "Assigning {} to {}: {}", a.driver_name, a.address_name, a.score);
    }
    let _ = writeln!(out, "Max Score: {}", report.total_score);
    out
}
