//! Report generation.
//!
//! Turns a [`ValidationOutcome`] into the plain-text report, or into an
//! equivalent JSON document carrying the same data points.

use expectations_core::{ranked, total, Status, UnexpectedValue, ValidationOutcome, ValueCounts};
use serde_json::{json, Value};
use std::fmt;
use std::str::FromStr;

/// Output format of the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// Line-oriented plain text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => Err(format!("unknown report format '{other}' (expected text or json)")),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Text => f.write_str("text"),
            ReportFormat::Json => f.write_str("json"),
        }
    }
}

/// Renders the report in the requested format.
pub fn render(outcome: &ValidationOutcome, format: ReportFormat) -> String {
    match format {
        ReportFormat::Text => render_text(outcome),
        ReportFormat::Json => format!("{:#}\n", render_json(outcome)),
    }
}

/// Renders the plain-text report.
///
/// Layout: an overview block, a statistics block, then one block per field
/// that was evaluated. Within a field block expectations appear in the
/// order they were first evaluated, and unexpected values by descending
/// count.
pub fn render_text(outcome: &ValidationOutcome) -> String {
    let summary = &outcome.summary;
    let success_percent = match summary.success_percent() {
        Some(p) => format!("{p:.2}%"),
        None => "N/A".to_string(),
    };

    let mut lines = vec![
        "Overview:".to_string(),
        format!("Expectation Suite: {}", outcome.suite_name),
        format!("Status: {}", summary.status()),
        String::new(),
        "Statistics:".to_string(),
        format!("Evaluated Expectations: {}", summary.evaluated()),
        format!("Successful Expectations: {}", summary.successful),
        format!("Unsuccessful Expectations: {}", summary.unsuccessful),
        format!("Success Percent: {success_percent}"),
    ];

    for (field, codes) in outcome.results.fields() {
        lines.push(String::new());
        lines.push(format!("Field Name: {field}"));

        for (code, counts) in codes {
            let count = total(counts);
            lines.push(format!(
                "Expectation: {} - {}",
                code,
                description(outcome, code)
            ));
            lines.push(format!("Status: {}", expectation_status(counts)));
            lines.push(format!(
                "Result: {} unexpected values found. {:.2}% of {} total rows.",
                count,
                summary.row_percent(count),
                summary.total_rows
            ));

            for (value, value_count) in ranked(counts) {
                lines.push(unexpected_line(value, value_count));
            }
        }
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

// An absent field gets its own line shape so no raw value can be mistaken for it.
fn unexpected_line(value: &UnexpectedValue, count: usize) -> String {
    match value {
        UnexpectedValue::Missing => format!("- Missing Value, Count: {count}"),
        UnexpectedValue::Value(v) => format!("- Unexpected Value: {v}, Count: {count}"),
    }
}

/// Builds the JSON report.
pub fn render_json(outcome: &ValidationOutcome) -> Value {
    let summary = &outcome.summary;

    let fields: Vec<Value> = outcome
        .results
        .fields()
        .map(|(field, codes)| {
            let expectations: Vec<Value> = codes
                .iter()
                .map(|(code, counts)| {
                    let count = total(counts);
                    let values: Vec<Value> = ranked(counts)
                        .into_iter()
                        .map(|(value, value_count)| json!({ "value": value, "count": value_count }))
                        .collect();

                    json!({
                        "code": code,
                        "description": description(outcome, code),
                        "status": expectation_status(counts).to_string(),
                        "unexpected_count": count,
                        "unexpected_percent": round2(summary.row_percent(count)),
                        "unexpected_values": values,
                    })
                })
                .collect();

            json!({ "field": field, "expectations": expectations })
        })
        .collect();

    json!({
        "suite": outcome.suite_name,
        "status": summary.status().to_string(),
        "statistics": {
            "evaluated": summary.evaluated(),
            "successful": summary.successful,
            "unsuccessful": summary.unsuccessful,
            "success_percent": summary.success_percent().map(round2),
            "total_rows": summary.total_rows,
        },
        "fields": fields,
    })
}

fn description<'a>(outcome: &'a ValidationOutcome, code: &str) -> &'a str {
    outcome
        .descriptions
        .get(code)
        .map(String::as_str)
        .unwrap_or_default()
}

fn expectation_status(counts: &ValueCounts) -> Status {
    Status::from_failed(!counts.is_empty())
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
