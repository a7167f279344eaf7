use crate::filter::LogFilter;
use crate::parser::{LineOutcome, LogRecord};
use colored::Colorize;
use serde_json::json;
use std::fmt::Write;

/// Renders outcomes as text, one record per line, in input order.
///
/// With an active filter every matching record prints as
/// `<date> -- <message>`. Without filters the full dump prints
/// `<date> -- <level> -- <message>` and, when kept, malformed lines verbatim
/// at their original positions. Malformed lines never match an active
/// filter.
pub fn render_text(
    outcomes: &[LineOutcome],
    filter: &LogFilter,
    keep_malformed: bool,
    color: bool,
) -> String {
    let mut out = String::new();

    for outcome in outcomes {
        match outcome {
            LineOutcome::Parsed(record) => {
                if !filter.matches(record) {
                    continue;
                }
                if filter.is_active() {
                    let _ = writeln!(out, "{} -- {}", record.date, record.message);
                } else {
                    let _ = writeln!(
                        out,
                        "{} -- {} -- {}",
                        record.date,
                        paint_level(&record.level, color),
                        record.message
                    );
                }
            }
            LineOutcome::Malformed(raw) => {
                if keep_malformed && !filter.is_active() {
                    let _ = writeln!(out, "{}", raw);
                }
            }
        }
    }

    out
}

/// Renders outcomes as a JSON document with a summary header.
///
/// Matching records keep all three fields regardless of which filters are
/// active; kept malformed lines are listed separately as raw strings.
pub fn render_json(outcomes: &[LineOutcome], filter: &LogFilter, keep_malformed: bool) -> String {
    let mut records: Vec<&LogRecord> = Vec::new();
    let mut malformed: Vec<&str> = Vec::new();

    for outcome in outcomes {
        match outcome {
            LineOutcome::Parsed(record) => {
                if filter.matches(record) {
                    records.push(record);
                }
            }
            LineOutcome::Malformed(raw) => {
                if keep_malformed && !filter.is_active() {
                    malformed.push(raw);
                }
            }
        }
    }

    serde_json::to_string_pretty(&json!({
        "summary": {
            "total_lines": outcomes.len(),
            "matched": records.len(),
            "malformed": malformed.len(),
        },
        "records": records,
        "malformed": malformed,
    }))
    .unwrap_or_else(|_| "{\"error\":\"failed to serialize output\"}".into())
}

fn paint_level(level: &str, color: bool) -> String {
    if !color {
        return level.to_string();
    }

    let painted = match level.to_ascii_lowercase().as_str() {
        "error" => level.red(),
        "warning" | "warn" => level.yellow(),
        "info" => level.green(),
        "event" => level.cyan(),
        _ => level.normal(),
    };
    painted.to_string()
}
