use serde::Serialize;

/// A single well-formed log line split into its three fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    /// Raw date/timestamp text, e.g. "Sun Feb 27 2022 18:00:16 GMT+1100"
    pub date: String,
    /// Raw level token, e.g. "info", "warning", "error", "event". Whatever
    /// text sat between the delimiters is stored verbatim.
    pub level: String,
    /// Everything after the second delimiter
    pub message: String,
}

/// Result of parsing one input line.
///
/// Malformed lines are carried through rather than dropped so the driver can
/// decide what to do with them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// The line split into date, level and message
    Parsed(LogRecord),
    /// The line had fewer than three fields; the raw text is kept
    Malformed(String),
}

impl LineOutcome {
    /// The parsed record, if the line was well-formed.
    pub fn record(&self) -> Option<&LogRecord> {
        match self {
            LineOutcome::Parsed(record) => Some(record),
            LineOutcome::Malformed(_) => None,
        }
    }
}
