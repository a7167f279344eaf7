use super::date::DatePattern;
use crate::parser::LogRecord;

/// Filtering criteria applied to parsed records
#[derive(Debug, Clone, Default)]
pub struct LogFilter {
    date: Option<DatePattern>,
    level: Option<String>,
}

impl LogFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_date(mut self, date: Option<DatePattern>) -> Self {
        self.date = date;
        self
    }

    pub fn with_level(mut self, level: Option<impl Into<String>>) -> Self {
        self.level = level.map(|l| l.into());
        self
    }

    /// True when at least one criterion is set.
    pub fn is_active(&self) -> bool {
        self.date.is_some() || self.level.is_some()
    }

    /// AND of the configured criteria. The date pattern matches unanchored;
    /// the level comparison is exact, case-sensitive and untrimmed.
    pub fn matches(&self, record: &LogRecord) -> bool {
        let date_match = self
            .date
            .as_ref()
            .map(|pattern| pattern.matches(&record.date))
            .unwrap_or(true);

        let level_match = self
            .level
            .as_ref()
            .map(|level| level == &record.level)
            .unwrap_or(true);

        date_match && level_match
    }
}

/// Returns the records whose date field matches the pattern, in input order.
pub fn filter_by_date(records: &[LogRecord], pattern: &DatePattern) -> Vec<LogRecord> {
    let filter = LogFilter::new().with_date(Some(pattern.clone()));
    records
        .iter()
        .filter(|record| filter.matches(record))
        .cloned()
        .collect()
}

/// Returns the records whose level field equals `level`, in input order.
pub fn filter_by_level(records: &[LogRecord], level: &str) -> Vec<LogRecord> {
    let filter = LogFilter::new().with_level(Some(level));
    records
        .iter()
        .filter(|record| filter.matches(record))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, level: &str, message: &str) -> LogRecord {
        LogRecord {
            date: date.to_string(),
            level: level.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn level_match_is_case_sensitive() {
        let log = record("Mar 04 2022", "info", "startup complete");

        assert!(LogFilter::new().with_level(Some("info")).matches(&log));
        assert!(!LogFilter::new().with_level(Some("INFO")).matches(&log));
        assert!(!LogFilter::new().with_level(Some("Info")).matches(&log));
    }

    #[test]
    fn level_match_does_not_trim() {
        let log = record("Mar 04 2022", "info ", "trailing space in level");

        assert!(!LogFilter::new().with_level(Some("info")).matches(&log));
        assert!(LogFilter::new().with_level(Some("info ")).matches(&log));
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = LogFilter::new();
        assert!(!filter.is_active());
        assert!(filter.matches(&record("anything", "whatever", "msg")));
    }

    #[test]
    fn date_and_level_combine_with_and() {
        let pattern = DatePattern::parse("04/03/2022").unwrap();
        let filter = LogFilter::new()
            .with_date(Some(pattern))
            .with_level(Some("error"));

        assert!(filter.matches(&record("Mar 04 2022 18:00:16", "error", "disk full")));
        assert!(!filter.matches(&record("Mar 04 2022 18:00:16", "info", "ok")));
        assert!(!filter.matches(&record("Mar 05 2022 09:12:00", "error", "disk full")));
    }

    #[test]
    fn filters_preserve_input_order() {
        let records = vec![
            record("Mar 04 2022", "error", "first"),
            record("Mar 04 2022", "info", "second"),
            record("Mar 04 2022", "error", "third"),
        ];

        let errors = filter_by_level(&records, "error");
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].message, "first");
        assert_eq!(errors[1].message, "third");
        // input untouched
        assert_eq!(records.len(), 3);
    }
}
