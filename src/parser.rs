use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

mod entities;

pub use entities::{LineOutcome, LogRecord};

/// Delimiter between the date, level and message sections of a log line.
pub const FIELD_DELIMITER: &str = " -- ";

/// Errors raised while reading a log file
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to open log file '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read log file: {0}")]
    Read(#[from] std::io::Error),
}

/// Parses a log file into one outcome per input line, in input order.
pub fn parse_log_file(path: impl AsRef<Path>) -> Result<Vec<LineOutcome>, ParseError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ParseError::Open {
        path: path.display().to_string(),
        source,
    })?;
    parse_reader(BufReader::new(file))
}

/// Parses any line-oriented reader.
///
/// Path resolution and prompting belong to the CLI layer; this function only
/// consumes the reader it is given.
pub fn parse_reader(reader: impl BufRead) -> Result<Vec<LineOutcome>, ParseError> {
    let mut outcomes = Vec::new();

    for line in reader.lines() {
        outcomes.push(parse_line(&line?));
    }

    Ok(outcomes)
}

/// Splits a single line on `" -- "` into date, level and message.
///
/// Everything from the third field onward is rejoined with the delimiter, so
/// a message containing `" -- "` survives unchanged. Lines with fewer than
/// three fields come back as [`LineOutcome::Malformed`] with the raw text
/// intact; no error is raised for them.
pub fn parse_line(line: &str) -> LineOutcome {
    let parts: Vec<&str> = line.split(FIELD_DELIMITER).collect();

    if parts.len() > 2 {
        LineOutcome::Parsed(LogRecord {
            date: parts[0].to_string(),
            level: parts[1].to_string(),
            message: parts[2..].join(FIELD_DELIMITER),
        })
    } else {
        LineOutcome::Malformed(line.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_a_line_into_date_level_and_message() {
        let outcome = parse_line("Mar 04 2022 18:00:16 -- error -- disk full");
        let record = outcome.record().expect("line should parse");

        assert_eq!(record.date, "Mar 04 2022 18:00:16");
        assert_eq!(record.level, "error");
        assert_eq!(record.message, "disk full");
    }

    #[test]
    fn level_field_keeps_the_middle_token_verbatim() {
        let outcome = parse_line("Mar 04 2022 -- Not A Level -- message");
        let record = outcome.record().expect("line should parse");

        assert_eq!(record.level, "Not A Level");
    }

    #[test]
    fn rejoins_delimiters_inside_the_message() {
        let outcome = parse_line("Mar 04 2022 -- info -- before -- after -- end");
        let record = outcome.record().expect("line should parse");

        assert_eq!(record.message, "before -- after -- end");
    }

    #[test]
    fn line_without_delimiters_is_malformed() {
        let outcome = parse_line("no delimiter here");
        assert_eq!(
            outcome,
            LineOutcome::Malformed("no delimiter here".to_string())
        );
    }

    #[test]
    fn line_with_only_two_fields_is_malformed() {
        let outcome = parse_line("Mar 04 2022 -- info");
        assert!(outcome.record().is_none());
    }
}
