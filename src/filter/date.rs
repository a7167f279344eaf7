use super::error::DatePatternError;
use regex::Regex;

/// Ordered mapping from the two-digit month token of a date argument to the
/// abbreviation that appears in a log line's date field.
const MONTH_ABBREVS: [(&str, &str); 12] = [
    ("01", "Jan"),
    ("02", "Feb"),
    ("03", "Mar"),
    ("04", "Apr"),
    ("05", "May"),
    ("06", "Jun"),
    ("07", "Jul"),
    ("08", "Aug"),
    ("09", "Sep"),
    ("10", "Oct"),
    ("11", "Nov"),
    ("12", "Dec"),
];

/// A date filter normalized into the month-name form used by log lines.
///
/// `DD/MM/YYYY` becomes the literal pattern `Mon DD YYYY`; `MM/YYYY` becomes
/// `Mon .* YYYY`, where `.*` accepts any day token. The pattern is matched
/// unanchored against a record's date field.
#[derive(Debug, Clone)]
pub struct DatePattern {
    pattern: String,
    regex: Regex,
}

impl DatePattern {
    /// Normalize a user-supplied date into a compiled pattern.
    ///
    /// Anything other than two or three slash-separated parts is rejected:
    /// a date that cannot be normalized is a user error, not a
    /// match-everything filter. A month token outside "01"-"12" (including
    /// an unpadded "1") yields an empty month component and a pattern
    /// unlikely to match any record.
    pub fn parse(input: &str) -> Result<Self, DatePatternError> {
        let parts: Vec<&str> = input.split('/').collect();

        let pattern = match parts.as_slice() {
            [day, month, year] => {
                format!("{} {} {}", month_abbrev(month), pad_day(day), year)
            }
            [month, year] => format!("{} .* {}", month_abbrev(month), year),
            _ => return Err(DatePatternError::InvalidShape(input.to_string())),
        };

        // Date parts are not escaped; a part carrying regex metacharacters
        // can fail to compile.
        let regex = Regex::new(&pattern).map_err(|source| DatePatternError::BadPattern {
            input: input.to_string(),
            pattern: pattern.clone(),
            source,
        })?;

        Ok(Self { pattern, regex })
    }

    /// The normalized pattern text, e.g. "Mar 04 2022" or "Mar .* 2022".
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Unanchored match against a record's date field.
    pub fn matches(&self, date: &str) -> bool {
        self.regex.is_match(date)
    }
}

fn month_abbrev(token: &str) -> &'static str {
    MONTH_ABBREVS
        .iter()
        .find(|(number, _)| *number == token)
        .map(|(_, name)| *name)
        .unwrap_or("")
}

fn pad_day(day: &str) -> String {
    if day.len() == 1 {
        format!("0{day}")
    } else {
        day.to_string()
    }
}
