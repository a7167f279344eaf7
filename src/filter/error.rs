use thiserror::Error;

/// Errors raised while normalizing a date argument into a match pattern
#[derive(Debug, Error)]
pub enum DatePatternError {
    #[error("invalid date '{0}': expected DD/MM/YYYY or MM/YYYY")]
    InvalidShape(String),

    #[error("date '{input}' produced an unusable pattern '{pattern}': {source}")]
    BadPattern {
        input: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
