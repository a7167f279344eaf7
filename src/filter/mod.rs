//! Date and level filtering for parsed log records
//!
//! A date filter is supplied as `DD/MM/YYYY` or `MM/YYYY` and normalized
//! into the month-name form log lines carry (`Mar 04 2022`, `Mar .* 2022`).
//! A level filter is an exact, case-sensitive comparison against the level
//! field. Both combine with AND and never reorder records.
//!
//! # Examples
//!
//! ```text
//! -d 04/03/2022        # records dated Mar 04 2022
//! -d 03/2022           # any day in Mar 2022
//! -l error             # records whose level is exactly "error"
//! -d 03/2022 -l error  # both
//! ```

pub mod date;
pub mod error;
pub mod matcher;

pub use date::DatePattern;
pub use error::DatePatternError;
pub use matcher::{LogFilter, filter_by_date, filter_by_level};
