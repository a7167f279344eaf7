use clap::{Parser, ValueEnum};
use std::io::{self, Write};
use std::path::PathBuf;

/// A tool to filter line-oriented log files by date and severity level
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log file to filter (prompted for on stdin if omitted)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Date to return logs for, format DD/MM/YYYY or MM/YYYY
    #[arg(short, long)]
    pub date: Option<String>,

    /// Level to return logs for, exact match (e.g. "info", "warning", "error", "event")
    #[arg(short, long)]
    pub level: Option<String>,

    /// Drop lines that do not split into date, level and message fields
    #[arg(long)]
    pub skip_malformed: bool,

    /// Output format
    #[arg(short = 'F', long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// When to colorize output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorMode,

    /// Also write the results to a file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Increase diagnostic output on stderr (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress diagnostic output on stderr
    #[arg(short, long)]
    pub quiet: bool,
}

/// Output format for the filtered records
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One record per line, suitable for piping
    Text,
    /// A JSON document with a summary and the matching records
    Json,
}

/// Color handling preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Let the terminal decide
    Auto,
    /// Force colors on
    Always,
    /// Disable colors
    Never,
}

pub fn cli_parse() -> Cli {
    Cli::parse()
}

/// Ask for the log file path on stdin when -f was not given.
///
/// The parsing and filtering layers never read interactively; this is the
/// only place the program touches stdin.
pub fn prompt_for_file() -> io::Result<PathBuf> {
    print!("Please enter the file to parse: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(PathBuf::from(input.trim()))
}
