pub mod cli;
pub mod filter;
pub mod parser;
pub mod render;

use anyhow::{Context, Result};

pub use cli::{Cli, ColorMode, OutputFormat, cli_parse};
pub use filter::{DatePattern, DatePatternError, LogFilter, filter_by_date, filter_by_level};
pub use parser::{
    FIELD_DELIMITER, LineOutcome, LogRecord, ParseError, parse_line, parse_log_file, parse_reader,
};
pub use render::{render_json, render_text};

fn write_output_file(path: &std::path::Path, content: &str) -> Result<()> {
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write output file '{}'", path.display()))
}

pub fn run() -> Result<()> {
    let cli = cli_parse();
    let verbose = cli.verbose;
    let quiet = cli.quiet;

    // Set up color handling based on user preference
    match cli.color {
        ColorMode::Always => {
            // Force colors on
            unsafe {
                std::env::set_var("CLICOLOR_FORCE", "1");
            }
        }
        ColorMode::Never => {
            // Disable colors
            unsafe {
                std::env::set_var("NO_COLOR", "1");
            }
        }
        ColorMode::Auto => {
            // Default behavior - let the terminal decide
        }
    }

    let file = match &cli.file {
        Some(path) => path.clone(),
        None => cli::prompt_for_file().context("Failed to read file name from stdin")?,
    };

    // If in verbose mode, display some diagnostic information
    if verbose > 0 && !quiet {
        eprintln!("Verbosity level: {}", verbose);
        eprintln!("Color mode: {:?}", cli.color);
        eprintln!("Input file: {}", file.display());
        if let Some(ref date) = cli.date {
            eprintln!("Date filter: {}", date);
        }
        if let Some(ref level) = cli.level {
            eprintln!("Level filter: {}", level);
        }
        if let Some(out_path) = &cli.output {
            eprintln!("Output will be written to: {}", out_path.display());
        }
    }

    let date_pattern = cli
        .date
        .as_deref()
        .map(DatePattern::parse)
        .transpose()
        .context("Invalid date filter")?;

    if verbose > 1 && !quiet {
        if let Some(pattern) = &date_pattern {
            eprintln!("Normalized date pattern: {}", pattern.as_str());
        }
    }

    let filter = LogFilter::new()
        .with_date(date_pattern)
        .with_level(cli.level.clone());

    let outcomes = parse_log_file(&file)?;
    let keep_malformed = !cli.skip_malformed;

    let content = match cli.format {
        OutputFormat::Text => render_text(&outcomes, &filter, keep_malformed, true),
        OutputFormat::Json => render_json(&outcomes, &filter, keep_malformed),
    };
    print!("{content}");

    if let Some(path) = &cli.output {
        // The file copy is always uncolored
        let plain = match cli.format {
            OutputFormat::Text => render_text(&outcomes, &filter, keep_malformed, false),
            OutputFormat::Json => content,
        };
        write_output_file(path, &plain)?;
    }

    if verbose > 0 && !quiet && filter.is_active() {
        let matched = outcomes
            .iter()
            .filter_map(LineOutcome::record)
            .filter(|record| filter.matches(record))
            .count();
        eprintln!("{} of {} lines matched", matched, outcomes.len());
    }

    Ok(())
}
