use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::borrow::Cow;
use std::io::{BufRead, IsTerminal};

use crate::classify::{resolve, sort_by_rank, tally, Resolved};
use crate::cli::abbrev;
use crate::cli::error::{user_error, user_error_with_context, validate_codes, validate_dimension};
use crate::cli::output::{format_dimensions, format_distribution, format_resolved, format_sorted, format_table, is_tty};
use crate::config::Config;
use crate::error::ClassifyError;
use crate::models::{ClassificationTable, Dimension};

#[derive(Parser)]
#[command(name = "etiqueta")]
#[command(about = "Etiqueta - status, priority and task-type classification tables for project dashboards")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a raw code to its label, color and rank
    Resolve {
        /// Dimension (priority, sprint-status, task-status, task-type)
        dimension: String,
        /// Raw code as sent by the backend (omit for an absent value)
        code: Option<String>,
        /// Show an unrecognized code verbatim instead of the fallback label
        #[arg(long)]
        raw_label: bool,
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// Resolve several codes and list them in rank order
    Sort {
        /// Dimension (priority, sprint-status, task-status, task-type)
        dimension: String,
        /// Raw codes (an empty string counts as an absent value)
        codes: Vec<String>,
        /// Show unrecognized codes verbatim instead of the fallback label
        #[arg(long)]
        raw_label: bool,
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// Show every entry of a dimension's table
    Table {
        /// Dimension (priority, sprint-status, task-status, task-type)
        dimension: String,
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// Count codes per entry (reads one code per line from stdin when none are given)
    Tally {
        /// Dimension (priority, sprint-status, task-status, task-type)
        dimension: String,
        /// Raw codes
        codes: Vec<String>,
        /// Include entries with a zero count
        #[arg(long)]
        all: bool,
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// List known dimensions
    Dimensions {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
}

pub fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    // Expand command abbreviations before processing
    let args = match abbrev::expand_command_abbreviations(args) {
        Ok(expanded) => expanded,
        Err(e) => user_error(&e),
    };

    let clap_args = std::iter::once("etiqueta".to_string())
        .chain(args)
        .collect::<Vec<_>>();
    let cli = match Cli::try_parse_from(clap_args) {
        Ok(cli) => cli,
        Err(e) => {
            e.print()?;
            // Help and version go to stdout and are not failures
            if e.use_stderr() {
                std::process::exit(1);
            }
            return Ok(());
        }
    };

    handle_command(cli)
}

fn handle_command(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Resolve { dimension, code, raw_label, json } => handle_resolve(dimension, code, raw_label, json),
        Commands::Sort { dimension, codes, raw_label, json } => handle_sort(dimension, codes, raw_label, json),
        Commands::Table { dimension, json } => handle_table(dimension, json),
        Commands::Tally { dimension, codes, all, json } => handle_tally(dimension, codes, all, json),
        Commands::Dimensions { json } => handle_dimensions(json),
    }
}

fn parse_dimension(name: &str) -> Dimension {
    validate_dimension(name).unwrap_or_else(|e| user_error(&e))
}

/// Load the rc file; a broken rc file is a user error, I/O failures are internal
fn load_config() -> Result<Config> {
    let path = Config::config_path()?;
    match Config::load_from(&path) {
        Ok(config) => Ok(config),
        Err(e) => match e.downcast_ref::<ClassifyError>() {
            Some(classify_err) => user_error_with_context(&classify_err.to_string(), &path.display().to_string()),
            None => Err(e),
        },
    }
}

fn config_table(config: &Config, dimension: Dimension) -> Result<Cow<'static, ClassificationTable>> {
    config
        .table(dimension)
        .with_context(|| format!("Failed to build {} table", dimension))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

fn handle_resolve(dimension: String, code: Option<String>, raw_label: bool, json: bool) -> Result<()> {
    let dimension = parse_dimension(&dimension);
    let config = load_config()?;
    let table = config_table(&config, dimension)?;

    let mut options = config.resolve;
    options.raw_label_on_miss |= raw_label;
    let resolved = resolve(&table, code.as_deref(), options);
    log::debug!("Resolved {:?} in {} to '{}'", code, dimension, resolved.code());

    if json {
        print_json(&resolved)
    } else {
        print!("{}", format_resolved(dimension, code.as_deref(), &resolved, is_tty()));
        Ok(())
    }
}

#[derive(Serialize)]
struct SortedRow<'a> {
    input: Option<&'a str>,
    #[serde(flatten)]
    resolved: &'a Resolved<'a>,
}

/// Command-line empty strings stand for absent backend values
fn as_raw(code: &str) -> Option<&str> {
    if code.is_empty() {
        None
    } else {
        Some(code)
    }
}

fn handle_sort(dimension: String, codes: Vec<String>, raw_label: bool, json: bool) -> Result<()> {
    let dimension = parse_dimension(&dimension);
    if let Err(e) = validate_codes(&codes) {
        user_error(&e);
    }
    let config = load_config()?;
    let table = config_table(&config, dimension)?;

    let mut options = config.resolve;
    options.raw_label_on_miss |= raw_label;
    let rows = sort_by_rank(codes.iter().map(|code| {
        let raw = as_raw(code);
        (raw, resolve(&table, raw, options))
    }));

    if json {
        let out: Vec<SortedRow<'_>> = rows
            .iter()
            .map(|(input, resolved)| SortedRow { input: *input, resolved })
            .collect();
        print_json(&out)
    } else {
        print!("{}", format_sorted(&rows, is_tty()));
        Ok(())
    }
}

fn handle_table(dimension: String, json: bool) -> Result<()> {
    let dimension = parse_dimension(&dimension);
    let config = load_config()?;
    let table = config_table(&config, dimension)?;

    if json {
        print_json(&*table)
    } else {
        print!("{}", format_table(&table, is_tty()));
        Ok(())
    }
}

/// Read codes from stdin, one per line; blank lines are absent values
fn read_codes_from_stdin() -> Result<Vec<String>> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        user_error("No codes given. Pass codes as arguments or pipe them on stdin, one per line.");
    }
    stdin
        .lock()
        .lines()
        .map(|line| line.map(|l| l.trim().to_string()))
        .collect::<std::io::Result<Vec<_>>>()
        .context("Failed to read codes from stdin")
}

fn handle_tally(dimension: String, codes: Vec<String>, all: bool, json: bool) -> Result<()> {
    let dimension = parse_dimension(&dimension);
    let codes = if codes.is_empty() { read_codes_from_stdin()? } else { codes };
    let config = load_config()?;
    let table = config_table(&config, dimension)?;

    let distribution = tally(&table, codes.iter().map(|c| as_raw(c)), all);
    log::debug!("Tallied {} {} code(s) into {} bucket(s)", distribution.total, dimension, distribution.buckets.len());

    if json {
        print_json(&distribution)
    } else {
        print!("{}", format_distribution(&distribution, is_tty()));
        Ok(())
    }
}

#[derive(Serialize)]
struct DimensionInfo<'a> {
    dimension: Dimension,
    default_code: Option<&'a str>,
    fallback_label: &'a str,
    entries: usize,
}

fn handle_dimensions(json: bool) -> Result<()> {
    let config = load_config()?;
    let tables = Dimension::ALL
        .iter()
        .map(|d| config_table(&config, *d).map(|t| (*d, t)))
        .collect::<Result<Vec<_>>>()?;

    if json {
        let info: Vec<DimensionInfo<'_>> = tables
            .iter()
            .map(|(dimension, table)| DimensionInfo {
                dimension: *dimension,
                default_code: table.default_code(),
                fallback_label: &table.fallback().label,
                entries: table.len(),
            })
            .collect();
        print_json(&info)
    } else {
        let refs: Vec<(Dimension, &ClassificationTable)> = tables.iter().map(|(d, t)| (*d, &**t)).collect();
        print!("{}", format_dimensions(&refs, is_tty()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_resolve_without_code() {
        let cli = Cli::try_parse_from(["etiqueta", "resolve", "priority"]).unwrap();
        match cli.command {
            Commands::Resolve { dimension, code, raw_label, json } => {
                assert_eq!(dimension, "priority");
                assert_eq!(code, None);
                assert!(!raw_label);
                assert!(!json);
            }
            _ => panic!("expected resolve"),
        }
    }

    #[test]
    fn test_parse_sort_codes() {
        let cli = Cli::try_parse_from(["etiqueta", "sort", "--json", "task-type", "BUG", "EPIC"]).unwrap();
        match cli.command {
            Commands::Sort { codes, json, .. } => {
                assert_eq!(codes, vec!["BUG".to_string(), "EPIC".to_string()]);
                assert!(json);
            }
            _ => panic!("expected sort"),
        }
    }

    #[test]
    fn test_flags_after_codes() {
        let cli = Cli::try_parse_from(["etiqueta", "tally", "priority", "high", "low", "--all"]).unwrap();
        match cli.command {
            Commands::Tally { codes, all, json, .. } => {
                assert_eq!(codes, vec!["high".to_string(), "low".to_string()]);
                assert!(all);
                assert!(!json);
            }
            _ => panic!("expected tally"),
        }
    }

    #[test]
    fn test_as_raw() {
        assert_eq!(as_raw(""), None);
        assert_eq!(as_raw(" "), Some(" "));
        assert_eq!(as_raw("HIGH"), Some("HIGH"));
    }
}
