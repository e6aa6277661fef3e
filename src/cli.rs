//! `sortgrid` command line: sort JSON datasets and apply header toggles.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use crate::config::{Config, DisplayConfig};
use crate::criteria::{
    header_click, MultiSortReducer, SortCriteria, SortCriterion, SortIntent, SortMode,
    SortToggle, ToggleDirection,
};
use crate::data::{ColumnId, Row};
use crate::mvi::Reducer;
use crate::sorting;

#[derive(Debug, Parser)]
#[command(name = "sortgrid", version, about = "Order table rows by multi-column sort criteria")]
pub struct Cli {
    /// Config file (default: ~/.config/sortgrid/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sort a JSON array of rows and print the result
    Sort(SortArgs),
    /// Set a column's direction and print the new criteria
    Toggle(ToggleArgs),
    /// Cycle a column none -> asc -> desc -> none and print the new criteria
    Click(ClickArgs),
}

#[derive(Debug, Args)]
pub struct SortArgs {
    /// JSON file holding an array of rows, or `-` for stdin
    #[arg(long, value_name = "FILE")]
    pub data: PathBuf,

    /// Sort key as COLUMN:DIRECTION, repeatable, most significant first
    #[arg(long = "by", value_name = "COLUMN:DIR")]
    pub by: Vec<SortCriterion>,

    /// Criteria as JSON, applied before any --by keys
    #[arg(long, value_name = "JSON")]
    pub criteria: Option<String>,

    /// Print the row permutation instead of the rows
    #[arg(long)]
    pub indices: bool,
}

#[derive(Debug, Args)]
pub struct ToggleArgs {
    /// Sort mode (default from config)
    #[arg(long)]
    pub mode: Option<SortMode>,

    /// Current criteria as JSON (default: none)
    #[arg(long, value_name = "JSON")]
    pub criteria: Option<String>,

    /// Column index or key
    #[arg(long)]
    pub column: ColumnId,

    /// asc, desc or none
    #[arg(long)]
    pub direction: ToggleDirection,
}

#[derive(Debug, Args)]
pub struct ClickArgs {
    /// Sort mode (default from config)
    #[arg(long)]
    pub mode: Option<SortMode>,

    /// Current criteria as JSON (default: none)
    #[arg(long, value_name = "JSON")]
    pub criteria: Option<String>,

    /// Column index or key
    #[arg(long)]
    pub column: ColumnId,
}

/// Execute a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Command::Sort(args) => run_sort(args, &config),
        Command::Toggle(args) => {
            let mode = args.mode.unwrap_or(config.defaults.mode);
            let current = parse_criteria(args.criteria.as_deref())?;
            let next = mode.update_settings(&current, SortToggle::new(args.column, args.direction));
            write_json(&next, &config.display)
        }
        Command::Click(args) => {
            let mode = args.mode.unwrap_or(config.defaults.mode);
            let current = parse_criteria(args.criteria.as_deref())?;
            let next = header_click(mode, &current, args.column);
            write_json(&next, &config.display)
        }
    }
}

fn run_sort(args: SortArgs, config: &Config) -> Result<()> {
    let rows = read_rows(&args.data)?;

    // --by keys behave like successive multi-mode toggles, so a repeated
    // column updates its direction instead of being rejected.
    let criteria = MultiSortReducer::reduce_all(
        parse_criteria(args.criteria.as_deref())?,
        args.by.into_iter().map(|c| SortIntent::Toggle(c.into())),
    );

    if args.indices {
        write_json(&sorting::sort_indices(&rows, &criteria), &config.display)
    } else {
        write_json(&sorting::sort(&rows, &criteria), &config.display)
    }
}

fn parse_criteria(json: Option<&str>) -> Result<SortCriteria> {
    match json {
        Some(text) => serde_json::from_str(text).context("Invalid --criteria JSON"),
        None => Ok(SortCriteria::new()),
    }
}

fn read_rows(path: &Path) -> Result<Vec<Row>> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read rows from stdin")?;
        buf
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read data file '{}'", path.display()))?
    };

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse rows from '{}'", path.display()))
}

fn write_json<T: Serialize>(value: &T, display: &DisplayConfig) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if display.pretty {
        let indent = " ".repeat(display.indent);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
        let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
        value.serialize(&mut serializer)?;
    } else {
        serde_json::to_writer(&mut out, value)?;
    }

    writeln!(out)?;
    Ok(())
}
