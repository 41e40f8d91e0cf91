//! CLI commands and argument parsing

use clap::{Parser, Subcommand};

/// pagekit CLI
#[derive(Parser, Debug)]
#[command(name = "pagekit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Database file (defaults to PAGEKIT_DB, or in-memory)
    #[arg(short, long, global = true)]
    pub db: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List tables in the database
    Tables,

    /// Fetch one page of rows from an ordered query
    Page {
        /// Table to page over
        #[arg(long)]
        table: String,

        /// ORDER BY clause body, e.g. "id ASC". Must be a stable total
        /// order (break ties with a unique key)
        #[arg(long)]
        order_by: String,

        /// Columns to select (comma-separated, default: all)
        #[arg(long)]
        select: Option<String>,

        /// WHERE predicate applied before pagination
        #[arg(long)]
        filter: Option<String>,

        /// Page size counted from the start of the window
        #[arg(long)]
        first: Option<i64>,

        /// Page size counted from the end of the window
        #[arg(long)]
        last: Option<i64>,

        /// Resume after this cursor
        #[arg(long)]
        after: Option<String>,

        /// Stop before this cursor
        #[arg(long)]
        before: Option<String>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON connection
    Json,
    /// Human-readable rows plus a summary line
    Pretty,
}
