//! CLI module
//!
//! Command-line interface for paging through database tables.
//!
//! # Commands
//!
//! - `tables` - List tables in the database
//! - `page` - Fetch one page of rows from an ordered query

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
