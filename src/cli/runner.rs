//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::Config;
use crate::connection::{paginate, Connection, PaginationArgs};
use crate::error::Result;
use crate::store::SqlStore;
use crate::types::JsonValue;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = Config::from_env()?;
        let store = self.open_store(&config)?;

        match &self.cli.command {
            Commands::Tables => Self::tables(&store),
            Commands::Page {
                table,
                order_by,
                select,
                filter,
                first,
                last,
                after,
                before,
            } => {
                let args = page_args(&config, *first, *last, after.clone(), before.clone());
                self.page(
                    &store,
                    table,
                    order_by,
                    select.as_deref(),
                    filter.as_deref(),
                    &args,
                )
                .await
            }
        }
    }

    fn open_store(&self, config: &Config) -> Result<SqlStore> {
        let database = self.cli.db.as_ref().unwrap_or(&config.database);
        if database == ":memory:" {
            SqlStore::open_in_memory()
        } else {
            SqlStore::open(database)
        }
    }

    fn tables(store: &SqlStore) -> Result<()> {
        for table in store.tables()? {
            println!("{table}");
        }
        Ok(())
    }

    async fn page(
        &self,
        store: &SqlStore,
        table: &str,
        order_by: &str,
        select: Option<&str>,
        filter: Option<&str>,
        args: &PaginationArgs,
    ) -> Result<()> {
        let mut query = store.query(table, order_by);
        if let Some(columns) = select {
            query = query.select(columns.split(',').map(str::trim));
        }
        if let Some(predicate) = filter {
            query = query.filter(predicate);
        }

        let connection = paginate(&query, args).await?;
        tracing::info!(table, rows = connection.len(), "page fetched");

        match self.cli.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&connection)?),
            OutputFormat::Pretty => print_pretty(&connection),
        }
        Ok(())
    }
}

/// Resolve CLI bounds into pagination arguments.
///
/// With no bound at all, the configured default page size applies.
/// Requested sizes are clamped to the configured maximum; invalid
/// combinations pass through so `paginate` reports them.
fn page_args(
    config: &Config,
    first: Option<i64>,
    last: Option<i64>,
    after: Option<String>,
    before: Option<String>,
) -> PaginationArgs {
    let (first, last) = match (first, last) {
        (None, None) => (Some(config.page_size), None),
        (Some(first), None) => (Some(config.clamp_page_size(first)), None),
        (None, Some(last)) => (None, Some(config.clamp_page_size(last))),
        (Some(first), Some(last)) => (Some(first), Some(last)),
    };

    PaginationArgs {
        first,
        last,
        after,
        before,
    }
}

fn print_pretty(connection: &Connection<JsonValue>) {
    for edge in &connection.edges {
        println!("{}  {}", edge.cursor, edge.node);
    }
    let info = &connection.page_info;
    println!(
        "{} row(s)  has_previous={}  has_next={}",
        connection.len(),
        info.has_previous_page,
        info.has_next_page
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_page_args_defaults_to_configured_page_size() {
        let config = Config::default();
        let args = page_args(&config, None, None, None, None);
        assert_eq!(args.first, Some(20));
        assert_eq!(args.last, None);
    }

    #[test]
    fn test_page_args_clamps_to_max() {
        let config = Config::default();
        let args = page_args(&config, Some(5000), None, None, None);
        assert_eq!(args.first, Some(100));

        let args = page_args(&config, None, Some(5000), None, None);
        assert_eq!(args.last, Some(100));
    }

    #[test]
    fn test_page_args_passes_conflicts_through_for_validation() {
        let config = Config::default();
        let args = page_args(&config, Some(1), Some(1), None, None);
        assert!(args.validate().is_err());
    }
}
