//! DuckDB-backed SQL store
//!
//! [`SqlStore`] owns a DuckDB connection (in-memory or file-backed).
//! [`SqlQuery`] is a small builder over one table: projection, filter
//! predicate, and a mandatory ORDER BY clause. The count statement is
//! derived from the same builder state as the page statement with the
//! projection and ordering stripped, so the two can never disagree on
//! which rows match.
//!
//! Rows surface as `serde_json::Value` objects keyed by column name,
//! using DuckDB's `to_json` over the row struct.

use crate::error::{Error, Result};
use crate::store::OrderedQuery;
use crate::types::JsonValue;
use async_trait::async_trait;
use duckdb::Connection;
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A DuckDB database handle.
///
/// The connection sits behind a mutex so queries borrowing the store are
/// `Sync`; each store call holds the lock for a single statement and
/// never across an await point.
pub struct SqlStore {
    conn: Mutex<Connection>,
}

impl SqlStore {
    /// Open an in-memory database
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open a file-backed database
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Run one or more statements, discarding any results.
    ///
    /// Intended for schema setup and seeding.
    pub fn execute_batch(&self, sql: &str) -> Result<()> {
        self.lock_conn().execute_batch(sql)?;
        Ok(())
    }

    /// List user tables in the main schema
    pub fn tables(&self) -> Result<Vec<String>> {
        let conn = self.lock_conn();
        let mut stmt = conn.prepare(
            "SELECT table_name FROM information_schema.tables
             WHERE table_schema = 'main'
             ORDER BY table_name",
        )?;

        let tables = stmt
            .query_map([], |row| row.get(0))?
            .collect::<std::result::Result<Vec<String>, _>>()?;

        Ok(tables)
    }

    /// Start building an ordered query over `table`.
    ///
    /// `order_by` is a raw ORDER BY clause body (e.g. `"id ASC"`). It must
    /// define a stable total order; break ties with a unique key or pages
    /// may overlap or skip rows.
    pub fn query(&self, table: impl Into<String>, order_by: impl Into<String>) -> SqlQuery<'_> {
        SqlQuery {
            store: self,
            table: table.into(),
            projection: Vec::new(),
            filter: None,
            order_by: order_by.into(),
        }
    }

    fn lock_conn(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for SqlStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqlStore").finish_non_exhaustive()
    }
}

/// An ordered, filterable query over one table of a [`SqlStore`].
///
/// Filter and projection fragments are raw SQL supplied by the caller;
/// this builder does not parse or sanitize them.
#[derive(Debug, Clone)]
pub struct SqlQuery<'a> {
    store: &'a SqlStore,
    table: String,
    projection: Vec<String>,
    filter: Option<String>,
    order_by: String,
}

impl SqlQuery<'_> {
    /// Restrict the projection to the given columns (default: `*`)
    #[must_use]
    pub fn select<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.projection = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Add a WHERE predicate (combined with AND if called repeatedly)
    #[must_use]
    pub fn filter(mut self, predicate: impl Into<String>) -> Self {
        let predicate = predicate.into();
        self.filter = Some(match self.filter {
            Some(existing) => format!("{existing} AND {predicate}"),
            None => predicate,
        });
        self
    }

    /// The FROM + WHERE core shared by the page and count statements
    fn base_sql(&self) -> String {
        let mut sql = format!("FROM {}", self.table);
        if let Some(filter) = &self.filter {
            sql = format!("{sql} WHERE {filter}");
        }
        sql
    }

    fn page_sql(&self, offset: u64, limit: u64) -> String {
        let projection = if self.projection.is_empty() {
            "*".to_string()
        } else {
            self.projection.join(", ")
        };
        format!(
            "SELECT {projection} {} ORDER BY {} LIMIT {limit} OFFSET {offset}",
            self.base_sql(),
            self.order_by
        )
    }

    /// Count over the same filters, projection and ordering stripped
    fn count_sql(&self) -> String {
        format!("SELECT count(*) {}", self.base_sql())
    }
}

#[async_trait]
impl OrderedQuery for SqlQuery<'_> {
    type Node = JsonValue;

    async fn count(&self) -> Result<u64> {
        let sql = self.count_sql();
        tracing::debug!("executing count: {sql}");

        let conn = self.store.lock_conn();
        let count: i64 = conn.query_row(&sql, [], |row| row.get(0))?;
        Ok(count.max(0) as u64)
    }

    async fn fetch(&self, offset: u64, limit: u64) -> Result<Vec<JsonValue>> {
        // Wrap the page in to_json so rows come back as one text column,
        // keyed by column name, regardless of the projection. DuckDB
        // preserves the inner ORDER BY through the wrapping projection.
        let sql = format!(
            "SELECT CAST(to_json(q) AS VARCHAR) FROM ({}) AS q",
            self.page_sql(offset, limit)
        );
        tracing::debug!("executing fetch: {sql}");

        let conn = self.store.lock_conn();
        let mut stmt = conn.prepare(&sql)?;
        let raw = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<std::result::Result<Vec<String>, _>>()?;
        drop(stmt);
        drop(conn);

        raw.iter()
            .map(|line| serde_json::from_str(line).map_err(Error::from))
            .collect()
    }
}
