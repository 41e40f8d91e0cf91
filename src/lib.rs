//! # pagekit
//!
//! A minimal, Rust-native toolkit for Relay-style cursor pagination over
//! relational stores.
//!
//! ## Features
//!
//! - **Relay connections**: `first`/`after`, `last`/`before` over any
//!   ordered query, with edges, cursors, and page info
//! - **Opaque cursors**: invertible base64 offset tokens; malformed
//!   cursors fail fast
//! - **Pluggable stores**: a DuckDB-backed SQL store and an in-memory
//!   store, behind one `OrderedQuery` trait
//! - **Bounded round trips**: at most two counts and one fetch per page,
//!   with the count memoized
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pagekit::{paginate, MemoryQuery, PaginationArgs, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let query: MemoryQuery<i32> = (0..10).collect();
//!
//!     let page = paginate(&query, &PaginationArgs::first(3)).await?;
//!     assert_eq!(page.len(), 3);
//!     assert!(page.page_info.has_next_page);
//!
//!     // Resume where the page ended
//!     let cursor = page.page_info.end_cursor.unwrap();
//!     let next = paginate(&query, &PaginationArgs::first(3).after(cursor)).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │            paginate(query, args) → Connection        │
//! │   validate → window from cursors → fetch → edges     │
//! └──────────────────────────┬───────────────────────────┘
//!                            │ OrderedQuery: count, fetch
//!            ┌───────────────┴───────────────┐
//!            │ SqlStore/SqlQuery (DuckDB)    │
//!            │ MemoryQuery (Vec)             │
//!            └───────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types and type aliases
pub mod types;

/// Opaque offset cursors
pub mod cursor;

/// Relay connection types and the pagination adapter
pub mod connection;

/// Store collaborators (SQL and in-memory)
pub mod store;

/// One-time passcodes for recovery flows
pub mod otp;

/// Log-safe masking of personal data
pub mod masking;

/// Environment-driven runtime configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use connection::{paginate, Connection, Edge, PageInfo, PaginationArgs};
pub use error::{Error, Result};
pub use store::{MemoryQuery, OrderedQuery, SqlQuery, SqlStore};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
