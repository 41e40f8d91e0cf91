//! Connection types
//!
//! The Relay connection shapes: pagination arguments in, edges plus page
//! info out. Field names serialize in the camelCase wire form GraphQL
//! clients expect.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Relay pagination arguments.
///
/// Exactly one of `first`/`last` must be provided; each must be
/// non-negative. `after`/`before` are opaque cursors from a previous
/// page. Bounds are signed so that out-of-range client input reaches
/// [`validate`](Self::validate) instead of failing deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaginationArgs {
    /// Forward page size: at most this many rows after `after`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<i64>,

    /// Backward page size: at most this many rows before `before`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<i64>,

    /// Exclusive lower-bound cursor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,

    /// Exclusive upper-bound cursor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
}

impl PaginationArgs {
    /// Forward pagination: the first `n` rows
    pub fn first(n: i64) -> Self {
        Self {
            first: Some(n),
            ..Self::default()
        }
    }

    /// Backward pagination: the last `n` rows
    pub fn last(n: i64) -> Self {
        Self {
            last: Some(n),
            ..Self::default()
        }
    }

    /// Start after the given cursor
    #[must_use]
    pub fn after(mut self, cursor: impl Into<String>) -> Self {
        self.after = Some(cursor.into());
        self
    }

    /// End before the given cursor
    #[must_use]
    pub fn before(mut self, cursor: impl Into<String>) -> Self {
        self.before = Some(cursor.into());
        self
    }

    /// Check the first/last invariant.
    ///
    /// Each failure is a distinct error whose message text is stable.
    pub fn validate(&self) -> Result<()> {
        match (self.first, self.last) {
            (None, None) => Err(Error::MissingPageBound),
            (Some(_), Some(_)) => Err(Error::ConflictingPageBounds),
            (Some(first), None) if first < 0 => Err(Error::NegativeFirst),
            (None, Some(last)) if last < 0 => Err(Error::NegativeLast),
            _ => Ok(()),
        }
    }
}

/// One result row plus its cursor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge<T> {
    /// The row itself
    pub node: T,
    /// Opaque position of the row in the full ordered result set
    pub cursor: String,
}

/// Navigation metadata for a page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Cursor of the first edge, or null for an empty page
    pub start_cursor: Option<String>,
    /// Cursor of the last edge, or null for an empty page
    pub end_cursor: Option<String>,
    /// Whether rows exist before this page
    pub has_previous_page: bool,
    /// Whether rows exist after this page
    pub has_next_page: bool,
}

/// A paginated result: edges plus page info
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection<T> {
    /// The page's rows, in query order
    pub edges: Vec<Edge<T>>,
    /// Navigation metadata
    pub page_info: PageInfo,
}

impl<T> Connection<T> {
    /// Iterate over the page's rows without their cursors
    pub fn nodes(&self) -> impl Iterator<Item = &T> {
        self.edges.iter().map(|edge| &edge.node)
    }

    /// Number of edges in this page
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether the page holds no edges
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
