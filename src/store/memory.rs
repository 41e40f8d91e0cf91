//! In-memory ordered query
//!
//! Wraps an already-ordered `Vec<T>`. Useful as a test collaborator and
//! for paginating data that is already in memory.

use crate::error::Result;
use crate::store::OrderedQuery;
use async_trait::async_trait;

/// An ordered, filtered result set held in memory.
///
/// The vector's order is the query order; callers apply any filtering
/// before construction.
#[derive(Debug, Clone, Default)]
pub struct MemoryQuery<T> {
    rows: Vec<T>,
}

impl<T> MemoryQuery<T> {
    /// Create a query over an ordered vector
    pub fn new(rows: Vec<T>) -> Self {
        Self { rows }
    }
}

impl<T> FromIterator<T> for MemoryQuery<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[async_trait]
impl<T: Clone + Send + Sync> OrderedQuery for MemoryQuery<T> {
    type Node = T;

    async fn count(&self) -> Result<u64> {
        Ok(self.rows.len() as u64)
    }

    async fn fetch(&self, offset: u64, limit: u64) -> Result<Vec<T>> {
        let start = (offset as usize).min(self.rows.len());
        let end = start.saturating_add(limit as usize).min(self.rows.len());
        Ok(self.rows[start..end].to_vec())
    }
}
