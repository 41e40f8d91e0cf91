//! The ordered-query contract required from a store

use crate::error::Result;
use async_trait::async_trait;

/// An already-ordered, already-filtered query over some store.
///
/// The pagination adapter takes one of these as an explicit parameter and
/// issues at most three round trips per call: up to two counts (memoized
/// to one wherever both uses arise) and one fetch.
///
/// Implementations must satisfy two properties:
///
/// - `count` returns the total number of matching rows, ignoring any
///   pagination, under the same filters as `fetch`.
/// - `fetch` is deterministic given identical filters, ordering, and
///   storage state. The ordering must be a stable total order (break ties
///   with a unique key); otherwise pages may overlap or skip rows.
///
/// Nothing here provides snapshot isolation: the store may be written
/// between the count and the fetch of a single paginate call, and the
/// adapter accepts that race.
#[async_trait]
pub trait OrderedQuery: Send + Sync {
    /// Row type produced by this query
    type Node;

    /// Total matching rows, ignoring pagination
    async fn count(&self) -> Result<u64>;

    /// Fetch `limit` rows starting at `offset`, in query order
    async fn fetch(&self, offset: u64, limit: u64) -> Result<Vec<Self::Node>>;
}
