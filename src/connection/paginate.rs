//! The cursor pagination adapter
//!
//! One `paginate` call costs at most three store round trips: up to two
//! counts and one fetch. The total count is memoized so every path that
//! needs it twice issues it once, and an empty window skips the fetch
//! entirely.

use crate::connection::types::{Connection, Edge, PageInfo, PaginationArgs};
use crate::cursor;
use crate::error::Result;
use crate::store::OrderedQuery;

/// Paginate an ordered query according to Relay's cursor spec.
///
/// `query` must already carry its filters and a stable total order; this
/// function only narrows it to one page window. Store errors propagate
/// unchanged, with no retries. Each call is stateless and no snapshot is
/// held across the round trips, so a concurrent write may move the total
/// between the count and the fetch; the resulting page is still bounded
/// and well-formed.
pub async fn paginate<Q: OrderedQuery>(
    query: &Q,
    args: &PaginationArgs,
) -> Result<Connection<Q::Node>> {
    args.validate()?;

    let after = args.after.as_deref().map(cursor::decode).transpose()?;
    let before = args.before.as_deref().map(cursor::decode).transpose()?;

    let mut total: Option<u64> = None;

    // An absent `before` means "end of list", which costs one count round
    // trip. Memoize it; has_next_page needs the same number later.
    let end_bound = match before {
        Some(offset) => offset,
        None => {
            let count = query.count().await?;
            total = Some(count);
            count
        }
    };

    // Window [start, end): after is exclusive, before is exclusive.
    let mut start = after.map_or(0, |offset| offset.saturating_add(1));
    let mut end = end_bound.max(start);

    if let Some(first) = args.first {
        end = end.min(start.saturating_add(first as u64));
    }
    if let Some(last) = args.last {
        // end_bound already anchors at the total when no `before` was given
        start = start.max(end.saturating_sub(last as u64));
    }

    let limit = end - start;
    tracing::debug!(start, end, "resolved page window");

    let rows = if limit == 0 {
        Vec::new()
    } else {
        query.fetch(start, limit).await?
    };

    let edges: Vec<Edge<Q::Node>> = rows
        .into_iter()
        .enumerate()
        .map(|(i, node)| Edge {
            cursor: cursor::encode(start + i as u64),
            node,
        })
        .collect();

    let total = match total {
        Some(count) => count,
        None => query.count().await?,
    };

    let page_info = PageInfo {
        start_cursor: edges.first().map(|edge| edge.cursor.clone()),
        end_cursor: edges.last().map(|edge| edge.cursor.clone()),
        has_previous_page: start > 0,
        has_next_page: end < total,
    };

    Ok(Connection { edges, page_info })
}
