//! Tests for the connection module

use super::*;
use crate::cursor;
use crate::error::Error;
use crate::store::{MemoryQuery, OrderedQuery};
use crate::Result;
use async_trait::async_trait;
use pretty_assertions::assert_eq;
use std::sync::atomic::{AtomicUsize, Ordering};

fn ten_rows() -> MemoryQuery<i32> {
    (0..10).collect()
}

fn nodes(connection: &Connection<i32>) -> Vec<i32> {
    connection.nodes().copied().collect()
}

// ============================================================================
// Argument Validation
// ============================================================================

#[tokio::test]
async fn test_neither_bound_is_rejected() {
    let err = paginate(&ten_rows(), &PaginationArgs::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::MissingPageBound));
    assert_eq!(
        err.to_string(),
        "You must provide a 'first' or 'last' value for pagination."
    );
}

#[tokio::test]
async fn test_both_bounds_are_rejected() {
    let args = PaginationArgs {
        first: Some(2),
        last: Some(2),
        ..PaginationArgs::default()
    };
    let err = paginate(&ten_rows(), &args).await.unwrap_err();
    assert!(matches!(err, Error::ConflictingPageBounds));
    assert_eq!(err.to_string(), "Provide either 'first' or 'last', not both.");
}

#[tokio::test]
async fn test_negative_first_is_rejected() {
    let err = paginate(&ten_rows(), &PaginationArgs::first(-1))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NegativeFirst));
    assert_eq!(err.to_string(), "'first' must be a non-negative integer");
}

#[tokio::test]
async fn test_negative_last_is_rejected() {
    let err = paginate(&ten_rows(), &PaginationArgs::last(-3))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NegativeLast));
    assert_eq!(err.to_string(), "'last' must be a non-negative integer");
}

#[tokio::test]
async fn test_malformed_cursor_is_an_error_not_offset_zero() {
    let args = PaginationArgs::first(3).after("definitely-not-a-cursor");
    let err = paginate(&ten_rows(), &args).await.unwrap_err();
    assert!(matches!(err, Error::InvalidCursor { .. }));
}

// ============================================================================
// Forward Pagination
// ============================================================================

#[tokio::test]
async fn test_first_page() {
    let connection = paginate(&ten_rows(), &PaginationArgs::first(3))
        .await
        .unwrap();

    assert_eq!(nodes(&connection), vec![0, 1, 2]);
    assert!(connection.page_info.has_next_page);
    assert!(!connection.page_info.has_previous_page);
    assert_eq!(connection.page_info.start_cursor, Some(cursor::encode(0)));
    assert_eq!(connection.page_info.end_cursor, Some(cursor::encode(2)));
}

#[tokio::test]
async fn test_resume_from_end_cursor() {
    let query = ten_rows();
    let first_page = paginate(&query, &PaginationArgs::first(2)).await.unwrap();
    let end_cursor = first_page.page_info.end_cursor.unwrap();

    let next_page = paginate(&query, &PaginationArgs::first(3).after(end_cursor))
        .await
        .unwrap();

    assert_eq!(nodes(&next_page), vec![2, 3, 4]);
    assert!(next_page.page_info.has_previous_page);
    assert!(next_page.page_info.has_next_page);
}

#[tokio::test]
async fn test_after_hand_built_cursor() {
    let args = PaginationArgs::first(3).after(cursor::encode(5));
    let connection = paginate(&ten_rows(), &args).await.unwrap();

    assert_eq!(nodes(&connection), vec![6, 7, 8]);
}

#[tokio::test]
async fn test_first_truncates_at_end_of_data() {
    let connection = paginate(&ten_rows(), &PaginationArgs::first(8).after(cursor::encode(6)))
        .await
        .unwrap();

    assert_eq!(nodes(&connection), vec![7, 8, 9]);
    assert!(!connection.page_info.has_next_page);
    assert!(connection.page_info.has_previous_page);
}

#[tokio::test]
async fn test_first_zero_is_a_valid_empty_window() {
    let connection = paginate(&ten_rows(), &PaginationArgs::first(0))
        .await
        .unwrap();

    assert!(connection.is_empty());
    assert_eq!(connection.page_info.start_cursor, None);
    assert_eq!(connection.page_info.end_cursor, None);
    assert!(connection.page_info.has_next_page);
    assert!(!connection.page_info.has_previous_page);
}

// ============================================================================
// Backward Pagination
// ============================================================================

#[tokio::test]
async fn test_last_page() {
    let connection = paginate(&ten_rows(), &PaginationArgs::last(3))
        .await
        .unwrap();

    assert_eq!(nodes(&connection), vec![7, 8, 9]);
    assert!(!connection.page_info.has_next_page);
    assert!(connection.page_info.has_previous_page);
}

#[tokio::test]
async fn test_resume_backward_from_start_cursor() {
    let query = ten_rows();
    let last_page = paginate(&query, &PaginationArgs::last(2)).await.unwrap();
    let start_cursor = last_page.page_info.start_cursor.unwrap();

    let previous = paginate(&query, &PaginationArgs::last(3).before(start_cursor))
        .await
        .unwrap();

    assert_eq!(nodes(&previous), vec![5, 6, 7]);
    assert!(previous.page_info.has_next_page);
    assert!(previous.page_info.has_previous_page);
}

#[tokio::test]
async fn test_last_larger_than_window_returns_everything() {
    let connection = paginate(&ten_rows(), &PaginationArgs::last(20))
        .await
        .unwrap();

    assert_eq!(connection.len(), 10);
    assert!(!connection.page_info.has_previous_page);
    assert!(!connection.page_info.has_next_page);
}

// ============================================================================
// Empty Result Sets
// ============================================================================

#[tokio::test]
async fn test_empty_result_set() {
    let query = MemoryQuery::<i32>::new(Vec::new());
    let connection = paginate(&query, &PaginationArgs::first(5)).await.unwrap();

    assert!(connection.is_empty());
    assert_eq!(connection.page_info.start_cursor, None);
    assert_eq!(connection.page_info.end_cursor, None);
    assert!(!connection.page_info.has_next_page);
    assert!(!connection.page_info.has_previous_page);
}

// ============================================================================
// Round-Trip Accounting
// ============================================================================

/// Counts the round trips paginate issues against the store.
struct Instrumented {
    inner: MemoryQuery<i32>,
    counts: AtomicUsize,
    fetches: AtomicUsize,
}

impl Instrumented {
    fn new(inner: MemoryQuery<i32>) -> Self {
        Self {
            inner,
            counts: AtomicUsize::new(0),
            fetches: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl OrderedQuery for Instrumented {
    type Node = i32;

    async fn count(&self) -> Result<u64> {
        self.counts.fetch_add(1, Ordering::SeqCst);
        self.inner.count().await
    }

    async fn fetch(&self, offset: u64, limit: u64) -> Result<Vec<i32>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.inner.fetch(offset, limit).await
    }
}

#[tokio::test]
async fn test_forward_page_issues_one_count_and_one_fetch() {
    let query = Instrumented::new(ten_rows());
    paginate(&query, &PaginationArgs::first(3)).await.unwrap();

    assert_eq!(query.counts.load(Ordering::SeqCst), 1);
    assert_eq!(query.fetches.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_before_defers_the_count_but_still_issues_one() {
    let query = Instrumented::new(ten_rows());
    let args = PaginationArgs::last(3).before(cursor::encode(8));
    let connection = paginate(&query, &args).await.unwrap();

    assert_eq!(nodes(&connection), vec![5, 6, 7]);
    assert_eq!(query.counts.load(Ordering::SeqCst), 1);
    assert_eq!(query.fetches.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_empty_window_skips_the_fetch() {
    let query = Instrumented::new(ten_rows());
    paginate(&query, &PaginationArgs::first(0)).await.unwrap();

    assert_eq!(query.fetches.load(Ordering::SeqCst), 0);
}

// ============================================================================
// Wire Format
// ============================================================================

#[tokio::test]
async fn test_connection_serializes_in_camel_case() {
    let connection = paginate(&ten_rows(), &PaginationArgs::first(1))
        .await
        .unwrap();
    let json = serde_json::to_value(&connection).unwrap();

    assert_eq!(json["edges"][0]["node"], 0);
    assert_eq!(json["edges"][0]["cursor"], cursor::encode(0).as_str());
    assert_eq!(json["pageInfo"]["hasNextPage"], true);
    assert_eq!(json["pageInfo"]["hasPreviousPage"], false);
    assert_eq!(json["pageInfo"]["startCursor"], cursor::encode(0).as_str());
}

#[test]
fn test_args_deserialize_from_graphql_shape() {
    let args: PaginationArgs =
        serde_json::from_str(r#"{"first": 3, "after": "YXJyYXljb25uZWN0aW9uOjU="}"#).unwrap();
    assert_eq!(args.first, Some(3));
    assert_eq!(args.after.as_deref(), Some("YXJyYXljb25uZWN0aW9uOjU="));
    assert!(args.validate().is_ok());
}
