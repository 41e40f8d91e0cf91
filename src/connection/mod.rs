//! Relay-style connections
//!
//! Converts an ordered query plus Relay pagination arguments
//! (`first`/`after`, `last`/`before`) into a bounded page of edges with
//! forward/backward navigation metadata.

mod paginate;
mod types;

pub use paginate::paginate;
pub use types::{Connection, Edge, PageInfo, PaginationArgs};

#[cfg(test)]
mod tests;
