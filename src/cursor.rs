//! Opaque offset cursors
//!
//! A cursor encodes a zero-based offset into an ordered result set as
//! `base64("arrayconnection:<offset>")`, the same wire format used by
//! graphql-relay. Clients must treat cursors as opaque tokens; only this
//! module may look inside one.

use crate::error::{Error, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Payload prefix inside every cursor. Changing it invalidates all cursors
/// held by clients.
const CURSOR_PREFIX: &str = "arrayconnection:";

/// Encode a zero-based offset as an opaque cursor string.
pub fn encode(offset: u64) -> String {
    STANDARD.encode(format!("{CURSOR_PREFIX}{offset}"))
}

/// Decode an opaque cursor string back to its offset.
///
/// Fails fast on anything that is not a well-formed cursor: invalid
/// base64, a missing payload prefix, or a non-numeric offset. A malformed
/// cursor is a caller error, never offset 0.
pub fn decode(cursor: &str) -> Result<u64> {
    let bytes = STANDARD
        .decode(cursor)
        .map_err(|e| Error::invalid_cursor(cursor, format!("not base64: {e}")))?;

    let payload = String::from_utf8(bytes)
        .map_err(|_| Error::invalid_cursor(cursor, "payload is not UTF-8"))?;

    let offset = payload
        .strip_prefix(CURSOR_PREFIX)
        .ok_or_else(|| Error::invalid_cursor(cursor, "missing payload prefix"))?;

    offset
        .parse::<u64>()
        .map_err(|_| Error::invalid_cursor(cursor, format!("bad offset '{offset}'")))
}
