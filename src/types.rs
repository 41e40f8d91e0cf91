//! Common types used throughout pagekit
//!
//! Shared type aliases used across multiple modules.

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;
