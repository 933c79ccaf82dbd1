//! Common types used throughout api-to-sql
//!
//! Shared type aliases and small enums used by more than one module.

use serde::{Deserialize, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type. Keys keep the order they had in the response body.
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// One source entity, mapped to one output row
pub type Record = JsonObject;

// ============================================================================
// Boolean Literal Style
// ============================================================================

/// How `BOOLEAN` values are written into INSERT statements
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum BooleanStyle {
    /// `TRUE` / `FALSE`
    #[default]
    TrueFalse,
    /// `1` / `0`
    Numeric,
}

impl BooleanStyle {
    /// SQL literal for a boolean in this style
    pub fn literal(self, value: bool) -> &'static str {
        match (self, value) {
            (BooleanStyle::TrueFalse, true) => "TRUE",
            (BooleanStyle::TrueFalse, false) => "FALSE",
            (BooleanStyle::Numeric, true) => "1",
            (BooleanStyle::Numeric, false) => "0",
        }
    }
}
