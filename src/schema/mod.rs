//! Schema inference module
//!
//! Maps a sequence of JSON records onto a relational table schema.
//!
//! # Features
//!
//! - **Type Widening**: Unifies the types seen for a field across all records
//! - **Nullable Detection**: A field missing or null anywhere is nullable
//! - **Stable Column Order**: Columns follow first-seen field order
//! - **Identifiers**: Table names derived from the source URL, quoting for
//!   column names that are not plain identifiers

mod inference;
mod naming;
mod types;

pub use inference::{infer_schema, SchemaInferrer};
pub use naming::{quote_identifier, sanitize_table_name, table_name_from_url};
pub use types::{ColumnSchema, SqlType, TableSchema};
