//! Output module
//!
//! Renders SQL text and writes it to disk.
//!
//! # Overview
//!
//! This module provides utilities for:
//! - Rendering a `CREATE TABLE` statement from an inferred schema
//! - Rendering one `INSERT` per record with type-aware value quoting
//! - Writing the script to a `.sql` file without overwriting existing ones

mod sql;
mod writer;

pub use sql::{quote_string, SqlRenderer};
pub use writer::{candidate_path, SqlFileWriter};

#[cfg(test)]
mod tests;
