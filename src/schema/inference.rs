//! Schema inference from JSON records

use super::types::{ColumnSchema, SqlType, TableSchema};
use crate::types::Record;
use std::collections::HashMap;
use tracing::debug;

/// Per-field state accumulated while scanning records
#[derive(Debug)]
struct FieldStats {
    name: String,
    /// Widened type of all non-null values seen so far
    sql_type: Option<SqlType>,
    /// Records in which the field is present and non-null
    non_null_count: usize,
}

impl FieldStats {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            sql_type: None,
            non_null_count: 0,
        }
    }

    fn observe(&mut self, value: &serde_json::Value) {
        if let Some(observed) = SqlType::of_value(value) {
            self.non_null_count += 1;
            self.sql_type = Some(match self.sql_type {
                Some(existing) => existing.merge_with(observed),
                None => observed,
            });
        }
    }

    fn into_column(self, record_count: usize) -> ColumnSchema {
        ColumnSchema {
            name: self.name,
            // Only nulls seen: nothing to go on
            sql_type: self.sql_type.unwrap_or(SqlType::Text),
            nullable: self.non_null_count < record_count,
        }
    }
}

/// Infers a [`TableSchema`] from a sequence of records
#[derive(Debug, Clone)]
pub struct SchemaInferrer {
    table_name: String,
}

impl SchemaInferrer {
    /// Create an inferrer producing a table with the given name
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
        }
    }

    /// Scan all records and build the table schema
    ///
    /// Columns appear in the order their fields are first seen, scanning
    /// records in order and keys within a record in document order.
    pub fn infer(&self, records: &[Record]) -> TableSchema {
        let mut fields: Vec<FieldStats> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for record in records {
            for (key, value) in record {
                let slot = *index.entry(key.clone()).or_insert_with(|| {
                    fields.push(FieldStats::new(key));
                    fields.len() - 1
                });
                fields[slot].observe(value);
            }
        }

        let mut schema = TableSchema::new(&self.table_name);
        for stats in fields {
            schema.add_column(stats.into_column(records.len()));
        }

        debug!(
            "Inferred {} columns for table '{}' from {} records",
            schema.len(),
            schema.name,
            records.len()
        );

        schema
    }
}

/// Infer a table schema (convenience function)
pub fn infer_schema(table_name: &str, records: &[Record]) -> TableSchema {
    SchemaInferrer::new(table_name).infer(records)
}
