//! Engine types

use crate::schema::TableSchema;

/// Result of converting one document into SQL
#[derive(Debug, Clone)]
pub struct GeneratedSql {
    /// URL the document was fetched from
    pub source_url: String,
    /// Inferred table schema
    pub schema: TableSchema,
    /// Number of records (and INSERT statements)
    pub record_count: usize,
    /// The complete SQL script
    pub sql: String,
}

impl GeneratedSql {
    /// Name of the generated table
    pub fn table_name(&self) -> &str {
        &self.schema.name
    }

    /// Number of inferred columns
    pub fn column_count(&self) -> usize {
        self.schema.len()
    }
}
