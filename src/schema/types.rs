//! Schema types

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// SQL column type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SqlType {
    Boolean,
    Integer,
    Double,
    Text,
}

impl SqlType {
    /// Type of a single JSON value, `None` for null
    ///
    /// Objects and arrays are stored as their JSON text.
    pub fn of_value(value: &Value) -> Option<SqlType> {
        match value {
            Value::Null => None,
            Value::Bool(_) => Some(SqlType::Boolean),
            Value::Number(n) => {
                if n.is_i64() || n.is_u64() {
                    Some(SqlType::Integer)
                } else {
                    Some(SqlType::Double)
                }
            }
            Value::String(_) | Value::Array(_) | Value::Object(_) => Some(SqlType::Text),
        }
    }

    /// Merge two types, returning the narrowest type that holds both
    pub fn merge_with(self, other: SqlType) -> SqlType {
        match (self, other) {
            (a, b) if a == b => a,
            (SqlType::Integer, SqlType::Double) | (SqlType::Double, SqlType::Integer) => {
                SqlType::Double
            }
            // Incompatible types - fall back to text
            _ => SqlType::Text,
        }
    }

    /// Whether values of this type are written without quotes
    pub fn is_numeric(self) -> bool {
        matches!(self, SqlType::Integer | SqlType::Double)
    }
}

impl std::fmt::Display for SqlType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SqlType::Boolean => write!(f, "BOOLEAN"),
            SqlType::Integer => write!(f, "INTEGER"),
            SqlType::Double => write!(f, "DOUBLE PRECISION"),
            SqlType::Text => write!(f, "TEXT"),
        }
    }
}

/// One inferred column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSchema {
    /// Field name as it appears in the JSON
    pub name: String,
    /// Inferred SQL type
    pub sql_type: SqlType,
    /// True if any record omits the field or has it null
    pub nullable: bool,
}

impl ColumnSchema {
    /// Create a NOT NULL column
    pub fn new(name: impl Into<String>, sql_type: SqlType) -> Self {
        Self {
            name: name.into(),
            sql_type,
            nullable: false,
        }
    }

    /// Create a nullable column
    pub fn nullable(name: impl Into<String>, sql_type: SqlType) -> Self {
        Self {
            name: name.into(),
            sql_type,
            nullable: true,
        }
    }
}

/// Table name plus columns in first-seen order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    /// Sanitized table name
    pub name: String,
    /// Columns in the order their fields were first seen
    pub columns: Vec<ColumnSchema>,
}

impl TableSchema {
    /// Create an empty schema
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
        }
    }

    /// Append a column
    pub fn add_column(&mut self, column: ColumnSchema) {
        self.columns.push(column);
    }

    /// Look up a column by field name
    pub fn column(&self, name: &str) -> Option<&ColumnSchema> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Field names in schema order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// True if no columns were inferred
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
