//! SQL script rendering
//!
//! Produces a header comment, one `CREATE TABLE` and one `INSERT` per record.
//! Values are written according to the inferred column type; a value that
//! does not fit its column's type is written as quoted text.

use crate::config::GeneratorConfig;
use crate::schema::{quote_identifier, ColumnSchema, SqlType, TableSchema};
use crate::types::{BooleanStyle, Record};
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;
use std::fmt::Write as _;

/// Renders SQL text from a schema and its records
#[derive(Debug, Clone, Default)]
pub struct SqlRenderer {
    boolean_style: BooleanStyle,
    if_not_exists: bool,
}

impl SqlRenderer {
    /// Create a renderer with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer from generator settings
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self {
            boolean_style: config.boolean_style,
            if_not_exists: config.if_not_exists,
        }
    }

    /// Set the boolean literal style
    #[must_use]
    pub fn with_boolean_style(mut self, style: BooleanStyle) -> Self {
        self.boolean_style = style;
        self
    }

    /// Emit `CREATE TABLE IF NOT EXISTS`
    #[must_use]
    pub fn with_if_not_exists(mut self, enabled: bool) -> Self {
        self.if_not_exists = enabled;
        self
    }

    /// Render the complete script
    pub fn render(
        &self,
        schema: &TableSchema,
        records: &[Record],
        source_url: &str,
        generated_at: DateTime<Utc>,
    ) -> String {
        let mut sql = self.header(schema, records.len(), source_url, generated_at);

        if records.is_empty() || schema.is_empty() {
            sql.push_str("-- No data to insert\n");
            return sql;
        }

        sql.push_str(&self.create_table(schema));
        sql.push('\n');

        for record in records {
            sql.push_str(&self.insert(schema, record));
        }

        sql
    }

    /// Leading comment block
    fn header(
        &self,
        schema: &TableSchema,
        record_count: usize,
        source_url: &str,
        generated_at: DateTime<Utc>,
    ) -> String {
        // A line break in the URL would end the comment early
        let source = source_url.replace(['\r', '\n'], " ");

        let mut header = String::new();
        let _ = writeln!(header, "-- SQL generated from JSON API");
        let _ = writeln!(header, "-- Source: {source}");
        let _ = writeln!(header, "-- Table: {}", schema.name);
        let _ = writeln!(header, "-- Records: {record_count}");
        let _ = writeln!(
            header,
            "-- Generated: {}",
            generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
        );
        header.push('\n');
        header
    }

    /// Render the `CREATE TABLE` statement, one column per line
    pub fn create_table(&self, schema: &TableSchema) -> String {
        let columns: Vec<String> = schema
            .columns
            .iter()
            .map(|col| {
                let mut def = format!("    {} {}", quote_identifier(&col.name), col.sql_type);
                if !col.nullable {
                    def.push_str(" NOT NULL");
                }
                def
            })
            .collect();

        format!(
            "CREATE TABLE {}{} (\n{}\n);\n",
            if self.if_not_exists { "IF NOT EXISTS " } else { "" },
            quote_identifier(&schema.name),
            columns.join(",\n")
        )
    }

    /// Render one `INSERT` statement with a value for every column
    pub fn insert(&self, schema: &TableSchema, record: &Record) -> String {
        let columns: Vec<_> = schema
            .columns
            .iter()
            .map(|col| quote_identifier(&col.name))
            .collect();

        let values: Vec<String> = schema
            .columns
            .iter()
            .map(|col| self.render_value(col, record.get(&col.name)))
            .collect();

        format!(
            "INSERT INTO {} ({}) VALUES ({});\n",
            quote_identifier(&schema.name),
            columns.join(", "),
            values.join(", ")
        )
    }

    /// Render a single value as a SQL literal for the given column
    pub fn render_value(&self, column: &ColumnSchema, value: Option<&Value>) -> String {
        let value = match value {
            None | Some(Value::Null) => return "NULL".to_string(),
            Some(v) => v,
        };

        match value {
            Value::Number(n) if column.sql_type.is_numeric() => n.to_string(),
            Value::Bool(b) if column.sql_type == SqlType::Boolean => {
                self.boolean_style.literal(*b).to_string()
            }
            _ => quote_string(&text_of(value)),
        }
    }
}

/// Text form of a JSON value when stored in a TEXT column
///
/// Strings are used as-is; objects and arrays become compact JSON.
fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Wrap text in single quotes, doubling any embedded single quote
pub fn quote_string(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}
