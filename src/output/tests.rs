//! Tests for output module

use super::*;
use crate::schema::{infer_schema, ColumnSchema, SqlType, TableSchema};
use crate::types::{BooleanStyle, Record};
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tempfile::tempdir;

fn records(value: Value) -> Vec<Record> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_object().unwrap().clone())
        .collect()
}

fn insert_lines(sql: &str) -> Vec<&str> {
    sql.lines().filter(|l| l.starts_with("INSERT INTO")).collect()
}

/// Pull the single-quoted literal out of `INSERT ... VALUES ('...');`
fn unquote_single_value(line: &str) -> String {
    let start = line.find("VALUES ('").unwrap() + "VALUES ('".len();
    let end = line.rfind("');").unwrap();
    line[start..end].replace("''", "'")
}

// ============================================================================
// Full Script Tests
// ============================================================================

#[test]
fn test_render_users_example() {
    let recs = records(json!([
        {"id": 1, "name": "Ann"},
        {"id": 2, "name": "Bo", "age": 30}
    ]));
    let schema = infer_schema("users", &recs);
    let generated_at = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();

    let sql = SqlRenderer::new().render(
        &schema,
        &recs,
        "https://api.example.com/users",
        generated_at,
    );

    let expected = "\
-- SQL generated from JSON API
-- Source: https://api.example.com/users
-- Table: users
-- Records: 2
-- Generated: 2024-01-15T10:30:00Z

CREATE TABLE users (
    id INTEGER NOT NULL,
    name TEXT NOT NULL,
    age INTEGER
);

INSERT INTO users (id, name, age) VALUES (1, 'Ann', NULL);
INSERT INTO users (id, name, age) VALUES (2, 'Bo', 30);
";
    assert_eq!(sql, expected);
}

#[test]
fn test_render_insert_count_matches_records() {
    let recs = records(json!([
        {"id": 1, "v": "a"},
        {"id": 2, "v": "b"},
        {"id": 3, "v": "c"},
        {"id": 4, "v": "d"},
        {"id": 5, "v": "e"}
    ]));
    let schema = infer_schema("t", &recs);

    let sql = SqlRenderer::new().render(&schema, &recs, "http://x/t", Utc::now());
    assert_eq!(insert_lines(&sql).len(), 5);
    assert_eq!(sql.matches("CREATE TABLE").count(), 1);
}

#[test]
fn test_render_every_statement_terminated() {
    let recs = records(json!([{"a": 1}, {"a": 2}]));
    let schema = infer_schema("t", &recs);

    let sql = SqlRenderer::new().render(&schema, &recs, "http://x/t", Utc::now());
    assert!(sql.ends_with(";\n"));
    for line in insert_lines(&sql) {
        assert!(line.ends_with(';'));
    }
}

#[test]
fn test_render_no_records() {
    let schema = TableSchema::new("empty");
    let sql = SqlRenderer::new().render(&schema, &[], "http://x/empty", Utc::now());

    assert!(sql.starts_with("-- SQL generated from JSON API\n"));
    assert!(sql.contains("-- Records: 0\n"));
    assert!(sql.ends_with("-- No data to insert\n"));
    assert!(!sql.contains("CREATE TABLE"));
}

#[test]
fn test_render_records_without_fields() {
    let recs = records(json!([{}, {}]));
    let schema = infer_schema("t", &recs);

    let sql = SqlRenderer::new().render(&schema, &recs, "http://x/t", Utc::now());
    assert!(sql.ends_with("-- No data to insert\n"));
    assert!(insert_lines(&sql).is_empty());
}

#[test]
fn test_render_header_strips_line_breaks() {
    let schema = TableSchema::new("t");
    let sql = SqlRenderer::new().render(&schema, &[], "http://x/t\nDROP TABLE t;", Utc::now());
    assert!(sql.contains("-- Source: http://x/t DROP TABLE t;\n"));
}

// ============================================================================
// CREATE TABLE Tests
// ============================================================================

#[test]
fn test_create_table_if_not_exists() {
    let mut schema = TableSchema::new("items");
    schema.add_column(ColumnSchema::new("id", SqlType::Integer));

    let sql = SqlRenderer::new().with_if_not_exists(true).create_table(&schema);
    assert_eq!(sql, "CREATE TABLE IF NOT EXISTS items (\n    id INTEGER NOT NULL\n);\n");
}

#[test]
fn test_create_table_quotes_identifiers() {
    let mut schema = TableSchema::new("user");
    schema.add_column(ColumnSchema::new("first name", SqlType::Text));
    schema.add_column(ColumnSchema::nullable("order", SqlType::Double));

    let sql = SqlRenderer::new().create_table(&schema);
    assert_eq!(
        sql,
        "CREATE TABLE \"user\" (\n    \"first name\" TEXT NOT NULL,\n    \"order\" DOUBLE PRECISION\n);\n"
    );
}

// ============================================================================
// Value Rendering Tests
// ============================================================================

#[test]
fn test_render_value_escapes_apostrophe() {
    let col = ColumnSchema::new("name", SqlType::Text);
    let value = json!("O'Brien");
    assert_eq!(
        SqlRenderer::new().render_value(&col, Some(&value)),
        "'O''Brien'"
    );
}

#[test]
fn test_render_value_null_and_absent() {
    let renderer = SqlRenderer::new();
    let col = ColumnSchema::nullable("x", SqlType::Integer);
    assert_eq!(renderer.render_value(&col, None), "NULL");
    assert_eq!(renderer.render_value(&col, Some(&Value::Null)), "NULL");
}

#[test]
fn test_render_value_numbers() {
    let renderer = SqlRenderer::new();
    let int_col = ColumnSchema::new("n", SqlType::Integer);
    let dbl_col = ColumnSchema::new("d", SqlType::Double);

    assert_eq!(renderer.render_value(&int_col, Some(&json!(-42))), "-42");
    assert_eq!(renderer.render_value(&dbl_col, Some(&json!(2.5))), "2.5");
    assert_eq!(renderer.render_value(&dbl_col, Some(&json!(3))), "3");
}

#[test]
fn test_render_value_numeric_column_fallback() {
    let renderer = SqlRenderer::new();
    let col = ColumnSchema::new("n", SqlType::Integer);

    assert_eq!(renderer.render_value(&col, Some(&json!("n/a"))), "'n/a'");
    assert_eq!(renderer.render_value(&col, Some(&json!(true))), "'true'");
}

#[test]
fn test_render_value_booleans() {
    let col = ColumnSchema::new("b", SqlType::Boolean);

    let renderer = SqlRenderer::new();
    assert_eq!(renderer.render_value(&col, Some(&json!(true))), "TRUE");
    assert_eq!(renderer.render_value(&col, Some(&json!(false))), "FALSE");

    let renderer = SqlRenderer::new().with_boolean_style(BooleanStyle::Numeric);
    assert_eq!(renderer.render_value(&col, Some(&json!(true))), "1");
    assert_eq!(renderer.render_value(&col, Some(&json!(false))), "0");
}

#[test]
fn test_render_value_scalars_in_text_column() {
    let renderer = SqlRenderer::new();
    let col = ColumnSchema::new("t", SqlType::Text);

    assert_eq!(renderer.render_value(&col, Some(&json!(404))), "'404'");
    assert_eq!(renderer.render_value(&col, Some(&json!(false))), "'false'");
}

#[test]
fn test_nested_value_round_trips_through_text() {
    let original = json!({
        "street": "1 Baker's Row",
        "tags": ["a", "b's"],
        "geo": {"lat": 51.5, "lng": -0.12},
        "empty": null
    });
    let recs = records(json!([{"address": original.clone()}]));
    let schema = infer_schema("t", &recs);
    assert_eq!(schema.column("address").unwrap().sql_type, SqlType::Text);

    let sql = SqlRenderer::new().render(&schema, &recs, "http://x/t", Utc::now());
    let line = insert_lines(&sql)[0];
    let decoded: Value = serde_json::from_str(&unquote_single_value(line)).unwrap();

    assert_eq!(decoded, original);
}

#[test]
fn test_array_value_round_trips_through_text() {
    let original = json!([1, "two", {"three": 3}]);
    let recs = records(json!([{"items": original.clone()}]));
    let schema = infer_schema("t", &recs);

    let line = SqlRenderer::new().insert(&schema, &recs[0]);
    let decoded: Value = serde_json::from_str(&unquote_single_value(&line)).unwrap();

    assert_eq!(decoded, original);
}

#[test]
fn test_quote_string() {
    assert_eq!(quote_string(""), "''");
    assert_eq!(quote_string("plain"), "'plain'");
    assert_eq!(quote_string("''"), "''''''");
}

// ============================================================================
// Writer Tests
// ============================================================================

#[test]
fn test_candidate_path() {
    let dir = std::path::Path::new("/out");
    assert_eq!(candidate_path(dir, "users", 0), dir.join("users.sql"));
    assert_eq!(candidate_path(dir, "users", 3), dir.join("users_3.sql"));
}

#[test]
fn test_writer_creates_file() {
    let dir = tempdir().unwrap();
    let writer = SqlFileWriter::new(dir.path());

    let path = writer.write("users", "SELECT 1;\n").unwrap();

    assert_eq!(path, dir.path().join("users.sql"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "SELECT 1;\n");
}

#[test]
fn test_writer_never_overwrites() {
    let dir = tempdir().unwrap();
    let writer = SqlFileWriter::new(dir.path());

    let first = writer.write("users", "-- first\n").unwrap();
    let second = writer.write("users", "-- second\n").unwrap();
    let third = writer.write("users", "-- third\n").unwrap();

    assert_eq!(first, dir.path().join("users.sql"));
    assert_eq!(second, dir.path().join("users_1.sql"));
    assert_eq!(third, dir.path().join("users_2.sql"));
    assert_eq!(std::fs::read_to_string(&first).unwrap(), "-- first\n");
    assert_eq!(std::fs::read_to_string(&second).unwrap(), "-- second\n");
}

#[test]
fn test_writer_fills_first_gap() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("users.sql"), "x").unwrap();
    std::fs::write(dir.path().join("users_2.sql"), "x").unwrap();

    let path = SqlFileWriter::new(dir.path()).write("users", "y").unwrap();
    assert_eq!(path, dir.path().join("users_1.sql"));
}

#[test]
fn test_writer_creates_missing_directory() {
    let dir = tempdir().unwrap();
    let nested = dir.path().join("a").join("b");

    let writer = SqlFileWriter::new(&nested);
    assert_eq!(writer.dir(), nested.as_path());

    let path = writer.write("t", "-- ok\n").unwrap();
    assert!(path.starts_with(&nested));
    assert!(path.exists());
}

#[test]
fn test_writer_error_when_dir_is_a_file() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "not a dir").unwrap();

    let err = SqlFileWriter::new(&blocker).write("t", "x").unwrap_err();
    assert_eq!(err.category(), crate::error::ErrorCategory::Write);
}

#[test]
fn test_writer_removes_partial_file_on_failure() {
    use std::io::Write;

    let dir = tempdir().unwrap();
    let writer = SqlFileWriter::new(dir.path());

    let err = writer
        .write_with("users", |file| {
            file.write_all(b"CREATE TABLE users (")?;
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"))
        })
        .unwrap_err();

    assert_eq!(err.category(), crate::error::ErrorCategory::Write);
    assert_eq!(
        err.to_string(),
        format!(
            "Failed to write '{}': disk full",
            dir.path().join("users.sql").display()
        )
    );
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);

    // The name is free again for the next run
    let path = writer.write("users", "-- ok\n").unwrap();
    assert_eq!(path, dir.path().join("users.sql"));
}
