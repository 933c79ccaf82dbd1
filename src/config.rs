//! Generator configuration
//!
//! Settings can come from a YAML file (`--config`), from command-line flags,
//! or from the builder methods below. Flags override file values.

use crate::error::{Error, Result};
use crate::types::BooleanStyle;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Table name used when none can be derived from the URL
pub const DEFAULT_TABLE_NAME: &str = "api_data";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Complete configuration for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Extra request headers sent with the GET
    pub headers: HashMap<String, String>,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Dot-separated path to the records inside the response document
    pub records_path: Option<String>,

    /// Explicit table name, sanitized but kept whole (no extension stripping)
    pub table: Option<String>,

    /// How BOOLEAN values are rendered
    pub boolean_style: BooleanStyle,

    /// Emit `CREATE TABLE IF NOT EXISTS`
    pub if_not_exists: bool,

    /// Directory the `.sql` file is written to
    pub output_dir: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            headers: HashMap::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            records_path: None,
            table: None,
            boolean_style: BooleanStyle::default(),
            if_not_exists: false,
            output_dir: PathBuf::from("."),
        }
    }
}

impl GeneratorConfig {
    /// Create a config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from YAML text
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a config from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;
        Self::from_yaml_str(&content)
    }

    /// Request timeout as a duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Add a request header
    #[must_use]
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set the records path
    #[must_use]
    pub fn with_records_path(mut self, path: impl Into<String>) -> Self {
        self.records_path = Some(path.into());
        self
    }

    /// Set an explicit table name
    #[must_use]
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    /// Set the boolean literal style
    #[must_use]
    pub fn with_boolean_style(mut self, style: BooleanStyle) -> Self {
        self.boolean_style = style;
        self
    }

    /// Enable or disable `IF NOT EXISTS`
    #[must_use]
    pub fn with_if_not_exists(mut self, enabled: bool) -> Self {
        self.if_not_exists = enabled;
        self
    }

    /// Set the output directory
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set the request timeout in seconds
    #[must_use]
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Parse a `Name: Value` header argument
///
/// Only the first `:` separates name from value, so values may contain colons.
pub fn parse_header(raw: &str) -> Result<(String, String)> {
    let (name, value) = raw
        .split_once(':')
        .ok_or_else(|| Error::config(format!("Invalid header '{raw}' (expected 'Name: Value')")))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(Error::config(format!("Invalid header '{raw}': empty name")));
    }

    Ok((name.to_string(), value.trim().to_string()))
}
