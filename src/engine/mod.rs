//! Generation engine module
//!
//! Runs the pipeline: fetch, normalize, infer schema, render SQL, write file.
//!
//! # Overview
//!
//! The engine module provides:
//! - `Generator` - Orchestrates one URL-to-SQL conversion
//! - `GeneratedSql` - The rendered script plus what was inferred

mod types;

pub use types::GeneratedSql;

use crate::config::GeneratorConfig;
use crate::decode::JsonDecoder;
use crate::error::Result;
use crate::http::{parse_url, HttpClient, HttpClientConfig};
use crate::output::{SqlFileWriter, SqlRenderer};
use crate::schema::{sanitize_table_name, table_name_from_url, SchemaInferrer};
use chrono::Utc;
use serde_json::Value;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;
use url::Url;

/// Orchestrates fetching a document and turning it into SQL
#[derive(Debug)]
pub struct Generator {
    /// HTTP client
    client: HttpClient,
    /// Generator configuration
    config: GeneratorConfig,
}

impl Generator {
    /// Create a generator, building its HTTP client from the config
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        let client_config = HttpClientConfig::builder()
            .timeout(config.timeout())
            .headers(config.headers.clone())
            .build();
        let client = HttpClient::with_config(client_config)?;

        Ok(Self { client, config })
    }

    /// Get the configuration
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Fetch `url` and render the SQL script, without writing it
    pub async fn generate(&self, url: &str) -> Result<GeneratedSql> {
        let start = Instant::now();
        let parsed = parse_url(url)?;

        info!("Fetching data from: {}", parsed);
        let document = self.client.get_json(parsed.as_str()).await?;
        info!("JSON data fetched in {:?}", start.elapsed());

        self.convert(&parsed, document)
    }

    /// Turn an already fetched document into SQL
    pub fn convert(&self, url: &Url, document: Value) -> Result<GeneratedSql> {
        let decoder = match &self.config.records_path {
            Some(path) => JsonDecoder::with_path(path),
            None => JsonDecoder::new(),
        };
        let records = decoder.records(document)?;

        let table_name = self.table_name(url);
        info!("Using table name: {}", table_name);

        let schema = SchemaInferrer::new(&table_name).infer(&records);
        let sql = SqlRenderer::from_config(&self.config).render(
            &schema,
            &records,
            url.as_str(),
            Utc::now(),
        );

        info!(
            "Converted {} records into {} columns",
            records.len(),
            schema.len()
        );

        Ok(GeneratedSql {
            source_url: url.to_string(),
            schema,
            record_count: records.len(),
            sql,
        })
    }

    /// Write a generated script into the configured output directory
    pub fn write(&self, generated: &GeneratedSql) -> Result<PathBuf> {
        SqlFileWriter::new(&self.config.output_dir).write(generated.table_name(), &generated.sql)
    }

    /// Fetch, render and write in one go, returning the written path
    pub async fn run(&self, url: &str) -> Result<PathBuf> {
        let generated = self.generate(url).await?;
        self.write(&generated)
    }

    fn table_name(&self, url: &Url) -> String {
        match &self.config.table {
            Some(name) => sanitize_table_name(name),
            None => table_name_from_url(url),
        }
    }
}
