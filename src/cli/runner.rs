//! CLI runner - executes the conversion

use crate::cli::commands::Cli;
use crate::config::{parse_header, GeneratorConfig};
use crate::engine::Generator;
use crate::error::{Error, Result};
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the conversion described by the command line
    pub async fn run(&self) -> Result<()> {
        let config = self.build_config()?;
        let url = self.resolve_url()?;

        let generator = Generator::new(config)?;
        let generated = generator.generate(&url).await?;

        if self.cli.stdout {
            print!("{}", generated.sql);
            return Ok(());
        }

        let path = generator.write(&generated)?;
        info!(
            "SQL file saved as: {} ({} records, {} columns)",
            path.display(),
            generated.record_count,
            generated.column_count()
        );
        println!("{}", path.display());

        Ok(())
    }

    /// Load the config file (if any) and apply command-line overrides
    pub fn build_config(&self) -> Result<GeneratorConfig> {
        let mut config = match &self.cli.config {
            Some(path) => {
                debug!("Loading config from {}", path.display());
                GeneratorConfig::from_file(path)?
            }
            None => GeneratorConfig::default(),
        };

        for raw in &self.cli.headers {
            let (name, value) = parse_header(raw)?;
            config.headers.insert(name, value);
        }
        if let Some(dir) = &self.cli.output_dir {
            config.output_dir.clone_from(dir);
        }
        if let Some(table) = &self.cli.table {
            config.table = Some(table.clone());
        }
        if let Some(path) = &self.cli.records_path {
            config.records_path = Some(path.clone());
        }
        if let Some(style) = self.cli.boolean_style {
            config.boolean_style = style;
        }
        if self.cli.if_not_exists {
            config.if_not_exists = true;
        }
        if let Some(secs) = self.cli.timeout {
            config.timeout_secs = secs;
        }

        Ok(config)
    }

    /// URL from the command line, or read interactively from stdin
    fn resolve_url(&self) -> Result<String> {
        match &self.cli.url {
            Some(url) if !url.trim().is_empty() => Ok(url.trim().to_string()),
            _ => prompt_for_url(&mut io::stdin().lock(), &mut io::stderr()),
        }
    }
}

/// Ask for the API URL and read one line of input
pub fn prompt_for_url<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String> {
    write!(output, "Enter API URL: ")
        .and_then(|()| output.flush())
        .map_err(|e| Error::config(format!("failed to prompt for URL: {e}")))?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .map_err(|e| Error::config(format!("failed to read URL: {e}")))?;

    let url = line.trim();
    if url.is_empty() {
        return Err(Error::config("API URL is required"));
    }
    Ok(url.to_string())
}
