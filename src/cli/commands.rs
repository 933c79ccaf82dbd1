//! CLI arguments

use crate::types::BooleanStyle;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Fetch JSON from an API and turn it into a CREATE TABLE + INSERT script
#[derive(Parser, Debug)]
#[command(name = "api-to-sql")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// API URL to fetch (prompted for if omitted)
    pub url: Option<String>,

    /// Extra request header, e.g. -H 'X-API-Key: abc' (repeatable)
    #[arg(short = 'H', long = "header", value_name = "NAME: VALUE")]
    pub headers: Vec<String>,

    /// Directory to write the .sql file into
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Table name (default: last path segment of the URL)
    #[arg(short, long)]
    pub table: Option<String>,

    /// Dot-separated path to the records inside the response, e.g. data.items
    #[arg(long)]
    pub records_path: Option<String>,

    /// How BOOLEAN values are written
    #[arg(long, value_enum)]
    pub boolean_style: Option<BooleanStyle>,

    /// Emit CREATE TABLE IF NOT EXISTS
    #[arg(long)]
    pub if_not_exists: bool,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Configuration file (YAML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the SQL to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Log filter for this invocation
    ///
    /// A valid, non-empty `RUST_LOG` value replaces the default entirely; otherwise the
    /// level is `info`, or `debug` with `--verbose`.
    pub fn log_filter(&self, rust_log: Option<&str>) -> EnvFilter {
        rust_log
            .filter(|directives| !directives.trim().is_empty())
            .and_then(|directives| EnvFilter::try_new(directives).ok())
            .unwrap_or_else(|| EnvFilter::new(if self.verbose { "debug" } else { "info" }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_minimal() {
        let cli = Cli::try_parse_from(["api-to-sql", "https://api.example.com/users"]).unwrap();
        assert_eq!(cli.url.as_deref(), Some("https://api.example.com/users"));
        assert!(cli.headers.is_empty());
        assert!(cli.boolean_style.is_none());
        assert!(!cli.stdout);
    }

    #[test]
    fn test_parse_no_url() {
        let cli = Cli::try_parse_from(["api-to-sql"]).unwrap();
        assert!(cli.url.is_none());
    }

    #[test]
    fn test_parse_all_options() {
        let cli = Cli::try_parse_from([
            "api-to-sql",
            "-H",
            "X-API-Key: abc",
            "--header",
            "Accept: application/json",
            "-o",
            "out",
            "-t",
            "people",
            "--records-path",
            "data.items",
            "--boolean-style",
            "numeric",
            "--if-not-exists",
            "--timeout",
            "5",
            "-c",
            "gen.yaml",
            "--stdout",
            "-v",
            "https://api.example.com/users",
        ])
        .unwrap();

        assert_eq!(cli.headers, vec!["X-API-Key: abc", "Accept: application/json"]);
        assert_eq!(cli.output_dir, Some(PathBuf::from("out")));
        assert_eq!(cli.table.as_deref(), Some("people"));
        assert_eq!(cli.records_path.as_deref(), Some("data.items"));
        assert_eq!(cli.boolean_style, Some(BooleanStyle::Numeric));
        assert!(cli.if_not_exists);
        assert_eq!(cli.timeout, Some(5));
        assert_eq!(cli.config, Some(PathBuf::from("gen.yaml")));
        assert!(cli.stdout);
        assert!(cli.verbose);
    }

    #[test]
    fn test_parse_boolean_style_true_false() {
        let cli =
            Cli::try_parse_from(["api-to-sql", "--boolean-style", "true-false", "http://x/y"])
                .unwrap();
        assert_eq!(cli.boolean_style, Some(BooleanStyle::TrueFalse));
    }

    #[test]
    fn test_parse_invalid_boolean_style() {
        assert!(Cli::try_parse_from(["api-to-sql", "--boolean-style", "yes"]).is_err());
    }

    #[test]
    fn test_log_filter_defaults() {
        let quiet = Cli::try_parse_from(["api-to-sql"]).unwrap();
        let verbose = Cli::try_parse_from(["api-to-sql", "-v"]).unwrap();

        assert_eq!(quiet.log_filter(None).to_string(), "info");
        assert_eq!(verbose.log_filter(None).to_string(), "debug");
    }

    #[test]
    fn test_log_filter_rust_log_replaces_default() {
        let verbose = Cli::try_parse_from(["api-to-sql", "-v"]).unwrap();
        assert_eq!(verbose.log_filter(Some("warn")).to_string(), "warn");
        assert_eq!(verbose.log_filter(Some("  ")).to_string(), "debug");
    }
}
