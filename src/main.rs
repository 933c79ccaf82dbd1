//! api-to-sql CLI
//!
//! Fetches a JSON document and writes it out as a SQL script

use api_to_sql::cli::{Cli, Runner};
use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for results
    let rust_log = std::env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_env_filter(cli.log_filter(rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .init();

    let runner = Runner::new(cli);

    if let Err(e) = runner.run().await {
        tracing::debug!(category = %e.category(), "run failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
