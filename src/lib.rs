#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]

//! # api-to-sql
//!
//! Fetch a JSON document from an HTTP endpoint and turn it into a SQL script:
//! one `CREATE TABLE` with inferred column types, then one `INSERT` per record.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use api_to_sql::{Generator, GeneratorConfig, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let generator = Generator::new(GeneratorConfig::default())?;
//!     let path = generator.run("https://api.example.com/users").await?;
//!     println!("wrote {}", path.display());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────┐   ┌──────────┐   ┌──────────────┐   ┌──────────┐   ┌─────────┐
//! │  HTTP   │──▶│  Decode  │──▶│    Schema    │──▶│  Output  │──▶│  .sql   │
//! │ GET+JSON│   │ records  │   │  inference   │   │ render   │   │  file   │
//! └─────────┘   └──────────┘   └──────────────┘   └──────────┘   └─────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Generator configuration
pub mod config;

/// HTTP client
pub mod http;

/// Response decoding into records
pub mod decode;

/// Schema inference from JSON records
pub mod schema;

/// SQL rendering and file output
pub mod output;

/// Pipeline orchestration
pub mod engine;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::GeneratorConfig;
pub use engine::{GeneratedSql, Generator};
pub use error::{Error, Result};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
