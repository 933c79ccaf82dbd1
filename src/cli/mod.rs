//! CLI module
//!
//! Command-line interface for converting an API response into a SQL script.
//!
//! # Usage
//!
//! ```text
//! api-to-sql [OPTIONS] [URL]
//! ```
//!
//! The URL is prompted for on stdin when it is not given.

mod commands;
mod runner;

pub use commands::Cli;
pub use runner::Runner;
