//! HTTP client module
//!
//! A thin wrapper around `reqwest` that performs the single GET a run needs.
//!
//! # Features
//!
//! - **URL Validation**: Only absolute `http`/`https` URLs are accepted
//! - **Custom Headers**: Default headers applied to every request
//! - **Status Checking**: Non-success responses become errors carrying the body
//! - **JSON Parsing**: Body text parsed with `serde_json`

mod client;

pub use client::{parse_url, HttpClient, HttpClientConfig};
