//! Response decoding
//!
//! Turns a parsed JSON document into the ordered sequence of records the rest
//! of the pipeline works on.
//!
//! # Overview
//!
//! - A top-level object is a single record
//! - A top-level array must contain only objects, one record each
//! - Anything else is an unsupported shape
//!
//! An optional record path selects a nested value first, for APIs that wrap
//! their data (`{"data": {"items": [...]}}`).

mod records;

pub use records::JsonDecoder;
