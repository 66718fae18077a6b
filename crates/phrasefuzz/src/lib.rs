//! # phrasefuzz
//!
//! Shared plumbing for the `phrasefuzz` command:
//! - **config**: layered catalog/matcher configuration (file, environment, flags)
//! - **error**: error type for everything that can fail outside the core
//! - **tracing**: logging setup
//!
//! The matching itself lives in `phrasefuzz-core`.

pub mod config;
pub mod error;
pub mod tracing;

pub use error::{Error, Result};
