//! Layered configuration
//!
//! Resolution order, highest first: command-line flags, environment
//! variables, JSON config file, built-in defaults.

use crate::error::{Error, Result};
use phrasefuzz_core::CatalogConfig;
use std::path::Path;

/// Environment variable overriding the match tolerance
pub const ENV_TOLERANCE: &str = "PHRASEFUZZ_TOLERANCE";
/// Environment variable overriding the parallel scan threshold
pub const ENV_PARALLEL_THRESHOLD: &str = "PHRASEFUZZ_PARALLEL_THRESHOLD";

/// Load configuration from an optional JSON file, then apply environment
/// overrides from the process environment.
pub fn load(path: Option<&Path>) -> Result<CatalogConfig> {
    load_with(path, |key| std::env::var(key).ok())
}

/// [`load`] with environment variables read through `lookup`.
pub fn load_with<F>(path: Option<&Path>, lookup: F) -> Result<CatalogConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let config = match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            let config: CatalogConfig = serde_json::from_str(&raw)?;
            ::tracing::debug!(path = %path.display(), "loaded config file");
            config
        }
        None => CatalogConfig::default(),
    };

    let config = apply_env_overrides(config, lookup)?;
    config.validate()?;
    Ok(config)
}

/// Apply environment overrides using `lookup` to read variables.
pub fn apply_env_overrides<F>(mut config: CatalogConfig, lookup: F) -> Result<CatalogConfig>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(raw) = lookup(ENV_TOLERANCE) {
        config.matcher.tolerance = parse_var(ENV_TOLERANCE, &raw)?;
    }
    if let Some(raw) = lookup(ENV_PARALLEL_THRESHOLD) {
        config.parallel_threshold = parse_var(ENV_PARALLEL_THRESHOLD, &raw)?;
    }
    Ok(config)
}

fn parse_var<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| Error::Config(format!("{key}: cannot parse {raw:?}")))
}
