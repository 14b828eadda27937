use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use sha2::{Digest, Sha256};
use std::path::Path;

/// Loads, parses, and validates a configuration file
///
/// Every section and key is optional. A missing `[crawler]`, `[user-agent]`
/// or `[output]` table, or a missing key inside one, takes the built-in
/// default (30 pages, 10 second timeout, 5 MiB body cap, `Mozilla/5.0`), so an
/// empty file is a valid configuration.
///
/// # Errors
///
/// * `ConfigError::Io` - The file could not be read
/// * `ConfigError::Parse` - The file is not valid TOML for [`Config`]
/// * `ConfigError::Validation` - A value is out of range
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    parse_config(&std::fs::read_to_string(path)?)
}

/// Computes a SHA-256 hash of the configuration file content
///
/// The hash is logged at startup so two runs can be told apart by the
/// configuration they used.
pub fn compute_config_hash(path: &Path) -> Result<String, ConfigError> {
    Ok(hash_source(&std::fs::read_to_string(path)?))
}

/// Loads a configuration and returns it with the hash of the exact bytes parsed
pub fn load_config_with_hash(path: &Path) -> Result<(Config, String), ConfigError> {
    let source = std::fs::read_to_string(path)?;
    let config = parse_config(&source)?;
    Ok((config, hash_source(&source)))
}

fn parse_config(source: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(source)?;
    validate(&config)?;
    Ok(config)
}

fn hash_source(source: &str) -> String {
    hex::encode(Sha256::digest(source.as_bytes()))
}
