//! Configuration validation logic.

use crate::config::loader::Config;
use crate::error::{Error, Result};
use crate::fs::normalize_folder;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_sentinel(&config.options.sentinel)?;

    Ok(())
}

/// Validate the fallback name.
///
/// It has to survive cleaning unchanged under folder rules, otherwise a
/// second run would rename every sentinel it produced.
pub fn validate_sentinel(sentinel: &str) -> Result<()> {
    if sentinel.is_empty() {
        return Err(Error::ConfigValidation {
            field: "sentinel".to_string(),
            message: "Sentinel name cannot be empty".to_string(),
        });
    }

    let clean = normalize_folder(sentinel);
    if clean != sentinel {
        return Err(Error::ConfigValidation {
            field: "sentinel".to_string(),
            message: format!(
                "Sentinel '{}' is not a clean name (would become '{}')",
                sentinel, clean
            ),
        });
    }

    Ok(())
}
