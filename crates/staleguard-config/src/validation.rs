//! Configuration validation logic.

use crate::defaults::MAX_INTERVAL_MS;
use crate::errors::ConfigError;
use crate::types::StaleguardConfig;

/// Characters that must not appear in the base path; it is spliced into
/// both markup attributes and script string literals.
const FORBIDDEN_BASE_CHARS: [char; 5] = ['"', '\'', '<', '>', '`'];

/// Validate a StaleguardConfig, returning an error if any values are invalid.
///
/// # Validation Rules
///
/// - Poll interval must be greater than zero and at most [`MAX_INTERVAL_MS`]
/// - Confirmation text must not be blank
/// - Base path must not contain whitespace or quoting characters
pub fn validate_config(config: &StaleguardConfig) -> Result<(), ConfigError> {
    let interval_ms = config.watcher.interval_ms();
    if interval_ms == 0 {
        return Err(ConfigError::InvalidInterval);
    }
    if interval_ms > MAX_INTERVAL_MS {
        return Err(ConfigError::IntervalTooLarge {
            interval_ms,
            max_ms: MAX_INTERVAL_MS,
        });
    }

    if config.watcher.confirm_text().trim().is_empty() {
        return Err(ConfigError::InvalidConfiguration {
            message: "confirm_text must not be empty".to_string(),
        });
    }

    let base = config.build.base();
    if base.is_empty()
        || base
            .chars()
            .any(|c| c.is_whitespace() || FORBIDDEN_BASE_CHARS.contains(&c))
    {
        return Err(ConfigError::InvalidConfiguration {
            message: format!("Invalid base path '{}'", base),
        });
    }

    Ok(())
}
