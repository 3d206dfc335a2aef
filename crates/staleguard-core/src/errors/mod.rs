use std::error::Error;

use crate::binder::BinderError;
use crate::watcher::{FetchError, WatchError};
use staleguard_config::ConfigError;
use staleguard_paths::PathError;

/// Base trait for all application errors
pub trait StaleguardError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error should be logged as an error or warning
    fn is_user_error(&self) -> bool {
        false
    }
}

/// Common result type for the application
pub type StaleguardResult<T> = Result<T, Box<dyn StaleguardError>>;

impl StaleguardError for PathError {
    fn error_code(&self) -> &'static str {
        match self {
            PathError::HomeNotFound => "HOME_NOT_FOUND",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}

impl StaleguardError for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::ConfigParseError { .. } => "CONFIG_PARSE_ERROR",
            ConfigError::InvalidInterval => "INVALID_INTERVAL",
            ConfigError::IntervalTooLarge { .. } => "INTERVAL_TOO_LARGE",
            ConfigError::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
            ConfigError::PathError { .. } => "CONFIG_PATH_ERROR",
            ConfigError::IoError { .. } => "CONFIG_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            ConfigError::ConfigParseError { .. }
                | ConfigError::InvalidInterval
                | ConfigError::IntervalTooLarge { .. }
                | ConfigError::InvalidConfiguration { .. }
        )
    }
}

impl StaleguardError for BinderError {
    fn error_code(&self) -> &'static str {
        match self {
            BinderError::DistNotFound { .. } => "DIST_NOT_FOUND",
            BinderError::ManifestNotFound { .. } => "MANIFEST_NOT_FOUND",
            BinderError::ManifestParse { .. } => "MANIFEST_PARSE_ERROR",
            BinderError::Walk(_) => "DIST_WALK_ERROR",
            BinderError::Io(_) => "BINDER_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            BinderError::DistNotFound { .. }
                | BinderError::ManifestNotFound { .. }
                | BinderError::ManifestParse { .. }
        )
    }
}

impl StaleguardError for FetchError {
    fn error_code(&self) -> &'static str {
        match self {
            FetchError::Transport { .. } => "FETCH_TRANSPORT_ERROR",
            FetchError::Status { .. } => "FETCH_STATUS_ERROR",
            FetchError::Body { .. } => "FETCH_BODY_ERROR",
        }
    }
}

impl StaleguardError for WatchError {
    fn error_code(&self) -> &'static str {
        match self {
            WatchError::InvalidUrl { .. } => "INVALID_URL",
            WatchError::AssetDirNotFound { .. } => "ASSET_DIR_NOT_FOUND",
            WatchError::Notify(_) => "FILE_WATCH_ERROR",
            WatchError::Client(_) => "HTTP_CLIENT_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            WatchError::InvalidUrl { .. } | WatchError::AssetDirNotFound { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_staleguard_result() {
        let _result: StaleguardResult<i32> = Ok(42);
    }

    #[test]
    fn test_config_parse_error() {
        let error = ConfigError::ConfigParseError {
            path: "/project/.staleguard/config.toml".to_string(),
            message: "invalid TOML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse config file '/project/.staleguard/config.toml': invalid TOML syntax"
        );
        assert_eq!(error.error_code(), "CONFIG_PARSE_ERROR");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_invalid_interval() {
        let error = ConfigError::InvalidInterval;
        assert_eq!(error.error_code(), "INVALID_INTERVAL");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_interval_too_large() {
        let error = ConfigError::IntervalTooLarge {
            interval_ms: 3_000_000_000,
            max_ms: 536_870_911,
        };
        assert_eq!(error.error_code(), "INTERVAL_TOO_LARGE");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_manifest_not_found_is_user_error() {
        let error = BinderError::ManifestNotFound {
            path: PathBuf::from("dist/.vite/manifest.json"),
        };
        assert_eq!(error.error_code(), "MANIFEST_NOT_FOUND");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_binder_io_error_is_not_user_error() {
        let error = BinderError::Io(std::io::Error::other("disk full"));
        assert_eq!(error.error_code(), "BINDER_IO_ERROR");
        assert!(!error.is_user_error());
    }

    #[test]
    fn test_fetch_status_error() {
        let error = FetchError::Status {
            url: "https://example.com/assets/index.hash".to_string(),
            status: 503,
        };
        assert_eq!(
            error.to_string(),
            "https://example.com/assets/index.hash returned HTTP 503"
        );
        assert_eq!(error.error_code(), "FETCH_STATUS_ERROR");
        assert!(!error.is_user_error());
    }

    #[test]
    fn test_boxed_as_trait_object() {
        let result: StaleguardResult<()> = Err(Box::new(WatchError::InvalidUrl {
            url: "nope".to_string(),
            message: "relative URL without a base".to_string(),
        }));
        let error = result.unwrap_err();
        assert_eq!(error.error_code(), "INVALID_URL");
        assert!(error.is_user_error());
    }
}
