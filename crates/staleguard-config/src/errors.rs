#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse config file '{path}': {message}")]
    ConfigParseError { path: String, message: String },

    #[error("Invalid poll interval: must be greater than 0 ms")]
    InvalidInterval,

    #[error("Poll interval {interval_ms} ms is too large: must be at most {max_ms} ms")]
    IntervalTooLarge { interval_ms: u64, max_ms: u64 },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("Could not resolve config directory: {source}")]
    PathError {
        #[from]
        source: staleguard_paths::PathError,
    },

    #[error("IO error reading config: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}
