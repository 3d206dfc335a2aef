/// Failure fetching the fingerprint artifact.
///
/// Never surfaced to the user: the state machine treats it as "no change".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("failed to read body from {url}: {message}")]
    Body { url: String, message: String },
}

#[derive(Debug, thiserror::Error)]
pub enum WatchError {
    #[error("Invalid fingerprint URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    #[error("Asset directory not found: {path}")]
    AssetDirNotFound { path: String },

    #[error("File watcher error: {0}")]
    Notify(#[from] notify::Error),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}
