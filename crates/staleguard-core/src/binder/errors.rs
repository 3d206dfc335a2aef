use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum BinderError {
    #[error("Build output directory not found: {}", path.display())]
    DistNotFound { path: PathBuf },

    #[error("Build manifest not found: {}", path.display())]
    ManifestNotFound { path: PathBuf },

    #[error("Failed to parse build manifest '{}': {message}", path.display())]
    ManifestParse { path: PathBuf, message: String },

    #[error("Failed to walk build output: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
