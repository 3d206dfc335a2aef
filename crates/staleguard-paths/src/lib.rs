use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum PathError {
    #[error("home directory not found — set $HOME environment variable")]
    HomeNotFound,
}

/// Directory (relative to the build output root) that every emitted artifact lands in.
pub const ASSETS_DIR: &str = "assets";

/// Extension of the per-page fingerprint artifact.
pub const HASH_EXTENSION: &str = "hash";

/// Suffix of the per-entry watcher script.
pub const UPDATER_SUFFIX: &str = ".updater.js";

/// Centralized path construction for the `~/.staleguard/` directory layout.
///
/// Use `resolve()` in production code and `from_dir()` in tests.
#[derive(Debug, Clone)]
pub struct StaleguardPaths {
    base_dir: PathBuf,
}

impl StaleguardPaths {
    /// Resolve paths from the user's home directory (`~/.staleguard`).
    pub fn resolve() -> Result<Self, PathError> {
        let home = dirs::home_dir().ok_or(PathError::HomeNotFound)?;
        Ok(Self {
            base_dir: home.join(".staleguard"),
        })
    }

    /// Create paths from an explicit base directory. Use in tests.
    pub fn from_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// The base `~/.staleguard` directory.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn user_config(&self) -> PathBuf {
        self.base_dir.join("config.toml")
    }

    /// Project-level config: `<project_root>/.staleguard/config.toml`.
    pub fn project_config(project_root: &Path) -> PathBuf {
        project_root.join(".staleguard").join("config.toml")
    }
}

// --- Artifact naming ---

/// Last path segment of `name` with `suffix` removed.
///
/// The suffix is only stripped when it is a proper suffix, so `".html"`
/// stays `".html"` rather than collapsing to an empty name.
pub fn basename(name: &str, suffix: &str) -> String {
    let last = name.rsplit(['/', '\\']).next().unwrap_or(name);
    match last.strip_suffix(suffix) {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => last.to_string(),
    }
}

/// Fingerprint artifact for a page: `assets/<page-basename>.hash`.
///
/// `index.html` → `assets/index.hash`. Only the last segment is used, so
/// `about/index.html` maps to the same file as `index.html`.
pub fn hash_file_name(page: &str) -> String {
    format!(
        "{}/{}.{}",
        ASSETS_DIR,
        basename(page, ".html"),
        HASH_EXTENSION
    )
}

/// Watcher script for an entry chunk: `assets/<chunk-basename>.updater.js`.
pub fn updater_file_name(chunk_file_name: &str) -> String {
    format!(
        "{}/{}{}",
        ASSETS_DIR,
        basename(chunk_file_name, ".js"),
        UPDATER_SUFFIX
    )
}

/// Base path with exactly one trailing slash appended when missing.
pub fn normalize_base(base: &str) -> String {
    if base.ends_with('/') {
        base.to_string()
    } else {
        format!("{base}/")
    }
}

/// Public URL of an emitted asset, resolved against the configured base.
pub fn public_url(base: &str, asset: &str) -> String {
    format!("{}{}", normalize_base(base), asset)
}
