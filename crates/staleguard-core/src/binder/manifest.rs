//! Build output model and Vite-style manifest loading.

use super::errors::BinderError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// One output chunk of the build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// Output path relative to the dist directory, e.g. `assets/index-a1b2c3.js`.
    pub file_name: String,
    pub is_entry: bool,
    /// Source module the chunk is the facade for; for page entries this is the
    /// page's path relative to the project root, e.g. `index.html`.
    pub facade_module_id: Option<String>,
}

/// Every chunk the build produced, with identities already finalized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildManifest {
    pub chunks: Vec<Chunk>,
}

#[derive(Debug, Deserialize)]
struct ManifestEntry {
    file: String,
    #[serde(default)]
    src: Option<String>,
    #[serde(default, rename = "isEntry")]
    is_entry: bool,
}

impl BuildManifest {
    pub fn new(chunks: Vec<Chunk>) -> Self {
        Self { chunks }
    }

    /// Load a Vite-style manifest (`{ "<src>": { "file", "src", "isEntry" } }`).
    pub fn load(path: &Path) -> Result<Self, BinderError> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => BinderError::ManifestNotFound {
                path: path.to_path_buf(),
            },
            _ => BinderError::Io(e),
        })?;

        Self::from_json(&content).map_err(|e| BinderError::ManifestParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Parse manifest JSON. Keys are sorted, so chunk order is deterministic.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let entries: BTreeMap<String, ManifestEntry> = serde_json::from_str(json)?;
        let chunks = entries
            .into_iter()
            .map(|(key, entry)| Chunk {
                file_name: entry.file,
                is_entry: entry.is_entry,
                facade_module_id: Some(entry.src.unwrap_or(key)),
            })
            .collect();
        Ok(Self { chunks })
    }

    /// Entry chunk whose facade is `page`, if any.
    pub fn entry_for(&self, page: &str) -> Option<&Chunk> {
        self.chunks
            .iter()
            .find(|chunk| chunk.is_entry && chunk.facade_module_id.as_deref() == Some(page))
    }
}
