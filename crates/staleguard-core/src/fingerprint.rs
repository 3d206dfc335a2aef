use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Hash segment of a hashed chunk name: `assets/index-a1b2c3.js` → `a1b2c3`.
static CHUNK_HASH: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"-(\w+)\.js$").expect("chunk hash regex is valid"));

/// Build-specific identifier for a page's deployed content.
///
/// Opaque: two fingerprints are only ever compared for equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Derive a fingerprint from a hashed entry chunk file name.
    ///
    /// Returns `None` when the name carries no `-<hash>.js` suffix.
    pub fn from_chunk_file_name(file_name: &str) -> Option<Self> {
        CHUNK_HASH
            .captures(file_name)
            .and_then(|caps| caps.get(1))
            .map(|m| Self(m.as_str().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_chunk_file_name() {
        let fp = Fingerprint::from_chunk_file_name("assets/index-a1b2c3.js").unwrap();
        assert_eq!(fp.as_str(), "a1b2c3");
    }

    #[test]
    fn test_from_chunk_file_name_uses_last_segment() {
        let fp = Fingerprint::from_chunk_file_name("assets/my-app-entry-Zx_9.js").unwrap();
        assert_eq!(fp.as_str(), "Zx_9");
    }

    #[test]
    fn test_from_chunk_file_name_without_hash() {
        assert!(Fingerprint::from_chunk_file_name("assets/index.js").is_none());
        assert!(Fingerprint::from_chunk_file_name("assets/index-abc.mjs").is_none());
        assert!(Fingerprint::from_chunk_file_name("assets/index-abc.jsx").is_none());
    }

    #[test]
    fn test_identical_names_yield_identical_fingerprints() {
        let a = Fingerprint::from_chunk_file_name("assets/index-4f2a9c.js");
        let b = Fingerprint::from_chunk_file_name("assets/index-4f2a9c.js");
        let c = Fingerprint::from_chunk_file_name("assets/index-4f2a9d.js");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&Fingerprint::new("abc123")).unwrap();
        assert_eq!(json, "\"abc123\"");
    }
}
