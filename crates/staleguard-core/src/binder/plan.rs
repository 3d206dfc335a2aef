//! Pure bind planning: decides what every page and artifact should look like
//! without touching the filesystem.

use super::inject::{Injection, inject_script};
use super::manifest::BuildManifest;
use super::script::render_updater_script;
use crate::fingerprint::Fingerprint;
use serde::Serialize;
use staleguard_config::WatcherConfig;
use staleguard_paths::{hash_file_name, public_url, updater_file_name};
use std::collections::HashMap;
use tracing::{debug, warn};

/// A built page as found in the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSource {
    /// Path relative to the dist directory with `/` separators, e.g. `admin/index.html`.
    pub name: String,
    pub html: String,
}

#[derive(Debug, Clone)]
pub struct BindOptions {
    /// Public base path pages are served under.
    pub base: String,
    pub watcher: WatcherConfig,
}

/// An artifact to write under the dist directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedAsset {
    pub file_name: String,
    pub contents: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundPage {
    pub name: String,
    pub html: String,
    /// False when the page already carried the watcher tag.
    pub changed: bool,
    pub fingerprint: Fingerprint,
    pub script_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum SkipReason {
    /// No entry chunk has this page as its facade.
    NoEntryChunk,
    /// The entry chunk's file name carries no hash to fingerprint.
    NoFingerprint { chunk: String },
    /// The markup has no `</body>` to inject before.
    NoBodyTag,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedPage {
    pub name: String,
    #[serde(flatten)]
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindPlan {
    pub pages: Vec<BoundPage>,
    pub skipped: Vec<SkippedPage>,
    pub assets: Vec<EmittedAsset>,
}

/// Plan the bind for every page.
///
/// Deterministic for a given manifest, page set, and options, which is what
/// makes re-running the binder on the same output a no-op.
pub fn plan_bind(manifest: &BuildManifest, pages: &[PageSource], options: &BindOptions) -> BindPlan {
    let mut plan = BindPlan::default();
    // hash file name -> (owning page, index into plan.assets)
    let mut hash_owners: HashMap<String, (String, usize)> = HashMap::new();

    for page in pages {
        let Some(chunk) = manifest.entry_for(&page.name) else {
            debug!(event = "core.binder.page_skipped", page = %page.name, reason = "no_entry_chunk");
            plan.skipped.push(SkippedPage {
                name: page.name.clone(),
                reason: SkipReason::NoEntryChunk,
            });
            continue;
        };

        let Some(fingerprint) = Fingerprint::from_chunk_file_name(&chunk.file_name) else {
            warn!(
                event = "core.binder.page_skipped",
                page = %page.name,
                chunk = %chunk.file_name,
                reason = "no_fingerprint"
            );
            plan.skipped.push(SkippedPage {
                name: page.name.clone(),
                reason: SkipReason::NoFingerprint {
                    chunk: chunk.file_name.clone(),
                },
            });
            continue;
        };

        let hash_file = hash_file_name(&page.name);
        let updater_file = updater_file_name(&chunk.file_name);
        let hash_url = public_url(&options.base, &hash_file);
        let script_url = public_url(&options.base, &updater_file);

        let (html, changed) = match inject_script(&page.html, &script_url) {
            Injection::Inserted(html) => (html, true),
            Injection::AlreadyPresent => (page.html.clone(), false),
            Injection::MissingBody => {
                warn!(event = "core.binder.page_skipped", page = %page.name, reason = "no_body_tag");
                plan.skipped.push(SkippedPage {
                    name: page.name.clone(),
                    reason: SkipReason::NoBodyTag,
                });
                continue;
            }
        };

        let hash_asset = EmittedAsset {
            file_name: hash_file.clone(),
            contents: fingerprint.as_str().to_string(),
        };
        if let Some((owner, index)) = hash_owners.get(&hash_file).cloned() {
            warn!(
                event = "core.binder.hash_file_collision",
                hash_file = %hash_file,
                previous_page = %owner,
                page = %page.name
            );
            plan.assets[index] = hash_asset;
            hash_owners.insert(hash_file, (page.name.clone(), index));
        } else {
            hash_owners.insert(hash_file, (page.name.clone(), plan.assets.len()));
            plan.assets.push(hash_asset);
        }

        plan.assets.push(EmittedAsset {
            file_name: updater_file,
            contents: render_updater_script(&hash_url, &options.watcher),
        });

        plan.pages.push(BoundPage {
            name: page.name.clone(),
            html,
            changed,
            fingerprint,
            script_url,
        });
    }

    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binder::manifest::Chunk;

    const PAGE: &str = "<!doctype html>\n<html>\n<body>\n  <div id=\"app\"></div>\n</body>\n</html>\n";

    fn entry(page: &str, file: &str) -> Chunk {
        Chunk {
            file_name: file.to_string(),
            is_entry: true,
            facade_module_id: Some(page.to_string()),
        }
    }

    fn page(name: &str, html: &str) -> PageSource {
        PageSource {
            name: name.to_string(),
            html: html.to_string(),
        }
    }

    fn options(base: &str) -> BindOptions {
        BindOptions {
            base: base.to_string(),
            watcher: WatcherConfig::default(),
        }
    }

    #[test]
    fn test_plan_binds_page_with_entry() {
        let manifest = BuildManifest::new(vec![entry("index.html", "assets/index-a1b2c3.js")]);
        let plan = plan_bind(&manifest, &[page("index.html", PAGE)], &options("/app"));

        assert_eq!(plan.pages.len(), 1);
        let bound = &plan.pages[0];
        assert!(bound.changed);
        assert_eq!(bound.fingerprint.as_str(), "a1b2c3");
        assert_eq!(bound.script_url, "/app/assets/index-a1b2c3.updater.js");
        assert!(
            bound
                .html
                .contains(r#"<script async src="/app/assets/index-a1b2c3.updater.js"></script>"#)
        );

        let names: Vec<&str> = plan.assets.iter().map(|a| a.file_name.as_str()).collect();
        assert_eq!(
            names,
            vec!["assets/index.hash", "assets/index-a1b2c3.updater.js"]
        );
        assert_eq!(plan.assets[0].contents, "a1b2c3");
        assert!(plan.assets[1].contents.contains("\"/app/assets/index.hash\""));
    }

    #[test]
    fn test_plan_skips_page_without_entry() {
        let manifest = BuildManifest::new(vec![entry("index.html", "assets/index-a1b2c3.js")]);
        let plan = plan_bind(&manifest, &[page("about.html", PAGE)], &options("/"));

        assert!(plan.pages.is_empty());
        assert!(plan.assets.is_empty());
        assert_eq!(
            plan.skipped,
            vec![SkippedPage {
                name: "about.html".to_string(),
                reason: SkipReason::NoEntryChunk,
            }]
        );
    }

    #[test]
    fn test_plan_skips_entry_without_hash() {
        let manifest = BuildManifest::new(vec![entry("index.html", "assets/index.js")]);
        let plan = plan_bind(&manifest, &[page("index.html", PAGE)], &options("/"));

        assert!(plan.pages.is_empty());
        assert!(plan.assets.is_empty());
        assert!(matches!(
            plan.skipped[0].reason,
            SkipReason::NoFingerprint { .. }
        ));
    }

    #[test]
    fn test_plan_skips_page_without_body() {
        let manifest = BuildManifest::new(vec![entry("index.html", "assets/index-a1b2c3.js")]);
        let plan = plan_bind(&manifest, &[page("index.html", "<div></div>")], &options("/"));

        assert!(plan.pages.is_empty());
        assert!(plan.assets.is_empty());
        assert_eq!(plan.skipped[0].reason, SkipReason::NoBodyTag);
    }

    #[test]
    fn test_plan_is_idempotent_on_bound_output() {
        let manifest = BuildManifest::new(vec![entry("index.html", "assets/index-a1b2c3.js")]);
        let first = plan_bind(&manifest, &[page("index.html", PAGE)], &options("/"));
        let rebound = page("index.html", &first.pages[0].html);
        let second = plan_bind(&manifest, &[rebound], &options("/"));

        assert!(!second.pages[0].changed);
        assert_eq!(second.pages[0].html, first.pages[0].html);
        assert_eq!(second.assets, first.assets);
    }

    #[test]
    fn test_plan_basename_collision_last_page_wins() {
        let manifest = BuildManifest::new(vec![
            entry("index.html", "assets/index-111111.js"),
            entry("admin/index.html", "assets/index-222222.js"),
        ]);
        let plan = plan_bind(
            &manifest,
            &[page("index.html", PAGE), page("admin/index.html", PAGE)],
            &options("/"),
        );

        let hash_assets: Vec<&EmittedAsset> = plan
            .assets
            .iter()
            .filter(|a| a.file_name == "assets/index.hash")
            .collect();
        assert_eq!(hash_assets.len(), 1);
        assert_eq!(hash_assets[0].contents, "222222");
        assert_eq!(plan.pages.len(), 2);
    }
}
