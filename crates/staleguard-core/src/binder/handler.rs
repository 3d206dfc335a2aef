//! Filesystem side of the binder: page discovery and plan application.

use super::errors::BinderError;
use super::manifest::BuildManifest;
use super::plan::{BindOptions, BindPlan, PageSource, SkippedPage, plan_bind};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::{info, warn};
use walkdir::{DirEntry, WalkDir};

/// Summary of one binder run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BindReport {
    /// Pages that carry the watcher tag after this run.
    pub bound: Vec<String>,
    /// Pages whose markup was modified by this run.
    pub modified: Vec<String>,
    pub skipped: Vec<SkippedPage>,
    /// Artifact paths relative to the dist directory.
    pub emitted: Vec<String>,
}

impl BindReport {
    fn from_plan(plan: &BindPlan) -> Self {
        Self {
            bound: plan.pages.iter().map(|p| p.name.clone()).collect(),
            modified: plan
                .pages
                .iter()
                .filter(|p| p.changed)
                .map(|p| p.name.clone())
                .collect(),
            skipped: plan.skipped.clone(),
            emitted: plan.assets.iter().map(|a| a.file_name.clone()).collect(),
        }
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
}

/// Find every `.html` page under `dist_dir`, skipping hidden directories
/// such as `.vite`. Pages are sorted by name.
pub fn discover_pages(dist_dir: &Path) -> Result<Vec<PageSource>, BinderError> {
    if !dist_dir.is_dir() {
        return Err(BinderError::DistNotFound {
            path: dist_dir.to_path_buf(),
        });
    }

    let mut pages = Vec::new();
    for entry in WalkDir::new(dist_dir)
        .into_iter()
        .filter_entry(|e| !is_hidden(e))
    {
        let entry = entry?;
        if !entry.file_type().is_file()
            || entry.path().extension().and_then(|e| e.to_str()) != Some("html")
        {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(dist_dir)
            .unwrap_or(entry.path())
            .to_string_lossy()
            .replace('\\', "/");
        let html = fs::read_to_string(entry.path())?;
        pages.push(PageSource {
            name: relative,
            html,
        });
    }

    pages.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(pages)
}

/// Write every modified page and every emitted artifact.
///
/// Unchanged pages are not rewritten.
pub fn apply_plan(dist_dir: &Path, plan: &BindPlan) -> Result<(), BinderError> {
    for page in plan.pages.iter().filter(|p| p.changed) {
        fs::write(dist_dir.join(&page.name), &page.html)?;
    }

    for asset in &plan.assets {
        let path = dist_dir.join(&asset.file_name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, &asset.contents)?;
    }

    Ok(())
}

/// Run the binder once over a build output directory.
///
/// Must run after chunk names are final. Safe to re-run on the same output.
pub fn bind_dist(
    dist_dir: &Path,
    manifest_path: &Path,
    options: &BindOptions,
) -> Result<BindReport, BinderError> {
    info!(
        event = "core.binder.bind_started",
        dist = %dist_dir.display(),
        manifest = %manifest_path.display(),
        base = %options.base
    );

    let pages = discover_pages(dist_dir)?;
    let manifest = BuildManifest::load(manifest_path)?;
    let plan = plan_bind(&manifest, &pages, options);

    if plan.pages.is_empty() {
        warn!(
            event = "core.binder.no_pages_bound",
            pages_found = pages.len(),
            "No page has a hashed entry chunk"
        );
    }

    apply_plan(dist_dir, &plan)?;
    let report = BindReport::from_plan(&plan);

    info!(
        event = "core.binder.bind_completed",
        bound = report.bound.len(),
        modified = report.modified.len(),
        skipped = report.skipped.len(),
        emitted = report.emitted.len()
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discover_pages_skips_hidden_and_non_html() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join(".vite")).unwrap();
        fs::create_dir_all(dir.path().join("admin")).unwrap();
        fs::create_dir_all(dir.path().join("assets")).unwrap();
        fs::write(dir.path().join("index.html"), "<body></body>").unwrap();
        fs::write(dir.path().join("admin/index.html"), "<body></body>").unwrap();
        fs::write(dir.path().join(".vite/preview.html"), "<body></body>").unwrap();
        fs::write(dir.path().join("assets/index-abc.js"), "").unwrap();

        let pages = discover_pages(dir.path()).unwrap();
        let names: Vec<&str> = pages.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["admin/index.html", "index.html"]);
    }

    #[test]
    fn test_discover_pages_missing_dist() {
        let dir = tempfile::tempdir().unwrap();
        let result = discover_pages(&dir.path().join("dist"));
        assert!(matches!(result, Err(BinderError::DistNotFound { .. })));
    }
}
