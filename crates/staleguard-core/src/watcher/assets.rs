//! Local trigger source: watches a build output directory and reports
//! removed scripts and stylesheets as resource load failures.
//!
//! A redeploy that replaces hashed assets removes the old ones; a page still
//! referencing them would see exactly these failures.

use super::errors::WatchError;
use super::trigger::{ElementKind, Trigger};
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;

pub struct AssetWatcher {
    /// Underlying notify watcher. Must be kept alive.
    _watcher: RecommendedWatcher,
    dir: PathBuf,
}

impl AssetWatcher {
    /// Watch `dir` recursively, sending a trigger on `triggers` for every
    /// removed `.js` or `.css` file.
    pub fn new(dir: &Path, triggers: mpsc::Sender<Trigger>) -> Result<Self, WatchError> {
        if !dir.is_dir() {
            return Err(WatchError::AssetDirNotFound {
                path: dir.display().to_string(),
            });
        }

        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| match res {
            Ok(event) => {
                for trigger in Self::triggers_for(&event) {
                    match triggers.try_send(trigger) {
                        Ok(()) => {}
                        Err(TrySendError::Full(trigger)) => {
                            tracing::debug!(
                                event = "core.assets.trigger_dropped",
                                reason = "channel_full",
                                trigger = ?trigger
                            );
                        }
                        Err(TrySendError::Closed(_)) => return,
                    }
                }
            }
            Err(e) => {
                tracing::warn!(event = "core.assets.event_error", error = %e);
            }
        })?;
        watcher.watch(dir, RecursiveMode::Recursive)?;

        tracing::info!(event = "core.assets.watch_started", path = %dir.display());

        Ok(Self {
            _watcher: watcher,
            dir: dir.to_path_buf(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Triggers for a filesystem event: one per removed script or stylesheet.
    fn triggers_for(event: &Event) -> Vec<Trigger> {
        if !matches!(event.kind, EventKind::Remove(_)) {
            return Vec::new();
        }

        event
            .paths
            .iter()
            .filter_map(|path| {
                let kind = Self::element_kind(path)?;
                Some(Trigger::load_failed(kind, path.display().to_string()))
            })
            .collect()
    }

    fn element_kind(path: &Path) -> Option<ElementKind> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("js") => Some(ElementKind::Script),
            Some("css") => Some(ElementKind::Stylesheet),
            _ => None,
        }
    }
}
