//! Page Binder: the post-build step.
//!
//! For every built page with a resolvable, hashed entry chunk it emits
//! `assets/<page>.hash` (the fingerprint) and `assets/<chunk>.updater.js`
//! (the watcher script), and injects an async script tag before `</body>`.
//! Pages without an entry chunk are left untouched. Re-running on the same
//! output changes nothing.

pub mod errors;
pub mod handler;
pub mod inject;
pub mod manifest;
pub mod plan;
pub mod script;

pub use errors::BinderError;
pub use handler::{BindReport, apply_plan, bind_dist, discover_pages};
pub use inject::{Injection, inject_script, script_tag};
pub use manifest::{BuildManifest, Chunk};
pub use plan::{
    BindOptions, BindPlan, BoundPage, EmittedAsset, PageSource, SkipReason, SkippedPage,
    plan_bind,
};
pub use script::render_updater_script;
