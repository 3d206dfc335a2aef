/// Ten minutes between polls unless configured otherwise.
pub const DEFAULT_INTERVAL_MS: u64 = 1000 * 60 * 10;

/// Upper bound of the decline backoff multiplier.
pub const MAX_BACKOFF_MULTIPLIER: u32 = 4;

/// Largest delay a browser timer honours (2^31 - 1 ms); longer delays fire
/// immediately.
pub const MAX_TIMER_DELAY_MS: u64 = i32::MAX as u64;

/// Largest poll interval whose fully backed-off delay still fits a browser timer.
pub const MAX_INTERVAL_MS: u64 = MAX_TIMER_DELAY_MS / MAX_BACKOFF_MULTIPLIER as u64;

/// Prompt shown when a newer build is detected ("new version released, reload the page?").
pub const DEFAULT_CONFIRM_TEXT: &str = "检测到新版本发布，是否刷新页面？";

pub const DEFAULT_BASE: &str = "/";

pub const DEFAULT_DIST_DIR: &str = "dist";

/// Build manifest location, relative to the dist directory.
pub const DEFAULT_MANIFEST: &str = ".vite/manifest.json";
