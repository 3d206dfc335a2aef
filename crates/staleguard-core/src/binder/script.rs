//! Watcher script rendering.
//!
//! The browser half of the watcher runtime ships as `updater.js`, embedded at
//! compile time. Parameters are substituted as JSON literals, so the prompt
//! text and URL can never break out of their string.

use staleguard_config::{MAX_BACKOFF_MULTIPLIER, WatcherConfig};

const UPDATER_JS: &str = include_str!("updater.js");

const HASH_URL: &str = "__STALEGUARD_HASH_URL__";
const INTERVAL_MS: &str = "__STALEGUARD_INTERVAL_MS__";
const CONFIRM_TEXT: &str = "__STALEGUARD_CONFIRM_TEXT__";
const FORCE: &str = "__STALEGUARD_FORCE__";
const MAX_MULTIPLE: &str = "__STALEGUARD_MAX_MULTIPLE__";

/// Render the self-executing watcher script for one page.
pub fn render_updater_script(hash_url: &str, config: &WatcherConfig) -> String {
    UPDATER_JS
        .replace(HASH_URL, &js_string(hash_url))
        .replace(INTERVAL_MS, &config.poll_interval_ms().to_string())
        .replace(CONFIRM_TEXT, &js_string(config.confirm_prompt()))
        .replace(FORCE, if config.force_reload() { "true" } else { "false" })
        .replace(MAX_MULTIPLE, &MAX_BACKOFF_MULTIPLIER.to_string())
}

/// JSON string literals are valid JS string literals; `</` is additionally
/// escaped so the value is safe even when inlined into markup.
fn js_string(value: &str) -> String {
    serde_json::Value::String(value.to_string())
        .to_string()
        .replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn config(force: bool) -> WatcherConfig {
        WatcherConfig::new(Duration::from_millis(30_000), "New version, reload?", force).unwrap()
    }

    #[test]
    fn test_render_substitutes_every_placeholder() {
        let js = render_updater_script("/assets/index.hash", &config(false));
        assert!(!js.contains("__STALEGUARD_"));
        assert!(js.contains(r#"var HASH_URL = "/assets/index.hash";"#));
        assert!(js.contains("var INTERVAL = 30000;"));
        assert!(js.contains(r#"var CONFIRM_TEXT = "New version, reload?";"#));
        assert!(js.contains("var FORCE = false;"));
    }

    #[test]
    fn test_render_force_update() {
        let js = render_updater_script("/assets/index.hash", &config(true));
        assert!(js.contains("var FORCE = true;"));
    }

    #[test]
    fn test_render_escapes_prompt_text() {
        let config = WatcherConfig::new(
            Duration::from_secs(1),
            "Say \"yes\"\n</script><script>alert(1)</script>",
            false,
        )
        .unwrap();
        let js = render_updater_script("/assets/index.hash", &config);
        assert!(js.contains(r#"Say \"yes\"\n"#));
        assert!(!js.contains("</script>"));
    }

    #[test]
    fn test_render_keeps_runtime_guards() {
        let js = render_updater_script("/assets/index.hash", &config(false));
        assert!(js.contains("if (pending) return;"));
        assert!(js.contains("clearTimeout(timer);"));
        assert!(js.contains("var MAX_MULTIPLE = 4;"));
        assert!(js.contains("Math.min(multiple + 1, MAX_MULTIPLE)"));
        assert!(js.contains("setTimeout(check, INTERVAL * multiple)"));
        assert!(js.contains("/^(link|script)$/i"));
        assert!(js.contains("requestIdleCallback"));
    }

    #[test]
    fn test_render_rejects_blank_fingerprint_like_http_source() {
        let js = render_updater_script("/assets/index.hash", &config(false));
        assert!(js.contains("var res = text.trim();"));
        assert!(js.contains("if (!res) throw new Error('empty fingerprint');"));
    }

    #[test]
    fn test_render_largest_interval_stays_within_timer_range() {
        let config = WatcherConfig::new(
            Duration::from_millis(staleguard_config::MAX_INTERVAL_MS),
            "reload?",
            false,
        )
        .unwrap();
        let js = render_updater_script("/assets/index.hash", &config);

        let interval: u64 = js
            .lines()
            .find_map(|line| line.trim().strip_prefix("var INTERVAL = "))
            .and_then(|rest| rest.strip_suffix(';'))
            .unwrap()
            .parse()
            .unwrap();
        assert!(interval * u64::from(MAX_BACKOFF_MULTIPLIER) <= staleguard_config::MAX_TIMER_DELAY_MS);
    }

    #[test]
    fn test_render_is_deterministic() {
        let a = render_updater_script("/assets/index.hash", &config(false));
        let b = render_updater_script("/assets/index.hash", &config(false));
        assert_eq!(a, b);
    }
}
