//! Integration tests for CLI output behavior
//!
//! The default behavior is quiet (no logs). Use -v/--verbose to enable logs.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const MANIFEST: &str = r#"{
  "index.html": { "file": "assets/index-a1b2c3.js", "src": "index.html", "isEntry": true }
}"#;

const PAGE: &str = "<!doctype html>\n<html>\n<body>\n  <div id=\"app\"></div>\n</body>\n</html>\n";

/// A project directory with a built `dist/` and an isolated HOME.
fn project() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let dist = dir.path().join("dist");
    fs::create_dir_all(dist.join(".vite")).unwrap();
    fs::create_dir_all(dist.join("assets")).unwrap();
    fs::create_dir_all(dir.path().join("home")).unwrap();
    fs::write(dist.join(".vite/manifest.json"), MANIFEST).unwrap();
    fs::write(dist.join("index.html"), PAGE).unwrap();
    dir
}

fn run_staleguard(project: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_staleguard"))
        .args(args)
        .current_dir(project)
        .env("HOME", project.join("home"))
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute 'staleguard'")
}

#[test]
fn test_bind_stdout_is_clean_and_stderr_empty() {
    let dir = project();
    let output = run_staleguard(dir.path(), &["--no-color", "bind"]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "staleguard bind failed with exit code {:?}. stderr: {}",
        output.status.code(),
        stderr
    );
    assert!(
        !stdout.contains(r#""event":"#),
        "stdout should not contain JSON logs, got: {}",
        stdout
    );
    assert!(
        stderr.is_empty(),
        "Default quiet mode should have empty stderr, got: {}",
        stderr
    );
    assert!(stdout.contains("Bound 1 page(s)"), "got: {}", stdout);

    let index = fs::read_to_string(dir.path().join("dist/index.html")).unwrap();
    assert!(index.contains(r#"<script async src="/assets/index-a1b2c3.updater.js"></script>"#));
    assert_eq!(
        fs::read_to_string(dir.path().join("dist/assets/index.hash")).unwrap(),
        "a1b2c3"
    );
}

#[test]
fn test_bind_verbose_logs_to_stderr() {
    let dir = project();
    let output = run_staleguard(dir.path(), &["-v", "bind"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        stderr.contains("core.binder.bind_completed"),
        "Verbose mode should emit binder events to stderr, got: {}",
        stderr
    );
    for line in stderr.lines().filter(|l| !l.trim().is_empty()) {
        assert!(
            serde_json::from_str::<serde_json::Value>(line).is_ok(),
            "stderr log line should be JSON: {}",
            line
        );
    }
    assert!(!stdout.contains(r#""event":"#));
}

#[test]
fn test_bind_json_output() {
    let dir = project();
    let output = run_staleguard(dir.path(), &["bind", "--json", "--base", "/app"]);
    assert!(output.status.success());

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be a JSON report");
    assert_eq!(report["bound"], serde_json::json!(["index.html"]));
    assert_eq!(report["modified"], serde_json::json!(["index.html"]));
    assert_eq!(
        report["emitted"],
        serde_json::json!(["assets/index.hash", "assets/index-a1b2c3.updater.js"])
    );

    let index = fs::read_to_string(dir.path().join("dist/index.html")).unwrap();
    assert!(index.contains("/app/assets/index-a1b2c3.updater.js"));
}

#[test]
fn test_bind_project_config_is_applied() {
    let dir = project();
    fs::create_dir_all(dir.path().join(".staleguard")).unwrap();
    fs::write(
        dir.path().join(".staleguard/config.toml"),
        "[watcher]\ninterval_ms = 1234\nforce_update = true\n",
    )
    .unwrap();

    let output = run_staleguard(dir.path(), &["bind"]);
    assert!(output.status.success());

    let updater =
        fs::read_to_string(dir.path().join("dist/assets/index-a1b2c3.updater.js")).unwrap();
    assert!(updater.contains("var INTERVAL = 1234;"));
    assert!(updater.contains("var FORCE = true;"));
}

#[test]
fn test_bind_missing_dist_exits_with_error() {
    let dir = project();
    let output = run_staleguard(dir.path(), &["--no-color", "bind", "--dist", "missing"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("❌ Bind failed"), "got: {}", stderr);
}

#[test]
fn test_watch_rejects_relative_url() {
    let dir = project();
    let output = run_staleguard(dir.path(), &["--no-color", "watch", "--url", "/assets/index.hash"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid fingerprint URL"), "got: {}", stderr);
}

#[test]
fn test_completions_bash() {
    let dir = project();
    let output = run_staleguard(dir.path(), &["completions", "bash"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("staleguard"));
}
