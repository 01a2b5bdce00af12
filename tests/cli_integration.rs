//! CLI integration tests for backlog
//!
//! These tests run the binary end to end: default rendering of the built-in
//! backlog, backlog files, configuration and the report commands.

use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Get a command instance for the backlog binary, isolated from the caller's environment
///
/// The home and XDG config directories point at a path with no config in
/// it, so a developer's own global config never leaks into the tests.
fn backlog_cmd() -> assert_cmd::Command {
    let home = Path::new(env!("CARGO_TARGET_TMPDIR")).join("no-home");
    let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("backlog"));
    cmd.env_remove("BACKLOG_FILE")
        .env_remove("BACKLOG_CONFIG")
        .env("HOME", &home)
        .env("XDG_CONFIG_HOME", home.join(".config"));
    cmd
}

/// Writes a file into a fresh temp dir
fn write_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    (dir, path)
}

const SCENARIO: &str = r#"
[[direction]]
name = "A"

[[direction.item]]
id = "X1"
label = "First"
done = true

[[direction.item]]
id = "X2"
label = "Second"
depends_on = "X1"
"#;

const SELF_DEPENDENT: &str = r#"
[[direction]]
name = "A"

[[direction.item]]
id = "X1"
label = "Loops"
depends_on = "X1"
"#;

const DANGLING: &str = r#"
[[direction]]
name = "A"

[[direction.item]]
id = "X1"
label = "First"
depends_on = "GHOST"
"#;

// =============================================================================
// Default Invocation
// =============================================================================

#[test]
fn test_no_args_prints_builtin_graph() {
    let output = backlog_cmd().assert().success();
    let stdout = String::from_utf8_lossy(&output.get_output().stdout).to_string();

    assert!(stdout.starts_with("// Backlog\ndigraph {\n"));
    assert!(stdout.ends_with("}\n"));
    assert!(stdout.contains("subgraph \"cluster_Rustbasics\" {"));
    assert!(stdout.contains("label=\"Prototype Web GUI\""));
    assert!(stdout.contains("\"RB1\" [label=\"Helloworld\" color=\"lightgreen\"]"));
    assert!(stdout.contains("\"UT6\" [label=\"Mock system calls\" color=\"lightblue2\"]"));
    assert!(stdout.contains("\t\"UT1\" -> \"RB2\"\n"));
    assert_eq!(stdout.matches("subgraph ").count(), 15);
    assert_eq!(stdout.matches(" -> ").count(), 46 + 27);
}

#[test]
fn test_no_args_writes_nothing_to_stderr() {
    backlog_cmd()
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_render_matches_default() {
    let default = backlog_cmd().assert().success().get_output().stdout.clone();
    let render = backlog_cmd()
        .arg("render")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(default, render);
}

#[test]
fn test_verbose_goes_to_stderr() {
    backlog_cmd()
        .arg("--verbose")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("// Backlog"))
        .stderr(predicate::str::contains("[verbose:backlog] Using built-in backlog"));
}

// =============================================================================
// Backlog Files
// =============================================================================

#[test]
fn test_render_scenario_file() {
    let (_dir, path) = write_file("backlog.toml", SCENARIO);

    let output = backlog_cmd()
        .arg("--file")
        .arg(&path)
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&output.get_output().stdout).to_string();

    assert_eq!(stdout.matches("subgraph ").count(), 1);
    assert!(stdout.contains("label=\"A\""));
    assert!(stdout.contains("\"X1\" [label=\"First\" color=\"lightgreen\"]"));
    assert!(stdout.contains("\"X2\" [label=\"Second\" color=\"lightblue2\"]"));
    // One implicit and one explicit edge between the same pair
    assert_eq!(stdout.matches("\"X1\" -> \"X2\"").count(), 2);
    assert!(stdout.contains("\t\t\"X1\" -> \"X2\"\n"));
    assert!(stdout.contains("\n\t\"X1\" -> \"X2\"\n"));
}

#[test]
fn test_file_from_environment() {
    let (_dir, path) = write_file("backlog.toml", SCENARIO);

    backlog_cmd()
        .env("BACKLOG_FILE", &path)
        .assert()
        .success()
        .stdout(predicate::str::contains("label=\"Second\""));
}

#[test]
fn test_yaml_file() {
    let yaml = "direction:\n  - name: Solo\n    item:\n      - id: S1\n        label: Alone\n";
    let (_dir, path) = write_file("backlog.yaml", yaml);

    backlog_cmd()
        .args(["-i", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"S1\" [label=\"Alone\""))
        .stdout(predicate::str::contains(" -> ").not());
}

#[test]
fn test_dangling_dependency_renders_by_default() {
    let (_dir, path) = write_file("backlog.toml", DANGLING);

    backlog_cmd()
        .arg("--file")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\t\"GHOST\" -> \"X1\"\n"));
}

#[test]
fn test_strict_render_rejects_dangling_dependency() {
    let (_dir, path) = write_file("backlog.toml", DANGLING);

    backlog_cmd()
        .arg("--file")
        .arg(&path)
        .args(["render", "--strict"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("depends on unknown item GHOST"));
}

#[test]
fn test_unsupported_extension() {
    let (_dir, path) = write_file("backlog.txt", SCENARIO);

    backlog_cmd()
        .arg("--file")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported backlog file extension"));
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();

    backlog_cmd()
        .arg("--file")
        .arg(dir.path().join("nope.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read backlog file"));
}

#[test]
fn test_render_to_output_file() {
    let (dir, path) = write_file("backlog.toml", SCENARIO);
    let out = dir.path().join("graph.dot");

    backlog_cmd()
        .arg("--file")
        .arg(&path)
        .arg("render")
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote graph to"));

    let dot = fs::read_to_string(&out).unwrap();
    assert!(dot.starts_with("// Backlog\ndigraph {"));
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_config_changes_colors() {
    let (_dir, config) = write_file(
        "config.toml",
        "[style]\ncomment = \"Roadmap\"\ndone_color = \"gray\"\ntodo_color = \"gold\"\n",
    );

    let output = backlog_cmd()
        .arg("--config")
        .arg(&config)
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&output.get_output().stdout).to_string();

    assert!(stdout.starts_with("// Roadmap\n"));
    assert!(stdout.contains("\"RB1\" [label=\"Helloworld\" color=\"gray\"]"));
    assert!(stdout.contains("\"UT6\" [label=\"Mock system calls\" color=\"gold\"]"));
    assert!(!stdout.contains("lightgreen"));
}

#[test]
fn test_strict_from_config() {
    let (_dir, config) = write_file("config.toml", "strict = true\n");
    let (_dir2, backlog) = write_file("backlog.toml", DANGLING);

    backlog_cmd()
        .arg("--config")
        .arg(&config)
        .arg("--file")
        .arg(&backlog)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Backlog is invalid"));
}

#[test]
fn test_invalid_config() {
    let (_dir, config) = write_file("config.toml", "[style]\ndone_color = \"\"\n");

    backlog_cmd()
        .env("BACKLOG_CONFIG", &config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("done_color must not be empty"));
}

#[cfg(unix)]
#[test]
fn test_broken_global_config_falls_back_to_defaults() {
    let home = TempDir::new().unwrap();
    let xdg = home.path().join(".config");
    // Linux and macOS locations of the global file
    for dir in [
        xdg.join("backlog-graph"),
        home.path()
            .join("Library/Application Support/dev.backlog.backlog-graph"),
    ] {
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.toml"), "strict = [").unwrap();
    }

    let output = backlog_cmd()
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", &xdg)
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
    let stdout = String::from_utf8_lossy(&output.get_output().stdout).to_string();
    assert!(stdout.starts_with("// Backlog\ndigraph {\n"));
    assert_eq!(stdout.matches("subgraph ").count(), 15);

    backlog_cmd()
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", &xdg)
        .arg("--verbose")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "[verbose:config] Ignoring global configuration",
        ));
}

#[test]
fn test_broken_explicit_config_still_fails() {
    let (_dir, config) = write_file("config.toml", "strict = [");

    backlog_cmd()
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to parse configuration"));
}

#[test]
fn test_missing_config() {
    let dir = TempDir::new().unwrap();

    backlog_cmd()
        .arg("--config")
        .arg(dir.path().join("missing.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}

// =============================================================================
// Reports
// =============================================================================

#[test]
fn test_check_builtin_is_valid() {
    backlog_cmd()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Backlog is valid (61 items)"));
}

#[test]
fn test_check_reports_problems() {
    let (_dir, path) = write_file("backlog.toml", DANGLING);

    let output = backlog_cmd()
        .arg("--file")
        .arg(&path)
        .args(["check", "--format", "json"])
        .assert()
        .failure();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(json["valid"], false);
    assert_eq!(json["problems"].as_array().unwrap().len(), 1);
}

#[test]
fn test_check_reports_self_dependency() {
    let (_dir, path) = write_file("backlog.toml", SELF_DEPENDENT);

    backlog_cmd()
        .arg("--file")
        .arg(&path)
        .arg("check")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Item depends on itself: X1"))
        .stderr(predicate::str::contains("Backlog has 1 problem(s)"));

    backlog_cmd()
        .arg("--file")
        .arg(&path)
        .args(["render", "--strict"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_stats_json() {
    let output = backlog_cmd()
        .args(["stats", "--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(json["directions"], 15);
    assert_eq!(json["items"], 61);
    assert_eq!(json["sequence_edges"], 46);
    assert_eq!(json["dependency_edges"], 27);
    assert_eq!(json["dangling"], 0);

    let edges = json["edges"].as_array().unwrap();
    assert_eq!(edges.len(), 46 + 27);
    assert!(edges.contains(&serde_json::json!({
        "from": "UT1",
        "to": "RB2",
        "kind": "dependency",
    })));
}

#[test]
fn test_stats_text() {
    backlog_cmd()
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Directions:       15"))
        .stdout(predicate::str::contains("Dependency edges: 27"));
}

#[test]
fn test_ready_and_blocked_on_scenario() {
    let (_dir, path) = write_file("backlog.toml", SCENARIO);

    let output = backlog_cmd()
        .arg("--file")
        .arg(&path)
        .args(["ready", "--format", "json"])
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: Value = serde_json::from_str(stdout.trim()).unwrap();
    let ready = json.as_array().unwrap();
    assert_eq!(ready.len(), 1);
    assert_eq!(ready[0]["id"], "X2");
    assert_eq!(ready[0]["direction"], "A");
    assert_eq!(ready[0]["unblocks"], serde_json::json!([]));

    backlog_cmd()
        .arg("--file")
        .arg(&path)
        .arg("blocked")
        .assert()
        .success()
        .stdout(predicate::str::contains("No blocked items."));
}

#[test]
fn test_blocked_builtin() {
    backlog_cmd()
        .arg("blocked")
        .assert()
        .success()
        .stdout(predicate::str::contains("CI6"))
        .stdout(predicate::str::contains("TOOL3"));
}

#[test]
fn test_export_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("exported.toml");

    let output = backlog_cmd().arg("export").assert().success();
    fs::write(&path, &output.get_output().stdout).unwrap();

    let from_file = backlog_cmd()
        .arg("--file")
        .arg(&path)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let builtin = backlog_cmd().assert().success().get_output().stdout.clone();

    assert_eq!(from_file, builtin);
}

#[test]
fn test_export_json() {
    let output = backlog_cmd()
        .args(["export", "--to", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["direction"].as_array().unwrap().len(), 15);
    assert_eq!(json["direction"][7]["item"][0]["depends_on"][1], "RB4");
}

#[test]
fn test_export_to_yaml_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("backlog.yml");

    backlog_cmd()
        .arg("export")
        .arg("--output")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported backlog to"));

    backlog_cmd()
        .arg("--file")
        .arg(&path)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Backlog is valid (61 items)"));
}
