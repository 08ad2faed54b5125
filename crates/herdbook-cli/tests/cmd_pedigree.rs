//! Integration tests for `herdbook pedigree`.
#![allow(clippy::expect_used)]

use std::io::Write as _;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Path to the compiled `herdbook` binary.
fn herdbook_bin() -> PathBuf {
    let mut path = std::env::current_exe().expect("current exe");
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.push("herdbook");
    path
}

/// Path to a shared fixture file.
fn fixture(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("../../tests/fixtures");
    path.push(name);
    path
}

fn registry() -> String {
    fixture("registry.json")
        .to_str()
        .expect("fixture path is UTF-8")
        .to_owned()
}

fn herdbook(args: &[&str]) -> std::process::Output {
    Command::new(herdbook_bin())
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("HERDBOOK_GENERATIONS")
        .env_remove("HERDBOOK_MAX_FILE_SIZE")
        .output()
        .expect("run herdbook")
}

fn stdout_json(out: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&out.stdout).expect("stdout should be JSON")
}

// ---------------------------------------------------------------------------
// human mode
// ---------------------------------------------------------------------------

#[test]
fn pedigree_human_lists_common_ancestors() {
    let out = herdbook(&["pedigree", &registry(), "G1-1"]);
    assert!(out.status.success(), "exit code: {:?}", out.status.code());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("roots: G1-1"), "{stdout}");
    assert!(stdout.contains("nodes (7):"), "{stdout}");
    assert!(stdout.contains("Gustav (G5-2)  [common]"), "{stdout}");
    assert!(
        stdout.contains("common ancestors (2): G5-2, G6-1"),
        "{stdout}"
    );
}

#[test]
fn pedigree_generations_bound_cuts_expansion() {
    let out = herdbook(&["pedigree", &registry(), "G1-1", "--generations", "2"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(!stdout.contains("G6-1"), "G6-1 is generation 3: {stdout}");
    assert!(stdout.contains("common ancestors (1): G5-2"), "{stdout}");
}

#[test]
fn pedigree_generations_from_env() {
    let out = Command::new(herdbook_bin())
        .args(["pedigree", &registry(), "G1-1"])
        .env("HERDBOOK_GENERATIONS", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("run herdbook");
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("nodes (3):"), "{stdout}");
    assert!(stdout.contains("common ancestors: none"), "{stdout}");
}

// ---------------------------------------------------------------------------
// JSON mode
// ---------------------------------------------------------------------------

#[test]
fn pedigree_json_shape() {
    let out = herdbook(&["pedigree", &registry(), "G1-1", "--format", "json"]);
    assert!(out.status.success());
    let v = stdout_json(&out);
    assert_eq!(v["roots"], serde_json::json!(["G1-1"]));
    assert_eq!(v["nodes"].as_array().map(Vec::len), Some(7));
    assert_eq!(v["edges"].as_array().map(Vec::len), Some(7));
    assert_eq!(v["common_ancestors"], serde_json::json!(["G5-2", "G6-1"]));
    assert_eq!(v["nodes"][0]["label"], "Ylva (G1-1)");
    assert_eq!(v["edges"][0]["from"], "G1-1");
    assert_eq!(v["edges"][0]["to"], "G2-3");
}

#[test]
fn pedigree_highlight_colours_common_nodes() {
    let out = herdbook(&["pedigree", &registry(), "G1-1", "-f", "json", "--highlight"]);
    assert!(out.status.success());
    let v = stdout_json(&out);
    let nodes = v["nodes"].as_array().expect("nodes array");
    for node in nodes {
        let id = node["id"].as_str().expect("id");
        let coloured = node.get("color").is_some();
        assert_eq!(coloured, id == "G5-2" || id == "G6-1", "node {id}");
    }
}

#[test]
fn pedigree_unregistered_parent_is_leaf() {
    let out = herdbook(&["pedigree", &registry(), "G7-1", "-f", "json"]);
    assert!(out.status.success());
    let v = stdout_json(&out);
    let leaf = v["nodes"]
        .as_array()
        .expect("nodes")
        .iter()
        .find(|n| n["id"] == "G9-9")
        .expect("G9-9 present");
    assert_eq!(leaf["label"], "G9-9");
}

#[test]
fn pedigree_reads_stdin() {
    let content = std::fs::read(fixture("registry.json")).expect("read fixture");
    let mut child = Command::new(herdbook_bin())
        .args(["pedigree", "-", "G2-3", "-f", "json"])
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn herdbook");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(&content)
        .expect("write stdin");
    let out = child.wait_with_output().expect("wait");
    assert!(out.status.success());
    assert_eq!(stdout_json(&out)["roots"], serde_json::json!(["G2-3"]));
}

#[test]
fn verbose_logs_go_to_stderr() {
    let out = herdbook(&["pedigree", &registry(), "G1-1", "-f", "json", "--verbose"]);
    assert!(out.status.success());
    stdout_json(&out);
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("pedigree built"), "stderr: {stderr}");
}

// ---------------------------------------------------------------------------
// failures
// ---------------------------------------------------------------------------

#[test]
fn pedigree_unknown_animal_exits_1() {
    let out = herdbook(&["pedigree", &registry(), "G0-0"]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("no pedigree available"), "stderr: {stderr}");
}

#[test]
fn pedigree_missing_registry_exits_2() {
    let out = herdbook(&["pedigree", "/no/such/registry.json", "G1-1"]);
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("file not found"), "stderr: {stderr}");
}

#[test]
fn pedigree_duplicate_animal_exits_2() {
    let path = fixture("registry-duplicate.json");
    let out = herdbook(&["pedigree", path.to_str().expect("path"), "G1-1"]);
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("duplicate animal id"), "stderr: {stderr}");
}

#[test]
fn pedigree_malformed_registry_exits_2() {
    let mut f = tempfile::NamedTempFile::new().expect("temp file");
    f.write_all(b"{\"animals\": [").expect("write");
    let out = herdbook(&["pedigree", f.path().to_str().expect("path"), "G1-1"]);
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn pedigree_file_too_large_exits_2() {
    let out = herdbook(&["pedigree", &registry(), "G1-1", "--max-file-size", "16"]);
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("too large"), "stderr: {stderr}");
}

#[test]
fn version_prints_core_version() {
    let out = herdbook(&["version"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout.trim().split('.').count(), 3, "{stdout}");
}
