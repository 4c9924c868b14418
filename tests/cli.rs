//! Binary behaviour.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const PAGE: &str = r#"<html>
<body>
  <img src="img/company-logo.png">
  <img src="spacer.gif" alt="">
  <svg viewBox="0 0 24 24"><line x1="3" y1="6" x2="21" y2="6"/><line x1="3" y1="12" x2="21" y2="12"/><line x1="3" y1="18" x2="21" y2="18"/></svg>
  <svg aria-hidden="true"><path d="M0 0h24v24H0z"/></svg>
</body>
</html>
"#;

const PROVIDER_VARS: &[&str] = &[
    "ALTWISE_API_KEY",
    "ALTWISE_ENDPOINT",
    "ALTWISE_MODEL",
    "ALTWISE_USE_VISION",
    "OPENAI_API_KEY",
    "ANTHROPIC_API_KEY",
    "GEMINI_API_KEY",
    "GOOGLE_API_KEY",
];

fn write_page(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("index.html");
    std::fs::write(&path, PAGE).unwrap();
    path
}

fn altwise(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("altwise").unwrap();
    cmd.current_dir(dir.path());
    for var in PROVIDER_VARS {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_scan_lists_flagged_nodes() {
    let dir = TempDir::new().unwrap();
    let page = write_page(dir.path());

    altwise(&dir)
        .arg("scan")
        .arg(&page)
        .assert()
        .success()
        .stdout(predicate::str::contains(":3:3: img has no alt"))
        .stdout(predicate::str::contains(":5:3: svg has no <title>"))
        .stdout(predicate::str::contains("spacer.gif").not());
}

#[test]
fn test_scan_json_lines() {
    let dir = TempDir::new().unwrap();
    let page = write_page(dir.path());

    let output = altwise(&dir).args(["scan", "--json"]).arg(&page).output().unwrap();
    assert!(output.status.success());

    let lines: Vec<serde_json::Value> = String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["kind"], "img");
    assert_eq!(lines[0]["line"], 3);
    assert_eq!(lines[1]["kind"], "svg");
}

#[test]
fn test_suggest_without_provider_uses_heuristic() {
    let dir = TempDir::new().unwrap();
    let page = write_page(dir.path());

    let output = altwise(&dir).arg("suggest").arg(&page).output().unwrap();
    assert!(output.status.success());

    let lines: Vec<serde_json::Value> = String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|l| l["strategy"] == "heuristic"));
    assert_eq!(lines[1]["suggestion"]["titleText"], "Abrir menu de navegação");
    assert_eq!(lines[1]["suggestion"]["isDecorative"], false);
}

#[test]
fn test_suggest_unreachable_provider_still_succeeds() {
    let dir = TempDir::new().unwrap();
    let page = write_page(dir.path());

    altwise(&dir)
        .arg("suggest")
        .arg(&page)
        .args(["--endpoint", "http://127.0.0.1:1/openai", "--api-key", "sk-test"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"strategy\":\"heuristic\""))
        .stdout(predicate::str::contains("falling back to heuristic"));
}

#[test]
fn test_suggest_reads_config_file() {
    let dir = TempDir::new().unwrap();
    let page = write_page(dir.path());
    std::fs::write(
        dir.path().join("custom.toml"),
        "[client]\nendpoint = \"http://127.0.0.1:1/openai\"\napi_key = \"sk-file\"\n",
    )
    .unwrap();

    altwise(&dir)
        .arg("suggest")
        .arg(&page)
        .args(["--config", "custom.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("text suggestion failed"));
}

#[test]
fn test_unreadable_file_fails() {
    let dir = TempDir::new().unwrap();

    altwise(&dir)
        .args(["scan", "missing.html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read missing.html"));
}

#[test]
fn test_invalid_config_fails() {
    let dir = TempDir::new().unwrap();
    let page = write_page(dir.path());
    std::fs::write(dir.path().join("altwise.toml"), "[client\n").unwrap();

    altwise(&dir)
        .arg("suggest")
        .arg(&page)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load config"));
}
