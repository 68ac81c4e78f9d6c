use assert_cmd::Command;
use predicates::prelude::*;

fn fanboard() -> Command {
    let mut cmd = Command::cargo_bin("fanboard").expect("fanboard binary");
    cmd.env_remove("SPORTS_API_KEY").env_remove("RUST_LOG");
    cmd
}

#[test]
fn catalog_lists_every_sport() {
    fanboard()
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("football"))
        .stdout(predicate::str::contains("american-football"))
        .stdout(predicate::str::contains("categories"));
}

#[test]
fn catalog_json_is_one_document() {
    let output = fanboard().args(["--json", "catalog"]).output().unwrap();
    assert!(output.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(doc["command"], "catalog");
    assert_eq!(doc["lists"].as_array().map(Vec::len), Some(20));
    assert_eq!(doc["lists"][0]["scope"]["type"], "league");
}

#[test]
fn catalog_does_not_need_a_config_file() {
    fanboard()
        .args(["--config", "/nonexistent/fanboard.toml", "catalog"])
        .assert()
        .success();
}

#[test]
fn unknown_sport_is_rejected() {
    fanboard()
        .args(["list", "curling", "teams"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("curling"));
}

#[test]
fn unsupported_pair_exits_nonzero() {
    fanboard()
        .args(["--config", "/nonexistent/fanboard.toml"])
        .args(["list", "mma", "league"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("mma"));
}

#[test]
fn invalid_config_exits_nonzero() {
    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(file.path(), "[logging]\nformat = \"xml\"\n").unwrap();

    fanboard()
        .arg("--config")
        .arg(file.path())
        .args(["list", "football", "leagues"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("logging.format"));
}

#[test]
fn favorite_requires_wallet() {
    fanboard()
        .args(["favorite", "football", "team", "33"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--wallet"));
}
