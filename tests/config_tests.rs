use std::io::Write;

use fanboard::config::Config;
use fanboard::domain::Sport;
use fanboard::error::{ConfigError, Error};

fn write_temp_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("fanboard-config-test-")
        .suffix(".toml")
        .tempfile()
        .expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write temp config");
    file
}

#[test]
fn config_loads_full_document() {
    let toml = r#"
[sports_api]
timeout_ms = 2500
retry_max_attempts = 5

[sports_api.hosts]
basketball = "http://127.0.0.1:9000/"

[indexer]
base_url = "https://indexer.example.com/api"

[logging]
level = "debug"
format = "json"
"#;

    let file = write_temp_config(toml);
    let config = Config::load(file.path()).expect("config should load");

    assert_eq!(config.sports_api.timeout_ms, 2500);
    assert_eq!(config.sports_api.retry_max_attempts, 5);
    assert_eq!(
        config.sports_api.host(Sport::Basketball),
        "http://127.0.0.1:9000"
    );
    assert_eq!(
        config.sports_api.host(Sport::Hockey),
        "https://v1.hockey.api-sports.io"
    );
    assert_eq!(config.indexer.base_url, "https://indexer.example.com/api");
    assert_eq!(config.logging.format, "json");
}

#[test]
fn config_rejects_empty_indexer_url() {
    let toml = r#"
[indexer]
base_url = "  "
"#;

    let file = write_temp_config(toml);
    match Config::load(file.path()) {
        Err(Error::Config(ConfigError::MissingField {
            field: "indexer.base_url",
        })) => {}
        Err(err) => panic!("Expected missing base_url error, got {err}"),
        Ok(_) => panic!("Expected config load to fail"),
    }
}

#[test]
fn config_rejects_relative_indexer_url() {
    let toml = r#"
[indexer]
base_url = "indexer.local/api"
"#;

    let file = write_temp_config(toml);
    assert!(matches!(
        Config::load(file.path()),
        Err(Error::Config(ConfigError::InvalidValue {
            field: "indexer.base_url",
            ..
        }))
    ));
}

#[test]
fn config_rejects_unknown_log_format() {
    let toml = r#"
[logging]
format = "logfmt"
"#;

    let file = write_temp_config(toml);
    match Config::load(file.path()) {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "logging.format",
            reason,
        })) => assert!(reason.contains("logfmt")),
        Err(err) => panic!("Expected invalid format error, got {err}"),
        Ok(_) => panic!("Expected config load to fail"),
    }
}

#[test]
fn config_rejects_zero_retry_attempts() {
    let toml = r#"
[sports_api]
retry_max_attempts = 0
"#;

    let file = write_temp_config(toml);
    assert!(matches!(
        Config::load(file.path()),
        Err(Error::Config(ConfigError::InvalidValue {
            field: "sports_api.retry_max_attempts",
            ..
        }))
    ));
}

#[test]
fn config_reports_malformed_toml() {
    let file = write_temp_config("[indexer\nbase_url = ");
    assert!(matches!(
        Config::load(file.path()),
        Err(Error::Config(ConfigError::Parse(_)))
    ));
}
