use std::time::Duration;

use tempfile::tempdir;

use super::loader::load_config_file;
use super::test_support::args_with_config;
use super::types::{ConfigFile, DurationValue};
use crate::error::{AppError, ConfigError};

#[test]
fn parse_toml_config() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("roundprobe.toml");
    let content = r#"
target = "http://localhost:3000"
paths = ["/", "/health"]
rounds = 5
timeout = "500ms"
wait_timeout = 2
status = 204
"#;
    std::fs::write(&path, content).map_err(|err| format!("write failed: {}", err))?;

    let config = load_config_file(&path).map_err(|err| err.to_string())?;
    if config.target.as_deref() != Some("http://localhost:3000") {
        return Err("Unexpected target".to_owned());
    }
    if config.paths != Some(vec!["/".to_owned(), "/health".to_owned()]) {
        return Err(format!("Unexpected paths: {:?}", config.paths));
    }
    if config.rounds != Some(5) {
        return Err("Unexpected rounds".to_owned());
    }
    let timeout = config
        .timeout
        .as_ref()
        .ok_or_else(|| "Expected timeout".to_owned())?
        .to_duration()
        .map_err(|err| err.to_string())?;
    if timeout != Duration::from_millis(500) {
        return Err(format!("Unexpected timeout: {:?}", timeout));
    }
    if !matches!(config.wait_timeout, Some(DurationValue::Seconds(2))) {
        return Err("Unexpected wait_timeout".to_owned());
    }
    if config.status != Some(204) {
        return Err("Unexpected status".to_owned());
    }
    Ok(())
}

#[test]
fn parse_json_config_with_url_alias() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("roundprobe.json");
    let content = r#"{ "url": "http://127.0.0.1:9000", "rounds": 2, "json": true }"#;
    std::fs::write(&path, content).map_err(|err| format!("write failed: {}", err))?;

    let config = load_config_file(&path).map_err(|err| err.to_string())?;
    if config.target.as_deref() != Some("http://127.0.0.1:9000") {
        return Err("Unexpected target".to_owned());
    }
    if config.json != Some(true) {
        return Err("Expected json flag".to_owned());
    }
    Ok(())
}

#[test]
fn unknown_keys_are_rejected() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("roundprobe.toml");
    std::fs::write(&path, "target = \"http://x\"\nconcurrency = 4\n")
        .map_err(|err| format!("write failed: {}", err))?;

    match load_config_file(&path) {
        Err(AppError::Config(ConfigError::ParseToml { .. })) => Ok(()),
        Err(err) => Err(format!("Unexpected error: {}", err)),
        Ok(_) => Err("Expected parse failure".to_owned()),
    }
}

#[test]
fn unsupported_extension_is_rejected() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("roundprobe.yaml");
    std::fs::write(&path, "target: x").map_err(|err| format!("write failed: {}", err))?;

    match load_config_file(&path) {
        Err(AppError::Config(ConfigError::UnsupportedExtension { ext })) if ext == "yaml" => {
            Ok(())
        }
        Err(err) => Err(format!("Unexpected error: {}", err)),
        Ok(_) => Err("Expected extension error".to_owned()),
    }
}

#[test]
fn config_fills_unset_args() -> Result<(), String> {
    let config = ConfigFile {
        target: Some("http://from-config".to_owned()),
        paths: Some(vec!["/a".to_owned()]),
        rounds: Some(3),
        timeout: Some(DurationValue::Text("2s".to_owned())),
        wait_timeout: Some(DurationValue::Text("100ms".to_owned())),
        ..ConfigFile::default()
    };

    let args = args_with_config(&["roundprobe", "-u", "http://from-cli"], &config)
        .map_err(|err| err.to_string())?;
    if args.target.as_deref() != Some("http://from-cli") {
        return Err("CLI target should win over config".to_owned());
    }
    if args.paths != ["/a"] {
        return Err(format!("Unexpected paths: {:?}", args.paths));
    }
    if args.rounds.get() != 3 {
        return Err("Unexpected rounds".to_owned());
    }
    if args.request_timeout != Duration::from_secs(2) {
        return Err("Unexpected request_timeout".to_owned());
    }
    if args.wait_timeout != Duration::from_millis(100) {
        return Err("Unexpected wait_timeout".to_owned());
    }
    Ok(())
}

#[test]
fn cli_rounds_override_config() -> Result<(), String> {
    let config = ConfigFile {
        rounds: Some(9),
        ..ConfigFile::default()
    };
    let args = args_with_config(&["roundprobe", "-u", "http://x", "--rounds", "4"], &config)
        .map_err(|err| err.to_string())?;
    if args.rounds.get() != 4 {
        return Err(format!("Unexpected rounds: {}", args.rounds.get()));
    }
    Ok(())
}

#[test]
fn zero_rounds_in_config_are_rejected() -> Result<(), String> {
    let config = ConfigFile {
        rounds: Some(0),
        ..ConfigFile::default()
    };
    match args_with_config(&["roundprobe", "-u", "http://x"], &config) {
        Err(AppError::Config(ConfigError::InvalidField { field, .. })) if field == "rounds" => {
            Ok(())
        }
        Err(err) => Err(format!("Unexpected error: {}", err)),
        Ok(_) => Err("Expected rounds error".to_owned()),
    }
}
