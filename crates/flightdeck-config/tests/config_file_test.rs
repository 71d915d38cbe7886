// File-level tests for config loading and saving.
#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use flightdeck_config::{
    Config, ConfigError, Profile, load_config_from, profile_to_client_config, save_config_to,
};

#[test]
fn missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let cfg = load_config_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(cfg, Config::default());
}

#[test]
fn saved_config_loads_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut cfg = Config {
        default_profile: Some("ops".into()),
        ..Config::default()
    };
    cfg.profiles.insert(
        "ops".into(),
        Profile {
            api_url: "https://ops.example.com/api".into(),
            ca_cert: None,
            insecure: Some(true),
        },
    );

    save_config_to(&cfg, &path).unwrap();
    let loaded = load_config_from(&path).unwrap();

    assert_eq!(loaded, cfg);
}

#[test]
fn partial_file_is_filled_with_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
default_profile = "local"

[profiles.local]
"#,
    )
    .unwrap();

    let cfg = load_config_from(&path).unwrap();

    assert_eq!(cfg.default_profile.as_deref(), Some("local"));
    assert_eq!(cfg.defaults.output, "table");
    let local = &cfg.profiles["local"];
    assert_eq!(local.api_url, "http://localhost:8080/api");
    let cc = profile_to_client_config(local, &cfg.defaults).unwrap();
    assert_eq!(cc.api_url.as_str(), "http://localhost:8080/api");
}

#[test]
fn malformed_file_is_figment_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "default_profile = [1, 2").unwrap();

    let err = load_config_from(&path).unwrap_err();

    assert!(matches!(err, ConfigError::Figment(_)));
}
