//! Shared configuration for flightdeck front ends.
//!
//! TOML profiles layered with `FLIGHTDECK_*` environment variables, and
//! translation to `flightdeck_core::ClientConfig`. The CLI adds
//! `GlobalOpts`-aware overrides on top.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use flightdeck_core::{ClientConfig, DEFAULT_API_URL, TlsVerification};

/// Prefix for environment overrides. Nested keys use `__`, e.g.
/// `FLIGHTDECK_PROFILES__PROD__API_URL`.
pub const ENV_PREFIX: &str = "FLIGHTDECK_";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Profile used when `--profile` is not given.
    pub default_profile: Option<String>,

    #[serde(default)]
    pub defaults: Defaults,

    /// Named flights-service profiles.
    #[serde(default)]
    pub profiles: BTreeMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,

    #[serde(default)]
    pub insecure: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            insecure: false,
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}

/// A named flights-service profile.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Profile {
    /// API root, e.g. "http://localhost:8080/api".
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Path to a custom CA certificate (PEM).
    pub ca_cert: Option<PathBuf>,

    /// Override the global insecure TLS setting.
    pub insecure: Option<bool>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            ca_cert: None,
            insecure: None,
        }
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.into()
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "flightdeck", "flightdeck").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("flightdeck");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load from an explicit file path + environment. A missing file just
/// yields the defaults.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX).split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if the file doesn't exist or fails
/// to parse.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path();
    save_config_to(cfg, &path)?;
    Ok(path)
}

/// Serialize config to TOML and write it to `path`, creating parent
/// directories as needed.
pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, cfg.to_toml()?)?;
    Ok(())
}

// ── Profile resolution ──────────────────────────────────────────────

impl Config {
    /// Profile names in sorted order, for listings and error help.
    pub fn profile_names(&self) -> Vec<String> {
        self.profiles.keys().cloned().collect()
    }

    /// The file contents `save_config` would write.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Build a `ClientConfig` from a profile. No CLI flag overrides.
pub fn profile_to_client_config(
    profile: &Profile,
    defaults: &Defaults,
) -> Result<ClientConfig, ConfigError> {
    let api_url: url::Url = profile
        .api_url
        .parse()
        .map_err(|_| ConfigError::Validation {
            field: "api_url".into(),
            reason: format!("invalid URL: {}", profile.api_url),
        })?;

    let tls = if profile.insecure.unwrap_or(defaults.insecure) {
        TlsVerification::DangerAcceptInvalid
    } else if let Some(ref ca_path) = profile.ca_cert {
        TlsVerification::CustomCa(ca_path.clone())
    } else {
        TlsVerification::SystemDefaults
    };

    Ok(ClientConfig { api_url, tls })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_config_has_default_profile_name() {
        let cfg = Config::default();
        assert_eq!(cfg.default_profile.as_deref(), Some("default"));
        assert_eq!(cfg.defaults.output, "table");
        assert!(cfg.profiles.is_empty());
    }

    #[test]
    fn profile_with_ca_cert_uses_custom_ca() {
        let profile = Profile {
            api_url: "https://flights.example.com/api".into(),
            ca_cert: Some("/etc/ssl/ops.pem".into()),
            insecure: None,
        };
        let cc = profile_to_client_config(&profile, &Defaults::default()).unwrap();
        assert_eq!(cc.api_url.as_str(), "https://flights.example.com/api");
        assert_eq!(cc.tls, TlsVerification::CustomCa("/etc/ssl/ops.pem".into()));
    }

    #[test]
    fn insecure_beats_ca_cert() {
        let profile = Profile {
            ca_cert: Some("/etc/ssl/ops.pem".into()),
            insecure: Some(true),
            ..Profile::default()
        };
        let cc = profile_to_client_config(&profile, &Defaults::default()).unwrap();
        assert_eq!(cc.tls, TlsVerification::DangerAcceptInvalid);
    }

    #[test]
    fn profile_inherits_global_insecure() {
        let defaults = Defaults {
            insecure: true,
            ..Defaults::default()
        };
        let cc = profile_to_client_config(&Profile::default(), &defaults).unwrap();
        assert_eq!(cc.tls, TlsVerification::DangerAcceptInvalid);
    }

    #[test]
    fn bad_url_is_validation_error() {
        let profile = Profile {
            api_url: "not a url".into(),
            ..Profile::default()
        };
        let err = profile_to_client_config(&profile, &Defaults::default()).unwrap_err();
        assert!(matches!(err, ConfigError::Validation { ref field, .. } if field == "api_url"));
    }

    #[test]
    fn profile_names_are_sorted() {
        let mut cfg = Config::default();
        cfg.profiles.insert("staging".into(), Profile::default());
        cfg.profiles.insert("local".into(), Profile::default());
        assert_eq!(cfg.profile_names(), ["local", "staging"]);
    }

    #[test]
    fn toml_lists_profiles_in_name_order() {
        let mut cfg = Config::default();
        cfg.profiles.insert(
            "staging".into(),
            Profile {
                api_url: "https://staging.example.com/api".into(),
                ..Profile::default()
            },
        );
        cfg.profiles.insert(
            "local".into(),
            Profile {
                insecure: Some(true),
                ..Profile::default()
            },
        );

        let text = cfg.to_toml().unwrap();

        let local = text.find("[profiles.local]").unwrap();
        let staging = text.find("[profiles.staging]").unwrap();
        assert!(local < staging);
        assert!(text.contains("default_profile = \"default\""));
        assert!(text.contains("api_url = \"https://staging.example.com/api\""));
        assert!(!text.contains("ca_cert"));
    }
}
