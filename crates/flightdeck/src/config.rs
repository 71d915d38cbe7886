//! CLI configuration: thin wrapper around `flightdeck_config`.
//!
//! Adds resolution that respects `GlobalOpts` flag overrides (--api-url,
//! --insecure, --output, --color).

use clap::ValueEnum;

use flightdeck_core::ClientConfig;

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};
use crate::error::CliError;

pub use flightdeck_config::{
    Config, Profile, config_path, load_config_or_default, save_config,
};

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Error for a profile name the config does not define, listing the
/// names it does.
pub fn profile_not_found(name: String, config: &Config) -> CliError {
    let names = config.profile_names();
    CliError::ProfileNotFound {
        name,
        available: if names.is_empty() {
            "(none)".into()
        } else {
            names.join(", ")
        },
    }
}

/// Fill `--output` and `--color` from the config defaults when the flags
/// were not given. Unknown values in the file are ignored.
pub fn apply_defaults(global: &mut GlobalOpts, config: &Config) {
    if global.output.is_none() {
        global.output = OutputFormat::from_str(&config.defaults.output, true).ok();
    }
    if global.color.is_none() {
        global.color = ColorMode::from_str(&config.defaults.color, true).ok();
    }
}

/// Translate the active profile + global flags into a `ClientConfig`.
///
/// Flags win over profile values. Without a matching profile the built-in
/// defaults are used, unless `--profile` named one explicitly.
pub fn resolve_client_config(global: &GlobalOpts, config: &Config) -> Result<ClientConfig, CliError> {
    let profile_name = active_profile_name(global, config);

    let mut profile = match config.profiles.get(&profile_name) {
        Some(p) => p.clone(),
        None if global.profile.is_some() => return Err(profile_not_found(profile_name, config)),
        None => Profile::default(),
    };

    if let Some(ref url) = global.api_url {
        profile.api_url.clone_from(url);
    }
    if global.insecure {
        profile.insecure = Some(true);
    }

    Ok(flightdeck_config::profile_to_client_config(
        &profile,
        &config.defaults,
    )?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use clap::Parser;
    use flightdeck_core::TlsVerification;

    use super::*;
    use crate::cli::Cli;

    fn global(args: &[&str]) -> GlobalOpts {
        let mut argv = vec!["flightdeck"];
        argv.extend_from_slice(args);
        argv.push("gates");
        Cli::try_parse_from(argv).unwrap().global
    }

    fn config_with(name: &str, url: &str) -> Config {
        let mut cfg = Config::default();
        cfg.profiles.insert(
            name.into(),
            Profile {
                api_url: url.into(),
                ..Profile::default()
            },
        );
        cfg
    }

    #[test]
    fn no_profile_falls_back_to_local_default() {
        let cc = resolve_client_config(&global(&[]), &Config::default()).unwrap();
        assert_eq!(cc.api_url.as_str(), "http://localhost:8080/api");
    }

    #[test]
    fn flag_overrides_profile_url() {
        let cfg = config_with("default", "http://ops.example.com/api");
        let cc =
            resolve_client_config(&global(&["--api-url", "http://other:9000/api"]), &cfg).unwrap();
        assert_eq!(cc.api_url.as_str(), "http://other:9000/api");
    }

    #[test]
    fn named_profile_is_used() {
        let cfg = config_with("ops", "http://ops.example.com/api");
        let cc = resolve_client_config(&global(&["--profile", "ops", "-k"]), &cfg).unwrap();
        assert_eq!(cc.api_url.as_str(), "http://ops.example.com/api");
        assert_eq!(cc.tls, TlsVerification::DangerAcceptInvalid);
    }

    #[test]
    fn unknown_explicit_profile_is_an_error() {
        let cfg = config_with("ops", "http://ops.example.com/api");
        let err = resolve_client_config(&global(&["--profile", "nope"]), &cfg).unwrap_err();
        assert!(matches!(err, CliError::ProfileNotFound { ref available, .. } if available == "ops"));
    }

    #[test]
    fn defaults_fill_unset_output() {
        let mut cfg = Config::default();
        cfg.defaults.output = "yaml".into();
        let mut g = global(&[]);
        apply_defaults(&mut g, &cfg);
        assert_eq!(g.format(), OutputFormat::Yaml);

        let mut explicit = global(&["-o", "json"]);
        apply_defaults(&mut explicit, &cfg);
        assert_eq!(explicit.format(), OutputFormat::Json);
    }
}
