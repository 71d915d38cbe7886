//! `flightdeck config ...` handlers.

use dialoguer::{Confirm, Input};

use flightdeck_core::DEFAULT_API_URL;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, Profile};
use crate::error::CliError;
use crate::output;

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Init => init(global),
        ConfigCommand::Show => show(global),
        ConfigCommand::Path => {
            println!("{}", config::config_path().display());
            Ok(())
        }
        ConfigCommand::Set { key, value } => set(global, &key, value),
        ConfigCommand::Profiles => {
            profiles();
            Ok(())
        }
        ConfigCommand::SetDefault { name } => set_default(global, name),
    }
}

// ── init ────────────────────────────────────────────────────────────

/// Answers collected by `config init`.
struct InitAnswers {
    profile: String,
    api_url: String,
    insecure: bool,
}

fn init(global: &GlobalOpts) -> Result<(), CliError> {
    let answers = match global.api_url {
        Some(ref api_url) => InitAnswers {
            profile: global.profile.clone().unwrap_or_else(|| "default".into()),
            api_url: api_url.clone(),
            insecure: global.insecure,
        },
        None => ask_init_answers(global)?,
    };
    validate_url(&answers.api_url)?;

    let mut cfg = config::load_config_or_default();
    cfg.profiles.insert(
        answers.profile.clone(),
        Profile {
            api_url: answers.api_url,
            ca_cert: None,
            insecure: answers.insecure.then_some(true),
        },
    );
    cfg.default_profile = Some(answers.profile.clone());
    let written = config::save_config(&cfg)?;

    if !global.quiet {
        eprintln!("✓ Wrote {}", written.display());
        eprintln!("  Profile '{}' is now the default.", answers.profile);
        eprintln!("  Try: flightdeck flights list");
    }
    Ok(())
}

fn ask_init_answers(global: &GlobalOpts) -> Result<InitAnswers, CliError> {
    eprintln!("Setting up flightdeck ({})\n", config::config_path().display());

    let profile: String = Input::new()
        .with_prompt("Profile name")
        .default(global.profile.clone().unwrap_or_else(|| "default".into()))
        .interact_text()
        .map_err(prompt_err)?;
    let api_url: String = Input::new()
        .with_prompt("Flights API URL")
        .default(DEFAULT_API_URL.to_owned())
        .validate_with(|input: &String| validate_url(input).map_err(|e| e.to_string()))
        .interact_text()
        .map_err(prompt_err)?;
    let insecure = Confirm::new()
        .with_prompt("Accept invalid TLS certificates?")
        .default(false)
        .interact()
        .map_err(prompt_err)?;

    Ok(InitAnswers {
        profile,
        api_url,
        insecure,
    })
}

/// A failed prompt, usually because stdin is not a terminal.
fn prompt_err(e: dialoguer::Error) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed ({e}); pass --api-url to run without prompts"),
    }
}

// ── show / profiles ─────────────────────────────────────────────────

fn show(global: &GlobalOpts) -> Result<(), CliError> {
    let cfg = config::load_config_or_default();
    let text = cfg.to_toml()?;
    let active = config::active_profile_name(global, &cfg);
    let rendered = output::render_single(&global.format(), &cfg, |_| text.clone(), |_| {
        active.clone()
    })?;
    output::print_output(rendered.trim_end(), global.quiet);
    Ok(())
}

fn profiles() {
    let cfg = config::load_config_or_default();
    if cfg.profiles.is_empty() {
        eprintln!("No profiles yet. Create one with: flightdeck config init");
        return;
    }
    let default = cfg.default_profile.as_deref();
    for name in cfg.profiles.keys() {
        if default == Some(name.as_str()) {
            println!("{name} *");
        } else {
            println!("{name}");
        }
    }
}

// ── set / use ───────────────────────────────────────────────────────

fn set(global: &GlobalOpts, key: &str, value: String) -> Result<(), CliError> {
    let mut cfg = config::load_config_or_default();
    let profile_name = config::active_profile_name(global, &cfg);
    set_profile_value(cfg.profiles.entry(profile_name.clone()).or_default(), key, value)?;
    config::save_config(&cfg)?;

    if !global.quiet {
        eprintln!("✓ {profile_name}.{key} updated");
    }
    Ok(())
}

/// Write one `config set` key into `profile`.
fn set_profile_value(profile: &mut Profile, key: &str, value: String) -> Result<(), CliError> {
    match key {
        "api_url" | "api-url" => {
            validate_url(&value)?;
            profile.api_url = value;
        }
        "ca_cert" | "ca-cert" => profile.ca_cert = Some(value.into()),
        "insecure" => {
            let flag = value.parse::<bool>().map_err(|_| CliError::Validation {
                field: "insecure".into(),
                reason: format!("expected true or false, got '{value}'"),
            })?;
            profile.insecure = Some(flag);
        }
        other => {
            return Err(CliError::Validation {
                field: other.into(),
                reason: format!("unknown config key '{other}' (known: api_url, ca_cert, insecure)"),
            });
        }
    }
    Ok(())
}

fn set_default(global: &GlobalOpts, name: String) -> Result<(), CliError> {
    let mut cfg = config::load_config_or_default();
    if !cfg.profiles.contains_key(&name) {
        return Err(config::profile_not_found(name, &cfg));
    }
    cfg.default_profile = Some(name);
    config::save_config(&cfg)?;

    if !global.quiet {
        eprintln!(
            "✓ Default profile is now '{}'",
            cfg.default_profile.as_deref().unwrap_or_default()
        );
    }
    Ok(())
}

fn validate_url(value: &str) -> Result<(), CliError> {
    url::Url::parse(value)
        .map(drop)
        .map_err(|e| CliError::Validation {
            field: "api_url".into(),
            reason: format!("'{value}' is not a URL: {e}"),
        })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn set_writes_known_keys() {
        let mut profile = Profile::default();
        set_profile_value(&mut profile, "api-url", "http://ops:9000/api".into()).unwrap();
        set_profile_value(&mut profile, "insecure", "true".into()).unwrap();
        set_profile_value(&mut profile, "ca_cert", "/etc/ssl/ops.pem".into()).unwrap();

        assert_eq!(profile.api_url, "http://ops:9000/api");
        assert_eq!(profile.insecure, Some(true));
        assert_eq!(
            profile.ca_cert.as_deref(),
            Some(std::path::Path::new("/etc/ssl/ops.pem"))
        );
    }

    #[test]
    fn set_rejects_bad_values_and_keys() {
        let mut profile = Profile::default();
        assert!(set_profile_value(&mut profile, "insecure", "yes".into()).is_err());
        assert!(set_profile_value(&mut profile, "api_url", "::nope".into()).is_err());
        assert!(matches!(
            set_profile_value(&mut profile, "colour", "red".into()),
            Err(CliError::Validation { ref field, .. }) if field == "colour"
        ));
        assert_eq!(profile, Profile::default());
    }
}
