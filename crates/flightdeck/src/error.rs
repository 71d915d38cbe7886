//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` variants into user-facing errors with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use flightdeck_config::ConfigError;
use flightdeck_core::{CoreError, ValidationError};

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const CONFLICT: i32 = 6;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not connect to the flights service at {url}: {reason}")]
    #[diagnostic(
        code(flightdeck::connection_failed),
        help(
            "Check that the flights service is running and reachable.\n\
             Point at another instance with: flightdeck --api-url http://host:8080/api flights list"
        )
    )]
    ConnectionFailed { url: String, reason: String },

    #[error("TLS error talking to the flights service: {reason}")]
    #[diagnostic(
        code(flightdeck::tls_error),
        help("Use --insecure (-k) to accept the certificate, or set ca_cert in your profile.")
    )]
    TlsError { reason: String },

    // ── Resources ────────────────────────────────────────────────────
    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(flightdeck::not_found),
        help("Run: flightdeck {list_command} to see available {resource_type}s")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    // ── API ──────────────────────────────────────────────────────────
    #[error("API error (HTTP {status}): {message}")]
    #[diagnostic(code(flightdeck::api_error))]
    ApiError { status: u16, message: String },

    #[error("Unexpected response from the flights service: {message}")]
    #[diagnostic(
        code(flightdeck::decode),
        help("Check that --api-url points at the flights API root (it should end in /api).")
    )]
    Decode { message: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(flightdeck::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(flightdeck::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: flightdeck config init"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error(transparent)]
    #[diagnostic(code(flightdeck::config))]
    Config(#[from] ConfigError),

    // ── Interactive ──────────────────────────────────────────────────
    #[error("Destructive operation '{action}' requires confirmation")]
    #[diagnostic(
        code(flightdeck::confirmation_required),
        help("Use --yes (-y) to skip confirmation in non-interactive contexts.")
    )]
    NonInteractiveRequiresYes { action: String },

    // ── Internal ─────────────────────────────────────────────────────
    #[error("{message}")]
    #[diagnostic(code(flightdeck::internal))]
    Internal { message: String },

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to render JSON: {0}")]
    #[diagnostic(code(flightdeck::json))]
    Json(#[from] serde_json::Error),

    #[error("Failed to render YAML: {0}")]
    #[diagnostic(code(flightdeck::yaml))]
    Yaml(#[from] serde_yaml::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } | Self::TlsError { .. } => exit_code::CONNECTION,
            Self::NotFound { .. } | Self::ApiError { status: 404, .. } => exit_code::NOT_FOUND,
            Self::ApiError { status: 409, .. } => exit_code::CONFLICT,
            Self::Validation { .. } | Self::NonInteractiveRequiresYes { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ConnectionFailed { url, reason } if url.is_empty() => {
                CliError::TlsError { reason }
            }
            CoreError::ConnectionFailed { url, reason } => {
                CliError::ConnectionFailed { url, reason }
            }

            CoreError::FlightNotFound { flight_number } => CliError::NotFound {
                resource_type: "flight".into(),
                identifier: flight_number,
                list_command: "flights list".into(),
            },

            CoreError::Decode { message } => CliError::Decode { message },

            CoreError::Validation(e) => {
                let field = match &e {
                    ValidationError::MissingField { field } => field.to_string(),
                    ValidationError::InvalidDepartureTime { .. }
                    | ValidationError::DepartureInPast { .. } => "departure".into(),
                };
                CliError::Validation {
                    field,
                    reason: e.to_string(),
                }
            }

            CoreError::Api { status, message } => CliError::ApiError { status, message },

            CoreError::Config { message } => CliError::Validation {
                field: "api-url".into(),
                reason: message,
            },

            CoreError::InvalidState { message } => CliError::Internal { message },
        }
    }
}

#[cfg(test)]
mod tests {
    use flightdeck_core::DraftField;

    use super::*;

    #[test]
    fn missing_field_names_the_field() {
        let err: CliError = CoreError::from(ValidationError::MissingField {
            field: DraftField::AirportCode,
        })
        .into();
        assert_eq!(
            err.to_string(),
            "Invalid value for airport code: All fields are required."
        );
        assert_eq!(err.exit_code(), exit_code::USAGE);
    }

    #[test]
    fn not_found_and_conflict_exit_codes() {
        let missing: CliError = CoreError::FlightNotFound {
            flight_number: "ZZ999".into(),
        }
        .into();
        assert_eq!(missing.exit_code(), exit_code::NOT_FOUND);

        let conflict: CliError = CoreError::Api {
            status: 409,
            message: "duplicate".into(),
        }
        .into();
        assert_eq!(conflict.exit_code(), exit_code::CONFLICT);

        let server: CliError = CoreError::Api {
            status: 500,
            message: "boom".into(),
        }
        .into();
        assert_eq!(server.exit_code(), exit_code::GENERAL);
    }

    #[test]
    fn connection_failure_exit_code() {
        let err: CliError = CoreError::ConnectionFailed {
            url: "http://127.0.0.1:1/api/flights".into(),
            reason: "connection refused".into(),
        }
        .into();
        assert_eq!(err.exit_code(), exit_code::CONNECTION);
    }
}
