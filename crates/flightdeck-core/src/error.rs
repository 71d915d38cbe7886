// ── Core error types ──
//
// User-facing errors from flightdeck-core. Consumers never see reqwest
// errors or JSON parse failures directly: the `From<flightdeck_api::Error>`
// impl translates transport-layer errors into domain-appropriate variants.

use thiserror::Error;

use crate::model::ValidationError;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot connect to flights service at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    // ── Data errors ──────────────────────────────────────────────────
    #[error("Flight not found: {flight_number}")]
    FlightNotFound { flight_number: String },

    #[error("Unexpected data from flights service: {message}")]
    Decode { message: String },

    // ── Operation errors ─────────────────────────────────────────────
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Operation not allowed: {message}")]
    InvalidState { message: String },

    // ── API errors (wrapped, not exposed raw) ────────────────────────
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl CoreError {
    /// HTTP status of the failed request, if the service answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::FlightNotFound { .. } => Some(404),
            _ => None,
        }
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<flightdeck_api::Error> for CoreError {
    fn from(err: flightdeck_api::Error) -> Self {
        match err {
            flightdeck_api::Error::Transport(ref e) => {
                if let Some(status) = e.status() {
                    CoreError::Api {
                        status: status.as_u16(),
                        message: e.to_string(),
                    }
                } else {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map_or_else(|| "<unknown>".into(), ToString::to_string),
                        reason: e.to_string(),
                    }
                }
            }
            flightdeck_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            flightdeck_api::Error::InvalidBaseUrl { url } => CoreError::Config {
                message: format!("API URL cannot be used as a base for endpoint paths: {url}"),
            },
            flightdeck_api::Error::Tls(msg) => CoreError::ConnectionFailed {
                url: String::new(),
                reason: format!("TLS error: {msg}"),
            },
            flightdeck_api::Error::Http { status, message } => CoreError::Api { status, message },
            flightdeck_api::Error::Deserialization { message, body: _ } => {
                CoreError::Decode { message }
            }
        }
    }
}
