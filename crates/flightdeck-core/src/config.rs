// ── Runtime connection configuration ──
//
// Describes *how* to reach the flights service. Never touches disk: the
// CLI builds a `ClientConfig` (usually via `flightdeck-config`) and hands
// it in.

use url::Url;

use flightdeck_api::{TlsMode, TransportConfig};

/// Default API root when nothing is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(std::path::PathBuf),
    /// Skip verification (self-signed reverse proxy).
    DangerAcceptInvalid,
}

/// Configuration for talking to one flights service.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root; `/flights` is appended to it.
    pub api_url: Url,
    /// TLS verification strategy.
    pub tls: TlsVerification,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: Url::parse(DEFAULT_API_URL).expect("default API URL is valid"),
            tls: TlsVerification::default(),
        }
    }
}

impl ClientConfig {
    pub fn new(api_url: Url) -> Self {
        Self {
            api_url,
            tls: TlsVerification::default(),
        }
    }

    /// Transport settings for `flightdeck_api`.
    pub(crate) fn transport(&self) -> TransportConfig {
        TransportConfig {
            tls: match &self.tls {
                TlsVerification::SystemDefaults => TlsMode::System,
                TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
                TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
            },
            ..TransportConfig::default()
        }
    }
}
