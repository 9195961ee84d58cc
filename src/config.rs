//! Command-line and environment configuration for both binaries.
//!
//! Every option is a `--kebab-case` flag with an environment fallback, so a
//! deployment can be configured entirely through the environment.

use crate::auth::adapters::entra::EntraConfig;
use clap::Parser;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Default redirect URI registered for local development.
pub const DEFAULT_REDIRECT_URI: &str = "http://localhost:8000/callback";
/// Default Microsoft Graph base endpoint.
pub const DEFAULT_GRAPH_API_ENDPOINT: &str = "https://graph.microsoft.com/v1.0";
/// Default delegated scopes.
pub const DEFAULT_SCOPES: &str = "User.Read Mail.Read Mail.Send Calendars.ReadWrite Files.ReadWrite";
/// Default Entra ID authority host.
pub const DEFAULT_AUTHORITY_HOST: &str = "https://login.microsoftonline.com";

/// Errors raised while validating configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required value is blank.
    #[error("{0} must not be empty")]
    Blank(&'static str),

    /// The session lifetime is zero.
    #[error("session TTL must be greater than zero")]
    ZeroSessionTtl,

    /// A URL option does not use HTTP(S).
    #[error("{name} must be an http(s) URL, got {value}")]
    NotHttp {
        /// Option name.
        name: &'static str,
        /// Offending value.
        value: String,
    },

    /// A CORS origin is not a valid origin.
    #[error("invalid CORS origin: {0}")]
    InvalidCorsOrigin(String),
}

/// Graph proxy server settings.
#[derive(Debug, Clone, Parser)]
#[command(name = "graphdesk", version, about = "Microsoft Graph proxy with OAuth login")]
pub struct Settings {
    /// Application (client) id registered in Entra ID.
    #[arg(long, env = "CLIENT_ID")]
    pub client_id: String,

    /// Client secret for the application.
    #[arg(long, env = "CLIENT_SECRET", hide_env_values = true)]
    pub client_secret: String,

    /// Directory (tenant) id.
    #[arg(long, env = "TENANT_ID")]
    pub tenant_id: String,

    /// OAuth redirect URI; must point at this server's `/callback`.
    #[arg(long, env = "REDIRECT_URI", default_value = DEFAULT_REDIRECT_URI)]
    pub redirect_uri: Url,

    /// Microsoft Graph base endpoint.
    #[arg(long, env = "GRAPH_API_ENDPOINT", default_value = DEFAULT_GRAPH_API_ENDPOINT)]
    pub graph_api_endpoint: Url,

    /// Space-separated delegated scopes.
    #[arg(long, env = "SCOPES", default_value = DEFAULT_SCOPES)]
    pub scopes: String,

    /// Entra ID authority host.
    #[arg(long, env = "AUTHORITY_HOST", default_value = DEFAULT_AUTHORITY_HOST)]
    pub authority_host: Url,

    /// Comma-separated origins allowed by CORS.
    #[arg(long, env = "BACKEND_CORS_ORIGINS", value_delimiter = ',')]
    pub backend_cors_origins: Vec<String>,

    /// Address to bind.
    #[arg(long, env = "GRAPHDESK_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to bind.
    #[arg(long, env = "GRAPHDESK_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Session lifetime in seconds.
    #[arg(long, env = "SESSION_TTL_SECS", default_value_t = 3600)]
    pub session_ttl_secs: u64,

    /// Emit logs as JSON lines.
    #[arg(long, env = "LOG_JSON")]
    pub log_json: bool,
}

impl Settings {
    /// Checks values clap cannot check on its own.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("CLIENT_ID", &self.client_id),
            ("CLIENT_SECRET", &self.client_secret),
            ("TENANT_ID", &self.tenant_id),
            ("SCOPES", &self.scopes),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Blank(name));
            }
        }
        if self.session_ttl_secs == 0 {
            return Err(ConfigError::ZeroSessionTtl);
        }
        for (name, url) in [
            ("REDIRECT_URI", &self.redirect_uri),
            ("GRAPH_API_ENDPOINT", &self.graph_api_endpoint),
            ("AUTHORITY_HOST", &self.authority_host),
        ] {
            require_http(name, url)?;
        }
        self.cors_origins().map(|_| ())
    }

    /// Returns the configured scopes.
    #[must_use]
    pub fn scope_list(&self) -> Vec<String> {
        self.scopes.split_whitespace().map(str::to_owned).collect()
    }

    /// Returns the normalised CORS origins, skipping blank entries.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidCorsOrigin`] for values that are not
    /// http(s) origins.
    pub fn cors_origins(&self) -> Result<Vec<String>, ConfigError> {
        self.backend_cors_origins
            .iter()
            .map(|origin| origin.trim())
            .filter(|origin| !origin.is_empty())
            .map(|origin| {
                Url::parse(origin)
                    .ok()
                    .filter(|url| matches!(url.scheme(), "http" | "https"))
                    .map(|url| url.origin().ascii_serialization())
                    .ok_or_else(|| ConfigError::InvalidCorsOrigin(origin.to_owned()))
            })
            .collect()
    }

    /// Returns the session lifetime.
    #[must_use]
    pub const fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_secs)
    }

    /// Returns the socket address to bind.
    #[must_use]
    pub const fn bind_address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Returns the Entra ID client registration.
    #[must_use]
    pub fn entra_config(&self) -> EntraConfig {
        EntraConfig {
            client_id: self.client_id.clone(),
            client_secret: self.client_secret.clone(),
            tenant_id: self.tenant_id.clone(),
            redirect_uri: self.redirect_uri.clone(),
            authority_host: self.authority_host.clone(),
            scopes: self.scope_list(),
        }
    }
}

fn require_http(name: &'static str, url: &Url) -> Result<(), ConfigError> {
    if matches!(url.scheme(), "http" | "https") {
        Ok(())
    } else {
        Err(ConfigError::NotHttp {
            name,
            value: url.to_string(),
        })
    }
}

/// Health-check CLI arguments.
#[derive(Debug, Clone, Parser)]
#[command(name = "tool_health", version, about = "Probe tool targets once and report")]
pub struct HealthCheckArgs {
    /// JSON-RPC endpoint of the code-hosting target; the mock is used when
    /// absent.
    #[arg(long, env = "GITHUB_TOOL_ENDPOINT")]
    pub github_endpoint: Option<Url>,

    /// JSON-RPC endpoint of the test-orchestration target; the mock is used
    /// when absent.
    #[arg(long, env = "TESTSPRITE_TOOL_ENDPOINT")]
    pub testsprite_endpoint: Option<Url>,

    /// Backoff unit between retries, in milliseconds.
    #[arg(long, env = "TOOL_BACKOFF_MS", default_value_t = 1000)]
    pub backoff_ms: u64,

    /// Latency above which a target is reported as slow, in milliseconds.
    #[arg(long, env = "HIGH_LATENCY_MS", default_value_t = 2000)]
    pub high_latency_ms: u64,

    /// Emit logs as JSON lines.
    #[arg(long, env = "LOG_JSON")]
    pub log_json: bool,
}

impl HealthCheckArgs {
    /// Returns the backoff unit.
    #[must_use]
    pub const fn backoff_unit(&self) -> Duration {
        Duration::from_millis(self.backoff_ms)
    }

    /// Returns the slow-response threshold.
    #[must_use]
    pub const fn high_latency(&self) -> Duration {
        Duration::from_millis(self.high_latency_ms)
    }
}
