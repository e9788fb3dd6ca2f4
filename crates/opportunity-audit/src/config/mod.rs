use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use secrecy::SecretString;
use url::Url;

pub const DEFAULT_RESEND_API_URL: &str = "https://api.resend.com";
pub const DEFAULT_FROM_ADDRESS: &str = "Sol8um AI Audit <onboarding@resend.dev>";
pub const DEFAULT_SUBMISSIONS_TABLE: &str = "audit_submissions";
pub const DEFAULT_BRAND_NAME: &str = "Sol8um";
pub const DEFAULT_LEAD_SOURCE: &str = "fro-jaipur-2026";
pub const DEFAULT_CONTACT_NUMBER: &str = "919468688354";
const DEFAULT_DELIVERY_TIMEOUT_SECS: u64 = 10;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub email: EmailConfig,
    pub storage: StorageConfig,
    pub campaign: CampaignConfig,
    pub delivery_timeout: Duration,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let log_format = LogFormat::parse(
            &env::var("APP_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string()),
        )?;

        let api_url = optional_var("RESEND_API_URL")
            .unwrap_or_else(|| DEFAULT_RESEND_API_URL.to_string());
        validate_url("RESEND_API_URL", &api_url)?;
        let email = EmailConfig {
            api_key: optional_var("RESEND_API_KEY").map(SecretString::new),
            api_url,
            from_address: optional_var("REPORT_FROM_ADDRESS")
                .unwrap_or_else(|| DEFAULT_FROM_ADDRESS.to_string()),
        };

        let storage_url = optional_var("SUPABASE_URL");
        if let Some(url) = &storage_url {
            validate_url("SUPABASE_URL", url)?;
        }
        let storage = StorageConfig {
            url: storage_url,
            anon_key: optional_var("SUPABASE_ANON_KEY").map(SecretString::new),
            table: optional_var("SUPABASE_TABLE")
                .unwrap_or_else(|| DEFAULT_SUBMISSIONS_TABLE.to_string()),
        };

        let campaign = CampaignConfig {
            brand_name: optional_var("AUDIT_BRAND_NAME")
                .unwrap_or_else(|| DEFAULT_BRAND_NAME.to_string()),
            lead_source: optional_var("AUDIT_LEAD_SOURCE")
                .unwrap_or_else(|| DEFAULT_LEAD_SOURCE.to_string()),
            contact_number: optional_var("AUDIT_CONTACT_WHATSAPP")
                .unwrap_or_else(|| DEFAULT_CONTACT_NUMBER.to_string()),
            public_url: optional_var("AUDIT_PUBLIC_URL"),
        };

        let timeout_secs = match optional_var("DELIVERY_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidTimeout)?,
            None => DEFAULT_DELIVERY_TIMEOUT_SECS,
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig {
                log_level,
                format: log_format,
            },
            email,
            storage,
            campaign,
            delivery_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn optional_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn validate_url(var: &'static str, value: &str) -> Result<(), ConfigError> {
    Url::parse(value)
        .map(|_| ())
        .map_err(|source| ConfigError::InvalidUrl { var, source })
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" | "" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::InvalidLogFormat(other.to_string())),
        }
    }
}

/// Tracing and metrics controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub format: LogFormat,
}

/// Resend credentials and sender identity.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    pub api_key: Option<SecretString>,
    pub api_url: String,
    pub from_address: String,
}

/// Supabase REST endpoint for submission rows.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub url: Option<String>,
    pub anon_key: Option<SecretString>,
    pub table: String,
}

/// Branding and lead attribution for the running campaign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignConfig {
    pub brand_name: String,
    pub lead_source: String,
    pub contact_number: String,
    pub public_url: Option<String>,
}

impl Default for CampaignConfig {
    fn default() -> Self {
        Self {
            brand_name: DEFAULT_BRAND_NAME.to_string(),
            lead_source: DEFAULT_LEAD_SOURCE.to_string(),
            contact_number: DEFAULT_CONTACT_NUMBER.to_string(),
            public_url: None,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidLogFormat(String),
    InvalidTimeout,
    InvalidUrl {
        var: &'static str,
        source: url::ParseError,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidLogFormat(value) => {
                write!(f, "APP_LOG_FORMAT must be 'compact' or 'json', got '{value}'")
            }
            ConfigError::InvalidTimeout => {
                write!(f, "DELIVERY_TIMEOUT_SECS must be a positive integer")
            }
            ConfigError::InvalidUrl { var, .. } => write!(f, "{var} must be an absolute URL"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidUrl { source, .. } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidLogFormat(_)
            | ConfigError::InvalidTimeout => None,
        }
    }
}
