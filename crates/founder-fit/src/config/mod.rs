use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

const DEFAULT_ASSESSOR_MODEL: &str = "claude-sonnet-4-6";
const DEFAULT_ASSESSOR_BASE_URL: &str = "https://api.anthropic.com";
const DEFAULT_ASSESSOR_MAX_TOKENS: u32 = 2048;
const DEFAULT_ASSESSOR_TIMEOUT_SECS: u64 = 60;

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
    pub assessor: AssessorConfig,
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

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            assessor: AssessorConfig::from_env()?,
        })
    }
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

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Connection settings for the external qualitative assessor.
#[derive(Clone)]
pub struct AssessorConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub max_tokens: u32,
    pub timeout: Duration,
}

impl AssessorConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("ANTHROPIC_API_KEY").ok();
        let model =
            env::var("ASSESSOR_MODEL").unwrap_or_else(|_| DEFAULT_ASSESSOR_MODEL.to_string());
        let base_url =
            env::var("ASSESSOR_BASE_URL").unwrap_or_else(|_| DEFAULT_ASSESSOR_BASE_URL.to_string());
        let max_tokens = parse_var("ASSESSOR_MAX_TOKENS", DEFAULT_ASSESSOR_MAX_TOKENS)?;
        let timeout_secs = parse_var("ASSESSOR_TIMEOUT_SECS", DEFAULT_ASSESSOR_TIMEOUT_SECS)?;

        Ok(Self {
            api_key,
            model,
            base_url,
            max_tokens,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Returns the credential, failing before any assessor call can be attempted.
    pub fn api_key(&self) -> Result<&str, ConfigError> {
        match self.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(ConfigError::MissingAssessorKey),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/v1/messages", self.base_url.trim_end_matches('/'))
    }
}

impl Default for AssessorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_ASSESSOR_MODEL.to_string(),
            base_url: DEFAULT_ASSESSOR_BASE_URL.to_string(),
            max_tokens: DEFAULT_ASSESSOR_MAX_TOKENS,
            timeout: Duration::from_secs(DEFAULT_ASSESSOR_TIMEOUT_SECS),
        }
    }
}

impl fmt::Debug for AssessorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssessorConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("max_tokens", &self.max_tokens)
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn parse_var<T: std::str::FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidNumber { key }),
        Err(_) => Ok(default),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidNumber { key: &'static str },
    MissingAssessorKey,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidNumber { key } => write!(f, "{key} must be a positive integer"),
            ConfigError::MissingAssessorKey => {
                write!(f, "ANTHROPIC_API_KEY is required to run qualitative assessments")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidNumber { .. }
            | ConfigError::MissingAssessorKey => None,
        }
    }
}
