use std::env;
use std::fmt;
use std::time::Duration;

/// Base URL of the remote model server.
///
/// Validated once at startup; the original string is kept as-is so endpoint
/// paths are appended by plain concatenation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModelServerUrl(String);

impl ModelServerUrl {
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Err(ConfigError::MissingModelServerUrl);
        }

        let url = reqwest::Url::parse(raw)
            .map_err(|e| ConfigError::InvalidModelServerUrl(format!("{}: {}", raw, e)))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::InvalidModelServerUrl(format!(
                "{}: unsupported scheme '{}'",
                raw,
                url.scheme()
            )));
        }

        if url.host_str().is_none() {
            return Err(ConfigError::InvalidModelServerUrl(format!(
                "{}: missing host",
                raw
            )));
        }

        Ok(Self(raw.to_string()))
    }

    /// Appends `path` to the base URL without any normalization.
    pub fn join(&self, path: &str) -> String {
        format!("{}{}", self.0, path)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModelServerUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub model_server_url: ModelServerUrl,
    pub model_server_timeout: Duration,
    pub max_upload_bytes: usize,
    pub otel_exporter_endpoint: Option<String>,
    pub service_name: String,
    pub metrics_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://modelapi.db?mode=rwc".to_string());

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        let model_server_url = env::var("MODEL_SERVER_URL")
            .map_err(|_| ConfigError::MissingModelServerUrl)
            .and_then(|raw| ModelServerUrl::parse(&raw))?;

        let model_server_timeout = Duration::from_secs(parse_number(
            "MODEL_SERVER_TIMEOUT_SECS",
            env::var("MODEL_SERVER_TIMEOUT_SECS").ok(),
            60,
        )?);

        let max_upload_bytes = parse_number(
            "MAX_UPLOAD_BYTES",
            env::var("MAX_UPLOAD_BYTES").ok(),
            10 * 1024 * 1024,
        )?;

        let otel_exporter_endpoint = env::var("OTEL_EXPORTER_OTLP_ENDPOINT").ok();

        let service_name = env::var("SERVICE_NAME").unwrap_or_else(|_| "modelapi".to_string());

        let metrics_port = env::var("METRICS_PORT")
            .unwrap_or_else(|_| "9000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        Ok(Config {
            database_url,
            server_host,
            server_port,
            model_server_url,
            model_server_timeout,
            max_upload_bytes,
            otel_exporter_endpoint,
            service_name,
            metrics_port,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_number<T: std::str::FromStr>(
    name: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber(name, value)),
        None => Ok(default),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("MODEL_SERVER_URL environment variable not set")]
    MissingModelServerUrl,

    #[error("Invalid MODEL_SERVER_URL: {0}")]
    InvalidModelServerUrl(String),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid value for {0}: '{1}'")]
    InvalidNumber(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_server_url_accepts_http_and_https() {
        assert!(ModelServerUrl::parse("http://localhost:8000").is_ok());
        assert!(ModelServerUrl::parse("https://models.internal").is_ok());
    }

    #[test]
    fn test_model_server_url_rejects_empty() {
        assert!(matches!(
            ModelServerUrl::parse(""),
            Err(ConfigError::MissingModelServerUrl)
        ));
        assert!(matches!(
            ModelServerUrl::parse("   "),
            Err(ConfigError::MissingModelServerUrl)
        ));
    }

    #[test]
    fn test_model_server_url_rejects_malformed() {
        assert!(matches!(
            ModelServerUrl::parse("not a url"),
            Err(ConfigError::InvalidModelServerUrl(_))
        ));
        assert!(matches!(
            ModelServerUrl::parse("ftp://models.internal"),
            Err(ConfigError::InvalidModelServerUrl(_))
        ));
    }

    #[test]
    fn test_join_is_plain_concatenation() {
        let base = ModelServerUrl::parse("http://localhost:8000").unwrap();
        assert_eq!(
            base.join("/model/transfer/"),
            "http://localhost:8000/model/transfer/"
        );

        // No trailing-slash normalization
        let base = ModelServerUrl::parse("http://localhost:8000/").unwrap();
        assert_eq!(
            base.join("/model/transfer/"),
            "http://localhost:8000//model/transfer/"
        );
    }

    #[test]
    fn test_parse_number_uses_default_when_unset() {
        assert_eq!(parse_number("X", None, 60u64).unwrap(), 60);
        assert_eq!(parse_number("X", Some("15".to_string()), 60u64).unwrap(), 15);
        assert!(matches!(
            parse_number::<u64>("X", Some("abc".to_string()), 60),
            Err(ConfigError::InvalidNumber("X", _))
        ));
    }
}
