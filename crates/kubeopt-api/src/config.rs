//! Environment-driven configuration.

use std::env;
use std::fmt::Display;
use std::str::FromStr;

use kubeopt_intake::DownloadSettings;

/// Server configuration, loaded from `KUBEOPT_*` environment variables
/// with logged defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Bind host
    pub host: String,
    /// Bind port
    pub port: u16,
    /// SQLite database URL
    pub database_url: String,
    /// Deployment environment label, reported by `/health`
    pub environment: String,
    /// Where contact notifications would be sent
    pub admin_email: String,
    /// Published image coordinates for the download acknowledgment
    pub download: DownloadSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5050,
            database_url: "sqlite:database/kubeopt.db".to_string(),
            environment: "development".to_string(),
            admin_email: "admin@kubeopt.com".to_string(),
            download: DownloadSettings::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from the environment, falling back to the
    /// defaults above for anything unset or unparseable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let download = DownloadSettings {
            registry: env_or("KUBEOPT_DOCKER_REGISTRY", &defaults.download.registry),
            image: env_or("KUBEOPT_DOCKER_IMAGE", &defaults.download.image),
            tag: env_or("KUBEOPT_DOCKER_TAG", &defaults.download.tag),
        };
        Self {
            host: env_or("KUBEOPT_HOST", &defaults.host),
            port: env_parse_or("KUBEOPT_PORT", defaults.port),
            database_url: env_or("KUBEOPT_DATABASE_URL", &defaults.database_url),
            environment: env_or("KUBEOPT_ENV", &defaults.environment),
            admin_email: env_or("KUBEOPT_ADMIN_EMAIL", &defaults.admin_email),
            download,
        }
    }

    /// `host:port` string for the TCP listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn env_or(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(value) if !value.is_empty() => value,
        _ => default.to_string(),
    }
}

fn env_parse_or<T>(key: &str, default: T) -> T
where
    T: FromStr + Display + Copy,
    T::Err: Display,
{
    match env::var(key) {
        Ok(value) if !value.is_empty() => value.parse().unwrap_or_else(|e| {
            tracing::warn!("invalid {key} value ({e}), using default {default}");
            default
        }),
        _ => default,
    }
}
