//! Application configuration loaded from environment variables.

use crate::services::calculator::DEFAULT_ELECTRICITY_FACTOR;
use std::env;
use std::str::FromStr;

/// Which activity store backs the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Firestore,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "firestore" => Ok(StoreBackend::Firestore),
            "memory" => Ok(StoreBackend::Memory),
            _ => Err(ConfigError::Invalid {
                name: "STORE_BACKEND",
                value: s.to_string(),
            }),
        }
    }
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// GCP project ID
    pub gcp_project_id: String,
    /// Server port
    pub port: u16,
    pub store_backend: StoreBackend,
    /// kg CO2e per kWh when a request doesn't supply its own factor
    pub default_electricity_factor: f64,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            frontend_url: "http://localhost:3000".to_string(),
            gcp_project_id: "test-project".to_string(),
            port: 8080,
            store_backend: StoreBackend::Memory,
            default_electricity_factor: DEFAULT_ELECTRICITY_FACTOR,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            gcp_project_id: env::var("GCP_PROJECT_ID").unwrap_or_else(|_| "local-dev".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            store_backend: env::var("STORE_BACKEND")
                .map(|v| v.parse())
                .unwrap_or(Ok(StoreBackend::Firestore))?,
            default_electricity_factor: parse_electricity_factor(
                env::var("DEFAULT_ELECTRICITY_FACTOR").ok().as_deref(),
            )?,
        })
    }
}

/// Parse the electricity factor, falling back to the built-in default.
fn parse_electricity_factor(raw: Option<&str>) -> Result<f64, ConfigError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_ELECTRICITY_FACTOR);
    };

    match raw.trim().parse::<f64>() {
        Ok(factor) if factor.is_finite() && factor >= 0.0 => Ok(factor),
        _ => Err(ConfigError::Invalid {
            name: "DEFAULT_ELECTRICITY_FACTOR",
            value: raw.to_string(),
        }),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_electricity_factor_parsing() {
        assert_eq!(parse_electricity_factor(None).unwrap(), 0.475);
        assert_eq!(parse_electricity_factor(Some(" 0.233 ")).unwrap(), 0.233);
        assert!(parse_electricity_factor(Some("abc")).is_err());
        assert!(parse_electricity_factor(Some("-0.1")).is_err());
        assert!(parse_electricity_factor(Some("NaN")).is_err());
    }

    #[test]
    fn test_store_backend_parsing() {
        assert_eq!("Memory".parse::<StoreBackend>().unwrap(), StoreBackend::Memory);
        assert_eq!(
            "firestore".parse::<StoreBackend>().unwrap(),
            StoreBackend::Firestore
        );
        assert!("postgres".parse::<StoreBackend>().is_err());
    }
}
