//! Service configuration, read from the environment

use std::str::FromStr;

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_BASE_PATH: &str = "/api";

/// Errors raised while reading configuration
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a port number, got '{value}'")]
    InvalidPort { name: &'static str, value: String },

    #[error("{name} must be true or false, got '{value}'")]
    InvalidFlag { name: &'static str, value: String },

    #[error("{name} must be 'text' or 'json', got '{value}'")]
    InvalidLogFormat { name: &'static str, value: String },
}

/// Output format of the log subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "pretty" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(()),
        }
    }
}

/// Runtime configuration of the API service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    /// Prefix of every employee route, normalized to `/a/b` form, or empty for the root
    pub base_path: String,
    /// Whether listing an empty store is reported as `404 no employees found`
    pub empty_list_is_error: bool,
    pub log_format: LogFormat,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            base_path: DEFAULT_BASE_PATH.to_string(),
            empty_list_is_error: true,
            log_format: LogFormat::Text,
        }
    }
}

impl ApiConfig {
    /// Read configuration from process environment variables
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `ROLLCALL_HOST` | `0.0.0.0` |
    /// | `ROLLCALL_PORT` | `8080` |
    /// | `ROLLCALL_BASE_PATH` | `/api` |
    /// | `ROLLCALL_EMPTY_LIST_IS_ERROR` | `true` |
    /// | `LOG_FORMAT` | `text` |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("ROLLCALL_HOST").unwrap_or(defaults.host);

        let port = match lookup("ROLLCALL_PORT") {
            Some(value) => value.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort {
                name: "ROLLCALL_PORT",
                value,
            })?,
            None => defaults.port,
        };

        let base_path = lookup("ROLLCALL_BASE_PATH")
            .map(|value| normalize_base_path(&value))
            .unwrap_or(defaults.base_path);

        let empty_list_is_error = match lookup("ROLLCALL_EMPTY_LIST_IS_ERROR") {
            Some(value) => parse_flag(&value).ok_or(ConfigError::InvalidFlag {
                name: "ROLLCALL_EMPTY_LIST_IS_ERROR",
                value,
            })?,
            None => defaults.empty_list_is_error,
        };

        let log_format = match lookup("LOG_FORMAT") {
            Some(value) => value
                .parse::<LogFormat>()
                .map_err(|_| ConfigError::InvalidLogFormat {
                    name: "LOG_FORMAT",
                    value,
                })?,
            None => defaults.log_format,
        };

        Ok(Self {
            host,
            port,
            base_path,
            empty_list_is_error,
            log_format,
        })
    }

    /// Address the HTTP listener binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// `api/v1/` -> `/api/v1`, `/` -> ``
fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}
