use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

#[cfg(test)]
use mockall::automock;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Where configuration values are read from. The process environment in
/// production, a mock in tests.
#[cfg_attr(test, automock)]
pub trait EnvSource {
    fn var(&self, key: &str) -> Option<String>;
}

pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Runtime {
    Http,
    Lambda,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a valid IP address, got '{value}'")]
    InvalidHost { key: &'static str, value: String },
    #[error("{key} must be a port number between 0 and 65535, got '{value}'")]
    InvalidPort { key: &'static str, value: String },
    #[error("{key} must be HTTP or LAMBDA, got '{value}'")]
    InvalidRuntime { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub environment: String,
    pub host: IpAddr,
    pub port: u16,
    pub runtime: Runtime,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            environment: "development".to_string(),
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
            runtime: Runtime::Http,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(&ProcessEnv)
    }

    pub fn from_source(source: &impl EnvSource) -> Result<Self, ConfigError> {
        let environment = source
            .var("ENVIRONMENT")
            .unwrap_or_else(|| "development".to_string());

        let host = match source.var("HOST") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidHost { key: "HOST", value })?,
            None => DEFAULT_HOST,
        };

        let port = match source.var("PORT") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort { key: "PORT", value })?,
            None => DEFAULT_PORT,
        };

        let runtime = match source.var("RUNTIME") {
            Some(value) => {
                let normalized = value.trim().to_ascii_uppercase();
                match normalized.as_str() {
                    "HTTP" => Runtime::Http,
                    "LAMBDA" => Runtime::Lambda,
                    _ => return Err(ConfigError::InvalidRuntime { key: "RUNTIME", value }),
                }
            }
            None => Runtime::Http,
        };

        Ok(Config {
            environment,
            host,
            port,
            runtime,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
