//! Server configuration.

use std::net::{IpAddr, SocketAddr};

use serde::{Deserialize, Serialize};

/// Configuration file read when no path is given on the command line.
pub const DEFAULT_CONFIG_PATH: &str = "config/mortgage.toml";

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Interest rate CSV, loaded once at startup
    #[serde(default = "default_rates_file")]
    pub rates_file: String,

    /// Shared secret expected in `Authorization: Bearer <token>`
    pub api_token: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_rates_file() -> String {
    "config/mortgage-rates.csv".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            rates_file: default_rates_file(),
            api_token: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &str) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, std::io::Error> {
        toml::from_str(content).map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    /// Apply overrides taken from the environment.
    ///
    /// `None` leaves the configured value in place.
    pub fn with_overrides(mut self, api_token: Option<String>, rates_file: Option<String>) -> Self {
        if let Some(token) = api_token {
            self.api_token = Some(token);
        }
        if let Some(path) = rates_file {
            self.rates_file = path;
        }
        self
    }

    /// Address to listen on.
    ///
    /// `host` must be an IP address; a hostname or typo is an error rather
    /// than a silent bind to every interface.
    pub fn socket_addr(&self) -> Result<SocketAddr, std::io::Error> {
        let ip: IpAddr = self.host.parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid host '{}': {e}", self.host),
            )
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// The configured API token, if it is set and non-empty.
    pub fn api_token(&self) -> Option<&str> {
        self.api_token.as_deref().filter(|token| !token.is_empty())
    }
}
