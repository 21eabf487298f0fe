use serde::{Deserialize, Serialize};
use std::path::Path;

use super::database::DatabaseConfig;
use super::dns::DnsConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::pipeline::PipelineConfig;

const LOCAL_CONFIG_PATH: &str = "ferrous-census.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/ferrous-census/config.toml";

/// Main configuration structure for Ferrous Census
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Worker pools, queue sizes and the domain list
    #[serde(default)]
    pub pipeline: PipelineConfig,

    /// Upstream resolver settings
    #[serde(default)]
    pub dns: DnsConfig,

    /// Record sink connection
    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-census.toml in current directory
    /// 3. /etc/ferrous-census/config.toml
    /// 4. Default configuration
    ///
    /// Command-line overrides are applied on top of whichever was found.
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path.map(str::to_string).or_else(Self::get_config_path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(n) = overrides.resolution_workers {
            self.pipeline.resolution_workers = n;
        }
        if let Some(n) = overrides.persistence_workers {
            self.pipeline.persistence_workers = n;
        }
        if let Some(file) = overrides.domains_file {
            self.pipeline.domains_file = file;
        }
        if let Some(resolver) = overrides.dns_resolver {
            self.dns.resolver = resolver;
        }
        if let Some(host) = overrides.db_host {
            self.database.host = host;
        }
        if let Some(user) = overrides.db_user {
            self.database.user = user;
        }
        if let Some(password) = overrides.db_password {
            self.database.password = password;
        }
        if let Some(name) = overrides.db_name {
            self.database.name = name;
        }
        if let Some(url) = overrides.database_url {
            self.database.url = Some(url);
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pipeline.resolution_workers == 0 {
            return Err(ConfigError::Validation(
                "At least one resolution worker is required".to_string(),
            ));
        }
        if self.pipeline.persistence_workers == 0 {
            return Err(ConfigError::Validation(
                "At least one persistence worker is required".to_string(),
            ));
        }
        if self.pipeline.input_queue_capacity == 0 || self.pipeline.output_queue_capacity == 0 {
            return Err(ConfigError::Validation(
                "Queue capacities must be greater than 0".to_string(),
            ));
        }
        if self.pipeline.domains_file.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Domains file path cannot be empty".to_string(),
            ));
        }
        if self.dns.query_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "DNS query timeout cannot be 0".to_string(),
            ));
        }
        self.dns.resolver_addr()?;
        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|p| Path::new(p).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub resolution_workers: Option<usize>,
    pub persistence_workers: Option<usize>,
    pub domains_file: Option<String>,
    pub dns_resolver: Option<String>,
    pub db_host: Option<String>,
    pub db_user: Option<String>,
    pub db_password: Option<String>,
    pub db_name: Option<String>,
    pub database_url: Option<String>,
    pub log_level: Option<String>,
}
