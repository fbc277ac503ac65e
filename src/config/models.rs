use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs::File, io::Read, path::Path};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Config {
    #[validate(url(message = "Infoblox URL must be a valid URL"))]
    pub url: String,

    #[validate(length(min = 1, message = "WAPI version cannot be empty"))]
    pub version: String,

    #[validate(length(min = 1, message = "Username cannot be empty"))]
    pub username: String,

    pub password: String,

    /// Skip TLS certificate verification.
    #[serde(default)]
    pub insecure: bool,

    /// Log every request and response.
    #[serde(default)]
    pub debug: bool,
}

impl Config {
    pub fn load(config_file: impl AsRef<Path>) -> Result<Self> {
        let config_file = config_file.as_ref();
        let mut file = File::open(config_file)
            .with_context(|| format!("Failed to open config file: {}", config_file.display()))?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .with_context(|| format!("Failed to read config file: {}", config_file.display()))?;

        let config: Config = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", config_file.display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", config_file.display()))?;

        Ok(config)
    }
}
