use crate::constants::{defaults, env};
use crate::cors::Cors;
use crate::options::{CorsOptions, Preset, UnknownPreset, ValidationError};
use std::net::{IpAddr, SocketAddr};
use thiserror::Error;

/// Process settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub allow_origin: String,
    pub preset: Preset,
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT value '{value}': {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },
    #[error("invalid HOST value '{value}': {source}")]
    InvalidHost {
        value: String,
        source: std::net::AddrParseError,
    },
    #[error("invalid ALLOW_ORIGIN value '{value}': {source}")]
    AllowOrigin {
        value: String,
        source: ValidationError,
    },
    #[error("invalid CORS_PRESET: {0}")]
    Preset(#[from] UnknownPreset),
    #[error("invalid CORS options: {0}")]
    Cors(#[from] ValidationError),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            allow_origin: defaults::ALLOW_ORIGIN.to_string(),
            preset: Preset::default(),
            host: defaults::HOST.to_string(),
            port: defaults::PORT,
        }
    }
}

impl Config {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup(env::PORT) {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => defaults.port,
        };

        let preset = match lookup(env::CORS_PRESET) {
            Some(value) => value.parse()?,
            None => defaults.preset,
        };

        Ok(Self {
            allow_origin: lookup(env::ALLOW_ORIGIN).unwrap_or(defaults.allow_origin),
            preset,
            host: lookup(env::HOST).unwrap_or(defaults.host),
            port,
        })
    }

    pub fn cors_options(&self) -> CorsOptions {
        CorsOptions::preset(self.preset).with_allow_origin(self.allow_origin.clone())
    }

    pub fn cors(&self) -> Result<Cors, ConfigError> {
        Cors::new(self.cors_options()).map_err(|source| match source {
            ValidationError::EmptyAllowOrigin | ValidationError::InvalidAllowOrigin(_) => {
                ConfigError::AllowOrigin {
                    value: self.allow_origin.clone(),
                    source,
                }
            }
            other => ConfigError::Cors(other),
        })
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self
            .host
            .trim()
            .parse()
            .map_err(|source| ConfigError::InvalidHost {
                value: self.host.clone(),
                source,
            })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
