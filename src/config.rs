//! Layered configuration for the site binaries.
//!
//! Sources, highest priority first:
//! 1. Environment variables (`PORTFOLIO_*`, `__` separates nesting,
//!    e.g. `PORTFOLIO_SERVER__PORT=8080`)
//! 2. `portfolio.toml` in the working directory
//! 3. Built-in defaults
//!
//! Command-line flags are applied on top by the binaries.

use crate::error::SiteError;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const CONFIG_FILE: &str = "portfolio.toml";
pub const ENV_PREFIX: &str = "PORTFOLIO_";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub server: ServerConfig,

    /// Where `render` writes `index.html`
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Fallback filter when `PORTFOLIO_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("dist")
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            output_dir: default_output_dir(),
            log_level: default_log_level(),
        }
    }
}

impl SiteConfig {
    /// Load from all sources and validate.
    pub fn load() -> Result<Self, SiteError> {
        let config: SiteConfig = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn validate(&self) -> Result<(), SiteError> {
        if self.server.port == 0 {
            return Err(SiteError::InvalidConfig {
                field: "server.port".to_string(),
                reason: "port must be non-zero".to_string(),
            });
        }
        if self.server.host.trim().is_empty() {
            return Err(SiteError::InvalidConfig {
                field: "server.host".to_string(),
                reason: "host must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_are_correct() {
        let config = SiteConfig::default();
        assert_eq!(config.server.bind_addr(), "0.0.0.0:3000");
        assert_eq!(config.output_dir, PathBuf::from("dist"));
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn figment_builds_without_files() {
        Jail::expect_with(|_jail| {
            let config = SiteConfig::load().expect("should extract defaults");
            assert_eq!(config, SiteConfig::default());
            Ok(())
        });
    }

    #[test]
    fn toml_then_env_override() {
        Jail::expect_with(|jail| {
            jail.create_file(
                CONFIG_FILE,
                r#"
                output_dir = "public"
                [server]
                port = 8080
                "#,
            )?;
            jail.set_env("PORTFOLIO_SERVER__HOST", "127.0.0.1");
            jail.set_env("PORTFOLIO_LOG_LEVEL", "debug");

            let config = SiteConfig::load().expect("should load layered config");
            assert_eq!(config.server.bind_addr(), "127.0.0.1:8080");
            assert_eq!(config.output_dir, PathBuf::from("public"));
            assert_eq!(config.log_level, "debug");
            Ok(())
        });
    }

    #[test]
    fn zero_port_rejected() {
        Jail::expect_with(|jail| {
            jail.set_env("PORTFOLIO_SERVER__PORT", "0");

            let err = SiteConfig::load().unwrap_err();
            assert!(matches!(err, SiteError::InvalidConfig { ref field, .. } if field == "server.port"));
            Ok(())
        });
    }
}
