//! Preview server configuration parsed from environment variables.

use std::path::PathBuf;

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SITE_DIR: &str = "site";
pub const DEFAULT_PKG_SUBDIR: &str = "pkg";

/// Errors produced while reading server configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT '{0}': expected an integer in 1..=65535")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub site_dir: PathBuf,
    pub pkg_dir: PathBuf,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SITE_DIR`: static page root, default `site`
    /// - `PKG_DIR`: compiled WASM package, default `<SITE_DIR>/pkg`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            std::env::var("PORT").ok().as_deref(),
            std::env::var("SITE_DIR").ok().as_deref(),
            std::env::var("PKG_DIR").ok().as_deref(),
        )
    }

    fn from_values(port: Option<&str>, site_dir: Option<&str>, pkg_dir: Option<&str>) -> Result<Self, ConfigError> {
        let port = parse_port(port)?;
        let site_dir = site_dir
            .filter(|raw| !raw.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_SITE_DIR), PathBuf::from);
        let pkg_dir = pkg_dir
            .filter(|raw| !raw.trim().is_empty())
            .map_or_else(|| site_dir.join(DEFAULT_PKG_SUBDIR), PathBuf::from);
        Ok(Self { port, site_dir, pkg_dir })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Ok(DEFAULT_PORT);
    };
    match raw.parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(ConfigError::InvalidPort(raw.to_owned())),
    }
}
