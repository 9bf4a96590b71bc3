use catalog::CatalogSources;
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DATABASE_PATH: &str = "games.sqlite3";
const DEFAULT_STATIC_DIR: &str = "static";
const DEFAULT_CATALOG_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
#[error("Invalid value '{value}' for {key}")]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub database_path: PathBuf,
    pub static_dir: PathBuf,
    pub catalog: CatalogSources,
    pub catalog_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            catalog: CatalogSources::default(),
            catalog_timeout: Duration::from_secs(DEFAULT_CATALOG_TIMEOUT_SECS),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        ServerConfig::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key/value source; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ServerConfig::default();

        if let Some(host) = lookup("HOST") {
            config.host = parse("HOST", host)?;
        }

        if let Some(port) = lookup("PORT") {
            config.port = parse("PORT", port)?;
        }

        if let Some(path) = lookup("DATABASE_PATH") {
            config.database_path = PathBuf::from(path);
        }

        if let Some(dir) = lookup("STATIC_DIR") {
            config.static_dir = PathBuf::from(dir);
        }

        if let Some(url) = lookup("ANDROID_CATALOG_URL") {
            config.catalog.android_url = url;
        }

        if let Some(url) = lookup("IOS_CATALOG_URL") {
            config.catalog.ios_url = url;
        }

        if let Some(secs) = lookup("CATALOG_TIMEOUT_SECS") {
            config.catalog_timeout = Duration::from_secs(parse("CATALOG_TIMEOUT_SECS", secs)?);
        }

        Ok(config)
    }

    pub fn address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse<T: FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError { key, value })
}
