// src/config.rs
use std::{env, net::SocketAddr, time::Duration};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    database_max_connections: u32,
    listen_addr: SocketAddr,
    biscuit_private_key: String,
    token_ttl: Duration,
    news_count_on_home_page: u32,
    rate_limit_enabled: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

const DEFAULT_DATABASE_URL: &str = "sqlite://news_notes.db";
const DEFAULT_MAX_CONNECTIONS: u32 = 16;
const DEFAULT_TOKEN_TTL_SECS: u64 = 3600;
const DEFAULT_NEWS_COUNT_ON_HOME_PAGE: u32 = 10;

fn parse<T: std::str::FromStr>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("{key} has an invalid value: {value:?}"))),
    }
}

fn parse_flag(key: &'static str, raw: Option<String>, default: bool) -> Result<bool, ConfigError> {
    let Some(value) = raw else {
        return Ok(default);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid(format!("{key} must be a boolean, got {value:?}"))),
    }
}

impl AppConfig {
    /// Build configuration from the process environment (after loading `.env`).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        let database_max_connections = parse(
            "DATABASE_MAX_CONNECTIONS",
            lookup("DATABASE_MAX_CONNECTIONS"),
            DEFAULT_MAX_CONNECTIONS,
        )?;
        if database_max_connections == 0 {
            return Err(ConfigError::Invalid(
                "DATABASE_MAX_CONNECTIONS must be at least 1".into(),
            ));
        }

        let listen_addr = parse(
            "LISTEN_ADDR",
            lookup("LISTEN_ADDR"),
            SocketAddr::from(([127, 0, 0, 1], 8080)),
        )?;

        let biscuit_private_key = lookup("BISCUIT_ROOT_PRIVATE_KEY")
            .ok_or(ConfigError::Missing("BISCUIT_ROOT_PRIVATE_KEY"))?;
        if biscuit_private_key.len() != 64
            || !biscuit_private_key.chars().all(|c| c.is_ascii_hexdigit())
        {
            return Err(ConfigError::Invalid(
                "BISCUIT_ROOT_PRIVATE_KEY must be a 32-byte hex string".into(),
            ));
        }

        let token_ttl_secs = parse(
            "TOKEN_TTL_SECONDS",
            lookup("TOKEN_TTL_SECONDS"),
            DEFAULT_TOKEN_TTL_SECS,
        )?;
        let news_count_on_home_page = parse(
            "NEWS_COUNT_ON_HOME_PAGE",
            lookup("NEWS_COUNT_ON_HOME_PAGE"),
            DEFAULT_NEWS_COUNT_ON_HOME_PAGE,
        )?;
        let rate_limit_enabled =
            parse_flag("RATE_LIMIT_ENABLED", lookup("RATE_LIMIT_ENABLED"), true)?;

        Ok(Self {
            database_url,
            database_max_connections,
            listen_addr,
            biscuit_private_key,
            token_ttl: Duration::from_secs(token_ttl_secs),
            news_count_on_home_page,
            rate_limit_enabled,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub const fn database_max_connections(&self) -> u32 {
        self.database_max_connections
    }

    pub const fn listen_addr(&self) -> SocketAddr {
        self.listen_addr
    }

    pub fn biscuit_private_key(&self) -> &str {
        &self.biscuit_private_key
    }

    pub const fn token_ttl(&self) -> Duration {
        self.token_ttl
    }

    pub const fn news_count_on_home_page(&self) -> u32 {
        self.news_count_on_home_page
    }

    pub const fn rate_limit_enabled(&self) -> bool {
        self.rate_limit_enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const KEY: &str = "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";

    fn config(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_only_key_is_set() {
        let config = config(&[("BISCUIT_ROOT_PRIVATE_KEY", KEY)]).unwrap();
        assert_eq!(config.database_url(), DEFAULT_DATABASE_URL);
        assert_eq!(config.database_max_connections(), 16);
        assert_eq!(config.listen_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.token_ttl(), Duration::from_secs(3600));
        assert_eq!(config.news_count_on_home_page(), 10);
        assert!(config.rate_limit_enabled());
    }

    #[test]
    fn missing_key_is_reported() {
        assert!(matches!(
            config(&[]),
            Err(ConfigError::Missing("BISCUIT_ROOT_PRIVATE_KEY"))
        ));
    }

    #[test]
    fn malformed_values_are_rejected() {
        assert!(matches!(
            config(&[("BISCUIT_ROOT_PRIVATE_KEY", "abc")]),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            config(&[("BISCUIT_ROOT_PRIVATE_KEY", KEY), ("NEWS_COUNT_ON_HOME_PAGE", "ten")]),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            config(&[("BISCUIT_ROOT_PRIVATE_KEY", KEY), ("RATE_LIMIT_ENABLED", "maybe")]),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn overrides_are_read() {
        let config = config(&[
            ("BISCUIT_ROOT_PRIVATE_KEY", KEY),
            ("NEWS_COUNT_ON_HOME_PAGE", "5"),
            ("RATE_LIMIT_ENABLED", "false"),
            ("LISTEN_ADDR", "0.0.0.0:9000"),
        ])
        .unwrap();
        assert_eq!(config.news_count_on_home_page(), 5);
        assert!(!config.rate_limit_enabled());
        assert_eq!(config.listen_addr().port(), 9000);
    }
}
