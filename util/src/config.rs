//! Seeder configuration.
//!
//! `AppConfig` is loaded once at startup from `.env` and the process environment
//! and handed to whoever needs it. Nothing here carries a default credential:
//! a password (or a full `DATABASE_URL`) must come from the environment.

use std::env;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use strum::{Display, EnumString};
use thiserror::Error;
use url::Url;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("{var} has an invalid value: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// libpq `sslmode` values accepted by the Postgres driver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum SslMode {
    Disable,
    Allow,
    #[default]
    Prefer,
    Require,
    VerifyCa,
    VerifyFull,
}

/// Connection parameters for the target database.
///
/// When `url` is set it wins over the individual fields. It may be a full DSN
/// (`postgres://`, `sqlite:`) or a bare path to a SQLite file.
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
    pub sslmode: SslMode,
    pub connect_timeout_secs: u64,
}

impl DatabaseConfig {
    /// Connection string handed to the driver.
    pub fn url(&self) -> Result<String, ConfigError> {
        if let Some(url) = &self.url {
            if is_dsn(url) {
                return Ok(url.clone());
            }
            return Ok(format!("sqlite://{url}?mode=rwc"));
        }

        let invalid_host = || ConfigError::Invalid {
            var: "DB_HOST",
            value: self.host.clone(),
        };

        let mut url = Url::parse("postgres://localhost").map_err(|_| invalid_host())?;
        url.set_host(Some(&self.host)).map_err(|_| invalid_host())?;
        url.set_port(Some(self.port)).map_err(|_| invalid_host())?;
        url.set_username(&self.user).map_err(|_| ConfigError::Invalid {
            var: "DB_USER",
            value: self.user.clone(),
        })?;
        url.set_password(Some(&self.password))
            .map_err(|_| ConfigError::Missing("DB_PASSWORD"))?;
        url.set_path(&self.database);
        url.query_pairs_mut()
            .append_pair("sslmode", &self.sslmode.to_string());

        Ok(url.into())
    }

    /// The SQLite file behind `DATABASE_URL`, when it is a bare path.
    pub fn sqlite_path(&self) -> Option<&Path> {
        self.url
            .as_deref()
            .filter(|url| !is_dsn(url))
            .map(Path::new)
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &self.url.as_ref().map(|_| "<redacted>"))
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("sslmode", &self.sslmode)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .finish()
    }
}

fn is_dsn(url: &str) -> bool {
    url.starts_with("sqlite:") || url.contains("://")
}

/// Represents the complete seeder configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    pub allow_production: bool,
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Loads the configuration from `.env` and environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let or = |key: &str, default: &str| get(key).unwrap_or_else(|| default.into());

        let url = get("DATABASE_URL");
        let password = match (&url, get("DB_PASSWORD")) {
            (_, Some(password)) => password,
            (Some(_), None) => String::new(),
            (None, None) => return Err(ConfigError::Missing("DB_PASSWORD")),
        };

        Ok(Self {
            env: or("APP_ENV", "development"),
            project_name: or("PROJECT_NAME", "course-seeder"),
            log_level: or("LOG_LEVEL", "info"),
            log_file: or("LOG_FILE", "logs/seeder.log"),
            log_to_stdout: parse_or("LOG_TO_STDOUT", get("LOG_TO_STDOUT"), true)?,
            allow_production: parse_or(
                "SEED_ALLOW_PRODUCTION",
                get("SEED_ALLOW_PRODUCTION"),
                false,
            )?,
            database: DatabaseConfig {
                url,
                host: or("DB_HOST", "localhost"),
                port: parse_or("DB_PORT", get("DB_PORT"), 5432)?,
                database: or("DB_NAME", "postgres"),
                user: or("DB_USER", "postgres"),
                password,
                sslmode: parse_or("DB_SSLMODE", get("DB_SSLMODE"), SslMode::default())?,
                connect_timeout_secs: parse_or(
                    "DB_CONNECT_TIMEOUT",
                    get("DB_CONNECT_TIMEOUT"),
                    10,
                )?,
            },
        })
    }

    pub fn is_production(&self) -> bool {
        self.env.eq_ignore_ascii_case("production")
    }
}

fn parse_or<T: FromStr>(
    var: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value: raw }),
    }
}
