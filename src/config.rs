//! Environment configuration with fixed fallbacks.

use crate::error::ConfigError;
use sqlx::postgres::PgConnectOptions;
use std::collections::HashMap;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub db_host: String,
    pub db_port: u16,
    pub db_name: String,
    pub db_user: String,
    pub db_password: String,
    /// When set, replaces the `DB_*` settings.
    pub database_url: Option<String>,
    pub max_connections: u32,
    /// Directory holding the browser client.
    pub static_dir: PathBuf,
}

impl Config {
    /// Read from the process environment, after loading `.env` if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_vars(&std::env::vars().collect())
    }

    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let get = |key: &str, default: &str| -> String {
            vars.get(key)
                .filter(|v| !v.is_empty())
                .cloned()
                .unwrap_or_else(|| default.to_string())
        };
        Ok(Self {
            host: get("HOST", "0.0.0.0"),
            port: parse("PORT", &get("PORT", "5000"))?,
            db_host: get("DB_HOST", "localhost"),
            db_port: parse("DB_PORT", &get("DB_PORT", "5432"))?,
            db_name: get("DB_NAME", "pawsconnect"),
            db_user: get("DB_USER", "postgres"),
            db_password: get("DB_PASSWORD", "password123"),
            database_url: vars.get("DATABASE_URL").filter(|v| !v.is_empty()).cloned(),
            max_connections: parse("DB_MAX_CONNECTIONS", &get("DB_MAX_CONNECTIONS", "10"))?,
            static_dir: PathBuf::from(get("STATIC_DIR", "frontend")),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        match &self.database_url {
            Some(url) => PgConnectOptions::from_str(url).map_err(|_| ConfigError::Invalid {
                var: "DATABASE_URL",
                value: url.clone(),
            }),
            None => Ok(PgConnectOptions::new()
                .host(&self.db_host)
                .port(self.db_port)
                .database(&self.db_name)
                .username(&self.db_user)
                .password(&self.db_password)),
        }
    }
}

fn parse<T: FromStr>(var: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        var,
        value: value.to_string(),
    })
}
