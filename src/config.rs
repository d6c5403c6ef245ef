use std::env;

use sqlx::postgres::{PgConnectOptions, PgSslMode};

use crate::error::AppError;

/// Database connection parameters. All six variables are required at
/// startup; a missing or unparseable value aborts the process.
#[derive(Clone, Debug)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub dbname: String,
    pub sslmode: PgSslMode,
}

impl DbConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let require = |name: &str| {
            get(name).ok_or_else(|| AppError::Config(format!("{} is not set", name)))
        };

        let host = require("DB_HOST")?;
        let port = require("DB_PORT")?;
        let user = require("DB_USER")?;
        let password = require("DB_PASS")?;
        let dbname = require("DB_DBNAME")?;
        let sslmode = require("DB_SSLMODE")?;

        let port: u16 = port
            .parse()
            .map_err(|_| AppError::Config(format!("DB_PORT is not a valid port: {:?}", port)))?;
        let sslmode: PgSslMode = sslmode.parse().map_err(|_| {
            AppError::Config(format!("DB_SSLMODE is not a valid ssl mode: {:?}", sslmode))
        })?;

        Ok(Self {
            host,
            port,
            user,
            password,
            dbname,
            sslmode,
        })
    }

    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.dbname)
            .ssl_mode(self.sslmode)
    }
}
