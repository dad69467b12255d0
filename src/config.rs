// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! This module defines environment variable names, default values and the
//! [`Config`] loaded from the environment at startup.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `APP_ENV` | `production`, `test` or anything else (development) | `development` |
//! | `API_TOKEN` | Bearer token every request must present | Required |
//! | `DATABASE_URL` | SQLite connection URL | `sqlite://noteful.db?mode=rwc` |
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8000` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `json` in production, else `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use std::{
    collections::HashMap,
    net::{AddrParseError, SocketAddr},
};

use crate::auth::ApiToken;

pub const APP_ENV_ENV: &str = "APP_ENV";
pub const API_TOKEN_ENV: &str = "API_TOKEN";
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";
pub const HOST_ENV: &str = "HOST";
pub const PORT_ENV: &str = "PORT";
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

pub const DEFAULT_DATABASE_URL: &str = "sqlite://noteful.db?mode=rwc";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

/// Deployment environment, selected by `APP_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Production,
    Test,
    Development,
}

impl Environment {
    pub fn parse(value: &str) -> Self {
        match value {
            "production" => Environment::Production,
            "test" => Environment::Test,
            _ => Environment::Development,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("API_TOKEN must be set to a non-empty value")]
    MissingApiToken,

    #[error("invalid PORT value {0:?}")]
    InvalidPort(String),

    #[error("invalid bind address: {0}")]
    InvalidBindAddress(#[from] AddrParseError),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub environment: Environment,
    pub api_token: ApiToken,
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars().collect())
    }

    /// Build configuration from an explicit variable map.
    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self, ConfigError> {
        let var = |name: &str| vars.get(name).map(String::as_str);

        let environment = Environment::parse(var(APP_ENV_ENV).unwrap_or("development"));

        let raw_token = var(API_TOKEN_ENV)
            .filter(|t| !t.is_empty())
            .ok_or(ConfigError::MissingApiToken)?;
        let api_token = ApiToken::new(raw_token);

        let database_url = var(DATABASE_URL_ENV)
            .unwrap_or(DEFAULT_DATABASE_URL)
            .to_string();

        let host = var(HOST_ENV).unwrap_or(DEFAULT_HOST);
        let port = match var(PORT_ENV) {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.to_string()))?,
            None => DEFAULT_PORT,
        };
        let bind_addr: SocketAddr = format!("{host}:{port}").parse()?;

        let log_format = match var(LOG_FORMAT_ENV) {
            Some("json") => LogFormat::Json,
            Some(_) => LogFormat::Pretty,
            None if environment == Environment::Production => LogFormat::Json,
            None => LogFormat::Pretty,
        };

        Ok(Self {
            environment,
            api_token,
            database_url,
            bind_addr,
            log_format,
        })
    }

    /// Per-request HTTP tracing is off under `test`.
    pub fn trace_requests(&self) -> bool {
        self.environment != Environment::Test
    }
}
