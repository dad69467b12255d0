// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use sqlx::SqlitePool;

use crate::{auth::ApiToken, config::Config};

/// Handles shared by every request, built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub api_token: ApiToken,
    pub trace_requests: bool,
}

impl AppState {
    pub fn new(db: SqlitePool, config: &Config) -> Self {
        Self {
            db,
            api_token: config.api_token.clone(),
            trace_requests: config.trace_requests(),
        }
    }
}
