// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Relational Storage Module
//!
//! Folders and notes live in two SQLite tables accessed through a shared
//! `sqlx` connection pool. The pool is opened once at startup and handed to
//! the repositories through application state.
//!
//! ## Table Layout
//!
//! ```text
//! folders(id INTEGER PK, name TEXT)
//! notes(id INTEGER PK, name TEXT, content TEXT,
//!       folder_id INTEGER -> folders(id) ON DELETE CASCADE,
//!       modified TEXT)
//! ```
//!
//! ## Important Notes
//!
//! - Every repository call is a single autocommit statement
//! - Referential integrity is enforced by SQLite (`foreign_keys = ON`)
//! - Deleting a folder removes the notes that reference it

use std::str::FromStr;

use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};

pub mod repository;

pub use repository::{FolderRepository, NoteRepository};

const CREATE_FOLDERS: &str = r#"
    CREATE TABLE IF NOT EXISTS folders (
        id   INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL
    )
"#;

const CREATE_NOTES: &str = r#"
    CREATE TABLE IF NOT EXISTS notes (
        id        INTEGER PRIMARY KEY AUTOINCREMENT,
        name      TEXT NOT NULL,
        content   TEXT NOT NULL,
        folder_id INTEGER NOT NULL REFERENCES folders(id) ON DELETE CASCADE,
        modified  TEXT NOT NULL
    )
"#;

// =============================================================================
// Error Type
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),

    #[error("foreign key constraint failed")]
    ForeignKeyViolation,
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                StoreError::ForeignKeyViolation
            }
            _ => StoreError::Database(err),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Pool Bootstrap
// =============================================================================

/// Open a pool for `database_url` and make sure both tables exist.
pub async fn connect(database_url: &str) -> StoreResult<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new().connect_with(options).await?;
    create_schema(&pool).await?;

    tracing::info!(url = %database_url, "database ready");
    Ok(pool)
}

/// Open a private in-memory database.
///
/// SQLite gives every connection its own `:memory:` database, so the pool is
/// pinned to one connection that never expires.
pub async fn connect_in_memory() -> StoreResult<SqlitePool> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;
    create_schema(&pool).await?;

    Ok(pool)
}

/// Create the `folders` and `notes` tables if they are missing.
pub async fn create_schema(pool: &SqlitePool) -> StoreResult<()> {
    sqlx::query(CREATE_FOLDERS).execute(pool).await?;
    sqlx::query(CREATE_NOTES).execute(pool).await?;
    Ok(())
}
