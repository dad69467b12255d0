// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Noteful API - Folders & Notes REST Service
//!
//! This crate serves folders and the notes inside them over a small JSON
//! API. Every request carries a shared bearer token, request bodies are
//! validated field by field, and free text is HTML-escaped on the way out.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers and router composition (Axum)
//! - `auth` - Bearer-token gate
//! - `storage` - SQLite pool, schema and repositories (sqlx)
//! - `validation` - Field checks for folder and note candidates
//! - `sanitize` - HTML escaping of outbound text

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod sanitize;
pub mod state;
pub mod storage;
pub mod telemetry;
pub mod validation;
