// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Authentication Module
//!
//! Every request must carry the process-wide API token.
//!
//! ## Auth Flow
//!
//! 1. Client sends `Authorization: Bearer <API_TOKEN>`
//! 2. The gate middleware:
//!    - rejects a missing header or a non-`Bearer` scheme
//!    - compares the presented token with the configured one in constant time
//! 3. Only then does the request reach a router
//!
//! ## Security
//!
//! - The gate wraps every route, including the docs and the 404 fallback
//! - Failures all answer with the same generic 401 body; the reason is logged

pub mod error;
pub mod middleware;
pub mod token;

pub use error::AuthError;
pub use middleware::require_bearer_token;
pub use token::ApiToken;
