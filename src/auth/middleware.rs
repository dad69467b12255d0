// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Bearer-token gate for Axum.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let app = Router::new()
//!     .route("/folders", get(list_folders))
//!     .layer(axum::middleware::from_fn_with_state(
//!         api_token.clone(),
//!         require_bearer_token,
//!     ));
//! ```

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Response},
};

use super::{ApiToken, AuthError};

/// Rejects the request with 401 unless it carries the configured token.
pub async fn require_bearer_token(
    State(token): State<ApiToken>,
    request: Request,
    next: Next,
) -> Response {
    match check_bearer(request.headers(), &token) {
        Ok(()) => next.run(request).await,
        Err(err) => {
            tracing::error!(
                path = %request.uri().path(),
                code = err.error_code(),
                "Unauthorized request: {err}"
            );
            err.into_response()
        }
    }
}

fn check_bearer(headers: &HeaderMap, token: &ApiToken) -> Result<(), AuthError> {
    let header = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingAuthHeader)?
        .to_str()
        .map_err(|_| AuthError::InvalidAuthHeader)?;

    let presented = header
        .strip_prefix("Bearer ")
        .ok_or(AuthError::InvalidAuthHeader)?;

    if token.matches(presented) {
        Ok(())
    } else {
        Err(AuthError::InvalidToken)
    }
}
