// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authentication errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::error::ErrorBody;

/// Body message shared by every rejected request.
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized request";

/// Why the gate turned a request away. Only logged; clients see one
/// generic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// No authorization header present
    MissingAuthHeader,
    /// Header is not valid UTF-8 or does not use the `Bearer` scheme
    InvalidAuthHeader,
    /// Token does not match the configured one
    InvalidToken,
}

impl AuthError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::MissingAuthHeader => "missing_auth_header",
            AuthError::InvalidAuthHeader => "invalid_auth_header",
            AuthError::InvalidToken => "invalid_token",
        }
    }
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::MissingAuthHeader => write!(f, "Authorization header is required"),
            AuthError::InvalidAuthHeader => {
                write!(f, "Invalid authorization header format (expected 'Bearer <token>')")
            }
            AuthError::InvalidToken => write!(f, "Token does not match"),
        }
    }
}

impl std::error::Error for AuthError {}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        (StatusCode::UNAUTHORIZED, Json(ErrorBody::new(UNAUTHORIZED_MESSAGE))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn every_variant_returns_generic_401() {
        for err in [
            AuthError::MissingAuthHeader,
            AuthError::InvalidAuthHeader,
            AuthError::InvalidToken,
        ] {
            let response = err.into_response();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

            let body_bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            let body: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();
            assert_eq!(body["error"]["message"], UNAUTHORIZED_MESSAGE);
        }
    }

    #[test]
    fn error_codes_are_distinct() {
        assert_eq!(AuthError::MissingAuthHeader.error_code(), "missing_auth_header");
        assert_eq!(AuthError::InvalidAuthHeader.error_code(), "invalid_auth_header");
        assert_eq!(AuthError::InvalidToken.error_code(), "invalid_token");
    }
}
