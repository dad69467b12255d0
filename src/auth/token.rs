// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Constant-time comparison against the configured API token.
//!
//! The configured token keys an HMAC-SHA256 and its own tag is computed once
//! at startup. A presented token is accepted when its tag verifies against
//! that one; `verify_slice` compares tags without early exit.

use std::{fmt, sync::Arc};

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// The shared secret every request must present.
#[derive(Clone)]
pub struct ApiToken {
    mac: HmacSha256,
    expected_tag: Arc<[u8]>,
}

impl ApiToken {
    pub fn new(token: impl AsRef<[u8]>) -> Self {
        let token = token.as_ref();
        let mac = HmacSha256::new_from_slice(token).expect("HMAC accepts keys of any length");
        let expected_tag = mac.clone().chain_update(token).finalize().into_bytes();
        Self {
            mac,
            expected_tag: Arc::from(expected_tag.as_slice()),
        }
    }

    /// `true` when `presented` equals the configured token.
    pub fn matches(&self, presented: &str) -> bool {
        self.mac
            .clone()
            .chain_update(presented.as_bytes())
            .verify_slice(&self.expected_tag)
            .is_ok()
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiToken").finish_non_exhaustive()
    }
}
