use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::Utc;
use rand::{Rng, distr::Alphanumeric};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};

use crate::types::TokenRecord;

/// Seconds of remaining validity below which a token counts as expired.
pub const EXPIRY_OFFSET_SECS: i64 = 60;

/// Splits on whitespace, sorts and joins with single spaces.
pub fn normalize_scope(scope: Option<&str>) -> String {
    let mut parts: Vec<&str> = scope.unwrap_or_default().split_whitespace().collect();
    parts.sort_unstable();
    parts.join(" ")
}

pub fn scopes_equal(a: Option<&str>, b: Option<&str>) -> bool {
    normalize_scope(a) == normalize_scope(b)
}

/// `Basic <base64(id:secret)>`
pub fn basic_auth_value(client_id: &str, client_secret: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{client_id}:{client_secret}")))
}

pub fn authorization_headers(client_id: &str, client_secret: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    // base64 output is always a valid header value
    if let Ok(value) = HeaderValue::from_str(&basic_auth_value(client_id, client_secret)) {
        headers.insert(AUTHORIZATION, value);
    }
    headers
}

pub fn now_ts() -> i64 {
    Utc::now().timestamp()
}

/// True when fewer than `offset` seconds of validity remain at `now`.
///
/// A record without `expires_at` has never been stamped and is never trusted.
pub fn is_expired_at(record: &TokenRecord, offset: i64, now: i64) -> bool {
    match record.expires_at {
        Some(expires_at) => expires_at.saturating_sub(now) < offset,
        None => true,
    }
}

pub fn is_expired(record: &TokenRecord, offset: i64) -> bool {
    is_expired_at(record, offset, now_ts())
}

/// Sets `expires_at` from `expires_in` and normalizes the scope.
///
/// An explicit `scope` replaces whatever the server sent.
pub fn stamp_token(mut record: TokenRecord, scope: Option<&str>, now: i64) -> TokenRecord {
    record.expires_at = Some(now.saturating_add(record.expires_in));
    if let Some(scope) = scope.filter(|s| !s.trim().is_empty()) {
        record.scope = Some(normalize_scope(Some(scope)));
    } else if let Some(existing) = record.scope.take() {
        record.scope = Some(normalize_scope(Some(&existing)));
    }
    record
}

/// Random CSRF token for the `state` parameter.
pub fn generate_state() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(16)
        .map(char::from)
        .collect()
}

/// Masks all but the first few characters of a secret for display.
pub fn mask_secret(secret: &str) -> String {
    let visible: String = secret.chars().take(6).collect();
    if secret.chars().count() <= 6 {
        "*".repeat(secret.chars().count())
    } else {
        format!("{visible}…")
    }
}
