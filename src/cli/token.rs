use chrono::{DateTime, Utc};
use tabled::Table;

use crate::{
    config::Settings,
    error, info,
    spotify::UserAuthenticator,
    success,
    types::{TokenRecord, TokenTableRow},
    utils::{self, EXPIRY_OFFSET_SECS},
    warning,
};

use super::spinner;

/// Shows the cached token without refreshing it.
pub fn token(settings: &Settings) {
    let authenticator = UserAuthenticator::from_settings(settings);
    let Some(record) = authenticator.store().load() else {
        warning!(
            "No token cached at {}. Run spotkit auth.",
            authenticator.store().path().display()
        );
        return;
    };

    let table = Table::new(token_rows(&record));
    println!("{table}");
    if record.scope.is_none() {
        warning!("Cached token has no scope and will be ignored. Run spotkit auth.");
    } else if utils::is_expired(&record, EXPIRY_OFFSET_SECS) {
        info!("Token is expired and will be refreshed on next use.");
    }
}

/// Refreshes the cached token and writes the result back.
pub fn refresh(settings: &Settings) {
    let authenticator = UserAuthenticator::from_settings(settings);
    let Some(record) = authenticator.store().load() else {
        error!("No token cached. Run spotkit auth.");
    };
    let Some(refresh_token) = record.refresh_token.as_deref() else {
        error!("Cached token has no refresh token. Run spotkit auth.");
    };

    let pb = spinner("Refreshing access token...");
    let result = authenticator.refresh_access_token(refresh_token);
    pb.finish_and_clear();

    let mut refreshed = match result {
        Ok(token) => token,
        Err(e) => error!("Failed to refresh token: {}", e),
    };
    if refreshed.scope.is_none() {
        refreshed.scope = record.scope.clone();
    }

    if let Err(e) = authenticator.save_token(&refreshed) {
        error!("Failed to save token to cache: {}", e);
    }
    success!("Token refreshed.");
}

fn token_rows(record: &TokenRecord) -> Vec<TokenTableRow> {
    let expires_at = match record.expires_at.and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0)) {
        Some(at) => at.to_rfc3339(),
        None => "-".to_string(),
    };

    vec![
        TokenTableRow {
            field: "access_token".to_string(),
            value: utils::mask_secret(&record.access_token),
        },
        TokenTableRow {
            field: "refresh_token".to_string(),
            value: record
                .refresh_token
                .as_deref()
                .map(utils::mask_secret)
                .unwrap_or_else(|| "-".to_string()),
        },
        TokenTableRow {
            field: "token_type".to_string(),
            value: record.token_type().unwrap_or("-").to_string(),
        },
        TokenTableRow {
            field: "expires_at".to_string(),
            value: expires_at,
        },
        TokenTableRow {
            field: "scope".to_string(),
            value: record.scope.clone().unwrap_or_else(|| "-".to_string()),
        },
    ]
}
