//! Calls against the accounts service token endpoint.
//!
//! Both grants used by the authenticators (`authorization_code` and
//! `refresh_token`) authenticate the application with a Basic auth header
//! built from the client credentials. Every successful response is stamped
//! with `expires_at` before it leaves this module, so callers never see an
//! unstamped record.

use reqwest::blocking::{Client, Response};
use tracing::debug;

use crate::{
    error::AuthError,
    types::{Credentials, Endpoints, TokenRecord},
    utils,
};

/// Turns a non-2xx response into [`AuthError::Http`] carrying status and body.
pub fn check_status(response: Response) -> Result<Response, AuthError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().unwrap_or_default();
    Err(AuthError::Http { status, body })
}

fn post_token_form(
    http: &Client,
    endpoints: &Endpoints,
    credentials: &Credentials,
    form: &[(&str, &str)],
) -> Result<TokenRecord, AuthError> {
    let response = http
        .post(&endpoints.token_url)
        .headers(utils::authorization_headers(
            &credentials.client_id,
            &credentials.client_secret,
        ))
        .form(form)
        .send()?;

    let body = check_status(response)?.text()?;
    let record: TokenRecord = serde_json::from_str(&body)?;
    Ok(utils::stamp_token(record, None, utils::now_ts()))
}

/// Exchanges an authorization code for a token.
///
/// A mistyped or already used code is only detected here, as an HTTP error
/// from the token endpoint.
pub fn exchange_code(
    http: &Client,
    endpoints: &Endpoints,
    credentials: &Credentials,
    code: &str,
    redirect_uri: &str,
) -> Result<TokenRecord, AuthError> {
    debug!(token_url = %endpoints.token_url, "exchanging authorization code");
    post_token_form(
        http,
        endpoints,
        credentials,
        &[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", redirect_uri),
        ],
    )
}

/// Exchanges a refresh token for a new access token.
///
/// The accounts service usually omits `refresh_token` in the response; the
/// one passed in is then carried over so it is never lost.
pub fn refresh_token(
    http: &Client,
    endpoints: &Endpoints,
    credentials: &Credentials,
    refresh_token: &str,
) -> Result<TokenRecord, AuthError> {
    debug!(token_url = %endpoints.token_url, "refreshing access token");
    let mut record = post_token_form(
        http,
        endpoints,
        credentials,
        &[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
        ],
    )?;

    if record.refresh_token.is_none() {
        record.refresh_token = Some(refresh_token.to_string());
    }
    Ok(record)
}
