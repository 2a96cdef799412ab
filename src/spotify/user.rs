use std::path::PathBuf;

use reqwest::blocking::Client;
use tracing::debug;
use url::form_urlencoded;

use crate::{
    config::Settings,
    error::AuthError,
    management::TokenStore,
    prompt::CodeReceiver,
    spotify::{AccessTokenProvider, auth},
    types::{Credentials, Endpoints, TokenRecord},
    utils::{self, EXPIRY_OFFSET_SECS},
};

/// First half of a two-phase authorization: the URL to send the user to and
/// the `state` it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAuthorization {
    pub url: String,
    pub state: Option<String>,
}

/// Authorization-code flow on behalf of a logged-in user, backed by a token
/// cache file.
///
/// Reading the cache may refresh an expired token, but only the explicit
/// persistence calls ([`UserAuthenticator::save_token`],
/// [`UserAuthenticator::complete_authorization`]) ever write the file.
pub struct UserAuthenticator {
    http: Client,
    credentials: Credentials,
    endpoints: Endpoints,
    redirect_uri: String,
    state: Option<String>,
    scope: String,
    store: TokenStore,
}

impl UserAuthenticator {
    pub fn new(
        credentials: Credentials,
        redirect_uri: impl Into<String>,
        state: Option<String>,
        scope: Option<&str>,
        cached_token_path: impl Into<PathBuf>,
    ) -> Self {
        UserAuthenticator {
            http: Client::new(),
            credentials,
            endpoints: Endpoints::default(),
            redirect_uri: redirect_uri.into(),
            state,
            scope: utils::normalize_scope(scope),
            store: TokenStore::new(cached_token_path),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.credentials.clone(),
            settings.redirect_uri.clone(),
            settings.state.clone(),
            settings.scope.as_deref(),
            settings.token_cache.clone(),
        )
        .with_endpoints(settings.endpoints.clone())
    }

    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn with_http_client(mut self, http: Client) -> Self {
        self.http = http;
        self
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    pub fn redirect_uri(&self) -> &str {
        &self.redirect_uri
    }

    pub fn store(&self) -> &TokenStore {
        &self.store
    }

    /// Builds the authorize URL.
    ///
    /// `state` overrides the stored state; with neither, no `state` is sent.
    /// An empty scope is left out entirely and `show_dialog` only appears
    /// when true.
    pub fn get_authorize_url(&self, state: Option<&str>, show_dialog: bool) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        query
            .append_pair("client_id", &self.credentials.client_id)
            .append_pair("response_type", "code")
            .append_pair("redirect_uri", &self.redirect_uri);

        if !self.scope.is_empty() {
            query.append_pair("scope", &self.scope);
        }
        if let Some(state) = state.or(self.state.as_deref()) {
            query.append_pair("state", state);
        }
        if show_dialog {
            query.append_pair("show_dialog", "true");
        }

        format!("{}?{}", self.endpoints.authorize_url, query.finish())
    }

    /// Reads the token cache.
    ///
    /// A missing or unreadable file and a record without `scope` both give
    /// `None`. An expired record is refreshed and the refreshed record is
    /// returned without being written back.
    pub fn get_cached_token(&self) -> Result<Option<TokenRecord>, AuthError> {
        let Some(token) = self.store.load() else {
            return Ok(None);
        };

        if token.scope.is_none() {
            debug!(path = %self.store.path().display(), "cached token has no scope, ignoring it");
            return Ok(None);
        }

        if !utils::is_expired(&token, EXPIRY_OFFSET_SECS) {
            return Ok(Some(token));
        }

        let Some(refresh_token) = token.refresh_token.as_deref() else {
            debug!("cached token expired and has no refresh token");
            return Ok(None);
        };

        let mut refreshed = self.refresh_access_token(refresh_token)?;
        if refreshed.scope.is_none() {
            refreshed.scope = token.scope.clone();
        }
        Ok(Some(refreshed))
    }

    pub fn refresh_access_token(&self, refresh_token: &str) -> Result<TokenRecord, AuthError> {
        auth::refresh_token(&self.http, &self.endpoints, &self.credentials, refresh_token)
    }

    /// Exchanges a code obtained from the authorize page. The requested
    /// scope is recorded when the server does not echo one back.
    pub fn exchange_code(&self, code: &str) -> Result<TokenRecord, AuthError> {
        let mut token = auth::exchange_code(
            &self.http,
            &self.endpoints,
            &self.credentials,
            code,
            &self.redirect_uri,
        )?;
        if token.scope.is_none() {
            token.scope = Some(self.scope.clone());
        }
        Ok(token)
    }

    pub fn save_token(&self, token: &TokenRecord) -> Result<(), AuthError> {
        self.store.save(token)
    }

    /// Prepares an authorize URL, generating a `state` when none is stored.
    pub fn begin_authorization(&self, show_dialog: bool) -> PendingAuthorization {
        let state = self.state.clone().unwrap_or_else(utils::generate_state);
        PendingAuthorization {
            url: self.get_authorize_url(Some(&state), show_dialog),
            state: Some(state),
        }
    }

    /// Exchanges the code and persists the resulting token.
    pub fn complete_authorization(&self, code: &str) -> Result<TokenRecord, AuthError> {
        let token = self.exchange_code(code)?;
        self.save_token(&token)?;
        Ok(token)
    }

    /// Runs both phases, blocking on `receiver` for the code.
    pub fn authorize(
        &self,
        receiver: &mut dyn CodeReceiver,
        show_dialog: bool,
    ) -> Result<TokenRecord, AuthError> {
        let pending = self.begin_authorization(show_dialog);
        let code = receiver.receive_code(&pending.url, pending.state.as_deref())?;
        self.complete_authorization(&code)
    }
}

impl AccessTokenProvider for UserAuthenticator {
    /// Uses the cached token, persisting it when reading the cache refreshed it.
    fn access_token(&mut self) -> Result<String, AuthError> {
        let before = self.store.load();
        let token = self.get_cached_token()?.ok_or(AuthError::NotAuthenticated)?;
        if before.as_ref() != Some(&token) {
            self.save_token(&token)?;
        }
        Ok(token.access_token)
    }
}
