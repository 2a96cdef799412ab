use std::{fs, path::PathBuf};

use reqwest::blocking::Client;
use tracing::{debug, info};
use url::form_urlencoded;

use crate::{
    error::AuthError,
    prompt::{CodeReceiver, StdinPrompt},
    spotify::{AccessTokenProvider, auth},
    types::{Credentials, DEFAULT_REDIRECT_URI, Endpoints, TokenRecord},
    utils::{self, EXPIRY_OFFSET_SECS},
};

pub const DEFAULT_SCOPE_FILE: &str = "scopes.txt";

/// Authenticator for the application's own credentials.
///
/// Despite the name this does not use the `client_credentials` grant. It runs
/// the authorization-code grant: it asks a human for a code through its
/// [`CodeReceiver`] (by default a blocking stdin prompt without timeout) and
/// exchanges that code for a token. The behavior is what callers rely on, so
/// it is kept as is.
///
/// The token is held in memory only. There is no lock around the expiry
/// check; `&mut self` serializes callers of a single instance, while separate
/// instances each run their own flow.
pub struct CredentialAuthenticator {
    http: Client,
    credentials: Credentials,
    endpoints: Endpoints,
    redirect_uri: String,
    scope_file: PathBuf,
    receiver: Box<dyn CodeReceiver + Send>,
    access_code: Option<String>,
    token: Option<TokenRecord>,
}

impl CredentialAuthenticator {
    pub fn new(credentials: Credentials) -> Self {
        CredentialAuthenticator {
            http: Client::new(),
            credentials,
            endpoints: Endpoints::default(),
            redirect_uri: DEFAULT_REDIRECT_URI.to_string(),
            scope_file: PathBuf::from(DEFAULT_SCOPE_FILE),
            receiver: Box::new(StdinPrompt::new()),
            access_code: None,
            token: None,
        }
    }

    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn with_redirect_uri(mut self, redirect_uri: impl Into<String>) -> Self {
        self.redirect_uri = redirect_uri.into();
        self
    }

    pub fn with_scope_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.scope_file = path.into();
        self
    }

    pub fn with_receiver(mut self, receiver: impl CodeReceiver + Send + 'static) -> Self {
        self.receiver = Box::new(receiver);
        self
    }

    pub fn with_http_client(mut self, http: Client) -> Self {
        self.http = http;
        self
    }

    pub fn token(&self) -> Option<&TokenRecord> {
        self.token.as_ref()
    }

    /// Returns a valid access token, running the full exchange when none is
    /// held or the held one has less than a minute left.
    pub fn get_access_token(&mut self) -> Result<String, AuthError> {
        if let Some(token) = &self.token {
            if !utils::is_expired(token, EXPIRY_OFFSET_SECS) {
                return Ok(token.access_token.clone());
            }
            debug!("held token expired, starting a new authorization");
        }

        let code = self.request_access_code()?;
        self.access_code = Some(code);
        let token = self.request_token()?;
        let access_token = token.access_token.clone();
        self.token = Some(token);
        info!("access token obtained");
        Ok(access_token)
    }

    fn request_token(&self) -> Result<TokenRecord, AuthError> {
        let code = self.access_code.as_deref().unwrap_or_default();
        auth::exchange_code(
            &self.http,
            &self.endpoints,
            &self.credentials,
            code,
            &self.redirect_uri,
        )
    }

    fn read_scope(&self) -> Result<String, AuthError> {
        let scope = fs::read_to_string(&self.scope_file).map_err(|source| AuthError::ScopeFile {
            path: self.scope_file.clone(),
            source,
        })?;
        Ok(utils::normalize_scope(Some(&scope)))
    }

    fn request_access_code(&mut self) -> Result<String, AuthError> {
        let scope = self.read_scope()?;
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("client_id", &self.credentials.client_id)
            .append_pair("response_type", "code")
            .append_pair("redirect_uri", &self.redirect_uri)
            .append_pair("scope", &scope)
            .finish();
        let url = format!("{}?{}", self.endpoints.authorize_url, query);

        let response = self
            .http
            .get(&url)
            .headers(utils::authorization_headers(
                &self.credentials.client_id,
                &self.credentials.client_secret,
            ))
            .send()?;
        let response = auth::check_status(response)?;
        let authorize_url = response.url().to_string();

        self.receiver.receive_code(&authorize_url, None)
    }
}

impl AccessTokenProvider for CredentialAuthenticator {
    fn access_token(&mut self) -> Result<String, AuthError> {
        self.get_access_token()
    }
}
