use std::{fmt, time::Duration};

use reqwest::{Method, blocking::Client};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::{
    error::AuthError,
    spotify::{AccessTokenProvider, auth::check_status},
    types::SPOTIFY_API_URL,
};

/// Outcome of a successful resource call.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// 2xx without a body; `request` names the call that was made.
    Empty { request: String },
    Json(Value),
}

impl ApiResponse {
    pub fn into_json(self) -> Value {
        match self {
            ApiResponse::Empty { .. } => Value::Null,
            ApiResponse::Json(value) => value,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ApiResponse::Empty { .. })
    }
}

impl fmt::Display for ApiResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiResponse::Empty { request } => write!(f, "REQUEST {request} OK!"),
            ApiResponse::Json(value) => write!(f, "{value}"),
        }
    }
}

/// Request body of a resource call.
#[derive(Debug, Clone)]
pub enum Payload {
    Json(Value),
    /// Pre-encoded text body, sent as is (the cover image upload).
    Text { content_type: &'static str, body: String },
}

/// Query parameters; `None` values are left out of the request.
#[derive(Debug, Clone, Default)]
pub struct Query(Vec<(&'static str, String)>);

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: &'static str, value: impl ToString) -> Self {
        self.0.push((key, value.to_string()));
        self
    }

    pub fn opt<T: ToString>(self, key: &'static str, value: Option<T>) -> Self {
        match value {
            Some(value) => self.set(key, value),
            None => self,
        }
    }

    /// Joins ids with commas, the form every multi-id endpoint expects.
    pub fn ids(self, key: &'static str, ids: &[&str]) -> Self {
        self.set(key, ids.join(","))
    }

    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.0
    }
}

/// Bearer-authenticated access to the Web API.
///
/// Only the access token string is held; the token record and its refresh
/// token stay with the authenticator that produced it.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    api_url: String,
    access_token: String,
}

impl ApiClient {
    pub fn new(access_token: impl Into<String>) -> Self {
        ApiClient {
            http: Client::new(),
            api_url: SPOTIFY_API_URL.to_string(),
            access_token: access_token.into(),
        }
    }

    /// Asks `provider` for a token once and keeps the bearer string.
    pub fn connect(provider: &mut impl AccessTokenProvider) -> Result<Self, AuthError> {
        Ok(Self::new(provider.access_token()?))
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        let mut api_url = api_url.into();
        if !api_url.ends_with('/') {
            api_url.push('/');
        }
        self.api_url = api_url;
        self
    }

    /// Applies a per-request timeout; `None` waits indefinitely.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Result<Self, AuthError> {
        self.http = Client::builder().timeout(timeout).build()?;
        Ok(self)
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Issues one call against `api_url + path`.
    ///
    /// Non-2xx answers become [`AuthError::Http`]. Nothing is retried.
    pub fn request(
        &self,
        method: Method,
        path: &str,
        request: &str,
        query: &Query,
        payload: Option<Payload>,
    ) -> Result<ApiResponse, AuthError> {
        let url = format!("{}{}", self.api_url, path.trim_start_matches('/'));
        debug!(method = method.as_str(), %url, "api call");

        let mut builder = self
            .http
            .request(method, &url)
            .bearer_auth(&self.access_token)
            .query(query.pairs());
        builder = match payload {
            Some(Payload::Json(body)) => builder.json(&body),
            Some(Payload::Text { content_type, body }) => builder
                .header(reqwest::header::CONTENT_TYPE, content_type)
                .body(body),
            None => builder,
        };

        let response = check_status(builder.send()?)?;
        let body = response.bytes()?;
        if body.is_empty() {
            return Ok(ApiResponse::Empty {
                request: request.to_string(),
            });
        }
        Ok(ApiResponse::Json(serde_json::from_slice(&body)?))
    }

    pub fn get(&self, path: &str, query: Query) -> Result<Value, AuthError> {
        Ok(self
            .request(Method::GET, path, path, &query, None)?
            .into_json())
    }

    /// GET decoded into a typed response.
    pub fn get_as<T: DeserializeOwned>(&self, path: &str, query: Query) -> Result<T, AuthError> {
        Ok(serde_json::from_value(self.get(path, query)?)?)
    }

    pub fn post(
        &self,
        path: &str,
        request: &str,
        query: Query,
        payload: Option<Payload>,
    ) -> Result<ApiResponse, AuthError> {
        self.request(Method::POST, path, request, &query, payload)
    }

    pub fn put(
        &self,
        path: &str,
        request: &str,
        query: Query,
        payload: Option<Payload>,
    ) -> Result<ApiResponse, AuthError> {
        self.request(Method::PUT, path, request, &query, payload)
    }

    pub fn delete(
        &self,
        path: &str,
        request: &str,
        query: Query,
        payload: Option<Payload>,
    ) -> Result<ApiResponse, AuthError> {
        self.request(Method::DELETE, path, request, &query, payload)
    }
}
