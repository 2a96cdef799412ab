//! # Spotify Integration Module
//!
//! Token acquisition and the Web API client.
//!
//! ```text
//! CLI / application code
//!          ↓
//! CredentialAuthenticator | UserAuthenticator   (AccessTokenProvider)
//!          ↓                       ↓
//!   token endpoint (auth)     TokenStore (cache file)
//!          ↓
//! ApiClient  ── bearer string only ──→  https://api.spotify.com/v1/
//! ```
//!
//! ## Authentication
//!
//! Both authenticators use the authorization-code grant and authenticate the
//! application to the token endpoint with `Authorization: Basic`.
//!
//! - [`CredentialAuthenticator`] keeps its token in memory and re-runs the
//!   whole code exchange whenever the token is missing or about to expire.
//!   The code comes from a [`crate::prompt::CodeReceiver`].
//! - [`UserAuthenticator`] builds authorize URLs, exchanges and refreshes
//!   tokens, and reads the token cache file. Reading the cache may refresh an
//!   expired token; writing it back is left to the caller.
//!
//! Tokens are treated as expired once less than 60 seconds of validity
//! remain. Failures are never retried.
//!
//! ## Resource calls
//!
//! [`ApiClient`] issues `GET/POST/PUT/DELETE` calls with a bearer token. The
//! endpoint wrappers in the submodules only marshal parameters:
//!
//! - `users` - current and public user profiles
//! - `search` - catalog search
//! - `albums`, `artists`, `tracks` - catalog lookups
//! - `browse` - categories, featured playlists, new releases, recommendations
//! - `follow` - following artists, users and playlists
//! - `personalization` - top artists and tracks
//! - `playlists` - playlist reads and edits
//! - `library` - saved albums and tracks
//! - `player` - playback state and control

pub mod auth;
mod client;
mod credentials;
mod user;

mod albums;
mod artists;
mod browse;
mod follow;
mod library;
mod personalization;
mod player;
mod playlists;
mod search;
mod tracks;
mod users;

pub use client::{ApiClient, ApiResponse, Payload, Query};
pub use credentials::{CredentialAuthenticator, DEFAULT_SCOPE_FILE};
pub use playlists::TrackRemoval;
pub use user::{PendingAuthorization, UserAuthenticator};

use crate::error::AuthError;

/// Anything that can hand out a currently valid access token.
pub trait AccessTokenProvider {
    fn access_token(&mut self) -> Result<String, AuthError>;
}
