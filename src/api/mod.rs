//! Handlers for the local callback server started during authorization.
//!
//! - `GET /callback` records the `code` (or `error`) Spotify redirects with,
//!   checking `state` when one was sent.
//! - `GET /health` reports that the listener is up.

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
