//! Spotify Web API client library
//!
//! This library provides the token lifecycle needed to talk to the Spotify Web
//! API: authorize URL construction, the authorization-code exchange, refresh,
//! expiry tracking and on-disk token caching. On top of that it offers a thin
//! [`spotify::ApiClient`] that issues bearer-authenticated requests and wraps
//! the public REST endpoints.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the local OAuth callback server
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Error type shared by the authentication and request layers
//! - `management` - Token persistence
//! - `prompt` - Sources for the interactively supplied authorization code
//! - `server` - Local HTTP server for OAuth callbacks
//! - `spotify` - Authenticators, token endpoint calls and the API client
//! - `types` - Data structures and type definitions
//! - `utils` - Scope, expiry and header helpers
//!
//! # Example
//!
//! ```
//! use spotkit::{config, spotify::UserAuthenticator};
//!
//! fn main() -> spotkit::Res<()> {
//!     config::load_env()?;
//!     let settings = config::Settings::from_env()?;
//!     let auth = UserAuthenticator::from_settings(&settings);
//!     println!("{}", auth.get_authorize_url(None, false));
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod prompt;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

pub use error::AuthError;

/// A convenient Result type alias for operations that may fail.
///
/// Used by the command-line layer where errors of several kinds meet and are
/// only ever reported to the user. Library operations return
/// [`AuthError`] instead.
///
/// # Type Parameters
///
/// - `T` - The success type returned on successful operations
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for general information and
/// status updates throughout the application.
///
/// # Example
///
/// ```
/// info!("Open the following URL to authorize: {}", url);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Token saved to {}", path.display());
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Creates a formatted error output with a red "!" indicator and immediately
/// terminates the program with exit code 1. Only the command-line layer uses
/// this; library code returns errors instead.
///
/// # Example
///
/// ```
/// error!("Failed to load configuration: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues users should notice, such as a browser that
/// could not be opened.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
