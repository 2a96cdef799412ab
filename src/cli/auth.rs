use std::time::Duration;

use crate::{
    config::Settings,
    error, info,
    prompt::{CodeReceiver, StdinPrompt},
    server::CallbackServer,
    spotify::{CredentialAuthenticator, UserAuthenticator},
    success,
};

/// Runs the user authorization flow and stores the token in the cache file.
///
/// With `callback` the redirect is caught by a local server, otherwise the
/// code is pasted on stdin. `app_only` runs the in-memory credential flow
/// instead and only reports the outcome.
pub fn auth(settings: &Settings, callback: bool, show_dialog: bool, app_only: bool, timeout: u64) {
    let mut receiver: Box<dyn CodeReceiver + Send> = if callback {
        match CallbackServer::new(&settings.server_address) {
            Ok(server) => Box::new(server.with_timeout(Duration::from_secs(timeout))),
            Err(e) => error!("{}", e),
        }
    } else {
        Box::new(StdinPrompt::new())
    };

    if app_only {
        let mut authenticator = CredentialAuthenticator::new(settings.credentials.clone())
            .with_endpoints(settings.endpoints.clone())
            .with_redirect_uri(settings.redirect_uri.clone())
            .with_scope_file(settings.scope_file.clone())
            .with_receiver(receiver);
        match authenticator.get_access_token() {
            Ok(_) => success!("Access token obtained."),
            Err(e) => error!("Authorization failed: {}", e),
        }
        return;
    }

    let authenticator = UserAuthenticator::from_settings(settings);
    info!("Authorize spotkit in your browser.");
    match authenticator.authorize(&mut *receiver, show_dialog) {
        Ok(_) => success!(
            "Authentication successful! Token saved to {}",
            authenticator.store().path().display()
        ),
        Err(e) => error!("Authorization failed: {}", e),
    }
}

pub fn authorize_url(settings: &Settings, state: Option<String>, show_dialog: bool) {
    let authenticator = UserAuthenticator::from_settings(settings);
    println!("{}", authenticator.get_authorize_url(state.as_deref(), show_dialog));
}
