use crate::{
    config::Settings,
    error,
    spotify::{ApiClient, UserAuthenticator},
    success,
};

use super::spinner;

/// Prints the profile of the user the cached token belongs to.
pub fn me(settings: &Settings) {
    let mut authenticator = UserAuthenticator::from_settings(settings);

    let client = match ApiClient::connect(&mut authenticator) {
        Ok(client) => client.with_api_url(settings.endpoints.api_url.clone()),
        Err(e) => error!("{}", e),
    };
    let client = match client.with_timeout(settings.api_timeout) {
        Ok(client) => client,
        Err(e) => error!("{}", e),
    };

    let pb = spinner("Fetching profile...");
    let result = client.current_user();
    pb.finish_and_clear();

    match result {
        Ok(profile) => {
            success!(
                "Logged in as {} ({})",
                profile.display_name.as_deref().unwrap_or("-"),
                profile.id
            );
            if let Some(product) = profile.product {
                println!("  product: {product}");
            }
            if let Some(country) = profile.country {
                println!("  country: {country}");
            }
        }
        Err(e) => error!("Failed to fetch profile: {}", e),
    }
}
