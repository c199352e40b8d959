//! Client configuration and initialization

pub use cliniq_http::client::error::ClientError;
use cliniq_http::client::{PublicApiClient, TypedClientBuilder};
use once_cell::sync::Lazy;
use std::sync::Mutex;
use web_sys::window;

/// Global client instance
static API_CLIENT: Lazy<Mutex<Option<PublicApiClient>>> = Lazy::new(|| Mutex::new(None));

/// Get the base URL for API calls
fn get_base_url() -> String {
    // Try to get from window location
    if let Some(window) = window() {
        if let Ok(location) = window.location().origin() {
            return location;
        }
    }

    // Default to relative URLs
    String::new()
}

/// Get the shared base client instance
pub fn create_client() -> Result<PublicApiClient, ClientError> {
    let mut client_lock = API_CLIENT.lock().expect("Failed to acquire client lock");

    if client_lock.is_none() {
        let client = TypedClientBuilder::new()
            .base_url(get_base_url())
            .build_public()?;
        *client_lock = Some(client.clone());
        Ok(client)
    } else {
        Ok(client_lock
            .as_ref()
            .expect("Client should be initialized")
            .clone())
    }
}
