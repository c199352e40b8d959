//! Account service for the login flow

use cliniq_core::session::credentials::{write_credentials, CredentialRecord};
use cliniq_core::types::UserInfo;
use cliniq_frontend_common::client::create_client;
use cliniq_frontend_common::session::storage::BrowserCredentialStore;
use cliniq_http::types::LoginRequest;

/// Login API service
#[derive(Clone)]
pub struct AccountService;

impl AccountService {
    /// Create a new account service
    pub fn new() -> Self {
        Self
    }

    /// Exchange login credentials for a session.
    ///
    /// The returned token pair is written to the credential store
    /// before this reports success, so the session provider always sees
    /// a fully written record when `Login` is dispatched.
    pub async fn login(&self, email: &str, password: &str) -> Result<UserInfo, String> {
        let client = create_client().map_err(|e| format!("Failed to get client: {e}"))?;

        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = client.login(request).await.map_err(|e| e.to_string())?;

        write_credentials(
            &BrowserCredentialStore,
            &CredentialRecord {
                access_token: response.access_token,
                session_token: response.session_token,
                expires_at: response.expires_at,
            },
        );

        Ok(response.user)
    }
}

impl Default for AccountService {
    fn default() -> Self {
        Self::new()
    }
}
