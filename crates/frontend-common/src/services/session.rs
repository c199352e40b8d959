//! Session API service

use crate::client::create_client;
use crate::client_wrapper::SessionApiClient;
use cliniq_core::session::credentials::CredentialRecord;
use cliniq_core::types::UserInfo;
use cliniq_http::client::error::ClientError;
use cliniq_http::types::SessionStatusResponse;

/// Session API service
#[derive(Clone)]
pub struct SessionApiService;

impl SessionApiService {
    /// Create a new session API service
    pub fn new() -> Self {
        Self
    }

    /// Validate stored credentials against the server ("who am I").
    ///
    /// Used during bootstrap, before the session is established; it
    /// calls through the plain authorized client so a rejection stays
    /// silent instead of tripping the response guard.
    pub async fn validate_credentials(
        &self,
        credentials: CredentialRecord,
    ) -> Result<UserInfo, ClientError> {
        let client = create_client()?.authorize(credentials);
        client.current_user().await
    }

    /// Best-effort server-side logout
    pub async fn remote_logout(&self, credentials: CredentialRecord) -> Result<(), ClientError> {
        let client = create_client()?.authorize(credentials);
        client.logout().await
    }

    /// Current session metadata for the status display
    pub async fn session_status(&self) -> Result<SessionStatusResponse, ClientError> {
        let client = SessionApiClient::new()?;
        client.session_status().await
    }
}

impl Default for SessionApiService {
    fn default() -> Self {
        Self::new()
    }
}
