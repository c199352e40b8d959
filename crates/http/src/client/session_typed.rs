//! Type-safe session endpoint extensions

use super::error::ClientError;
use super::{AuthorizedApiClient, PublicApiClient};
use crate::types::{LoginRequest, LoginResponse, SessionStatusResponse};
use cliniq_core::types::UserInfo;

/// Session endpoints for the public client
impl PublicApiClient {
    /// Exchange login credentials for a token pair and identity
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ClientError> {
        let req = self.request(reqwest::Method::POST, "/user/login").json(&request);
        self.execute(req).await
    }
}

/// Session endpoints for the authorized client
impl AuthorizedApiClient {
    /// Fetch the identity behind the attached credentials
    pub async fn current_user(&self) -> Result<UserInfo, ClientError> {
        let request = self.request(reqwest::Method::GET, "/user/me");
        self.execute(request).await
    }

    /// Best-effort server-side session teardown; the body is advisory
    pub async fn logout(&self) -> Result<(), ClientError> {
        let request = self.request(reqwest::Method::POST, "/user/logout");
        let _: serde_json::Value = self.execute(request).await?;
        Ok(())
    }

    /// Session metadata for the status display
    pub async fn session_status(&self) -> Result<SessionStatusResponse, ClientError> {
        let request = self.request(reqwest::Method::GET, "/user/session-status");
        self.execute(request).await
    }
}
