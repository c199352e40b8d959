//! Request and response types for the cliniq API

use chrono::{DateTime, Utc};
use cliniq_core::types::UserInfo;
use serde::{Deserialize, Serialize};

/// Credentials submitted by the login form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login payload: the credential pair plus the identity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub session_token: String,
    /// Absolute session expiry, unix seconds.
    pub expires_at: Option<i64>,
    pub user: UserInfo,
}

/// Session metadata for the status display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionStatusResponse {
    pub last_login: DateTime<Utc>,
    pub session_expires_at: DateTime<Utc>,
}
