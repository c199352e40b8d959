//! Type-safe API clients that enforce authorization requirements at
//! compile time.

pub mod error;
pub mod session_typed;

use cliniq_core::session::credentials::CredentialRecord;
use error::ClientError;
use reqwest::{header, Client, ClientBuilder};
use std::time::Duration;

/// Name of the secondary session-identifier header.
pub const SESSION_TOKEN_HEADER: &str = "x-session-token";

/// Insert the credential pair into a header map.
///
/// Uses `insert`, so applying the same credentials again replaces the
/// previous values instead of duplicating them; the headers always
/// reflect the record passed in last.
pub fn apply_credentials(headers: &mut header::HeaderMap, credentials: &CredentialRecord) {
    let bearer = format!("Bearer {}", credentials.access_token);
    match header::HeaderValue::from_str(&bearer) {
        Ok(value) => {
            headers.insert(header::AUTHORIZATION, value);
        }
        Err(_) => tracing::warn!("access token is not a valid header value, skipping"),
    }
    match header::HeaderValue::from_str(&credentials.session_token) {
        Ok(value) => {
            headers.insert(SESSION_TOKEN_HEADER, value);
        }
        Err(_) => tracing::warn!("session token is not a valid header value, skipping"),
    }
}

/// Client for public endpoints that don't require credentials
#[derive(Clone)]
pub struct PublicApiClient {
    client: Client,
    base_url: String,
}

/// Client for endpoints that expect the stored credential pair
#[derive(Clone)]
pub struct AuthorizedApiClient {
    client: Client,
    base_url: String,
    credentials: CredentialRecord,
}

impl PublicApiClient {
    /// Create a new public client
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::new_with_timeout(base_url, None)
    }

    /// Create a new public client with optional timeout
    fn new_with_timeout(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, ClientError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        #[cfg(not(target_arch = "wasm32"))]
        let client = {
            let mut builder = ClientBuilder::new().user_agent("cliniq-client/0.1.0");
            if let Some(timeout) = timeout {
                builder = builder.timeout(timeout);
            }
            builder.build()?
        };

        #[cfg(target_arch = "wasm32")]
        let client = {
            let _ = timeout; // Timeouts not supported on WASM
            ClientBuilder::new()
                .user_agent("cliniq-client/0.1.0")
                .build()?
        };

        Ok(Self { client, base_url })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder without credentials
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url)
    }

    /// Execute a request and handle common errors
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            Err(ClientError::from_status(status, message))
        }
    }

    /// Attach a credential pair to get an authorized client
    pub fn authorize(&self, credentials: CredentialRecord) -> AuthorizedApiClient {
        AuthorizedApiClient {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            credentials,
        }
    }
}

impl AuthorizedApiClient {
    /// Create a new authorized client
    pub fn new(
        base_url: impl Into<String>,
        credentials: CredentialRecord,
    ) -> Result<Self, ClientError> {
        Ok(PublicApiClient::new(base_url)?.authorize(credentials))
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder carrying the credential pair.
    ///
    /// Header attachment happens synchronously here, before the request
    /// leaves the process.
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut headers = header::HeaderMap::new();
        apply_credentials(&mut headers, &self.credentials);
        self.client.request(method, url).headers(headers)
    }

    /// Execute a request and handle common errors
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            Err(ClientError::from_status(status, message))
        }
    }

    /// Create a public client (useful for calling public endpoints)
    pub fn to_public(&self) -> PublicApiClient {
        PublicApiClient {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
        }
    }
}

/// Type-safe builder that creates the appropriate client type
pub struct TypedClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl TypedClientBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout: None,
        }
    }

    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    #[cfg(not(target_arch = "wasm32"))]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build a public client
    pub fn build_public(self) -> Result<PublicApiClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        PublicApiClient::new_with_timeout(base_url, self.timeout)
    }

    /// Build an authorized client
    pub fn build_authorized(
        self,
        credentials: CredentialRecord,
    ) -> Result<AuthorizedApiClient, ClientError> {
        Ok(self.build_public()?.authorize(credentials))
    }
}

impl Default for TypedClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
