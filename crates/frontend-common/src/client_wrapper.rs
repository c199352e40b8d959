//! Wrapped client that injects stored credentials and watches for
//! session invalidation.

use crate::client::create_client;
use crate::session::interceptors;
use cliniq_http::client::error::ClientError;
use cliniq_http::client::PublicApiClient;
use cliniq_http::types::SessionStatusResponse;

/// API client that runs every call through the session interceptors.
///
/// The request phase reads the credential store in a single synchronous
/// step while the request is built; the response phase inspects every
/// failure and fires the forced-logout guard when the server has
/// invalidated the session. Other errors pass through to the caller.
#[derive(Clone)]
pub struct SessionApiClient {
    inner: PublicApiClient,
}

impl SessionApiClient {
    /// Create a wrapped client over the shared base client
    pub fn new() -> Result<Self, ClientError> {
        Ok(Self {
            inner: create_client()?,
        })
    }

    /// Create a request builder, authorized when credentials are stored
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        match interceptors::current_credentials() {
            Some(credentials) => self.inner.authorize(credentials).request(method, path),
            None => self.inner.request(method, path),
        }
    }

    /// Execute a request and route invalidation errors to the guard
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        match self.inner.execute(request).await {
            Ok(result) => Ok(result),
            Err(error) => {
                if error.is_session_invalid() {
                    interceptors::trigger_session_invalid();
                }
                Err(error)
            }
        }
    }

    /// Fetch session metadata for the status display
    pub async fn session_status(&self) -> Result<SessionStatusResponse, ClientError> {
        let request = self.request(reqwest::Method::GET, "/user/session-status");
        self.execute(request).await
    }
}
