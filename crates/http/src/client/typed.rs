//! Type-safe API clients that enforce authentication requirements at compile time

use super::ClientError;
use jobboard_core::AppConfig;
use reqwest::{Client, ClientBuilder, header};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error};

const USER_AGENT: &str = concat!("jobboard-client/", env!("CARGO_PKG_VERSION"));

/// Client for public endpoints that don't require authentication
#[derive(Clone, Debug)]
pub struct PublicJobBoardClient {
    client: Client,
    base_url: String,
}

/// Client for endpoints that require a bearer token.
///
/// This is the session context: holding one means holding a credential, and
/// every request it builds carries `Authorization: Bearer <token>`.
#[derive(Clone)]
pub struct AuthenticatedJobBoardClient {
    client: Client,
    base_url: String,
    token: String,
}

impl std::fmt::Debug for AuthenticatedJobBoardClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthenticatedJobBoardClient")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .finish_non_exhaustive()
    }
}

fn build_http_client(timeout: Option<Duration>) -> Result<Client, ClientError> {
    #[cfg(not(target_arch = "wasm32"))]
    let client = {
        let mut builder = ClientBuilder::new().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        builder.build()?
    };

    #[cfg(target_arch = "wasm32")]
    let client = {
        let _ = timeout; // Timeouts not supported on WASM
        ClientBuilder::new().user_agent(USER_AGENT).build()?
    };

    Ok(client)
}

async fn execute_request<T: serde::de::DeserializeOwned>(
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

/// Like [`execute_request`], but any 2xx succeeds whatever its body.
///
/// JSON bodies are returned parsed, other text as a JSON string and an
/// empty body as `null`.
async fn execute_request_value(request: reqwest::RequestBuilder) -> Result<Value, ClientError> {
    let response = request.send().await?;
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    if status.is_success() {
        Ok(body_value(&body))
    } else {
        let message = if body.is_empty() { status.to_string() } else { body };
        Err(ClientError::from_status(status, message))
    }
}

fn body_value(body: &str) -> Value {
    if body.trim().is_empty() {
        Value::Null
    } else {
        serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
    }
}

impl PublicJobBoardClient {
    /// Create a new public client
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::new_with_timeout(base_url, None)
    }

    /// Create a public client from the application configuration
    pub fn from_config(config: &AppConfig) -> Result<Self, ClientError> {
        Self::new_with_timeout(config.api_url(), config.request_timeout())
    }

    fn new_with_timeout(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, ClientError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ClientError::Configuration("base_url is required".into()));
        }

        Ok(Self {
            client: build_http_client(timeout)?,
            base_url,
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder without authentication
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url)
    }

    /// Execute a request and handle common errors
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        execute_request(request).await
    }

    /// Execute a request whose successful body has no fixed shape
    pub async fn execute_value(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<Value, ClientError> {
        execute_request_value(request).await
    }

    /// Attach a bearer token, producing an authenticated client that shares
    /// this client's connection pool
    pub fn authenticate(&self, token: impl Into<String>) -> AuthenticatedJobBoardClient {
        AuthenticatedJobBoardClient {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            token: token.into(),
        }
    }
}

impl AuthenticatedJobBoardClient {
    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Bearer token this client sends
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Create a request builder with authentication
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client
            .request(method, url)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.token))
    }

    /// Execute a request and handle common errors.
    ///
    /// A 401 is logged and returned; the session is left as it is.
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let result = execute_request(request).await;
        if let Err(ClientError::AuthenticationFailed(details)) = &result {
            error!(
                details = %details,
                "Authentication error - token might be invalid or expired"
            );
        } else if let Err(err) = &result {
            debug!(error = %err, "Authenticated request failed");
        }
        result
    }

    /// Create a public client (useful for calling public endpoints)
    pub fn to_public(&self) -> PublicJobBoardClient {
        PublicJobBoardClient {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
        }
    }
}

/// Type-safe builder that creates the appropriate client type
#[derive(Default)]
pub struct TypedClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl TypedClientBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    #[cfg(not(target_arch = "wasm32"))]
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build a public client
    pub fn build_public(self) -> Result<PublicJobBoardClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        PublicJobBoardClient::new_with_timeout(base_url, self.timeout)
    }

    /// Build an authenticated client
    pub fn build_authenticated(
        self,
        token: impl Into<String>,
    ) -> Result<AuthenticatedJobBoardClient, ClientError> {
        Ok(self.build_public()?.authenticate(token))
    }
}
