//! Account and token endpoints

use super::{
    error::ClientError,
    typed::{AuthenticatedJobBoardClient, PublicJobBoardClient},
};
use crate::types::{Profile, RegisterRequest, TokenPair, TokenRequest};
use reqwest::Method;
use serde_json::Value;

/// Account endpoints for public client
impl PublicJobBoardClient {
    /// Create an account (public endpoint).
    ///
    /// Any 2xx is a success; the body is returned as the server sent it.
    pub async fn register(&self, request: &RegisterRequest) -> Result<Value, ClientError> {
        let req = self
            .request(Method::POST, "/accounts/register/")
            .json(request);
        self.execute_value(req).await
    }

    /// Exchange credentials for an access/refresh token pair (public endpoint)
    pub async fn obtain_token(&self, request: &TokenRequest) -> Result<TokenPair, ClientError> {
        let req = self.request(Method::POST, "/token/").json(request);
        self.execute(req).await
    }
}

/// Account endpoints for authenticated client
impl AuthenticatedJobBoardClient {
    /// Get current user info (requires authentication)
    pub async fn me(&self) -> Result<Profile, ClientError> {
        let request = self.request(Method::GET, "/accounts/me/");
        self.execute(request).await
    }
}
