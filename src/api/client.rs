//! API client for the CarePortal authentication service.
//!
//! Three endpoints: register, login, and the protected "who am I" lookup.
//! All methods return typed [`ApiError`]s so the UI can distinguish bad
//! credentials, structured rejections, and an unreachable host.

use anyhow::Result;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::ApiError;

/// HTTP request timeout in seconds.
/// 30s allows for slow cold-started backends while failing fast enough for good UX.
const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Serialize)]
struct AuthRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Successful response from `POST /auth/login`
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    /// Some deployments echo the account email back; older ones do not.
    #[serde(default)]
    pub email: Option<String>,
}

/// Successful response from `GET /users/me`
#[derive(Debug, Deserialize)]
pub struct UserProfile {
    pub email: String,
}

/// API client for CarePortal.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a new API client against the given base URL (no trailing slash)
    pub fn new(base_url: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url,
            token: None,
        })
    }

    /// Set the bearer token for authenticated requests
    pub fn set_token(&mut self, token: String) {
        self.token = Some(token);
    }

    /// Drop the bearer token (after logout)
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    /// Create a new account. A 2xx response carries no fields we need.
    pub async fn register(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let url = format!("{}/auth/register", self.base_url);
        debug!(%url, "sending register request");

        let response = self
            .client
            .post(&url)
            .json(&AuthRequest { email, password })
            .send()
            .await
            .map_err(ApiError::transport)?;

        Self::check_response(response).await?;
        Ok(())
    }

    /// Exchange credentials for a bearer token
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let url = format!("{}/auth/login", self.base_url);
        debug!(%url, "sending login request");

        let response = self
            .client
            .post(&url)
            .json(&AuthRequest { email, password })
            .send()
            .await
            .map_err(ApiError::transport)?;

        let response = Self::check_response(response).await?;
        response
            .json::<LoginResponse>()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }

    /// Fetch the identity behind the current token. This is the lazy
    /// validation point: a stale persisted token is first detected here,
    /// as a 401.
    pub async fn me(&self) -> Result<UserProfile, ApiError> {
        let Some(ref token) = self.token else {
            return Err(ApiError::Unauthorized);
        };

        let url = format!("{}/users/me", self.base_url);
        debug!(%url, "fetching current user");

        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(ApiError::transport)?;

        let response = Self::check_response(response).await?;
        response
            .json::<UserProfile>()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }

    /// Check if response is successful, returning a typed error with the
    /// body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_login_response_with_email() {
        let json = r#"{"access_token": "abc123", "email": "alice@x.com"}"#;
        let resp: LoginResponse = serde_json::from_str(json).expect("valid login response");
        assert_eq!(resp.access_token, "abc123");
        assert_eq!(resp.email.as_deref(), Some("alice@x.com"));
    }

    #[test]
    fn test_parse_login_response_without_email() {
        // Older deployments return only the token (plus fields we ignore)
        let json = r#"{"message": "Login successful", "access_token": "abc123", "user_id": "u-1"}"#;
        let resp: LoginResponse = serde_json::from_str(json).expect("valid login response");
        assert_eq!(resp.access_token, "abc123");
        assert_eq!(resp.email, None);
    }

    #[test]
    fn test_parse_user_profile() {
        let json = r#"{"email": "alice@x.com", "user_id": "u-1"}"#;
        let profile: UserProfile = serde_json::from_str(json).expect("valid profile");
        assert_eq!(profile.email, "alice@x.com");
    }

    #[tokio::test]
    async fn test_me_without_token_is_unauthorized_without_network() {
        let client = ApiClient::new("http://127.0.0.1:1".to_string()).expect("client");
        let err = client.me().await.expect_err("must fail without a token");
        assert!(matches!(err, ApiError::Unauthorized));
    }
}
