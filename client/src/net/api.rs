//! REST clients for the remote admin API.
//!
//! Client-side (hydrate): [`GlooAdminApi`] issues browser `fetch` calls via
//! `gloo-net`. Native targets: [`ReqwestAdminApi`] does the same over
//! `reqwest`, used by server-side tooling and the end-to-end tests.
//!
//! DESIGN
//! ======
//! The session token is an explicit argument of every protected call. No
//! client keeps default headers between calls, so two overlapping requests
//! can never observe each other's auth state.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::{ApiError, decode_response};
use super::types::{CheckResponse, Credentials, Product, ProductsResponse, SignInResponse};
use crate::config::ApiConfig;

/// The three admin API calls the console makes.
#[async_trait::async_trait(?Send)]
pub trait AdminApi {
    /// `POST /api/user/check` with `Authorization: <token>`.
    async fn check_session(&self, token: &str) -> Result<CheckResponse, ApiError>;

    /// `GET /api/{path}/admin/products` with `Authorization: <token>`.
    async fn list_products(&self, token: &str) -> Result<Vec<Product>, ApiError>;

    /// `POST /admin/signin` with the credentials as JSON.
    async fn sign_in(&self, credentials: &Credentials) -> Result<SignInResponse, ApiError>;
}

/// A 2xx check response can still report `success: false`.
pub(crate) fn ensure_checked(resp: CheckResponse) -> Result<CheckResponse, ApiError> {
    if resp.success { Ok(resp) } else { Err(ApiError::Rejected(resp.message)) }
}

/// A signin response is only usable if it succeeded and carries a token.
pub(crate) fn ensure_signed_in(resp: SignInResponse) -> Result<SignInResponse, ApiError> {
    if resp.success && !resp.token.trim().is_empty() {
        Ok(resp)
    } else {
        Err(ApiError::Rejected(Some(resp.message).filter(|m| !m.is_empty())))
    }
}

// =============================================================================
// BROWSER (gloo-net)
// =============================================================================

/// Browser `fetch` client.
#[cfg(feature = "hydrate")]
#[derive(Clone, Debug)]
pub struct GlooAdminApi {
    config: ApiConfig,
}

#[cfg(feature = "hydrate")]
impl GlooAdminApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    async fn finish(resp: gloo_net::http::Response) -> Result<(u16, String), ApiError> {
        let status = resp.status();
        let body = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok((status, body))
    }
}

#[cfg(feature = "hydrate")]
#[async_trait::async_trait(?Send)]
impl AdminApi for GlooAdminApi {
    async fn check_session(&self, token: &str) -> Result<CheckResponse, ApiError> {
        let resp = gloo_net::http::Request::post(&self.config.check_url())
            .header("Authorization", token)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let (status, body) = Self::finish(resp).await?;
        decode_response::<CheckResponse>(status, &body).and_then(ensure_checked)
    }

    async fn list_products(&self, token: &str) -> Result<Vec<Product>, ApiError> {
        let resp = gloo_net::http::Request::get(&self.config.products_url())
            .header("Authorization", token)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let (status, body) = Self::finish(resp).await?;
        decode_response::<ProductsResponse>(status, &body).map(|r| r.products)
    }

    async fn sign_in(&self, credentials: &Credentials) -> Result<SignInResponse, ApiError> {
        let resp = gloo_net::http::Request::post(&self.config.signin_url())
            .json(credentials)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let (status, body) = Self::finish(resp).await?;
        decode_response::<SignInResponse>(status, &body).and_then(ensure_signed_in)
    }
}

// =============================================================================
// NATIVE (reqwest)
// =============================================================================

/// Native HTTP client. No request timeout is configured; a hung request
/// simply never resolves, matching the browser client.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Debug)]
pub struct ReqwestAdminApi {
    http: reqwest::Client,
    config: ApiConfig,
}

#[cfg(not(target_arch = "wasm32"))]
impl ReqwestAdminApi {
    /// Build a client with a fresh connection pool.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] if the TLS backend cannot be initialized.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(Self::with_client(http, config))
    }

    pub fn with_client(http: reqwest::Client, config: ApiConfig) -> Self {
        Self { http, config }
    }

    async fn finish(resp: reqwest::Response) -> Result<(u16, String), ApiError> {
        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok((status, body))
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait::async_trait(?Send)]
impl AdminApi for ReqwestAdminApi {
    async fn check_session(&self, token: &str) -> Result<CheckResponse, ApiError> {
        let resp = self
            .http
            .post(self.config.check_url())
            .header(reqwest::header::AUTHORIZATION, token)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let (status, body) = Self::finish(resp).await?;
        decode_response::<CheckResponse>(status, &body).and_then(ensure_checked)
    }

    async fn list_products(&self, token: &str) -> Result<Vec<Product>, ApiError> {
        let resp = self
            .http
            .get(self.config.products_url())
            .header(reqwest::header::AUTHORIZATION, token)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let (status, body) = Self::finish(resp).await?;
        decode_response::<ProductsResponse>(status, &body).map(|r| r.products)
    }

    async fn sign_in(&self, credentials: &Credentials) -> Result<SignInResponse, ApiError> {
        let resp = self
            .http
            .post(self.config.signin_url())
            .json(credentials)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let (status, body) = Self::finish(resp).await?;
        decode_response::<SignInResponse>(status, &body).and_then(ensure_signed_in)
    }
}
