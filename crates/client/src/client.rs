//! The authenticated request client.
//!
//! Every call goes through [`ApiClient::dispatch`]: the bearer token held by
//! the client is attached, a missing token triggers one silent refresh before
//! the request is sent, and a 401 triggers one refresh followed by exactly
//! one replay. The retry is a straight-line sequence rather than a loop or a
//! per-request flag, so at-most-one-retry holds by construction.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde::ser::Serialize;

use bibliotek_auth::{LoginCredentials, Role, Session};
use bibliotek_core::UserId;

use crate::config::ClientConfig;
use crate::endpoints;
use crate::envelope::ApiEnvelope;
use crate::error::ClientError;
use crate::session_store::SessionStore;

/// One outbound API call, kept in a rebuildable form so the 401 path can
/// replay it with a fresh token.
pub(crate) struct ApiRequest {
    method: Method,
    path: String,
    query: Vec<(&'static str, String)>,
    body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub(crate) fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub(crate) fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub(crate) fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub(crate) fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub(crate) fn query(mut self, params: Vec<(&'static str, String)>) -> Self {
        self.query = params;
        self
    }

    pub(crate) fn json(mut self, body: &impl Serialize) -> Result<Self, ClientError> {
        let value = serde_json::to_value(body).map_err(|e| ClientError::Parse(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }
}

/// Shape of the login payload's content field.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginContent {
    id: UserId,
    email: String,
    role: Role,
}

/// Authenticated client for the library-management API.
///
/// Owns the bearer token explicitly instead of mutating process-global
/// request defaults; the persisted session lives behind the injected
/// [`SessionStore`]. Both are overwritten wholesale — only one logical
/// session is ever active.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
    token: RwLock<Option<String>>,
    store: Arc<dyn SessionStore>,
}

impl ApiClient {
    pub fn new(config: ClientConfig, store: Arc<dyn SessionStore>) -> Result<Self, ClientError> {
        // Cookie store carries the HTTP-only refresh credential between
        // login and refresh calls.
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .cookie_store(true)
            .build()
            .map_err(|e| ClientError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url,
            timeout: config.timeout,
            token: RwLock::new(None),
            store,
        })
    }

    /// The bearer token currently attached to outbound calls, if any.
    pub fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    fn install_token(&self, token: String) {
        *self
            .token
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = Some(token);
    }

    fn clear_token(&self) {
        *self
            .token
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = None;
    }

    fn clear_local_session(&self) {
        self.clear_token();
        if let Err(e) = self.store.clear() {
            tracing::warn!(error = %e, "failed to clear persisted session");
        }
    }

    // ── authentication ──────────────────────────────────────────────────

    /// Log in and establish a session.
    ///
    /// On success the bearer token from the `Authorization` response header
    /// is installed for subsequent calls and the session record is persisted.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<Session, ClientError> {
        let req = ApiRequest::post(endpoints::LOGIN).json(credentials)?;
        let resp = self.send_raw(&req).await?;

        let status = resp.status();
        let token = bearer_token(resp.headers());
        let bytes = resp
            .bytes()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let envelope = match serde_json::from_slice::<ApiEnvelope<LoginContent>>(&bytes) {
            Ok(envelope) => envelope,
            Err(e) if status.is_success() => return Err(ClientError::Parse(e.to_string())),
            Err(_) => {
                return Err(ClientError::Api(
                    status.as_u16(),
                    String::from_utf8_lossy(&bytes).into_owned(),
                ));
            }
        };
        let content = envelope.into_content()?;

        let token = token
            .ok_or_else(|| ClientError::Parse("login response missing bearer token".to_string()))?;

        let session = Session::new(content.id, content.email, content.role);
        self.store
            .save(&session)
            .map_err(|e| ClientError::Store(e.to_string()))?;
        self.install_token(token);

        tracing::info!(user = %session.email, role = %session.role, "logged in");
        Ok(session)
    }

    /// Log out: tell the server to drop the refresh credential, then discard
    /// the token and the persisted session regardless of the outcome.
    pub async fn logout(&self) -> Result<(), ClientError> {
        let result = self.dispatch_unit(ApiRequest::post(endpoints::LOGOUT)).await;
        self.clear_local_session();
        tracing::info!("logged out");
        result
    }

    /// Startup flow: restore the persisted session, validating it with one
    /// refresh bounded by the configured timeout. On any failure the stale
    /// record is removed.
    pub async fn restore_session(&self) -> Result<Session, ClientError> {
        let saved = self
            .store
            .load()
            .map_err(|e| ClientError::Store(e.to_string()))?;
        let Some(session) = saved else {
            return Err(ClientError::RefreshFailed("no persisted session".to_string()));
        };

        match tokio::time::timeout(self.timeout, self.refresh()).await {
            Ok(Ok(())) => {
                tracing::info!(user = %session.email, "session restored");
                Ok(session)
            }
            // refresh() has already cleared local state.
            Ok(Err(e)) => Err(e),
            Err(_) => {
                self.clear_local_session();
                Err(ClientError::RefreshFailed(format!(
                    "refresh timed out after {:?}",
                    self.timeout
                )))
            }
        }
    }

    /// One silent refresh: credentialed POST with no body; the new bearer
    /// token arrives in the `Authorization` response header.
    ///
    /// Failure is terminal for the session: the token and the persisted
    /// record are dropped before the error is returned.
    async fn refresh(&self) -> Result<(), ClientError> {
        let req = ApiRequest::post(endpoints::REFRESH);

        let outcome = async {
            let resp = self
                .send_raw(&req)
                .await
                .map_err(|e| ClientError::RefreshFailed(e.to_string()))?;

            if !resp.status().is_success() {
                return Err(ClientError::RefreshFailed(format!(
                    "refresh returned {}",
                    resp.status()
                )));
            }

            bearer_token(resp.headers()).ok_or_else(|| {
                ClientError::RefreshFailed("refresh response missing bearer token".to_string())
            })
        }
        .await;

        match outcome {
            Ok(token) => {
                self.install_token(token);
                tracing::debug!("token refreshed");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "token refresh failed");
                self.clear_local_session();
                Err(e)
            }
        }
    }

    // ── request pipeline ────────────────────────────────────────────────

    /// Send a call and unwrap its envelope to the inner content.
    pub(crate) async fn dispatch<T: DeserializeOwned>(
        &self,
        req: ApiRequest,
    ) -> Result<T, ClientError> {
        let resp = self.execute(req).await?;
        self.unwrap_envelope(resp).await
    }

    /// Send a call whose content does not matter (delete, logout).
    pub(crate) async fn dispatch_unit(&self, req: ApiRequest) -> Result<(), ClientError> {
        let resp = self.execute(req).await?;
        let status = resp.status();
        let bytes = resp
            .bytes()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        match serde_json::from_slice::<ApiEnvelope<serde_json::Value>>(&bytes) {
            Ok(envelope) => envelope.expect_success(),
            Err(_) if status.is_success() => Ok(()),
            Err(_) => Err(ClientError::Api(
                status.as_u16(),
                String::from_utf8_lossy(&bytes).into_owned(),
            )),
        }
    }

    /// The token state machine for one call.
    ///
    /// Auth endpoints bypass everything. Otherwise: a missing token means one
    /// refresh before the send; a 401 afterwards means one refresh and one
    /// replay; a 401 on the replay ends the session.
    async fn execute(&self, req: ApiRequest) -> Result<reqwest::Response, ClientError> {
        if endpoints::is_auth(&req.path) {
            return self.send_raw(&req).await;
        }

        if self.token().is_none() {
            tracing::debug!(path = %req.path, "no token attached, refreshing before request");
            self.refresh().await?;
        }

        let resp = self.send_raw(&req).await?;
        if resp.status() != StatusCode::UNAUTHORIZED {
            return Ok(resp);
        }

        tracing::debug!(path = %req.path, "server rejected token, refreshing and replaying once");
        self.refresh().await?;

        let replay = self.send_raw(&req).await?;
        if replay.status() == StatusCode::UNAUTHORIZED {
            self.clear_local_session();
            return Err(ClientError::SessionExpired);
        }
        Ok(replay)
    }

    /// Build and send one HTTP request with the current token attached.
    async fn send_raw(&self, req: &ApiRequest) -> Result<reqwest::Response, ClientError> {
        let url = format!("{}{}", self.base_url, req.path);
        let mut builder = self.http.request(req.method.clone(), &url);

        if !req.query.is_empty() {
            builder = builder.query(&req.query);
        }
        if let Some(body) = &req.body {
            builder = builder.json(body);
        }
        if let Some(token) = self.token() {
            builder = builder.bearer_auth(token);
        }

        builder
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))
    }

    async fn unwrap_envelope<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        let bytes = resp
            .bytes()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        match serde_json::from_slice::<ApiEnvelope<T>>(&bytes) {
            Ok(envelope) => envelope.into_content(),
            Err(e) if status.is_success() => Err(ClientError::Parse(e.to_string())),
            Err(_) => Err(ClientError::Api(
                status.as_u16(),
                String::from_utf8_lossy(&bytes).into_owned(),
            )),
        }
    }
}

/// Extract the bearer token from an `Authorization` response header.
fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(reqwest::header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{AUTHORIZATION, HeaderValue};

    #[test]
    fn bearer_token_strips_the_scheme() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc123"));
        assert_eq!(bearer_token(&headers), Some("abc123".to_string()));
    }

    #[test]
    fn missing_header_yields_no_token() {
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }

    #[test]
    fn non_bearer_scheme_is_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcg=="));
        assert_eq!(bearer_token(&headers), None);
    }

    #[test]
    fn blank_token_is_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer   "));
        assert_eq!(bearer_token(&headers), None);
    }
}
