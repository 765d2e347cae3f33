//! Per-request session resolution.
//!
//! A session only exists for the duration of one request: credentials come
//! in on the request (bearer header or access-token cookie), the identity
//! provider answers with the principal, nothing is persisted.

use crate::error::AuthError;
use axum::http::header::{AUTHORIZATION, COOKIE};
use axum::http::HeaderMap;
use serde::Deserialize;
use tourlink_common::{BoxFuture, HTTP_CLIENT};
use tourlink_config::AuthConfig;
use tracing::{debug, warn};

/// The authenticated principal for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIdentity {
    pub id: String,
    pub email: Option<String>,
}

/// Resolves request credentials to a user identity, or to "none".
///
/// `Ok(None)` means the request carries no usable credentials; an `Err`
/// means the provider could not be consulted. Callers treat both as an
/// unauthenticated request — the distinction only matters for logging.
pub trait SessionResolver: Send + Sync {
    fn resolve(&self, headers: &HeaderMap) -> BoxFuture<'_, Option<UserIdentity>, AuthError>;
}

/// Session resolver backed by the identity provider's user-info endpoint.
///
/// Sends `GET {base_url}/auth/v1/user` with the caller's access token as a
/// bearer credential plus the service api key from the `AUTH_API_KEY` env
/// var. A non-success status resolves to no session, not to an error.
pub struct HttpSessionResolver {
    base_url: String,
    session_cookie: String,
    api_key: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProviderUser {
    id: String,
    email: Option<String>,
}

impl HttpSessionResolver {
    pub fn from_config(config: &AuthConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session_cookie: config.session_cookie.clone(),
            api_key: std::env::var("AUTH_API_KEY").ok(),
        }
    }

    /// Pull the access token out of the request: `Authorization: Bearer ...`
    /// wins, the session cookie is the fallback.
    fn extract_token(&self, headers: &HeaderMap) -> Option<String> {
        if let Some(value) = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()) {
            if let Some(token) = value.strip_prefix("Bearer ") {
                if !token.is_empty() {
                    return Some(token.to_string());
                }
            }
        }

        let cookies = headers.get(COOKIE).and_then(|v| v.to_str().ok())?;
        cookies.split(';').find_map(|pair| {
            let (name, value) = pair.trim().split_once('=')?;
            (name == self.session_cookie && !value.is_empty()).then(|| value.to_string())
        })
    }
}

impl SessionResolver for HttpSessionResolver {
    fn resolve(&self, headers: &HeaderMap) -> BoxFuture<'_, Option<UserIdentity>, AuthError> {
        let token = self.extract_token(headers);
        Box::pin(async move {
            let Some(token) = token else {
                debug!("Request carries no access token");
                return Ok(None);
            };

            let mut request = HTTP_CLIENT
                .get(format!("{}/auth/v1/user", self.base_url))
                .bearer_auth(&token);
            if let Some(api_key) = self.api_key.as_deref() {
                request = request.header("apikey", api_key);
            }

            let response = request.send().await?;
            if !response.status().is_success() {
                debug!(
                    "Identity provider rejected the access token: {}",
                    response.status()
                );
                return Ok(None);
            }

            let user: ProviderUser = response
                .json()
                .await
                .map_err(|e| AuthError::ProviderError(e.to_string()))?;

            Ok(Some(UserIdentity {
                id: user.id,
                email: user.email,
            }))
        })
    }
}

/// Resolver with a fixed answer, for tests and keyless dev runs.
#[derive(Debug, Clone, Default)]
pub struct StaticSessionResolver {
    identity: Option<UserIdentity>,
}

impl StaticSessionResolver {
    /// Every request resolves to the given identity.
    pub fn authenticated(identity: UserIdentity) -> Self {
        Self {
            identity: Some(identity),
        }
    }

    /// Every request resolves to no session.
    pub fn unauthenticated() -> Self {
        Self { identity: None }
    }
}

impl SessionResolver for StaticSessionResolver {
    fn resolve(&self, _headers: &HeaderMap) -> BoxFuture<'_, Option<UserIdentity>, AuthError> {
        if self.identity.is_none() {
            warn!("Static session resolver in use; all requests are unauthenticated");
        }
        let identity = self.identity.clone();
        Box::pin(async move { Ok(identity) })
    }
}
