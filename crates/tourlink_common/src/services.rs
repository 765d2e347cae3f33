// --- File: crates/tourlink_common/src/services.rs ---
//! Service abstractions for external collaborators.
//!
//! Trait definitions for the systems this application only ever talks to
//! through a public contract. They exist so handlers receive injected
//! request-scoped handles instead of reaching for ambient singletons, and so
//! tests can substitute doubles.

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;
use tracing::debug;

use crate::http::client::HTTP_CLIENT;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// A wrapper error type that implements std::error::Error for
/// Box<dyn std::error::Error + Send + Sync>
#[derive(Debug)]
pub struct BoxedError(pub Box<dyn StdError + Send + Sync>);

impl fmt::Display for BoxedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StdError for BoxedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

impl From<Box<dyn StdError + Send + Sync>> for BoxedError {
    fn from(err: Box<dyn StdError + Send + Sync>) -> Self {
        BoxedError(err)
    }
}

impl From<String> for BoxedError {
    fn from(message: String) -> Self {
        BoxedError(message.into())
    }
}

/// A trait for the page-cache invalidation collaborator.
///
/// After a committed mutation the handlers mark the dependent rendered views
/// stale. The paths are view routes (`/traveler/bookings`), not API routes.
pub trait CacheInvalidator: Send + Sync {
    /// Error type returned by invalidation operations.
    type Error: StdError + Send + Sync + 'static;

    /// Mark one cached view path stale.
    fn invalidate(&self, path: &str) -> BoxFuture<'_, (), Self::Error>;
}

/// Cache invalidator calling the frontend's on-demand revalidation endpoint.
///
/// Sends `POST {revalidate_url}?path=<view>` with the shared secret from the
/// `REVALIDATE_SECRET` env var. The frontend re-renders the view on its next
/// request.
pub struct HttpCacheInvalidator {
    revalidate_url: String,
    secret: Option<String>,
}

impl HttpCacheInvalidator {
    pub fn new(revalidate_url: impl Into<String>) -> Self {
        Self {
            revalidate_url: revalidate_url.into(),
            secret: std::env::var("REVALIDATE_SECRET").ok(),
        }
    }

    pub fn from_config(config: &tourlink_config::CacheConfig) -> Self {
        Self::new(config.revalidate_url.clone())
    }
}

impl CacheInvalidator for HttpCacheInvalidator {
    type Error = BoxedError;

    fn invalidate(&self, path: &str) -> BoxFuture<'_, (), Self::Error> {
        let path = path.to_owned();
        Box::pin(async move {
            let mut request = HTTP_CLIENT
                .post(&self.revalidate_url)
                .query(&[("path", path.as_str())]);
            if let Some(secret) = self.secret.as_deref() {
                request = request.query(&[("secret", secret)]);
            }

            let response = request
                .send()
                .await
                .map_err(|e| BoxedError(Box::new(e)))?;

            if !response.status().is_success() {
                return Err(BoxedError::from(format!(
                    "revalidation endpoint returned {} for path {path}",
                    response.status()
                )));
            }
            debug!("Invalidated cached view: {}", path);
            Ok(())
        })
    }
}

/// Invalidator that drops every request, for runs without a configured
/// revalidation endpoint. The invalidation is logged and forgotten.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCacheInvalidator;

impl CacheInvalidator for NoopCacheInvalidator {
    type Error = BoxedError;

    fn invalidate(&self, path: &str) -> BoxFuture<'_, (), Self::Error> {
        debug!("No revalidation endpoint configured; dropping invalidation of {}", path);
        Box::pin(async { Ok(()) })
    }
}

/// Test double that records every invalidated path.
///
/// Exported (not test-gated) so integration suites in other crates and the
/// keyless dev wiring can use it.
#[derive(Debug, Default)]
pub struct RecordingCacheInvalidator {
    paths: Mutex<Vec<String>>,
}

impl RecordingCacheInvalidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paths invalidated so far, in call order.
    pub fn invalidated(&self) -> Vec<String> {
        self.paths.lock().expect("invalidator lock poisoned").clone()
    }
}

impl CacheInvalidator for RecordingCacheInvalidator {
    type Error = BoxedError;

    fn invalidate(&self, path: &str) -> BoxFuture<'_, (), Self::Error> {
        let path = path.to_owned();
        Box::pin(async move {
            self.paths.lock().expect("invalidator lock poisoned").push(path);
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn recording_invalidator_keeps_call_order() {
        let invalidator = RecordingCacheInvalidator::new();
        invalidator.invalidate("/traveler/bookings").await.unwrap();
        invalidator.invalidate("/traveler/home").await.unwrap();
        assert_eq!(
            invalidator.invalidated(),
            vec!["/traveler/bookings".to_string(), "/traveler/home".to_string()]
        );
    }
}
