// --- File: crates/tourlink_common/src/http/client.rs ---
//! Shared outbound HTTP client.
//!
//! reqwest clients hold a connection pool, so every crate making outbound
//! calls (identity provider, revalidation endpoint, diagnostic probes)
//! borrows this one static client instead of building its own.

use once_cell::sync::Lazy;
use reqwest::Client;
use std::time::Duration;

/// The process-wide outbound HTTP client.
pub static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(10))
        .build()
        .expect("failed to build shared HTTP client")
});

/// Build a dedicated client when the shared defaults do not fit
/// (e.g. a longer timeout for a one-off diagnostic probe).
pub fn create_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder().timeout(timeout).build()
}
