// --- File: crates/tourlink_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

// --- Database Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseConfig {
    pub url: String, // e.g. DATABASE_URL loaded via TOURLINK__DATABASE__URL or DATABASE_URL
}

// --- Identity Provider Config ---
// Holds the non-secret part of the identity provider setup. The service api
// key is loaded directly from the AUTH_API_KEY env var, never from files.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AuthConfig {
    /// Base URL of the identity provider, e.g. `https://xyz.example.co`.
    pub base_url: String,
    /// Name of the cookie carrying the access token when no
    /// `Authorization` header is present.
    #[serde(default = "default_session_cookie")]
    pub session_cookie: String,
}

fn default_session_cookie() -> String {
    "tl-access-token".to_string()
}

// --- Page Cache Config ---
// Points at the frontend's on-demand revalidation endpoint. The shared
// revalidation secret comes from the REVALIDATE_SECRET env var.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CacheConfig {
    pub revalidate_url: String, // Mandatory
}

// --- Open Data Config (diagnostic tools only) ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct OpenDataConfig {
    pub base_url: String,
    // Service key loaded directly from env var: OPEN_DATA_SERVICE_KEY
}

// --- Top Level Application Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default = "default_true")]
    pub use_bookings: bool,
    #[serde(default = "default_true")]
    pub use_nav: bool,
    pub server: ServerConfig,
    pub database: Option<DatabaseConfig>,
    pub auth: Option<AuthConfig>,
    pub cache: Option<CacheConfig>,
    pub open_data: Option<OpenDataConfig>,
}

fn default_true() -> bool {
    true
}
