// --- File: crates/tourlink_common/src/lib.rs ---

// Declare modules within this crate
pub mod error; // Error handling
pub mod http; // HTTP utilities
pub mod logging; // Logging utilities
pub mod services; // Service abstractions

// Re-export error types and utilities for easier access
pub use error::{external_service_error, validation_error, HttpStatusCode, TourlinkError};

// Re-export HTTP utilities for easier access
pub use http::{
    client::{create_client, HTTP_CLIENT},
    IntoHttpResponse,
};

// Re-export service abstractions for easier access
pub use services::{
    BoxFuture, BoxedError, CacheInvalidator, HttpCacheInvalidator, NoopCacheInvalidator,
    RecordingCacheInvalidator,
};
