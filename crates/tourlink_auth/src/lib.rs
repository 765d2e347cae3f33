// --- File: crates/tourlink_auth/src/lib.rs ---

pub mod error;
pub mod session;

// Re-export for the backend and feature crates
pub use error::AuthError;
pub use session::{HttpSessionResolver, SessionResolver, StaticSessionResolver, UserIdentity};
