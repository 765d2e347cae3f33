// --- File: crates/tourlink_nav/src/lib.rs ---

pub mod doc;
pub mod handlers;
pub mod logic;
pub mod notifications;
pub mod routes;

// Re-export for the main backend
pub use logic::{links_for_role, resolve_nav, NavLink, RenderedNavLink, Role};
pub use routes::routes;
