//! Logging utilities for the Tourlink application.
//!
//! Provides the single place where the tracing subscriber is configured.
//! Entry points (backend binary, diagnostic tools) call [`init`] once; crates
//! only ever use the `tracing` macros.

use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber at the default INFO level.
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initialize the tracing subscriber with a specific log level.
///
/// `RUST_LOG` still wins when set; the level argument only seeds the
/// `tourlink` directive. Calling this more than once is harmless — the
/// second initialization is ignored.
pub fn init_with_level(level: Level) {
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("tourlink={level}").parse().expect("valid directive"));

    let result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_file(true).with_line_number(true))
        .with(filter)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
}
