//! Configuration loading for Tourlink.
//!
//! Layers, lowest priority first: `config/default.*`, an optional
//! `config/{RUN_ENV}.*`, then environment overrides with the `TOURLINK`
//! prefix and `__` separator (e.g. `TOURLINK__SERVER__PORT=9000`).
//! Secrets (api keys, revalidation secret) are read straight from their own
//! env vars by the crates that need them and never travel through files.

pub mod models;

pub use models::{
    AppConfig, AuthConfig, CacheConfig, DatabaseConfig, OpenDataConfig, ServerConfig,
};

use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use tracing::debug;

static DOTENV_LOADED: OnceCell<()> = OnceCell::new();

/// Load `.env` into the process environment exactly once.
///
/// Safe to call from every entry point (backend, tools, tests); only the
/// first call does any work. A missing `.env` file is not an error.
pub fn ensure_dotenv_loaded() {
    DOTENV_LOADED.get_or_init(|| {
        if dotenv::dotenv().is_ok() {
            debug!("Loaded environment overrides from .env");
        }
    });
}

/// Load the application configuration.
///
/// # Errors
///
/// Returns a [`ConfigError`] when a source file fails to parse or the merged
/// configuration does not deserialize into [`AppConfig`].
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".to_string());
    debug!("Loading configuration for RUN_ENV={}", run_env);

    let config = Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(File::with_name(&format!("config/{run_env}")).required(false))
        .add_source(Environment::with_prefix("TOURLINK").separator("__"))
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", 8086)?
        .build()?;

    config.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_config_files() {
        // No config/ directory exists in the crate's test cwd, so only the
        // built-in defaults and any TOURLINK__ env vars contribute.
        let config = load_config().expect("defaults should satisfy AppConfig");
        assert!(config.use_bookings);
        assert!(config.use_nav);
        assert!(!config.server.host.is_empty());
    }

    #[test]
    fn session_cookie_has_a_default() {
        let auth: AuthConfig =
            serde_json::from_str(r#"{"base_url":"https://id.example.test"}"#).unwrap();
        assert_eq!(auth.session_cookie, "tl-access-token");
    }
}
