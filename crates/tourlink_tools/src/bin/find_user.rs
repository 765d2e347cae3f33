//! Manual profile lookup against the configured database.
//!
//! Usage: `find_user <name fragment>` — case-insensitive substring search
//! over display names, results printed as JSON. Diagnostic only.

use tourlink_config::load_config;
use tourlink_db::{DbClient, ProfileRepository, SqlProfileRepository};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tourlink_common::logging::init();

    let fragment = std::env::args()
        .nth(1)
        .ok_or("usage: find_user <name fragment>")?;

    let config = std::sync::Arc::new(load_config()?);
    let db_client = DbClient::new(&config).await?;
    let profiles = SqlProfileRepository::new(db_client);
    profiles.init_schema().await?;

    let matches = profiles.search_by_name(&fragment).await?;
    if matches.is_empty() {
        println!("No profiles matched '{fragment}'");
        return Ok(());
    }

    println!("{}", serde_json::to_string_pretty(&matches)?);
    Ok(())
}
