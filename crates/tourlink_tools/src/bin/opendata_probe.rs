//! One-off probe against the public startup-support open-data API.
//!
//! Fetches a single row as JSON and prints the raw response, to check
//! whether the service key works and what shape the payload has. The
//! service key comes from the `OPEN_DATA_SERVICE_KEY` env var; the probe
//! refuses to run without it.
//!
//! Diagnostic only — shares no code with the booking handlers.

use tourlink_common::HTTP_CLIENT;
use tourlink_config::{ensure_dotenv_loaded, load_config};
use tracing::warn;

const DEFAULT_BASE_URL: &str =
    "https://apis.data.go.kr/1160100/service/GetKStartupService/getStartupSupport";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    ensure_dotenv_loaded();
    tourlink_common::logging::init();

    let service_key = std::env::var("OPEN_DATA_SERVICE_KEY")
        .map_err(|_| "OPEN_DATA_SERVICE_KEY is not set; refusing to embed a key in source")?;

    let base_url = match load_config() {
        Ok(config) => config
            .open_data
            .map(|c| c.base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        Err(e) => {
            warn!("Config load failed ({}); using the default endpoint", e);
            DEFAULT_BASE_URL.to_string()
        }
    };

    let response = HTTP_CLIENT
        .get(&base_url)
        .query(&[
            ("serviceKey", service_key.as_str()),
            ("resultType", "json"),
            ("numOfRows", "1"),
            ("pageNo", "1"),
        ])
        .send()
        .await?;

    println!("Status: {}", response.status());
    let body = response.text().await?;

    // Pretty-print when the payload is JSON, raw otherwise (the API answers
    // with XML when it rejects the key).
    match serde_json::from_str::<serde_json::Value>(&body) {
        Ok(value) => println!("{}", serde_json::to_string_pretty(&value)?),
        Err(_) => println!("{body}"),
    }

    Ok(())
}
