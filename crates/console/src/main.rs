use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use tracing::info;

use client::{ApiClient, StatsSession};
use domain::models::DateWindow;

mod config;
mod logging;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = config::Config::load()?;

    logging::init_logging(&config.logging);

    info!(
        "Starting Traffic Buddy stats console v{}",
        env!("CARGO_PKG_VERSION")
    );

    let api = ApiClient::new(
        &config.backend.base_url,
        Duration::from_secs(config.backend.request_timeout_secs),
    )?;

    let session = StatsSession::new(
        api,
        config.stats.roster(),
        config.backend.page_size,
        Duration::from_secs(config.backend.drain_timeout_secs),
    );

    let window = DateWindow::last_days(Utc::now().date_naive(), config.stats.window_days);
    info!(
        start = %window.start,
        end = %window.end,
        division = ?config.stats.division,
        "Refreshing dashboard statistics"
    );

    let stats = session
        .refresh(config.stats.division.as_deref(), &window)
        .await?;

    info!(
        total = stats.total,
        divisions = stats.by_division.len(),
        "Refresh complete"
    );

    println!("{}", serde_json::to_string_pretty(&stats)?);

    Ok(())
}
