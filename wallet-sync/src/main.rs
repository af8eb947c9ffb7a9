//! # Wallet Sync
//!
//! Entry point: load configuration, start logging, keep the page in sync
//! until it navigates away or the daemon goes down.

use parking_lot::RwLock;
use std::sync::Arc;
use tracing::info;

use wallet_sync::app::App;
use wallet_sync::config::SyncConfig;
use wallet_sync::debug;
use wallet_sync::services::api::ApiClient;
use wallet_sync::ui::{Document, SharedPage};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let _guard = debug::init();

    let config = SyncConfig::from_env()?;
    info!(
        api = %config.api_base_url,
        page = %config.page_path,
        timeout_ms = config.request_timeout.map(|t| t.as_millis() as u64),
        "Configuration loaded"
    );

    let api = Arc::new(ApiClient::from_config(&config));
    let page: SharedPage = Arc::new(RwLock::new(Document::dashboard(config.page_path.clone())));

    let mut app = App::new(page);
    let exit = app.run(api).await;

    let view = &app.state;
    info!(
        exit = ?exit,
        height = ?view.block_height,
        status = ?view.sync_status.as_ref().map(|s| s.text.as_str()),
        progress = ?view.downloader_progress,
        stale_ms = view
            .staleness(chrono::Utc::now())
            .map(|age| age.num_milliseconds()),
        "Wallet sync finished"
    );

    Ok(())
}
