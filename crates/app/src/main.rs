use anyhow::Result;
use tracing::info;

use app::config::Config;
use app::logging::init_logging;
use persistence::{JsonFileAdapter, SettingsStore};

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::load()?;

    // Initialize logging
    init_logging(&config.logging);

    info!("Starting VBDA admin v{}", env!("CARGO_PKG_VERSION"));

    // Open storage and rehydrate persisted state
    let adapter = JsonFileAdapter::open(&config.storage.data_dir)?;
    let mut store = SettingsStore::new(adapter);
    store.load();

    let settings = store.settings();
    info!(
        sender = %settings.sender_name,
        sender_email = %settings.sender_email,
        auto_follow_up = settings.auto_follow_up_enabled,
        follow_up_delay_days = settings.follow_up_delay,
        "settings loaded"
    );
    info!(count = store.templates().len(), "templates loaded");
    for template in store.templates() {
        info!(id = template.id, name = %template.name, "template");
    }

    Ok(())
}
