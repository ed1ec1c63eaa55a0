//! # gallery — virtual art gallery console
//!
//! Composition root that wires the storage adapter into the gallery service
//! and runs the text menu.
//!
//! ## Responsibilities
//! - Load configuration and initialise logging (stderr, so the menu on stdout
//!   stays readable)
//! - Open the `SQLite` database once and run migrations
//! - Construct repository implementations and inject them into the service
//! - Run the console session on stdin/stdout
//! - Close the database exactly once, however the session ended
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

use anyhow::Context;
use gallery::config::Config;
use gallery::console::Console;
use gallery_adapter_storage_sqlite_sqlx::{
    Config as StorageConfig, SqliteArtworkRepository, SqliteFavoriteRepository,
};
use gallery_app::services::gallery_service::GalleryService;
use tracing_subscriber::EnvFilter;

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|err| {
        eprintln!("ignoring invalid log filter {filter:?}: {err}");
        EnvFilter::new("warn")
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;
    init_tracing(&config.logging.filter);

    // Database
    let db = StorageConfig {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await
    .with_context(|| format!("failed to open database {}", config.database_url()))?;
    let pool = db.pool().clone();
    tracing::info!(url = config.database_url(), "gallery database opened");

    // Service
    let service = GalleryService::new(
        SqliteArtworkRepository::new(pool.clone()),
        SqliteFavoriteRepository::new(pool),
    );

    // Console
    let stdin = std::io::stdin();
    let outcome = Console::new(&service, stdin.lock(), std::io::stdout())
        .run()
        .await;

    db.close().await;
    outcome.context("gallery session terminated")
}
