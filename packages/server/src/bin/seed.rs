//! One-shot destructive reseed of the demo dataset.
//!
//! Never runs automatically on server startup; invoke explicitly:
//! `cargo run --bin seed`

use tracing::{Level, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = server::config::AppConfig::load()?;
    let db = server::database::init_db(&config.database.url).await?;

    server::seed::run(&db).await?;

    info!("Database seeded successfully");
    Ok(())
}
