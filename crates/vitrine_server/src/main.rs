use anyhow::Result;
use std::sync::Arc;
use tracing::info;
use vitrine_core::init_telemetry;
use vitrine_database::{PostgresCatalog, create_pool, run_migrations};
use vitrine_server::{ApiState, ServerConfig, create_router, serve};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_telemetry().map_err(|e| anyhow::anyhow!("telemetry init failed: {e}"))?;

    let config = ServerConfig::from_env()?;
    info!(bind_addr = %config.bind_addr, "Starting vitrine catalog server");

    let pool = create_pool(&config.database_url)?;
    let migration_pool = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut conn = migration_pool.get()?;
        run_migrations(&mut conn)?;
        Ok::<_, anyhow::Error>(())
    })
    .await??;
    info!("Migrations up to date");

    let catalog = Arc::new(PostgresCatalog::new(pool));
    let state = ApiState::new(catalog);
    let router = create_router(state);

    serve(&config.bind_addr, router).await?;

    Ok(())
}
