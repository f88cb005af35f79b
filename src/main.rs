use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use urbanbrush_web::{app, cache, config::Config, db::LeadStore, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "urbanbrush_web=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;

    let store = match &config.database_url {
        Some(url) => LeadStore::connect(url)
            .await
            .context("Failed to connect to Postgres")?,
        None => {
            tracing::warn!("DATABASE_URL not set; leads and reservations are kept in memory");
            LeadStore::in_memory(config.availability_overrides.clone())
        }
    };

    let addr = config.bind_addr();
    let state = AppState::new(config, store);

    tokio::spawn(cache::start_cache_warmer(
        state.cache.clone(),
        state.store.clone(),
    ));

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Urban Brush listening on {}", addr);

    axum::serve(listener, app(state)).await?;
    Ok(())
}
