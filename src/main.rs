mod cache;
mod config;
mod error;
mod manager;
mod routes;
mod state;
#[cfg(test)]
mod testutil;
mod upstream;

use std::sync::Arc;

use axum::Extension;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::cache::TtlCache;
use crate::config::Config;
use crate::manager::RoomManager;
use crate::state::{SharedManager, SharedSource};
use crate::upstream::RestRoomSource;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("game_server=debug,tower_http=info")),
        )
        .init();

    let cfg = Config::from_env()?;

    let cache = TtlCache::new(cfg.room_ttl);
    let source: SharedSource =
        Arc::new(RestRoomSource::new(&cfg.upstream_base, cfg.upstream_timeout)?);
    let manager: SharedManager = Arc::new(RoomManager::new(cache.clone(), source.clone()));

    if !cfg.cache_sweep.is_zero() {
        tokio::spawn(cache::sweep_task(cache, cfg.cache_sweep));  // 啟動清掃
    }

    let app = routes::router()
        .layer(Extension(manager))
        .layer(Extension(source))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!(addr = %cfg.bind_addr, "listening");
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
