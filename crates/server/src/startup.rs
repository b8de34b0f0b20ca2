use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::http::HeaderValue;
use axum::Router;
use configs::{AppConfig, StorageBackend};
use dotenvy::dotenv;
use service::customer::{
    repo::seaorm::SeaOrmCustomerRepository,
    repository::{memory::InMemoryCustomerRepository, CustomerRepository},
    CustomerService,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::{info, warn};

use crate::{routes, state::ServerState};

/// Only `origin` may call the API from a browser; other origins get no
/// `access-control-allow-origin` header back.
pub fn build_cors(origin: &str) -> anyhow::Result<CorsLayer> {
    let origin = HeaderValue::from_str(origin.trim()).with_context(|| format!("invalid CORS origin {origin}"))?;
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin]))
        .allow_methods(Any)
        .allow_headers(Any))
}

/// Prefer config.toml, otherwise assemble configuration from env vars
pub fn load_config() -> anyhow::Result<AppConfig> {
    match AppConfig::load_and_validate() {
        Ok(cfg) => Ok(cfg),
        Err(e) => {
            warn!(error = %e, "config file unavailable, using environment");
            let mut cfg = AppConfig::from_env();
            cfg.normalize_and_validate()?;
            Ok(cfg)
        }
    }
}

fn bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.server.host, cfg.server.port).parse()?)
}

async fn build_repository(cfg: &AppConfig) -> anyhow::Result<Arc<dyn CustomerRepository>> {
    match cfg.storage.backend {
        StorageBackend::Postgres => {
            let db = models::db::connect_with_config(&cfg.database).await?;
            models::db::ensure_schema(&db).await?;
            Ok(Arc::new(SeaOrmCustomerRepository { db }))
        }
        StorageBackend::Memory => {
            warn!("using in-memory storage; data is lost on restart");
            Ok(Arc::new(InMemoryCustomerRepository::default()))
        }
    }
}

/// Wire repository, service and router for the given configuration.
pub async fn build_app(cfg: &AppConfig) -> anyhow::Result<Router> {
    let repo = build_repository(cfg).await?;
    let state = ServerState::new(CustomerService::new(repo));
    let cors = build_cors(&cfg.cors.allowed_origin)?;
    Ok(routes::build_router(state, cors))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

/// Public entry: build the app and run the HTTP server until Ctrl+C
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    let cfg = load_config()?;
    let app = build_app(&cfg).await?;

    let addr = bind_addr(&cfg)?;
    info!(%addr, backend = ?cfg.storage.backend, origin = %cfg.cors.allowed_origin, "starting customer api");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cors_rejects_unprintable_origin() {
        assert!(build_cors("http://localhost:8081").is_ok());
        assert!(build_cors("http://bad\norigin").is_err());
    }

    #[test]
    fn bind_addr_joins_host_and_port() {
        let cfg = AppConfig::default();
        assert_eq!(bind_addr(&cfg).unwrap(), "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
    }
}
