mod error;
mod person;
mod search;

use axum::{routing::get, Json, Router};
use rolodex_common::types::ServiceInfo;
use rolodex_config::{init_tracing, AppConfig};
use rolodex_search::{EsClient, EsConfig};
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;

#[derive(Clone)]
pub struct AppState {
    pub client: EsClient,
}

// Reports liveness only; backend reachability is intentionally not probed.
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "healthy": "ok" }))
}

async fn info() -> Json<ServiceInfo> {
    Json(ServiceInfo::new("rolodex-api"))
}

fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/info", get(info))
        .merge(search::router())
        .merge(person::router())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[tokio::main]
async fn main() {
    init_tracing("info");

    let config = AppConfig::from_env().expect("failed to load config");
    tracing::info!(service = "rolodex-api", "starting");

    let es_config = EsConfig::from_env().expect("failed to resolve Elasticsearch endpoint");
    let client = EsClient::new(es_config).expect("failed to build Elasticsearch client");

    let state = AppState { client };
    let app = build_router(state);
    let addr: SocketAddr = config.bind_addr().parse().expect("invalid bind address");

    tracing::info!(%addr, "listening");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");
    axum::serve(listener, app).await.expect("server error");
}
