//! JSON static host
//!
//! Serves the Trunk-built WASM frontend. Paths that are not files on disk
//! (`/login`, `/register?…`, `/dashboard`) get `index.html` so the client
//! router can take over after a reload or a deep link.

mod config;
mod handlers;

use axum::{Router, routing::get};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::HostConfig;
use crate::handlers::health_check;

/// Build the host router
fn router(config: &HostConfig) -> Router {
    let frontend = ServeDir::new(&config.static_dir).fallback(ServeFile::new(config.index_file()));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .fallback_service(frontend)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    let config = HostConfig::from_env()?;
    if !config.index_file().is_file() {
        tracing::warn!("⚠ {} not found", config.index_file().display());
        tracing::warn!("  Build the frontend first: trunk build --release crates/jastip-web/index.html");
    }

    let app = router(&config);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;

    tracing::info!("🚀 JSON frontend on http://{}", config.bind_addr);
    tracing::info!("  Serving {}", config.static_dir.display());
    tracing::info!("  GET /health - Health check");

    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;

    const INDEX: &str = "<!DOCTYPE html><html><body></body></html>";

    fn static_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("jastip-server-{name}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("index.html"), INDEX).unwrap();
        std::fs::write(dir.join("style.css"), "body { margin: 0; }").unwrap();
        dir
    }

    fn config(name: &str) -> HostConfig {
        let dir = static_dir(name);
        HostConfig::from_values(None, dir.to_str()).unwrap()
    }

    async fn get_body(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_body(router(&config("health")), "/health").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn test_client_routes_fall_back_to_index() {
        let config = config("fallback");
        for uri in ["/login", "/register", "/login?registered=true", "/dashboard"] {
            let (status, body) = get_body(router(&config), uri).await;
            assert_eq!(status, StatusCode::OK, "uri: {uri}");
            assert_eq!(body, INDEX, "uri: {uri}");
        }
    }

    #[tokio::test]
    async fn test_assets_are_served() {
        let (status, body) = get_body(router(&config("assets")), "/style.css").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("margin"));
    }
}
