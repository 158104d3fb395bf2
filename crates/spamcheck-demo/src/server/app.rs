use crate::config::DemoConfig;
use crate::server::{routes, static_files};
use crate::state::AppState;
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Build the Axum application
pub fn build_app(state: AppState, port: u16) -> Router {
    // The form is served same-origin; CORS only admits local tooling.
    let origins: Vec<HeaderValue> = ["localhost", "127.0.0.1"]
        .iter()
        .filter_map(|host| format!("http://{}:{}", host, port).parse().ok())
        .collect();
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/health", get(routes::health))
        .route("/models", get(routes::list_models))
        .route("/ui", get(routes::get_ui))
        .route("/predict", post(routes::predict));

    Router::new()
        .nest("/api", api_routes)
        .fallback(static_files::serve_static)
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}

/// Load models, then serve until the process is stopped
pub async fn run_server(config: DemoConfig, addr: SocketAddr) -> anyhow::Result<()> {
    let state = AppState::from_config(&config)?;
    let app = build_app(state, addr.port());

    tracing::info!("Starting spamcheck demo server on {}", addr);
    tracing::info!("Open http://{} in your browser", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
