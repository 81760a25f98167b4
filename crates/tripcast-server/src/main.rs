//! Binary entrypoint for the tripcast HTTP server.
//!
//! Reads configuration from environment variables:
//! - `TRIPCAST_PORT`: Server listen port (default: "8000")

use tripcast_server::router::build_router;
use tripcast_server::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let port = std::env::var("TRIPCAST_PORT").unwrap_or_else(|_| "8000".to_string());

    let state = AppState::new();
    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    tracing::info!("tripcast server starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
