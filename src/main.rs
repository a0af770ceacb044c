mod config;
mod gemini;
mod models;
mod request_id;
mod router;
mod state;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use config::Config;
use gemini::GeminiClient;
use router::{chat, index};
use state::AppState;
use std::str::FromStr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{Level, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Pick up a local .env before reading the environment
    dotenv::dotenv().ok();

    let config = Config::from_env()?;

    // Parse log level
    let log_level = Level::from_str(&config.log_level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {}. Using INFO level.", config.log_level);
        Level::INFO
    });

    // Initialize logging
    tracing_subscriber::fmt().with_max_level(log_level).init();

    // Create a reqwest client shared by all requests
    let http_client = Arc::new(reqwest::Client::new());

    // Create the Gemini client
    let gemini = Arc::new(GeminiClient::new(http_client, &config));

    let app_state = AppState { gemini };

    // Create router
    let app = Router::new()
        .route("/", get(index))
        .route("/api/chat", post(chat))
        .layer(DefaultBodyLimit::max(router::MAX_BODY_BYTES))
        .layer(axum::middleware::from_fn(request_id::inject_request_id))
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let bind_address = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("Server started on http://{}", bind_address);

    axum::serve(listener, app).await?;
    Ok(())
}
