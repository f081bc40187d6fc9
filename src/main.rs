//! Service entrypoint: config, logging, provider wiring, axum serve.

use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use indaia_planner::adapters::assistant::{GeminiConfig, GeminiProvider};
use indaia_planner::adapters::http::{api_router, cors_layer, AppState};
use indaia_planner::application::AssistantGateway;
use indaia_planner::config::AppConfig;
use indaia_planner::domain::planner::Planner;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.server.log_level.clone())),
        )
        .init();

    config.validate()?;

    let api_key = config
        .assistant
        .gemini_api_key
        .clone()
        .unwrap_or_default();
    let gemini = GeminiConfig::new(api_key)
        .with_model(config.assistant.model.clone())
        .with_base_url(config.assistant.base_url.clone())
        .with_timeout(config.assistant.timeout());
    let provider = Arc::new(GeminiProvider::new(gemini));

    let state = AppState::new(
        Planner::seeded(),
        AssistantGateway::new(provider).with_temperature(config.assistant.temperature),
        config.event.clone(),
    );

    let app = api_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.server))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )));

    let addr = config.server.socket_addr();
    tracing::info!(
        %addr,
        model = %config.assistant.model,
        production = config.is_production(),
        "starting indaia-planner"
    );

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
