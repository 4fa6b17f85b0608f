mod analysis;
mod checklist;
mod config;
mod errors;
mod extraction;
mod llm_client;
mod routes;
mod scoring;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::Analyzer;
use crate::config::Config;
use crate::extraction::LopdfBackend;
use crate::llm_client::{AnalysisService, ChatClient};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ResumeAI API v{}", env!("CARGO_PKG_VERSION"));

    // Compile detector patterns up front
    checklist::warm_up();

    let chat = ChatClient::new(
        config.analysis_api_url.clone(),
        config.analysis_api_key.clone(),
        Duration::from_secs(config.analysis_timeout_secs),
    )?;
    let readiness = chat.readiness().await;
    if readiness.is_ready() {
        info!(
            "Analysis service configured (url: {}, model: {})",
            config.analysis_api_url, config.analysis_model
        );
    } else {
        warn!("Analysis service not ready: {readiness:?}. Runs will return checklist-only reports");
    }

    let analyzer = Analyzer::new(
        Arc::new(LopdfBackend),
        Arc::new(chat),
        config.analysis_model.clone(),
    );

    let state = AppState {
        analyzer,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
