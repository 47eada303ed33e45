mod analysis;
mod bias;
mod config;
mod errors;
mod llm_client;
mod paper;
mod routes;
mod state;
#[cfg(test)]
mod test_support;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::bias::{BiasStore, FileBiasStore, InMemoryBiasStore};
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::paper::extract::AbstractExtractor;
use crate::paper::resolver::AbstractResolver;
use crate::paper::source::HttpPdfSource;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing LLM_API_KEY)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Disdain API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = LlmClient::new(&config);
    info!("LLM client initialized (model: {})", llm.model());

    // Initialize abstract resolver (PDF fetch + extraction heuristics)
    let resolver = AbstractResolver::new(
        Arc::new(HttpPdfSource::new(reqwest::Client::new())),
        AbstractExtractor::new()?,
    );

    // Bias document lives on disk and is rewritten in full on each append
    let bias: Arc<dyn BiasStore> = match &config.bias_file {
        Some(path) => {
            info!("Bias document: {}", path.display());
            Arc::new(FileBiasStore::new(path))
        }
        None => {
            warn!("BIAS_FILE is empty, keeping the bias document in memory");
            Arc::new(InMemoryBiasStore::new(String::new()))
        }
    };

    // Build app state
    let state = AppState {
        llm: Arc::new(llm),
        bias,
        resolver,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
