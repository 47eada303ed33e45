pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::{ServeDir, ServeFile};

use crate::analysis::handlers as analysis;
use crate::bias::handlers as bias;
use crate::state::AppState;

/// Page served at `/`, looked up inside `STATIC_DIR`.
pub const INDEX_PAGE: &str = "disdain.html";

pub fn build_router(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();

    Router::new()
        .route("/health", get(health::health_handler))
        // Single-aspect analyses (abstract text only)
        .route("/analyze-language", post(analysis::handle_analyze_language))
        .route("/reveal-concepts", post(analysis::handle_reveal_concepts))
        .route(
            "/analyze-experiments",
            post(analysis::handle_analyze_experiments),
        )
        .route(
            "/rewrite-sarcastically",
            post(analysis::handle_rewrite_sarcastically),
        )
        // Resolving endpoints (text or arXiv link)
        .route("/go-crazy", post(analysis::handle_go_crazy))
        .route("/analyze", post(analysis::handle_analyze))
        // Bias document
        .route("/add-bias", post(bias::handle_add_bias))
        // Browser client
        .route_service("/", ServeFile::new(static_dir.join(INDEX_PAGE)))
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state)
}
