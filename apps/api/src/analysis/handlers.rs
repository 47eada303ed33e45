//! Axum route handlers for the Analysis API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{info_span, Instrument};
use uuid::Uuid;

use crate::analysis::aspect::AnalysisKind;
use crate::analysis::orchestrator::{analyze, analyze_aspect, go_crazy, rewrite_sarcastically};
use crate::analysis::pipeline::AnalysisResult;
use crate::analysis::style::Style;
use crate::errors::{ApiError, Summarize};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Body shared by every abstract-taking endpoint. `abstract` is a Rust keyword.
#[derive(Debug, Deserialize)]
pub struct AbstractRequest {
    #[serde(rename = "abstract")]
    pub abstract_text: String,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    #[serde(default)]
    pub style: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub analysis: String,
}

#[derive(Debug, Serialize)]
pub struct RevelationResponse {
    pub revelation: String,
}

#[derive(Debug, Serialize)]
pub struct RewriteResponse {
    pub rewrite: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /analyze-language
pub async fn handle_analyze_language(
    State(state): State<AppState>,
    Json(request): Json<AbstractRequest>,
) -> Result<Json<AnalysisResponse>, ApiError> {
    let analysis = analyze_aspect(
        state.llm.as_ref(),
        AnalysisKind::Language,
        &request.abstract_text,
    )
    .await
    .summarize("Failed to analyze language")?;
    Ok(Json(AnalysisResponse { analysis }))
}

/// POST /reveal-concepts
pub async fn handle_reveal_concepts(
    State(state): State<AppState>,
    Json(request): Json<AbstractRequest>,
) -> Result<Json<RevelationResponse>, ApiError> {
    let revelation = analyze_aspect(
        state.llm.as_ref(),
        AnalysisKind::Concepts,
        &request.abstract_text,
    )
    .await
    .summarize("Failed to reveal concepts")?;
    Ok(Json(RevelationResponse { revelation }))
}

/// POST /analyze-experiments
pub async fn handle_analyze_experiments(
    State(state): State<AppState>,
    Json(request): Json<AbstractRequest>,
) -> Result<Json<AnalysisResponse>, ApiError> {
    let analysis = analyze_aspect(
        state.llm.as_ref(),
        AnalysisKind::Experiments,
        &request.abstract_text,
    )
    .await
    .summarize("Failed to analyze experiments")?;
    Ok(Json(AnalysisResponse { analysis }))
}

/// POST /rewrite-sarcastically
pub async fn handle_rewrite_sarcastically(
    State(state): State<AppState>,
    Json(request): Json<AbstractRequest>,
) -> Result<Json<RewriteResponse>, ApiError> {
    let rewrite = rewrite_sarcastically(state.llm.as_ref(), &request.abstract_text)
        .await
        .summarize("Failed to rewrite abstract")?;
    Ok(Json(RewriteResponse { rewrite }))
}

/// POST /go-crazy
///
/// Accepts abstract text or an arXiv link.
pub async fn handle_go_crazy(
    State(state): State<AppState>,
    Json(request): Json<AbstractRequest>,
) -> Result<Json<RewriteResponse>, ApiError> {
    let rewrite = go_crazy(&state.resolver, state.llm.as_ref(), &request.abstract_text)
        .await
        .summarize("Failed to go crazy")?;
    Ok(Json(RewriteResponse { rewrite }))
}

/// POST /analyze
///
/// Full pipeline: resolve → bias → three parallel analyses → styled synthesis.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let style = Style::parse(request.style.as_deref());
    let span = info_span!("analyze", request_id = %Uuid::new_v4(), ?style);

    let result = analyze(
        &state.resolver,
        state.bias.as_ref(),
        state.llm.clone(),
        &request.abstract_text,
        style,
    )
    .instrument(span)
    .await
    .summarize("Failed to analyze abstract")?;

    Ok(Json(result))
}
