//! Axum route handlers for the bias document.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::BiasApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AddBiasRequest {
    pub bias: String,
}

#[derive(Debug, Serialize)]
pub struct AddBiasResponse {
    pub success: bool,
    pub message: String,
}

/// POST /add-bias
pub async fn handle_add_bias(
    State(state): State<AppState>,
    Json(request): Json<AddBiasRequest>,
) -> Result<Json<AddBiasResponse>, BiasApiError> {
    state
        .bias
        .append_entry(&request.bias)
        .await
        .map_err(BiasApiError)?;

    Ok(Json(AddBiasResponse {
        success: true,
        message: "Bias added successfully".to_string(),
    }))
}
