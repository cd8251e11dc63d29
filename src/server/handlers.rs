use crate::core::anthropic::analyze;
use crate::server::error::ApiError;
use crate::server::types::{AnalyzeRequest, AppState};
use axum::Json;
use axum::extract::State;
use bytes::Bytes;
use serde_json::Value;
use std::sync::Arc;

// analysis handler: parse the body, gate on credentials, proxy to the model
pub async fn analyze_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let request: AnalyzeRequest =
        serde_json::from_slice(&body).map_err(|_| ApiError::InvalidBody)?;

    if state.api_key.is_empty() {
        return Err(ApiError::MissingApiKey);
    }

    tracing::info!(kind = %request.kind, bytes = request.content.len(), "analyzing");

    let result = analyze(&state, &request).await?;
    Ok(Json(result))
}

pub async fn not_found_handler() -> ApiError {
    ApiError::NotFound
}
