//! Analysis endpoint.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use csvsight::AnalysisResult;

use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Maximum accepted CSV payload, in bytes. Matches the client-side
/// admissibility limit; re-checked here because client checks are
/// bypassable.
const MAX_CSV_BYTES: usize = 3 * 1024 * 1024;

/// Analysis request: the FULL original CSV text plus the original
/// (unsanitized) file name. Prompt-side truncation and sanitization
/// happen inside the pipeline, not here.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(rename = "csvText", default)]
    pub csv_text: String,

    #[serde(rename = "fileName", default)]
    pub file_name: String,
}

/// Success envelope.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub result: AnalysisResult,
}

/// POST /api/analyze
///
/// Re-validates the payload independently of any client-side checks,
/// then runs the pipeline. Input problems map to 400; provider and
/// reply-shape failures map to 500.
pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    if request.csv_text.is_empty() || request.file_name.is_empty() {
        return Err(ApiError::BadRequest(
            "Missing csvText or fileName".to_string(),
        ));
    }

    if request.csv_text.len() > MAX_CSV_BYTES {
        return Err(ApiError::BadRequest("File must be 3MB or less.".to_string()));
    }

    if !request.file_name.to_lowercase().ends_with(".csv") {
        return Err(ApiError::BadRequest("Please upload a CSV file.".to_string()));
    }

    // The provider client blocks; keep it off the async workers. If
    // the client disconnects, the dropped future abandons the result
    // and nothing is left behind.
    let pipeline = state.pipeline.clone();
    let result = tokio::task::spawn_blocking(move || {
        pipeline.analyze_text(&request.csv_text, &request.file_name)
    })
    .await
    .map_err(|e| ApiError::Internal(format!("Analysis task failed: {}", e)))??;

    Ok(Json(AnalyzeResponse {
        success: true,
        result,
    }))
}
