use analysis::{
    AnalysisError,
    dto::analyze::{AnalyzeRequest, AnalyzeResponse},
};
use axum::{Json, extract::State, extract::rejection::JsonRejection};

use crate::error::WebResult;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    post,
    path = "/api/analyze",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Model analysis of the submitted rounds", body = AnalyzeResponse),
        (status = 400, description = "Missing prompt or rounds array"),
        (status = 500, description = "Generation failed")
    ),
    tag = "analysis"
)]
pub async fn analyze_rounds(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> WebResult<Json<AnalyzeResponse>> {
    let Json(payload) = payload.map_err(|e| AnalysisError::Validation(e.body_text()))?;
    let input = payload.into_input()?;

    let response = services::analyze_rounds(state.generator.as_ref(), &input).await?;

    Ok(Json(AnalyzeResponse { response }))
}
