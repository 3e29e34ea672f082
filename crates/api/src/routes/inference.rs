//! Practice scoring endpoints.

use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use inference::{InferenceService, PracticeResponse, PracticeScorer, UncheckedPracticeRequest};

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<S: PracticeScorer> {
    pub inference: InferenceService<S>,
}

/// POST /inference/score — validate a practice submission and score it.
///
/// The body is decoded as JSON whatever its `Content-Type`; undecodable
/// bodies are rejected as schema violations.
#[tracing::instrument(skip_all)]
pub async fn score<S: PracticeScorer + 'static>(
    State(state): State<Arc<AppState<S>>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<PracticeResponse>, ApiError> {
    let body = body?;
    let unchecked: UncheckedPracticeRequest = serde_json::from_slice(&body).map_err(|err| {
        metrics::counter!("practice_submissions_rejected_total", "reason" => "decode")
            .increment(1);
        tracing::debug!(error = %err, "practice submission undecodable");
        err
    })?;
    let response = state.inference.submit(unchecked).await?;
    Ok(Json(response))
}
