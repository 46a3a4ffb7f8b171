use axum::extract::State;
use axum::response::{IntoResponse, Json};

use crate::error::Error;
use crate::server::state::AppState;
use crate::types::{PredictRequest, PredictResponse};

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    "AIFortune is running"
}

/// POST /api/predict - Run the full prediction pipeline for one address
pub async fn predict(
    State(state): State<AppState>,
    Json(request): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, Error> {
    let prediction = state
        .engine()
        .predict(&request.ca, request.coin.as_deref())
        .await?;

    Ok(Json(PredictResponse {
        ok: true,
        prediction,
    }))
}
