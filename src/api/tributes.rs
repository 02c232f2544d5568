//! Tribute API endpoints

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::api::{responses, AppState};
use crate::models::CreateTributeInput;

/// List approved tributes
pub async fn list_tributes(State(state): State<AppState>) -> impl IntoResponse {
    match state.store.tributes.get_all(true).await {
        Ok(tributes) => Json(tributes).into_response(),
        Err(e) => {
            tracing::error!("Error fetching tributes: {}", e);
            responses::internal_error("Failed to fetch tributes")
        }
    }
}

/// Submit a tribute into the moderation queue
pub async fn create_tribute(
    State(state): State<AppState>,
    Json(input): Json<CreateTributeInput>,
) -> impl IntoResponse {
    if let Err(errors) = input.validate() {
        return responses::validation_failure(errors);
    }

    match state.store.tributes.insert(input).await {
        Ok(tribute) => (StatusCode::CREATED, Json(tribute)).into_response(),
        Err(e) => {
            tracing::error!("Error creating tribute: {}", e);
            responses::internal_error("Failed to create tribute")
        }
    }
}
