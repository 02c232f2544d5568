//! Participation request API endpoints

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::api::{responses, AppState};
use crate::models::CreateParticipationInput;

/// Submit a participation request
///
/// Requests have no public read; the moderation collaborator works the
/// queue directly against the store.
pub async fn create_participation(
    State(state): State<AppState>,
    Json(input): Json<CreateParticipationInput>,
) -> impl IntoResponse {
    if let Err(errors) = input.validate() {
        return responses::validation_failure(errors);
    }

    match state.store.participations.insert(input).await {
        Ok(request) => (StatusCode::CREATED, Json(request)).into_response(),
        Err(e) => {
            tracing::error!("Error creating participation request: {}", e);
            responses::internal_error("Failed to create participation request")
        }
    }
}
