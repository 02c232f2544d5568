//! Family story API endpoints

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::api::{responses, AppState};
use crate::models::CreateFamilyStoryInput;

/// List approved family stories
pub async fn list_families(State(state): State<AppState>) -> impl IntoResponse {
    match state.store.families.get_all(true).await {
        Ok(families) => Json(families).into_response(),
        Err(e) => {
            tracing::error!("Error fetching family stories: {}", e);
            responses::internal_error("Failed to fetch family stories")
        }
    }
}

/// Submit a family story into the moderation queue
pub async fn create_family(
    State(state): State<AppState>,
    Json(input): Json<CreateFamilyStoryInput>,
) -> impl IntoResponse {
    if let Err(errors) = input.validate() {
        return responses::validation_failure(errors);
    }

    match state.store.families.insert(input).await {
        Ok(story) => (StatusCode::CREATED, Json(story)).into_response(),
        Err(e) => {
            tracing::error!("Error creating family story: {}", e);
            responses::internal_error("Failed to create family story")
        }
    }
}
