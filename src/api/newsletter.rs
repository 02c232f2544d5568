//! Newsletter API endpoints

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::api::{responses, AppState};
use crate::models::CreateNewsletterInput;
use crate::store::StoreError;

/// Subscribe an email to the newsletter
pub async fn subscribe(
    State(state): State<AppState>,
    Json(input): Json<CreateNewsletterInput>,
) -> impl IntoResponse {
    if let Err(errors) = input.validate() {
        return responses::validation_failure(errors);
    }

    match state.store.newsletter.insert(input).await {
        Ok(subscription) => (StatusCode::CREATED, Json(subscription)).into_response(),
        Err(e) => match e.downcast_ref::<StoreError>() {
            Some(StoreError::DuplicateEmail) => (
                StatusCode::CONFLICT,
                Json(serde_json::json!({ "message": "Email already subscribed" })),
            )
                .into_response(),
            None => {
                tracing::error!("Error creating newsletter subscription: {}", e);
                responses::internal_error("Failed to create newsletter subscription")
            }
        },
    }
}
