//! Testimonial API endpoints

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::api::{responses, AppState};
use crate::models::CreateTestimonialInput;

/// List approved testimonials
pub async fn list_testimonials(State(state): State<AppState>) -> impl IntoResponse {
    match state.store.testimonials.get_all(true).await {
        Ok(testimonials) => Json(testimonials).into_response(),
        Err(e) => {
            tracing::error!("Error fetching testimonials: {}", e);
            responses::internal_error("Failed to fetch testimonials")
        }
    }
}

/// Submit a testimonial into the moderation queue
pub async fn create_testimonial(
    State(state): State<AppState>,
    Json(input): Json<CreateTestimonialInput>,
) -> impl IntoResponse {
    if let Err(errors) = input.validate() {
        return responses::validation_failure(errors);
    }

    match state.store.testimonials.insert(input).await {
        Ok(testimonial) => (StatusCode::CREATED, Json(testimonial)).into_response(),
        Err(e) => {
            tracing::error!("Error creating testimonial: {}", e);
            responses::internal_error("Failed to create testimonial")
        }
    }
}
