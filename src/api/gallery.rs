//! Gallery API endpoints

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::api::{responses, AppState};
use crate::models::CreateGalleryImageInput;

/// Optional year/category filter on the gallery
#[derive(Debug, Deserialize)]
pub struct GalleryFilter {
    pub year: Option<i32>,
    #[serde(rename = "type")]
    pub event_type: Option<String>,
}

/// List approved gallery images, optionally filtered by year and category
pub async fn list_gallery_images(
    State(state): State<AppState>,
    Query(filter): Query<GalleryFilter>,
) -> impl IntoResponse {
    let images = match (filter.year, filter.event_type.as_deref()) {
        (Some(year), Some(event_type)) => {
            state
                .store
                .gallery
                .get_by_year_and_type(year, event_type, true)
                .await
        }
        (Some(year), None) => state.store.gallery.get_by_year(year, true).await,
        (None, Some(event_type)) => state.store.gallery.get_by_type(event_type, true).await,
        (None, None) => state.store.gallery.get_all(true).await,
    };

    match images {
        Ok(images) => Json(images).into_response(),
        Err(e) => {
            tracing::error!("Error fetching gallery images: {}", e);
            responses::internal_error("Failed to fetch gallery images")
        }
    }
}

/// Submit a gallery image into the moderation queue
pub async fn create_gallery_image(
    State(state): State<AppState>,
    Json(input): Json<CreateGalleryImageInput>,
) -> impl IntoResponse {
    if let Err(errors) = input.validate() {
        return responses::validation_failure(errors);
    }

    match state.store.gallery.insert(input).await {
        Ok(image) => (StatusCode::CREATED, Json(image)).into_response(),
        Err(e) => {
            tracing::error!("Error creating gallery image: {}", e);
            responses::internal_error("Failed to create gallery image")
        }
    }
}
