//! Timeline event API endpoints

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::api::{responses, AppState};

/// Optional year/category filter on the timeline
#[derive(Debug, Deserialize)]
pub struct EventFilter {
    pub year: Option<i32>,
    #[serde(rename = "type")]
    pub event_type: Option<String>,
}

/// List timeline events, optionally filtered by year and category
pub async fn list_events(
    State(state): State<AppState>,
    Query(filter): Query<EventFilter>,
) -> impl IntoResponse {
    let events = match (filter.year, filter.event_type.as_deref()) {
        (Some(year), Some(event_type)) => {
            state
                .store
                .events
                .get_by_year_and_type(year, event_type)
                .await
        }
        (Some(year), None) => state.store.events.get_by_year(year).await,
        (None, Some(event_type)) => state.store.events.get_by_type(event_type).await,
        (None, None) => state.store.events.get_all().await,
    };

    match events {
        Ok(events) => Json(events).into_response(),
        Err(e) => {
            tracing::error!("Error fetching events: {}", e);
            responses::internal_error("Failed to fetch events")
        }
    }
}
