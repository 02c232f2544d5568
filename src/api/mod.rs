//! API layer - HTTP handlers and routing
//!
//! One module per resource family:
//! - Timeline event endpoints (read-only)
//! - Testimonial endpoints
//! - Tribute endpoints
//! - Family story endpoints
//! - Gallery endpoints
//! - Participation request endpoint (submit-only)
//! - Newsletter endpoint (submit-only)
//!
//! Every read serves approved content only; there is no way to request
//! unapproved records through this surface.

pub mod events;
pub mod families;
pub mod gallery;
pub mod newsletter;
pub mod participation;
pub mod responses;
pub mod testimonials;
pub mod tributes;

use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::store::Store;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
}

/// Build the main API router
pub fn build_api_router() -> Router<AppState> {
    Router::new()
        .route("/events", get(events::list_events))
        .route("/depoimentos", get(testimonials::list_testimonials))
        .route("/depoimentos", post(testimonials::create_testimonial))
        .route("/homenagens", get(tributes::list_tributes))
        .route("/homenagens", post(tributes::create_tribute))
        .route("/familias", get(families::list_families))
        .route("/familias", post(families::create_family))
        .route("/gallery", get(gallery::list_gallery_images))
        .route("/gallery", post(gallery::create_gallery_image))
        .route("/participacoes", post(participation::create_participation))
        .route("/newsletter", post(newsletter::subscribe))
}

/// Build the complete router with middleware
pub fn build_router(state: AppState, cors_origin: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(cors_origin.parse::<HeaderValue>().unwrap())
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .nest("/api", build_api_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{seed, Store};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    async fn seeded_server() -> TestServer {
        let store = Store::in_memory();
        seed::populate(&store).await.unwrap();
        let app = build_router(AppState { store }, "http://localhost:3000");
        TestServer::new(app).unwrap()
    }

    #[tokio::test]
    async fn events_filter_by_year() {
        let server = seeded_server().await;

        let response = server.get("/api/events").await;
        response.assert_status_ok();
        let all: Value = response.json();
        assert_eq!(all.as_array().unwrap().len(), 10);

        let response = server.get("/api/events").add_query_param("year", 2015).await;
        response.assert_status_ok();
        let events: Value = response.json();
        let events = events.as_array().unwrap();
        assert_eq!(events.len(), 4);
        assert!(events.iter().all(|e| e["year"] == 2015));
    }

    #[tokio::test]
    async fn events_filter_by_year_and_type() {
        let server = seeded_server().await;

        let response = server
            .get("/api/events")
            .add_query_param("year", 2016)
            .add_query_param("type", "Social Teórica")
            .await;
        response.assert_status_ok();
        let events: Value = response.json();
        let events = events.as_array().unwrap();
        assert_eq!(events.len(), 2);
        assert!(events
            .iter()
            .all(|e| e["year"] == 2016 && e["eventType"] == "Social Teórica"));
    }

    #[tokio::test]
    async fn event_order_is_stable_across_calls() {
        let server = seeded_server().await;

        let first: Value = server.get("/api/events").await.json();
        let second: Value = server.get("/api/events").await.json();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn short_testimonial_is_rejected_with_field_detail() {
        let server = seeded_server().await;

        let response = server
            .post("/api/depoimentos")
            .json(&json!({ "content": "short" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: Value = response.json();
        assert_eq!(body["message"], "Invalid data");
        let errors = body["errors"].as_array().unwrap();
        assert!(errors.iter().any(|e| e["field"] == "content"
            && e["message"].as_str().unwrap().contains("at least 10")));
    }

    #[tokio::test]
    async fn accepted_testimonial_starts_unapproved_and_stays_hidden() {
        let server = seeded_server().await;

        let response = server
            .post("/api/depoimentos")
            .json(&json!({ "content": "A depth of ten chars!", "name": "Ana" }))
            .await;
        response.assert_status(StatusCode::CREATED);

        let created: Value = response.json();
        assert_eq!(created["approved"], false);
        assert_eq!(created["name"], "Ana");
        assert!(created["id"].as_i64().unwrap() > 0);
        // Optional fields come back as explicit nulls
        assert!(created["imageUrl"].is_null());
        assert!(created["year"].is_null());

        // Public read still shows only the two seeded testimonials
        let listed: Value = server.get("/api/depoimentos").await.json();
        let listed = listed.as_array().unwrap();
        assert_eq!(listed.len(), 2);
        assert!(listed.iter().all(|t| t["approved"] == true));
    }

    #[tokio::test]
    async fn tribute_submission_round_trip() {
        let server = seeded_server().await;

        let response = server
            .post("/api/homenagens")
            .json(&json!({ "name": "L", "content": "curto" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        let fields: Vec<_> = body["errors"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["field"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(fields, vec!["name", "content"]);

        let response = server
            .post("/api/homenagens")
            .json(&json!({
                "name": "Beatriz A.",
                "yearStart": 2015,
                "yearEnd": 2021,
                "content": "Sempre presente, sempre generosa."
            }))
            .await;
        response.assert_status(StatusCode::CREATED);
        let created: Value = response.json();
        assert_eq!(created["approved"], false);

        let listed: Value = server.get("/api/homenagens").await.json();
        assert_eq!(listed.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn family_story_requires_its_fields() {
        let server = seeded_server().await;

        let listed: Value = server.get("/api/familias").await.json();
        assert_eq!(listed.as_array().unwrap().len(), 2);

        let response = server
            .post("/api/familias")
            .json(&json!({
                "title": "Luiza & Marcos",
                "type": "Casal",
                "description": "Um reencontro improvável numa Festa Junina.",
                "year": 2019,
                "eventName": "FK Junina"
            }))
            .await;
        response.assert_status(StatusCode::CREATED);
        let created: Value = response.json();
        assert_eq!(created["type"], "Casal");
        assert_eq!(created["approved"], false);
    }

    #[tokio::test]
    async fn gallery_filters_only_cover_approved_images() {
        let server = seeded_server().await;

        let all: Value = server.get("/api/gallery").await.json();
        assert_eq!(all.as_array().unwrap().len(), 8);

        // A fresh submission joins the moderation queue, not the gallery
        let response = server
            .post("/api/gallery")
            .json(&json!({
                "imageUrl": "https://fotos.example/lounge.jpg",
                "year": 2016,
                "eventType": "Lounge"
            }))
            .await;
        response.assert_status(StatusCode::CREATED);

        let filtered: Value = server
            .get("/api/gallery")
            .add_query_param("year", 2016)
            .add_query_param("type", "Lounge")
            .await
            .json();
        let filtered = filtered.as_array().unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0]["approved"], true);
    }

    #[tokio::test]
    async fn gallery_rejects_unknown_category() {
        let server = seeded_server().await;

        let response = server
            .post("/api/gallery")
            .json(&json!({
                "imageUrl": "https://fotos.example/x.jpg",
                "year": 2016,
                "eventType": "Churrasco"
            }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert!(body["errors"]
            .as_array()
            .unwrap()
            .iter()
            .any(|e| e["field"] == "eventType"));
    }

    #[tokio::test]
    async fn participation_request_is_created_unprocessed() {
        let server = seeded_server().await;

        let response = server
            .post("/api/participacoes")
            .json(&json!({
                "name": "João",
                "email": "joao@example.com",
                "type": "Fotos"
            }))
            .await;
        response.assert_status(StatusCode::CREATED);
        let created: Value = response.json();
        assert_eq!(created["processed"], false);
        assert!(created["message"].is_null());

        let response = server
            .post("/api/participacoes")
            .json(&json!({
                "name": "João",
                "email": "not-an-email",
                "type": "Fotos"
            }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert!(body["errors"]
            .as_array()
            .unwrap()
            .iter()
            .any(|e| e["field"] == "email"));
    }

    #[tokio::test]
    async fn newsletter_duplicate_subscription_conflicts() {
        let server = seeded_server().await;

        let response = server
            .post("/api/newsletter")
            .json(&json!({ "email": "a@b.com" }))
            .await;
        response.assert_status(StatusCode::CREATED);

        let response = server
            .post("/api/newsletter")
            .json(&json!({ "email": "a@b.com" }))
            .await;
        response.assert_status(StatusCode::CONFLICT);
        let body: Value = response.json();
        assert_eq!(body["message"], "Email already subscribed");
    }

    #[tokio::test]
    async fn newsletter_rejects_malformed_email() {
        let server = seeded_server().await;

        let response = server
            .post("/api/newsletter")
            .json(&json!({ "email": "nope" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
