use axum::{routing::get, Json, Router};
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::response::not_found;
use crate::state::AppState;

pub mod items;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Item resource routes, relative to the `/api/v1` prefix. Anything unmatched
/// underneath, including a wrong method on a known path, is a plain-text 404.
fn item_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/items",
            get(items::list_items)
                .put(items::acknowledge_put)
                .fallback(not_found),
        )
        .route(
            "/items/:title",
            get(items::get_item)
                .post(items::create_item)
                .put(items::replace_item)
                .delete(items::delete_item)
                .fallback(not_found),
        )
        .fallback(not_found)
}

/// Build the full application router: health, OpenAPI document and the item API
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .nest("/api/v1", item_routes())
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        // one INFO span per request: method, uri, version
                        .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                        .on_request(DefaultOnRequest::new().level(Level::INFO))
                        // status and latency on completion
                        .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                        // 5xx
                        .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
                )
                .layer(cors),
        )
}
