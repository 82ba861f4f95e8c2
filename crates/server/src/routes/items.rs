use axum::{
    body::Body,
    extract::{Path, State},
    http::StatusCode,
};
use common::types::Ack;
use service::items::{DescriptionInput, Item};
use tracing::{info, warn};

use crate::body::read_capped;
use crate::errors::{ApiError, DecodeError};
use crate::response::JsonDocuments;
use crate::state::AppState;

pub const PUT_ACK: Ack = Ack { message: "put called" };
pub const DELETE_ACK: Ack = Ack { message: "delete called" };

/// List every item as a `title -> item` object
#[utoipa::path(
    get, path = "/api/v1/items", tag = "items",
    responses((status = 200, description = "All items keyed by title"))
)]
pub async fn list_items(State(state): State<AppState>) -> Result<JsonDocuments, ApiError> {
    let items = state.store.list_all().await;
    info!(count = items.len(), "list items");
    JsonDocuments::ok().push(&items)
}

/// Fetch one item; an unknown title yields an empty item, not a 404
#[utoipa::path(
    get, path = "/api/v1/items/{title}", tag = "items",
    params(("title" = String, Path, description = "Item title")),
    responses((status = 200, description = "The item, or an empty item when absent", body = crate::openapi::ItemDoc))
)]
pub async fn get_item(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<JsonDocuments, ApiError> {
    let item = state.store.get(&title).await.unwrap_or_default();
    JsonDocuments::ok().push(&item)
}

/// Create (or overwrite) an item from `{"description": ...}`
#[utoipa::path(
    post, path = "/api/v1/items/{title}", tag = "items",
    params(("title" = String, Path, description = "Item title")),
    request_body = crate::openapi::DescriptionDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::ItemDoc),
        (status = 422, description = "Malformed body", body = crate::openapi::DecodeErrorDoc)
    )
)]
pub async fn create_item(
    State(state): State<AppState>,
    Path(title): Path<String>,
    body: Body,
) -> Result<JsonDocuments, ApiError> {
    let raw = read_capped(body, state.max_body_bytes).await?;
    let input: DescriptionInput = match serde_json::from_slice(&raw) {
        Ok(input) => input,
        Err(e) => {
            warn!(%title, error = %e, "create body rejected");
            return JsonDocuments::new(StatusCode::UNPROCESSABLE_ENTITY).push(&DecodeError::from(&e));
        }
    };
    let item = state.store.create(&title, input.description).await;
    info!(%title, "item_create");
    JsonDocuments::ok().push(&item)
}

/// Replace the whole item stored under `title`.
///
/// A body that fails to decode still replaces: the reply turns 422, carries the
/// decode error, and an empty item is stored in place of the body.
#[utoipa::path(
    put, path = "/api/v1/items/{title}", tag = "items",
    params(("title" = String, Path, description = "Item title")),
    request_body = crate::openapi::ItemDoc,
    responses(
        (status = 200, description = "Previous and new item", body = crate::openapi::UpdateResultDoc),
        (status = 422, description = "Malformed body; decode error followed by the update")
    )
)]
pub async fn replace_item(
    State(state): State<AppState>,
    Path(title): Path<String>,
    body: Body,
) -> Result<JsonDocuments, ApiError> {
    let raw = read_capped(body, state.max_body_bytes).await?;
    let (reply, item) = match serde_json::from_slice::<Item>(&raw) {
        Ok(item) => (JsonDocuments::ok(), item),
        Err(e) => {
            warn!(%title, error = %e, "replace body rejected, storing empty item");
            let reply = JsonDocuments::new(StatusCode::UNPROCESSABLE_ENTITY)
                .push(&DecodeError::from(&e))?;
            (reply, Item::default())
        }
    };
    let update = state.store.replace(&title, item).await;
    info!(%title, complete = update.new.complete, "item_replace");
    reply.push(&update)
}

/// `PUT /items` without a title never reaches the store
#[utoipa::path(
    put, path = "/api/v1/items", tag = "items",
    responses((status = 202, description = "Acknowledged"))
)]
pub async fn acknowledge_put() -> Result<JsonDocuments, ApiError> {
    JsonDocuments::new(StatusCode::ACCEPTED).push(&PUT_ACK)
}

/// Delete an item. The reply holds the removed item (if any) followed by a
/// fixed acknowledgement, always with status 200.
#[utoipa::path(
    delete, path = "/api/v1/items/{title}", tag = "items",
    params(("title" = String, Path, description = "Item title")),
    responses((status = 200, description = "Removed item (when present) then acknowledgement"))
)]
pub async fn delete_item(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<JsonDocuments, ApiError> {
    let mut reply = JsonDocuments::ok();
    match state.store.delete(&title).await {
        Some(item) => {
            info!(%title, "item_delete");
            reply = reply.push(&item)?;
        }
        None => info!(%title, "item_delete_missing"),
    }
    reply.push(&DELETE_ACK)
}
