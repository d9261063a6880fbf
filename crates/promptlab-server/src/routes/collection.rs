//! Collection Routes
//!
//! HTTP handlers that delegate to CollectionService for business logic.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::error::ApiResult;
use crate::extract::ValidatedJson;
use crate::models::{CollectionListResponse, CollectionResponse, CreateCollectionRequest};
use crate::AppState;

/// List all collections
#[utoipa::path(
    get,
    path = "/collections",
    responses(
        (status = 200, description = "All collections", body = CollectionListResponse)
    ),
    tag = "Collections"
)]
pub async fn list_collections(
    State(state): State<AppState>,
) -> ApiResult<Json<CollectionListResponse>> {
    let collections = state.collection_service.list().await?;
    Ok(Json(collections.into()))
}

/// Get collection by ID
#[utoipa::path(
    get,
    path = "/collections/{id}",
    params(
        ("id" = String, Path, description = "Collection ID")
    ),
    responses(
        (status = 200, description = "Collection found", body = CollectionResponse),
        (status = 404, description = "Collection not found")
    ),
    tag = "Collections"
)]
pub async fn get_collection(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<CollectionResponse>> {
    let collection = state.collection_service.get(&id).await?;
    Ok(Json(collection.into()))
}

/// Create new collection
#[utoipa::path(
    post,
    path = "/collections",
    request_body = CreateCollectionRequest,
    responses(
        (status = 201, description = "Collection created", body = CollectionResponse),
        (status = 422, description = "Invalid request body")
    ),
    tag = "Collections"
)]
pub async fn create_collection(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateCollectionRequest>,
) -> ApiResult<(StatusCode, Json<CollectionResponse>)> {
    let collection = state
        .collection_service
        .create(payload.name, payload.description)
        .await?;
    Ok((StatusCode::CREATED, Json(collection.into())))
}

/// Delete collection
///
/// Prompts in the collection are kept and unlinked.
#[utoipa::path(
    delete,
    path = "/collections/{id}",
    params(
        ("id" = String, Path, description = "Collection ID")
    ),
    responses(
        (status = 204, description = "Collection deleted, prompts unlinked"),
        (status = 404, description = "Collection not found")
    ),
    tag = "Collections"
)]
pub async fn delete_collection(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.collection_service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/collections",
            get(list_collections).post(create_collection),
        )
        .route(
            "/collections/:id",
            get(get_collection).delete(delete_collection),
        )
}
