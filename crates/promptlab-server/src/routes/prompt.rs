//! Prompt Routes
//!
//! HTTP handlers that delegate to PromptService for business logic.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::error::ApiResult;
use crate::extract::ValidatedJson;
use crate::models::{
    CreatePromptRequest, ListPromptsQuery, PatchPromptRequest, PromptListResponse,
    PromptResponse, PromptVariablesResponse,
};
use crate::AppState;

/// List prompts, newest first
#[utoipa::path(
    get,
    path = "/prompts",
    params(ListPromptsQuery),
    responses(
        (status = 200, description = "Matching prompts", body = PromptListResponse)
    ),
    tag = "Prompts"
)]
pub async fn list_prompts(
    State(state): State<AppState>,
    Query(query): Query<ListPromptsQuery>,
) -> ApiResult<Json<PromptListResponse>> {
    let prompts = state.prompt_service.list(&query.into_filter()).await?;
    Ok(Json(prompts.into()))
}

/// Get prompt by ID
#[utoipa::path(
    get,
    path = "/prompts/{id}",
    params(
        ("id" = String, Path, description = "Prompt ID")
    ),
    responses(
        (status = 200, description = "Prompt found", body = PromptResponse),
        (status = 404, description = "Prompt not found")
    ),
    tag = "Prompts"
)]
pub async fn get_prompt(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<PromptResponse>> {
    let prompt = state.prompt_service.get(&id).await?;
    Ok(Json(prompt.into()))
}

/// Create new prompt
#[utoipa::path(
    post,
    path = "/prompts",
    request_body = CreatePromptRequest,
    responses(
        (status = 201, description = "Prompt created", body = PromptResponse),
        (status = 400, description = "Collection not found"),
        (status = 422, description = "Invalid request body")
    ),
    tag = "Prompts"
)]
pub async fn create_prompt(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreatePromptRequest>,
) -> ApiResult<(StatusCode, Json<PromptResponse>)> {
    let prompt = state.prompt_service.create(payload.into_draft()).await?;
    Ok((StatusCode::CREATED, Json(prompt.into())))
}

/// Replace prompt
#[utoipa::path(
    put,
    path = "/prompts/{id}",
    params(
        ("id" = String, Path, description = "Prompt ID")
    ),
    request_body = CreatePromptRequest,
    responses(
        (status = 200, description = "Prompt updated", body = PromptResponse),
        (status = 400, description = "Collection not found"),
        (status = 404, description = "Prompt not found"),
        (status = 422, description = "Invalid request body")
    ),
    tag = "Prompts"
)]
pub async fn update_prompt(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<CreatePromptRequest>,
) -> ApiResult<Json<PromptResponse>> {
    let prompt = state
        .prompt_service
        .replace(&id, payload.into_draft())
        .await?;
    Ok(Json(prompt.into()))
}

/// Partially update prompt
#[utoipa::path(
    patch,
    path = "/prompts/{id}",
    params(
        ("id" = String, Path, description = "Prompt ID")
    ),
    request_body = PatchPromptRequest,
    responses(
        (status = 200, description = "Prompt updated", body = PromptResponse),
        (status = 400, description = "Collection not found"),
        (status = 404, description = "Prompt not found"),
        (status = 422, description = "Invalid request body")
    ),
    tag = "Prompts"
)]
pub async fn patch_prompt(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<PatchPromptRequest>,
) -> ApiResult<Json<PromptResponse>> {
    let prompt = state.prompt_service.patch(&id, payload.into_patch()).await?;
    Ok(Json(prompt.into()))
}

/// Delete prompt
#[utoipa::path(
    delete,
    path = "/prompts/{id}",
    params(
        ("id" = String, Path, description = "Prompt ID")
    ),
    responses(
        (status = 204, description = "Prompt deleted"),
        (status = 404, description = "Prompt not found")
    ),
    tag = "Prompts"
)]
pub async fn delete_prompt(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.prompt_service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Template variables in a prompt
#[utoipa::path(
    get,
    path = "/prompts/{id}/variables",
    params(
        ("id" = String, Path, description = "Prompt ID")
    ),
    responses(
        (
            status = 200,
            description = "Variables in order of appearance",
            body = PromptVariablesResponse
        ),
        (status = 404, description = "Prompt not found")
    ),
    tag = "Prompts"
)]
pub async fn get_prompt_variables(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<PromptVariablesResponse>> {
    let variables = state.prompt_service.variables(&id).await?;
    Ok(Json(PromptVariablesResponse {
        prompt_id: id,
        variables,
    }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/prompts", get(list_prompts).post(create_prompt))
        .route(
            "/prompts/:id",
            get(get_prompt)
                .put(update_prompt)
                .patch(patch_prompt)
                .delete(delete_prompt),
        )
        .route("/prompts/:id/variables", get(get_prompt_variables))
}
