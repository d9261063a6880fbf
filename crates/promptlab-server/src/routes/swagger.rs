//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    // Collection models
    CollectionListResponse,
    CollectionResponse,
    CreateCollectionRequest,
    // Prompt models
    CreatePromptRequest,
    // Shared
    FieldError,
    HealthResponse,
    PatchPromptRequest,
    PromptListResponse,
    PromptResponse,
    PromptVariablesResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::health::health_check,
        // Prompt endpoints
        super::prompt::list_prompts,
        super::prompt::get_prompt,
        super::prompt::create_prompt,
        super::prompt::update_prompt,
        super::prompt::patch_prompt,
        super::prompt::delete_prompt,
        super::prompt::get_prompt_variables,
        // Collection endpoints
        super::collection::list_collections,
        super::collection::get_collection,
        super::collection::create_collection,
        super::collection::delete_collection,
    ),
    info(
        title = "PromptLab API",
        description = "Manage prompt templates and organize them into collections.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Prompts", description = "Prompt template management"),
        (name = "Collections", description = "Prompt grouping"),
    ),
    components(
        schemas(
            HealthResponse,
            FieldError,
            // Prompt
            CreatePromptRequest,
            PatchPromptRequest,
            PromptResponse,
            PromptListResponse,
            PromptVariablesResponse,
            // Collection
            CreateCollectionRequest,
            CollectionResponse,
            CollectionListResponse,
        )
    ),
)]
pub struct ApiDoc;
