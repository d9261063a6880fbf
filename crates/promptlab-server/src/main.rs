use axum::Router;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod config;
mod error;
mod extract;
mod models;
mod routes;

use adapters::{InMemoryCollectionRepository, InMemoryPromptRepository, InMemoryStore};
use application::{CollectionService, PromptService};
use config::AppConfig;

/// Type aliases for application services with concrete repository implementations
pub type AppPromptService = PromptService<InMemoryPromptRepository, InMemoryCollectionRepository>;
pub type AppCollectionService =
    CollectionService<InMemoryPromptRepository, InMemoryCollectionRepository>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub prompt_service: Arc<AppPromptService>,
    pub collection_service: Arc<AppCollectionService>,
}

impl AppState {
    /// Wire services over one store and one write lock
    pub fn new(store: &InMemoryStore, config: &AppConfig) -> Self {
        let prompts = Arc::new(store.prompts());
        let collections = Arc::new(store.collections());
        let write_lock = Arc::new(Mutex::new(()));

        let prompt_service = PromptService::new(
            prompts.clone(),
            collections.clone(),
            write_lock.clone(),
        )
        .with_strict_content(config.strict_content);
        let collection_service = CollectionService::new(prompts, collections, write_lock);

        Self {
            prompt_service: Arc::new(prompt_service),
            collection_service: Arc::new(collection_service),
        }
    }
}

/// Build the full HTTP application
pub fn app(state: AppState, config: &AppConfig) -> Router {
    let mut router = Router::new()
        .merge(routes::health::router())
        .merge(routes::prompt::router())
        .merge(routes::collection::router());

    if config.swagger_ui {
        let openapi = routes::swagger::ApiDoc::openapi();
        router = router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi));
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("PromptLab API initializing...");

    let config = AppConfig::from_secrets(&secrets)?;

    if config.strict_content {
        tracing::info!("Strict content validation enabled");
    }

    let store = InMemoryStore::new();
    let state = AppState::new(&store, &config);

    tracing::info!("In-memory storage ready (data is lost on restart)");

    let router = app(state, &config);

    if config.swagger_ui {
        tracing::info!("Swagger UI: /swagger-ui");
    }
    tracing::info!("PromptLab API ready");

    Ok(router.into())
}
