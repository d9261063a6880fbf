//! Collection request/response models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use promptlab::Collection;

/// Create collection request
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateCollectionRequest {
    /// 1-100 characters
    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    pub name: String,
    /// Up to 500 characters
    #[validate(length(max = 500, message = "must be at most 500 characters"))]
    pub description: Option<String>,
}

/// Collection record
#[derive(Debug, Serialize, ToSchema)]
pub struct CollectionResponse {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Collection> for CollectionResponse {
    fn from(collection: Collection) -> Self {
        Self {
            id: collection.id,
            name: collection.name,
            description: collection.description,
            created_at: collection.created_at,
        }
    }
}

/// All collections
#[derive(Debug, Serialize, ToSchema)]
pub struct CollectionListResponse {
    pub collections: Vec<CollectionResponse>,
    pub total: usize,
}

impl From<Vec<Collection>> for CollectionListResponse {
    fn from(collections: Vec<Collection>) -> Self {
        let collections: Vec<CollectionResponse> =
            collections.into_iter().map(Into::into).collect();
        Self {
            total: collections.len(),
            collections,
        }
    }
}
