//! Video model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vidshare_core::types::{DbId, DEFAULT_CATEGORY_ID};

fn default_category_id() -> DbId {
    DEFAULT_CATEGORY_ID
}

/// A row from the `video` table.
///
/// Also the request body for `PUT /videos/{id}`. A body that omits
/// `category_id` falls back to the default category.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Video {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub url: String,
    #[serde(default = "default_category_id")]
    pub category_id: DbId,
}

/// DTO for creating a new video.
#[derive(Debug, Deserialize)]
pub struct CreateVideo {
    pub title: String,
    pub description: String,
    pub url: String,
    #[serde(default = "default_category_id")]
    pub category_id: DbId,
}
