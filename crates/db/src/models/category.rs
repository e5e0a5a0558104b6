//! Category model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vidshare_core::types::DbId;

/// A row from the `category` table.
///
/// Also the request body for `PUT /categories/{id}`, which is a full
/// replace and therefore carries the id.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub color: String,
}

/// DTO for creating a new category.
#[derive(Debug, Deserialize)]
pub struct CreateCategory {
    pub name: String,
    pub color: String,
}
