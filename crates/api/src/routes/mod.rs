pub mod category;
pub mod health;
pub mod video;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /categories                  list (paginated, searchable), create
/// /categories/free             anonymous sample data
/// /categories/{id}             get, replace, delete
/// /categories/{id}/videos      paginated videos of one category
///
/// /videos                      list (paginated, searchable), create
/// /videos/free                 anonymous sample data
/// /videos/{id}                 get, replace, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/categories", category::router())
        .nest("/videos", video::router())
}
