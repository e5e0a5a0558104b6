//! Handlers for the `/categories` resource.
//!
//! All endpoints require a bearer token except the anonymous `/free`
//! sample-data endpoint. The reserved default category (id 1) is rejected
//! as unprocessable for update and delete before any store access.

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::Json;
use vidshare_core::error::CoreError;
use vidshare_core::pagination::Page;
use vidshare_core::types::{DbId, DEFAULT_CATEGORY_ID};
use vidshare_core::validation::validate_category;
use vidshare_db::models::category::{Category, CreateCategory};
use vidshare_db::models::video::Video;
use vidshare_db::repositories::{CategoryRepo, VideoRepo};

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::query::ListParams;
use crate::state::AppState;

/// GET /api/v1/categories?page=&search=
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Page<Category>>> {
    let (items, total) =
        CategoryRepo::list_paginated(&state.pool, params.page, params.search_term()).await?;
    Ok(Json(Page::new(items, total, params.page)))
}

/// GET /api/v1/categories/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Category>> {
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))?;
    Ok(Json(category))
}

/// POST /api/v1/categories
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    AppJson(input): AppJson<CreateCategory>,
) -> AppResult<(StatusCode, [(header::HeaderName, String); 1], Json<Category>)> {
    validate_category(&input.name, &input.color)?;

    let category = CategoryRepo::create(&state.pool, &input).await?;
    let location = format!("/api/v1/categories/{}", category.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(category),
    ))
}

/// PUT /api/v1/categories/{id}
///
/// Full replace. The path id must match the body id (400 otherwise), and
/// the reserved default category is rejected with 422.
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    AppJson(category): AppJson<Category>,
) -> AppResult<Json<Category>> {
    if id != category.id {
        return Err(AppError::BadRequest(
            "Path id does not match body id".into(),
        ));
    }
    if id == DEFAULT_CATEGORY_ID {
        return Err(AppError::Core(CoreError::Unprocessable(
            "The default category cannot be modified".into(),
        )));
    }
    validate_category(&category.name, &category.color)?;

    let updated = CategoryRepo::replace(&state.pool, id, &category.name, &category.color)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))?;
    Ok(Json(updated))
}

/// DELETE /api/v1/categories/{id}
///
/// The reserved default category is rejected with 422; a category still
/// referenced by a video fails the store's FK restrict and surfaces as 409.
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if id == DEFAULT_CATEGORY_ID {
        return Err(AppError::Core(CoreError::Unprocessable(
            "The default category cannot be deleted".into(),
        )));
    }

    let deleted = CategoryRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))
    }
}

/// GET /api/v1/categories/{id}/videos?page=&search=
///
/// 404 if the category itself is absent.
pub async fn list_videos(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Page<Video>>> {
    CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))?;

    let (items, total) =
        VideoRepo::list_paginated(&state.pool, params.page, params.search_term(), Some(id))
            .await?;
    Ok(Json(Page::new(items, total, params.page)))
}

/// GET /api/v1/categories/free
///
/// Anonymous sample data; no database access.
pub async fn free() -> Json<Vec<Category>> {
    let items = (1..=50)
        .map(|i| Category {
            id: i,
            name: format!("Category {i}"),
            color: format!("#{i:06X}"),
        })
        .collect();
    Json(items)
}
