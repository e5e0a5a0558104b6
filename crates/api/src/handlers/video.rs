//! Handlers for the `/videos` resource.
//!
//! Same contract as categories minus the reserved-id rule: videos have no
//! immutable rows. A write referencing an unknown category fails the FK
//! and surfaces as 409.

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::Json;
use vidshare_core::error::CoreError;
use vidshare_core::pagination::Page;
use vidshare_core::types::{DbId, DEFAULT_CATEGORY_ID};
use vidshare_core::validation::validate_video;
use vidshare_db::models::video::{CreateVideo, Video};
use vidshare_db::repositories::VideoRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::query::ListParams;
use crate::state::AppState;

/// GET /api/v1/videos?page=&search=
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Page<Video>>> {
    let (items, total) =
        VideoRepo::list_paginated(&state.pool, params.page, params.search_term(), None).await?;
    Ok(Json(Page::new(items, total, params.page)))
}

/// GET /api/v1/videos/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Video>> {
    let video = VideoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Video", id }))?;
    Ok(Json(video))
}

/// POST /api/v1/videos
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    AppJson(input): AppJson<CreateVideo>,
) -> AppResult<(StatusCode, [(header::HeaderName, String); 1], Json<Video>)> {
    validate_video(&input.title, &input.description, &input.url, input.category_id)?;

    let video = VideoRepo::create(&state.pool, &input).await?;
    let location = format!("/api/v1/videos/{}", video.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(video),
    ))
}

/// PUT /api/v1/videos/{id}
///
/// Full replace. The path id must match the body id (400 otherwise).
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    AppJson(video): AppJson<Video>,
) -> AppResult<Json<Video>> {
    if id != video.id {
        return Err(AppError::BadRequest(
            "Path id does not match body id".into(),
        ));
    }
    validate_video(&video.title, &video.description, &video.url, video.category_id)?;

    let updated = VideoRepo::replace(&state.pool, &video)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Video", id }))?;
    Ok(Json(updated))
}

/// DELETE /api/v1/videos/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = VideoRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Video", id }))
    }
}

/// GET /api/v1/videos/free
///
/// Anonymous sample data; no database access.
pub async fn free() -> Json<Vec<Video>> {
    let items = (0..=500)
        .map(|i| Video {
            id: i,
            title: format!("Video {i}"),
            description: format!("Description {i}"),
            url: format!("https://www.youtube.com/watch?v=video{i}"),
            category_id: DEFAULT_CATEGORY_ID,
        })
        .collect();
    Json(items)
}
