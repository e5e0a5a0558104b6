//! Repository for the `video` table.

use sqlx::PgPool;
use vidshare_core::pagination::{offset, PAGE_SIZE};
use vidshare_core::types::DbId;

use crate::models::video::{CreateVideo, Video};

/// Column list for video queries.
const COLUMNS: &str = "id, title, description, url, category_id";

/// Provides CRUD operations for videos.
pub struct VideoRepo;

impl VideoRepo {
    /// List one page of videos ordered by id, optionally filtered by a
    /// title substring and/or a category.
    ///
    /// Returns the page slice together with the filtered total.
    pub async fn list_paginated(
        pool: &PgPool,
        page_index: i64,
        search: Option<&str>,
        category_id: Option<DbId>,
    ) -> Result<(Vec<Video>, i64), sqlx::Error> {
        // Both filters are expressed as null-tolerant predicates so a single
        // statement covers all four filter combinations. Wildcards in the
        // term are escaped so the match stays literal.
        let pattern = search.map(super::escape_like);

        let (total,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM video
             WHERE ($1::text IS NULL OR title LIKE '%' || $1 || '%')
               AND ($2::bigint IS NULL OR category_id = $2)",
        )
        .bind(pattern.as_deref())
        .bind(category_id)
        .fetch_one(pool)
        .await?;

        let query = format!(
            "SELECT {COLUMNS} FROM video
             WHERE ($1::text IS NULL OR title LIKE '%' || $1 || '%')
               AND ($2::bigint IS NULL OR category_id = $2)
             ORDER BY id ASC LIMIT $3 OFFSET $4"
        );
        let items = sqlx::query_as::<_, Video>(&query)
            .bind(pattern.as_deref())
            .bind(category_id)
            .bind(PAGE_SIZE)
            .bind(offset(page_index))
            .fetch_all(pool)
            .await?;

        Ok((items, total))
    }

    /// Find a video by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Video>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM video WHERE id = $1");
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new video, returning the created row.
    ///
    /// Fails with a foreign-key violation if `category_id` does not
    /// reference an existing category.
    pub async fn create(pool: &PgPool, input: &CreateVideo) -> Result<Video, sqlx::Error> {
        let query = format!(
            "INSERT INTO video (title, description, url, category_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.url)
            .bind(input.category_id)
            .fetch_one(pool)
            .await
    }

    /// Replace a video's fields by ID, returning the updated row.
    ///
    /// `None` means the row was absent, including the case where it was
    /// deleted concurrently between the caller's read and this write.
    pub async fn replace(pool: &PgPool, video: &Video) -> Result<Option<Video>, sqlx::Error> {
        let query = format!(
            "UPDATE video SET title = $2, description = $3, url = $4, category_id = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(video.id)
            .bind(&video.title)
            .bind(&video.description)
            .bind(&video.url)
            .bind(video.category_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a video by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM video WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
