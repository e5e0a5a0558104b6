//! Repository for the `category` table.

use sqlx::PgPool;
use vidshare_core::pagination::{offset, PAGE_SIZE};
use vidshare_core::types::DbId;

use crate::models::category::{Category, CreateCategory};

/// Column list for category queries.
const COLUMNS: &str = "id, name, color";

/// Provides CRUD operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// List one page of categories ordered by id, optionally filtered by a
    /// name substring (case-sensitive, the store's default collation).
    ///
    /// Returns the page slice together with the filtered total.
    pub async fn list_paginated(
        pool: &PgPool,
        page_index: i64,
        search: Option<&str>,
    ) -> Result<(Vec<Category>, i64), sqlx::Error> {
        // Wildcards in the term are escaped so the match stays literal.
        let pattern = search.map(super::escape_like);

        let (total,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM category
             WHERE ($1::text IS NULL OR name LIKE '%' || $1 || '%')",
        )
        .bind(pattern.as_deref())
        .fetch_one(pool)
        .await?;

        let query = format!(
            "SELECT {COLUMNS} FROM category
             WHERE ($1::text IS NULL OR name LIKE '%' || $1 || '%')
             ORDER BY id ASC LIMIT $2 OFFSET $3"
        );
        let items = sqlx::query_as::<_, Category>(&query)
            .bind(pattern.as_deref())
            .bind(PAGE_SIZE)
            .bind(offset(page_index))
            .fetch_all(pool)
            .await?;

        Ok((items, total))
    }

    /// Find a category by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM category WHERE id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new category, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCategory) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO category (name, color) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(&input.name)
            .bind(&input.color)
            .fetch_one(pool)
            .await
    }

    /// Replace a category's fields by ID, returning the updated row.
    ///
    /// `None` means the row was absent, including the case where it was
    /// deleted concurrently between the caller's read and this write.
    pub async fn replace(
        pool: &PgPool,
        id: DbId,
        name: &str,
        color: &str,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!(
            "UPDATE category SET name = $2, color = $3 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(name)
            .bind(color)
            .fetch_optional(pool)
            .await
    }

    /// Delete a category by ID. Returns `true` if a row was deleted.
    ///
    /// Fails with a foreign-key violation if any video still references
    /// the category; callers surface that as a conflict.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM category WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
