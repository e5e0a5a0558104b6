//! Demo-data seeding.
//!
//! Inserts a small sample catalog so a fresh deployment has something to
//! browse. Both steps are idempotent: categories are only inserted when no
//! category beyond the reserved default exists, videos only when the video
//! table is empty.

use sqlx::PgPool;
use vidshare_core::types::DEFAULT_CATEGORY_ID;

use crate::models::category::CreateCategory;
use crate::models::video::CreateVideo;
use crate::repositories::{CategoryRepo, VideoRepo};

/// Seed the demo catalog (5 categories, 11 videos).
pub async fn seed_demo_data(pool: &PgPool) -> Result<(), sqlx::Error> {
    seed_categories(pool).await?;
    seed_videos(pool).await?;
    Ok(())
}

async fn seed_categories(pool: &PgPool) -> Result<(), sqlx::Error> {
    let (existing,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM category WHERE id <> $1")
        .bind(DEFAULT_CATEGORY_ID)
        .fetch_one(pool)
        .await?;
    if existing > 0 {
        tracing::debug!("Categories already seeded, skipping");
        return Ok(());
    }

    let categories = [
        ("Trailers", "#000080"),
        ("Movies", "#FFFF00"),
        ("Documentary", "#008000"),
        ("Animation", "#808080"),
        ("Gaming", "#800000"),
    ];

    for (name, color) in categories {
        CategoryRepo::create(
            pool,
            &CreateCategory {
                name: name.to_string(),
                color: color.to_string(),
            },
        )
        .await?;
    }

    tracing::info!(count = categories.len(), "Seeded demo categories");
    Ok(())
}

async fn seed_videos(pool: &PgPool) -> Result<(), sqlx::Error> {
    let (existing,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM video")
        .fetch_one(pool)
        .await?;
    if existing > 0 {
        tracing::debug!("Videos already seeded, skipping");
        return Ok(());
    }

    let videos = [
        (
            "The Matrix (1999) Official Trailer",
            "The Matrix is a 1999 science fiction action film written and directed by ...",
            "https://youtu.be/vKQi3bBA1y8",
        ),
        (
            "The Matrix Reloaded (2003) Official Trailer",
            "The Matrix Reloaded is a 2003 science fiction action film written and directed by ...",
            "https://youtu.be/kYzz0FSgpSU",
        ),
        (
            "The Matrix Revolutions (2003) Official Trailer",
            "The Matrix Revolutions is a 2003 science fiction action film written and directed by ...",
            "https://youtu.be/hMbexEPAOQI",
        ),
        (
            "The Matrix Resurrections - Official Trailer",
            "The Matrix Resurrections is a 2022 science fiction action film written and directed by ...",
            "https://youtu.be/9ix7TUGVYIo",
        ),
        (
            "The Matrix",
            "The Matrix is a 1999 science fiction action film written and directed by ...",
            "https://youtu.be/UvqDq2RLZdY",
        ),
        (
            "Matrix Reloaded",
            "The Matrix Reloaded is a 2003 science fiction action film written and directed by ...",
            "https://youtu.be/PbHo1obT1Kw",
        ),
        (
            "Matrix Revolutions",
            "The Matrix Revolutions is a 2003 science fiction action film written and directed by ...",
            "https://youtu.be/6f-7qGzhlD8",
        ),
        (
            "The Matrix Resurrections",
            "The Matrix Resurrections is a 2022 science fiction action film written and directed by ...",
            "https://youtu.be/O5rXlNRjyUE",
        ),
        (
            "The Matrix Revisited",
            "The Matrix Revisited is a 2001 documentary film directed by ...",
            "https://youtu.be/ld7Vikf_d1s",
        ),
        (
            "The Animatrix",
            "The Animatrix is a 2003 animated anthology science fiction film written and directed by ...",
            "https://youtu.be/V-62yBSkTRY",
        ),
        (
            "The Matrix Awakens: An Unreal Engine 5 Experience",
            "The Matrix Awakens is a 2021 game developed by ...",
            "https://youtu.be/WU0gvPcc3jQ",
        ),
    ];

    for (title, description, url) in videos {
        VideoRepo::create(
            pool,
            &CreateVideo {
                title: title.to_string(),
                description: description.to_string(),
                url: url.to_string(),
                category_id: DEFAULT_CATEGORY_ID,
            },
        )
        .await?;
    }

    tracing::info!(count = videos.len(), "Seeded demo videos");
    Ok(())
}
