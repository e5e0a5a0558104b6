//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Paginated listings return
//! `(items, total)` pairs; the `Page` view model is built in the API layer.

pub mod category_repo;
pub mod video_repo;

pub use category_repo::CategoryRepo;
pub use video_repo::VideoRepo;

/// Escape LIKE wildcards in a user-supplied search term so it matches
/// literally. Backslash is LIKE's default escape character in Postgres.
pub(crate) fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}
