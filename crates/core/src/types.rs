/// All database primary keys are PostgreSQL identity bigints.
pub type DbId = i64;

/// Identifier of the reserved default category.
///
/// Inserted by migration, it is the fallback `category_id` for videos and
/// can never be updated or deleted through the API.
pub const DEFAULT_CATEGORY_ID: DbId = 1;
