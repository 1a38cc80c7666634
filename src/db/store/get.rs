use sqlx::{PgConnection, PgPool};

use crate::{errors::AppError, models::Store};

pub async fn get_store_by_id(store_id: i64, postgres: PgPool) -> Result<Store, AppError> {
    sqlx::query_as::<_, Store>(
        "SELECT id, name, email, address, owner_id, average_rating, total_ratings, created_at
        FROM stores
        WHERE id = $1",
    )
    .bind(store_id)
    .fetch_optional(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch store: {}", e)))?
    .ok_or_else(|| AppError::NotFound("Store not found".into()))
}

/// Loads a store and takes its row lock for the rest of the transaction.
/// Every rating mutation locks the store first, which serializes concurrent
/// submissions against the same store and keeps the aggregate write atomic
/// with the rating write.
pub async fn get_store_for_update(
    store_id: i64,
    conn: &mut PgConnection,
) -> Result<Store, AppError> {
    sqlx::query_as::<_, Store>(
        "SELECT id, name, email, address, owner_id, average_rating, total_ratings, created_at
        FROM stores
        WHERE id = $1
        FOR UPDATE",
    )
    .bind(store_id)
    .fetch_optional(conn)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to lock store: {}", e)))?
    .ok_or_else(|| AppError::NotFound("Store not found".into()))
}
