use sqlx::{PgConnection, PgPool};

use crate::{errors::AppError, models::Rating};

pub async fn find_by_user_and_store(
    user_id: i64,
    store_id: i64,
    conn: &mut PgConnection,
) -> Result<Option<Rating>, AppError> {
    sqlx::query_as::<_, Rating>(
        "SELECT id, user_id, store_id, rating, created_at, updated_at
        FROM ratings
        WHERE user_id = $1 AND store_id = $2",
    )
    .bind(user_id)
    .bind(store_id)
    .fetch_optional(conn)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch rating: {}", e)))
}

pub async fn get_rating_by_id(
    rating_id: i64,
    conn: &mut PgConnection,
) -> Result<Rating, AppError> {
    sqlx::query_as::<_, Rating>(
        "SELECT id, user_id, store_id, rating, created_at, updated_at
        FROM ratings
        WHERE id = $1",
    )
    .bind(rating_id)
    .fetch_optional(conn)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch rating: {}", e)))?
    .ok_or_else(|| AppError::NotFound("Rating not found".into()))
}

/// Caller's own rating for one store, used by the my-rating endpoint.
pub async fn get_user_store_rating(
    user_id: i64,
    store_id: i64,
    postgres: PgPool,
) -> Result<Rating, AppError> {
    sqlx::query_as::<_, Rating>(
        "SELECT id, user_id, store_id, rating, created_at, updated_at
        FROM ratings
        WHERE user_id = $1 AND store_id = $2",
    )
    .bind(user_id)
    .bind(store_id)
    .fetch_optional(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch rating: {}", e)))?
    .ok_or_else(|| AppError::NotFound("You have not rated this store yet".into()))
}

/// All current rating values for a store, as input to recomputation only.
pub async fn list_rating_values(
    store_id: i64,
    conn: &mut PgConnection,
) -> Result<Vec<i16>, AppError> {
    sqlx::query_scalar::<_, i16>("SELECT rating FROM ratings WHERE store_id = $1")
        .bind(store_id)
        .fetch_all(conn)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to list rating values: {}", e)))
}
