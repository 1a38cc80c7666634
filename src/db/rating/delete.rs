use sqlx::PgPool;

use crate::{
    access::{AccessDecision, can_delete_rating},
    db::{
        rating::get::get_rating_by_id,
        store::{get::get_store_for_update, patch::recompute_rating_stats},
    },
    errors::AppError,
    models::{Caller, StoreAggregate},
};

/// Deletes a rating (author or admin only) and recomputes the former store's
/// aggregate statistics in the same transaction.
pub async fn delete_rating(
    caller: Caller,
    rating_id: i64,
    postgres: PgPool,
) -> Result<StoreAggregate, AppError> {
    let mut tx = postgres
        .begin()
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to begin transaction: {}", e)))?;

    let rating = get_rating_by_id(rating_id, &mut *tx).await?;

    if let AccessDecision::Deny(reason) = can_delete_rating(Some(&caller), &rating) {
        return Err(AppError::Forbidden(reason));
    }

    // Same lock order as submission: the store row lock is taken first, then
    // the DELETE takes the rating row lock.
    get_store_for_update(rating.store_id, &mut *tx).await?;

    let deleted = sqlx::query("DELETE FROM ratings WHERE id = $1")
        .bind(rating_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to delete rating: {}", e)))?;

    if deleted.rows_affected() == 0 {
        return Err(AppError::NotFound("Rating not found".into()));
    }

    let stats = recompute_rating_stats(rating.store_id, &mut *tx).await?;

    tx.commit()
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to commit transaction: {}", e)))?;

    tracing::info!(
        "User {} deleted rating {} for store {}",
        caller.id,
        rating_id,
        rating.store_id
    );

    Ok(stats)
}
