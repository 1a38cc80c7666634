use sqlx::{PgConnection, PgPool};

use crate::{
    access::{AccessDecision, can_submit_rating},
    aggregate::validate_rating_value,
    db::{
        rating::get::find_by_user_and_store,
        store::{get::get_store_for_update, patch::recompute_rating_stats},
    },
    errors::AppError,
    models::{Caller, Rating, SubmitOutcome, SubmittedRating},
};

/// Submits a caller's 1-5 rating for a store. First submission inserts a new
/// rating row; a resubmission for the same store updates the existing row in
/// place. The store's aggregate statistics are recomputed in the same
/// transaction, so either both the rating and the aggregate commit or neither
/// does.
///
/// A lost insert race against the unique (user_id, store_id) index surfaces
/// as a conflict; the whole transaction is retried once, which lands on the
/// update path.
pub async fn submit_rating(
    caller: Caller,
    store_id: i64,
    rating_value: i16,
    postgres: PgPool,
) -> Result<SubmittedRating, AppError> {
    validate_rating_value(rating_value)?;

    match submit_in_tx(caller, store_id, rating_value, &postgres).await {
        Err(AppError::Conflict(_)) => submit_in_tx(caller, store_id, rating_value, &postgres).await,
        result => result,
    }
}

async fn submit_in_tx(
    caller: Caller,
    store_id: i64,
    rating_value: i16,
    postgres: &PgPool,
) -> Result<SubmittedRating, AppError> {
    let mut tx = postgres
        .begin()
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to begin transaction: {}", e)))?;

    // Locking the store row serializes concurrent submissions for this store
    // and makes the aggregate write atomic with the rating write.
    let store = get_store_for_update(store_id, &mut *tx).await?;

    if let AccessDecision::Deny(reason) = can_submit_rating(Some(&caller), &store) {
        return Err(AppError::Forbidden(reason));
    }

    let (rating, outcome) = match find_by_user_and_store(caller.id, store_id, &mut *tx).await? {
        Some(existing) => {
            let updated = update_rating(existing.id, rating_value, &mut *tx).await?;
            (updated, SubmitOutcome::Updated)
        }
        None => {
            let created = insert_rating(caller.id, store_id, rating_value, &mut *tx).await?;
            (created, SubmitOutcome::Created)
        }
    };

    let stats = recompute_rating_stats(store_id, &mut *tx).await?;

    tx.commit()
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to commit transaction: {}", e)))?;

    tracing::info!(
        "User {} rated store {} with {} ({:?})",
        caller.id,
        store_id,
        rating_value,
        outcome
    );

    Ok(SubmittedRating {
        outcome,
        rating,
        store: stats,
    })
}

async fn insert_rating(
    user_id: i64,
    store_id: i64,
    rating_value: i16,
    conn: &mut PgConnection,
) -> Result<Rating, AppError> {
    sqlx::query_as::<_, Rating>(
        "INSERT INTO ratings (user_id, store_id, rating)
        VALUES ($1, $2, $3)
        RETURNING id, user_id, store_id, rating, created_at, updated_at",
    )
    .bind(user_id)
    .bind(store_id)
    .bind(rating_value)
    .fetch_one(conn)
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            AppError::Conflict("Rating already submitted for this store".into())
        }
        e => AppError::DatabaseError(format!("Failed to insert rating: {}", e)),
    })
}

async fn update_rating(
    rating_id: i64,
    rating_value: i16,
    conn: &mut PgConnection,
) -> Result<Rating, AppError> {
    sqlx::query_as::<_, Rating>(
        "UPDATE ratings
        SET rating = $1, updated_at = NOW()
        WHERE id = $2
        RETURNING id, user_id, store_id, rating, created_at, updated_at",
    )
    .bind(rating_value)
    .bind(rating_id)
    .fetch_one(conn)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to update rating: {}", e)))
}
