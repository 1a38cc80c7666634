use sqlx::PgConnection;

use crate::{
    aggregate::aggregate_from_values, db::rating::get::list_rating_values, errors::AppError,
    models::StoreAggregate,
};

/// Recomputes a store's aggregate statistics from its current rating rows and
/// writes them back unconditionally. Full recompute from the source-of-truth
/// rows, not an incremental delta, so a missed or double-counted event cannot
/// leave the aggregate drifted.
///
/// Runs on the enclosing transaction's connection: if the write fails, the
/// rating mutation that triggered it rolls back with it.
pub async fn recompute_rating_stats(
    store_id: i64,
    conn: &mut PgConnection,
) -> Result<StoreAggregate, AppError> {
    let values = list_rating_values(store_id, &mut *conn).await?;
    let stats = aggregate_from_values(&values);

    sqlx::query("UPDATE stores SET average_rating = $1, total_ratings = $2 WHERE id = $3")
        .bind(stats.average_rating)
        .bind(stats.total_ratings)
        .bind(store_id)
        .execute(conn)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to update rating stats: {}", e)))?;

    Ok(stats)
}
