use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{db::store::get::get_store_by_id, models::Store, state::AppState};

pub async fn get_store_handler(
    State(state): State<AppState>,
    Path(store_id): Path<i64>,
) -> Result<Json<Store>, (StatusCode, String)> {
    let store = get_store_by_id(store_id, state.postgres).await.map_err(|e| {
        tracing::error!("Error retrieving store: {}", e);
        e.to_response()
    })?;

    Ok(Json(store))
}
