use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::{
    aggregate::parse_rating_value,
    auth::AuthClaims,
    db::rating::{delete::delete_rating, get::get_user_store_rating, post::submit_rating},
    models::{Rating, StoreAggregate, SubmitOutcome, SubmittedRating},
    state::AppState,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRatingPayload {
    pub store_id: i64,
    pub rating: serde_json::Number,
}

pub async fn submit_rating_handler(
    State(state): State<AppState>,
    claims: AuthClaims,
    Json(payload): Json<SubmitRatingPayload>,
) -> Result<(StatusCode, Json<SubmittedRating>), (StatusCode, String)> {
    let caller = claims.caller().map_err(|e| e.to_response())?;
    let rating_value = parse_rating_value(&payload.rating).map_err(|e| {
        tracing::error!("Error submitting rating: {}", e);
        e.to_response()
    })?;

    match submit_rating(caller, payload.store_id, rating_value, state.postgres).await {
        Ok(submitted) => {
            let status = match submitted.outcome {
                SubmitOutcome::Created => StatusCode::CREATED,
                SubmitOutcome::Updated => StatusCode::OK,
            };
            Ok((status, Json(submitted)))
        }
        Err(err) => {
            tracing::error!("Error submitting rating: {}", err);
            Err(err.to_response())
        }
    }
}

pub async fn delete_rating_handler(
    State(state): State<AppState>,
    claims: AuthClaims,
    Path(rating_id): Path<i64>,
) -> Result<Json<StoreAggregate>, (StatusCode, String)> {
    let caller = claims.caller().map_err(|e| e.to_response())?;

    match delete_rating(caller, rating_id, state.postgres).await {
        Ok(stats) => Ok(Json(stats)),
        Err(err) => {
            tracing::error!("Error deleting rating: {}", err);
            Err(err.to_response())
        }
    }
}

pub async fn get_my_store_rating_handler(
    State(state): State<AppState>,
    claims: AuthClaims,
    Path(store_id): Path<i64>,
) -> Result<Json<Rating>, (StatusCode, String)> {
    let caller = claims.caller().map_err(|e| e.to_response())?;

    let rating = get_user_store_rating(caller.id, store_id, state.postgres)
        .await
        .map_err(|e| e.to_response())?;

    Ok(Json(rating))
}
