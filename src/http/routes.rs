use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::{
    http::handlers::{
        delete_rating_handler, get_my_store_rating_handler, get_store_handler,
        submit_rating_handler,
    },
    state::AppState,
};

pub fn create_http_routes(state: AppState) -> Router {
    Router::new()
        .route("/ratings", post(submit_rating_handler))
        .route("/ratings/{id}", delete(delete_rating_handler))
        .route(
            "/ratings/my-rating/store/{store_id}",
            get(get_my_store_rating_handler),
        )
        .route("/stores/{id}", get(get_store_handler))
        .with_state(state)
}
