use std::sync::Arc;

use axum::{
    Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};

use crate::{response::Envelope, state::AppState};

use super::{items, lists};

const UNKNOWN_ROUTE: &str = "Not Found";

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/list/", get(lists::list_lists).post(lists::create_list))
        .route(
            "/list/{list_id}/",
            get(lists::get_list)
                .put(lists::edit_list)
                .delete(lists::delete_list),
        )
        .route("/list/{list_id}/item/", post(items::create_item))
        .route(
            "/list/{list_id}/item/{item_id}/",
            get(items::get_item)
                .put(items::edit_item)
                .delete(items::delete_item),
        )
        .fallback(unknown_route)
        .with_state(state)
}

async fn unknown_route() -> Response {
    Envelope::failure(StatusCode::NOT_FOUND, UNKNOWN_ROUTE).into_response()
}
