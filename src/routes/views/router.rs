use std::sync::Arc;

use axum::{Router, routing::get};

use crate::state::AppState;

use super::{items, lists, public};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(public::landing))
        .route("/list/", get(lists::show_all_lists))
        .route(
            "/list/new/",
            get(lists::new_list_form).post(lists::create_list),
        )
        .route("/list/{list_id}/", get(lists::show_list))
        .route(
            "/list/{list_id}/edit/",
            get(lists::edit_list_form).post(lists::edit_list),
        )
        .route(
            "/list/{list_id}/delete/",
            get(lists::confirm_delete_list).post(lists::delete_list),
        )
        .route(
            "/list/{list_id}/create/",
            get(items::new_item_form).post(items::create_item),
        )
        .route("/list/{list_id}/item/{item_id}/", get(items::show_item))
        .route(
            "/list/{list_id}/item/{item_id}/edit",
            get(items::edit_item_form).post(items::edit_item),
        )
        .route(
            "/list/{list_id}/item/{item_id}/delete/",
            get(items::confirm_delete_item).post(items::delete_item),
        )
        .with_state(state)
}
