use std::sync::Arc;

use axum::extract::{Form, Path, State, rejection::FormRejection};
use serde::Serialize;

use super::lists::todo_service_from_state;
use crate::{
    db::entities::todo_item,
    response::{ApiResult, Envelope},
    routes::forms::{ItemForm, submitted},
    services::validation::required_field,
    state::AppState,
};

#[derive(Debug, Serialize)]
pub struct TodoItemResponse {
    pub id: i32,
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct ItemIdResponse {
    pub item_id: i32,
}

pub async fn create_item(
    State(state): State<Arc<AppState>>,
    Path(list_id): Path<i32>,
    form: Result<Form<ItemForm>, FormRejection>,
) -> ApiResult<ItemIdResponse> {
    let form = submitted(form);
    let description = required_field(form.description.as_deref())?;
    let item = todo_service_from_state(state.as_ref())
        .create_item(list_id, description)
        .await?;
    Envelope::ok(ItemIdResponse { item_id: item.id })
}

pub async fn get_item(
    State(state): State<Arc<AppState>>,
    Path((list_id, item_id)): Path<(i32, i32)>,
) -> ApiResult<TodoItemResponse> {
    let item = todo_service_from_state(state.as_ref())
        .require_item(list_id, item_id)
        .await?;
    Envelope::ok(item.into())
}

pub async fn edit_item(
    State(state): State<Arc<AppState>>,
    Path((list_id, item_id)): Path<(i32, i32)>,
    form: Result<Form<ItemForm>, FormRejection>,
) -> ApiResult<ItemIdResponse> {
    let form = submitted(form);
    let description = required_field(form.description.as_deref())?;
    let item = todo_service_from_state(state.as_ref())
        .update_item(list_id, item_id, description)
        .await?;
    Envelope::ok(ItemIdResponse { item_id: item.id })
}

pub async fn delete_item(
    State(state): State<Arc<AppState>>,
    Path((list_id, item_id)): Path<(i32, i32)>,
) -> ApiResult<ItemIdResponse> {
    let item_id = todo_service_from_state(state.as_ref())
        .delete_item(list_id, item_id)
        .await?;
    Envelope::ok(ItemIdResponse { item_id })
}

impl From<todo_item::Model> for TodoItemResponse {
    fn from(model: todo_item::Model) -> Self {
        Self {
            id: model.id,
            description: model.description,
        }
    }
}
