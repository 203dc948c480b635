use std::sync::Arc;

use axum::extract::{Form, Path, State, rejection::FormRejection};
use serde::Serialize;

use super::items::TodoItemResponse;
use crate::{
    db::entities::todo_list,
    response::{ApiResult, Envelope},
    routes::forms::{ListForm, submitted},
    services::{ServiceContext, todo_service::TodoService, validation::required_field},
    state::AppState,
};

#[derive(Debug, Serialize)]
pub struct TodoListResponse {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct TodoListsResponse {
    pub todo_lists: Vec<TodoListResponse>,
}

#[derive(Debug, Serialize)]
pub struct ListCreatedResponse {
    pub list_created: i32,
}

#[derive(Debug, Serialize)]
pub struct TodoListDetailResponse {
    pub name: String,
    pub items: Vec<TodoItemResponse>,
}

#[derive(Debug, Serialize)]
pub struct ListDeletedResponse {
    pub list_id_deleted: i32,
}

pub async fn list_lists(State(state): State<Arc<AppState>>) -> ApiResult<TodoListsResponse> {
    let lists = todo_service_from_state(state.as_ref()).list_lists().await?;
    Envelope::ok(TodoListsResponse {
        todo_lists: lists.into_iter().map(TodoListResponse::from).collect(),
    })
}

pub async fn create_list(
    State(state): State<Arc<AppState>>,
    form: Result<Form<ListForm>, FormRejection>,
) -> ApiResult<ListCreatedResponse> {
    let form = submitted(form);
    let name = required_field(form.name.as_deref())?;
    let list = todo_service_from_state(state.as_ref())
        .create_list(name)
        .await?;
    Envelope::ok(ListCreatedResponse {
        list_created: list.id,
    })
}

pub async fn get_list(
    State(state): State<Arc<AppState>>,
    Path(list_id): Path<i32>,
) -> ApiResult<TodoListDetailResponse> {
    let (list, items) = todo_service_from_state(state.as_ref())
        .list_with_items(list_id)
        .await?;
    Envelope::ok(TodoListDetailResponse {
        name: list.name,
        items: items.into_iter().map(TodoItemResponse::from).collect(),
    })
}

pub async fn edit_list(
    State(state): State<Arc<AppState>>,
    Path(list_id): Path<i32>,
    form: Result<Form<ListForm>, FormRejection>,
) -> ApiResult<serde_json::Value> {
    let form = submitted(form);
    let name = required_field(form.name.as_deref())?;
    todo_service_from_state(state.as_ref())
        .rename_list(list_id, name)
        .await?;
    Envelope::done()
}

pub async fn delete_list(
    State(state): State<Arc<AppState>>,
    Path(list_id): Path<i32>,
) -> ApiResult<ListDeletedResponse> {
    let list_id = todo_service_from_state(state.as_ref())
        .delete_list(list_id)
        .await?;
    Envelope::ok(ListDeletedResponse {
        list_id_deleted: list_id,
    })
}

impl From<todo_list::Model> for TodoListResponse {
    fn from(model: todo_list::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

pub(super) fn todo_service_from_state(state: &AppState) -> TodoService {
    ServiceContext::from_state(state).todo()
}
