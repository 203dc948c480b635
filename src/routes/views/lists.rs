use std::sync::Arc;

use askama::Template;
use axum::extract::{Form, Path, State, rejection::FormRejection};

use super::{
    flash::{self, Flash, redirect_with_flash},
    page::{Chrome, LISTS_PATH, PageResult, list_path, recover, render},
};
use crate::{
    db::entities::{todo_item, todo_list},
    routes::forms::{ListForm, submitted},
    services::{ServiceContext, todo_service::TodoService, validation::required_field},
    state::AppState,
};

pub(super) const INVALID_NAME: &str = "Must enter a valid name";

#[derive(Template)]
#[template(path = "lists.html")]
struct ListsTemplate {
    chrome: Chrome,
    lists: Vec<todo_list::Model>,
}

#[derive(Template)]
#[template(path = "list_form.html")]
struct ListFormTemplate {
    chrome: Chrome,
    heading: String,
    action: String,
    cancel: String,
    name: String,
    status: Option<String>,
}

#[derive(Template)]
#[template(path = "list_show.html")]
struct ListShowTemplate {
    chrome: Chrome,
    list: todo_list::Model,
    items: Vec<todo_item::Model>,
}

#[derive(Template)]
#[template(path = "confirm_delete.html")]
pub(super) struct ConfirmDeleteTemplate {
    pub chrome: Chrome,
    pub heading: String,
    pub subject: String,
    pub action: String,
    pub cancel: String,
}

pub async fn show_all_lists(State(state): State<Arc<AppState>>, flash: Flash) -> PageResult {
    let lists = match todo_service_from_state(state.as_ref())
        .list_lists_by_name()
        .await
    {
        Ok(lists) => lists,
        Err(err) => return recover(err, "/"),
    };
    let chrome = Chrome::new(&flash);
    render(&ListsTemplate { chrome, lists }, &flash)
}

pub async fn new_list_form(flash: Flash) -> PageResult {
    render(&create_form(&flash, String::new(), None), &flash)
}

pub async fn create_list(
    State(state): State<Arc<AppState>>,
    flash: Flash,
    form: Result<Form<ListForm>, FormRejection>,
) -> PageResult {
    let name = submitted(form).name.unwrap_or_default();
    if required_field(Some(name.as_str())).is_err() {
        return render(
            &create_form(&flash, name, Some(INVALID_NAME.to_string())),
            &flash,
        );
    }

    match todo_service_from_state(state.as_ref())
        .create_list(&name)
        .await
    {
        Ok(_) => Ok(redirect_with_flash(LISTS_PATH, flash::LIST_CREATED)),
        Err(err) => recover(err, LISTS_PATH),
    }
}

pub async fn show_list(
    State(state): State<Arc<AppState>>,
    Path(list_id): Path<i32>,
    flash: Flash,
) -> PageResult {
    let (list, items) = match todo_service_from_state(state.as_ref())
        .list_with_items(list_id)
        .await
    {
        Ok(found) => found,
        Err(err) => return recover(err, LISTS_PATH),
    };
    let chrome = Chrome::new(&flash);
    render(&ListShowTemplate { chrome, list, items }, &flash)
}

pub async fn edit_list_form(
    State(state): State<Arc<AppState>>,
    Path(list_id): Path<i32>,
    flash: Flash,
) -> PageResult {
    let list = match todo_service_from_state(state.as_ref())
        .require_list(list_id)
        .await
    {
        Ok(list) => list,
        Err(err) => return recover(err, LISTS_PATH),
    };
    render(&edit_form(&flash, list_id, list.name, None), &flash)
}

pub async fn edit_list(
    State(state): State<Arc<AppState>>,
    Path(list_id): Path<i32>,
    flash: Flash,
    form: Result<Form<ListForm>, FormRejection>,
) -> PageResult {
    let service = todo_service_from_state(state.as_ref());
    if let Err(err) = service.require_list(list_id).await {
        return recover(err, LISTS_PATH);
    }

    let name = submitted(form).name.unwrap_or_default();
    if required_field(Some(name.as_str())).is_err() {
        return render(
            &edit_form(&flash, list_id, name, Some(INVALID_NAME.to_string())),
            &flash,
        );
    }

    match service.rename_list(list_id, &name).await {
        Ok(_) => Ok(redirect_with_flash(&list_path(list_id), flash::LIST_EDITED)),
        Err(err) => recover(err, LISTS_PATH),
    }
}

pub async fn confirm_delete_list(
    State(state): State<Arc<AppState>>,
    Path(list_id): Path<i32>,
    flash: Flash,
) -> PageResult {
    let list = match todo_service_from_state(state.as_ref())
        .require_list(list_id)
        .await
    {
        Ok(list) => list,
        Err(err) => return recover(err, LISTS_PATH),
    };
    let template = ConfirmDeleteTemplate {
        chrome: Chrome::new(&flash),
        heading: "Delete list".to_string(),
        subject: format!("the list \"{}\" and all of its items", list.name),
        action: format!("/list/{list_id}/delete/"),
        cancel: list_path(list_id),
    };
    render(&template, &flash)
}

pub async fn delete_list(
    State(state): State<Arc<AppState>>,
    Path(list_id): Path<i32>,
) -> PageResult {
    match todo_service_from_state(state.as_ref())
        .delete_list(list_id)
        .await
    {
        Ok(_) => Ok(redirect_with_flash(LISTS_PATH, flash::LIST_DELETED)),
        Err(err) => recover(err, LISTS_PATH),
    }
}

fn create_form(flash: &Flash, name: String, status: Option<String>) -> ListFormTemplate {
    ListFormTemplate {
        chrome: Chrome::new(flash),
        heading: "New list".to_string(),
        action: "/list/new/".to_string(),
        cancel: LISTS_PATH.to_string(),
        name,
        status,
    }
}

fn edit_form(
    flash: &Flash,
    list_id: i32,
    name: String,
    status: Option<String>,
) -> ListFormTemplate {
    ListFormTemplate {
        chrome: Chrome::new(flash),
        heading: "Edit list".to_string(),
        action: format!("/list/{list_id}/edit/"),
        cancel: list_path(list_id),
        name,
        status,
    }
}

pub(super) fn todo_service_from_state(state: &AppState) -> TodoService {
    ServiceContext::from_state(state).todo()
}
