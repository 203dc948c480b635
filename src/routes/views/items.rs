use std::sync::Arc;

use askama::Template;
use axum::extract::{Form, Path, State, rejection::FormRejection};

use super::{
    flash::{self, Flash, redirect_with_flash},
    lists::{ConfirmDeleteTemplate, todo_service_from_state},
    page::{Chrome, LISTS_PATH, PageResult, item_path, list_path, recover, recover_item, render},
};
use crate::{
    db::entities::{todo_item, todo_list},
    routes::forms::{ItemForm, submitted},
    services::validation::required_field,
    state::AppState,
};

pub(super) const INVALID_DESCRIPTION: &str = "Must enter a valid description";

#[derive(Template)]
#[template(path = "item_form.html")]
struct ItemFormTemplate {
    chrome: Chrome,
    heading: String,
    list: todo_list::Model,
    action: String,
    cancel: String,
    description: String,
    status: Option<String>,
}

#[derive(Template)]
#[template(path = "item_show.html")]
struct ItemShowTemplate {
    chrome: Chrome,
    list: todo_list::Model,
    item: todo_item::Model,
}

pub async fn new_item_form(
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
    render(&create_form(&flash, list, String::new(), None), &flash)
}

pub async fn create_item(
    State(state): State<Arc<AppState>>,
    Path(list_id): Path<i32>,
    flash: Flash,
    form: Result<Form<ItemForm>, FormRejection>,
) -> PageResult {
    let service = todo_service_from_state(state.as_ref());
    let list = match service.require_list(list_id).await {
        Ok(list) => list,
        Err(err) => return recover(err, LISTS_PATH),
    };

    let description = submitted(form).description.unwrap_or_default();
    if required_field(Some(description.as_str())).is_err() {
        let status = Some(INVALID_DESCRIPTION.to_string());
        return render(&create_form(&flash, list, description, status), &flash);
    }

    match service.create_item(list_id, &description).await {
        Ok(_) => Ok(redirect_with_flash(&list_path(list_id), flash::ITEM_CREATED)),
        Err(err) => recover_item(err, list_id),
    }
}

pub async fn show_item(
    State(state): State<Arc<AppState>>,
    Path((list_id, item_id)): Path<(i32, i32)>,
    flash: Flash,
) -> PageResult {
    let (list, item) = match todo_service_from_state(state.as_ref())
        .require_list_and_item(list_id, item_id)
        .await
    {
        Ok(found) => found,
        Err(err) => return recover_item(err, list_id),
    };
    let chrome = Chrome::new(&flash);
    render(&ItemShowTemplate { chrome, list, item }, &flash)
}

pub async fn edit_item_form(
    State(state): State<Arc<AppState>>,
    Path((list_id, item_id)): Path<(i32, i32)>,
    flash: Flash,
) -> PageResult {
    let (list, item) = match todo_service_from_state(state.as_ref())
        .require_list_and_item(list_id, item_id)
        .await
    {
        Ok(found) => found,
        Err(err) => return recover_item(err, list_id),
    };
    render(
        &edit_form(&flash, list, item_id, item.description, None),
        &flash,
    )
}

pub async fn edit_item(
    State(state): State<Arc<AppState>>,
    Path((list_id, item_id)): Path<(i32, i32)>,
    flash: Flash,
    form: Result<Form<ItemForm>, FormRejection>,
) -> PageResult {
    let service = todo_service_from_state(state.as_ref());
    let (list, _) = match service.require_list_and_item(list_id, item_id).await {
        Ok(found) => found,
        Err(err) => return recover_item(err, list_id),
    };

    let description = submitted(form).description.unwrap_or_default();
    if required_field(Some(description.as_str())).is_err() {
        let status = Some(INVALID_DESCRIPTION.to_string());
        return render(
            &edit_form(&flash, list, item_id, description, status),
            &flash,
        );
    }

    match service.update_item(list_id, item_id, &description).await {
        Ok(_) => Ok(redirect_with_flash(
            &item_path(list_id, item_id),
            flash::ITEM_EDITED,
        )),
        Err(err) => recover_item(err, list_id),
    }
}

pub async fn confirm_delete_item(
    State(state): State<Arc<AppState>>,
    Path((list_id, item_id)): Path<(i32, i32)>,
    flash: Flash,
) -> PageResult {
    let (list, item) = match todo_service_from_state(state.as_ref())
        .require_list_and_item(list_id, item_id)
        .await
    {
        Ok(found) => found,
        Err(err) => return recover_item(err, list_id),
    };
    let template = ConfirmDeleteTemplate {
        chrome: Chrome::new(&flash),
        heading: "Delete item".to_string(),
        subject: format!("\"{}\" from \"{}\"", item.description, list.name),
        action: format!("/list/{list_id}/item/{item_id}/delete/"),
        cancel: item_path(list_id, item_id),
    };
    render(&template, &flash)
}

pub async fn delete_item(
    State(state): State<Arc<AppState>>,
    Path((list_id, item_id)): Path<(i32, i32)>,
) -> PageResult {
    match todo_service_from_state(state.as_ref())
        .delete_item(list_id, item_id)
        .await
    {
        Ok(_) => Ok(redirect_with_flash(&list_path(list_id), flash::ITEM_DELETED)),
        Err(err) => recover_item(err, list_id),
    }
}

fn create_form(
    flash: &Flash,
    list: todo_list::Model,
    description: String,
    status: Option<String>,
) -> ItemFormTemplate {
    ItemFormTemplate {
        chrome: Chrome::new(flash),
        heading: "New item".to_string(),
        action: format!("/list/{}/create/", list.id),
        cancel: list_path(list.id),
        list,
        description,
        status,
    }
}

fn edit_form(
    flash: &Flash,
    list: todo_list::Model,
    item_id: i32,
    description: String,
    status: Option<String>,
) -> ItemFormTemplate {
    ItemFormTemplate {
        chrome: Chrome::new(flash),
        heading: "Edit item".to_string(),
        action: format!("/list/{}/item/{item_id}/edit", list.id),
        cancel: item_path(list.id, item_id),
        list,
        description,
        status,
    }
}
