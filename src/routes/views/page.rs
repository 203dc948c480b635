use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use chrono::Local;

use super::flash::{Flash, redirect_with_flash};
use crate::error::{AppError, Missing};

pub(super) type HtmlError = (StatusCode, Html<String>);
pub(super) type PageResult = Result<Response, HtmlError>;

pub(super) const LISTS_PATH: &str = "/list/";

/// Fields every page hands to `base.html`.
pub(super) struct Chrome {
    pub now: String,
    pub flash: Option<String>,
}

impl Chrome {
    pub fn new(flash: &Flash) -> Self {
        Self {
            now: Local::now().to_rfc3339(),
            flash: flash.message().map(str::to_string),
        }
    }
}

pub(super) fn render(template: &impl Template, flash: &Flash) -> PageResult {
    let rendered = template.render().map_err(|err| {
        tracing::error!(error = %err, "failed to render page");
        html_error(StatusCode::INTERNAL_SERVER_ERROR, "failed to render page")
    })?;
    Ok(flash.consume(Html(rendered).into_response()))
}

/// Not-found goes back to `location` with the message flashed; anything
/// else becomes an error page.
pub(super) fn recover(err: AppError, location: &str) -> PageResult {
    match err {
        AppError::NotFound(_, message) => Ok(redirect_with_flash(location, &message)),
        AppError::BadRequest(message) => Err((StatusCode::BAD_REQUEST, Html(message))),
        AppError::Internal(message) => Err((StatusCode::INTERNAL_SERVER_ERROR, Html(message))),
    }
}

/// Item pages fall back to the owning list, or to all lists when the list
/// itself is gone.
pub(super) fn recover_item(err: AppError, list_id: i32) -> PageResult {
    match err.missing() {
        Some(Missing::List) => recover(err, LISTS_PATH),
        _ => recover(err, &list_path(list_id)),
    }
}

pub(super) fn list_path(list_id: i32) -> String {
    format!("/list/{list_id}/")
}

pub(super) fn item_path(list_id: i32, item_id: i32) -> String {
    format!("/list/{list_id}/item/{item_id}/")
}

fn html_error(status: StatusCode, message: &'static str) -> HtmlError {
    (status, Html(message.to_string()))
}
