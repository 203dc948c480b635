//! One-shot status messages that survive a redirect.
//!
//! The message travels in a `flash` cookie set on the redirect response. The
//! next page that renders it also sends an expired cookie, so a reload does
//! not show the message twice.

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, HeaderValue, header, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};

pub const FLASH_COOKIE: &str = "flash";

pub const LIST_CREATED: &str = "New List Created Successfully";
pub const LIST_EDITED: &str = "List Edited Successfully";
pub const LIST_DELETED: &str = "List Deleted Successfully";
pub const ITEM_CREATED: &str = "New Item Created Successfully";
pub const ITEM_EDITED: &str = "Item Edited Successfully";
pub const ITEM_DELETED: &str = "Item Deleted Successfully";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flash(Option<String>);

impl Flash {
    pub fn message(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Adds the expiring cookie when a message was shown on this page.
    pub fn consume(&self, mut response: Response) -> Response {
        if self.0.is_some() {
            response.headers_mut().append(
                header::SET_COOKIE,
                HeaderValue::from_static("flash=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax"),
            );
        }
        response
    }

    fn from_headers(headers: &HeaderMap) -> Self {
        let message = headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == FLASH_COOKIE)
            .and_then(|(_, value)| decode(value));
        Self(message)
    }
}

impl<S> FromRequestParts<S> for Flash
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers))
    }
}

/// `303 See Other` to `location`, carrying `message` to the next page.
pub fn redirect_with_flash(location: &str, message: &str) -> Response {
    let mut response = Redirect::to(location).into_response();
    let cookie = format!(
        "{FLASH_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax",
        URL_SAFE_NO_PAD.encode(message)
    );
    match HeaderValue::from_str(&cookie) {
        Ok(value) => {
            response.headers_mut().append(header::SET_COOKIE, value);
        }
        Err(err) => tracing::warn!(error = %err, "dropping unencodable flash message"),
    }
    response
}

fn decode(value: &str) -> Option<String> {
    if value.is_empty() {
        return None;
    }
    let bytes = URL_SAFE_NO_PAD.decode(value).ok()?;
    String::from_utf8(bytes).ok()
}
