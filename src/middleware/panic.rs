use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tower_http::catch_panic::CatchPanicLayer;

use crate::{error::INTERNAL_ERROR, logging::panic_message, response::Envelope};

pub fn catch_panic_layer() -> CatchPanicLayer<fn(Box<dyn Any + Send + 'static>) -> Response> {
    CatchPanicLayer::custom(panic_to_envelope)
}

fn panic_to_envelope(panic: Box<dyn Any + Send + 'static>) -> Response {
    let details = panic_message(panic.as_ref());

    let client_message = if cfg!(debug_assertions) {
        format!("{INTERNAL_ERROR}: {details}")
    } else {
        INTERNAL_ERROR.to_string()
    };

    Envelope::failure(StatusCode::INTERNAL_SERVER_ERROR, client_message).into_response()
}
