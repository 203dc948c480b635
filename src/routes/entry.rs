use std::sync::Arc;

use axum::{Router, middleware};

use crate::{middleware::envelope_error_middleware, state::AppState};

use super::{api, views};

pub const API_PREFIX: &str = "/api";

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .nest(
            API_PREFIX,
            api::router(state.clone()).layer(middleware::from_fn(envelope_error_middleware)),
        )
        .merge(views::router(state))
}
