use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::error::AppError;

pub type ApiResult<T> = Result<Envelope<T>, AppError>;

/// Uniform API body: `{success, content}` on success, `{success, message}` on failure.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip)]
    status: StatusCode,
}

impl<T: Serialize> Envelope<T> {
    pub fn ok(content: T) -> ApiResult<T> {
        Ok(Self {
            success: true,
            content: Some(content),
            message: None,
            status: StatusCode::OK,
        })
    }
}

impl Envelope<serde_json::Value> {
    /// Success without a payload, serialized as `{"success": true}`.
    pub fn done() -> ApiResult<serde_json::Value> {
        Ok(Self {
            success: true,
            content: None,
            message: None,
            status: StatusCode::OK,
        })
    }

    pub fn failure(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            success: false,
            content: None,
            message: Some(message.into()),
            status,
        }
    }

    pub(crate) fn from_error(err: &AppError) -> Self {
        Self::failure(status_for(err), err.message())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        Envelope::from_error(&self).into_response()
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

// Domain failures travel in the envelope; only storage faults change the status.
fn status_for(err: &AppError) -> StatusCode {
    match err {
        AppError::BadRequest(_) | AppError::NotFound(..) => StatusCode::OK,
        AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use super::Envelope;
    use crate::error::AppError;

    #[test]
    fn success_envelope_omits_message() {
        let envelope = Envelope::ok(json!({ "item_id": 3 })).expect("ok envelope");
        let value = serde_json::to_value(&envelope).expect("serialize");
        assert_eq!(value, json!({ "success": true, "content": { "item_id": 3 } }));
    }

    #[test]
    fn done_envelope_carries_only_success() {
        let envelope = Envelope::done().expect("done envelope");
        let value = serde_json::to_value(&envelope).expect("serialize");
        assert_eq!(value, json!({ "success": true }));
    }

    #[test]
    fn not_found_is_reported_in_body_with_ok_status() {
        let envelope = Envelope::from_error(&AppError::list_not_found());
        assert_eq!(envelope.status, StatusCode::OK);
        let value = serde_json::to_value(&envelope).expect("serialize");
        assert_eq!(
            value,
            json!({ "success": false, "message": "Todo list not found" })
        );
    }

    #[test]
    fn internal_errors_use_server_error_status() {
        let envelope = Envelope::from_error(&AppError::internal("boom"));
        assert_eq!(envelope.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
