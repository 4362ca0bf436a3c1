//! HTTP mapping for `LabError`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use handlerlab_core::error::{ClientCode, LabError};

/// Handler error: a `LabError` that renders as a JSON error response.
#[derive(Debug)]
pub struct HttpError(pub LabError);

impl From<LabError> for HttpError {
    fn from(e: LabError) -> Self {
        Self(e)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let code = self.0.client_code();
        let (status, message) = match code {
            ClientCode::BadRequest => (StatusCode::BAD_REQUEST, self.0.to_string()),
            ClientCode::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, self.0.to_string()),
            ClientCode::Internal => {
                tracing::error!(error = %self.0, "request failed");
                // details stay in the log
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_string())
            }
        };
        if status.is_client_error() {
            tracing::warn!(status = status.as_u16(), error = %self.0, "request rejected");
        }

        let body = Json(json!({
            "error": code.as_str(),
            "message": message,
        }));
        (status, body).into_response()
    }
}
