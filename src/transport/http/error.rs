use crate::domain::error::ApiError;
use crate::transport::http::types::MsgResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        if self.is_bad_request() {
            StatusCode::BAD_REQUEST
        } else if self.is_not_found() {
            StatusCode::NOT_FOUND
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(source) = &self {
            // Details stay in the log; the caller only sees the generic message.
            tracing::error!(error = ?source, "unhandled error");
        }
        let status = self.status_code();
        (
            status,
            Json(MsgResponse {
                msg: self.to_string(),
            }),
        )
            .into_response()
    }
}
