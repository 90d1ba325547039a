use crate::domain::error::{ApiError, ApiResult};
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Json, Query};

/// Parses a numeric path segment (`article_id`, `comment_id`).
pub fn parse_id(raw: &str) -> ApiResult<i32> {
    raw.trim().parse::<i32>().map_err(|_| ApiError::BadRequest)
}

/// Unwraps an extracted JSON body, turning any rejection into `BadRequest`.
pub fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> ApiResult<T> {
    match body {
        Ok(Json(v)) => Ok(v),
        Err(e) => {
            tracing::debug!(error = %e, "rejected JSON body");
            Err(ApiError::BadRequest)
        }
    }
}

/// Unwraps an extracted query string, turning any rejection into `BadRequest`.
pub fn query_params<T>(query: Result<Query<T>, QueryRejection>) -> ApiResult<T> {
    query.map(|Query(v)| v).map_err(|_| ApiError::BadRequest)
}
