use crate::domain::error::ApiError;
use crate::transport::http::router::ApiDoc;
use crate::transport::http::types::MsgResponse;
use axum::Json;
use serde_json::{json, Value as JsonValue};
use utoipa::OpenApi;

pub const GREETING: &str =
    "Connected to NC News API, please go to /api for available endpoints";

#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Greeting", body = MsgResponse))
)]
pub async fn root_handler() -> Json<MsgResponse> {
    Json(MsgResponse {
        msg: GREETING.to_string(),
    })
}

/// Describes every endpoint (the OpenAPI document under `apiData`).
#[utoipa::path(
    get,
    path = "/api",
    responses((status = 200, description = "API description"))
)]
pub async fn api_handler() -> Json<JsonValue> {
    Json(json!({ "apiData": ApiDoc::openapi() }))
}

pub async fn fallback_handler() -> ApiError {
    ApiError::RouteNotFound
}
