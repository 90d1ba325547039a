use crate::domain::error::ApiResult;
use crate::transport::http::types::{AppState, MsgResponse, TopicsResponse};
use axum::extract::State;
use axum::Json;

#[utoipa::path(
    get,
    path = "/api/topics",
    responses(
        (status = 200, description = "All topics", body = TopicsResponse),
        (status = 500, description = "Internal server error", body = MsgResponse)
    )
)]
pub async fn get_topics_handler(State(state): State<AppState>) -> ApiResult<Json<TopicsResponse>> {
    let topics = state.news.list_topics().await?;
    Ok(Json(TopicsResponse { topics }))
}
