use crate::domain::error::ApiResult;
use crate::transport::http::handlers::common::{json_body, parse_id};
use crate::transport::http::types::{
    AppState, CommentResponse, CommentsResponse, MsgResponse, VoteUpdate,
};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

#[utoipa::path(
    get,
    path = "/api/comments",
    responses(
        (status = 200, description = "All comments", body = CommentsResponse),
        (status = 500, description = "Internal server error", body = MsgResponse)
    )
)]
pub async fn get_comments_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<CommentsResponse>> {
    let comments = state.news.list_comments().await?;
    Ok(Json(CommentsResponse { comments }))
}

#[utoipa::path(
    patch,
    path = "/api/comments/{comment_id}",
    params(("comment_id" = i32, Path, description = "Comment id")),
    request_body = VoteUpdate,
    responses(
        (status = 200, description = "Updated comment", body = CommentResponse),
        (status = 400, description = "bad request", body = MsgResponse),
        (status = 404, description = "comment not found", body = MsgResponse)
    )
)]
pub async fn patch_comment_handler(
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
    body: Result<Json<VoteUpdate>, JsonRejection>,
) -> ApiResult<Json<CommentResponse>> {
    let comment_id = parse_id(&comment_id)?;
    let update = json_body(body)?;
    let comment = state
        .news
        .alter_comment_votes(comment_id, update.inc_votes.unwrap_or(0))
        .await?;
    Ok(Json(CommentResponse { comment }))
}

#[utoipa::path(
    delete,
    path = "/api/comments/{comment_id}",
    params(("comment_id" = i32, Path, description = "Comment id")),
    responses(
        (status = 204, description = "Comment deleted"),
        (status = 400, description = "bad request", body = MsgResponse),
        (status = 404, description = "comment not found", body = MsgResponse)
    )
)]
pub async fn delete_comment_handler(
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
) -> ApiResult<StatusCode> {
    let comment_id = parse_id(&comment_id)?;
    state.news.remove_comment(comment_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
